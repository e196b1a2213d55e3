// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use super::Lerp;

/// Fixed arity numeric vector. The arity is part of the type, so elementwise operations
/// between vectors of different lengths do not compile.
///
/// ```rust
/// use paints::Vector;
///
/// let v1 = Vector([1_i64, 2, 3]);
/// let v2 = Vector([4_i64, 5, 6]);
/// assert_eq!(v1 + v2, Vector([5, 7, 9]));
/// assert_eq!(v1 * 2, Vector([2, 4, 6]));
/// assert_eq!(2 + v1, Vector([3, 4, 5]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T: Copy, const N: usize> Vector<T, N> {
    #[must_use]
    pub const fn new(items: [T; N]) -> Self { Self(items) }

    #[must_use]
    pub fn map<U>(self, fn_map: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(fn_map))
    }

    #[must_use]
    pub fn zip_with<U: Copy, V>(
        self,
        other: Vector<U, N>,
        mut fn_zip: impl FnMut(T, U) -> V,
    ) -> Vector<V, N> {
        Vector(std::array::from_fn(|i| fn_zip(self.0[i], other.0[i])))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(items: [T; N]) -> Self { Self(items) }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self { vector.0 }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T { &self.0[index] }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.0[index] }
}

mod elementwise_ops {
    use super::{Add, Mul, Sub, Vector};

    impl<T: Copy + Add<Output = T>, const N: usize> Add for Vector<T, N> {
        type Output = Self;

        fn add(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a + b) }
    }

    impl<T: Copy + Sub<Output = T>, const N: usize> Sub for Vector<T, N> {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a - b) }
    }

    impl<T: Copy + Mul<Output = T>, const N: usize> Mul for Vector<T, N> {
        type Output = Self;

        fn mul(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a * b) }
    }
}

/// Scalar forms, in both operand orders where the operation commutes.
macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {$(
        impl<const N: usize> Add<$scalar> for Vector<$scalar, N> {
            type Output = Self;
            fn add(self, rhs: $scalar) -> Self { self.map(|it| it + rhs) }
        }

        impl<const N: usize> Add<Vector<$scalar, N>> for $scalar {
            type Output = Vector<$scalar, N>;
            fn add(self, rhs: Vector<$scalar, N>) -> Self::Output { rhs + self }
        }

        impl<const N: usize> Sub<$scalar> for Vector<$scalar, N> {
            type Output = Self;
            fn sub(self, rhs: $scalar) -> Self { self.map(|it| it - rhs) }
        }

        impl<const N: usize> Mul<$scalar> for Vector<$scalar, N> {
            type Output = Self;
            fn mul(self, rhs: $scalar) -> Self { self.map(|it| it * rhs) }
        }

        impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
            type Output = Vector<$scalar, N>;
            fn mul(self, rhs: Vector<$scalar, N>) -> Self::Output { rhs * self }
        }
    )*};
}

impl_scalar_ops!(i64, f64);

impl<const N: usize> Div<f64> for Vector<f64, N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self { self.map(|it| it / rhs) }
}

/// Integer division rounds toward negative infinity.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl<const N: usize> Div<i64> for Vector<i64, N> {
    type Output = Self;

    fn div(self, rhs: i64) -> Self { self.map(|it| it.div_euclid(rhs)) }
}

impl<const N: usize> Lerp for Vector<f64, N> {
    fn lerp(self, other: Self, t: f64) -> Self {
        self.zip_with(other, |a, b| a.lerp(b, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, lerp};

    #[test]
    fn test_vector_arithmetic() {
        let v1 = Vector([1_i64, 2, 3]);
        let v2 = Vector::from([4_i64, 5, 6]);

        assert_eq2!(v1 + 2, Vector([3, 4, 5]));
        assert_eq2!(2 + v1, Vector([3, 4, 5]));
        assert_eq2!(v1 + v2, Vector([5, 7, 9]));

        assert_eq2!(v1 - 2, Vector([-1, 0, 1]));
        assert_eq2!(v1 - v2, Vector([-3, -3, -3]));

        assert_eq2!(v1 * 2, Vector([2, 4, 6]));
        assert_eq2!(2 * v1, Vector([2, 4, 6]));
        assert_eq2!(v1 * v2, Vector([4, 10, 18]));

        assert_eq2!(v1 / 2, Vector([0, 1, 1]));
        assert_eq2!(Vector([-3_i64]) / 2, Vector([-2]));
    }

    #[test]
    fn test_vector_float_division() {
        let v1 = Vector([1.0, 2.0, 3.0]);
        assert_eq2!(v1 / 2.0, Vector([0.5, 1.0, 1.5]));
    }

    #[test]
    fn test_vector_map_and_index() {
        let mut v1 = Vector([1_i64, 2, 3]);
        assert_eq2!(v1.map(|it| it * 10), Vector([10, 20, 30]));

        v1[0] = 7;
        assert_eq2!(v1[0], 7);
        assert_eq2!(v1.iter().copied().max(), Some(7));
        assert_eq2!(<[i64; 3]>::from(v1), [7, 2, 3]);
    }

    #[test]
    fn test_vector_lerp() {
        let v1 = Vector([1.0, 2.0, 3.0]);
        let v2 = Vector([4.0, 5.0, 6.0]);

        assert_eq2!(lerp(v1, v2, 0.0), v1);
        assert_eq2!(lerp(v1, v2, 0.5), Vector([2.5, 3.5, 4.5]));
        assert_eq2!(lerp(v1, v2, 1.0), v2);
        assert_eq2!(lerp(v1, v2, 2.0), Vector([7.0, 8.0, 9.0]));
    }
}
