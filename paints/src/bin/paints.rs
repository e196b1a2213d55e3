// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `paints` prints the 256-color palette, renders gradients, and strips SGR sequences
//! from text.

use std::io::{Read, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::IntoDiagnostic;
use paints::{Color, ColorSupport, decolor, global_color_support, gradient,
             gradient_legend, gradient_swatch, level_filter_from_verbosity, palette_row,
             try_initialize_logging_global};

#[derive(Debug, Parser)]
#[command(bin_name = "paints")]
#[command(about = "🎨 Terminal colors, paints, and gradients")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "When to use color; `auto` examines the terminal and environment"
    )]
    pub color: ColorChoice,

    #[arg(
        global = true,
        long,
        short = 'v',
        action = clap::ArgAction::Count,
        help = "Log to stderr; repeat for more detail"
    )]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🌈 Print every entry of the 256-color palette with its RGB value")]
    Palette,

    #[clap(
        about = "🌅 Print the colors between two colors\n💡 Eg: `paints gradient 39 214 --steps 4`"
    )]
    Gradient {
        #[arg(help = "Start color: palette index, `#RRGGBB`, or `r,g,b`")]
        from: Color,
        #[arg(help = "End color: palette index, `#RRGGBB`, or `r,g,b`")]
        to: Color,
        #[arg(long, short = 'n', help = "Number of colors, at least 2")]
        steps: Option<usize>,
    },

    #[clap(about = "🧽 Copy stdin to stdout without SGR color sequences")]
    Decolor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Truecolor,
    Ansi256,
    Grayscale,
    Never,
}

impl ColorChoice {
    fn apply(self) {
        match self {
            ColorChoice::Auto => global_color_support::clear_override(),
            ColorChoice::Truecolor => global_color_support::set_override(ColorSupport::Truecolor),
            ColorChoice::Ansi256 => global_color_support::set_override(ColorSupport::Ansi256),
            ColorChoice::Grayscale => global_color_support::set_override(ColorSupport::Grayscale),
            ColorChoice::Never => global_color_support::set_override(ColorSupport::NoColor),
        }
    }
}

fn main() -> miette::Result<()> {
    // If no args are passed, help is printed thanks to `arg_required_else_help(true)`.
    let cli_arg = CLIArg::parse();

    if cli_arg.global_options.verbose > 0 {
        try_initialize_logging_global(level_filter_from_verbosity(
            cli_arg.global_options.verbose,
        ))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    cli_arg.global_options.color.apply();
    let support = global_color_support::detect();
    tracing::info!(?support, "rendering");

    let mut stdout = std::io::stdout().lock();
    match cli_arg.command {
        CLICommand::Palette => {
            for index in 0..=u8::MAX {
                writeln!(stdout, "{}", palette_row(index, support)).into_diagnostic()?;
            }
        }
        CLICommand::Gradient { from, to, steps } => {
            let steps = gradient(from, to, steps)?;
            writeln!(stdout, "{}", gradient_swatch(&steps, support)).into_diagnostic()?;
            for line in gradient_legend(&steps, support) {
                writeln!(stdout, "{line}").into_diagnostic()?;
            }
        }
        CLICommand::Decolor => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .into_diagnostic()?;
            stdout
                .write_all(decolor(&input).as_bytes())
                .into_diagnostic()?;
        }
    }

    stdout.flush().into_diagnostic()
}
