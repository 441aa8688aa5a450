//! The minipas compiler CLI.
//!
//! This binary compiles one source file to one MEPA output file and
//! delegates the stage-by-stage pipeline to the driver module.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the minipas compiler.
#[derive(Parser)]
#[command(name = "minipas")]
#[command(
    about = "Compiles a small Pascal-like language to MEPA stack-machine assembly",
    long_about = None
)]
struct Cli {
    /// The source file to compile.
    input: String,

    /// Output path for the generated MEPA assembly.
    output: String,

    /// Print the annotated syntax tree after semantic analysis.
    ///
    /// Declared as a counted short flag so the traditional `-pp` spelling
    /// parses (as two repetitions), alongside `-p` and `--pp`.
    #[arg(short = 'p', long = "pp", action = clap::ArgAction::Count)]
    pretty_print: u8,
}

/// Entry point for the minipas compiler.
fn main() {
    let cli = Cli::parse();
    let exit_code = driver::run(&cli.input, &cli.output, cli.pretty_print > 0);
    std::process::exit(exit_code);
}
