use anyhow::Result;
use bin2header_core::generate;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Embed a binary file in a C header
#[derive(Parser)]
#[command(
    name = "bin2header",
    about = "Convert a binary file into a C header with a byte array and size constant",
    version
)]
struct Cli {
    /// Binary file to embed
    #[arg(value_name = "input_file", allow_hyphen_values = true)]
    input: PathBuf,

    /// Header file to create or overwrite
    #[arg(value_name = "output_header.h", allow_hyphen_values = true)]
    output: PathBuf,

    /// Array identifier, uppercased for the include guard
    #[arg(value_name = "name_constant", allow_hyphen_values = true)]
    name: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let generated = generate(&cli.input, &cli.output, &cli.name)?;
    log::debug!("Include guard: {}", generated.guard);

    println!(
        "Header file '{}' generated {}.",
        generated.output.display(),
        "successfully".green()
    );

    Ok(())
}
