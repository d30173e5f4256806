use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logo_overlay::{overlay_file, Background, OverlayOptions, Placement, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(
    name = "logo-overlay",
    about = "Insert a small logo into an image, filtering out the logo's background",
    version,
    after_help = "Example: logo-overlay --inputImage photo.jpg --logoImage logo.png \
                  --logoPosition bottomright --background white"
)]
struct Cli {
    /// Path to the image that has to be processed
    #[arg(long = "inputImage", value_name = "PATH")]
    input_image: PathBuf,

    /// Logo file to include in the input image
    #[arg(long = "logoImage", value_name = "PATH")]
    logo_image: PathBuf,

    /// Where the logo goes: topleft, topright, bottomleft or bottomright
    #[arg(long = "logoPosition", value_name = "POSITION", default_value = "topleft")]
    logo_position: String,

    /// Name of the generated image
    #[arg(long = "outputFilename", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output_filename: PathBuf,

    /// Background color under the logo: black or white
    #[arg(long, value_name = "COLOR", default_value = "white")]
    background: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let placement: Placement = match cli.logo_position.parse() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let background: Background = match cli.background.parse() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let opts = OverlayOptions {
        placement,
        background,
    };

    if let Err(e) = overlay_file(&cli.input_image, &cli.logo_image, &cli.output_filename, &opts) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    if !cli.quiet {
        eprintln!("[OK] {}", cli.output_filename.display());
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
