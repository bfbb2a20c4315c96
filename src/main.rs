use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pdfcipher::cli::{handle_cipher_command, handle_config_command, TargetArgs};
use pdfcipher::config::{KeyLength, PdfCipherPaths, Settings};
use pdfcipher::services::Action;

#[derive(Parser)]
#[command(
    name = "pdfcipher",
    version,
    about = "Encrypt and decrypt PDF files with password protection",
    long_about = "pdfcipher encrypts or decrypts PDF files in place using qpdf. \
                  Directories are searched recursively for PDF files. The password \
                  is asked once (twice when encrypting) and asked again for any \
                  file where it is rejected."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Path to the qpdf executable
    #[arg(long, global = true, env = "PDFCIPHER_QPDF", value_name = "PATH")]
    qpdf: Option<PathBuf>,

    /// AES key length for encryption
    #[arg(long, global = true, value_enum)]
    key_length: Option<KeyLength>,

    /// Give up on a file after this many rejected passwords
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_attempts: Option<u32>,

    /// Process files even if they are already in the target state
    #[arg(long, global = true)]
    force: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt PDF files
    #[command(alias = "encrypt")]
    Enc(TargetArgs),

    /// Decrypt PDF files
    #[command(alias = "decrypt")]
    Dec(TargetArgs),

    /// Show current configuration and paths
    Config {
        /// Write a default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = PdfCipherPaths::new()?;
    let mut settings = Settings::load_or_default(&paths)
        .with_context(|| format!("loading {}", paths.settings_file().display()))?;
    apply_overrides(&mut settings, &cli.global);

    match cli.command {
        Commands::Enc(args) => {
            handle_cipher_command(Action::Encrypt, &settings, &args)?;
        }
        Commands::Dec(args) => {
            handle_cipher_command(Action::Decrypt, &settings, &args)?;
        }
        Commands::Config { init } => {
            handle_config_command(&paths, &settings, init)?;
        }
    }

    Ok(())
}

fn apply_overrides(settings: &mut Settings, global: &GlobalArgs) {
    if let Some(qpdf) = &global.qpdf {
        settings.qpdf_path = Some(qpdf.clone());
    }
    if let Some(key_length) = global.key_length {
        settings.key_length = key_length;
    }
    if let Some(max) = global.max_attempts {
        settings.max_password_attempts = Some(max);
    }
    if global.force {
        settings.skip_processed = false;
    }
}
