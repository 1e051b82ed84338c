//! Lockbox CLI - Command line interface for the vault encryption core.
//!
//! Encrypts files into self-describing record blobs, decrypts them back,
//! inspects record metadata, and offers password tooling.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use lockbox_vault::VaultEngine;

#[derive(Parser)]
#[command(name = "lockbox")]
#[command(about = "Lockbox - password-derived authenticated file encryption")]
#[command(version)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file into a record blob.
    Encrypt {
        /// File to encrypt.
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the record blob.
        #[arg(short, long)]
        output: PathBuf,

        /// MIME type recorded alongside the ciphertext.
        #[arg(short, long, default_value = "application/octet-stream")]
        mime: String,

        /// Password (prompted securely when omitted).
        #[arg(long)]
        password: Option<String>,
    },

    /// Decrypt a record blob back into a file.
    Decrypt {
        /// Record blob to decrypt.
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the plaintext.
        #[arg(short, long)]
        output: PathBuf,

        /// Password (prompted securely when omitted).
        #[arg(long)]
        password: Option<String>,
    },

    /// Show record metadata without decrypting.
    Inspect {
        /// Record blob to inspect.
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate a strong random password.
    GenPassword {
        /// Password length.
        #[arg(short, long, default_value_t = 16)]
        length: usize,
    },

    /// Score a password's strength (0-100).
    Strength {
        /// Password to score.
        password: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize logging")?;

    let engine = VaultEngine::new();

    match cli.command {
        Commands::Encrypt {
            input,
            output,
            mime,
            password,
        } => {
            let data = fs::read(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "unnamed".to_string());
            let password = resolve_password(password, true)?;

            warn_if_weak(&engine, &password);

            let record = engine.encrypt_file(&data, &name, &mime, &password)?;
            let blob = engine.export_record(&record)?;
            fs::write(&output, blob)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("Encrypted {} ({} bytes) -> {}", name, data.len(), record.id);
        }

        Commands::Decrypt {
            input,
            output,
            password,
        } => {
            let blob = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let record = engine.import_record(&blob)?;
            let password = resolve_password(password, false)?;

            let plaintext = engine.decrypt_file(&record, &password)?;
            fs::write(&output, &plaintext)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!(
                "Decrypted {} ({} bytes) -> {}",
                record.name,
                plaintext.len(),
                output.display()
            );
        }

        Commands::Inspect { input } => {
            let blob = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let record = engine.import_record(&blob)?;

            println!("id:        {}", record.id);
            println!("name:      {}", record.name);
            println!("type:      {}", record.mime_type);
            println!("size:      {} bytes", record.plain_size);
            println!("timestamp: {}", record.timestamp);
            println!("checksum:  {}", record.checksum);
        }

        Commands::GenPassword { length } => {
            let password = engine.generate_password(length)?;
            println!("{}", password);
        }

        Commands::Strength { password } => {
            let score = engine.estimate_password_strength(&password);
            println!("{}/100", score);
        }
    }

    Ok(())
}

/// Take the password from the flag or prompt for it, confirming on encrypt.
fn resolve_password(flag: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = flag {
        return Ok(password);
    }

    let password = rpassword::prompt_password("Password: ")?;
    if confirm {
        let repeat = rpassword::prompt_password("Confirm password: ")?;
        anyhow::ensure!(password == repeat, "Passwords do not match");
    }
    Ok(password)
}

fn warn_if_weak(engine: &VaultEngine, password: &str) {
    let score = engine.estimate_password_strength(password);
    if score < 40 {
        eprintln!("warning: weak password (strength {}/100)", score);
    }
}
