use anyhow::Result;
use clap::{Parser, Subcommand};

use whisperlink::cli::{
    handle_check, handle_decrypt, handle_encrypt, handle_log_command, CheckArgs, DecryptArgs,
    EncryptArgs,
};
use whisperlink::config::{paths::WhisperPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "whisper",
    version,
    about = "Password-based encryption for messages stored on public ledgers",
    long_about = "WhisperLink encrypts short text messages with AES-256-GCM under a \
                  PBKDF2-derived key and emits hex suitable for storing on an \
                  untrusted public medium."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    #[command(alias = "enc")]
    Encrypt(EncryptArgs),

    /// Decrypt a hex-encoded message
    #[command(alias = "dec")]
    Decrypt(DecryptArgs),

    /// Check whether a string is valid hex
    Check(CheckArgs),

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WhisperPaths::new()?;

    match cli.command {
        Some(Commands::Encrypt(args)) => {
            let settings = Settings::load_or_create(&paths)?;
            handle_encrypt(&paths, &settings, args)?
        }
        Some(Commands::Decrypt(args)) => {
            let settings = Settings::load_or_create(&paths)?;
            handle_decrypt(&paths, &settings, args)?
        }
        Some(Commands::Check(args)) => {
            handle_check(&paths, &Settings::load_or_default(&paths), args)?
        }
        Some(Commands::Log { limit }) => handle_log_command(&paths, limit)?,
        Some(Commands::Init) => {
            Settings::load_or_default(&paths).save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("WhisperLink Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Emit 0x prefix:       {}", settings.emit_hex_prefix);
            println!("  Audit enabled:        {}", settings.audit_enabled);
            println!("  Min password length:  {}", settings.min_password_length);
        }
        None => {
            println!("WhisperLink - password-based message encryption");
            println!();
            println!("Run 'whisper --help' for usage information.");
        }
    }

    Ok(())
}
