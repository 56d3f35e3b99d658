use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use std::path::PathBuf;

use toxsave::crypto::{Nospam, PrivateKey, PublicKey};
use toxsave::types::{Name, Profile, StatusMessage};

mod util;

use util::{setup_panic_hook, setup_tracing};

/// Write a new, empty messenger profile around an existing key
/// pair. Load the result in a client to fetch DHT nodes, add
/// friends and so on.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Hex-encoded 32-byte public key
    public_key: String,
    /// Hex-encoded 32-byte private key
    private_key: String,
    /// Display name, at most 32 bytes of UTF-8
    name: String,
    /// Where to write the profile
    out_file: PathBuf,

    /// Status message stored in the profile
    #[arg(
        long,
        value_name = "TEXT",
        default_value = toxsave::DEFAULT_STATUS_MESSAGE
    )]
    status_message: String,

    /// Hex-encoded 4-byte nospam [default: random]
    #[arg(long, value_name = "HEX")]
    nospam: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    // validate every input before anything touches the disk
    fn profile(&self) -> Result<Profile> {
        let public_key = PublicKey::from_hex(&self.public_key)?;
        let private_key = PrivateKey::from_hex(&self.private_key)?;
        let name = Name::new(&self.name)?;
        let status_message =
            StatusMessage::new(&self.status_message)?;

        let profile = match &self.nospam {
            Some(nospam) => Profile::new(
                Nospam::from_hex(nospam)?,
                public_key,
                private_key,
                name,
                status_message,
            ),
            None => Profile::with_random_nospam(
                &mut rand::thread_rng(),
                public_key,
                private_key,
                name,
                status_message,
            ),
        };

        debug!("Public key: {}", public_key);
        Ok(profile)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_tracing(cli.log_file.as_deref())?;
    setup_panic_hook();

    let profile = cli.profile()?;

    profile.write_to_file(&cli.out_file).with_context(|| {
        format!("Failed to write {}", cli.out_file.display())
    })?;

    info!(
        "Profile written to {} ({} bytes)",
        cli.out_file.display(),
        profile.encoded_len()
    );
    Ok(())
}
