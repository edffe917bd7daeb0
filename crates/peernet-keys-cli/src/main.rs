//! peernet-keys CLI, the `pnkeys` command.
//!
//! Generates and inspects the two secrets a private peernet node keeps on
//! disk: the peer identity (`.peerId`) and the network swarm key
//! (`.swarmKey`).

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use peernet_keys::{
    swarm_key_to_text, KeyType, PeerIdService, PeerIdentity, StoredPeerIdentity, SwarmKeyRecord,
    SwarmKeyService, DEFAULT_CONFIG_DIR,
};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Manage the peer identity and swarm key files of a peernet node.
#[derive(Parser, Debug)]
#[command(
    name = "pnkeys",
    about = "Peer identity and swarm key tool",
    version
)]
struct Cli {
    /// Directory holding the default key files
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage the peer identity file
    PeerId {
        #[command(subcommand)]
        subcommand: PeerIdCommands,
    },

    /// Manage the swarm key file
    SwarmKey {
        #[command(subcommand)]
        subcommand: SwarmKeyCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PeerIdCommands {
    /// Generate a new peer identity and write it to disk
    Generate {
        /// Output file (default: {config-dir}/.peerId)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Key algorithm: ed25519 or secp256k1
        #[arg(long, default_value = "ed25519")]
        key_type: String,
    },

    /// Display the peer identity stored on disk
    Show {
        /// File to read (default: {config-dir}/.peerId)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum SwarmKeyCommands {
    /// Generate a new swarm key and write it to disk
    Generate {
        /// Output file (default: {config-dir}/.swarmKey)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display the swarm key stored on disk
    Show {
        /// File to read (default: {config-dir}/.swarmKey)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config_dir = cli.config_dir;
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::PeerId { subcommand } => match subcommand {
            PeerIdCommands::Generate { output, key_type } => {
                cmd_peer_id_generate(&config_dir, output.as_deref(), &key_type)
            }
            PeerIdCommands::Show { file } => {
                cmd_peer_id_show(&config_dir, file.as_deref(), verbose)
            }
        },
        Commands::SwarmKey { subcommand } => match subcommand {
            SwarmKeyCommands::Generate { output } => {
                cmd_swarm_key_generate(&config_dir, output.as_deref())
            }
            SwarmKeyCommands::Show { file } => {
                cmd_swarm_key_show(&config_dir, file.as_deref(), verbose)
            }
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

const REPORT_RULE: &str = "------------------------------------------------------------";

/// `pnkeys peer-id generate [--output PATH] [--key-type TYPE]`
fn cmd_peer_id_generate(config_dir: &Path, output: Option<&Path>, key_type: &str) -> Result<()> {
    let key_type = parse_key_type(key_type)?;

    let service = PeerIdService::new(config_dir);
    let identity = service
        .generate_and_persist(output, key_type)
        .context("failed to generate peer identity")?;

    let path = service.store().resolve_path(output);
    log::debug!("peer identity written to {}", path.display());

    let record = StoredPeerIdentity::from_identity(&identity)
        .context("failed to encode generated identity")?;
    print_peer_id_report(&path, &record)?;
    print_identity_summary(&identity);

    Ok(())
}

/// `pnkeys peer-id show [--file PATH]`
fn cmd_peer_id_show(config_dir: &Path, file: Option<&Path>, verbose: bool) -> Result<()> {
    let service = PeerIdService::new(config_dir);
    let path = service.store().resolve_path(file);

    let record = service
        .store()
        .load_record(file)
        .context("failed to read peer identity file")?;
    print_peer_id_report(&path, &record)?;

    // Reconstruct the key material so a corrupt file is reported even
    // though its record printed fine.
    match record.to_identity() {
        Ok(identity) => {
            println!("  Key material: valid");
            if verbose {
                print_identity_summary(&identity);
            }
        }
        Err(e) => println!("  Key material: INVALID ({e})"),
    }

    Ok(())
}

/// `pnkeys swarm-key generate [--output PATH]`
fn cmd_swarm_key_generate(config_dir: &Path, output: Option<&Path>) -> Result<()> {
    let service = SwarmKeyService::new(config_dir);
    let key = service
        .generate_and_persist(output)
        .context("failed to generate swarm key")?;

    let path = service.store().resolve_path(output);
    log::debug!("swarm key written to {}", path.display());

    print_swarm_key_report(&path, &key)?;
    Ok(())
}

/// `pnkeys swarm-key show [--file PATH]`
fn cmd_swarm_key_show(config_dir: &Path, file: Option<&Path>, verbose: bool) -> Result<()> {
    let service = SwarmKeyService::new(config_dir);
    let path = service.store().resolve_path(file);

    let key = service.load(file).context("failed to read swarm key file")?;
    print_swarm_key_report(&path, &key)?;

    if verbose {
        match SwarmKeyRecord::parse(&key) {
            Some(record) => {
                println!("  Protocol: {}", record.protocol);
                println!("  Encoding: {}", record.encode);
                println!("  Key:      {} characters", record.key.len());
            }
            None => println!("  Structure: INVALID (expected 3 non-empty lines)"),
        }
    }

    Ok(())
}

// ── Report helpers ────────────────────────────────────────────────────────────

fn print_peer_id_report(path: &Path, record: &StoredPeerIdentity) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;

    println!("peerId in file {}:", path.display());
    println!("{REPORT_RULE}");
    println!("{json}");
    println!("{REPORT_RULE}");
    Ok(())
}

fn print_swarm_key_report(path: &Path, key: &[u8]) -> Result<()> {
    let text = swarm_key_to_text(key)
        .ok_or_else(|| anyhow!("swarm key at {} is not valid text", path.display()))?;

    println!("swarmKey in file {}:", path.display());
    println!("{REPORT_RULE}");
    println!("{text}");
    println!("{REPORT_RULE}");
    Ok(())
}

fn print_identity_summary(identity: &PeerIdentity) {
    println!("  Peer ID: {}", identity.peer_id());
    if let Some(key_type) = identity.key_type() {
        println!("  Type:    {key_type}");
    }
}

// ── Parsing helpers ───────────────────────────────────────────────────────────

fn parse_key_type(s: &str) -> Result<KeyType> {
    match s.to_lowercase().as_str() {
        "ed25519" => Ok(KeyType::Ed25519),
        "secp256k1" => Ok(KeyType::Secp256k1),
        other => Err(anyhow!(
            "unknown key type: '{other}'. Use: ed25519, secp256k1"
        )),
    }
}
