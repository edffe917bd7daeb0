//! Node bootstrap: ensure the on-disk secrets exist, then load them back.
//!
//! Run with: cargo run --example node_bootstrap -p peernet-keys

use peernet_keys::{KeyType, PeerIdService, SwarmKeyRecord, SwarmKeyService};

fn main() -> peernet_keys::Result<()> {
    let dir = std::env::temp_dir().join("peernet-keys-demo");
    println!("Config directory: {}\n", dir.display());

    // ── 1. First boot: no identity on disk, one is created ──────────────
    let peer_service = PeerIdService::new(&dir);
    let identity = peer_service.load_or_create(None, KeyType::Ed25519)?;
    println!("Peer ID:  {}", identity.peer_id());

    // ── 2. Second boot: the persisted identity is reused ────────────────
    let again = peer_service.load_or_create(None, KeyType::Ed25519)?;
    assert_eq!(again.peer_id(), identity.peer_id());
    println!("Reloaded: {} (unchanged)", again.peer_id());

    // ── 3. Operator provisions the network swarm key ────────────────────
    let swarm_service = SwarmKeyService::new(&dir);
    let key = match swarm_service.load(None) {
        Ok(existing) => {
            println!("\nSwarm key already provisioned ({} bytes)", existing.len());
            existing
        }
        Err(_) => {
            let fresh = swarm_service.generate_and_persist(None)?;
            println!("\nSwarm key provisioned ({} bytes)", fresh.len());
            fresh
        }
    };

    // ── 4. Inspect the swarm key structure ──────────────────────────────
    if let Some(record) = SwarmKeyRecord::parse(&key) {
        println!("Protocol: {}", record.protocol);
        println!("Encoding: {}", record.encode);
    }

    Ok(())
}
