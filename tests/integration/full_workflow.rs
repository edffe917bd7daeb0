//! Integration test: the full key-provisioning workflow.
//!
//! Tests the complete lifecycle for both secrets:
//! 1. Generate a peer identity, persist it, load it back
//! 2. Boot again and reuse the persisted identity
//! 3. Provision a swarm key and load it back byte-for-byte
//! 4. Decode an RSA identity file produced by another implementation

use peernet_keys::{
    KeyType, KeystoreError, PeerIdService, PeerIdStore, StoredPeerIdentity, SwarmKeyRecord,
    SwarmKeyService,
};

#[test]
fn full_workflow_identity_and_swarm_key() {
    let dir = tempfile::tempdir().unwrap();

    // ── Step 1: First boot, nothing on disk ─────────────────────────────
    let peer_service = PeerIdService::new(dir.path());
    assert!(peer_service.load_or_none(None).is_none());

    let identity = peer_service
        .load_or_create(None, KeyType::Ed25519)
        .expect("Bootstrap should create an identity");
    assert!(identity.is_complete());
    assert!(
        dir.path().join(".peerId").exists(),
        "Identity should be persisted at the default path"
    );

    // ── Step 2: Second boot reuses the persisted identity ───────────────
    let rebooted = PeerIdService::new(dir.path());
    let reloaded = rebooted
        .load_or_create(None, KeyType::Ed25519)
        .expect("Reload should succeed");
    assert_eq!(
        reloaded.peer_id(),
        identity.peer_id(),
        "Second boot must reuse the persisted identity"
    );

    // ── Step 3: Operator provisions the network swarm key ───────────────
    let swarm_service = SwarmKeyService::new(dir.path());
    assert!(matches!(
        swarm_service.load(None),
        Err(KeystoreError::NotFound(_))
    ));

    let key = swarm_service
        .generate_and_persist(None)
        .expect("Swarm key provisioning should succeed");
    let loaded = swarm_service.load(None).expect("Swarm key load failed");
    assert_eq!(loaded, key, "Swarm key bytes must round-trip exactly");

    let record = SwarmKeyRecord::parse(&loaded).expect("Swarm key should parse");
    assert_eq!(record.protocol, "/key/swarm/psk/1.0.0/");
    assert_eq!(record.encode, "/base16/");
    assert_eq!(record.key.len(), 64);
}

#[test]
fn workflow_identity_file_readable_at_both_levels() {
    let dir = tempfile::tempdir().unwrap();
    let service = PeerIdService::new(dir.path());

    let identity = service
        .generate_and_persist(None, KeyType::Secp256k1)
        .expect("Persist should succeed");

    // The same file reads back as a raw record and as a full identity.
    let record = service
        .store()
        .load_record(None)
        .expect("Record load should succeed");
    assert_eq!(record.id, identity.peer_id().to_base58());

    let decoded = record.to_identity().expect("Decode should succeed");
    assert_eq!(decoded.peer_id(), identity.peer_id());
    assert_eq!(decoded.key_type(), Some(KeyType::Secp256k1));
}

#[test]
fn workflow_rsa_identity_from_another_implementation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".peerId");
    std::fs::write(&path, include_str!("../fixtures/rsa_peer_id.json")).unwrap();

    let store = PeerIdStore::new(dir.path());

    let record = store.load_record(Some(&path)).expect("Record load failed");
    assert!(
        record.id.starts_with("Qm"),
        "RSA peer ids are sha2-256 multihashes"
    );

    let identity = store.load(Some(&path)).expect("RSA identity should decode");
    assert_eq!(identity.key_type(), Some(KeyType::RSA));
    assert!(identity.is_complete());
    assert_eq!(identity.peer_id().to_base58(), record.id);

    // The provider can not export RSA private keys, so re-encoding is
    // rejected rather than silently writing a broken file.
    let result = StoredPeerIdentity::from_identity(&identity);
    assert!(matches!(result, Err(KeystoreError::EncodingFailed(_))));
}

#[test]
fn workflow_corrupt_files_never_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".peerId");
    let service = PeerIdService::new(dir.path());

    let corruptions: &[&[u8]] = &[
        b"",
        b"not json at all",
        br#"{"id": "x"}"#,
        br#"{"id": "", "privKey": "a", "pubKey": "b"}"#,
        br#"{"id": "QmX", "privKey": "!!!", "pubKey": "!!!"}"#,
        &[0xff, 0xfe, 0x00],
    ];

    for content in corruptions {
        std::fs::write(&path, content).unwrap();
        assert!(
            service.load(Some(&path)).is_err(),
            "Corrupt content {:?} must not load",
            String::from_utf8_lossy(content)
        );
        assert!(service.load_or_none(Some(&path)).is_none());
    }
}
