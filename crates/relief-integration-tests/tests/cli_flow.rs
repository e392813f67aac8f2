//! # CLI Flow
//!
//! The file-based path a deployment takes: generate keys, sign both
//! attestations, assemble a witness, prove it, and replay the claim in a
//! simulated chain. Every artifact goes through a real file on disk.

use relief_cli::attest::{run_attest, AttestArgs, AttestCommand};
use relief_cli::claim::{run_prove, run_witness, ProveArgs, WitnessArgs};
use relief_cli::keys::{read_public_key, write_keypair};
use relief_cli::simulate::{simulate, Expectation, Scenario, ScenarioStep};
use relief_core::Amount;
use relief_crypto::Ed25519KeyPair;
use relief_runtime::{RuntimeCall, RuntimeConfig};
use relief_zkp::ClaimProof;

#[test]
fn keys_to_payout() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();

    let keys = [
        ("admin", 100u8),
        ("disaster", 1),
        ("phone", 2),
        ("victim", 3),
        ("setup", 4),
    ];
    for (name, seed) in keys {
        write_keypair(base, name, &Ed25519KeyPair::from_seed(&[seed; 32])).unwrap();
    }

    let disaster = AttestArgs {
        command: AttestCommand::Disaster {
            key: "disaster.key".into(),
            disaster_id: 11,
            session_id: 12,
            amount: 250,
            salt: 13,
            out: Some(base.join("disaster.json")),
        },
    };
    assert_eq!(run_attest(&disaster, base).unwrap(), 0);

    let phone = AttestArgs {
        command: AttestCommand::Phone {
            key: "phone.key".into(),
            session_id: 12,
            phone: "+15550100".to_string(),
            salt: 14,
            out: Some(base.join("phone.json")),
        },
    };
    assert_eq!(run_attest(&phone, base).unwrap(), 0);

    let witness = WitnessArgs {
        disaster: "disaster.json".into(),
        phone: "phone.json".into(),
        beneficiary: "victim.key".into(),
        out: Some(base.join("witness.json")),
    };
    assert_eq!(run_witness(&witness, base).unwrap(), 0);

    let prove = ProveArgs {
        witness: "witness.json".into(),
        proving_key: "setup.key".into(),
        out: Some(base.join("claim.json")),
    };
    assert_eq!(run_prove(&prove, base).unwrap(), 0);

    let claim: ClaimProof =
        serde_json::from_str(&std::fs::read_to_string(base.join("claim.json")).unwrap()).unwrap();
    let admin = read_public_key(&base.join("admin.pub")).unwrap();
    let victim = read_public_key(&base.join("victim.pub")).unwrap();
    assert_eq!(claim.public_output.beneficiary, victim);

    let ok = Some(Expectation {
        status: true,
        message: None,
    });
    let scenario = Scenario {
        proof_setup_seed: "04".repeat(32),
        blocks: vec![
            vec![
                ScenarioStep {
                    sender: admin,
                    call: RuntimeCall::SetAdmin,
                    expect: ok.clone(),
                },
                ScenarioStep {
                    sender: admin,
                    call: RuntimeCall::SetupPublicKeys {
                        disaster: read_public_key(&base.join("disaster.pub")).unwrap(),
                        identity: read_public_key(&base.join("phone.pub")).unwrap(),
                    },
                    expect: ok.clone(),
                },
            ],
            vec![
                ScenarioStep {
                    sender: victim,
                    call: RuntimeCall::Claim {
                        proof: claim.clone(),
                    },
                    expect: ok,
                },
                ScenarioStep {
                    sender: victim,
                    call: RuntimeCall::Claim { proof: claim },
                    expect: Some(Expectation {
                        status: false,
                        message: Some("Nullifier has already been used".to_string()),
                    }),
                },
            ],
        ],
    };

    let report = simulate(&scenario, RuntimeConfig::default()).unwrap();
    assert!(report.mismatches.is_empty(), "{:?}", report.mismatches);
    assert_eq!(report.chain.balance_of(&admin), Amount::new(750));
    assert_eq!(report.chain.balance_of(&victim), Amount::new(250));
}

#[test]
fn claim_proved_with_other_setup_is_unverified() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    for (name, seed) in [("disaster", 1u8), ("phone", 2), ("victim", 3), ("setup", 4)] {
        write_keypair(base, name, &Ed25519KeyPair::from_seed(&[seed; 32])).unwrap();
    }
    run_attest(
        &AttestArgs {
            command: AttestCommand::Disaster {
                key: "disaster.key".into(),
                disaster_id: 1,
                session_id: 2,
                amount: 3,
                salt: 4,
                out: Some(base.join("d.json")),
            },
        },
        base,
    )
    .unwrap();
    run_attest(
        &AttestArgs {
            command: AttestCommand::Phone {
                key: "phone.key".into(),
                session_id: 2,
                phone: "5".to_string(),
                salt: 6,
                out: Some(base.join("p.json")),
            },
        },
        base,
    )
    .unwrap();
    run_witness(
        &WitnessArgs {
            disaster: "d.json".into(),
            phone: "p.json".into(),
            beneficiary: "victim.key".into(),
            out: Some(base.join("w.json")),
        },
        base,
    )
    .unwrap();
    run_prove(
        &ProveArgs {
            witness: "w.json".into(),
            proving_key: "setup.key".into(),
            out: Some(base.join("c.json")),
        },
        base,
    )
    .unwrap();
    let claim: ClaimProof =
        serde_json::from_str(&std::fs::read_to_string(base.join("c.json")).unwrap()).unwrap();

    let admin = Ed25519KeyPair::from_seed(&[100u8; 32]).public_key();
    let scenario = Scenario {
        // Not the seed in setup.key.
        proof_setup_seed: "05".repeat(32),
        blocks: vec![vec![
            ScenarioStep {
                sender: admin,
                call: RuntimeCall::SetAdmin,
                expect: None,
            },
            ScenarioStep {
                sender: admin,
                call: RuntimeCall::SetupPublicKeys {
                    disaster: claim.public_output.disaster_oracle_key,
                    identity: claim.public_output.identity_oracle_key,
                },
                expect: None,
            },
            ScenarioStep {
                sender: admin,
                call: RuntimeCall::Claim { proof: claim },
                expect: Some(Expectation {
                    status: false,
                    message: Some("Claim proof is not verified".to_string()),
                }),
            },
        ]],
    };
    let report = simulate(&scenario, RuntimeConfig::default()).unwrap();
    assert!(report.mismatches.is_empty(), "{:?}", report.mismatches);
}
