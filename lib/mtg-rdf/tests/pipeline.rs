use assert_fs::prelude::*;
use assert_fs::TempDir;
use mtg_rdf::config::PipelineConfig;
use mtg_rdf::extract::ExtractOutcome;
use mtg_rdf::pipeline::{Pipeline, Stage, Stages};
use mtg_rdf::{MtgRdfError, Url};
use predicates::prelude::*;
use std::fs;
use std::io::Write;

const META: &str = r#"{"meta": {"date": "2024-06-01", "version": "5.2.2"}, "data": {"date": "2024-06-01", "version": "5.2.2"}}"#;

const ALL_PRINTINGS: &str = r#"{
    "meta": {"date": "2024-06-01", "version": "5.2.2"},
    "data": {
        "LEA": {
            "code": "LEA",
            "name": "Limited Edition Alpha",
            "releaseDate": "1993-08-05",
            "type": "core",
            "cards": [
                {
                    "uuid": "bolt-lea",
                    "name": "Lightning Bolt",
                    "setCode": "LEA",
                    "manaCost": "{R}",
                    "manaValue": 1.0,
                    "type": "Instant",
                    "types": ["Instant"],
                    "text": "Lightning Bolt deals 3 damage to any target.",
                    "colors": ["R"],
                    "colorIdentity": ["R"],
                    "rarity": "common",
                    "number": "161",
                    "identifiers": {"scryfallId": "e3285e6b", "multiverseId": "209"}
                },
                {
                    "name": "Broken Printing",
                    "setCode": "LEA"
                }
            ]
        },
        "10E": {
            "code": "10E",
            "name": "Tenth Edition",
            "cards": [
                {
                    "uuid": "bears-10e",
                    "name": "Grizzly Bears",
                    "type": "Creature — Bear",
                    "types": ["Creature"],
                    "subtypes": ["Bear"],
                    "power": "2",
                    "toughness": "2",
                    "colors": ["G"]
                }
            ]
        }
    }
}"#;

fn bz2(content: &str) -> Vec<u8> {
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

/// Publishes the MTGJSON files in `remote` and returns a configuration that stores the local copy
/// in `local`.
fn offline_config(remote: &TempDir, local: &TempDir) -> PipelineConfig {
    remote.child("Meta.json").write_str(META).unwrap();
    remote
        .child("AllPrintings.json.bz2")
        .write_binary(&bz2(ALL_PRINTINGS))
        .unwrap();
    PipelineConfig {
        source_url: Url::from_file_path(remote.child("AllPrintings.json.bz2").path()).unwrap(),
        meta_url: Url::from_file_path(remote.child("Meta.json").path()).unwrap(),
        ..PipelineConfig::new(local.path())
    }
}

#[tokio::test]
async fn ingest_from_local_archive() {
    let remote = TempDir::new().unwrap();
    let local = TempDir::new().unwrap();
    let config = offline_config(&remote, &local);

    let report = Pipeline::new(&config).run(Stages::ALL).await.unwrap();

    assert!(matches!(
        report.extract,
        Some(ExtractOutcome::Downloaded { .. })
    ));
    let stats = report.transform.unwrap();
    assert_eq!(stats.sets, 2);
    assert_eq!(stats.cards, 2);
    assert_eq!(stats.skipped, 1);

    local.child("AllPrintings.json").assert(ALL_PRINTINGS);
    local.child("Meta.json").assert(META);
    local
        .child("mtg-rdf.ttl")
        .assert(predicate::str::contains("\"Lightning Bolt\""))
        .assert(predicate::str::contains("\"Grizzly Bears\""))
        .assert(predicate::str::contains("\"Limited Edition Alpha\""))
        .assert(predicate::str::contains("\"scryfallId:e3285e6b\""))
        .assert(predicate::str::contains("Broken Printing").not());
}

#[tokio::test]
async fn second_extraction_is_skipped() {
    let remote = TempDir::new().unwrap();
    let local = TempDir::new().unwrap();
    let config = offline_config(&remote, &local);
    let extract_only = Stages {
        extract: true,
        transform: false,
    };

    Pipeline::new(&config).run(extract_only).await.unwrap();
    let report = Pipeline::new(&config).run(extract_only).await.unwrap();

    assert_eq!(
        report.extract,
        Some(ExtractOutcome::UpToDate {
            date: "2024-06-01".to_owned()
        })
    );
    assert_eq!(report.transform, None);
}

#[tokio::test]
async fn transformation_is_deterministic() {
    let remote = TempDir::new().unwrap();
    let local = TempDir::new().unwrap();
    let config = offline_config(&remote, &local);
    let transform_only = Stages {
        extract: false,
        transform: true,
    };
    local.child("AllPrintings.json").write_str(ALL_PRINTINGS).unwrap();

    Pipeline::new(&config).run(transform_only).await.unwrap();
    let first = fs::read(local.child("mtg-rdf.ttl").path()).unwrap();
    Pipeline::new(&config).run(transform_only).await.unwrap();
    let second = fs::read(local.child("mtg-rdf.ttl").path()).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn transform_without_input_fails() {
    let local = TempDir::new().unwrap();
    let config = PipelineConfig::new(local.path());
    let transform_only = Stages {
        extract: false,
        transform: true,
    };

    let error = Pipeline::new(&config).run(transform_only).await.unwrap_err();

    assert_eq!(error.stage, Stage::Transform);
    assert!(matches!(error.source, MtgRdfError::MissingInput { .. }));
    assert_eq!(error.to_string(), "The transform stage failed");
}

#[tokio::test]
async fn extract_failure_stops_pipeline() {
    let remote = TempDir::new().unwrap();
    let local = TempDir::new().unwrap();
    let config = PipelineConfig {
        source_url: Url::from_file_path(remote.child("missing.json.bz2").path()).unwrap(),
        ..offline_config(&remote, &local)
    };

    let error = Pipeline::new(&config).run(Stages::ALL).await.unwrap_err();

    assert_eq!(error.stage, Stage::Extract);
    local.child("mtg-rdf.ttl").assert(predicate::path::missing());
}

#[test]
fn no_stage_selected() {
    assert!(Stages::default().is_empty());
    assert!(!Stages::ALL.is_empty());
}
