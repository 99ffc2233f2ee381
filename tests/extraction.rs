mod common;

use common::setup_test_env;
use mod_vault::core::extraction::Extraction;
use mod_vault::core::service::VaultService;
use mod_vault::models::admission::{MetadataField, RejectReason};
use mod_vault::models::error::VaultError;
use camino::Utf8PathBuf;
use std::fs::File;
use std::io::Write;
use zip::write::SimpleFileOptions;

fn write_archive(path: &Utf8PathBuf, descriptor: Option<&str>) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    if let Some(raw) = descriptor {
        writer.start_file("mod.txt", options).unwrap();
        writer.write_all(raw.as_bytes()).unwrap();
    }

    writer.add_directory("content", options).unwrap();
    writer.add_directory("content/audio", options).unwrap();
    writer.start_file("content/audio/wind.ogg", options).unwrap();
    writer.write_all(b"oggdata").unwrap();
    writer.finish().unwrap();
}

#[test]
fn unpacked_archive_installs_end_to_end() {
    let (_tmp, root) = setup_test_env();
    let archive = root.join("package.zip");
    write_archive(
        &archive,
        Some(r#"{"name":"Zipped","author":"martes","description":"zip fixture"}"#),
    );

    let candidate = Extraction::unpack(&archive).expect("Failed to unpack");
    assert_eq!(candidate.descriptor.name, "Zipped");
    assert!(candidate.entries.contains_key("content/audio/wind.ogg"));
    assert!(candidate.entries.contains_key("content/audio/"));

    let mut vault = VaultService::open(&root).expect("Failed to open vault");
    let id = vault.install(&candidate).expect("Failed to install");

    assert!(root.join("content/audio/wind.ogg").exists());
    let record = vault.load_registry().enabled.get(&id).cloned().unwrap();
    assert_eq!(record.metadata.files, vec![Utf8PathBuf::from("audio/wind.ogg")]);
}

#[test]
fn archive_without_descriptor_fails_completeness() {
    let (_tmp, root) = setup_test_env();
    let archive = root.join("bare.zip");
    write_archive(&archive, None);

    let candidate = Extraction::unpack(&archive).expect("Failed to unpack");
    let vault = VaultService::open(&root).expect("Failed to open vault");

    assert_eq!(
        vault.validate_candidate(&candidate),
        Err(RejectReason::IncompleteMetadata(vec![
            MetadataField::Name,
            MetadataField::Author,
            MetadataField::Description,
        ]))
    );
}

#[test]
fn malformed_descriptor_is_a_parse_error() {
    let (_tmp, root) = setup_test_env();
    let archive = root.join("broken.zip");
    write_archive(&archive, Some("this is not json"));

    match Extraction::unpack(&archive) {
        Err(VaultError::ParseError(_)) => {}
        other => panic!("Expected a parse error, got: {:?}", other),
    }
}
