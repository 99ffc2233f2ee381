use camino::Utf8PathBuf;
use indexmap::IndexMap;
use mod_vault::models::mod_meta::{CandidateDescriptor, CandidatePackage};
use tempfile::TempDir;

/// Temp data root for a vault under test. Keep the TempDir alive for the
/// duration of the test or the root disappears underneath it.
pub fn setup_test_env() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    (tmp, root)
}

/// Candidate with a complete descriptor and the given entries.
pub fn make_candidate(name: &str, files: &[(&str, &str)]) -> CandidatePackage {
    let mut entries: IndexMap<String, Vec<u8>> = IndexMap::new();
    for (path, data) in files {
        entries.insert((*path).to_string(), data.as_bytes().to_vec());
    }

    CandidatePackage {
        entries,
        descriptor: CandidateDescriptor {
            name: name.to_string(),
            author: "martes".to_string(),
            description: format!("{name} test package"),
        },
    }
}
