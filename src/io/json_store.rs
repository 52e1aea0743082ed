//! JSON file persistence for the transaction collection
//!
//! The whole collection is stored as one pretty-printed JSON array:
//!
//! ```json
//! [
//!     {
//!         "UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a",
//!         "valor": 12.34,
//!         "categoria": "food"
//!     }
//! ]
//! ```
//!
//! # Write Semantics
//!
//! `save` always replaces the entire file. Data is first written to a sibling
//! `<name>.tmp` file and then renamed over the target, so a later `load` sees
//! either the previous content or the new content, never a partial write.
//!
//! # Error Handling
//!
//! - Missing file: `FileNotFound` (the caller decides whether to seed)
//! - Content that is not a strict array of records: `CorruptStore`
//! - Any other read or write problem: `IoFailure`

use crate::core::traits::Persistence;
use crate::types::{LedgerError, Transaction};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const INDENT: &[u8] = b"    ";

/// Load every transaction stored at `path`, in file order
///
/// # Errors
///
/// - `FileNotFound` if `path` does not exist
/// - `CorruptStore` if the content is not valid UTF-8 JSON matching the record shape
/// - `IoFailure` for any other read error
pub fn load(path: &Path) -> Result<Vec<Transaction>, LedgerError> {
    let location = path.display().to_string();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LedgerError::file_not_found(&location))
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(LedgerError::corrupt_store(&location, e.to_string()))
        }
        Err(e) => return Err(LedgerError::io_failure(&location, e)),
    };

    let records: Vec<Transaction> = serde_json::from_str(&content)
        .map_err(|e| LedgerError::corrupt_store(&location, e.to_string()))?;

    debug!(path = %location, count = records.len(), "loaded transactions");
    Ok(records)
}

/// Replace the content of `path` with `records`
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Returns `IoFailure` if serialization, the temporary write or the final
/// rename fails. The previous file content is left untouched in that case.
pub fn save(path: &Path, records: &[Transaction]) -> Result<(), LedgerError> {
    let location = path.display().to_string();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LedgerError::io_failure(&location, e))?;
    }

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    records
        .serialize(&mut serializer)
        .map_err(|e| LedgerError::io_failure(&location, e))?;

    let tmp = temp_path(path);
    if let Err(e) = write_file(&tmp, &buffer).and_then(|_| fs::rename(&tmp, path)) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            if cleanup.kind() != ErrorKind::NotFound {
                warn!(path = %tmp.display(), error = %cleanup, "could not remove temporary file");
            }
        }
        return Err(LedgerError::io_failure(&location, e));
    }

    debug!(path = %location, count = records.len(), "saved transactions");
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// A JSON data file used as the store's persistence backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFile {
    fn load(&self) -> Result<Vec<Transaction>, LedgerError> {
        load(&self.path)
    }

    fn save(&mut self, records: &[Transaction]) -> Result<(), LedgerError> {
        save(&self.path, records)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategorySet;
    use rstest::rstest;
    use tempfile::TempDir;

    fn sample() -> Vec<Transaction> {
        let categories = CategorySet::new(["food", "fuel"]);
        vec![
            Transaction::create("12.34", "food", &categories).unwrap(),
            Transaction::create("100", "fuel", &categories).unwrap(),
            Transaction::create("0,5", "Food", &categories).unwrap(),
        ]
    }

    #[test]
    fn test_save_then_load_preserves_order_and_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.json");
        let records = sample();

        save(&path, &records).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_then_save_reproduces_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.json");
        fs::write(
            &path,
            r#"[{"UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a", "valor": 849.03, "categoria": "food"},
                {"UUID": "6f1d2c3b-4a5e-4f60-8172-93a4b5c6d7e8", "valor": 1, "categoria": "fuel"}]"#,
        )
        .unwrap();

        let first = load(&path).unwrap();
        save(&path, &first).unwrap();
        let second = load(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second[0].amount().to_string(), "849.03");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("transactions.json");

        save(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.json");

        save(&path, &sample()[..1]).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("[\n    {\n        \"UUID\": "));
    }

    #[test]
    fn test_save_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.json");

        save(&path, &[]).unwrap();

        assert_eq!(load(&path).unwrap(), Vec::<Transaction>::new());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let result = load(&path);

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[rstest]
    #[case::not_json("this is not json")]
    #[case::object_instead_of_array(r#"{"UUID": "x"}"#)]
    #[case::missing_category(r#"[{"UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a", "valor": 1.0}]"#)]
    #[case::wrong_type(r#"[{"UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a", "valor": true, "categoria": "food"}]"#)]
    #[case::truncated(r#"[{"UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a", "valor": 1.0,"#)]
    fn test_load_corrupt_content(#[case] content: &str) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.json");
        fs::write(&path, content).unwrap();

        let result = load(&path);

        assert!(matches!(result, Err(LedgerError::CorruptStore { .. })));
    }

    #[test]
    fn test_save_into_file_parent_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("transactions.json");

        let result = save(&path, &sample());

        assert!(matches!(result, Err(LedgerError::IoFailure { .. })));
    }

    #[test]
    fn test_json_file_backend() {
        let dir = TempDir::new().unwrap();
        let mut backend = JsonFile::new(dir.path().join("transactions.json"));
        let records = sample();

        backend.save(&records).unwrap();

        assert_eq!(backend.load().unwrap(), records);
        assert!(backend.location().ends_with("transactions.json"));
    }
}
