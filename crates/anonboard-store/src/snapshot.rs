// ABOUTME: Atomic snapshot save and load for the on-disk message log.
// ABOUTME: Writes the full log with temp-file + fsync + rename so a crash never tears the file.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anonboard_core::Message;

use crate::store::StoreError;

/// Write the full message log to the snapshot path, replacing any prior
/// contents. The data goes to `<path>.tmp` first, is fsynced, and is then
/// renamed over the snapshot path, so a crash mid-write leaves either the old
/// or the new snapshot intact.
pub fn write_snapshot(path: &Path, messages: &[Message]) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("json.tmp");

    let json = serde_json::to_string(messages)?;

    let mut file = File::create(&tmp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp_path, path)?;

    // Fsync the parent directory to ensure the rename metadata is durable.
    // Best-effort: if the fsync fails, the rename already succeeded and the
    // data is consistent.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Load the message log from the snapshot path. Returns None if the file does
/// not exist. An unparseable file is a corrupt snapshot, never silently
/// discarded.
pub fn load_snapshot(path: &Path) -> Result<Option<Vec<Message>>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let messages: Vec<Message> =
        serde_json::from_str(&contents).map_err(|source| StoreError::CorruptSnapshot {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Some(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn make_messages(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| Message::new(format!("message {}", i), Utc::now()))
            .collect()
    }

    #[test]
    fn snapshot_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        let messages = make_messages(3);

        write_snapshot(&path, &messages).unwrap();

        let loaded = load_snapshot(&path).unwrap().expect("should find snapshot");
        assert_eq!(loaded, messages);
    }

    #[test]
    fn load_returns_none_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let result = load_snapshot(&path).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn write_replaces_prior_contents_in_full() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");

        write_snapshot(&path, &make_messages(5)).unwrap();
        let shorter = make_messages(2);
        write_snapshot(&path, &shorter).unwrap();

        let loaded = load_snapshot(&path).unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded, shorter);
    }

    #[test]
    fn stale_tmp_file_does_not_corrupt_committed_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        let messages = make_messages(2);

        write_snapshot(&path, &messages).unwrap();

        // Simulate a crash that left a truncated temp file behind
        fs::write(path.with_extension("json.tmp"), r#"[{"text":"half"#).unwrap();

        let loaded = load_snapshot(&path).unwrap().unwrap();
        assert_eq!(loaded, messages);
    }

    #[test]
    fn load_fails_loudly_on_corrupt_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(&path, "not json at all").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, StoreError::CorruptSnapshot { .. }));
        assert!(err.to_string().contains("messages.json"));
    }

    #[test]
    fn empty_log_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");

        write_snapshot(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        let loaded = load_snapshot(&path).unwrap().unwrap();
        assert!(loaded.is_empty());
    }
}
