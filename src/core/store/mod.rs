use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::utils::Result;

pub const DEFAULT_STORE_PATH: &str = "overrides3.json";

/// JSON object on disk mapping a nyaa key to its formatted title.
/// Every write re-reads the file, merges, and rewrites it in full.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    path: PathBuf,
}

impl OverrideStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current overrides. A missing file or anything that is not a JSON
    /// object is treated as an empty store.
    pub fn load(&self) -> Result<Map<String, Value>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                debug!("'{}' is not a JSON object, starting empty", self.path.display());
                Ok(Map::new())
            }
            Err(e) => {
                debug!("Ignoring unreadable '{}': {}", self.path.display(), e);
                Ok(Map::new())
            }
        }
    }

    /// Insert or replace `key`, keeping every other entry. Returns the replaced value.
    pub fn upsert(&self, key: &str, title: &str) -> Result<Option<Value>> {
        let mut data = self.load()?;
        let previous = data.insert(key.to_string(), Value::String(title.to_string()));

        fs::write(&self.path, serde_json::to_string_pretty(&data)?)?;

        match &previous {
            Some(old) => info!("Replaced override '{}': {} -> '{}'", key, old, title),
            None => debug!("Added override '{}' -> '{}'", key, title),
        }
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::utils::Error;

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = OverrideStore::new(dir.path().join(DEFAULT_STORE_PATH));

        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.upsert("key1", "Title A").unwrap(), None);
        assert_eq!(read_json(store.path()), json!({"key1": "Title A"}));
    }

    #[test]
    fn keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, r#"{"a":"1"}"#).unwrap();

        OverrideStore::new(&path).upsert("b", "2").unwrap();
        assert_eq!(read_json(&path), json!({"a": "1", "b": "2"}));
    }

    #[test]
    fn same_pair_twice_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let store = OverrideStore::new(dir.path().join("overrides.json"));

        store.upsert("k", "Show S01 SZNJD-G").unwrap();
        let first = read_json(store.path());
        let previous = store.upsert("k", "Show S01 SZNJD-G").unwrap();

        assert_eq!(previous, Some(json!("Show S01 SZNJD-G")));
        assert_eq!(read_json(store.path()), first);
    }

    #[test]
    fn last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = OverrideStore::new(dir.path().join("overrides.json"));

        store.upsert("k", "old").unwrap();
        store.upsert("k", "new").unwrap();
        assert_eq!(read_json(store.path()), json!({"k": "new"}));
    }

    #[test]
    fn malformed_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_STORE_PATH);
        fs::write(&path, r#"{"truncated": "val"#).unwrap();

        let store = OverrideStore::new(&path);
        assert!(store.load().unwrap().is_empty());
        store.upsert("key1", "Title A").unwrap();
        assert_eq!(read_json(&path), json!({"key1": "Title A"}));
    }

    #[test]
    fn non_object_json_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        OverrideStore::new(&path).upsert("k", "v").unwrap();
        assert_eq!(read_json(&path), json!({"k": "v"}));
    }

    #[test]
    fn writes_two_space_indent_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = OverrideStore::new(dir.path().join("overrides.json"));

        store.upsert("z", "1").unwrap();
        store.upsert("a", "2").unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "{\n  \"z\": \"1\",\n  \"a\": \"2\"\n}"
        );
    }

    #[test]
    fn keeps_order_and_non_string_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, r#"{"a": 1, "b": {"x": true}}"#).unwrap();

        let store = OverrideStore::new(&path);
        store.upsert("c", "3").unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(data["a"], json!(1));
        assert_eq!(data["b"], json!({"x": true}));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"a\": 1,\n  \"b\": {\n    \"x\": true\n  },\n  \"c\": \"3\"\n}"
        );
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = OverrideStore::new(dir.path());

        assert!(matches!(store.load(), Err(Error::Io(_))));
        assert!(matches!(store.upsert("k", "v"), Err(Error::Io(_))));
    }
}
