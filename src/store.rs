//! Script store
//!
//! Flat key-value persistence for named scripts, kept in a single
//! TOML document: a `[scripts]` table mapping script names to their
//! source text, and a `[last]` table recording the last-opened script
//! per language. Mutations write through to disk immediately; a
//! missing file is an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use toml::{Table, Value};

use crate::error::{CodepadError, Result};
use crate::highlight::LanguageId;

/// Persistent script store
pub struct ScriptStore {
    /// Backing file path
    path: PathBuf,
    /// Script name to source text
    scripts: BTreeMap<String, String>,
    /// Language name to last-opened script name
    last: BTreeMap<String, String>,
}

impl ScriptStore {
    /// Get the default store file path
    pub fn default_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codepad-scripts.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codepad-scripts.toml"))
        }
    }

    /// Open a store, loading the backing file if it exists
    pub fn open(path: PathBuf) -> Result<Self> {
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let doc: Table = contents
            .parse()
            .map_err(|e: toml::de::Error| CodepadError::StoreFormat(e.to_string()))?;

        Ok(Self {
            path,
            scripts: string_table(&doc, "scripts"),
            last: string_table(&doc, "last"),
        })
    }

    /// Get a script's source text
    pub fn get(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(|s| s.as_str())
    }

    /// Store a script, overwriting any previous content
    pub fn put(&mut self, name: &str, text: &str) -> Result<()> {
        self.scripts.insert(name.to_string(), text.to_string());
        self.save()
    }

    /// Remove a script and any last-opened reference to it
    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.scripts.remove(name).is_none() {
            return Err(CodepadError::ScriptNotFound(name.to_string()));
        }
        self.last.retain(|_, opened| opened != name);
        self.save()
    }

    /// All script names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.scripts.keys().map(|s| s.as_str()).collect()
    }

    /// Script names carrying a language's extension, sorted
    pub fn names_for(&self, language: LanguageId) -> Vec<&str> {
        self.scripts
            .keys()
            .filter(|name| name.ends_with(language.extension()))
            .map(|s| s.as_str())
            .collect()
    }

    /// Last-opened script name for a language
    pub fn last_opened(&self, language: LanguageId) -> Option<&str> {
        self.last.get(language.name()).map(|s| s.as_str())
    }

    /// Record the last-opened script for a language
    pub fn set_last_opened(&mut self, language: LanguageId, name: &str) -> Result<()> {
        self.last
            .insert(language.name().to_string(), name.to_string());
        self.save()
    }

    /// Write the store back to its file
    fn save(&self) -> Result<()> {
        let mut doc = Table::new();
        doc.insert("scripts".to_string(), Value::Table(to_table(&self.scripts)));
        doc.insert("last".to_string(), Value::Table(to_table(&self.last)));

        let contents =
            toml::to_string(&doc).map_err(|e| CodepadError::StoreFormat(e.to_string()))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Extract a table of string values, ignoring entries of other types
fn string_table(doc: &Table, key: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    if let Some(Value::Table(table)) = doc.get(key) {
        for (name, value) in table {
            if let Value::String(text) = value {
                map.insert(name.clone(), text.clone());
            }
        }
    }
    map
}

fn to_table(map: &BTreeMap<String, String>) -> Table {
    map.iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ScriptStore {
        let mut path = std::env::temp_dir();
        path.push(format!("codepad-store-test-{}-{}.toml", name, std::process::id()));
        let _ = fs::remove_file(&path);
        ScriptStore::open(path).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let store = temp_store("empty");
        assert!(store.names().is_empty());
        assert_eq!(store.get("nope.py"), None);
    }

    #[test]
    fn test_put_get_round_trip_through_file() {
        let mut store = temp_store("roundtrip");
        store.put("fib.py", "def fib(n):\n    pass\n").unwrap();
        store.put("main.cpp", "int main() {}\n").unwrap();

        // Reopen from disk
        let reopened = ScriptStore::open(store.path.clone()).unwrap();
        assert_eq!(reopened.get("fib.py"), Some("def fib(n):\n    pass\n"));
        assert_eq!(reopened.names(), vec!["fib.py", "main.cpp"]);

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_names_filtered_by_language() {
        let mut store = temp_store("filter");
        store.put("a.py", "x").unwrap();
        store.put("b.cpp", "y").unwrap();
        store.put("c.py", "z").unwrap();

        assert_eq!(store.names_for(LanguageId::Python), vec!["a.py", "c.py"]);
        assert_eq!(store.names_for(LanguageId::Cpp), vec!["b.cpp"]);
        assert!(store.names_for(LanguageId::Java).is_empty());

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_delete_unknown_script() {
        let mut store = temp_store("delete");
        let err = store.delete("ghost.py");
        assert!(matches!(err, Err(CodepadError::ScriptNotFound(_))));
    }

    #[test]
    fn test_delete_clears_last_opened() {
        let mut store = temp_store("last");
        store.put("a.py", "x").unwrap();
        store.set_last_opened(LanguageId::Python, "a.py").unwrap();
        assert_eq!(store.last_opened(LanguageId::Python), Some("a.py"));

        store.delete("a.py").unwrap();
        assert_eq!(store.last_opened(LanguageId::Python), None);

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_rejects_malformed_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("codepad-store-test-bad-{}.toml", std::process::id()));
        fs::write(&path, "not [valid toml").unwrap();

        let err = ScriptStore::open(path.clone());
        assert!(matches!(err, Err(CodepadError::StoreFormat(_))));

        let _ = fs::remove_file(&path);
    }
}
