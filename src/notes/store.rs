//! Persistent key-value store: per-chapter notes and user preferences.
//!
//! One JSON file, rewritten on every mutation. The input event itself is the
//! only debounce, so a crash never loses more than the keystroke in flight.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct StoreData {
    #[serde(default)]
    chapter_notes: HashMap<u32, String>,
    #[serde(default)]
    translation_selection: Vec<String>,
    #[serde(default)]
    last_chapter: Option<u32>,
    #[serde(default)]
    notes_dir_name: Option<String>,
}

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    data: StoreData,
}

impl LocalStore {
    /// Open the store at `path`, or start empty when the file does not exist
    /// yet. A present-but-unreadable file is an error; the caller decides
    /// whether to start fresh over it.
    pub fn open(path: PathBuf) -> Result<Self, String> {
        if !path.exists() {
            return Ok(LocalStore {
                path,
                data: StoreData::default(),
            });
        }
        let file = File::open(&path)
            .map_err(|e| format!("Failed to open store file at {:?}: {}", path, e))?;
        let data: StoreData = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("Failed to parse store file at {:?}: {}", path, e))?;
        Ok(LocalStore { path, data })
    }

    /// Fresh empty store; any save will overwrite whatever sits at `path`.
    pub fn fresh(path: PathBuf) -> Self {
        LocalStore {
            path,
            data: StoreData::default(),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("tadabbur").join("store.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create store directory {:?}: {}", parent, e))?;
        }
        let file = File::create(&self.path)
            .map_err(|e| format!("Failed to create store file at {:?}: {}", self.path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.data)
            .map_err(|e| format!("Failed to serialize store to {:?}: {}", self.path, e))?;
        Ok(())
    }

    pub fn note(&self, chapter_id: u32) -> String {
        self.data
            .chapter_notes
            .get(&chapter_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_note(&mut self, chapter_id: u32, text: &str) -> Result<(), String> {
        if text.is_empty() {
            self.data.chapter_notes.remove(&chapter_id);
        } else {
            self.data.chapter_notes.insert(chapter_id, text.to_string());
        }
        self.persist()
    }

    /// Chapter ids with a note, ascending.
    pub fn chapters_with_notes(&self) -> Vec<u32> {
        let mut chapters: Vec<u32> = self.data.chapter_notes.keys().copied().collect();
        chapters.sort_unstable();
        chapters
    }

    pub fn translation_selection(&self) -> &[String] {
        &self.data.translation_selection
    }

    pub fn set_translation_selection(&mut self, selection: Vec<String>) -> Result<(), String> {
        self.data.translation_selection = selection;
        self.persist()
    }

    pub fn last_chapter(&self) -> Option<u32> {
        self.data.last_chapter
    }

    pub fn set_last_chapter(&mut self, chapter_id: u32) -> Result<(), String> {
        self.data.last_chapter = Some(chapter_id);
        self.persist()
    }

    pub fn notes_dir_name(&self) -> Option<&str> {
        self.data.notes_dir_name.as_deref()
    }

    pub fn set_notes_dir_name(&mut self, name: &str) -> Result<(), String> {
        self.data.notes_dir_name = Some(name.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::open(dir.path().join("store.json")).unwrap()
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.note(1), "");
        assert!(store.translation_selection().is_empty());
        assert_eq!(store.last_chapter(), None);
    }

    #[test]
    fn notes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        {
            let mut store = LocalStore::open(path.clone()).unwrap();
            store.set_note(2, "reflections on verse 255").unwrap();
            store.set_last_chapter(2).unwrap();
        }
        let reopened = LocalStore::open(path).unwrap();
        assert_eq!(reopened.note(2), "reflections on verse 255");
        assert_eq!(reopened.last_chapter(), Some(2));
    }

    #[test]
    fn selection_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        {
            let mut store = LocalStore::open(path.clone()).unwrap();
            store
                .set_translation_selection(vec!["149".into(), "131".into(), "19".into()])
                .unwrap();
        }
        let reopened = LocalStore::open(path).unwrap();
        assert_eq!(reopened.translation_selection(), ["149", "131", "19"]);
    }

    #[test]
    fn empty_note_removes_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_note(3, "draft").unwrap();
        store.set_note(3, "").unwrap();
        assert!(store.chapters_with_notes().is_empty());
    }

    #[test]
    fn chapters_with_notes_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_note(114, "x").unwrap();
        store.set_note(1, "y").unwrap();
        store.set_note(36, "z").unwrap();
        assert_eq!(store.chapters_with_notes(), vec![1, 36, 114]);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        assert!(LocalStore::open(path).is_err());
    }
}
