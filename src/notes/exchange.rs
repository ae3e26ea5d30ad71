//! Bulk notes import/export against a user-chosen directory.
//!
//! One Markdown file per chapter, named `Chapter_<number>_<name>_Notes.md`.
//! Failures are isolated per file: a bad entry is logged and skipped, the
//! rest of the batch continues, and the report counts what actually worked.

use crate::notes::store::LocalStore;
use regex::Regex;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn summary(&self, verb: &str) -> String {
        if self.failed == 0 {
            format!("{} notes for {} chapter(s)", verb, self.succeeded)
        } else {
            format!(
                "{} notes for {} chapter(s), {} failed (see log)",
                verb, self.succeeded, self.failed
            )
        }
    }
}

/// File name for one chapter's notes. Anything that would not survive a
/// filesystem path is flattened to '_'.
pub fn note_file_name(chapter_id: u32, chapter_name: &str) -> String {
    let safe: String = chapter_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("Chapter_{}_{}_Notes.md", chapter_id, safe)
}

/// Write one file per chapter that has a note. `chapter_names` maps ids to
/// display names for the file name; unknown ids fall back to "Surah".
pub fn export_notes(
    store: &LocalStore,
    chapter_names: &[(u32, String)],
    dir: &Path,
) -> Result<BatchReport, String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create notes directory {:?}: {}", dir, e))?;

    let mut report = BatchReport::default();
    for chapter_id in store.chapters_with_notes() {
        let name = chapter_names
            .iter()
            .find(|(id, _)| *id == chapter_id)
            .map(|(_, name)| name.as_str())
            .unwrap_or("Surah");
        let path = dir.join(note_file_name(chapter_id, name));
        match fs::write(&path, store.note(chapter_id)) {
            Ok(()) => {
                log::info!("exported notes for chapter {} to {}", chapter_id, path.display());
                report.succeeded += 1;
            }
            Err(e) => {
                log::warn!(
                    "failed to write notes for chapter {} to {}: {}. Continuing with the rest.",
                    chapter_id,
                    path.display(),
                    e
                );
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

/// Read every `Chapter_<number>_<name>_Notes.md` in `dir` into the store.
/// Entries that do not match the pattern are ignored silently; entries that
/// match but cannot be read or stored are counted as failures.
pub fn import_notes(store: &mut LocalStore, dir: &Path) -> Result<BatchReport, String> {
    let pattern = Regex::new(r"^Chapter_(\d+)_.+_Notes\.md$").unwrap();
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read notes directory {:?}: {}", dir, e))?;

    let mut report = BatchReport::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("unreadable directory entry in {}: {}", dir.display(), e);
                report.failed += 1;
                continue;
            }
        };
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else { continue };
        let Some(captures) = pattern.captures(name) else { continue };
        let Ok(chapter_id) = captures[1].parse::<u32>() else {
            log::warn!("skipping {}: chapter number out of range", name);
            report.failed += 1;
            continue;
        };
        let text = match fs::read_to_string(entry.path()) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("failed to read {}: {}. Continuing with the rest.", name, e);
                report.failed += 1;
                continue;
            }
        };
        match store.set_note(chapter_id, &text) {
            Ok(()) => {
                log::info!("imported notes for chapter {} from {}", chapter_id, name);
                report.succeeded += 1;
            }
            Err(e) => {
                log::warn!("failed to store notes for chapter {}: {}", chapter_id, e);
                report.failed += 1;
            }
        }
    }
    Ok(report)
}
