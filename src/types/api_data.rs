//! Record types for the quran.com v4 API responses.
//!
//! Every response shape the app consumes is declared here explicitly, so a
//! missing required field fails at the decode boundary instead of leaking
//! into rendering.

use serde::{Deserialize, Serialize};

/// Substituted whenever the user has no translation selected.
pub const DEFAULT_TRANSLATION_ID: &str = "131";

/// Built-in translation offering, in catalog display order.
pub const TRANSLATION_CATALOG: &[(&str, &str)] = &[
    ("131", "MAS Abdel Haleem"),
    ("149", "Saheeh International"),
    ("19", "Tafheem-ul-Quran (Urdu)"),
    ("22", "Abdul Majid Daryabadi"),
    ("85", "Mufti Taqi Usmani"),
];

/// Display name for a translation id, falling back to the id itself for
/// ids outside the built-in catalog.
pub fn translation_name(id: &str) -> &str {
    TRANSLATION_CATALOG
        .iter()
        .find(|(catalog_id, _)| *catalog_id == id)
        .map(|(_, name)| *name)
        .unwrap_or(id)
}

// --- GET /chapters ---

#[derive(Deserialize, Debug, Clone)]
pub struct ChaptersResponse {
    pub chapters: Vec<ChapterSummary>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChapterSummary {
    pub id: u32,
    pub name_simple: String,
    pub translated_name: TranslatedName,
    #[serde(default)]
    pub verses_count: u32,
}

impl ChapterSummary {
    /// Selector label, matching the original "1. Al-Fatihah (The Opener)" form.
    pub fn selector_label(&self) -> String {
        format!("{}. {} ({})", self.id, self.name_simple, self.translated_name.name)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct TranslatedName {
    pub name: String,
}

// --- GET /chapters/{n} ---

#[derive(Deserialize, Debug, Clone)]
pub struct ChapterResponse {
    pub chapter: ChapterInfo,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChapterInfo {
    pub id: u32,
    pub name_arabic: String,
    pub name_simple: String,
    #[serde(default)]
    pub verses_count: u32,
}

// --- GET /quran/verses/uthmani ---

#[derive(Deserialize, Debug, Clone)]
pub struct UthmaniResponse {
    pub verses: Vec<RawUthmaniVerse>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawUthmaniVerse {
    /// "chapter:verse", e.g. "2:255".
    pub verse_key: String,
    /// May be empty; an empty original text is absence, not an error.
    #[serde(default)]
    pub text_uthmani: String,
}

impl RawUthmaniVerse {
    pub fn into_original(self) -> Result<OriginalVerse, String> {
        let verse_number = verse_number_from_key(&self.verse_key)
            .ok_or_else(|| format!("unparseable verse_key '{}'", self.verse_key))?;
        Ok(OriginalVerse {
            verse_number,
            text: self.text_uthmani,
        })
    }
}

/// Original-script verse once its key has been resolved to a local number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OriginalVerse {
    pub verse_number: u32,
    pub text: String,
}

pub fn verse_number_from_key(key: &str) -> Option<u32> {
    key.split(':').nth(1)?.trim().parse().ok()
}

// --- GET /verses/by_chapter/{n} ---

#[derive(Deserialize, Debug, Clone)]
pub struct TranslationsResponse {
    pub verses: Vec<RawTranslatedVerse>,
}

/// One verse record; the API folds all requested translations for a verse
/// into a single record, in no guaranteed order.
#[derive(Deserialize, Debug, Clone)]
pub struct RawTranslatedVerse {
    pub verse_number: u32,
    #[serde(default)]
    pub translations: Vec<RawTranslation>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawTranslation {
    pub resource_id: u64,
    pub text: String,
}

impl RawTranslatedVerse {
    /// Flatten this record into per-translation fragments.
    pub fn fragments(&self) -> impl Iterator<Item = TranslationFragment> + '_ {
        self.translations.iter().map(|translation| TranslationFragment {
            verse_number: self.verse_number,
            translation_id: translation.resource_id.to_string(),
            text: translation.text.clone(),
        })
    }
}

/// Raw (verse, translation, text) unit, the aggregator's input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TranslationFragment {
    pub verse_number: u32,
    pub translation_id: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chapter_directory() {
        let body = r#"{"chapters":[
            {"id":1,"name_simple":"Al-Fatihah","verses_count":7,
             "translated_name":{"name":"The Opener"}},
            {"id":2,"name_simple":"Al-Baqarah","verses_count":286,
             "translated_name":{"name":"The Cow"}}
        ]}"#;
        let parsed: ChaptersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.chapters.len(), 2);
        assert_eq!(parsed.chapters[0].selector_label(), "1. Al-Fatihah (The Opener)");
        assert_eq!(parsed.chapters[1].verses_count, 286);
    }

    #[test]
    fn rejects_directory_without_chapters_field() {
        let body = r#"{"data":[]}"#;
        assert!(serde_json::from_str::<ChaptersResponse>(body).is_err());
    }

    #[test]
    fn parses_verse_key() {
        assert_eq!(verse_number_from_key("2:255"), Some(255));
        assert_eq!(verse_number_from_key("1:1"), Some(1));
        assert_eq!(verse_number_from_key("255"), None);
        assert_eq!(verse_number_from_key("2:x"), None);
    }

    #[test]
    fn uthmani_verse_resolves_number_and_keeps_empty_text() {
        let raw = RawUthmaniVerse {
            verse_key: "3:7".to_string(),
            text_uthmani: String::new(),
        };
        let verse = raw.into_original().unwrap();
        assert_eq!(verse.verse_number, 7);
        assert!(verse.text.is_empty());
    }

    #[test]
    fn uthmani_verse_with_bad_key_is_rejected() {
        let raw = RawUthmaniVerse {
            verse_key: "garbage".to_string(),
            text_uthmani: "text".to_string(),
        };
        assert!(raw.into_original().is_err());
    }

    #[test]
    fn translated_record_flattens_to_fragments() {
        let body = r#"{"verses":[
            {"verse_number":1,"translations":[
                {"resource_id":131,"text":"In the name of God"},
                {"resource_id":149,"text":"In the name of Allah"}
            ]}
        ]}"#;
        let parsed: TranslationsResponse = serde_json::from_str(body).unwrap();
        let fragments: Vec<_> = parsed.verses[0].fragments().collect();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].translation_id, "131");
        assert_eq!(fragments[1].verse_number, 1);
    }

    #[test]
    fn catalog_lookup_falls_back_to_id() {
        assert_eq!(translation_name("149"), "Saheeh International");
        assert_eq!(translation_name("9999"), "9999");
    }
}
