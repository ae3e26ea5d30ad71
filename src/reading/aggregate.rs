//! Verse aggregation: folds the raw per-translation fragment stream into one
//! ordered record per verse, with translations slotted in the user's selected
//! order.

use crate::types::api_data::TranslationFragment;
use std::collections::HashMap;

/// One verse with its translations in selection order.
///
/// `slots.len()` always equals the length of the selection the verse was
/// aggregated against; slot `i` holds the fragment for selection id `i`, or
/// `None` when the response carried nothing for that translation.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedVerse {
    pub chapter_id: u32,
    pub verse_number: u32,
    pub slots: Vec<Option<TranslationFragment>>,
}

impl AggregatedVerse {
    /// True when no selected translation produced text for this verse. Such
    /// verses still render, as a bare verse number.
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Fold fragments into per-verse records.
///
/// Grouping key insertion order determines emission order: the first fragment
/// mentioning a verse number fixes that verse's position, and no re-sorting
/// happens afterwards. Fragments whose translation id is not in `selection`
/// are dropped; duplicates for the same (verse, translation) pair resolve
/// last-seen-wins. Total over arbitrary input: never panics, never errors.
pub fn aggregate(
    chapter_id: u32,
    selection: &[String],
    fragments: impl IntoIterator<Item = TranslationFragment>,
) -> Vec<AggregatedVerse> {
    let mut verses: Vec<AggregatedVerse> = Vec::new();
    let mut position_of: HashMap<u32, usize> = HashMap::new();

    for fragment in fragments {
        let position = *position_of.entry(fragment.verse_number).or_insert_with(|| {
            verses.push(AggregatedVerse {
                chapter_id,
                verse_number: fragment.verse_number,
                slots: vec![None; selection.len()],
            });
            verses.len() - 1
        });

        match selection.iter().position(|id| *id == fragment.translation_id) {
            Some(slot) => verses[position].slots[slot] = Some(fragment),
            None => {
                log::debug!(
                    "dropping fragment for verse {} with unselected translation id {}",
                    fragment.verse_number,
                    fragment.translation_id
                );
            }
        }
    }

    verses
}
