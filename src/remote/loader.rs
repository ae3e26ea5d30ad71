//! Chapter loading off the UI thread.
//!
//! Each load forks the original-text request onto its own thread while the
//! translations request runs on the worker, joins both (first failure fails
//! the whole load), fetches the chapter metadata, and hands the aggregated
//! result back over a channel the UI polls every frame. Loads carry a
//! monotonically increasing token; a response whose token is no longer the
//! latest is dropped at the channel, so a slow stale response can never
//! overwrite a newer chapter.

use crate::reading::aggregate::{aggregate, AggregatedVerse};
use crate::remote::client::{ApiClient, ApiError};
use crate::types::api_data::{ChapterInfo, ChapterSummary, OriginalVerse, DEFAULT_TRANSLATION_ID};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct LoadedChapter {
    pub chapter_id: u32,
    pub meta: ChapterInfo,
    pub original_verses: Vec<OriginalVerse>,
    pub aggregated_verses: Vec<AggregatedVerse>,
    /// The selection the load actually ran with (the built-in default when
    /// the caller's selection was empty).
    pub selection: Vec<String>,
}

pub enum LoadEvent {
    ChapterDirectory(Result<Vec<ChapterSummary>, ApiError>),
    Chapter {
        token: u64,
        result: Box<Result<LoadedChapter, ApiError>>,
    },
}

pub struct ChapterLoader {
    client: Arc<ApiClient>,
    tx: Sender<LoadEvent>,
    rx: Receiver<LoadEvent>,
    latest_token: u64,
}

impl ChapterLoader {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (tx, rx) = channel();
        ChapterLoader {
            client,
            tx,
            rx,
            latest_token: 0,
        }
    }

    /// The selection a load runs with: never empty.
    pub fn effective_selection(selection: &[String]) -> Vec<String> {
        if selection.is_empty() {
            vec![DEFAULT_TRANSLATION_ID.to_string()]
        } else {
            selection.to_vec()
        }
    }

    /// Fetch the chapter directory for the selector, off-thread.
    pub fn fetch_chapter_directory(&self, ctx: egui::Context) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = client.chapters();
            let _ = tx.send(LoadEvent::ChapterDirectory(result));
            ctx.request_repaint();
        });
    }

    /// Kick off a chapter load. Returns the token issued for it and the
    /// effective selection, so the caller can persist a substituted default.
    pub fn start_load(
        &mut self,
        chapter_id: u32,
        selection: &[String],
        ctx: egui::Context,
    ) -> (u64, Vec<String>) {
        self.latest_token += 1;
        let token = self.latest_token;
        let selection = Self::effective_selection(selection);

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let worker_selection = selection.clone();
        thread::spawn(move || {
            let result = load_chapter(&client, chapter_id, &worker_selection);
            let _ = tx.send(LoadEvent::Chapter {
                token,
                result: Box::new(result),
            });
            ctx.request_repaint();
        });

        (token, selection)
    }

    /// Next pending event, with stale chapter responses dropped here so the
    /// UI only ever sees the latest load's outcome.
    pub fn poll(&mut self) -> Option<LoadEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(LoadEvent::Chapter { token, .. }) if token != self.latest_token => {
                    log::info!(
                        "dropping stale chapter response (token {}, latest {})",
                        token,
                        self.latest_token
                    );
                    continue;
                }
                Ok(event) => return Some(event),
                Err(_) => return None,
            }
        }
    }
}

fn load_chapter(
    client: &Arc<ApiClient>,
    chapter_id: u32,
    selection: &[String],
) -> Result<LoadedChapter, ApiError> {
    // Fork-join: original text on its own thread, translations here. Both
    // must resolve before anything downstream happens.
    let original_client = Arc::clone(client);
    let original_handle = thread::spawn(move || original_client.original_verses(chapter_id));

    let fragments_result = client.translation_fragments(chapter_id, selection);
    let original_result = match original_handle.join() {
        Ok(result) => result,
        Err(_) => Err(ApiError::Malformed {
            url: format!("quran/verses/uthmani?chapter_number={}", chapter_id),
            detail: "original-text worker panicked".to_string(),
        }),
    };

    let original_verses = original_result?;
    let fragments = fragments_result?;
    let meta = client.chapter_info(chapter_id)?;

    let aggregated_verses = aggregate(chapter_id, selection, fragments);
    Ok(LoadedChapter {
        chapter_id,
        meta,
        original_verses,
        aggregated_verses,
        selection: selection.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> ChapterLoader {
        ChapterLoader::new(Arc::new(ApiClient::new("http://127.0.0.1:1")))
    }

    fn chapter_event(token: u64) -> LoadEvent {
        LoadEvent::Chapter {
            token,
            result: Box::new(Err(ApiError::NoVerses)),
        }
    }

    #[test]
    fn empty_selection_substitutes_the_default() {
        assert_eq!(ChapterLoader::effective_selection(&[]), vec![DEFAULT_TRANSLATION_ID]);
    }

    #[test]
    fn non_empty_selection_passes_through_in_order() {
        let selection = vec!["149".to_string(), "131".to_string()];
        assert_eq!(ChapterLoader::effective_selection(&selection), selection);
    }

    #[test]
    fn stale_tokens_are_dropped_newest_is_delivered() {
        let mut loader = loader();
        loader.latest_token = 3;
        loader.tx.send(chapter_event(1)).unwrap();
        loader.tx.send(chapter_event(2)).unwrap();
        loader.tx.send(chapter_event(3)).unwrap();

        match loader.poll() {
            Some(LoadEvent::Chapter { token, .. }) => assert_eq!(token, 3),
            _ => panic!("expected the latest chapter event"),
        }
        assert!(loader.poll().is_none());
    }

    #[test]
    fn directory_events_are_never_filtered() {
        let mut loader = loader();
        loader.latest_token = 7;
        loader
            .tx
            .send(LoadEvent::ChapterDirectory(Ok(Vec::new())))
            .unwrap();
        assert!(matches!(
            loader.poll(),
            Some(LoadEvent::ChapterDirectory(_))
        ));
    }

    #[test]
    fn tokens_increase_monotonically() {
        let mut loader = loader();
        let ctx = egui::Context::default();
        let (first, _) = loader.start_load(1, &[], ctx.clone());
        let (second, selection) = loader.start_load(2, &["149".to_string()], ctx);
        assert!(second > first);
        assert_eq!(selection, vec!["149".to_string()]);
    }
}
