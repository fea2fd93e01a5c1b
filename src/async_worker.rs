use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, PoisonError, RwLock};
use std::thread;

use keycap_core::context::Suggestion;
use keycap_core::locale::LocaleId;
use keycap_session::services::{AutocompleteCompletion, AutocompleteError, AutocompleteProvider};

/// Blocking suggestion lookup, run on the worker thread.
pub(crate) trait SuggestionSource: Send + Sync + 'static {
    fn is_enabled(&self) -> bool;

    fn suggestions(
        &self,
        text: &str,
        locale: &LocaleId,
    ) -> Result<Vec<Suggestion>, AutocompleteError>;
}

// ---------------------------------------------------------------------------
// Work type
// ---------------------------------------------------------------------------

struct AutocompleteWork {
    text: String,
    locale: LocaleId,
    generation: u64,
    completion: AutocompleteCompletion,
}

// ---------------------------------------------------------------------------
// AsyncAutocompleteProvider
// ---------------------------------------------------------------------------

/// Runs a blocking source off the caller's thread.
///
/// Only the newest request is looked up. Queued requests are skipped and a
/// request superseded while its lookup runs is never completed.
pub(crate) struct AsyncAutocompleteProvider {
    source: Arc<dyn SuggestionSource>,
    locale: RwLock<LocaleId>,
    work_tx: mpsc::Sender<AutocompleteWork>,
    generation: Arc<AtomicU64>,
}

impl AsyncAutocompleteProvider {
    pub fn new(source: Arc<dyn SuggestionSource>, locale: LocaleId) -> std::io::Result<Self> {
        let generation = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<AutocompleteWork>();
        {
            let source = Arc::clone(&source);
            let gen = Arc::clone(&generation);
            thread::Builder::new()
                .name("keycap-autocomplete".into())
                .spawn(move || autocomplete_worker(work_rx, gen, source))?;
        }
        Ok(Self {
            source,
            locale: RwLock::new(locale),
            work_tx,
            generation,
        })
    }
}

impl AutocompleteProvider for AsyncAutocompleteProvider {
    fn locale(&self) -> LocaleId {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_locale(&self, locale: &LocaleId) {
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale.clone();
    }

    fn is_enabled(&self) -> bool {
        self.source.is_enabled()
    }

    fn autocomplete_suggestions(&self, text: &str, completion: AutocompleteCompletion) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let work = AutocompleteWork {
            text: text.to_string(),
            locale: self.locale(),
            generation,
            completion,
        };
        if self.work_tx.send(work).is_err() {
            tracing::warn!("autocomplete worker is gone");
        }
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn autocomplete_worker(
    rx: mpsc::Receiver<AutocompleteWork>,
    gen: Arc<AtomicU64>,
    source: Arc<dyn SuggestionSource>,
) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple work items queued, skip to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        if latest.generation != gen.load(Ordering::SeqCst) {
            continue;
        }

        let result = source.suggestions(&latest.text, &latest.locale);

        if latest.generation != gen.load(Ordering::SeqCst) {
            tracing::trace!(generation = latest.generation, "autocomplete superseded");
            continue;
        }
        (latest.completion)(result);
    }
}
