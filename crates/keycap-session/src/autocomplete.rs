use std::sync::mpsc;

use keycap_core::settings::settings;

use crate::services::AutocompleteResult;
use crate::KeyboardSession;

/// A provider completion tagged with the request generation it answers.
struct Completion {
    generation: u64,
    result: AutocompleteResult,
}

/// Request bookkeeping for the autocomplete provider.
///
/// Every request and every reset bumps the generation. Completions carry the
/// generation they were issued under; anything older than the current one is
/// dropped when the inbox is drained, so the last request wins and a reset
/// wins over anything still in flight.
pub struct AutocompletePipeline {
    generation: u64,
    tx: mpsc::Sender<Completion>,
    rx: mpsc::Receiver<Completion>,
}

impl AutocompletePipeline {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn invalidate(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_current(&self, completion: &Completion) -> bool {
        completion.generation == self.generation
    }
}

impl KeyboardSession {
    /// The word around the cursor, or `None` when there is nothing to
    /// complete.
    pub fn autocomplete_text(&self) -> Option<String> {
        self.proxy.current_word()
    }

    pub fn is_autocomplete_enabled(&self) -> bool {
        self.services.autocomplete_provider().is_enabled()
            && !self.proxy.is_reading_full_document_context()
    }

    /// Ask the provider for suggestions matching the current word.
    ///
    /// While the proxy is reading the full document the call is a no-op and
    /// existing suggestions are left alone. A disabled provider or an empty
    /// word clears them.
    pub fn perform_autocomplete(&mut self) {
        if self.proxy.is_reading_full_document_context() {
            tracing::debug!("autocomplete skipped: reading full document context");
            return;
        }

        let provider = self.services.autocomplete_provider();
        if !provider.is_enabled() {
            self.reset_autocomplete();
            return;
        }
        let Some(text) = self.autocomplete_text() else {
            self.reset_autocomplete();
            return;
        };

        let generation = self.pipeline.invalidate();
        let _span = tracing::debug_span!("perform_autocomplete", generation).entered();
        self.store.autocomplete.update(|c| {
            c.is_enabled = true;
            c.is_loading = true;
        });
        tracing::debug!(generation, text = %text, "autocomplete requested");

        let tx = self.pipeline.tx.clone();
        provider.autocomplete_suggestions(
            &text,
            Box::new(move |result| {
                // The receiver is gone once the session is dropped.
                let _ = tx.send(Completion { generation, result });
            }),
        );
        self.poll_autocomplete();
    }

    /// Clear suggestions and invalidate every outstanding request.
    pub fn reset_autocomplete(&mut self) {
        let generation = self.pipeline.invalidate();
        let enabled = self.services.autocomplete_provider().is_enabled();
        self.store.autocomplete.update(|c| {
            c.reset();
            c.is_enabled = enabled;
        });
        tracing::trace!(generation, "autocomplete reset");
    }

    /// Apply queued provider completions. Returns whether suggestions
    /// changed.
    pub fn poll_autocomplete(&mut self) -> bool {
        let mut applied = false;
        while let Ok(completion) = self.pipeline.rx.try_recv() {
            applied |= self.apply_completion(completion);
        }
        applied
    }

    fn apply_completion(&mut self, completion: Completion) -> bool {
        if !self.pipeline.is_current(&completion) {
            tracing::debug!(
                generation = completion.generation,
                current = self.pipeline.generation,
                "stale autocomplete result dropped"
            );
            return false;
        }
        if self.proxy.is_reading_full_document_context() {
            tracing::debug!(
                generation = completion.generation,
                "autocomplete result dropped: reading full document context"
            );
            self.store.autocomplete.update(|c| c.is_loading = false);
            return false;
        }

        match completion.result {
            Ok(mut suggestions) => {
                suggestions.truncate(settings().autocomplete.max_suggestions);
                tracing::debug!(count = suggestions.len(), "autocomplete applied");
                self.store.autocomplete.update(|c| {
                    c.suggestions = suggestions;
                    c.is_loading = false;
                    c.last_error = None;
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "autocomplete failed");
                self.store.autocomplete.update(|c| {
                    c.is_loading = false;
                    c.last_error = Some(e.to_string());
                });
            }
        }
        true
    }
}
