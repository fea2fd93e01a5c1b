mod autocomplete;
mod registry;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use keycap_core::context::{ColorScheme, Suggestion};
use keycap_core::locale::LocaleId;
use keycap_core::proxy::{Autocapitalization, KeyboardAppearance, TextProxy};

use crate::services::{AutocompleteCompletion, AutocompleteProvider, AutocompleteResult};
use crate::{KeyboardHost, KeyboardSession};

/// In-memory document with the cursor between `before` and `after`.
pub(super) struct MockProxy {
    pub before: Mutex<Option<String>>,
    pub after: Mutex<Option<String>>,
    pub reading_full_document: AtomicBool,
    pub appearance: Mutex<KeyboardAppearance>,
    pub autocapitalization: Mutex<Autocapitalization>,
}

impl MockProxy {
    pub fn new(before: Option<&str>, after: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            before: Mutex::new(before.map(str::to_string)),
            after: Mutex::new(after.map(str::to_string)),
            reading_full_document: AtomicBool::new(false),
            appearance: Mutex::new(KeyboardAppearance::Default),
            autocapitalization: Mutex::new(Autocapitalization::Sentences),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(None, None)
    }

    pub fn set_text(&self, before: Option<&str>, after: Option<&str>) {
        *self.before.lock().unwrap() = before.map(str::to_string);
        *self.after.lock().unwrap() = after.map(str::to_string);
    }

    pub fn set_reading_full_document(&self, reading: bool) {
        self.reading_full_document.store(reading, Ordering::SeqCst);
    }

    pub fn text(&self) -> String {
        let before = self.before.lock().unwrap().clone().unwrap_or_default();
        let after = self.after.lock().unwrap().clone().unwrap_or_default();
        before + &after
    }
}

impl TextProxy for MockProxy {
    fn document_context_before_input(&self) -> Option<String> {
        self.before.lock().unwrap().clone()
    }

    fn document_context_after_input(&self) -> Option<String> {
        self.after.lock().unwrap().clone()
    }

    fn is_reading_full_document_context(&self) -> bool {
        self.reading_full_document.load(Ordering::SeqCst)
    }

    fn keyboard_appearance(&self) -> KeyboardAppearance {
        *self.appearance.lock().unwrap()
    }

    fn autocapitalization(&self) -> Autocapitalization {
        *self.autocapitalization.lock().unwrap()
    }

    fn insert_text(&self, text: &str) {
        self.before
            .lock()
            .unwrap()
            .get_or_insert_with(String::new)
            .push_str(text);
    }

    fn delete_backward(&self) {
        if let Some(before) = self.before.lock().unwrap().as_mut() {
            before.pop();
        }
    }
}

pub(super) struct MockHost {
    pub proxy: Mutex<Arc<dyn TextProxy>>,
    pub has_full_access: AtomicBool,
    pub has_dictation_key: AtomicBool,
    pub needs_input_mode_switch_key: AtomicBool,
    pub style: Mutex<Option<ColorScheme>>,
    pub dismissed: AtomicUsize,
    pub advanced: AtomicUsize,
    pub settings_opened: AtomicUsize,
}

impl MockHost {
    pub fn new(proxy: Arc<dyn TextProxy>) -> Arc<Self> {
        Arc::new(Self {
            proxy: Mutex::new(proxy),
            has_full_access: AtomicBool::new(false),
            has_dictation_key: AtomicBool::new(false),
            needs_input_mode_switch_key: AtomicBool::new(false),
            style: Mutex::new(None),
            dismissed: AtomicUsize::new(0),
            advanced: AtomicUsize::new(0),
            settings_opened: AtomicUsize::new(0),
        })
    }

    pub fn set_proxy(&self, proxy: Arc<dyn TextProxy>) {
        *self.proxy.lock().unwrap() = proxy;
    }
}

impl KeyboardHost for MockHost {
    fn has_full_access(&self) -> bool {
        self.has_full_access.load(Ordering::SeqCst)
    }

    fn has_dictation_key(&self) -> bool {
        self.has_dictation_key.load(Ordering::SeqCst)
    }

    fn needs_input_mode_switch_key(&self) -> bool {
        self.needs_input_mode_switch_key.load(Ordering::SeqCst)
    }

    fn user_interface_style(&self) -> Option<ColorScheme> {
        *self.style.lock().unwrap()
    }

    fn text_document_proxy(&self) -> Arc<dyn TextProxy> {
        Arc::clone(&self.proxy.lock().unwrap())
    }

    fn dismiss_keyboard(&self) {
        self.dismissed.fetch_add(1, Ordering::SeqCst);
    }

    fn advance_to_next_input_mode(&self) {
        self.advanced.fetch_add(1, Ordering::SeqCst);
    }

    fn open_settings(&self) {
        self.settings_opened.fetch_add(1, Ordering::SeqCst);
    }
}

/// Provider that answers `<text>-1`, `<text>-2`, ... either inline or when
/// the test releases the held completions.
pub(super) struct MockAutocompleteProvider {
    pub enabled: AtomicBool,
    pub deferred: AtomicBool,
    pub result_count: AtomicUsize,
    pub locale: RwLock<LocaleId>,
    pub requests: Mutex<Vec<String>>,
    held: Mutex<Vec<(String, AutocompleteCompletion)>>,
}

impl MockAutocompleteProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            enabled: AtomicBool::new(true),
            deferred: AtomicBool::new(false),
            result_count: AtomicUsize::new(2),
            locale: RwLock::new(LocaleId::default()),
            requests: Mutex::new(Vec::new()),
            held: Mutex::new(Vec::new()),
        })
    }

    pub fn deferred() -> Arc<Self> {
        let provider = Self::new();
        provider.deferred.store(true, Ordering::SeqCst);
        provider
    }

    pub fn suggestions_for(&self, text: &str) -> Vec<Suggestion> {
        (1..=self.result_count.load(Ordering::SeqCst))
            .map(|i| Suggestion::new(format!("{text}-{i}")))
            .collect()
    }

    pub fn held_count(&self) -> usize {
        self.held.lock().unwrap().len()
    }

    /// Complete the held request at `index` (in request order).
    pub fn complete(&self, index: usize, result: Option<AutocompleteResult>) {
        let (text, completion) = self.held.lock().unwrap().remove(index);
        completion(result.unwrap_or_else(|| Ok(self.suggestions_for(&text))));
    }
}

impl AutocompleteProvider for MockAutocompleteProvider {
    fn locale(&self) -> LocaleId {
        self.locale.read().unwrap().clone()
    }

    fn set_locale(&self, locale: &LocaleId) {
        *self.locale.write().unwrap() = locale.clone();
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn autocomplete_suggestions(&self, text: &str, completion: AutocompleteCompletion) {
        self.requests.lock().unwrap().push(text.to_string());
        if self.deferred.load(Ordering::SeqCst) {
            self.held.lock().unwrap().push((text.to_string(), completion));
        } else {
            completion(Ok(self.suggestions_for(text)));
        }
    }
}

pub(super) struct Fixture {
    pub host: Arc<MockHost>,
    pub proxy: Arc<MockProxy>,
    pub session: KeyboardSession,
}

pub(super) fn fixture() -> Fixture {
    let proxy = MockProxy::empty();
    let host = MockHost::new(proxy.clone());
    let session = KeyboardSession::new(host.clone());
    Fixture {
        host,
        proxy,
        session,
    }
}

pub(super) fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.text.as_str()).collect()
}
