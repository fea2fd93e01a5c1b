use std::sync::atomic::Ordering;

use keycap_core::context::Suggestion;

use super::{fixture, texts, MockAutocompleteProvider};
use crate::services::AutocompleteError;

#[test]
fn test_autocomplete_text_is_current_word() {
    let f = fixture();
    f.proxy.set_text(Some("foo"), Some("bar"));
    assert_eq!(f.session.autocomplete_text().as_deref(), Some("foobar"));

    f.proxy.set_text(Some("say hel"), Some("lo world"));
    assert_eq!(f.session.autocomplete_text().as_deref(), Some("hello"));

    f.proxy.set_text(None, None);
    assert_eq!(f.session.autocomplete_text(), None);

    f.proxy.set_text(Some("trailing "), None);
    assert_eq!(f.session.autocomplete_text(), None);
}

#[test]
fn test_autocomplete_enabled_needs_provider_and_proxy() {
    let f = fixture();
    assert!(!f.session.is_autocomplete_enabled());

    let provider = MockAutocompleteProvider::new();
    f.session.services().set_autocomplete_provider(provider.clone());
    assert!(f.session.is_autocomplete_enabled());

    f.proxy.set_reading_full_document(true);
    assert!(!f.session.is_autocomplete_enabled());
}

#[test]
fn test_perform_autocomplete_applies_provider_results() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::new();
    f.session.services().set_autocomplete_provider(provider.clone());
    f.proxy.set_text(Some("hel"), None);

    f.session.perform_autocomplete();

    assert_eq!(*provider.requests.lock().unwrap(), vec!["hel".to_string()]);
    assert_eq!(texts(&f.session.suggestions()), vec!["hel-1", "hel-2"]);
    let ctx = f.session.store().autocomplete.get();
    assert!(ctx.is_enabled);
    assert!(!ctx.is_loading);
    assert_eq!(ctx.last_error, None);
}

#[test]
fn test_results_are_capped_to_max_suggestions() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::new();
    provider.result_count.store(10, Ordering::SeqCst);
    f.session.services().set_autocomplete_provider(provider.clone());
    f.proxy.set_text(Some("a"), None);

    f.session.perform_autocomplete();

    let max = keycap_core::settings::settings().autocomplete.max_suggestions;
    assert_eq!(f.session.suggestions().len(), max);
}

#[test]
fn test_empty_text_clears_suggestions() {
    let mut f = fixture();
    f.session.services().set_autocomplete_provider(MockAutocompleteProvider::new());
    f.session
        .store()
        .autocomplete
        .update(|c| c.suggestions = vec![Suggestion::new("stale")]);

    f.session.perform_autocomplete();

    assert!(f.session.suggestions().is_empty());
}

#[test]
fn test_disabled_provider_clears_suggestions() {
    let mut f = fixture();
    f.proxy.set_text(Some("word"), None);
    f.session
        .store()
        .autocomplete
        .update(|c| c.suggestions = vec![Suggestion::new("stale")]);

    f.session.perform_autocomplete();

    assert!(f.session.suggestions().is_empty());
    assert!(!f.session.store().autocomplete.read(|c| c.is_enabled));
}

#[test]
fn test_reading_full_document_leaves_suggestions_untouched() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::new();
    f.session.services().set_autocomplete_provider(provider.clone());
    f.proxy.set_text(Some("word"), None);
    f.session
        .store()
        .autocomplete
        .update(|c| c.suggestions = vec![Suggestion::new("x")]);
    f.proxy.set_reading_full_document(true);

    f.session.perform_autocomplete();

    assert_eq!(texts(&f.session.suggestions()), vec!["x"]);
    assert!(provider.requests.lock().unwrap().is_empty());
}

#[test]
fn test_result_during_full_document_read_clears_loading() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::deferred();
    f.session.services().set_autocomplete_provider(provider.clone());
    f.session
        .store()
        .autocomplete
        .update(|c| c.suggestions = vec![Suggestion::new("kept")]);

    f.proxy.set_text(Some("fo"), None);
    f.session.perform_autocomplete();
    assert!(f.session.store().autocomplete.read(|c| c.is_loading));

    f.proxy.set_reading_full_document(true);
    provider.complete(0, None);
    assert!(!f.session.poll_autocomplete());
    f.proxy.set_reading_full_document(false);
    assert!(!f.session.poll_autocomplete());

    let ctx = f.session.store().autocomplete.get();
    assert!(!ctx.is_loading);
    assert_eq!(texts(&ctx.suggestions), vec!["kept"]);
}

#[test]
fn test_last_request_wins() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::deferred();
    f.session.services().set_autocomplete_provider(provider.clone());

    f.proxy.set_text(Some("he"), None);
    f.session.perform_autocomplete();
    f.proxy.set_text(Some("hel"), None);
    f.session.perform_autocomplete();
    assert!(f.session.store().autocomplete.read(|c| c.is_loading));
    assert_eq!(provider.held_count(), 2);

    // Newer request finishes first, then the older one arrives late.
    provider.complete(1, None);
    assert!(f.session.poll_autocomplete());
    provider.complete(0, None);
    assert!(!f.session.poll_autocomplete());

    assert_eq!(texts(&f.session.suggestions()), vec!["hel-1", "hel-2"]);
    assert!(!f.session.store().autocomplete.read(|c| c.is_loading));
}

#[test]
fn test_reset_wins_over_in_flight_request() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::deferred();
    f.session.services().set_autocomplete_provider(provider.clone());
    f.proxy.set_text(Some("wor"), None);

    f.session.perform_autocomplete();
    f.session.selection_did_change();
    provider.complete(0, None);

    assert!(!f.session.poll_autocomplete());
    assert!(f.session.suggestions().is_empty());
}

#[test]
fn test_completion_from_another_thread() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::deferred();
    f.session.services().set_autocomplete_provider(provider.clone());
    f.proxy.set_text(Some("thr"), None);
    f.session.perform_autocomplete();

    let worker = std::thread::spawn({
        let provider = provider.clone();
        move || provider.complete(0, None)
    });
    worker.join().unwrap();

    assert!(f.session.poll_autocomplete());
    assert_eq!(texts(&f.session.suggestions()), vec!["thr-1", "thr-2"]);
}

#[test]
fn test_provider_error_keeps_suggestions_and_records_error() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::deferred();
    f.session.services().set_autocomplete_provider(provider.clone());
    f.session
        .store()
        .autocomplete
        .update(|c| c.suggestions = vec![Suggestion::new("kept")]);
    f.proxy.set_text(Some("err"), None);

    f.session.perform_autocomplete();
    provider.complete(0, Some(Err(AutocompleteError::Failed("offline".into()))));
    f.session.poll_autocomplete();

    let ctx = f.session.store().autocomplete.get();
    assert_eq!(texts(&ctx.suggestions), vec!["kept"]);
    assert!(!ctx.is_loading);
    assert_eq!(ctx.last_error.as_deref(), Some("autocomplete failed: offline"));
}

#[test]
fn test_text_did_change_runs_pipeline() {
    let mut f = fixture();
    f.session.services().set_autocomplete_provider(MockAutocompleteProvider::new());
    f.proxy.set_text(Some("Hi wo"), None);

    f.session.text_did_change();

    assert_eq!(texts(&f.session.suggestions()), vec!["wo-1", "wo-2"]);
}
