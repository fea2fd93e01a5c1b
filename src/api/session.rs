use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use keycap_core::action::Action;
use keycap_core::locale::LocaleId;
use keycap_core::proxy::TextProxy;
use keycap_session::services::{AutocompleteProvider, DisabledAutocompleteProvider};
use keycap_session::{KeyboardHost, KeyboardSession};

use crate::async_worker::AsyncAutocompleteProvider;

use super::bridge::{
    ForeignProxy, ForeignSource, HostBridge, KcAutocompleteSource, KcKeyboardHost,
    KcTextDocumentProxy,
};
use super::types::{
    KcAction, KcActionEffect, KcAutocompleteState, KcButtonStyle, KcError,
    KcFeedbackConfiguration, KcFrame, KcKeyboardState, KcSuggestion,
};

/// One keyboard activation, driven by the extension's view controller.
///
/// Call `poll` after scheduling to pick up autocomplete results computed on
/// the worker thread.
#[derive(uniffi::Object)]
pub struct KcSession {
    host: Arc<HostBridge>,
    session: Mutex<KeyboardSession>,
}

#[uniffi::export]
impl KcSession {
    #[uniffi::constructor]
    pub fn new(
        host: Arc<dyn KcKeyboardHost>,
        proxy: Arc<dyn KcTextDocumentProxy>,
    ) -> Arc<Self> {
        let host = Arc::new(HostBridge::new(host, proxy));
        let session = KeyboardSession::new(Arc::clone(&host) as Arc<dyn KeyboardHost>);
        Arc::new(Self {
            host,
            session: Mutex::new(session),
        })
    }

    // -- lifecycle ----------------------------------------------------------

    pub fn view_will_appear(&self) {
        self.lock().view_will_appear();
    }

    pub fn trait_collection_did_change(&self) {
        self.lock().trait_collection_did_change();
    }

    pub fn selection_will_change(&self) {
        self.lock().selection_will_change();
    }

    pub fn selection_did_change(&self) {
        self.lock().selection_did_change();
    }

    pub fn text_will_change(&self) {
        self.lock().text_will_change();
    }

    pub fn text_did_change(&self) {
        self.lock().text_did_change();
    }

    /// The host handed the keyboard a different document proxy.
    pub fn set_text_document_proxy(&self, proxy: Arc<dyn KcTextDocumentProxy>) {
        self.host.set_proxy(proxy);
        self.lock().text_will_change();
    }

    pub fn set_redirected_proxy(&self, proxy: Option<Arc<dyn KcTextDocumentProxy>>) {
        let proxy = proxy.map(|p| Arc::new(ForeignProxy(p)) as Arc<dyn TextProxy>);
        self.lock().set_redirected_proxy(proxy);
    }

    // -- autocomplete -------------------------------------------------------

    /// Install a suggestion source, or the disabled provider for `None`.
    pub fn set_autocomplete_source(
        &self,
        source: Option<Arc<dyn KcAutocompleteSource>>,
    ) -> Result<(), KcError> {
        let session = self.lock();
        let locale = session.locale();
        let provider: Arc<dyn AutocompleteProvider> = match source {
            Some(source) => Arc::new(
                AsyncAutocompleteProvider::new(Arc::new(ForeignSource(source)), locale).map_err(
                    |e| KcError::Internal {
                        msg: format!("failed to spawn autocomplete worker: {e}"),
                    },
                )?,
            ),
            None => Arc::new(DisabledAutocompleteProvider::new(locale)),
        };
        session.services().set_autocomplete_provider(provider);
        Ok(())
    }

    /// Apply finished autocomplete results. Returns whether suggestions
    /// changed.
    pub fn poll(&self) -> bool {
        self.lock().poll_autocomplete()
    }

    pub fn perform_autocomplete(&self) {
        self.lock().perform_autocomplete();
    }

    pub fn reset_autocomplete(&self) {
        self.lock().reset_autocomplete();
    }

    pub fn autocomplete_text(&self) -> Option<String> {
        self.lock().autocomplete_text()
    }

    pub fn is_autocomplete_enabled(&self) -> bool {
        self.lock().is_autocomplete_enabled()
    }

    pub fn suggestions(&self) -> Vec<KcSuggestion> {
        self.lock().suggestions().iter().map(KcSuggestion::from).collect()
    }

    pub fn autocomplete_state(&self) -> KcAutocompleteState {
        self.lock()
            .store()
            .autocomplete
            .read(|ctx| KcAutocompleteState::from(ctx))
    }

    // -- keyboard state -----------------------------------------------------

    pub fn keyboard_state(&self) -> KcKeyboardState {
        self.lock()
            .store()
            .keyboard
            .read(|ctx| KcKeyboardState::from(ctx))
    }

    pub fn feedback_configuration(&self) -> KcFeedbackConfiguration {
        self.lock().store().feedback.get().into()
    }

    pub fn set_locale(&self, locale: String) {
        self.lock().set_locale(LocaleId::new(locale));
    }

    /// Locales cycled by the next-locale key.
    pub fn set_locales(&self, locales: Vec<String>) {
        let session = self.lock();
        session.store().keyboard.update(|ctx| {
            ctx.locales = locales.into_iter().map(LocaleId::new).collect();
        });
    }

    // -- actions ------------------------------------------------------------

    pub fn handle_action(&self, action: KcAction) -> KcActionEffect {
        let effect = self.lock().handle_action(&Action::from(action));
        KcActionEffect::from(&effect)
    }

    pub fn button_style(&self, action: KcAction, is_pressed: bool) -> KcButtonStyle {
        self.lock()
            .button_style(&Action::from(action), is_pressed)
            .into()
    }

    pub fn keyboard_layout(&self) -> Vec<Vec<KcAction>> {
        self.lock()
            .keyboard_layout()
            .rows
            .iter()
            .map(|row| row.iter().map(KcAction::from).collect())
            .collect()
    }

    // -- callouts -----------------------------------------------------------

    pub fn update_action_callout(&self, action: KcAction, frame: KcFrame) -> bool {
        self.lock()
            .update_action_callout(&Action::from(action), frame.into())
    }

    pub fn callout_actions(&self) -> Vec<KcAction> {
        self.lock()
            .store()
            .callout
            .read(|c| c.action_callout.actions.iter().map(KcAction::from).collect())
    }

    pub fn selected_callout_index(&self) -> Option<u32> {
        self.lock()
            .store()
            .callout
            .read(|c| c.action_callout.selected_index)
            .map(|i| i as u32)
    }

    pub fn select_callout_action(&self, index: u32) {
        self.lock().select_callout_action(index as usize);
    }

    pub fn end_action_callout(&self) -> Option<KcActionEffect> {
        self.lock()
            .end_action_callout()
            .as_ref()
            .map(KcActionEffect::from)
    }

    pub fn update_input_callout(&self, action: KcAction, frame: KcFrame) {
        self.lock()
            .update_input_callout(&Action::from(action), frame.into());
    }

    pub fn input_callout_text(&self) -> Option<String> {
        self.lock()
            .store()
            .callout
            .read(|c| c.input_callout.text.clone())
    }

    pub fn reset_input_callout(&self) {
        self.lock().reset_input_callout();
    }
}

impl KcSession {
    fn lock(&self) -> MutexGuard<'_, KeyboardSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
