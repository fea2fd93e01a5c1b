//! Host lifecycle and text events.

use std::sync::Arc;

use keycap_core::context::{ColorScheme, KeyboardContext};
use keycap_core::proxy::{KeyboardAppearance, ProxyRef, TextProxy};

use crate::KeyboardSession;

impl KeyboardSession {
    pub fn view_will_appear(&mut self) {
        tracing::debug!("view will appear");
        self.sync_with_host();
    }

    pub fn trait_collection_did_change(&mut self) {
        tracing::debug!("trait collection did change");
        self.sync_with_host();
    }

    pub fn selection_will_change(&mut self) {
        self.reset_autocomplete();
        self.store.callout.update(|c| c.reset());
    }

    pub fn selection_did_change(&mut self) {
        self.reset_autocomplete();
        self.store.callout.update(|c| c.reset());
    }

    pub fn text_will_change(&mut self) {
        self.sync_text_proxy();
    }

    /// Refresh autocomplete and adjust the keyboard type to the new text.
    pub fn text_did_change(&mut self) {
        let _span = tracing::debug_span!("text_did_change").entered();
        self.sync_text_proxy();
        self.perform_autocomplete();
        self.switch_to_preferred_keyboard_type_after_text_did_change();
    }

    /// Send input to `proxy` instead of the host document; `None` restores
    /// the host proxy.
    pub fn set_redirected_proxy(&mut self, proxy: Option<Arc<dyn TextProxy>>) {
        tracing::debug!(redirected = proxy.is_some(), "text proxy redirection changed");
        self.proxy.set_redirected(proxy);
        self.sync_with_host();
    }

    /// Copy host flags, color scheme and the active proxy into the keyboard
    /// context. Running it twice without host changes writes nothing.
    pub fn sync_with_host(&mut self) {
        let proxy = self.proxy.current_proxy();
        let color_scheme = self.host.user_interface_style().unwrap_or(
            match proxy.keyboard_appearance() {
                KeyboardAppearance::Dark => ColorScheme::Dark,
                KeyboardAppearance::Default | KeyboardAppearance::Light => ColorScheme::Light,
            },
        );

        let mut next = self.store.keyboard.get();
        next.has_full_access = self.host.has_full_access();
        next.has_dictation_key = self.host.has_dictation_key();
        next.needs_input_mode_switch_key = self.host.needs_input_mode_switch_key();
        next.color_scheme = color_scheme;
        if !next.text_proxy.is(&proxy) {
            next.text_proxy = ProxyRef::new(&proxy);
        }
        self.write_keyboard_context(next);
    }

    fn sync_text_proxy(&mut self) {
        let proxy = self.proxy.current_proxy();
        if self.store.keyboard.read(|ctx| ctx.text_proxy.is(&proxy)) {
            return;
        }
        self.store
            .keyboard
            .update(|ctx| ctx.text_proxy = ProxyRef::new(&proxy));
    }

    fn switch_to_preferred_keyboard_type_after_text_did_change(&mut self) {
        let behavior = self.services.keyboard_behavior();
        if !behavior.should_switch_to_preferred_keyboard_type_after_text_did_change() {
            return;
        }
        let proxy = self.proxy.current_proxy();
        let context = self.store.keyboard.get();
        let preferred = behavior.preferred_keyboard_type(&context, proxy.as_ref());
        if preferred != context.keyboard_type {
            tracing::debug!(keyboard_type = ?preferred, "keyboard type follows text");
            self.store
                .keyboard
                .update(|ctx| ctx.keyboard_type = preferred);
        }
    }

    fn write_keyboard_context(&self, next: KeyboardContext) {
        let changed = self.store.keyboard.read(|current| *current != next);
        if changed {
            self.store.keyboard.set(next);
        }
    }
}
