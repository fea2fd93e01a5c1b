//! Picks the proxy the keyboard reads from and writes to.

use std::sync::Arc;

use keycap_core::proxy::{KeyboardAppearance, TextProxy};
use keycap_core::text;

use crate::host::KeyboardHost;

/// Host proxy, optionally overridden by a redirected input target (e.g. a
/// search field drawn inside the keyboard itself).
pub struct TextProxyAdapter {
    host: Arc<dyn KeyboardHost>,
    redirected: Option<Arc<dyn TextProxy>>,
}

impl TextProxyAdapter {
    pub fn new(host: Arc<dyn KeyboardHost>) -> Self {
        Self {
            host,
            redirected: None,
        }
    }

    pub fn current_proxy(&self) -> Arc<dyn TextProxy> {
        match &self.redirected {
            Some(proxy) => Arc::clone(proxy),
            None => self.host.text_document_proxy(),
        }
    }

    /// The host's own proxy, ignoring any redirection.
    pub fn original_proxy(&self) -> Arc<dyn TextProxy> {
        self.host.text_document_proxy()
    }

    pub fn redirected(&self) -> Option<&Arc<dyn TextProxy>> {
        self.redirected.as_ref()
    }

    /// Install or clear the redirection target. The previous target is
    /// released.
    pub(crate) fn set_redirected(&mut self, proxy: Option<Arc<dyn TextProxy>>) {
        self.redirected = proxy;
    }

    pub fn text_before_cursor(&self) -> Option<String> {
        self.current_proxy().document_context_before_input()
    }

    pub fn text_after_cursor(&self) -> Option<String> {
        self.current_proxy().document_context_after_input()
    }

    pub fn is_reading_full_document_context(&self) -> bool {
        self.current_proxy().is_reading_full_document_context()
    }

    pub fn keyboard_appearance(&self) -> KeyboardAppearance {
        self.current_proxy().keyboard_appearance()
    }

    pub fn current_word(&self) -> Option<String> {
        let proxy = self.current_proxy();
        let before = proxy.document_context_before_input();
        let after = proxy.document_context_after_input();
        text::current_word(before.as_deref(), after.as_deref())
    }

    pub fn is_cursor_at_new_sentence(&self) -> bool {
        text::is_cursor_at_new_sentence(self.text_before_cursor().as_deref())
    }
}
