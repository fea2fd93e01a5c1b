//! The host's text document, as seen from the keyboard.

use std::fmt;
use std::sync::{Arc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardAppearance {
    #[default]
    Default,
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Autocapitalization {
    None,
    Words,
    #[default]
    Sentences,
    AllCharacters,
}

/// Read/write access to the document the keyboard is typing into.
///
/// Reads may return `None` at any time (no open document, host disconnected).
/// Writes are only issued by the action handler.
pub trait TextProxy: Send + Sync {
    fn document_context_before_input(&self) -> Option<String>;

    fn document_context_after_input(&self) -> Option<String>;

    /// The host is scanning the whole document; suggestions must not change.
    fn is_reading_full_document_context(&self) -> bool {
        false
    }

    fn keyboard_appearance(&self) -> KeyboardAppearance {
        KeyboardAppearance::Default
    }

    fn autocapitalization(&self) -> Autocapitalization {
        Autocapitalization::Sentences
    }

    fn insert_text(&self, text: &str);

    fn delete_backward(&self);

    /// Move the cursor by `offset` characters.
    fn adjust_text_position(&self, _offset: i64) {}
}

/// Non-owning handle to a proxy, stored in the keyboard context.
///
/// Two handles are equal when they point at the same proxy object.
#[derive(Clone, Default)]
pub struct ProxyRef(Option<Weak<dyn TextProxy>>);

impl ProxyRef {
    pub fn new(proxy: &Arc<dyn TextProxy>) -> Self {
        Self(Some(Arc::downgrade(proxy)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    /// `None` when never set or when the proxy has been released.
    pub fn upgrade(&self) -> Option<Arc<dyn TextProxy>> {
        self.0.as_ref()?.upgrade()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Whether this handle points at `proxy`.
    pub fn is(&self, proxy: &Arc<dyn TextProxy>) -> bool {
        match &self.0 {
            Some(weak) => std::ptr::addr_eq(weak.as_ptr(), Arc::as_ptr(proxy)),
            None => false,
        }
    }
}

impl PartialEq for ProxyRef {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Weak::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for ProxyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(weak) => write!(f, "ProxyRef({:p})", weak.as_ptr()),
            None => f.write_str("ProxyRef(none)"),
        }
    }
}
