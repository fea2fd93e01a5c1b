use std::sync::Arc;

use keycap_core::context::ColorScheme;
use keycap_core::proxy::TextProxy;

/// The system runtime hosting the keyboard.
///
/// All reads are cheap and may be repeated; values can change between calls
/// without notice, so the session copies them on every sync.
pub trait KeyboardHost: Send + Sync {
    fn has_full_access(&self) -> bool;

    fn has_dictation_key(&self) -> bool;

    fn needs_input_mode_switch_key(&self) -> bool;

    /// Interface style from the host's trait collection. `None` on hosts that
    /// only expose the proxy's keyboard appearance.
    fn user_interface_style(&self) -> Option<ColorScheme> {
        None
    }

    /// The document proxy the host currently provides. Hosts may swap it
    /// mid-edit.
    fn text_document_proxy(&self) -> Arc<dyn TextProxy>;

    fn dismiss_keyboard(&self) {}

    fn advance_to_next_input_mode(&self) {}

    fn open_settings(&self) {}
}
