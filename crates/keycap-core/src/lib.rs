//! Keyboard data model: actions, observable contexts, callouts and the
//! action style resolver. Nothing here talks to the host directly.

pub mod action;
pub mod callout;
pub mod context;
pub mod feedback;
pub mod l10n;
pub mod locale;
pub mod observable;
pub mod proxy;
pub mod settings;
pub mod style;
pub mod text;
