//! Pluggable strategies and the registry holding the active ones.
//!
//! Every slot starts with a standard or disabled implementation, so a
//! session works without any configuration. Replacing a slot notifies the
//! registry's observers with the slot that changed.

mod autocomplete;
mod behavior;
mod dictation;
mod handler;
mod layout;
mod style;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use keycap_core::callout::{CalloutActionProvider, StandardCalloutActionProvider};
use keycap_core::locale::LocaleId;
use keycap_core::observable::{Observable, Subscription};

pub use autocomplete::{
    AutocompleteCompletion, AutocompleteError, AutocompleteProvider, AutocompleteResult,
    DisabledAutocompleteProvider,
};
pub use behavior::{KeyboardBehavior, StandardKeyboardBehavior};
pub use dictation::{DictationError, DictationService, DisabledDictationService};
pub use handler::{ActionEffect, ActionHandler, HostRequest, StandardActionHandler};
pub use layout::{KeyboardLayout, LayoutProvider, StandardLayoutProvider};
pub use style::{StandardStyleProvider, StyleProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceSlot {
    ActionHandler,
    AutocompleteProvider,
    CalloutActionProvider,
    DictationService,
    KeyboardBehavior,
    LayoutProvider,
    StyleProvider,
}

impl ServiceSlot {
    /// Slots whose services receive the keyboard locale.
    pub fn is_locale_dependent(self) -> bool {
        matches!(
            self,
            Self::AutocompleteProvider | Self::CalloutActionProvider | Self::LayoutProvider
        )
    }
}

struct Slots {
    action_handler: Arc<dyn ActionHandler>,
    autocomplete_provider: Arc<dyn AutocompleteProvider>,
    callout_action_provider: Arc<dyn CalloutActionProvider>,
    dictation_service: Arc<dyn DictationService>,
    keyboard_behavior: Arc<dyn KeyboardBehavior>,
    layout_provider: Arc<dyn LayoutProvider>,
    style_provider: Arc<dyn StyleProvider>,
}

struct RegistryInner {
    slots: RwLock<Slots>,
    /// Last replaced slot; observers hang off this cell.
    changes: Observable<Option<ServiceSlot>>,
}

/// Shared handle to the session's services. Clones see the same slots.
#[derive(Clone)]
pub struct ServiceRegistry {
    inner: Arc<RegistryInner>,
}

macro_rules! slot_accessors {
    ($($getter:ident, $setter:ident, $slot:ident: $service:ident;)*) => {
        $(
            pub fn $getter(&self) -> Arc<dyn $service> {
                Arc::clone(&self.read().$getter)
            }

            pub fn $setter(&self, service: Arc<dyn $service>) {
                self.write().$getter = service;
                tracing::debug!(slot = ?ServiceSlot::$slot, "service replaced");
                self.inner.changes.set(Some(ServiceSlot::$slot));
            }
        )*
    };
}

impl ServiceRegistry {
    /// Registry with the standard/disabled service for every slot.
    pub fn standard(locale: &LocaleId) -> Self {
        let slots = Slots {
            action_handler: Arc::new(StandardActionHandler),
            autocomplete_provider: Arc::new(DisabledAutocompleteProvider::new(locale.clone())),
            callout_action_provider: Arc::new(StandardCalloutActionProvider::new(locale.clone())),
            dictation_service: Arc::new(DisabledDictationService),
            keyboard_behavior: Arc::new(StandardKeyboardBehavior),
            layout_provider: Arc::new(StandardLayoutProvider::new(locale.clone())),
            style_provider: Arc::new(StandardStyleProvider::default()),
        };
        Self {
            inner: Arc::new(RegistryInner {
                slots: RwLock::new(slots),
                changes: Observable::new(None),
            }),
        }
    }

    slot_accessors! {
        action_handler, set_action_handler, ActionHandler: ActionHandler;
        autocomplete_provider, set_autocomplete_provider, AutocompleteProvider: AutocompleteProvider;
        callout_action_provider, set_callout_action_provider, CalloutActionProvider: CalloutActionProvider;
        dictation_service, set_dictation_service, DictationService: DictationService;
        keyboard_behavior, set_keyboard_behavior, KeyboardBehavior: KeyboardBehavior;
        layout_provider, set_layout_provider, LayoutProvider: LayoutProvider;
        style_provider, set_style_provider, StyleProvider: StyleProvider;
    }

    /// Push `locale` into every locale-dependent service.
    pub fn apply_locale(&self, locale: &LocaleId) {
        let (autocomplete, callout, layout) = {
            let slots = self.read();
            (
                Arc::clone(&slots.autocomplete_provider),
                Arc::clone(&slots.callout_action_provider),
                Arc::clone(&slots.layout_provider),
            )
        };
        tracing::debug!(%locale, "applying locale to services");
        autocomplete.set_locale(locale);
        callout.set_locale(locale);
        layout.set_locale(locale);
    }

    /// Observe slot replacements. The observer gets the slot and the
    /// registry itself; it doesn't keep the registry alive.
    #[must_use = "dropping the subscription detaches the observer"]
    pub fn subscribe(
        &self,
        observer: impl Fn(ServiceSlot, &ServiceRegistry) + Send + Sync + 'static,
    ) -> Subscription {
        let weak = Arc::downgrade(&self.inner);
        self.inner.changes.subscribe(move |slot| {
            let (Some(slot), Some(inner)) = (slot, weak.upgrade()) else {
                return;
            };
            observer(*slot, &ServiceRegistry { inner });
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Slots> {
        self.inner
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slots> {
        self.inner
            .slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry").finish_non_exhaustive()
    }
}
