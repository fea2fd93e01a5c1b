use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use keycap_core::action::Action;
use keycap_core::callout::{CalloutActionProvider, Frame};
use keycap_core::locale::LocaleId;

use super::{fixture, MockAutocompleteProvider};
use crate::services::{AutocompleteProvider, ServiceRegistry, ServiceSlot, StandardActionHandler};

struct FixedCalloutProvider {
    locale: Mutex<Option<LocaleId>>,
}

impl CalloutActionProvider for FixedCalloutProvider {
    fn callout_actions(&self, _action: &Action) -> Vec<Action> {
        vec![Action::character("1"), Action::character("2")]
    }

    fn set_locale(&self, locale: &LocaleId) {
        *self.locale.lock().unwrap() = Some(locale.clone());
    }
}

#[test]
fn test_locale_change_reaches_services() {
    let mut f = fixture();
    let provider = MockAutocompleteProvider::new();
    f.session.services().set_autocomplete_provider(provider.clone());

    f.session.set_locale("sv-SE".into());

    assert_eq!(provider.locale(), LocaleId::new("sv-SE"));
    assert!(f
        .session
        .keyboard_layout()
        .actions()
        .any(|a| *a == Action::character("å")));
    let callouts = f
        .session
        .services()
        .callout_action_provider()
        .callout_actions(&Action::character("ä"));
    assert_eq!(callouts.len(), 2);
    assert!(f
        .session
        .keyboard_context()
        .locales
        .contains(&LocaleId::new("sv-SE")));
}

#[test]
fn test_direct_locale_write_cascades() {
    let f = fixture();
    let provider = MockAutocompleteProvider::new();
    f.session.services().set_autocomplete_provider(provider.clone());

    f.session
        .store()
        .keyboard
        .update(|ctx| ctx.locale = "de-DE".into());

    assert_eq!(provider.locale(), LocaleId::new("de-DE"));
}

#[test]
fn test_new_service_receives_current_locale() {
    let mut f = fixture();
    f.session.set_locale("sv-SE".into());

    let provider = MockAutocompleteProvider::new();
    f.session.services().set_autocomplete_provider(provider.clone());
    assert_eq!(provider.locale(), LocaleId::new("sv-SE"));
    assert!(f.session.store().autocomplete.read(|c| c.is_enabled));

    let callout = Arc::new(FixedCalloutProvider {
        locale: Mutex::new(None),
    });
    f.session
        .services()
        .set_callout_action_provider(callout.clone());
    assert_eq!(
        *callout.locale.lock().unwrap(),
        Some(LocaleId::new("sv-SE"))
    );
}

#[test]
fn test_callout_provider_is_rebound() {
    let mut f = fixture();
    let callout = Arc::new(FixedCalloutProvider {
        locale: Mutex::new(None),
    });
    f.session
        .services()
        .set_callout_action_provider(callout.clone());

    assert!(f
        .session
        .update_action_callout(&Action::character("x"), Frame::ZERO));
    let actions = f.session.store().callout.read(|c| c.action_callout.actions.clone());
    assert_eq!(actions, vec![Action::character("1"), Action::character("2")]);
}

#[test]
fn test_action_handler_change_rebinds_callout_provider() {
    let f = fixture();
    let before = f.session.store().callout.revision();

    f.session
        .services()
        .set_action_handler(Arc::new(StandardActionHandler));

    assert!(f.session.store().callout.revision() > before);
    let bound = f
        .session
        .store()
        .callout
        .read(|c| Arc::clone(&c.action_callout.action_provider));
    assert!(Arc::ptr_eq(
        &bound,
        &f.session.services().callout_action_provider()
    ));
}

#[test]
fn test_registry_observers_see_each_replacement() {
    let registry = ServiceRegistry::standard(&LocaleId::default());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let _sub = registry.subscribe({
        let seen = Arc::clone(&seen);
        move |slot, _| seen.lock().unwrap().push(slot)
    });

    registry.set_action_handler(Arc::new(StandardActionHandler));
    registry.set_autocomplete_provider(MockAutocompleteProvider::new());

    assert_eq!(
        *seen.lock().unwrap(),
        vec![ServiceSlot::ActionHandler, ServiceSlot::AutocompleteProvider]
    );
}

#[test]
fn test_dropped_subscription_stops_notifications() {
    let registry = ServiceRegistry::standard(&LocaleId::default());
    let calls = Arc::new(AtomicUsize::new(0));
    let sub = registry.subscribe({
        let calls = Arc::clone(&calls);
        move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    });
    registry.set_action_handler(Arc::new(StandardActionHandler));
    drop(sub);
    registry.set_action_handler(Arc::new(StandardActionHandler));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_session_drop_detaches_store_observers() {
    let f = fixture();
    let keyboard = f.session.store().keyboard.clone();
    assert_eq!(keyboard.observer_count(), 1);

    drop(f.session);

    assert_eq!(keyboard.observer_count(), 0);
}

#[test]
fn test_locale_dependence() {
    assert!(ServiceSlot::AutocompleteProvider.is_locale_dependent());
    assert!(ServiceSlot::LayoutProvider.is_locale_dependent());
    assert!(!ServiceSlot::StyleProvider.is_locale_dependent());
}
