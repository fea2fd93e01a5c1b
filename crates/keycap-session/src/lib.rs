//! Keyboard session: keeps the context store in sync with the host and runs
//! the autocomplete pipeline.
//!
//! `KeyboardSession` receives host lifecycle and text events one at a time.
//! Everything is synchronous except the autocomplete provider, whose
//! completions are queued and applied by `poll_autocomplete`.

mod actions;
mod autocomplete;
mod host;
mod lifecycle;
mod proxy;
pub mod services;
mod store;

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex, PoisonError};

use keycap_core::context::{KeyboardContext, Suggestion};
use keycap_core::locale::LocaleId;
use keycap_core::observable::Subscription;
use keycap_core::proxy::TextProxy;

pub use autocomplete::AutocompletePipeline;
pub use host::KeyboardHost;
pub use proxy::TextProxyAdapter;
pub use services::ServiceRegistry;
pub use store::ContextStore;

/// One keyboard activation. Context objects live exactly as long as this.
pub struct KeyboardSession {
    host: Arc<dyn KeyboardHost>,
    proxy: TextProxyAdapter,
    store: ContextStore,
    services: ServiceRegistry,
    pipeline: AutocompletePipeline,
    /// Store and registry observers; dropped with the session.
    _subscriptions: Vec<Subscription>,
}

impl KeyboardSession {
    pub fn new(host: Arc<dyn KeyboardHost>) -> Self {
        let keyboard = KeyboardContext::default();
        let services = ServiceRegistry::standard(&keyboard.locale);
        let store = ContextStore::new(keyboard, services.callout_action_provider());

        let subscriptions = vec![
            Self::observe_locale(&store, &services),
            Self::observe_services(&store, &services),
        ];

        Self {
            proxy: TextProxyAdapter::new(Arc::clone(&host)),
            host,
            store,
            services,
            pipeline: AutocompletePipeline::new(),
            _subscriptions: subscriptions,
        }
    }

    /// Any write of the keyboard locale reaches every locale-dependent
    /// service.
    fn observe_locale(store: &ContextStore, services: &ServiceRegistry) -> Subscription {
        let services = services.clone();
        let last = Mutex::new(store.keyboard.read(|ctx| ctx.locale.clone()));
        store.keyboard.subscribe(move |ctx: &KeyboardContext| {
            let mut last = last.lock().unwrap_or_else(PoisonError::into_inner);
            if *last != ctx.locale {
                *last = ctx.locale.clone();
                services.apply_locale(&ctx.locale);
            }
        })
    }

    /// Rebind the action callout's provider when the handler or the provider
    /// changes, and hand the current locale to newly installed services.
    fn observe_services(store: &ContextStore, services: &ServiceRegistry) -> Subscription {
        let callout = store.callout.clone();
        let keyboard = store.keyboard.clone();
        let autocomplete = store.autocomplete.clone();
        services.subscribe(move |slot, registry| {
            use services::ServiceSlot;

            if matches!(
                slot,
                ServiceSlot::ActionHandler | ServiceSlot::CalloutActionProvider
            ) {
                let provider = registry.callout_action_provider();
                callout.update(|c| c.action_callout.action_provider = provider);
            }
            if slot.is_locale_dependent() {
                let locale = keyboard.read(|ctx| ctx.locale.clone());
                match slot {
                    ServiceSlot::AutocompleteProvider => {
                        let provider = registry.autocomplete_provider();
                        provider.set_locale(&locale);
                        let enabled = provider.is_enabled();
                        autocomplete.update(|c| c.is_enabled = enabled);
                    }
                    ServiceSlot::CalloutActionProvider => {
                        registry.callout_action_provider().set_locale(&locale)
                    }
                    ServiceSlot::LayoutProvider => registry.layout_provider().set_locale(&locale),
                    _ => {}
                }
            }
        })
    }

    pub fn store(&self) -> &ContextStore {
        &self.store
    }

    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    pub fn proxy(&self) -> &TextProxyAdapter {
        &self.proxy
    }

    pub fn current_proxy(&self) -> Arc<dyn TextProxy> {
        self.proxy.current_proxy()
    }

    /// Snapshot of the keyboard context.
    pub fn keyboard_context(&self) -> KeyboardContext {
        self.store.keyboard.get()
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.store.autocomplete.read(|c| c.suggestions.clone())
    }

    pub fn locale(&self) -> LocaleId {
        self.store.keyboard.read(|c| c.locale.clone())
    }

    /// Switch the keyboard language. Adds `locale` to the cycled locales if
    /// it isn't there yet.
    pub fn set_locale(&mut self, locale: LocaleId) {
        tracing::debug!(%locale, "set locale");
        self.store.keyboard.update(|ctx| {
            if !ctx.locales.contains(&locale) {
                ctx.locales.push(locale.clone());
            }
            ctx.locale = locale;
        });
    }
}
