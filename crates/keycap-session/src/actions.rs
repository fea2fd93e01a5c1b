//! Action dispatch, callouts and the rendering queries.

use keycap_core::action::Action;
use keycap_core::callout::Frame;
use keycap_core::style::StyleDescriptor;

use crate::services::{ActionEffect, DictationError, HostRequest, KeyboardLayout};
use crate::KeyboardSession;

impl KeyboardSession {
    /// Run `action` through the action handler, apply its effect, then let
    /// the keyboard behavior pick the next keyboard type.
    pub fn handle_action(&mut self, action: &Action) -> ActionEffect {
        let _span = tracing::debug_span!("handle_action", ?action).entered();
        let handler = self.services.action_handler();
        let proxy = self.proxy.current_proxy();
        let context = self.store.keyboard.get();
        let effect = handler.handle(action, &context, proxy.as_ref());
        tracing::debug!(?action, ?effect, "action handled");

        self.apply_effect(&effect);

        let behavior = self.services.keyboard_behavior();
        let context = self.store.keyboard.get();
        if let Some(next) = behavior.preferred_keyboard_type_after_action(action, &context) {
            if next != context.keyboard_type {
                self.store.keyboard.update(|ctx| ctx.keyboard_type = next);
            }
        }
        effect
    }

    fn apply_effect(&mut self, effect: &ActionEffect) {
        match effect {
            ActionEffect::Handled | ActionEffect::Unhandled => {}
            ActionEffect::SwitchKeyboardType(keyboard_type) => {
                let keyboard_type = keyboard_type.clone();
                self.store
                    .keyboard
                    .update(|ctx| ctx.keyboard_type = keyboard_type);
            }
            ActionEffect::SwitchLocale(locale) => self.set_locale(locale.clone()),
            ActionEffect::StartDictation => {
                if let Err(e) = self.start_dictation() {
                    tracing::info!(error = %e, "dictation not started");
                }
            }
            ActionEffect::Host(HostRequest::DismissKeyboard) => self.host.dismiss_keyboard(),
            ActionEffect::Host(HostRequest::NextKeyboard) => self.host.advance_to_next_input_mode(),
            ActionEffect::Host(HostRequest::OpenSettings) => self.host.open_settings(),
        }
    }

    /// Start the dictation service for the current locale. Needs full access.
    pub fn start_dictation(&self) -> Result<(), DictationError> {
        let (has_full_access, locale) = self
            .store
            .keyboard
            .read(|ctx| (ctx.has_full_access, ctx.locale.clone()));
        if !has_full_access {
            return Err(DictationError::NoFullAccess);
        }
        self.services.dictation_service().start_dictation(&locale)
    }

    pub fn stop_dictation(&self) -> Result<(), DictationError> {
        self.services.dictation_service().stop_dictation()
    }

    /// Show secondary actions for a long-pressed button. Returns whether a
    /// callout is showing.
    pub fn update_action_callout(&mut self, action: &Action, frame: Frame) -> bool {
        self.store
            .callout
            .update(|c| c.action_callout.update_for(action, frame))
    }

    pub fn select_callout_action(&mut self, index: usize) {
        self.store.callout.update(|c| c.action_callout.select(index));
    }

    /// Close the action callout and run the selected action, if any.
    pub fn end_action_callout(&mut self) -> Option<ActionEffect> {
        let selected = self.store.callout.update(|c| {
            let selected = c.action_callout.selected_action().cloned();
            c.action_callout.reset();
            selected
        });
        selected.map(|action| self.handle_action(&action))
    }

    pub fn update_input_callout(&mut self, action: &Action, frame: Frame) {
        self.store
            .callout
            .update(|c| c.input_callout.update_for(action, frame));
    }

    pub fn reset_input_callout(&mut self) {
        self.store.callout.update(|c| c.input_callout.reset());
    }

    pub fn button_style(&self, action: &Action, is_pressed: bool) -> StyleDescriptor {
        let provider = self.services.style_provider();
        self.store
            .keyboard
            .read(|ctx| provider.button_style(action, ctx, is_pressed))
    }

    pub fn keyboard_layout(&self) -> KeyboardLayout {
        let provider = self.services.layout_provider();
        self.store.keyboard.read(|ctx| provider.keyboard_layout(ctx))
    }
}
