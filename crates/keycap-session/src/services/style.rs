use keycap_core::action::Action;
use keycap_core::context::KeyboardContext;
use keycap_core::style::{resolve_style, Distribution, StyleDescriptor};

pub trait StyleProvider: Send + Sync {
    fn button_style(
        &self,
        action: &Action,
        context: &KeyboardContext,
        is_pressed: bool,
    ) -> StyleDescriptor;
}

/// Delegates to the built-in resolver with a fixed row distribution.
#[derive(Debug, Default)]
pub struct StandardStyleProvider {
    distribution: Distribution,
}

impl StandardStyleProvider {
    pub fn new(distribution: Distribution) -> Self {
        Self { distribution }
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }
}

impl StyleProvider for StandardStyleProvider {
    fn button_style(
        &self,
        action: &Action,
        context: &KeyboardContext,
        is_pressed: bool,
    ) -> StyleDescriptor {
        resolve_style(action, context, is_pressed, self.distribution)
    }
}
