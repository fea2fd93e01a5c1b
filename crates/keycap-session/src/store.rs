use std::sync::Arc;

use keycap_core::callout::{CalloutActionProvider, CalloutContext};
use keycap_core::context::{AutocompleteContext, KeyboardContext};
use keycap_core::feedback::FeedbackConfiguration;
use keycap_core::observable::Observable;

/// The session's observable records. Cloning shares the same cells, which is
/// how the rendering layer observes them.
#[derive(Clone)]
pub struct ContextStore {
    pub keyboard: Observable<KeyboardContext>,
    pub autocomplete: Observable<AutocompleteContext>,
    pub callout: Observable<CalloutContext>,
    pub feedback: Observable<FeedbackConfiguration>,
}

impl ContextStore {
    pub(crate) fn new(
        keyboard: KeyboardContext,
        callout_provider: Arc<dyn CalloutActionProvider>,
    ) -> Self {
        Self {
            keyboard: Observable::new(keyboard),
            autocomplete: Observable::new(AutocompleteContext::default()),
            callout: Observable::new(CalloutContext::new(callout_provider)),
            feedback: Observable::new(FeedbackConfiguration::default()),
        }
    }
}

impl std::fmt::Debug for ContextStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextStore")
            .field("keyboard", &self.keyboard)
            .field("autocomplete", &self.autocomplete)
            .field("callout", &self.callout)
            .field("feedback", &self.feedback)
            .finish()
    }
}
