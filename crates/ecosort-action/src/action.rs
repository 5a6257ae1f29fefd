//! The waste-info action.
//!
//! Reads the waste-category slot from the conversation, resolves it, and
//! turns the outcome into exactly one outgoing reply.

use std::collections::HashMap;

use ecosort_core::config::ResponseConfig;
use ecosort_core::types::ResolutionResult;
use tracing::info;

use crate::dispatcher::{Dispatcher, Reply};
use crate::error::ActionError;
use crate::intent::resolver::CategoryResolver;

/// Read-only view of the current conversation's slots.
pub trait Tracker {
    fn get_slot(&self, name: &str) -> Option<&str>;
}

/// `HashMap`-backed tracker.
#[derive(Debug, Clone, Default)]
pub struct SlotTracker {
    slots: HashMap<String, String>,
}

impl SlotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_slot(name, value);
        self
    }

    pub fn set_slot(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(name.into(), value.into());
    }
}

impl Tracker for SlotTracker {
    fn get_slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }
}

/// Answers "how do I dispose of X" once the category slot is filled.
#[derive(Debug, Clone)]
pub struct WasteInfoAction {
    resolver: CategoryResolver,
    responses: ResponseConfig,
}

impl WasteInfoAction {
    /// Name the dialogue runtime registers this action under.
    pub const NAME: &'static str = "action_provide_waste_info";

    /// Build the action, validating the response config up front.
    pub fn new(resolver: CategoryResolver, responses: ResponseConfig) -> Result<Self, ActionError> {
        responses.validate()?;
        Ok(Self {
            resolver,
            responses,
        })
    }

    pub fn resolver(&self) -> &CategoryResolver {
        &self.resolver
    }

    /// Resolve the slot and emit one reply. Returns the outcome acted on.
    pub fn run(&self, tracker: &dyn Tracker, dispatcher: &mut dyn Dispatcher) -> ResolutionResult {
        let slot = tracker.get_slot(&self.responses.slot_name);
        let result = self.resolver.resolve(slot);

        let reply = match &result {
            ResolutionResult::NeedsInput => Reply::Text(self.responses.clarify_prompt.clone()),
            ResolutionResult::Matched(id) => Reply::Template(id.template_name()),
            ResolutionResult::Unmatched(text) => {
                Reply::Text(self.responses.render_fallback(text))
            }
        };

        info!(action = Self::NAME, outcome = ?result, "Waste info action ran");
        dispatcher.utter(reply);
        result
    }
}
