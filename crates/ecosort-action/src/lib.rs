//! Waste-info action engine for EcoSort.
//!
//! Resolves a waste-category slot to a response template, answers general
//! questions offline from a topic table, and emits replies through a
//! pluggable dispatcher.

pub mod action;
pub mod dispatcher;
pub mod error;
pub mod intent;

pub use action::{SlotTracker, Tracker, WasteInfoAction};
pub use dispatcher::{BotMessage, CollectingDispatcher, Dispatcher, Reply};
pub use error::ActionError;
pub use intent::resolver::{CategoryResolver, Explanation};
pub use intent::rules::{CategoryRule, RuleSet};
pub use intent::topics::{Topic, TopicResolver};
