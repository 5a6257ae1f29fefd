//! Category and topic resolution.
//!
//! Both resolvers share one policy: lowercase the input, scan an ordered
//! keyword table, first match wins.

pub mod resolver;
pub mod rules;
pub mod topics;
