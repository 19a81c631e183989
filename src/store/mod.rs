//! Front-end state shared between form components.

pub mod node;

pub use node::{Node, NodeState, NodeStore, SubscriptionId};
