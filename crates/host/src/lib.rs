//! Host capability boundary of the binding layer.
//!
//! The [`Host`] trait is the single polymorphic object through which every
//! primitive reaches the execution environment; [`MockHost`] implements the
//! full contract in memory for tests and local runs.

pub mod interface;
pub use interface::Host;

pub mod mock;
pub use mock::{EnqueuedMessage, MockHost};
