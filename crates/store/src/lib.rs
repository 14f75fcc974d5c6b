//! Event persistence and aggregation for the Sightline analytics pipeline.
//!
//! The store itself is a collaborator behind the [`EventStore`] trait;
//! a durable backend plugs in at that seam. [`MemoryEventStore`] is the
//! in-process implementation the binary and tests run against.

pub mod aggregate;
pub mod memory;
pub mod store;

pub use aggregate::AggregationEngine;
pub use memory::MemoryEventStore;
pub use store::EventStore;
