//! Persistence of run headers and recorded events.

pub mod records;

pub use records::JsonLinesSink;
