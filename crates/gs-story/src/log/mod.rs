//! The mission log: an append-only record of a play session.

pub mod entry;
pub mod mission;

pub use entry::LogEntry;
pub use mission::MissionLog;
