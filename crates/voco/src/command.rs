//! Phrase normalization and the spoken-command tables.

pub mod phrase;
pub mod tables;

pub use phrase::normalize;
pub use tables::{BuiltinAction, CommandTables, Resolved};
