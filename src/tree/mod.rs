//! Directory tree construction
//!
//! Builds the ordered in-memory tree a scan serializes: one node per
//! filesystem entry, directories before files at every level.

pub mod builder;
pub mod collate;
pub mod node;
pub mod path;
pub mod walker;
