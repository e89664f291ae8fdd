//! Core types and definitions for the pursuit AI workspace.
//!
//! This crate defines the vocabulary shared across all other crates:
//! world snapshots, intent records, enums, tuning constants, and
//! validated configuration. It has no dependency on any runtime framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod types;
