//! Greengrocer Core - Shared types library.
//!
//! This crate provides common types used across the Greengrocer order
//! backend. It contains only types - no I/O, no database access, no HTTP
//! clients - which keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, addresses, ids, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
