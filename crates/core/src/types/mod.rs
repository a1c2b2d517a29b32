//! Core types for Greengrocer.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod email;
pub mod id;
pub mod status;

pub use address::{Address, AddressError};
pub use email::{Email, EmailError};
pub use id::OrderId;
pub use status::OrderStatus;
