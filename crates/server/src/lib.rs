//! Greengrocer server library.
//!
//! This crate provides the order backend as a library, allowing it to be
//! tested black-box and reused. The binary in `main.rs` is a thin wrapper
//! that loads configuration and serves [`routes::router`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
