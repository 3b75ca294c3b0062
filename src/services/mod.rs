//! Service layer module
//!
//! Contains the raw forwarding client, its retry wrapper and the typed roster service

pub mod client;
pub mod roster;

pub use client::*;
pub use roster::RosterService;
