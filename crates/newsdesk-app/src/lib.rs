//! Newsdesk App Services
//!
//! File-backed state storage, the backend news source, and the composition
//! root that wires stores and routes together.
//! Depends on the `newsdesk` core crate.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;
