//! Common test utilities and helpers
//!
//! - Store fixtures
//! - Test server construction
//! - Custom assertion macros

#![allow(dead_code, unused_imports)]

#[macro_use]
pub mod assertions;
pub mod database;
pub mod server;

pub use database::*;
pub use server::*;
