//! PostgreSQL-backed registry of clients and their phone numbers.
//!
//! [`db::Database`] exposes the schema, client, phone and search operations;
//! [`demo::run_demo`] walks through all of them once.

pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod models;

pub use error::{Error, Result};
