//! Sensor dashboard - recent sensor readings shaped into six render-ready charts
//!
//! This library exposes the core modules for testing and reuse.

pub mod backend;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod host;
pub mod routes;
pub mod sync;
