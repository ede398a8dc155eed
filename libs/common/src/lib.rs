//! Common library for the storefront backend
//!
//! This crate provides the infrastructure shared by the services:
//! configuration loading, database connectivity, and the error types
//! both of those produce.

pub mod config;
pub mod database;
pub mod error;
