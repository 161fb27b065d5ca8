//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion clients (GLM over HTTP, offline mock)
//! - MCP server exposing the consultation tools
//! - CLI container, router and controllers

pub mod adapter;
pub mod api;

pub use adapter::*;
