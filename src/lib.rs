//! Garden Store Customer Services Library
//!
//! This library provides the catalog and cart operations behind a gardening
//! store's customer-service agent, exposed over a REST API and the Model
//! Context Protocol (MCP).

// Domain modules
pub mod cart;
pub mod catalog;
pub mod mcp;
pub mod service;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
