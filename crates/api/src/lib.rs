//! The tripline HTTP API.
//!
//! Exposed as a library so integration tests can build the exact same
//! router and middleware stack the production binary uses.

pub mod access;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod presenters;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
