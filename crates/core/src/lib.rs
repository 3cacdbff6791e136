//! Shared domain types and validation for the tripline platform.
//!
//! This crate has no I/O: everything here is pure data and pure functions,
//! usable from the DB layer, the API layer, and tests alike.

pub mod chat;
pub mod diary;
pub mod error;
pub mod favorite;
pub mod geo;
pub mod rel;
pub mod review;
pub mod trip;
pub mod types;
