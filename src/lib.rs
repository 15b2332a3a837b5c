//! Smart Card Tunisia API - Shared Library
//!
//! This crate contains the payload models shared by the API handlers.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and payloads defined in one place.

pub mod models;
