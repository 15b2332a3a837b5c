//! Payload models for the Smart Card Tunisia API.
//!
//! These types define the JSON bodies returned by the handlers in `api/`.

pub mod health;
