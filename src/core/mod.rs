//! Core components of the `okra-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`OkraClient`] and its builder.
//! - The primary [`OkraError`] type.
//! - The shared request payloads ([`QueryPayload`], [`OptionsPayload`]).
//! - The generalized query operations every product specializes.
//! - The authenticated transport.

/// The main client (`OkraClient`), builder, and configuration.
pub mod client;
/// Endpoint descriptors (path + error context).
pub mod endpoint;
/// The primary error type (`OkraError`) for the crate.
pub mod error;
/// Conversion into the `(text, error)` pair shape.
pub mod outcome;
/// Request bodies shared by every product.
pub mod payload;
/// Generalized query operations (`by_id`, `by_options`, `fetch`, `retrieve`).
pub mod query;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::OkraClient`
pub use client::{OkraClient, OkraClientBuilder, StatusPolicy};
pub use endpoint::Endpoint;
pub use error::OkraError;
pub use outcome::{Outcome, soft_status};
pub use payload::{NameOptions, OptionsPayload, QueryPayload};
