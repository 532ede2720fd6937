//! okra-rs: typed async client for the Okra financial-data API.
//!
//! Every product method builds a JSON body, attaches the bearer token, POSTs
//! it to `<base_url><path>` and returns the raw response body as text. The
//! response JSON is not modeled; parse it with whatever suits the caller.
//!
//! ```no_run
//! use okra_rs::{OkraClient, soft_status};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), okra_rs::OkraError> {
//! let client = OkraClient::new("my-token", "https://api.okra.ng/v2/");
//!
//! let body = client.balance().by_customer("1", "20", "5f8c9a").await?;
//! if let Some(code) = soft_status(&body) {
//!     eprintln!("provider answered with status {code}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Status codes
//!
//! By default a non-200 response is *not* an error: the call returns `Ok`
//! with the text `"Status code returned was: <code>"`. Use [`soft_status`] to
//! detect it, or build the client with [`StatusPolicy::Error`] to get
//! [`OkraError::Status`] instead.
//!
//! # Features
//!
//! - `tracing`: instrument product methods and the transport with `tracing` spans and events.
//! - `tracing-subscriber`: pulls in `tracing-subscriber` for the demos.

#![forbid(unsafe_code)]

pub mod core;

/// Authentication records.
pub mod auth;
/// Account balances.
pub mod balance;
/// Transactions.
pub mod transaction;

pub use crate::core::{
    Endpoint, NameOptions, OkraClient, OkraClientBuilder, OkraError, OptionsPayload, Outcome,
    QueryPayload, StatusPolicy, soft_status,
};
pub use crate::core::client::{FAILURE_PLACEHOLDER, STATUS_MESSAGE_PREFIX};
pub use crate::core::query;
pub use auth::AuthApi;
pub use balance::BalanceApi;
pub use transaction::TransactionApi;
