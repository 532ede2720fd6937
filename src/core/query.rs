//! Generalized query operations every product specializes.
//!
//! Each operation builds its payload, sends it through the authenticated
//! transport and wraps any error with the endpoint's context. The two shared
//! lookups (`by_id`, `by_options`) add their own context underneath, so an
//! error reads `<endpoint context>: <lookup context>: <cause>`.
//!
//! These are public so that endpoints without a dedicated method can still be
//! reached with a custom [`Endpoint`]:
//!
//! ```no_run
//! # use okra_rs::{Endpoint, OkraClient, QueryPayload, query};
//! # #[tokio::main]
//! # async fn main() -> Result<(), okra_rs::OkraError> {
//! const IDENTITY_BY_CUSTOMER: Endpoint =
//!     Endpoint::new("identity/getByCustomer", "error retrieving identity bycustomer");
//!
//! let client = OkraClient::new("my-token", "https://api.okra.ng/v2/");
//! let payload = QueryPayload::paged("1", "10").customer("cus_1");
//! let body = query::fetch(&client, &IDENTITY_BY_CUSTOMER, &payload).await?;
//! # Ok(())
//! # }
//! ```

use crate::core::payload::{self, OptionsPayload, QueryPayload};
use crate::core::{Endpoint, OkraClient, OkraError, net};

pub(crate) const BY_ID_CONTEXT: &str = "error fetching product using id";
pub(crate) const BY_OPTIONS_CONTEXT: &str = "error retrieving product byoptions";

/// Looks up a record by id; only `page`, `limit` and `id` are populated.
///
/// # Errors
///
/// Returns the transport error wrapped in the id-lookup context and then the endpoint's context.
pub async fn by_id(
    client: &OkraClient,
    endpoint: &Endpoint,
    page: &str,
    limit: &str,
    id: &str,
) -> Result<String, OkraError> {
    let payload = QueryPayload::paged(page, limit).id(id);
    post_json(client, endpoint, &payload)
        .await
        .map_err(|e| e.context(BY_ID_CONTEXT).context(endpoint.context))
}

/// Looks up records by the name options supplied when the customer connected.
///
/// # Errors
///
/// Returns the transport error wrapped in the options-lookup context and then the endpoint's context.
pub async fn by_options(
    client: &OkraClient,
    endpoint: &Endpoint,
    page: &str,
    limit: &str,
    first_name: &str,
    last_name: &str,
) -> Result<String, OkraError> {
    let payload = OptionsPayload::new(page, limit, first_name, last_name);
    post_json(client, endpoint, &payload)
        .await
        .map_err(|e| e.context(BY_OPTIONS_CONTEXT).context(endpoint.context))
}

/// Sends an already populated [`QueryPayload`].
///
/// # Errors
///
/// Returns the serialization or transport error wrapped in the endpoint's context.
pub async fn fetch(
    client: &OkraClient,
    endpoint: &Endpoint,
    payload: &QueryPayload,
) -> Result<String, OkraError> {
    post_json(client, endpoint, payload)
        .await
        .map_err(|e| e.context(endpoint.context))
}

/// Calls an endpoint that takes no request body.
///
/// # Errors
///
/// Returns the transport error wrapped in the endpoint's context.
pub async fn retrieve(client: &OkraClient, endpoint: &Endpoint) -> Result<String, OkraError> {
    net::send(client, &endpoint.url(client.base_url()), None)
        .await
        .map_err(|e| e.context(endpoint.context))
}

async fn post_json<T: serde::Serialize + ?Sized>(
    client: &OkraClient,
    endpoint: &Endpoint,
    payload: &T,
) -> Result<String, OkraError> {
    let body = payload::to_body(payload)?;
    net::send(client, &endpoint.url(client.base_url()), Some(body)).await
}
