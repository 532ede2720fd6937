//! Transaction product.
//!
//! See <https://docs.okra.ng/products/transactions>.

use crate::core::{Endpoint, OkraClient, OkraError, query};

const RETRIEVE: Endpoint = Endpoint::new("products/transactions", "error retrieving transactions");
const BY_ID: Endpoint = Endpoint::new("transaction/getById", "error fetching Transaction using id");
const BY_OPTIONS: Endpoint =
    Endpoint::new("transaction/byOptions", "error retrieving transaction byoptions");

/// Queries for transactions. Obtained from [`OkraClient::transaction`].
#[derive(Debug, Clone, Copy)]
pub struct TransactionApi<'a> {
    client: &'a OkraClient,
}

impl<'a> TransactionApi<'a> {
    pub(crate) const fn new(client: &'a OkraClient) -> Self {
        Self { client }
    }

    /// Retrieves all transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn retrieve(&self) -> Result<String, OkraError> {
        query::retrieve(self.client, &RETRIEVE).await
    }

    /// Fetches a transaction by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_id(&self, page: &str, limit: &str, id: &str) -> Result<String, OkraError> {
        query::by_id(self.client, &BY_ID, page, limit, id).await
    }

    /// Fetches transactions by the options metadata given when setting up the widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_options(
        &self,
        page: &str,
        limit: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, OkraError> {
        query::by_options(self.client, &BY_OPTIONS, page, limit, first_name, last_name).await
    }
}
