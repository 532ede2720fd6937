//! Auth product: authentication records created when a customer connects a bank.
//!
//! See <https://docs.okra.ng/products/auth>.

use crate::core::{Endpoint, OkraClient, OkraError, QueryPayload, query};

const RETRIEVE: Endpoint = Endpoint::new("products/auths", "error retrieving auth token");
const BY_ID: Endpoint = Endpoint::new("auth/getById", "error fetching auth using id");
const BY_OPTIONS: Endpoint = Endpoint::new("auth/getByOptions", "error retrieving auth byoptions");
const BY_CUSTOMER: Endpoint =
    Endpoint::new("auth/getByCustomer", "error retrieving auth bycustomer");
const BY_DATE: Endpoint = Endpoint::new("auth/getByDate", "error retrieving auth byDateRange");
const BY_BANK: Endpoint = Endpoint::new("auth/getByBank", "error retrieving auth byBank");
const BY_CUSTOMER_DATE: Endpoint = Endpoint::new(
    "auth/getByCustomerDate",
    "error retrieving auth byCustomerDate",
);

/// Queries for authentication records. Obtained from [`OkraClient::auth`].
///
/// Every method returns the provider's response body unchanged.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a OkraClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a OkraClient) -> Self {
        Self { client }
    }

    /// Retrieves all authentication records.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn retrieve(&self) -> Result<String, OkraError> {
        query::retrieve(self.client, &RETRIEVE).await
    }

    /// Fetches an authentication record by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_id(&self, page: &str, limit: &str, id: &str) -> Result<String, OkraError> {
        query::by_id(self.client, &BY_ID, page, limit, id).await
    }

    /// Fetches authentication records by the options metadata given when setting up the widget.
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

    /// Fetches authentication records for a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_customer(
        &self,
        page: &str,
        limit: &str,
        customer_id: &str,
    ) -> Result<String, OkraError> {
        let payload = QueryPayload::paged(page, limit).customer(customer_id);
        query::fetch(self.client, &BY_CUSTOMER, &payload).await
    }

    /// Fetches authentication records created between `from` and `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_date_range(
        &self,
        page: &str,
        limit: &str,
        from: &str,
        to: &str,
    ) -> Result<String, OkraError> {
        let payload = QueryPayload::paged(page, limit).date_range(from, to);
        query::fetch(self.client, &BY_DATE, &payload).await
    }

    /// Fetches authentication records for a bank.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_bank(&self, page: &str, limit: &str, bank_id: &str) -> Result<String, OkraError> {
        let payload = QueryPayload::paged(page, limit).bank(bank_id);
        query::fetch(self.client, &BY_BANK, &payload).await
    }

    /// Fetches a customer's authentication records within a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_customer_date(
        &self,
        page: &str,
        limit: &str,
        from: &str,
        to: &str,
        customer_id: &str,
    ) -> Result<String, OkraError> {
        let payload = QueryPayload::paged(page, limit)
            .date_range(from, to)
            .customer(customer_id);
        query::fetch(self.client, &BY_CUSTOMER_DATE, &payload).await
    }
}
