//! Balance product: account balances, historical and real-time.
//!
//! See <https://docs.okra.ng/products/balance>.

use crate::core::{Endpoint, OkraClient, OkraError, QueryPayload, query};

const RETRIEVE: Endpoint = Endpoint::new("products/balances", "error retrieving bank balance");
const BY_ID: Endpoint = Endpoint::new("balance/getById", "error fetching balance using id");
const BY_OPTIONS: Endpoint =
    Endpoint::new("balance/byOptions", "error retrieving balance byoptions");
const BY_CUSTOMER: Endpoint =
    Endpoint::new("balance/getByCustomer", "error retrieving balance bycustomer");
const BY_ACCOUNT: Endpoint =
    Endpoint::new("balance/getByAccount", "error retrieving balance by accountID");
const BY_TYPE: Endpoint = Endpoint::new("balance/getByType", "error retrieving balance by type");
const BY_CUSTOMER_DATE: Endpoint = Endpoint::new(
    "balance/getByCustomerDate",
    "error retrieving balance byCustomerDate",
);
const REAL_TIME: Endpoint =
    Endpoint::new("products/balance/periodic", "error retrieving real time balance");

/// Queries for account balances. Obtained from [`OkraClient::balance`].
#[derive(Debug, Clone, Copy)]
pub struct BalanceApi<'a> {
    client: &'a OkraClient,
}

impl<'a> BalanceApi<'a> {
    pub(crate) const fn new(client: &'a OkraClient) -> Self {
        Self { client }
    }

    /// Retrieves all balances.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn retrieve(&self) -> Result<String, OkraError> {
        query::retrieve(self.client, &RETRIEVE).await
    }

    /// Fetches a balance by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_id(&self, page: &str, limit: &str, id: &str) -> Result<String, OkraError> {
        query::by_id(self.client, &BY_ID, page, limit, id).await
    }

    /// Fetches balances by the options metadata given when setting up the widget.
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

    /// Fetches balances for a customer.
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

    /// Fetches balances for an account.
    ///
    /// The id is sent under the `account` key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_account(
        &self,
        page: &str,
        limit: &str,
        account_id: &str,
    ) -> Result<String, OkraError> {
        let payload = QueryPayload::paged(page, limit).account_id(account_id);
        query::fetch(self.client, &BY_ACCOUNT, &payload).await
    }

    /// Fetches balances of a given type, e.g. `ledger` or `available`, and amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn by_type(
        &self,
        page: &str,
        limit: &str,
        kind: &str,
        amount: &str,
    ) -> Result<String, OkraError> {
        let payload = QueryPayload::paged(page, limit).kind(kind).amount(amount);
        query::fetch(self.client, &BY_TYPE, &payload).await
    }

    /// Fetches a customer's balances within a date range.
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

    /// Fetches the current balance of a record's account without recomputing it
    /// from transactions.
    ///
    /// Sends `currency`, `record_id` and `account_id`; `page` and `limit` stay empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, sent, or read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn real_time(
        &self,
        currency: &str,
        record_id: &str,
        account_id: &str,
    ) -> Result<String, OkraError> {
        let payload = QueryPayload::default()
            .currency(currency)
            .record_id(record_id)
            .account(account_id);
        query::fetch(self.client, &REAL_TIME, &payload).await
    }
}
