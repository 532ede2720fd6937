//! Request bodies shared by every product.
//!
//! The provider expects every key of the wide [`QueryPayload`] on each call,
//! with unused fields sent as empty strings. None of the fields carry
//! `skip_serializing_if`: dropping empty keys changes the wire format.

use crate::core::OkraError;
use serde::Serialize;

/// Union of every field a product query may need.
///
/// Queries populate only the fields relevant to them; everything else stays
/// `""` and is still transmitted. Field order matches the provider's
/// documented body, so identical inputs always serialize to identical bytes.
///
/// ```
/// # use okra_rs::QueryPayload;
/// let body = QueryPayload::paged("1", "10").customer("cus_1");
/// assert_eq!(body.customer_id, "cus_1");
/// assert_eq!(body.bank_id, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryPayload {
    /// Page number (wire key `page`).
    pub page: String,
    /// Page size (wire key `limit`).
    pub limit: String,
    /// Customer id (wire key `customer`).
    #[serde(rename = "customer")]
    pub customer_id: String,
    /// Start of a date range (wire key `from`).
    #[serde(rename = "from")]
    pub date_from: String,
    /// End of a date range (wire key `to`).
    #[serde(rename = "to")]
    pub date_to: String,
    /// Bank id (wire key `bank`).
    #[serde(rename = "bank")]
    pub bank_id: String,
    /// Record id for by-id lookups (wire key `id`).
    pub id: String,
    /// Account id used by balance-by-account lookups (wire key `account`).
    #[serde(rename = "account")]
    pub account_id: String,
    /// Balance type, e.g. `ledger_balance` (wire key `type`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount paired with the balance type (wire key `amount`).
    pub amount: String,
    /// Account used by real-time balance lookups (wire key `account_id`).
    #[serde(rename = "account_id")]
    pub account: String,
    /// Record the real-time balance belongs to (wire key `record_id`).
    pub record_id: String,
    /// Currency code for real-time balances (wire key `currency`).
    pub currency: String,
}

impl QueryPayload {
    /// A payload with only `page` and `limit` set.
    pub fn paged(page: impl Into<String>, limit: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            limit: limit.into(),
            ..Self::default()
        }
    }

    /// Set the record id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the customer id.
    #[must_use]
    pub fn customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    /// Sets `from` and `to`. Dates are passed through as given.
    #[must_use]
    pub fn date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.date_from = from.into();
        self.date_to = to.into();
        self
    }

    /// Set the bank id.
    #[must_use]
    pub fn bank(mut self, bank_id: impl Into<String>) -> Self {
        self.bank_id = bank_id.into();
        self
    }

    /// Set the account id sent under `account`.
    #[must_use]
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    /// Set the balance type sent under `type`.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the amount.
    #[must_use]
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Set the account sent under `account_id`.
    #[must_use]
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Set the record id sent under `record_id`.
    #[must_use]
    pub fn record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = record_id.into();
        self
    }

    /// Set the currency.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// The name pair supplied as widget metadata when a customer connected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameOptions {
    /// Wire key `first_name`.
    pub first_name: String,
    /// Wire key `last_name`.
    pub last_name: String,
}

/// Body of the "by options" queries: `page`, `limit` and a nested `options` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionsPayload {
    /// Page number.
    pub page: String,
    /// Page size.
    pub limit: String,
    /// Nested `options` object.
    pub options: NameOptions,
}

impl OptionsPayload {
    /// Builds the body from paging values and the name pair.
    ///
    /// ```
    /// # use okra_rs::OptionsPayload;
    /// let body = OptionsPayload::new("1", "10", "Ada", "Lovelace");
    /// assert_eq!(body.options.last_name, "Lovelace");
    /// ```
    pub fn new(
        page: impl Into<String>,
        limit: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            page: page.into(),
            limit: limit.into(),
            options: NameOptions {
                first_name: first_name.into(),
                last_name: last_name.into(),
            },
        }
    }
}

/// Serializes a payload into the request body bytes.
pub(crate) fn to_body<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, OkraError> {
    Ok(serde_json::to_vec(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn by_id_body_keeps_every_key() {
        let body = text(to_body(&QueryPayload::paged("", "").id("42")).unwrap());
        assert_eq!(
            body,
            r#"{"page":"","limit":"","customer":"","from":"","to":"","bank":"","id":"42","account":"","type":"","amount":"","account_id":"","record_id":"","currency":""}"#
        );
    }

    #[test]
    fn account_keys_are_not_swapped() {
        let v = serde_json::to_value(
            QueryPayload::default()
                .account_id("acc-balance")
                .account("acc-periodic"),
        )
        .unwrap();
        assert_eq!(v["account"], "acc-balance");
        assert_eq!(v["account_id"], "acc-periodic");
    }

    #[test]
    fn only_populated_fields_are_non_empty() {
        let v = serde_json::to_value(
            QueryPayload::paged("2", "50")
                .date_range("2020-01-01", "2020-02-01")
                .customer("cus_9"),
        )
        .unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 13);

        // serde_json::Map iterates in key order without `preserve_order`
        let mut populated: Vec<&str> = obj
            .iter()
            .filter(|(_, v)| v.as_str() != Some(""))
            .map(|(k, _)| k.as_str())
            .collect();
        populated.sort_unstable();
        assert_eq!(populated, ["customer", "from", "limit", "page", "to"]);
    }

    #[test]
    fn options_body_is_nested() {
        let body = text(to_body(&OptionsPayload::new("1", "10", "Ada", "Lovelace")).unwrap());
        assert_eq!(
            body,
            r#"{"page":"1","limit":"10","options":{"first_name":"Ada","last_name":"Lovelace"}}"#
        );
    }

    #[test]
    fn serialization_is_deterministic() {
        let build = || QueryPayload::paged("1", "10").kind("ledger").amount("100");
        assert_eq!(to_body(&build()).unwrap(), to_body(&build()).unwrap());
    }
}
