//! Customer domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use greengrocer_core::{Address, Email};

/// Profile fields submitted with an order's customer block.
///
/// The email is the unique customer key; the name fields are optional and
/// refreshed on every order when supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    /// Customer's email address (unique key).
    pub email: Email,
    /// Customer's first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Customer's last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// A customer record.
///
/// Created the first time an order arrives for an email; mutated only by
/// appending new delivery addresses and refreshing profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer's email address (unique key).
    pub email: Email,
    /// Customer's first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Customer's last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Distinct delivery addresses, in order of first use.
    pub addresses: Vec<Address>,
    /// When the customer was created.
    pub created_at: DateTime<Utc>,
    /// When the customer was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer from a profile, with a single delivery address.
    #[must_use]
    pub fn new(profile: CustomerProfile, address: Address) -> Self {
        let now = Utc::now();
        Self {
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            addresses: vec![address],
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a delivery address, appending it only when not already known.
    ///
    /// Returns `true` if the address was appended. Addresses are normalized
    /// (trimmed) by [`Address::parse`], so comparison is whitespace-stable.
    pub fn record_address(&mut self, address: Address) -> bool {
        if self.addresses.contains(&address) {
            return false;
        }
        self.addresses.push(address);
        true
    }

    /// Refresh profile fields from a newer order submission.
    ///
    /// Only fields present in the submission overwrite stored values.
    pub fn refresh_profile(&mut self, profile: &CustomerProfile) {
        if profile.first_name.is_some() {
            self.first_name.clone_from(&profile.first_name);
        }
        if profile.last_name.is_some() {
            self.last_name.clone_from(&profile.last_name);
        }
    }
}
