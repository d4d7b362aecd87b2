//! User record type definitions

use serde::{Deserialize, Serialize};

/// Scheme prefixed to the stored website value to build a link.
const WEBSITE_SCHEME: &str = "http://";

/// One user as returned by the remote directory
///
/// Unknown fields in the payload (`username`, `geo`, `catchPhrase`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable identifier, unique within the collection
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Bare host name, stored without a scheme
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// Postal address of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
}

/// Employer of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

impl UserRecord {
    /// Link target for the website field
    #[must_use]
    pub fn website_url(&self) -> String {
        format!("{WEBSITE_SCHEME}{}", self.website)
    }

    /// Single-line address: `street, suite, city`
    #[must_use]
    pub fn address_line(&self) -> String {
        format!(
            "{}, {}, {}",
            self.address.street, self.address.suite, self.address.city
        )
    }
}
