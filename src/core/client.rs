//! Client record types
//!
//! The client record is the sole entity managed by this service. Identifiers
//! follow the `CL###` scheme: a zero-padded 3-digit sequence assigned by the
//! store at creation time. The form layer may compute a *preview* identifier
//! from the count of existing records, but that preview is advisory only —
//! the store's assigned identifier is authoritative.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a client record (`CL001`, `CL002`, ...)
///
/// Immutable after creation. Serialized as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Build an identifier from a sequence number (`1` → `CL001`)
    ///
    /// The numeric part is zero-padded to at least three digits; larger
    /// sequence numbers keep their full width (`1000` → `CL1000`).
    pub fn from_seq(seq: u32) -> Self {
        Self(format!("CL{:03}", seq))
    }

    /// Compute the preview identifier for a new record given the number of
    /// records that already exist.
    ///
    /// This is a pure function of the snapshot count and is race-prone under
    /// concurrent creation, which is why the store assigns the real id.
    pub fn preview(existing_count: usize) -> Self {
        Self::from_seq(existing_count as u32 + 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Business unit classification codes
///
/// The wire format is the exact option string shown in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessUnit {
    Rm,
    Cs,
    A1,
    Etc,
}

impl BusinessUnit {
    /// All selectable options, in display order
    pub const ALL: [BusinessUnit; 4] = [
        BusinessUnit::Rm,
        BusinessUnit::Cs,
        BusinessUnit::A1,
        BusinessUnit::Etc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessUnit::Rm => "RM",
            BusinessUnit::Cs => "CS",
            BusinessUnit::A1 => "A1",
            BusinessUnit::Etc => "Etc",
        }
    }
}

impl fmt::Display for BusinessUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment channel selected for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMethod {
    CreditCard,
    BankTransfer,
}

impl BillingMethod {
    /// All selectable options, in display order
    pub const ALL: [BillingMethod; 2] = [BillingMethod::CreditCard, BillingMethod::BankTransfer];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingMethod::CreditCard => "Credit Card",
            BillingMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl fmt::Display for BillingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A full client record
///
/// All fields are carried as strings on the wire; missing fields deserialize
/// to the empty string. `currency` is always a function of `location` via the
/// catalog mapping and is never independently editable in the form layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Record identifier. Advisory in create payloads (the store assigns
    /// the real one), authoritative in stored records and update paths.
    #[serde(default = "empty_id")]
    pub client_id: ClientId,

    #[serde(default)]
    pub client_name: String,

    /// Derived from `location`; read-only in the form
    #[serde(default)]
    pub currency: String,

    /// Business unit code (one of [`BusinessUnit::ALL`])
    #[serde(default)]
    pub bu: String,

    /// Country name selected from the catalog list
    #[serde(default)]
    pub location: String,

    /// Payment channel (one of [`BillingMethod::ALL`])
    #[serde(default)]
    pub billing_method: String,

    #[serde(default)]
    pub email_id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

fn empty_id() -> ClientId {
    ClientId(String::new())
}

impl ClientRecord {
    /// An all-empty record, the starting point of a blank form
    pub fn empty() -> Self {
        Self {
            client_id: empty_id(),
            client_name: String::new(),
            currency: String::new(),
            bu: String::new(),
            location: String::new(),
            billing_method: String::new(),
            email_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_seq_pads_to_three_digits() {
        assert_eq!(ClientId::from_seq(1).as_str(), "CL001");
        assert_eq!(ClientId::from_seq(42).as_str(), "CL042");
        assert_eq!(ClientId::from_seq(999).as_str(), "CL999");
        assert_eq!(ClientId::from_seq(1000).as_str(), "CL1000");
    }

    #[test]
    fn test_preview_id_from_count() {
        assert_eq!(ClientId::preview(0).as_str(), "CL001");
        assert_eq!(ClientId::preview(5).as_str(), "CL006");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ClientId::from("CL007");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("CL007"));
    }

    #[test]
    fn test_enum_wire_strings() {
        assert_eq!(BusinessUnit::Rm.as_str(), "RM");
        assert_eq!(BusinessUnit::Etc.as_str(), "Etc");
        assert_eq!(BillingMethod::CreditCard.as_str(), "Credit Card");
        assert_eq!(BillingMethod::BankTransfer.as_str(), "Bank Transfer");
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty_strings() {
        let record: ClientRecord =
            serde_json::from_str(r#"{"client_id": "CL001", "client_name": "Acme"}"#).unwrap();

        assert_eq!(record.client_id.as_str(), "CL001");
        assert_eq!(record.client_name, "Acme");
        assert_eq!(record.currency, "");
        assert_eq!(record.bu, "");
        assert_eq!(record.location, "");
        assert_eq!(record.billing_method, "");
        assert_eq!(record.email_id, "");
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "");
    }

    #[test]
    fn test_record_round_trip() {
        let record = ClientRecord {
            client_id: ClientId::from("CL001"),
            client_name: "Acme".to_string(),
            currency: "JPY".to_string(),
            bu: "RM".to_string(),
            location: "Japan".to_string(),
            billing_method: "Credit Card".to_string(),
            email_id: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ClientRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
