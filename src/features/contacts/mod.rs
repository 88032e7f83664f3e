//! # Feature: Support Network
//!
//! Support-contact rows and Brazilian phone helpers for the network cards.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.6.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Progressive input mask for the contact form
//! - 1.0.0: Initial release with contact validation

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One support contact in the family's network
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SupportContact {
    pub id: Uuid,
    pub name: String,
    /// Phone as typed; masked or raw digits both validate
    pub phone: String,
    /// Relationship label shown on the card ("avó", "babá", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
}

impl SupportContact {
    /// Validate a contact before it is handed to the storage layer
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow::anyhow!("Contact name must not be empty"));
        }

        let pattern = regex::Regex::new(r"^\(?\d{2}\)?\s?\d{4,5}-?\d{4}$")
            .map_err(|e| anyhow::anyhow!("Invalid phone pattern: {}", e))?;
        if !pattern.is_match(self.phone.trim()) {
            return Err(anyhow::anyhow!(
                "Phone for contact '{}' is not a valid Brazilian number: {}",
                self.name,
                self.phone
            ));
        }
        Ok(())
    }
}

/// Strip everything but ASCII digits
fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the Brazilian phone input mask progressively.
///
/// Full numbers come out as `"(11) 91234-5678"` (mobile) or
/// `"(11) 1234-5678"` (landline); partial input is masked as far as it
/// goes, so the form field can call this on every keystroke. Input beyond
/// 11 digits is cut off.
pub fn format_phone(input: &str) -> String {
    let digits: String = digits_only(input).chars().take(11).collect();

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}
