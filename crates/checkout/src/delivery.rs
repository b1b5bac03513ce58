//! Delivery details captured at checkout.

use serde::Serialize;

use crate::error::{CheckoutError, Result};

/// Where and how to deliver an order.
///
/// Values are trimmed on construction; blank notes are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryDetails {
    address: String,
    phone: String,
    notes: Option<String>,
}

impl DeliveryDetails {
    /// Validates and normalizes delivery input.
    ///
    /// Fails with [`CheckoutError::IncompleteDelivery`] when the address or
    /// phone is blank.
    pub fn new(address: &str, phone: &str, notes: Option<&str>) -> Result<Self> {
        let address = address.trim();
        if address.is_empty() {
            return Err(CheckoutError::IncompleteDelivery("address"));
        }

        let phone = phone.trim();
        if phone.is_empty() {
            return Err(CheckoutError::IncompleteDelivery("phone"));
        }

        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Self {
            address: address.to_string(),
            phone: phone.to_string(),
            notes,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
