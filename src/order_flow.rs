//! # Order Wizard Flow
//!
//! This module models the two-phase order flow as an explicit finite state
//! machine: the customer first proves their pincode is deliverable, then
//! fills in the order details. Submission composes a structured order
//! summary and hands off to an external messaging channel; the wizard
//! resets to the deliverability step afterwards.

use serde::Serialize;
use thiserror::Error;
use url::form_urlencoded::byte_serialize;
use utoipa::ToSchema;

/// Result of a deliverability lookup for one code.
///
/// Also serves as the response body of the public check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Deliverability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl Deliverability {
    pub fn available(area: impl Into<String>) -> Self {
        Self {
            available: true,
            area: Some(area.into()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            area: None,
        }
    }
}

/// Product the wizard was opened for, as shown in the order summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSummary {
    pub name: String,
    pub size: Option<String>,
    pub protein_percent: Option<String>,
    pub price: Option<f64>,
}

impl ProductSummary {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Detail fields collected in the second wizard step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDetails {
    pub customer_name: String,
    pub phone: String,
    pub quantity: String,
    pub district: String,
    pub state: String,
    pub address: String,
    pub notes: String,
}

/// Wizard states; details exist only while collecting them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// Initial step: waiting for a deliverable pincode.
    CheckingDeliverability { last_error: Option<String> },
    /// Pincode accepted; collecting the order details.
    CollectingDetails {
        pincode: String,
        area: Option<String>,
        details: OrderDetails,
    },
}

/// Errors surfaced by wizard transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please enter a valid 6-digit pincode")]
    InvalidPincode,
    #[error("Sorry, we don't deliver to this pincode yet. Contact us directly to arrange delivery.")]
    NotDeliverable,
    #[error("wizard is not in the expected step for this action")]
    WrongStep,
}

/// The two-phase order wizard
#[derive(Debug, Clone)]
pub struct OrderWizard {
    product: ProductSummary,
    contact_number: String,
    state: WizardState,
}

impl OrderWizard {
    /// Open the wizard for one product; starts at the deliverability step
    pub fn new(product: ProductSummary, contact_number: impl Into<String>) -> Self {
        Self {
            product,
            contact_number: contact_number.into(),
            state: WizardState::CheckingDeliverability { last_error: None },
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn product(&self) -> &ProductSummary {
        &self.product
    }

    /// Submit a pincode together with its lookup result.
    ///
    /// Advances to detail collection only for a syntactically valid 6-digit
    /// code that the lookup reports as deliverable; otherwise the wizard
    /// stays on the deliverability step with the failure message retained.
    pub fn submit_pincode(
        &mut self,
        code: &str,
        lookup: &Deliverability,
    ) -> Result<(), WizardError> {
        if !matches!(self.state, WizardState::CheckingDeliverability { .. }) {
            return Err(WizardError::WrongStep);
        }

        let code = code.trim();
        let result = if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            Err(WizardError::InvalidPincode)
        } else if !lookup.available {
            Err(WizardError::NotDeliverable)
        } else {
            Ok(())
        };

        match result {
            Ok(()) => {
                self.state = WizardState::CollectingDetails {
                    pincode: code.to_string(),
                    area: lookup.area.clone(),
                    details: OrderDetails::default(),
                };
                Ok(())
            }
            Err(err) => {
                self.state = WizardState::CheckingDeliverability {
                    last_error: Some(err.to_string()),
                };
                Err(err)
            }
        }
    }

    /// Replace the collected detail fields while on the detail step
    pub fn set_details(&mut self, details: OrderDetails) -> Result<(), WizardError> {
        match &mut self.state {
            WizardState::CollectingDetails { details: slot, .. } => {
                *slot = details;
                Ok(())
            }
            _ => Err(WizardError::WrongStep),
        }
    }

    /// Go back to the deliverability step.
    ///
    /// Collected detail values are dropped; re-entering the detail step
    /// starts from a blank form.
    pub fn change_pincode(&mut self) -> Result<(), WizardError> {
        match self.state {
            WizardState::CollectingDetails { .. } => {
                self.state = WizardState::CheckingDeliverability { last_error: None };
                Ok(())
            }
            _ => Err(WizardError::WrongStep),
        }
    }

    /// Compose the handoff URL for the collected order and reset the wizard.
    ///
    /// The summary is delegated to the external messaging channel; nothing
    /// is persisted here.
    pub fn submit(&mut self) -> Result<String, WizardError> {
        let WizardState::CollectingDetails {
            pincode,
            area,
            details,
        } = &self.state
        else {
            return Err(WizardError::WrongStep);
        };

        let message = compose_order_message(&self.product, details, pincode, area.as_deref());
        let url = handoff_url(&self.contact_number, &message);

        self.reset();
        Ok(url)
    }

    /// Reopening the wizard always starts from the deliverability step
    pub fn reset(&mut self) {
        self.state = WizardState::CheckingDeliverability { last_error: None };
    }
}

/// Compose the structured order summary sent over the messaging channel
pub fn compose_order_message(
    product: &ProductSummary,
    details: &OrderDetails,
    pincode: &str,
    area: Option<&str>,
) -> String {
    let quantity = if details.quantity.trim().is_empty() {
        "Not specified"
    } else {
        details.quantity.as_str()
    };

    let mut lines = vec![
        "*New Order Request*".to_string(),
        String::new(),
        format!("*Product:* {}", product.name),
    ];
    if let Some(size) = &product.size {
        lines.push(format!("*Size:* {}", size));
    }
    if let Some(protein) = &product.protein_percent {
        lines.push(format!("*Protein:* {}", protein));
    }
    if let Some(price) = product.price {
        lines.push(format!("*Price:* Rs {}/kg", price));
    }
    lines.push(format!("*Quantity:* {}", quantity));
    lines.push(String::new());
    lines.push(format!("*Name:* {}", details.customer_name));
    lines.push(format!("*Phone:* {}", details.phone));
    lines.push(format!("*District:* {}", details.district));
    lines.push(format!("*State:* {}", details.state));
    match area {
        Some(area) => lines.push(format!("*Pincode:* {} ({})", pincode, area)),
        None => lines.push(format!("*Pincode:* {}", pincode)),
    }
    lines.push(format!("*Address:* {}", details.address));

    if !details.notes.trim().is_empty() {
        lines.push(format!("*Notes:* {}", details.notes));
    }

    lines.join("\n")
}

/// Build the wa.me handoff URL carrying the encoded order summary
pub fn handoff_url(contact_number: &str, message: &str) -> String {
    let encoded: String = byte_serialize(message.as_bytes()).collect();
    format!("https://wa.me/{}?text={}", contact_number, encoded)
}
