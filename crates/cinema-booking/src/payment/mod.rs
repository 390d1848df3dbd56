//! # Payment Strategies
//!
//! The engine charges a reservation through whatever [`PaymentStrategy`] the
//! caller hands it, exactly once per attempt. It never inspects which variant
//! it was given.
//!
//! - [`CardPayment`]: card number checked locally (length and Luhn) before charging
//! - [`PayPalPayment`]: account email checked before charging
//! - [`fixtures`]: gateways with fixed behaviour for tests and demos

pub mod card;
pub mod fixtures;
pub mod paypal;

pub use card::CardPayment;
pub use paypal::PayPalPayment;

use crate::model::Money;
use async_trait::async_trait;
use uuid::Uuid;

/// Result of one charge attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved { transaction_id: String },
    Declined { reason: String },
}

impl PaymentOutcome {
    /// Approval with a freshly minted transaction id.
    pub fn approved(prefix: &str) -> Self {
        PaymentOutcome::Approved {
            transaction_id: format!("{prefix}_{}", Uuid::new_v4().simple()),
        }
    }

    pub fn declined(reason: impl Into<String>) -> Self {
        PaymentOutcome::Declined {
            reason: reason.into(),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved { .. })
    }
}

/// A way of paying for a reservation.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    async fn process_payment(&self, amount: Money) -> PaymentOutcome;
}
