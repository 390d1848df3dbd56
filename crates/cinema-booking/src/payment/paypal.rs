use super::{PaymentOutcome, PaymentStrategy};
use crate::model::customer::is_plausible_email;
use crate::model::Money;
use async_trait::async_trait;
use tracing::{info, warn};

/// Pays through a PayPal account identified by email.
#[derive(Debug, Clone)]
pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[async_trait]
impl PaymentStrategy for PayPalPayment {
    async fn process_payment(&self, amount: Money) -> PaymentOutcome {
        if !is_plausible_email(&self.email) {
            warn!(account = %self.email, %amount, "PayPal account rejected");
            return PaymentOutcome::declined(format!("invalid PayPal account: {}", self.email));
        }
        info!(account = %self.email, %amount, "PayPal charged");
        PaymentOutcome::approved("paypal")
    }
}
