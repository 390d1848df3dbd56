use super::{PaymentOutcome, PaymentStrategy};
use crate::model::Money;
use async_trait::async_trait;
use tracing::{info, warn};

/// Pays by credit or debit card.
///
/// Only the last four digits ever reach the logs.
#[derive(Clone)]
pub struct CardPayment {
    card_number: String,
}

impl CardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }

    /// `**** 1111` style rendering of the number.
    pub fn masked(&self) -> String {
        let digits = self.digits();
        let tail: String = digits
            .iter()
            .skip(digits.len().saturating_sub(4))
            .map(|d| char::from(b'0' + *d))
            .collect();
        format!("**** {tail}")
    }

    /// Digits after dropping spaces and dashes.
    fn digits(&self) -> Vec<u8> {
        self.card_number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .filter_map(|c| c.to_digit(10).map(|d| d as u8))
            .collect()
    }

    fn check(&self) -> Result<(), &'static str> {
        let cleaned: Vec<char> = self
            .card_number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();
        if cleaned.iter().any(|c| !c.is_ascii_digit()) {
            return Err("card number contains non-digit characters");
        }
        if !(12..=19).contains(&cleaned.len()) {
            return Err("card number must have 12 to 19 digits");
        }
        if !luhn_valid(&self.digits()) {
            return Err("card number failed checksum");
        }
        Ok(())
    }
}

impl std::fmt::Debug for CardPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardPayment")
            .field("card_number", &self.masked())
            .finish()
    }
}

fn luhn_valid(digits: &[u8]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

#[async_trait]
impl PaymentStrategy for CardPayment {
    async fn process_payment(&self, amount: Money) -> PaymentOutcome {
        let card = self.masked();
        if let Err(reason) = self.check() {
            warn!(%card, %amount, reason, "Card rejected");
            return PaymentOutcome::declined(reason);
        }
        info!(%card, %amount, "Card charged");
        PaymentOutcome::approved("card")
    }
}
