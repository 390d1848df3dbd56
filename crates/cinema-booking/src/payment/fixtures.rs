//! Gateways with fixed behaviour. Used by tests and the demo binary.

use super::{PaymentOutcome, PaymentStrategy};
use crate::model::Money;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Approves every charge and counts the calls.
#[derive(Debug, Default)]
pub struct ApprovingGateway {
    calls: AtomicUsize,
}

impl ApprovingGateway {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentStrategy for ApprovingGateway {
    async fn process_payment(&self, _amount: Money) -> PaymentOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        PaymentOutcome::approved("test")
    }
}

/// Declines every charge with a fixed reason.
#[derive(Debug)]
pub struct DecliningGateway {
    reason: String,
    calls: AtomicUsize,
}

impl DecliningGateway {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for DecliningGateway {
    fn default() -> Self {
        Self::new("insufficient funds")
    }
}

#[async_trait]
impl PaymentStrategy for DecliningGateway {
    async fn process_payment(&self, _amount: Money) -> PaymentOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        PaymentOutcome::declined(self.reason.clone())
    }
}

/// Sleeps before approving. Longer than the payment timeout, it never answers in time.
#[derive(Debug)]
pub struct StalledGateway(pub Duration);

#[async_trait]
impl PaymentStrategy for StalledGateway {
    async fn process_payment(&self, _amount: Money) -> PaymentOutcome {
        tokio::time::sleep(self.0).await;
        PaymentOutcome::approved("late")
    }
}
