//! Runtime configuration.
//!
//! Defaults suit the demo; every field can be overridden from the environment
//! (or a `.env` file):
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `BOOKING_UNIT_PRICE_CENTS` | `unit_price_cents` | 1000 |
//! | `BOOKING_PAYMENT_TIMEOUT_MS` | `payment_timeout_ms` | 5000 |
//! | `BOOKING_HOLD_GRACE_MS` | `hold_grace_ms` | 1000 |
//! | `BOOKING_CHANNEL_BUFFER` | `channel_buffer` | 32 |

use crate::model::Money;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not a valid number: {value:?}")]
    Unparsable { name: &'static str, value: String },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Price of one seat.
    pub unit_price_cents: u64,
    /// Upper bound on a single payment call.
    pub payment_timeout_ms: u64,
    /// Extra time the inventory keeps an unconfirmed hold after the payment timeout.
    pub hold_grace_ms: u64,
    /// Mailbox size of each actor.
    pub channel_buffer: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            unit_price_cents: 1000,
            payment_timeout_ms: 5000,
            hold_grace_ms: 1000,
            channel_buffer: 32,
        }
    }
}

impl BookingConfig {
    /// Loads `.env` if present, then reads `BOOKING_*` variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`BookingConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            unit_price_cents: read(&lookup, "BOOKING_UNIT_PRICE_CENTS", defaults.unit_price_cents)?,
            payment_timeout_ms: read(&lookup, "BOOKING_PAYMENT_TIMEOUT_MS", defaults.payment_timeout_ms)?,
            hold_grace_ms: read(&lookup, "BOOKING_HOLD_GRACE_MS", defaults.hold_grace_ms)?,
            channel_buffer: read(&lookup, "BOOKING_CHANNEL_BUFFER", defaults.channel_buffer)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.payment_timeout_ms == 0 {
            return Err(ConfigError::Zero {
                name: "BOOKING_PAYMENT_TIMEOUT_MS",
            });
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::Zero {
                name: "BOOKING_CHANNEL_BUFFER",
            });
        }
        Ok(())
    }

    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    pub fn payment_timeout(&self) -> Duration {
        Duration::from_millis(self.payment_timeout_ms)
    }

    /// Lifetime of an inventory hold: payment timeout plus grace.
    pub fn hold_ttl(&self) -> Duration {
        Duration::from_millis(self.payment_timeout_ms.saturating_add(self.hold_grace_ms))
    }
}

fn read<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Unparsable { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BookingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.unit_price(), Money::from_cents(1000));
        assert_eq!(config.payment_timeout(), Duration::from_secs(5));
        assert_eq!(config.hold_ttl(), Duration::from_secs(6));
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_overrides() {
        let config = BookingConfig::from_lookup(lookup(&[
            ("BOOKING_UNIT_PRICE_CENTS", "850"),
            ("BOOKING_PAYMENT_TIMEOUT_MS", " 200 "),
        ]))
        .unwrap();
        assert_eq!(config.unit_price_cents, 850);
        assert_eq!(config.payment_timeout_ms, 200);
        assert_eq!(config.hold_grace_ms, 1000);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            BookingConfig::from_lookup(lookup(&[("BOOKING_HOLD_GRACE_MS", "soon")])).unwrap_err(),
            ConfigError::Unparsable {
                name: "BOOKING_HOLD_GRACE_MS",
                value: "soon".into()
            }
        );
        assert_eq!(
            BookingConfig::from_lookup(lookup(&[("BOOKING_CHANNEL_BUFFER", "0")])).unwrap_err(),
            ConfigError::Zero {
                name: "BOOKING_CHANNEL_BUFFER"
            }
        );
    }
}
