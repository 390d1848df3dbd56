use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// The party that books and pays for seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Creates a customer with a fresh id.
    ///
    /// # Errors
    /// [`ValidationError::EmptyName`] for a blank name and
    /// [`ValidationError::InvalidEmail`] when the address has no `@` or nothing
    /// on either side of it.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_plausible_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        Ok(Self {
            id: CustomerId(Uuid::new_v4()),
            name,
            email,
        })
    }
}

/// `local@domain`, both parts non-empty, no whitespace.
pub(crate) fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_gets_unique_id() {
        let a = Customer::new("Ana", "ana@example.com").unwrap();
        let b = Customer::new("Ana", "ana@example.com").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_rejects_blank_name() {
        assert_eq!(
            Customer::new("   ", "ana@example.com"),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_rejects_malformed_email() {
        for bad in ["", "ana", "@example.com", "ana@", "a b@example.com", "a@b@c"] {
            assert!(
                matches!(Customer::new("Ana", bad), Err(ValidationError::InvalidEmail(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
