//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity-specific failures travel
//! boxed inside [`FrameworkError::EntityError`] and are recovered by the
//! domain clients with [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when the error is not an entity error or when
    /// the boxed error is of a different type, so callers can fall back to their
    /// own mapping for transport failures.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("seat A1 is taken")]
    struct SeatTaken;

    #[derive(Debug, thiserror::Error)]
    #[error("room closed")]
    struct RoomClosed;

    #[test]
    fn test_entity_error_downcasts_to_original_type() {
        let err = FrameworkError::EntityError(Box::new(SeatTaken));
        assert_eq!(err.into_entity_error::<SeatTaken>().unwrap(), SeatTaken);
    }

    #[test]
    fn test_mismatched_entity_error_is_returned_intact() {
        let err = FrameworkError::EntityError(Box::new(RoomClosed));
        let back = err.into_entity_error::<SeatTaken>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: room closed");
    }

    #[test]
    fn test_transport_errors_pass_through() {
        let back = FrameworkError::ActorClosed
            .into_entity_error::<SeatTaken>()
            .unwrap_err();
        assert!(matches!(back, FrameworkError::ActorClosed));
    }
}
