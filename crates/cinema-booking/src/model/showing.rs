use super::{RoomId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub duration_minutes: u32,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if duration_minutes == 0 {
            return Err(ValidationError::InvalidDuration);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            genre: genre.into(),
            duration_minutes,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowingId(pub Uuid);

impl Display for ShowingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "showing_{}", self.0)
    }
}

/// A movie scheduled in a room. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showing {
    pub id: ShowingId,
    pub movie: Movie,
    pub scheduled_at: DateTime<Utc>,
    pub room: RoomId,
}

impl Showing {
    pub fn new(
        movie: Movie,
        scheduled_at: DateTime<Utc>,
        room: RoomId,
    ) -> Result<Self, ValidationError> {
        if room.0.trim().is_empty() {
            return Err(ValidationError::MissingRoom);
        }
        Ok(Self {
            id: ShowingId(Uuid::new_v4()),
            movie,
            scheduled_at,
            room,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_validation() {
        assert!(Movie::new("Matrix", "Sci-Fi", 136).is_ok());
        assert_eq!(Movie::new(" ", "Sci-Fi", 136), Err(ValidationError::EmptyTitle));
        assert_eq!(Movie::new("Matrix", "Sci-Fi", 0), Err(ValidationError::InvalidDuration));
    }

    #[test]
    fn test_showing_requires_room() {
        let movie = Movie::new("Matrix", "Sci-Fi", 136).unwrap();
        let err = Showing::new(movie, Utc::now(), RoomId::from("")).unwrap_err();
        assert_eq!(err, ValidationError::MissingRoom);
    }
}
