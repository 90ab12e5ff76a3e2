use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::NoteError;

/// Store-assigned identifier of a note
///
/// # Invariants
/// - Assigned once by the store on creation
/// - Never changes afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i32);

impl NoteId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl FromStr for NoteId {
    type Err = NoteError;

    /// Parses a path segment into an id
    ///
    /// # Example
    /// ```
    /// use notes_api::domain::note::NoteId;
    ///
    /// let id: NoteId = "42".parse().expect("numeric id");
    /// assert_eq!(id.value(), 42);
    /// assert!("abc".parse::<NoteId>().is_err());
    /// ```
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| NoteError::InvalidId(raw.to_string()))
    }
}

impl From<i32> for NoteId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
