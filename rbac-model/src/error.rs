use std::fmt::{self, Display};

/// Returned when text does not name one of the [`UserStatus`] variants.
///
/// [`UserStatus`]: crate::user::UserStatus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUserStatusError {
    value: String,
}

impl ParseUserStatusError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input, verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for ParseUserStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid user status: {:?}", self.value)
    }
}

impl std::error::Error for ParseUserStatusError {}
