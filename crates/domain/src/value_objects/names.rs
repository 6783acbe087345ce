//! Validated name newtypes used by trait configuration
//!
//! Cursor and voice names are resolved by the renderer and the audio system,
//! so the only thing checked here is that they are usable lookup keys:
//! - Non-empty after trimming
//! - Within length limits

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for cursor and voice names
const MAX_NAME_LENGTH: usize = 64;

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new validated name.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::Validation` if the name is empty after
            /// trimming or longer than 64 characters.
            pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
                let name = name.into();
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!($label, " name cannot be empty")));
                }
                if trimmed.len() > MAX_NAME_LENGTH {
                    return Err(DomainError::validation(format!(
                        concat!($label, " name cannot exceed {} characters"),
                        MAX_NAME_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Wrap a built-in name that is valid by inspection.
            pub(crate) fn from_static(name: &'static str) -> Self {
                Self(name.to_string())
            }

            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }
    };
}

define_name!(
    /// Name of a mouse cursor shown while hovering a target (e.g. `move-blocked`)
    CursorName,
    "Cursor"
);

define_name!(
    /// Name of a voice-over category played when an order is acknowledged
    VoiceName,
    "Voice"
);
