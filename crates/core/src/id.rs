//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are plain integers on the wire. Positivity is a business rule and is
//! checked by the calendar layer, so these wrappers accept any value.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of the user owning a set of events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

/// Identifier of an event, unique within one user's events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }

            /// Identifiers must be strictly positive to be accepted into the store.
            pub const fn is_positive(self) -> bool {
                self.0 > 0
            }

            /// Fail with a validation error unless the identifier is positive.
            pub fn ensure_positive(self) -> Result<Self, DomainError> {
                if self.is_positive() {
                    Ok(self)
                } else {
                    Err(DomainError::validation(format!(
                        "{} must be positive, got {}",
                        $name, self.0
                    )))
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| DomainError::validation(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(UserId, "user_id");
impl_int_newtype!(EventId, "id");
