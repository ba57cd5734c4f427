//! Entity Model - the records the desk works with and their closed domains.
//!
//! Cases and clients live in the [`Store`](crate::Store); appointments and
//! documents come from the static [`Catalog`](crate::Catalog). Every closed
//! enumeration parses strictly through `FromStr` and leniently through
//! `parse_lossy`, which falls back to the domain's default variant.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Generates a closed, string-keyed enumeration with strict and lenient parsing.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($domain:literal, default = $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stable key of this variant (e.g. `"in-review"`).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Parse a key, falling back to the default variant on unknown input.
            pub fn parse_lossy(value: &str) -> Self {
                match value.parse() {
                    Ok(parsed) => parsed,
                    Err(_) => {
                        tracing::warn!(domain = $domain, value, "unknown variant, using default");
                        $name::$default
                    }
                }
            }
        }

        impl $crate::model::Variant for $name {
            fn all() -> &'static [Self] {
                $name::ALL
            }

            fn key(&self) -> &'static str {
                self.as_str()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    _ => Err($crate::model::ModelError::UnknownVariant {
                        domain: $domain,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod appointment;
mod case;
mod client;
mod document;
mod view;

pub use appointment::{Appointment, AppointmentKind};
pub use case::{Case, CasePatch, CaseStatus, Priority};
pub use client::{Client, ClientPatch, ClientStatus};
pub use document::{Document, DocumentKind};
pub use view::View;

/// Trait for types that live in an id-addressed collection.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// The collection this record belongs to (e.g. "cases", "clients").
    const COLLECTION: &'static str;

    /// Returns the identifier of this record.
    fn id(&self) -> &str;
}

/// A member of a closed enumeration with stable string keys.
pub trait Variant:
    Copy + Eq + std::hash::Hash + std::str::FromStr<Err = ModelError> + fmt::Debug + 'static
{
    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    fn key(&self) -> &'static str;
}

/// Error type for entity model parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A key outside a closed enumeration.
    UnknownVariant { domain: &'static str, value: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownVariant { domain, value } => {
                write!(f, "unknown {} value '{}'", domain, value)
            }
        }
    }
}

impl std::error::Error for ModelError {}
