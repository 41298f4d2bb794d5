//! Wire encoding for vmwire
//!
//! This crate is the JSON host that serialization contracts plug into. A walk
//! consults the [`Contract`] twice per property:
//!
//! 1. [`Contract::create_property`]: is the property emitted?
//! 2. [`Contract::resolve_converter`]: which [`Converter`] encodes its value?
//!
//! The host's own policy, [`DefaultContract`], emits every member the schema
//! does not skip and encodes everything structurally.
//!
//! ## Encoding Rules
//!
//! | Value | JSON Encoding |
//! |-------|--------------|
//! | Leaf (serde) | serde encoding |
//! | View model | `{...}` in declaration order |
//! | `Vec<T>` | `[...]` |
//! | `Option<T>` | value or `null` |
//! | Command / delegate | no structural encoding (error under the default contract) |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod converter;
pub mod json;

// Re-export main types
pub use contract::{default_property, Contract, DefaultContract};
pub use converter::{default_converter, Converter, DefaultConverter};
pub use json::{populate, to_string, to_value, Populator, Serializer};
