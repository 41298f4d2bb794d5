//! Convenient imports for vmwire.
//!
//! This module re-exports the most commonly used types so you can declare
//! and serialize a view model with a single import:
//!
//! ```ignore
//! use vmwire::prelude::*;
//!
//! let resolver = ContractResolver::builder().ignore_property("Age").build();
//! let text = vmwire::to_string_with(&person, &resolver)?;
//! ```

// Main entry points
pub use crate::json::{populate, to_string, to_string_with, to_value, to_value_with};
pub use vmwire_resolver::{ContractResolver, ContractResolverBuilder, ResolverOptions};

// Error handling
pub use vmwire_core::{Error, Result};

// Declaring view models
pub use vmwire_core::{
    impl_reflect_value, impl_reflect_view_model, MemberOptions, Reflect, Schema, SchemaBuilder,
    Typed, ViewModel,
};

// Special property shapes
pub use vmwire_core::{Action, Command, Delegate, ReactiveProperty, RelayCommand};

// Per-pass state
pub use vmwire_core::IgnoreSet;

// Re-export serde_json for convenience
pub use serde_json::json;
