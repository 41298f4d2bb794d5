//! # vmwire
//!
//! Selective JSON serialization for MVVM view models.
//!
//! A view model exposes a list of named properties. Before it goes over the
//! wire to a client, vmwire decides which of those properties appear and how
//! each one is encoded:
//!
//! - Commands (and actions that return nothing) are written as `null`
//! - Reactive properties are written as their current inner value
//! - Properties carrying an ignore marker, or named in the pass's ignore
//!   set, are left out
//! - Everything else is encoded structurally
//!
//! ## Quick Start
//!
//! ```ignore
//! use vmwire::prelude::*;
//!
//! // Default resolver, nothing suppressed by name
//! let text = vmwire::to_string(&person)?;
//!
//! // Suppress "Age" for this pass
//! let resolver = ContractResolver::builder().ignore_property("Age").build();
//! let text = vmwire::to_string_with(&person, &resolver)?;
//!
//! // Incoming updates never reach commands or reactive properties
//! let err = vmwire::populate(&mut person, r#"{"Save": 1}"#).unwrap_err();
//! assert!(err.is_unsupported());
//! ```
//!
//! ## Crates
//!
//! - `vmwire-core`: object model ([`TypeHandle`], [`Reflect`], [`Schema`])
//! - `vmwire-wire`: contract-driven JSON host ([`Serializer`], [`Populator`])
//! - `vmwire-resolver`: the view-model policy ([`ContractResolver`])

#![warn(missing_docs)]

mod json;

pub mod prelude;

// Re-export main entry points
pub use json::{
    populate, resolver_ignoring, shared_resolver, to_string, to_string_with, to_value,
    to_value_with,
};
pub use vmwire_resolver::{
    classify, command_converter, filter_property, reactive_property_converter, CommandConverter,
    ContractResolver, ContractResolverBuilder, ReactivePropertyConverter, Resolution,
    ResolutionRule, ResolverOptions,
};

// Re-export the JSON host
pub use vmwire_wire::{
    default_converter, default_property, Contract, Converter, DefaultContract, DefaultConverter,
    Populator, Serializer,
};

// Re-export the object model
pub use vmwire_core::*;
