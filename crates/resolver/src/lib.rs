//! View-model contract resolution for vmwire
//!
//! This crate provides [`ContractResolver`], the policy object that plugs into
//! the `vmwire-wire` host and decides, per property:
//!
//! - whether the property is emitted ([`filter_property`]): members carrying
//!   the ignore marker and names in the resolver's ignore set are suppressed
//! - which converter encodes its value ([`classify`]):
//!
//! | Declared type | Output |
//! |---------------|--------|
//! | command | `null` |
//! | `ReactiveProperty<T>` | the current `T`, encoded as if `T` were the property |
//! | void delegate | `null` |
//! | anything else | structural |
//!
//! The command and reactive converters are write-only; decoding through them
//! fails with `Error::UnsupportedOperation`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod converters;
pub mod filter;
pub mod options;
pub mod resolution;
pub mod resolver;

pub use converters::{
    command_converter, reactive_property_converter, CommandConverter, ReactivePropertyConverter,
};
pub use filter::filter_property;
pub use options::ResolverOptions;
pub use resolution::{classify, Resolution, ResolutionRule};
pub use resolver::{ContractResolver, ContractResolverBuilder};
