//! One-call serialization helpers.
//!
//! The plain helpers ([`to_value`], [`to_string`], [`populate`]) use a shared
//! process-wide [`ContractResolver`] with an empty ignore set. The `_with`
//! variants take an explicit resolver.

use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;
use vmwire_core::{IgnoreSet, Reflect, Result, ViewModel};
use vmwire_resolver::ContractResolver;
use vmwire_wire::{Populator, Serializer};

static SHARED: Lazy<ContractResolver> = Lazy::new(ContractResolver::new);

/// The shared resolver used by the plain helpers
pub fn shared_resolver() -> &'static ContractResolver {
    &SHARED
}

/// Shared resolver narrowed to `ignored`, reusing its converter cache
pub fn resolver_ignoring(ignored: IgnoreSet) -> ContractResolver {
    SHARED.with_ignored_property_names(ignored)
}

/// Encode `value` to a JSON value
pub fn to_value(value: &dyn Reflect) -> Result<JsonValue> {
    to_value_with(value, &SHARED)
}

/// Encode `value` to a JSON value under `resolver`
pub fn to_value_with(value: &dyn Reflect, resolver: &ContractResolver) -> Result<JsonValue> {
    Serializer::new(resolver).serialize(value)
}

/// Encode `value` to compact JSON text
pub fn to_string(value: &dyn Reflect) -> Result<String> {
    to_string_with(value, &SHARED)
}

/// Encode `value` to compact JSON text under `resolver`
pub fn to_string_with(value: &dyn Reflect, resolver: &ContractResolver) -> Result<String> {
    Serializer::new(resolver).to_string(value)
}

/// Decode `json` into `target`.
///
/// # Errors
///
/// Fails with `Error::UnsupportedOperation` if the JSON carries a value for a
/// command or reactive property. That check runs for every key before any
/// member is assigned, so a refused key leaves `target` unchanged.
pub fn populate(target: &mut dyn ViewModel, json: &str) -> Result<()> {
    Populator::new(&*SHARED).populate(target, json)
}
