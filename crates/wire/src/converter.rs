//! Converter strategies
//!
//! A [`Converter`] encodes values of the types it handles, overriding the
//! host's structural encoding. The host picks one converter per declared type
//! through its [`Contract`](crate::Contract) and calls [`Converter::write`]
//! for every value of that type.

use crate::json::Serializer;
use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;
use vmwire_core::{Reflect, Result, TypeHandle};

/// Encoding strategy for one family of types.
pub trait Converter: Send + Sync + fmt::Debug {
    /// Short name, for logs
    fn name(&self) -> &'static str;

    /// Whether this converter handles `ty`
    fn can_convert(&self, ty: &TypeHandle) -> bool;

    /// Encode `value`. Nested values go back through `serializer`.
    fn write(&self, value: &dyn Reflect, serializer: &Serializer<'_>) -> Result<JsonValue>;

    /// Turn incoming JSON for a property of type `ty` into the JSON the
    /// property's setter decodes.
    fn read(&self, json: JsonValue, ty: &TypeHandle) -> Result<JsonValue>;
}

/// The host's structural encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl Converter for DefaultConverter {
    fn name(&self) -> &'static str {
        "default"
    }

    fn can_convert(&self, _ty: &TypeHandle) -> bool {
        true
    }

    fn write(&self, value: &dyn Reflect, serializer: &Serializer<'_>) -> Result<JsonValue> {
        serializer.serialize_structural(value)
    }

    fn read(&self, json: JsonValue, _ty: &TypeHandle) -> Result<JsonValue> {
        Ok(json)
    }
}

static DEFAULT_CONVERTER: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(DefaultConverter));

/// Shared instance of [`DefaultConverter`]
pub fn default_converter() -> Arc<dyn Converter> {
    DEFAULT_CONVERTER.clone()
}
