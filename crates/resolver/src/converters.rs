//! Write-only converters for commands and reactive properties.

use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use vmwire_core::{Error, Reflect, Result, TypeHandle};
use vmwire_wire::{Converter, Serializer};

/// Writes commands and void callbacks as `null`.
///
/// The command itself is never encoded, only its presence.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandConverter;

impl Converter for CommandConverter {
    fn name(&self) -> &'static str {
        "command"
    }

    fn can_convert(&self, ty: &TypeHandle) -> bool {
        ty.is_command() || ty.is_void_delegate()
    }

    fn write(&self, _value: &dyn Reflect, _serializer: &Serializer<'_>) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn read(&self, _json: JsonValue, ty: &TypeHandle) -> Result<JsonValue> {
        Err(Error::unsupported_read(ty.name()))
    }
}

/// Writes the current value of a reactive property in place of the wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactivePropertyConverter;

impl Converter for ReactivePropertyConverter {
    fn name(&self) -> &'static str {
        "reactive-property"
    }

    fn can_convert(&self, ty: &TypeHandle) -> bool {
        ty.has_reactive_origin()
    }

    fn write(&self, value: &dyn Reflect, serializer: &Serializer<'_>) -> Result<JsonValue> {
        let reactive = value.as_reactive().ok_or(Error::ShapeMismatch {
            type_name: value.runtime_type().name(),
            expected: "reactive value",
        })?;
        let inner = reactive.current();
        serializer.serialize(&*inner)
    }

    fn read(&self, _json: JsonValue, ty: &TypeHandle) -> Result<JsonValue> {
        Err(Error::unsupported_read(ty.name()))
    }
}

static COMMAND: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(CommandConverter));
static REACTIVE_PROPERTY: Lazy<Arc<dyn Converter>> =
    Lazy::new(|| Arc::new(ReactivePropertyConverter));

/// Shared instance of [`CommandConverter`]
pub fn command_converter() -> Arc<dyn Converter> {
    COMMAND.clone()
}

/// Shared instance of [`ReactivePropertyConverter`]
pub fn reactive_property_converter() -> Arc<dyn Converter> {
    REACTIVE_PROPERTY.clone()
}
