//! Contract-driven JSON encoding
//!
//! The [`Serializer`] walks a value graph and asks its contract, per value, for
//! a converter. The default converter calls back into
//! [`Serializer::serialize_structural`], which encodes by [`Shape`]:
//!
//! | Shape | JSON |
//! |-------|------|
//! | Value | serde encoding of the leaf |
//! | Object | `{...}` in schema order, members filtered by the contract |
//! | Sequence | `[...]`, each element dispatched on its own type |
//! | Optional | inner value or `null` |
//! | Opaque | error, no structural encoding |

use crate::contract::Contract;
use serde_json::{Map, Value as JsonValue};
use std::io;
use tracing::trace;
use vmwire_core::{Error, Reflect, Result, Shape, ViewModel};

/// Encodes value graphs under a [`Contract`].
#[derive(Clone, Copy)]
pub struct Serializer<'c> {
    contract: &'c dyn Contract,
}

impl<'c> Serializer<'c> {
    /// Serializer consulting `contract`
    pub fn new(contract: &'c dyn Contract) -> Self {
        Self { contract }
    }

    /// The contract in use
    pub fn contract(&self) -> &'c dyn Contract {
        self.contract
    }

    /// Encode `value`, dispatching on its runtime type
    pub fn serialize(&self, value: &dyn Reflect) -> Result<JsonValue> {
        let ty = value.runtime_type();
        self.contract.resolve_converter(&ty).write(value, self)
    }

    /// Encode `value` by its shape, bypassing converter resolution for the
    /// value itself (nested values are still dispatched)
    pub fn serialize_structural(&self, value: &dyn Reflect) -> Result<JsonValue> {
        match value.shape() {
            Shape::Value(leaf) => Ok(leaf.to_json()?),
            Shape::Object(vm) => self.serialize_object(vm),
            Shape::Sequence(items) => items
                .into_iter()
                .map(|item| self.serialize(item))
                .collect::<Result<Vec<_>>>()
                .map(JsonValue::Array),
            Shape::Optional(Some(inner)) => self.serialize(inner),
            Shape::Optional(None) => Ok(JsonValue::Null),
            Shape::Opaque => Err(Error::NotSerializable {
                type_name: value.runtime_type().name(),
            }),
        }
    }

    /// Encode a view model member by member
    pub fn serialize_object(&self, vm: &dyn ViewModel) -> Result<JsonValue> {
        let schema = vm.schema();
        let mut object = Map::with_capacity(schema.len());

        for member in schema.members() {
            let property = self.contract.create_property(member);
            if property.is_ignored() {
                trace!(
                    view_model = schema.type_name(),
                    property = property.name(),
                    "property suppressed"
                );
                continue;
            }

            let value = member.get(vm.as_any()).ok_or(Error::ShapeMismatch {
                type_name: schema.type_name(),
                expected: "owner of its schema members",
            })?;
            let converter = self.contract.resolve_converter(property.declared_type());
            object.insert(property.name().to_string(), converter.write(value, self)?);
        }

        Ok(JsonValue::Object(object))
    }

    /// Encode `value` to compact JSON text
    pub fn to_string(&self, value: &dyn Reflect) -> Result<String> {
        Ok(serde_json::to_string(&self.serialize(value)?)?)
    }

    /// Encode `value` to indented JSON text
    pub fn to_string_pretty(&self, value: &dyn Reflect) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.serialize(value)?)?)
    }

    /// Encode `value` into `writer`
    pub fn to_writer<W: io::Write>(&self, writer: W, value: &dyn Reflect) -> Result<()> {
        Ok(serde_json::to_writer(writer, &self.serialize(value)?)?)
    }
}
