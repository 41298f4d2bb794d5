//! Contract-driven JSON decoding
//!
//! [`Populator`] writes an incoming JSON object into an existing view model.
//! Every key is routed through the contract exactly like encoding is: the
//! member's descriptor decides whether the key is considered at all, and the
//! converter for the declared type gets to see (or refuse) the JSON before the
//! member's setter decodes it.
//!
//! - Unknown keys are skipped
//! - Ignored members are skipped
//! - Read-only members are skipped
//! - Converter failures abort the pass before any member is assigned
//! - A setter that fails to decode its value aborts the pass; members
//!   assigned before it keep their new values

use crate::contract::Contract;
use serde_json::Value as JsonValue;
use tracing::trace;
use vmwire_core::{Error, Result, ViewModel};

/// JSON kind name, for errors
pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Decodes JSON objects into view models under a [`Contract`].
#[derive(Clone, Copy)]
pub struct Populator<'c> {
    contract: &'c dyn Contract,
}

impl<'c> Populator<'c> {
    /// Populator consulting `contract`
    pub fn new(contract: &'c dyn Contract) -> Self {
        Self { contract }
    }

    /// Parse `json` and write it into `target`
    pub fn populate(&self, target: &mut dyn ViewModel, json: &str) -> Result<()> {
        let value: JsonValue = serde_json::from_str(json)?;
        self.populate_value(target, value)
    }

    /// Write an already parsed JSON object into `target`.
    ///
    /// Every key is run through its converter first, so a key refused by a
    /// write-only converter leaves `target` untouched whatever the key order.
    pub fn populate_value(&self, target: &mut dyn ViewModel, json: JsonValue) -> Result<()> {
        let fields = match json {
            JsonValue::Object(fields) => fields,
            other => {
                return Err(Error::ExpectedObject {
                    found: json_kind(&other),
                })
            }
        };

        let schema = target.schema();
        let mut accepted = Vec::with_capacity(fields.len());
        for (key, value) in fields {
            let Some(member) = schema.member(&key) else {
                trace!(view_model = schema.type_name(), property = %key, "unknown property skipped");
                continue;
            };

            let property = self.contract.create_property(member);
            if property.is_ignored() {
                trace!(view_model = schema.type_name(), property = %key, "ignored property skipped");
                continue;
            }

            let converter = self.contract.resolve_converter(property.declared_type());
            accepted.push((member, converter.read(value, property.declared_type())?));
        }

        // Nothing is assigned until every converter has accepted its key.
        for (member, decoded) in accepted {
            if !member.assign(target.as_any_mut(), decoded)? {
                trace!(view_model = schema.type_name(), property = member.name(), "read-only property skipped");
            }
        }

        Ok(())
    }
}
