//! JSON host for view-model graphs
//!
//! This module implements the generic "walk and encode" pipeline a
//! [`Contract`](crate::Contract) plugs into:
//!
//! - [`Serializer`]: value graph → JSON, converters chosen per declared type
//! - [`Populator`]: JSON object → existing view model, through the same contract
//!
//! Object keys are emitted in schema declaration order.

mod decode;
mod encode;

#[cfg(test)]
pub(crate) mod fixtures;

pub use decode::Populator;
pub use encode::Serializer;

use crate::contract::Contract;
use serde_json::Value as JsonValue;
use vmwire_core::{Reflect, Result, ViewModel};

/// Encode `value` to a JSON value under `contract`
pub fn to_value(value: &dyn Reflect, contract: &dyn Contract) -> Result<JsonValue> {
    Serializer::new(contract).serialize(value)
}

/// Encode `value` to compact JSON text under `contract`
pub fn to_string(value: &dyn Reflect, contract: &dyn Contract) -> Result<String> {
    Serializer::new(contract).to_string(value)
}

/// Decode `json` into `target` under `contract`
pub fn populate(target: &mut dyn ViewModel, json: &str, contract: &dyn Contract) -> Result<()> {
    Populator::new(contract).populate(target, json)
}
