//! Serialization contracts
//!
//! A [`Contract`] is the policy the host consults during a walk. It has two
//! extension points:
//!
//! - [`Contract::create_property`], once per member, decides whether the
//!   member is emitted
//! - [`Contract::resolve_converter`], per declared type, picks the encoder
//!
//! [`DefaultContract`] is the host's own policy: every member the schema does
//! not skip is emitted, and everything is encoded structurally.

use crate::converter::{default_converter, Converter};
use std::sync::Arc;
use vmwire_core::{Member, PropertyDescriptor, TypeHandle};

/// Property and converter policy for a serialization pass.
pub trait Contract: Send + Sync {
    /// Build the descriptor for `member`
    fn create_property(&self, member: &Member) -> PropertyDescriptor {
        default_property(member)
    }

    /// Converter for values declared as `ty`
    fn resolve_converter(&self, ty: &TypeHandle) -> Arc<dyn Converter>;
}

/// The host's default property step: visible unless the schema skips it.
pub fn default_property(member: &Member) -> PropertyDescriptor {
    PropertyDescriptor::from_member(member)
}

/// Host policy with no custom converters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContract;

impl Contract for DefaultContract {
    fn resolve_converter(&self, _ty: &TypeHandle) -> Arc<dyn Converter> {
        default_converter()
    }
}
