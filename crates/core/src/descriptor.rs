//! Property descriptors
//!
//! A [`PropertyDescriptor`] is produced once per member during a serialization
//! walk. The host's default property step fills it in from the [`Member`];
//! contract policies may then flip `is_ignored` on.

use crate::schema::{Member, MemberOptions};
use crate::type_handle::TypeHandle;

/// One serializable property as seen by a serialization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: String,
    declared_type: TypeHandle,
    ignored: bool,
    metadata: MemberOptions,
}

impl PropertyDescriptor {
    /// Visible descriptor
    pub fn new(name: impl Into<String>, declared_type: TypeHandle, metadata: MemberOptions) -> Self {
        Self {
            name: name.into(),
            declared_type,
            ignored: false,
            metadata,
        }
    }

    /// Descriptor for `member`, ignored only if the member is skipped by the host
    pub fn from_member(member: &Member) -> Self {
        let options = member.options();
        Self::new(member.name(), *member.declared_type(), options).with_ignored(options.is_skipped())
    }

    /// Set the ignored flag (builder form)
    #[must_use]
    pub fn with_ignored(mut self, ignored: bool) -> Self {
        self.ignored = ignored;
        self
    }

    /// Serialized key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type of the property
    pub fn declared_type(&self) -> &TypeHandle {
        &self.declared_type
    }

    /// Metadata attached to the source member
    pub fn metadata(&self) -> MemberOptions {
        self.metadata
    }

    /// Whether the property is omitted from output
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Mark the property as omitted. There is no way back to visible.
    pub fn ignore(&mut self) {
        self.ignored = true;
    }
}
