//! View-model schemas
//!
//! A [`Schema`] lists the serializable members of a view-model type, in
//! declaration order. Schemas are declared once with a [`SchemaBuilder`] and
//! shared; per-member metadata such as the ignore marker is fixed at that
//! point rather than looked up at serialization time.
//!
//! ```
//! use std::any::Any;
//! use std::sync::Arc;
//! use once_cell::sync::Lazy;
//! use vmwire_core::{impl_reflect_view_model, MemberOptions, Schema, SchemaBuilder, ViewModel};
//!
//! struct Person {
//!     name: String,
//!     token: String,
//! }
//!
//! static PERSON: Lazy<Arc<Schema>> = Lazy::new(|| {
//!     Arc::new(
//!         SchemaBuilder::<Person>::new()
//!             .property("Name", |p: &Person| &p.name)
//!             .property_with("Token", MemberOptions::new().ignore(), |p: &Person| &p.token)
//!             .build()
//!             .expect("valid schema"),
//!     )
//! });
//!
//! impl ViewModel for Person {
//!     fn schema(&self) -> Arc<Schema> {
//!         PERSON.clone()
//!     }
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!     fn as_any_mut(&mut self) -> &mut dyn Any {
//!         self
//!     }
//! }
//!
//! impl_reflect_view_model!(Person);
//! ```

use crate::error::{Error, Result};
use crate::reflect::Reflect;
use crate::type_handle::{TypeHandle, Typed};
use serde::de::DeserializeOwned;
use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// An object walked member by member during serialization.
pub trait ViewModel: Any + Send + Sync {
    /// The members of this view model, in declaration order
    fn schema(&self) -> Arc<Schema>;

    /// Upcast for member accessors
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for member assignment
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Metadata attached to a member when its schema is declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberOptions {
    ignore: bool,
    skip: bool,
}

impl MemberOptions {
    /// Options with no markers
    pub const fn new() -> Self {
        Self {
            ignore: false,
            skip: false,
        }
    }

    /// Attach the ignore marker: the member never appears in output
    #[must_use]
    pub const fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Have the host's default property step treat the member as ignored
    #[must_use]
    pub const fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    /// Whether the member carries the ignore marker
    pub const fn has_ignore_marker(&self) -> bool {
        self.ignore
    }

    /// Whether the host skips the member by default
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }
}

/// Type-erased access to one member of a view model.
pub trait MemberAccessor: Send + Sync {
    /// Borrow the member from its owner; `None` if `owner` has the wrong type
    fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Reflect>;

    /// Whether [`assign`](Self::assign) can write the member
    fn is_writable(&self) -> bool {
        false
    }

    /// Decode `json` into the member. Returns `Ok(false)` when the member is
    /// read-only or `owner` has the wrong type.
    fn assign(&self, _owner: &mut dyn Any, _json: serde_json::Value) -> Result<bool> {
        Ok(false)
    }
}

struct ReadAccessor<T, F, G> {
    get: G,
    _marker: PhantomData<fn(&T) -> &F>,
}

impl<T, F, G> MemberAccessor for ReadAccessor<T, F, G>
where
    T: Any,
    F: Reflect,
    G: Fn(&T) -> &F + Send + Sync,
{
    fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Reflect> {
        owner
            .downcast_ref::<T>()
            .map(|vm| (self.get)(vm) as &dyn Reflect)
    }
}

struct WriteAccessor<T, F, G, M> {
    get: G,
    get_mut: M,
    _marker: PhantomData<fn(&T) -> &F>,
}

impl<T, F, G, M> MemberAccessor for WriteAccessor<T, F, G, M>
where
    T: Any,
    F: Reflect + DeserializeOwned,
    G: Fn(&T) -> &F + Send + Sync,
    M: Fn(&mut T) -> &mut F + Send + Sync,
{
    fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Reflect> {
        owner
            .downcast_ref::<T>()
            .map(|vm| (self.get)(vm) as &dyn Reflect)
    }

    fn is_writable(&self) -> bool {
        true
    }

    fn assign(&self, owner: &mut dyn Any, json: serde_json::Value) -> Result<bool> {
        let Some(vm) = owner.downcast_mut::<T>() else {
            return Ok(false);
        };
        *(self.get_mut)(vm) = serde_json::from_value(json)?;
        Ok(true)
    }
}

/// One serializable member of a view-model type.
pub struct Member {
    name: String,
    declared_type: TypeHandle,
    options: MemberOptions,
    accessor: Box<dyn MemberAccessor>,
}

impl Member {
    /// Serialized key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type of the member
    pub fn declared_type(&self) -> &TypeHandle {
        &self.declared_type
    }

    /// Metadata attached at declaration
    pub fn options(&self) -> MemberOptions {
        self.options
    }

    /// Borrow the member's value from its owner
    pub fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Reflect> {
        self.accessor.get(owner)
    }

    /// Whether the member can be decoded into
    pub fn is_writable(&self) -> bool {
        self.accessor.is_writable()
    }

    /// Decode `json` into the member of `owner`
    pub fn assign(&self, owner: &mut dyn Any, json: serde_json::Value) -> Result<bool> {
        self.accessor.assign(owner, json)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("options", &self.options)
            .field("writable", &self.accessor.is_writable())
            .finish()
    }
}

/// Ordered member list of a view-model type.
#[derive(Debug)]
pub struct Schema {
    type_name: &'static str,
    members: Vec<Member>,
}

impl Schema {
    /// Name of the view-model type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Members in declaration order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Look up a member by serialized key
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the schema has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Builder used to declare the members of a view-model type.
pub struct SchemaBuilder<T: Any + Send + Sync> {
    members: Vec<Member>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> Default for SchemaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Any + Send + Sync> SchemaBuilder<T> {
    /// Start an empty schema for `T`
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Declare a read-only member
    pub fn property<F, G>(self, name: impl Into<String>, get: G) -> Self
    where
        F: Reflect + Typed,
        G: Fn(&T) -> &F + Send + Sync + 'static,
    {
        self.property_with(name, MemberOptions::new(), get)
    }

    /// Declare a read-only member with options
    pub fn property_with<F, G>(mut self, name: impl Into<String>, options: MemberOptions, get: G) -> Self
    where
        F: Reflect + Typed,
        G: Fn(&T) -> &F + Send + Sync + 'static,
    {
        self.members.push(Member {
            name: name.into(),
            declared_type: F::type_handle(),
            options,
            accessor: Box::new(ReadAccessor {
                get,
                _marker: PhantomData,
            }),
        });
        self
    }

    /// Declare a member that can also be decoded into
    pub fn property_mut<F, G, M>(self, name: impl Into<String>, get: G, get_mut: M) -> Self
    where
        F: Reflect + Typed + DeserializeOwned,
        G: Fn(&T) -> &F + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        self.property_mut_with(name, MemberOptions::new(), get, get_mut)
    }

    /// Declare a decodable member with options
    pub fn property_mut_with<F, G, M>(
        mut self,
        name: impl Into<String>,
        options: MemberOptions,
        get: G,
        get_mut: M,
    ) -> Self
    where
        F: Reflect + Typed + DeserializeOwned,
        G: Fn(&T) -> &F + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        self.members.push(Member {
            name: name.into(),
            declared_type: F::type_handle(),
            options,
            accessor: Box::new(WriteAccessor {
                get,
                get_mut,
                _marker: PhantomData,
            }),
        });
        self
    }

    /// Finish the schema.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProperty`] if two members share a name.
    pub fn build(self) -> Result<Schema> {
        for (i, member) in self.members.iter().enumerate() {
            if self.members[..i].iter().any(|m| m.name == member.name) {
                return Err(Error::DuplicateProperty {
                    name: member.name.clone(),
                    type_name: type_name::<T>(),
                });
            }
        }
        Ok(Schema {
            type_name: type_name::<T>(),
            members: self.members,
        })
    }
}
