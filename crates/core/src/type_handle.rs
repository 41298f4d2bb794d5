//! Runtime type handles
//!
//! A [`TypeHandle`] is the serializer's view of a Rust type: its identity plus
//! the capability facts that converter resolution inspects. The facts are
//! declared once, in the type's [`Typed`] impl, instead of being discovered by
//! reflection.
//!
//! ## Capabilities
//!
//! | Fact | Meaning |
//! |------|---------|
//! | `command` | The type implements the command capability |
//! | `generic_origin` | The type instantiates a generic definition; the origin may be reactive |
//! | `signature` | The type is a delegate; the signature may return nothing |
//!
//! The facts are independent. A type may be a command and a void delegate at
//! the same time; which converter wins is decided by the resolver, not here.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Types that can describe themselves without an instance.
pub trait Typed: 'static {
    /// Static type handle for `Self`
    fn type_handle() -> TypeHandle;
}

/// The generic definition a type was instantiated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericOrigin {
    name: &'static str,
    reactive: bool,
}

impl GenericOrigin {
    /// A generic definition with no special capability
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            reactive: false,
        }
    }

    /// A generic definition satisfying the reactive-property capability
    pub const fn reactive(name: &'static str) -> Self {
        Self {
            name,
            reactive: true,
        }
    }

    /// Name of the generic definition (e.g. "ReactiveProperty")
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the definition is a single-value observable container
    pub fn is_reactive(&self) -> bool {
        self.reactive
    }
}

/// Invocation signature of a delegate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    return_type: &'static str,
    returns_void: bool,
}

impl Signature {
    /// Signature of a delegate returning `R`
    pub fn returning<R: 'static>() -> Self {
        Self {
            return_type: type_name::<R>(),
            returns_void: TypeId::of::<R>() == TypeId::of::<()>(),
        }
    }

    /// Signature of a delegate returning nothing
    pub fn void() -> Self {
        Self::returning::<()>()
    }

    /// Name of the return type
    pub fn return_type(&self) -> &'static str {
        self.return_type
    }

    /// Whether invocation returns nothing
    pub fn returns_void(&self) -> bool {
        self.returns_void
    }
}

/// Identity and capability facts of a type.
///
/// Equality and hashing consider the [`TypeId`] only.
#[derive(Clone, Copy)]
pub struct TypeHandle {
    id: TypeId,
    name: &'static str,
    command: bool,
    generic_origin: Option<GenericOrigin>,
    signature: Option<Signature>,
}

impl TypeHandle {
    /// Plain handle for `T` with no capabilities
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            command: false,
            generic_origin: None,
            signature: None,
        }
    }

    /// Mark the type as implementing the command capability
    pub fn with_command(mut self) -> Self {
        self.command = true;
        self
    }

    /// Record the generic definition this type instantiates
    pub fn with_generic_origin(mut self, origin: GenericOrigin) -> Self {
        self.generic_origin = Some(origin);
        self
    }

    /// Record the delegate signature of this type
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Override the display name (defaults to `std::any::type_name`)
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// The underlying [`TypeId`]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Type name, for logs and error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the type implements the command capability
    pub fn is_command(&self) -> bool {
        self.command
    }

    /// Generic definition, if the type is a generic instantiation
    pub fn generic_origin(&self) -> Option<GenericOrigin> {
        self.generic_origin
    }

    /// Delegate signature, if the type is a delegate
    pub fn signature(&self) -> Option<Signature> {
        self.signature
    }

    /// Whether the type is a delegate whose invocation returns nothing
    pub fn is_void_delegate(&self) -> bool {
        self.signature.is_some_and(|s| s.returns_void())
    }

    /// Whether the type instantiates a reactive generic definition
    pub fn has_reactive_origin(&self) -> bool {
        self.generic_origin.is_some_and(|o| o.is_reactive())
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("name", &self.name)
            .field("command", &self.command)
            .field("generic_origin", &self.generic_origin)
            .field("signature", &self.signature)
            .finish()
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
