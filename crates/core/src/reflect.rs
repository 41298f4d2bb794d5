//! Runtime value reflection
//!
//! The serializer walks an object graph through [`Reflect`]: every value can
//! report its runtime [`TypeHandle`] and a [`Shape`] telling the host how to
//! encode it structurally. Converters that bypass structural encoding reach
//! their specialised views (e.g. [`ReactiveValue`]) through dedicated accessors.

use crate::reactive::ReactiveValue;
use crate::schema::ViewModel;
use crate::type_handle::{GenericOrigin, TypeHandle, Typed};
use serde::Serialize;
use std::any::Any;

/// Object-safe serde encoding of a leaf value.
pub trait Structural {
    /// Encode `self` with its serde implementation
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T: Serialize + ?Sized> Structural for T {
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// How a value is encoded by the host's default (structural) converter.
pub enum Shape<'a> {
    /// Leaf value with a serde encoding
    Value(&'a dyn Structural),
    /// View model, walked property by property
    Object(&'a dyn ViewModel),
    /// Ordered elements, each dispatched on its own type
    Sequence(Vec<&'a dyn Reflect>),
    /// Present value or JSON null
    Optional(Option<&'a dyn Reflect>),
    /// No structural encoding (commands, delegates)
    Opaque,
}

impl Shape<'_> {
    /// Short name of the shape, for errors and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Value(_) => "value",
            Shape::Object(_) => "object",
            Shape::Sequence(_) => "sequence",
            Shape::Optional(_) => "optional",
            Shape::Opaque => "opaque",
        }
    }
}

/// A value the serializer can walk.
pub trait Reflect: Any + Send + Sync {
    /// Runtime type of the value
    fn runtime_type(&self) -> TypeHandle;

    /// Structural view of the value
    fn shape(&self) -> Shape<'_>;

    /// Reactive wrapper view, for types with a reactive generic origin
    fn as_reactive(&self) -> Option<&dyn ReactiveValue> {
        None
    }
}

/// Implement [`Typed`] and [`Reflect`] for serde-serializable leaf types.
///
/// ```
/// use vmwire_core::impl_reflect_value;
///
/// #[derive(serde::Serialize)]
/// struct Address {
///     city: String,
/// }
///
/// impl_reflect_value!(Address);
/// ```
#[macro_export]
macro_rules! impl_reflect_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Typed for $ty {
                fn type_handle() -> $crate::TypeHandle {
                    $crate::TypeHandle::of::<$ty>()
                }
            }

            impl $crate::Reflect for $ty {
                fn runtime_type(&self) -> $crate::TypeHandle {
                    <$ty as $crate::Typed>::type_handle()
                }

                fn shape(&self) -> $crate::Shape<'_> {
                    $crate::Shape::Value(self)
                }
            }
        )+
    };
}

/// Implement [`Typed`] and [`Reflect`] for types that implement
/// [`ViewModel`](crate::ViewModel), so they are walked property by property.
#[macro_export]
macro_rules! impl_reflect_view_model {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Typed for $ty {
                fn type_handle() -> $crate::TypeHandle {
                    $crate::TypeHandle::of::<$ty>()
                }
            }

            impl $crate::Reflect for $ty {
                fn runtime_type(&self) -> $crate::TypeHandle {
                    <$ty as $crate::Typed>::type_handle()
                }

                fn shape(&self) -> $crate::Shape<'_> {
                    $crate::Shape::Object(self)
                }
            }
        )+
    };
}

impl_reflect_value!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    isize,
    f32,
    f64,
    String,
    serde_json::Value,
);

impl<T: Reflect + Typed> Typed for Vec<T> {
    fn type_handle() -> TypeHandle {
        TypeHandle::of::<Vec<T>>().with_generic_origin(GenericOrigin::new("Vec"))
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    fn runtime_type(&self) -> TypeHandle {
        <Self as Typed>::type_handle()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_handle() -> TypeHandle {
        TypeHandle::of::<Option<T>>().with_generic_origin(GenericOrigin::new("Option"))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    fn runtime_type(&self) -> TypeHandle {
        <Self as Typed>::type_handle()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|item| item as &dyn Reflect))
    }
}
