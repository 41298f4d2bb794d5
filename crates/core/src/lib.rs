//! Core types for vmwire
//!
//! This crate defines the object model the serializer walks:
//!
//! - [`TypeHandle`] / [`Typed`]: type identity plus declared capabilities
//!   (command, reactive generic origin, delegate signature)
//! - [`Reflect`] / [`Shape`]: runtime view of a value
//! - [`ViewModel`] / [`Schema`] / [`SchemaBuilder`]: member lists declared once
//!   per view-model type
//! - [`PropertyDescriptor`] / [`IgnoreSet`]: per-pass property state
//! - [`RelayCommand`], [`Delegate`], [`ReactiveProperty`]: the special
//!   property shapes
//! - [`Error`]: the error type shared by every vmwire crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod descriptor;
pub mod error;
pub mod ignore_set;
pub mod reactive;
pub mod reflect;
pub mod schema;
pub mod type_handle;

pub use command::{Action, Command, Delegate, RelayCommand};
pub use descriptor::PropertyDescriptor;
pub use error::{Error, Result};
pub use ignore_set::IgnoreSet;
pub use reactive::{ReactiveProperty, ReactiveValue, SubscriptionId, REACTIVE_PROPERTY};
pub use reflect::{Reflect, Shape, Structural};
pub use schema::{Member, MemberAccessor, MemberOptions, Schema, SchemaBuilder, ViewModel};
pub use type_handle::{GenericOrigin, Signature, TypeHandle, Typed};
