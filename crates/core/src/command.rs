//! Commands and delegates
//!
//! A command is a user-invocable trigger bound to UI input (a button click,
//! say). Only its presence matters to the serializer; it has no structural
//! encoding. [`Delegate`] covers raw callbacks that are not wrapped in the
//! command capability.

use crate::reflect::{Reflect, Shape};
use crate::type_handle::{Signature, TypeHandle, Typed};
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// The command capability.
pub trait Command: Send + Sync {
    /// Whether the command may run with `arg`
    fn can_execute(&self, _arg: Option<&JsonValue>) -> bool {
        true
    }

    /// Run the command
    fn execute(&self, arg: Option<JsonValue>);
}

type ExecuteFn = dyn Fn(Option<JsonValue>) + Send + Sync;
type CanExecuteFn = dyn Fn(Option<&JsonValue>) -> bool + Send + Sync;

/// Closure-backed [`Command`].
#[derive(Clone)]
pub struct RelayCommand {
    execute: Arc<ExecuteFn>,
    can_execute: Option<Arc<CanExecuteFn>>,
}

impl RelayCommand {
    /// Command that always may run
    pub fn new(execute: impl Fn(Option<JsonValue>) + Send + Sync + 'static) -> Self {
        Self {
            execute: Arc::new(execute),
            can_execute: None,
        }
    }

    /// Guard the command with a predicate
    #[must_use]
    pub fn with_can_execute(
        mut self,
        can_execute: impl Fn(Option<&JsonValue>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.can_execute = Some(Arc::new(can_execute));
        self
    }
}

impl Command for RelayCommand {
    fn can_execute(&self, arg: Option<&JsonValue>) -> bool {
        self.can_execute.as_ref().map_or(true, |pred| pred(arg))
    }

    fn execute(&self, arg: Option<JsonValue>) {
        if self.can_execute(arg.as_ref()) {
            (self.execute)(arg);
        }
    }
}

impl fmt::Debug for RelayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand")
            .field("guarded", &self.can_execute.is_some())
            .finish()
    }
}

impl Typed for RelayCommand {
    fn type_handle() -> TypeHandle {
        TypeHandle::of::<RelayCommand>()
            .with_name("RelayCommand")
            .with_command()
    }
}

impl Reflect for RelayCommand {
    fn runtime_type(&self) -> TypeHandle {
        <Self as Typed>::type_handle()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}

/// A callback taking `A` and returning `R`.
pub struct Delegate<A = (), R = ()> {
    f: Arc<dyn Fn(A) -> R + Send + Sync>,
}

/// Callback with no argument and no return value.
pub type Action = Delegate<(), ()>;

impl<A, R> Delegate<A, R> {
    /// Wrap a closure
    pub fn new(f: impl Fn(A) -> R + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }

    /// Call the delegate
    pub fn invoke(&self, arg: A) -> R {
        (self.f)(arg)
    }
}

impl<A, R> Clone for Delegate<A, R> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<A, R> fmt::Debug for Delegate<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate")
            .field("signature", &std::any::type_name::<fn(A) -> R>())
            .finish()
    }
}

impl<A: 'static, R: 'static> Typed for Delegate<A, R> {
    fn type_handle() -> TypeHandle {
        TypeHandle::of::<Delegate<A, R>>().with_signature(Signature::returning::<R>())
    }
}

impl<A: 'static, R: 'static> Reflect for Delegate<A, R> {
    fn runtime_type(&self) -> TypeHandle {
        <Self as Typed>::type_handle()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}
