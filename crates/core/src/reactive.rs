//! Reactive properties
//!
//! [`ReactiveProperty<T>`] is a single-value container that notifies its
//! subscribers whenever the value is set. For serialization only the current
//! value matters; the serializer reaches it through [`ReactiveValue`].

use crate::reflect::{Reflect, Shape};
use crate::type_handle::{GenericOrigin, TypeHandle, Typed};
use parking_lot::{MappedRwLockReadGuard, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Name of the reactive generic definition
pub const REACTIVE_PROPERTY: &str = "ReactiveProperty";

/// The reactive-property capability: access to the wrapped value.
pub trait ReactiveValue: Send + Sync {
    /// Borrow the current inner value. The value cannot change while the
    /// guard is held.
    fn current(&self) -> MappedRwLockReadGuard<'_, dyn Reflect>;

    /// Type of the inner value
    fn value_type(&self) -> TypeHandle;
}

/// Handle returned by [`ReactiveProperty::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Observable single-value container.
pub struct ReactiveProperty<T> {
    value: RwLock<T>,
    observers: Mutex<Vec<(SubscriptionId, Observer<T>)>>,
    next_id: AtomicU64,
}

impl<T: Send + Sync + 'static> ReactiveProperty<T> {
    /// Wrap an initial value
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Run `f` against the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read_recursive())
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        let mut guard = self.value.write();
        *guard = value;
        self.notify(&RwLockWriteGuard::downgrade(guard));
    }

    /// Modify the value in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut guard = self.value.write();
        f(&mut guard);
        self.notify(&RwLockWriteGuard::downgrade(guard));
    }

    /// Register an observer called on every change.
    ///
    /// Observers run while the new value is read-locked: they may read the
    /// property but must not set it.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.lock().push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.observers.lock().len()
    }

    fn notify(&self, value: &T) {
        // Observers may subscribe or unsubscribe while being called.
        let observers: Vec<Observer<T>> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> ReactiveProperty<T> {
    /// Current value
    pub fn get(&self) -> T {
        self.value.read_recursive().clone()
    }
}

impl<T: Default + Send + Sync + 'static> Default for ReactiveProperty<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ReactiveProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveProperty")
            .field("value", &*self.value.read_recursive())
            .field("subscribers", &self.observers.lock().len())
            .finish()
    }
}

impl<T: Reflect + Typed> Typed for ReactiveProperty<T> {
    fn type_handle() -> TypeHandle {
        TypeHandle::of::<ReactiveProperty<T>>()
            .with_generic_origin(GenericOrigin::reactive(REACTIVE_PROPERTY))
    }
}

impl<T: Reflect + Typed> Reflect for ReactiveProperty<T> {
    fn runtime_type(&self) -> TypeHandle {
        <Self as Typed>::type_handle()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }

    fn as_reactive(&self) -> Option<&dyn ReactiveValue> {
        Some(self)
    }
}

impl<T: Reflect + Typed> ReactiveValue for ReactiveProperty<T> {
    fn current(&self) -> MappedRwLockReadGuard<'_, dyn Reflect> {
        RwLockReadGuard::map(self.value.read_recursive(), |value| value as &dyn Reflect)
    }

    fn value_type(&self) -> TypeHandle {
        T::type_handle()
    }
}
