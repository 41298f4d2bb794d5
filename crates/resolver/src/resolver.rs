//! The view-model contract resolver.
//!
//! [`ContractResolver`] is the policy object a serialization pass consults
//! twice per property:
//!
//! 1. [`Contract::create_property`]: host default, then [`filter_property`]
//!    with the resolver's ignore set
//! 2. [`Contract::resolve_converter`]: first matching [`ResolutionRule`],
//!    cached per type
//!
//! # Thread Safety
//!
//! The resolver is `Send + Sync`. The cache is a `DashMap` keyed by the
//! type's identity together with its capability facts, so concurrent passes
//! can share one resolver and two handles for the same `TypeId` that declare
//! different capabilities never share a cached answer.

use crate::filter::filter_property;
use crate::options::ResolverOptions;
use crate::resolution::{Resolution, ResolutionRule};
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::Arc;
use tracing::debug;
use vmwire_core::{GenericOrigin, IgnoreSet, Member, PropertyDescriptor, Signature, TypeHandle};
use vmwire_wire::{default_property, Contract, Converter};

/// Everything resolution depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    id: TypeId,
    command: bool,
    generic_origin: Option<GenericOrigin>,
    signature: Option<Signature>,
}

impl From<&TypeHandle> for CacheKey {
    fn from(ty: &TypeHandle) -> Self {
        Self {
            id: ty.id(),
            command: ty.is_command(),
            generic_origin: ty.generic_origin(),
            signature: ty.signature(),
        }
    }
}

/// Property filter and converter resolver for view models.
///
/// # Example
///
/// ```
/// use vmwire_resolver::ContractResolver;
///
/// let resolver = ContractResolver::builder()
///     .ignore_property("Age")
///     .build();
/// assert!(resolver.ignored_property_names().contains("Age"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContractResolver {
    ignored: IgnoreSet,
    cache: Arc<DashMap<CacheKey, Resolution>>,
}

impl ContractResolver {
    /// Resolver with an empty ignore set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for resolver configuration
    pub fn builder() -> ContractResolverBuilder {
        ContractResolverBuilder::default()
    }

    /// Resolver configured from [`ResolverOptions`]
    pub fn from_options(options: &ResolverOptions) -> Self {
        Self {
            ignored: options.ignore_set(),
            cache: Arc::default(),
        }
    }

    /// Names suppressed in addition to ignore-marked members
    pub fn ignored_property_names(&self) -> &IgnoreSet {
        &self.ignored
    }

    /// Replace the ignore set before the next pass
    pub fn set_ignored_property_names(&mut self, names: IgnoreSet) {
        self.ignored = names;
    }

    /// A resolver with a different ignore set that shares this one's cache
    #[must_use]
    pub fn with_ignored_property_names(&self, names: IgnoreSet) -> Self {
        Self {
            ignored: names,
            cache: Arc::clone(&self.cache),
        }
    }

    /// Resolve `ty`, consulting and filling the cache
    pub fn resolve(&self, ty: &TypeHandle) -> Resolution {
        let key = CacheKey::from(ty);
        if let Some(hit) = self.cache.get(&key) {
            return hit.value().clone();
        }
        self.cache
            .entry(key)
            .or_insert_with(|| {
                let resolution = Resolution::of(ty);
                debug!(
                    type_name = ty.name(),
                    rule = resolution.rule().as_str(),
                    converter = resolution.converter().name(),
                    "converter resolved"
                );
                resolution
            })
            .value()
            .clone()
    }

    /// Rule that binds `ty`
    pub fn rule_for(&self, ty: &TypeHandle) -> ResolutionRule {
        self.resolve(ty).rule()
    }

    /// Number of distinct type handles resolved so far
    pub fn cached_types(&self) -> usize {
        self.cache.len()
    }
}

impl Contract for ContractResolver {
    fn create_property(&self, member: &Member) -> PropertyDescriptor {
        filter_property(default_property(member), &self.ignored)
    }

    fn resolve_converter(&self, ty: &TypeHandle) -> Arc<dyn Converter> {
        self.resolve(ty).converter().clone()
    }
}

/// Builder for [`ContractResolver`].
#[derive(Debug, Default)]
pub struct ContractResolverBuilder {
    ignored: Vec<String>,
}

impl ContractResolverBuilder {
    /// Suppress a property name
    pub fn ignore_property(mut self, name: impl Into<String>) -> Self {
        self.ignored.push(name.into());
        self
    }

    /// Suppress several property names
    pub fn ignore_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }

    /// Apply externally supplied options
    pub fn options(self, options: &ResolverOptions) -> Self {
        self.ignore_properties(options.ignored_property_names.iter().cloned())
    }

    /// Build the resolver
    pub fn build(self) -> ContractResolver {
        ContractResolver {
            ignored: self.ignored.into_iter().collect(),
            cache: Arc::default(),
        }
    }
}
