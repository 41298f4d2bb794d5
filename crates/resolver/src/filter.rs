//! Property filtering.

use vmwire_core::{IgnoreSet, PropertyDescriptor};

/// Hide `descriptor` if its member carries the ignore marker or its name is
/// in `ignore_set`.
///
/// Only ever turns `is_ignored` on; a property the host already ignores
/// stays ignored.
pub fn filter_property(mut descriptor: PropertyDescriptor, ignore_set: &IgnoreSet) -> PropertyDescriptor {
    let marked = descriptor.metadata().has_ignore_marker();
    let listed = !ignore_set.is_empty() && ignore_set.contains(descriptor.name());
    if marked || listed {
        descriptor.ignore();
    }
    descriptor
}
