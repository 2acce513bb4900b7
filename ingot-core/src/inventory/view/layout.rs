//! Finished view layouts.

use std::fmt;
use std::sync::Arc;

use ingot_registry::container_type::{ContainerShape, ContainerType};
use ingot_registry::item_stack::ItemStack;
use uuid::Uuid;

use crate::inventory::{Container, MenuCallbacks};

/// Identifies a source inventory registered with a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub(super) usize);

impl SourceId {
    /// Returns the position of the source in the layout's source list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The binding of one destination slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotDefinition {
    /// A static item value not backed by any source.
    Dummy(ItemStack),
    /// A delegated reference to a slot in a source inventory.
    Source {
        /// The source inventory.
        source: SourceId,
        /// The slot index within the source.
        slot: usize,
    },
}

impl SlotDefinition {
    /// Returns true if this slot holds a static item value.
    #[must_use]
    pub const fn is_dummy(&self) -> bool {
        matches!(self, Self::Dummy(_))
    }
}

/// An immutable composed inventory layout.
///
/// Maps every destination slot index in `[0, size)` to a [`SlotDefinition`],
/// and carries the registered per-slot callbacks. Safe to share read-only
/// across threads once built.
pub struct ViewLayout {
    pub(super) container_type: Option<ContainerType>,
    pub(super) shape: ContainerShape,
    pub(super) slots: Box<[SlotDefinition]>,
    pub(super) sources: Box<[Arc<dyn Container>]>,
    pub(super) callbacks: MenuCallbacks,
    pub(super) identity: Option<Uuid>,
}

impl ViewLayout {
    /// Returns the container kind this layout was built for, if it was
    /// built from the vanilla catalog.
    #[must_use]
    pub fn container_type(&self) -> Option<ContainerType> {
        self.container_type
    }

    /// Returns the destination shape.
    #[must_use]
    pub fn shape(&self) -> ContainerShape {
        self.shape
    }

    /// Returns the total number of destination slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the binding of the given destination slot.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&SlotDefinition> {
        self.slots.get(index)
    }

    /// Returns all bindings in destination slot order.
    #[must_use]
    pub fn slots(&self) -> &[SlotDefinition] {
        &self.slots
    }

    /// Returns the registered source inventories.
    #[must_use]
    pub fn sources(&self) -> &[Arc<dyn Container>] {
        &self.sources
    }

    /// Returns the source inventory behind the given id.
    #[must_use]
    pub fn source(&self, id: SourceId) -> &Arc<dyn Container> {
        &self.sources[id.0]
    }

    /// Reads the item visible in the given destination slot, delegating to
    /// the bound source inventory where applicable.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<ItemStack> {
        match self.slots.get(index)? {
            SlotDefinition::Dummy(item) => Some(item.clone()),
            SlotDefinition::Source { source, slot } => {
                Some(self.sources[source.0].get_item(*slot).clone())
            }
        }
    }

    /// Returns the registered per-slot callbacks.
    #[must_use]
    pub fn callbacks(&self) -> &MenuCallbacks {
        &self.callbacks
    }

    /// Returns the layout's unique identity, if one was set.
    #[must_use]
    pub fn identity(&self) -> Option<Uuid> {
        self.identity
    }
}

impl fmt::Debug for ViewLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewLayout")
            .field("container_type", &self.container_type)
            .field("shape", &self.shape)
            .field("slots", &self.slots)
            .field("sources", &self.sources.len())
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
