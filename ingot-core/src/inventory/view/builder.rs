//! The staged view layout builder.

use std::mem;
use std::sync::Arc;

use ingot_registry::container_type::{ContainerShape, ContainerType};
use ingot_registry::item_stack::ItemStack;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use super::error::{LayoutError, Side};
use super::layout::{SlotDefinition, SourceId, ViewLayout};
use crate::inventory::Container;
use crate::inventory::menu::{
    ClickType, CloseHandler, MenuCallbacks, SlotChangeHandler, SlotClickHandler,
};

/// A registered source inventory and its staging cursor.
struct SourceState {
    inventory: Arc<dyn Container>,
    capacity: usize,
    grid: Option<(usize, usize)>,
    cursor: usize,
}

/// A slot definition that has been staged but not yet committed.
enum StagedDef {
    Dummy(ItemStack),
    Source {
        source: usize,
        /// Explicit source slot; assigned from the source cursor at commit
        /// when `None`.
        slot: Option<usize>,
    },
}

/// The pending region. Cleared every time a region commits.
#[derive(Default)]
struct Buffer {
    slots: Vec<StagedDef>,
    /// `(columns, rows)` when the pending region is grid-shaped.
    grid: Option<(usize, usize)>,
    /// Destination anchor for non-grid regions.
    at_index: Option<usize>,
    /// Destination anchor for grid regions.
    at_position: Option<(usize, usize)>,
    click: Vec<SlotClickHandler>,
    change: Vec<SlotChangeHandler>,
    close: Vec<CloseHandler>,
}

/// Builds a [`ViewLayout`] out of slot regions borrowed from source
/// inventories plus static dummy slots.
///
/// Regions are staged in parts (`slots`, then optionally `from_*`/`at_*` and
/// callbacks) and committed as a unit when the next region starts or the
/// build finalizes. All capacity and shape checks run in the call that
/// violates them; a failed region is never partially written.
///
/// ```
/// use std::sync::Arc;
///
/// use ingot_core::inventory::{Container, GridContainer, ViewBuilder};
/// use ingot_registry::container_type::ContainerType;
///
/// # fn main() -> Result<(), ingot_core::inventory::LayoutError> {
/// let dispenser: Arc<dyn Container> = Arc::new(GridContainer::new(3, 3));
///
/// let mut builder = ViewBuilder::new();
/// builder.shape(ContainerType::Generic9x3);
/// builder.source(dispenser)?.grid(3, 3)?.at_position(3, 0)?;
/// builder.fill_dummy()?;
/// let layout = builder.build()?;
/// assert_eq!(layout.size(), 27);
/// # Ok(())
/// # }
/// ```
pub struct ViewBuilder {
    container_type: Option<ContainerType>,
    shape: Option<ContainerShape>,
    /// Committed bindings, keyed by destination slot index.
    bound: FxHashMap<usize, SlotDefinition>,
    /// Next destination index for regions without an explicit anchor.
    cursor: usize,
    sources: Vec<SourceState>,
    current_source: Option<usize>,
    buffer: Buffer,
    callbacks: MenuCallbacks,
    identity: Option<Uuid>,
}

impl std::fmt::Debug for ViewBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewBuilder")
            .field("container_type", &self.container_type)
            .field("shape", &self.shape)
            .field("bound", &self.bound)
            .field("cursor", &self.cursor)
            .field("sources", &self.sources.len())
            .field("current_source", &self.current_source)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewBuilder {
    /// Creates a builder with no shape selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            container_type: None,
            shape: None,
            bound: FxHashMap::default(),
            cursor: 0,
            sources: Vec::new(),
            current_source: None,
            buffer: Buffer::default(),
            callbacks: MenuCallbacks::new(),
            identity: None,
        }
    }

    /// Selects the destination container kind, re-seeding the builder.
    ///
    /// All prior bindings, sources, cursors, callbacks and identity are
    /// discarded.
    pub fn shape(&mut self, container_type: ContainerType) -> &mut Self {
        self.reset(Some(container_type), container_type.shape())
    }

    /// Selects a free-form destination shape, re-seeding the builder.
    pub fn shape_of(&mut self, shape: ContainerShape) -> &mut Self {
        self.reset(None, shape)
    }

    fn reset(&mut self, container_type: Option<ContainerType>, shape: ContainerShape) -> &mut Self {
        *self = Self::new();
        self.container_type = container_type;
        self.shape = Some(shape);
        self
    }

    /// Selects the source inventory for subsequent slot and grid regions,
    /// resetting its cursor to 0.
    ///
    /// Re-selecting an already registered source does not register it twice.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidSource`] for a zero-capacity source.
    pub fn source(&mut self, inventory: Arc<dyn Container>) -> Result<&mut Self, LayoutError> {
        let capacity = inventory.capacity();
        if capacity == 0 {
            return Err(LayoutError::InvalidSource { capacity });
        }
        let id = match self
            .sources
            .iter()
            .position(|state| Arc::ptr_eq(&state.inventory, &inventory))
        {
            Some(id) => {
                self.sources[id].cursor = 0;
                id
            }
            None => {
                let grid = inventory.grid_size();
                self.sources.push(SourceState {
                    inventory,
                    capacity,
                    grid,
                    cursor: 0,
                });
                self.sources.len() - 1
            }
        };
        self.current_source = Some(id);
        Ok(self)
    }

    /// Stages a single slot bound to the current source.
    ///
    /// # Errors
    /// See [`slots`](Self::slots).
    pub fn slot(&mut self) -> Result<&mut Self, LayoutError> {
        self.slots(1)
    }

    /// Stages `count` slots bound to the current source.
    ///
    /// Source indices default to the source's running cursor; use
    /// [`from_index`](Self::from_index) to override.
    ///
    /// # Errors
    /// Returns [`LayoutError::Capacity`] when `count` exceeds the source's
    /// or the destination's remaining capacity, [`LayoutError::NoShape`] /
    /// [`LayoutError::NoSource`] when called too early.
    pub fn slots(&mut self, count: usize) -> Result<&mut Self, LayoutError> {
        self.commit_staged()?;
        let shape = self.shape.ok_or(LayoutError::NoShape)?;
        let source = self.current_source.ok_or(LayoutError::NoSource)?;

        let state = &self.sources[source];
        let source_available = state.capacity - state.cursor;
        if count > source_available {
            return Err(LayoutError::Capacity {
                side: Side::Source,
                required: count,
                available: source_available,
            });
        }
        let target_available = shape.size() - self.bound.len();
        if count > target_available {
            return Err(LayoutError::Capacity {
                side: Side::Target,
                required: count,
                available: target_available,
            });
        }

        for _ in 0..count {
            self.buffer.slots.push(StagedDef::Source { source, slot: None });
        }
        self.buffer.grid = None;
        Ok(self)
    }

    /// Stages a `columns` x `rows` grid of slots bound to the current
    /// source, row-major, anchored at source (0, 0) and destination (0, 0)
    /// unless overridden.
    ///
    /// # Errors
    /// Returns [`LayoutError::NotAGrid`] when the source or destination has
    /// no grid layout, [`LayoutError::GridCapacity`] when the region exceeds
    /// either grid's dimensions.
    pub fn grid(&mut self, columns: usize, rows: usize) -> Result<&mut Self, LayoutError> {
        self.commit_staged()?;
        let shape = self.shape.ok_or(LayoutError::NoShape)?;
        let source = self.current_source.ok_or(LayoutError::NoSource)?;

        let (source_columns, source_rows) = self.sources[source]
            .grid
            .ok_or(LayoutError::NotAGrid { side: Side::Source })?;
        let (target_columns, target_rows) = shape
            .grid_size()
            .ok_or(LayoutError::NotAGrid { side: Side::Target })?;
        if columns > target_columns || rows > target_rows {
            return Err(LayoutError::GridCapacity {
                side: Side::Target,
                columns,
                rows,
                x: 0,
                y: 0,
                available_columns: target_columns,
                available_rows: target_rows,
            });
        }
        if columns > source_columns || rows > source_rows {
            return Err(LayoutError::GridCapacity {
                side: Side::Source,
                columns,
                rows,
                x: 0,
                y: 0,
                available_columns: source_columns,
                available_rows: source_rows,
            });
        }

        for row in 0..rows {
            for col in 0..columns {
                self.buffer.slots.push(StagedDef::Source {
                    source,
                    slot: Some(row * source_columns + col),
                });
            }
        }
        self.buffer.grid = Some((columns, rows));
        Ok(self)
    }

    /// Stages a single empty dummy slot.
    ///
    /// # Errors
    /// See [`dummy_with`](Self::dummy_with).
    pub fn dummy(&mut self) -> Result<&mut Self, LayoutError> {
        self.dummy_with(1, ItemStack::empty())
    }

    /// Stages `count` dummy slots holding a static copy of `item`.
    ///
    /// # Errors
    /// Returns [`LayoutError::Capacity`] when `count` exceeds the
    /// destination's remaining capacity.
    pub fn dummy_with(&mut self, count: usize, item: ItemStack) -> Result<&mut Self, LayoutError> {
        self.commit_staged()?;
        let shape = self.shape.ok_or(LayoutError::NoShape)?;

        let target_available = shape.size() - self.bound.len();
        if count > target_available {
            return Err(LayoutError::Capacity {
                side: Side::Target,
                required: count,
                available: target_available,
            });
        }

        for _ in 0..count {
            self.buffer.slots.push(StagedDef::Dummy(item.clone()));
        }
        self.buffer.grid = None;
        Ok(self)
    }

    /// Binds every still-unbound destination slot to an empty dummy.
    ///
    /// # Errors
    /// See [`fill_dummy_with`](Self::fill_dummy_with).
    pub fn fill_dummy(&mut self) -> Result<&mut Self, LayoutError> {
        self.fill_dummy_with(ItemStack::empty())
    }

    /// Binds every still-unbound destination slot to a dummy holding `item`.
    ///
    /// Commits the pending region first. Idempotent: already bound slots are
    /// untouched.
    ///
    /// # Errors
    /// Returns [`LayoutError::NoShape`] when no shape is selected, or any
    /// error from committing the pending region.
    pub fn fill_dummy_with(&mut self, item: ItemStack) -> Result<&mut Self, LayoutError> {
        self.commit_staged()?;
        let shape = self.shape.ok_or(LayoutError::NoShape)?;
        for index in 0..shape.size() {
            self.bound
                .entry(index)
                .or_insert_with(|| SlotDefinition::Dummy(item.clone()));
        }
        Ok(self)
    }

    fn staged_source(&self) -> Option<usize> {
        self.buffer.slots.iter().find_map(|def| match def {
            StagedDef::Source { source, .. } => Some(*source),
            StagedDef::Dummy(_) => None,
        })
    }

    /// Overrides the source anchor of the staged region with a flat index.
    ///
    /// Slots receive consecutive source indices starting at `index`. Has no
    /// effect on dummy regions. For grid regions the index is interpreted
    /// against the source grid's rows.
    ///
    /// # Errors
    /// Returns [`LayoutError::NoStagedRegion`] with nothing staged,
    /// [`LayoutError::Capacity`] when the region does not fit the source
    /// from `index`.
    pub fn from_index(&mut self, index: usize) -> Result<&mut Self, LayoutError> {
        if self.buffer.slots.is_empty() {
            return Err(LayoutError::NoStagedRegion);
        }
        let Some(source) = self.staged_source() else {
            // Source anchors do not apply to dummy regions.
            return Ok(self);
        };
        if self.buffer.grid.is_some() {
            let (source_columns, _) = self.sources[source]
                .grid
                .ok_or(LayoutError::NotAGrid { side: Side::Source })?;
            return self.from_position(index % source_columns, index / source_columns);
        }

        let capacity = self.sources[source].capacity;
        let required = self.buffer.slots.len() + index;
        if required > capacity {
            return Err(LayoutError::Capacity {
                side: Side::Source,
                required,
                available: capacity,
            });
        }
        let mut slot = index;
        for def in &mut self.buffer.slots {
            if let StagedDef::Source { slot: explicit, .. } = def {
                *explicit = Some(slot);
                slot += 1;
            }
        }
        Ok(self)
    }

    /// Overrides the source anchor of the staged region with a grid
    /// position.
    ///
    /// Requires a grid-capable source. Has no effect on dummy regions. For
    /// non-grid regions the position is flattened to an index.
    ///
    /// # Errors
    /// Returns [`LayoutError::NoStagedRegion`] with nothing staged,
    /// [`LayoutError::NotAGrid`] for a non-grid source,
    /// [`LayoutError::GridCapacity`] when the region does not fit the
    /// source grid from `(x, y)`.
    pub fn from_position(&mut self, x: usize, y: usize) -> Result<&mut Self, LayoutError> {
        if self.buffer.slots.is_empty() {
            return Err(LayoutError::NoStagedRegion);
        }
        let Some(source) = self.staged_source() else {
            return Ok(self);
        };
        let (source_columns, source_rows) = self.sources[source]
            .grid
            .ok_or(LayoutError::NotAGrid { side: Side::Source })?;

        let Some((columns, rows)) = self.buffer.grid else {
            return self.from_index(y * source_columns + x);
        };
        if x + columns > source_columns || y + rows > source_rows {
            return Err(LayoutError::GridCapacity {
                side: Side::Source,
                columns,
                rows,
                x,
                y,
                available_columns: source_columns,
                available_rows: source_rows,
            });
        }
        for (offset, def) in self.buffer.slots.iter_mut().enumerate() {
            let row = offset / columns;
            let col = offset % columns;
            if let StagedDef::Source { slot, .. } = def {
                *slot = Some((y + row) * source_columns + (x + col));
            }
        }
        Ok(self)
    }

    /// Sets the destination anchor of the staged region to a flat index.
    ///
    /// For grid regions the index is interpreted against the destination
    /// grid's rows.
    ///
    /// # Errors
    /// Returns [`LayoutError::NoStagedRegion`] with nothing staged,
    /// [`LayoutError::Capacity`] when the region does not fit the
    /// destination from `index`.
    pub fn at_index(&mut self, index: usize) -> Result<&mut Self, LayoutError> {
        if self.buffer.slots.is_empty() {
            return Err(LayoutError::NoStagedRegion);
        }
        let shape = self.shape.ok_or(LayoutError::NoShape)?;
        if self.buffer.grid.is_some() {
            let (target_columns, _) = shape
                .grid_size()
                .ok_or(LayoutError::NotAGrid { side: Side::Target })?;
            return self.at_position(index % target_columns, index / target_columns);
        }

        let required = self.buffer.slots.len() + index;
        if required > shape.size() {
            return Err(LayoutError::Capacity {
                side: Side::Target,
                required,
                available: shape.size(),
            });
        }
        self.buffer.at_index = Some(index);
        Ok(self)
    }

    /// Sets the destination anchor of the staged region to a grid position.
    ///
    /// Requires a grid destination. For non-grid regions the position is
    /// flattened to an index.
    ///
    /// # Errors
    /// Returns [`LayoutError::NoStagedRegion`] with nothing staged,
    /// [`LayoutError::NotAGrid`] for a non-grid destination,
    /// [`LayoutError::GridCapacity`] when the region does not fit the
    /// destination grid from `(x, y)`.
    pub fn at_position(&mut self, x: usize, y: usize) -> Result<&mut Self, LayoutError> {
        if self.buffer.slots.is_empty() {
            return Err(LayoutError::NoStagedRegion);
        }
        let shape = self.shape.ok_or(LayoutError::NoShape)?;
        let (target_columns, target_rows) = shape
            .grid_size()
            .ok_or(LayoutError::NotAGrid { side: Side::Target })?;

        let Some((columns, rows)) = self.buffer.grid else {
            return self.at_index(y * target_columns + x);
        };
        if x + columns > target_columns || y + rows > target_rows {
            return Err(LayoutError::GridCapacity {
                side: Side::Target,
                columns,
                rows,
                x,
                y,
                available_columns: target_columns,
                available_rows: target_rows,
            });
        }
        self.buffer.at_position = Some((x, y));
        Ok(self)
    }

    /// Attaches a click handler to every slot of the staged region.
    ///
    /// # Errors
    /// Returns [`LayoutError::NoStagedRegion`] with nothing staged.
    pub fn on_click<F>(&mut self, handler: F) -> Result<&mut Self, LayoutError>
    where
        F: Fn(usize, ClickType) -> bool + Send + Sync + 'static,
    {
        if self.buffer.slots.is_empty() {
            return Err(LayoutError::NoStagedRegion);
        }
        self.buffer.click.push(Arc::new(handler));
        Ok(self)
    }

    /// Attaches a change handler to every slot of the staged region.
    ///
    /// # Errors
    /// Returns [`LayoutError::NoStagedRegion`] with nothing staged.
    pub fn on_change<F>(&mut self, handler: F) -> Result<&mut Self, LayoutError>
    where
        F: Fn(usize) -> bool + Send + Sync + 'static,
    {
        if self.buffer.slots.is_empty() {
            return Err(LayoutError::NoStagedRegion);
        }
        self.buffer.change.push(Arc::new(handler));
        Ok(self)
    }

    /// Attaches a close handler to every slot of the staged region.
    ///
    /// # Errors
    /// Returns [`LayoutError::NoStagedRegion`] with nothing staged.
    pub fn on_close<F>(&mut self, handler: F) -> Result<&mut Self, LayoutError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.buffer.slots.is_empty() {
            return Err(LayoutError::NoStagedRegion);
        }
        self.buffer.close.push(Arc::new(handler));
        Ok(self)
    }

    /// Sets a unique identity for the built layout.
    pub fn identity(&mut self, uuid: Uuid) -> &mut Self {
        self.identity = Some(uuid);
        self
    }

    /// Writes the pending region into the committed bindings.
    fn commit_staged(&mut self) -> Result<(), LayoutError> {
        if self.buffer.slots.is_empty() {
            self.buffer = Buffer::default();
            return Ok(());
        }
        let shape = self.shape.ok_or(LayoutError::NoShape)?;
        let buffer = mem::take(&mut self.buffer);
        let count = buffer.slots.len();

        let mut indices = Vec::with_capacity(count);
        let mut sequential = false;
        if let Some((columns, rows)) = buffer.grid {
            let target_columns = shape.grid_size().map_or(columns, |(c, _)| c);
            let (ax, ay) = buffer.at_position.unwrap_or((0, 0));
            for row in 0..rows {
                for col in 0..columns {
                    indices.push((ay + row) * target_columns + (ax + col));
                }
            }
        } else {
            let start = match buffer.at_index {
                Some(index) => index,
                None => {
                    sequential = true;
                    self.cursor
                }
            };
            if start + count > shape.size() {
                return Err(LayoutError::Capacity {
                    side: Side::Target,
                    required: count,
                    available: shape.size().saturating_sub(start),
                });
            }
            indices.extend(start..start + count);
        }

        // A conflicting region must not be written at all.
        for &index in &indices {
            if self.bound.contains_key(&index) {
                return Err(LayoutError::SlotConflict { index });
            }
        }

        for (def, index) in buffer.slots.into_iter().zip(indices.iter().copied()) {
            let definition = match def {
                StagedDef::Dummy(item) => SlotDefinition::Dummy(item),
                StagedDef::Source { source, slot } => {
                    let slot = slot.unwrap_or_else(|| {
                        let state = &mut self.sources[source];
                        let next = state.cursor;
                        state.cursor += 1;
                        next
                    });
                    SlotDefinition::Source {
                        source: SourceId(source),
                        slot,
                    }
                }
            };
            self.bound.insert(index, definition);
        }
        if sequential {
            self.cursor += count;
        }

        for handler in buffer.click {
            self.callbacks.register_click(&indices, handler);
        }
        for handler in buffer.change {
            self.callbacks.register_change(&indices, handler);
        }
        for handler in buffer.close {
            self.callbacks.register_close(&indices, handler);
        }

        log::trace!("committed region of {count} slot(s)");
        Ok(())
    }

    /// Commits the pending region and finalizes the layout.
    ///
    /// Every destination slot must be bound; call
    /// [`fill_dummy`](Self::fill_dummy) first to pad unbound slots. The
    /// builder is consumed; start over with a fresh shape to build another
    /// layout.
    ///
    /// # Errors
    /// Returns [`LayoutError::IncompleteLayout`] when destination slots
    /// remain unbound, [`LayoutError::NoShape`] when no shape was selected,
    /// or any error from committing the pending region.
    pub fn build(mut self) -> Result<ViewLayout, LayoutError> {
        self.commit_staged()?;
        let shape = self.shape.ok_or(LayoutError::NoShape)?;
        let size = shape.size();

        let mut slots: Vec<Option<SlotDefinition>> = (0..size).map(|_| None).collect();
        for (index, definition) in self.bound {
            if let Some(entry) = slots.get_mut(index) {
                *entry = Some(definition);
            }
        }
        let unbound: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter_map(|(index, definition)| definition.is_none().then_some(index))
            .collect();
        if !unbound.is_empty() {
            return Err(LayoutError::IncompleteLayout { unbound, size });
        }

        let slots: Box<[SlotDefinition]> = slots.into_iter().flatten().collect();
        let sources: Box<[Arc<dyn Container>]> = self
            .sources
            .into_iter()
            .map(|state| state.inventory)
            .collect();
        log::debug!(
            "built view layout: {size} slot(s), {} source(s)",
            sources.len()
        );
        Ok(ViewLayout {
            container_type: self.container_type,
            shape,
            slots,
            sources,
            callbacks: self.callbacks,
            identity: self.identity,
        })
    }
}
