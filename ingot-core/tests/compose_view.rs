//! End-to-end composition of a chest view from several source inventories.

use std::sync::Arc;

use ingot_core::inventory::{ClickType, Container, GridContainer, SlotDefinition, ViewBuilder};
use ingot_registry::container_type::ContainerType;
use ingot_registry::item_stack::ItemStack;

#[test]
fn compose_chest_view_from_three_sources() {
    let dispenser_a: Arc<dyn Container> = Arc::new(GridContainer::new(3, 3));
    let dispenser_b: Arc<dyn Container> = Arc::new(GridContainer::new(3, 3));
    let mut chest = GridContainer::new(9, 3);
    chest.set_item(3, ItemStack::new(42, 16));
    let chest: Arc<dyn Container> = Arc::new(chest);

    let mut builder = ViewBuilder::new();
    builder.shape(ContainerType::Generic9x6);
    builder.source(Arc::clone(&dispenser_a)).unwrap();
    builder.grid(3, 3).unwrap();
    builder.source(Arc::clone(&dispenser_b)).unwrap();
    builder.grid(3, 3).unwrap();
    builder.at_position(3, 1).unwrap();
    builder.source(Arc::clone(&chest)).unwrap();
    builder.grid(3, 3).unwrap();
    builder.from_position(3, 0).unwrap();
    builder.at_position(6, 3).unwrap();
    builder.slot().unwrap();
    builder.from_index(0).unwrap();
    builder.at_index(37).unwrap();
    builder.on_change(|_| true).unwrap();
    builder.dummy().unwrap();
    builder.at_index(16).unwrap();
    builder.on_click(|_, click| click == ClickType::Pickup).unwrap();
    builder.fill_dummy().unwrap();
    let layout = builder.build().unwrap();

    assert_eq!(layout.size(), 54);
    assert_eq!(layout.container_type(), Some(ContainerType::Generic9x6));
    assert_eq!(layout.sources().len(), 3);

    // Dispenser A covers the top-left 3x3 block.
    for row in 0..3 {
        for col in 0..3 {
            let target = row * 9 + col;
            match layout.slot(target) {
                Some(SlotDefinition::Source { source, slot }) => {
                    assert!(Arc::ptr_eq(layout.source(*source), &dispenser_a));
                    assert_eq!(*slot, row * 3 + col);
                }
                other => panic!("destination {target}: expected source binding, got {other:?}"),
            }
        }
    }

    // Dispenser B covers a 3x3 block anchored at column 3, row 1.
    for row in 0..3 {
        for col in 0..3 {
            let target = (1 + row) * 9 + (3 + col);
            match layout.slot(target) {
                Some(SlotDefinition::Source { source, slot }) => {
                    assert!(Arc::ptr_eq(layout.source(*source), &dispenser_b));
                    assert_eq!(*slot, row * 3 + col);
                }
                other => panic!("destination {target}: expected source binding, got {other:?}"),
            }
        }
    }

    // The chest's right 3x3 block lands in the bottom-right corner.
    for row in 0..3 {
        for col in 0..3 {
            let target = (3 + row) * 9 + (6 + col);
            match layout.slot(target) {
                Some(SlotDefinition::Source { source, slot }) => {
                    assert!(Arc::ptr_eq(layout.source(*source), &chest));
                    assert_eq!(*slot, row * 9 + (3 + col));
                }
                other => panic!("destination {target}: expected source binding, got {other:?}"),
            }
        }
    }

    // The single slot at 37 delegates to chest slot 0, and destination 33
    // shows the stack placed in chest slot 3 before composing.
    match layout.slot(37) {
        Some(SlotDefinition::Source { source, slot }) => {
            assert!(Arc::ptr_eq(layout.source(*source), &chest));
            assert_eq!(*slot, 0);
        }
        other => panic!("expected source binding at 37, got {other:?}"),
    }
    assert_eq!(layout.item_at(33), Some(ItemStack::new(42, 16)));

    // Dummy padding everywhere else.
    assert!(layout.slot(16).unwrap().is_dummy());
    assert_eq!(
        layout.slots().iter().filter(|def| !def.is_dummy()).count(),
        28
    );

    // Callbacks were recorded against the committed destination indices.
    assert_eq!(layout.callbacks().change_handlers(37).count(), 1);
    let click = layout.callbacks().click_handlers(16).next().unwrap();
    assert!(click(16, ClickType::Pickup));
    assert!(!click(16, ClickType::Throw));
    assert!(layout.callbacks().click_handlers(0).next().is_none());
}
