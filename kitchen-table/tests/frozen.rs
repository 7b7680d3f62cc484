use kitchen_table::classes;
use kitchen_table::prelude::*;
use tabledom::{ScrollOffset, Transform};

fn columns() -> Vec<Column> {
    vec![
        Column::new("City", "city").freeze(),
        Column::new("Population", "population"),
    ]
}

fn data() -> Vec<Row> {
    vec![
        row! { "city" => "Shanghai", "population" => 24256800 },
        row! { "city" => "Karachi", "population" => 23500000 },
    ]
}

fn mounted(props: TableProps) -> (KitchenTable, ScrollContainer) {
    let mut container = ScrollContainer::new("scroller");
    let mut table = KitchenTable::new(props, columns(), data());
    table.render().unwrap();
    table.mount(&mut container).unwrap();
    (table, container)
}

fn scroll(table: &mut KitchenTable, container: &mut ScrollContainer, x: u16, y: u16) {
    let event = container.scroll_to(x, y).expect("table listens");
    assert_eq!(table.dispatch(&event).unwrap(), EventResult::Consumed);
}

fn transforms(table: &KitchenTable, tag: Tag) -> Vec<Option<String>> {
    table
        .element()
        .unwrap()
        .find_all(tag)
        .iter()
        .map(|el| el.style.transform.map(|t| t.to_string()))
        .collect()
}

// ============================================================================
// Markers
// ============================================================================

#[test]
fn test_frozen_class_on_header_and_cells() {
    let mut table = KitchenTable::new(TableProps::new(), columns(), data());
    let root = table.render().unwrap();

    let th = root.find_all(Tag::Th);
    assert!(th[0].has_class(classes::FROZEN_COLUMN));
    assert!(!th[1].has_class(classes::FROZEN_COLUMN));

    let td = root.find_all(Tag::Td);
    assert!(td[0].has_class(classes::FROZEN_COLUMN));
    assert!(!td[1].has_class(classes::FROZEN_COLUMN));
    assert!(td[2].has_class(classes::FROZEN_COLUMN));
}

#[test]
fn test_frozen_class_follows_computed_class() {
    let columns = vec![Column::new("City", "city").class_name("name").freeze()];
    let mut table = KitchenTable::new(TableProps::new(), columns, data());
    let root = table.render().unwrap();
    assert_eq!(
        root.find_all(Tag::Td)[0].class_attr(),
        "name KitchenTable-frozen-column"
    );
}

#[test]
fn test_sortable_frozen_header_has_both_classes() {
    let mut table = KitchenTable::new(TableProps::new().sortable(true), columns(), data());
    let root = table.render().unwrap();
    assert_eq!(
        root.find_all(Tag::Th)[0].class_attr(),
        "KitchenTable-sortable KitchenTable-frozen-column"
    );
}

// ============================================================================
// Scroll sync
// ============================================================================

#[test]
fn test_no_transform_before_scroll() {
    let (table, _container) = mounted(TableProps::new());
    assert_eq!(transforms(&table, Tag::Th), vec![None, None]);
    assert_eq!(transforms(&table, Tag::Td), vec![None, None, None, None]);
}

#[test]
fn test_horizontal_scroll_pins_frozen_column() {
    let (mut table, mut container) = mounted(TableProps::new());

    scroll(&mut table, &mut container, 100, 0);

    assert_eq!(
        transforms(&table, Tag::Th),
        vec![
            Some("translate(100px, 0)".to_string()),
            Some("translate(0, 0)".to_string()),
        ]
    );
    assert_eq!(
        transforms(&table, Tag::Td),
        vec![
            Some("translateX(100px)".to_string()),
            None,
            Some("translateX(100px)".to_string()),
            None,
        ]
    );
}

#[test]
fn test_vertical_scroll_without_fixed_header() {
    let (mut table, mut container) = mounted(TableProps::new());

    scroll(&mut table, &mut container, 0, 40);

    assert_eq!(
        transforms(&table, Tag::Th),
        vec![Some("translate(0, 0)".to_string()), Some("translate(0, 0)".to_string())]
    );
}

#[test]
fn test_fixed_header_follows_vertical_scroll() {
    let (mut table, mut container) = mounted(TableProps::new().fixed_header(true));

    scroll(&mut table, &mut container, 30, 40);

    assert_eq!(
        transforms(&table, Tag::Th),
        vec![
            Some("translate(30px, 40px)".to_string()),
            Some("translate(0, 40px)".to_string()),
        ]
    );
    assert_eq!(
        transforms(&table, Tag::Td)[0],
        Some("translateX(30px)".to_string())
    );
}

#[test]
fn test_repeated_scroll_is_idempotent() {
    let (mut table, mut container) = mounted(TableProps::new());

    scroll(&mut table, &mut container, 100, 0);
    let first = table.element().cloned();
    scroll(&mut table, &mut container, 100, 0);

    assert_eq!(table.element().cloned(), first);
}

#[test]
fn test_scroll_back_to_origin() {
    let (mut table, mut container) = mounted(TableProps::new());

    scroll(&mut table, &mut container, 100, 0);
    scroll(&mut table, &mut container, 0, 0);

    let root = table.element().unwrap();
    assert_eq!(
        root.find_all(Tag::Th)[0].style.transform,
        Some(Transform::Translate { x: 0, y: 0 })
    );
    assert_eq!(
        root.find_all(Tag::Td)[0].style.transform,
        Some(Transform::TranslateX(0))
    );
}

#[test]
fn test_transforms_survive_rerender() {
    let (mut table, mut container) = mounted(TableProps::new().sortable(true));
    scroll(&mut table, &mut container, 100, 0);

    // Sorting re-renders the tree.
    let header = table.element().unwrap().find_all(Tag::Th)[1].id.clone();
    table.dispatch(&Event::click(header)).unwrap();

    assert_eq!(
        transforms(&table, Tag::Th)[0],
        Some("translate(100px, 0)".to_string())
    );
    assert_eq!(
        transforms(&table, Tag::Td)[0],
        Some("translateX(100px)".to_string())
    );
}

#[test]
fn test_scroll_from_other_container_is_ignored() {
    let (mut table, _container) = mounted(TableProps::new());
    let event = Event::Scroll {
        target: "elsewhere".to_string(),
        offset: ScrollOffset::new(10, 10),
    };

    assert_eq!(table.dispatch(&event).unwrap(), EventResult::Ignored);
    assert_eq!(transforms(&table, Tag::Th), vec![None, None]);
}

// ============================================================================
// Mount / unmount
// ============================================================================

#[test]
fn test_mount_registers_one_listener() {
    let (table, container) = mounted(TableProps::new());
    assert!(table.is_mounted());
    assert_eq!(container.listener_count(), 1);
}

#[test]
fn test_unmount_removes_listener() {
    let (mut table, mut container) = mounted(TableProps::new());

    table.unmount(&mut container).unwrap();

    assert!(!table.is_mounted());
    assert_eq!(container.listener_count(), 0);
    assert!(container.scroll_to(50, 0).is_none());
}

#[test]
fn test_unmount_without_mount_is_noop() {
    let mut container = ScrollContainer::new("scroller");
    let mut table = KitchenTable::new(TableProps::new(), columns(), data());

    assert!(table.unmount(&mut container).is_ok());
    assert_eq!(container.listener_count(), 0);
}

#[test]
fn test_double_mount_fails() {
    let (mut table, mut container) = mounted(TableProps::new());

    let err = table.mount(&mut container).unwrap_err();

    assert_eq!(
        err,
        TableError::AlreadyMounted {
            container: "scroller".to_string()
        }
    );
    assert_eq!(container.listener_count(), 1);
}

#[test]
fn test_unmount_from_wrong_container_fails() {
    let (mut table, _container) = mounted(TableProps::new());
    let mut other = ScrollContainer::new("other");

    let err = table.unmount(&mut other).unwrap_err();

    assert_eq!(
        err,
        TableError::WrongContainer {
            expected: "scroller".to_string(),
            found: "other".to_string()
        }
    );
    assert!(table.is_mounted());
}

#[test]
fn test_remount_starts_without_offset() {
    let (mut table, mut container) = mounted(TableProps::new());
    scroll(&mut table, &mut container, 100, 0);
    table.unmount(&mut container).unwrap();
    table.mount(&mut container).unwrap();

    let root = table.render().unwrap();
    assert!(root.find_all(Tag::Th)[0].style.transform.is_none());
}
