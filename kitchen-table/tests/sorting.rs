use std::cell::RefCell;
use std::rc::Rc;

use kitchen_table::classes;
use kitchen_table::prelude::*;

fn letters() -> Vec<Row> {
    vec![
        row! { "letter" => "b", "number" => 2 },
        row! { "letter" => "a", "number" => 3 },
        row! { "letter" => "c", "number" => 1 },
    ]
}

fn columns() -> Vec<Column> {
    vec![Column::new("Letter", "letter"), Column::new("Number", "number")]
}

fn column_text(table: &KitchenTable, col: usize) -> Vec<String> {
    let root = table.element().unwrap();
    root.find_all(Tag::Tbody)[0]
        .child_elements()
        .iter()
        .map(|tr| tr.child_elements()[col].text_content())
        .collect()
}

fn header_id(table: &KitchenTable, idx: usize) -> String {
    table.element().unwrap().find_all(Tag::Th)[idx].id.clone()
}

fn click_header(table: &mut KitchenTable, idx: usize) -> EventResult {
    let id = header_id(table, idx);
    table.dispatch(&Event::click(id)).unwrap()
}

fn sortable_table(props: TableProps) -> KitchenTable {
    let mut table = KitchenTable::new(props.sortable(true), columns(), letters());
    table.render().unwrap();
    table
}

// ============================================================================
// Sort cycle
// ============================================================================

#[test]
fn test_sort_disabled_by_default() {
    let mut table = KitchenTable::new(TableProps::new(), columns(), letters());
    let root = table.render().unwrap();

    assert!(root.find_by_class(classes::SORTABLE).is_empty());
    assert_eq!(click_header(&mut table, 0), EventResult::Ignored);
    assert_eq!(column_text(&table, 0), vec!["b", "a", "c"]);
}

#[test]
fn test_three_state_cycle() {
    let mut table = sortable_table(TableProps::new());

    click_header(&mut table, 0);
    assert_eq!(column_text(&table, 0), vec!["a", "b", "c"]);

    click_header(&mut table, 0);
    assert_eq!(column_text(&table, 0), vec!["c", "b", "a"]);

    click_header(&mut table, 0);
    assert_eq!(column_text(&table, 0), vec!["b", "a", "c"]);
    assert_eq!(table.sort_state(), SortState::Unsorted);
}

#[test]
fn test_two_state_cycle() {
    let mut table = sortable_table(TableProps::new().sort_policy(SortPolicy::TwoState));

    click_header(&mut table, 0);
    click_header(&mut table, 0);
    click_header(&mut table, 0);

    assert_eq!(column_text(&table, 0), vec!["a", "b", "c"]);
    assert_eq!(
        table.sort_state(),
        SortState::Sorted {
            column: 0,
            order: SortOrder::Asc
        }
    );
}

#[test]
fn test_other_column_starts_ascending() {
    let mut table = sortable_table(TableProps::new());

    click_header(&mut table, 0);
    click_header(&mut table, 0);
    click_header(&mut table, 1);

    assert_eq!(column_text(&table, 1), vec!["1", "2", "3"]);
    assert_eq!(column_text(&table, 0), vec!["c", "b", "a"]);
}

#[test]
fn test_numbers_sort_numerically() {
    let data = vec![
        row! { "letter" => "x", "number" => 10 },
        row! { "letter" => "y", "number" => 9 },
        row! { "letter" => "z", "number" => Value::Null },
    ];
    let mut table = KitchenTable::new(TableProps::new().sortable(true), columns(), data);
    table.render().unwrap();

    click_header(&mut table, 1);
    assert_eq!(column_text(&table, 0), vec!["y", "x", "z"]);
}

#[test]
fn test_sort_by_computed_field() {
    let columns = vec![
        Column::new("Letter", "letter"),
        Column::computed("Inverse", |row| {
            row.get("number").as_f64().map(|n| -n).into()
        }),
    ];
    let mut table = KitchenTable::new(TableProps::new().sortable(true), columns, letters());
    table.render().unwrap();

    click_header(&mut table, 1);
    assert_eq!(column_text(&table, 0), vec!["a", "b", "c"]);
}

#[test]
fn test_input_data_is_not_reordered() {
    let mut table = sortable_table(TableProps::new());
    click_header(&mut table, 0);

    let displayed: Vec<String> = table.rows().iter().map(|r| r.get("letter").to_string()).collect();
    assert_eq!(displayed, vec!["a", "b", "c"]);

    click_header(&mut table, 0);
    click_header(&mut table, 0);
    let displayed: Vec<String> = table.rows().iter().map(|r| r.get("letter").to_string()).collect();
    assert_eq!(displayed, vec!["b", "a", "c"]);
}

// ============================================================================
// Header decoration
// ============================================================================

#[test]
fn test_sortable_leaf_headers_are_marked() {
    let columns = vec![
        Column::new("Letter", "letter"),
        Column::group("Numbers", vec![Column::new("Number", "number")]),
    ];
    let mut table = KitchenTable::new(TableProps::new().sortable(true), columns, letters());
    let root = table.render().unwrap();
    let th = root.find_all(Tag::Th);

    assert_eq!(th[0].class_attr(), classes::SORTABLE);
    assert!(th[0].clickable);
    // Group headers are never sortable.
    assert_eq!(th[1].text_content(), "Numbers");
    assert_eq!(th[1].class_attr(), "");
    assert!(!th[1].clickable);
    assert_eq!(th[2].class_attr(), classes::SORTABLE);
}

#[test]
fn test_click_on_group_header_is_ignored() {
    let columns = vec![Column::group("Numbers", vec![Column::new("Number", "number")])];
    let mut table = KitchenTable::new(TableProps::new().sortable(true), columns, letters());
    table.render().unwrap();

    assert_eq!(click_header(&mut table, 0), EventResult::Ignored);
    assert_eq!(table.sort_state(), SortState::Unsorted);
}

#[test]
fn test_nested_leaf_sorts_by_leaf_index() {
    let columns = vec![
        Column::new("Letter", "letter"),
        Column::group("Numbers", vec![Column::new("Number", "number")]),
    ];
    let mut table = KitchenTable::new(TableProps::new().sortable(true), columns, letters());
    table.render().unwrap();

    // th order: Letter, Numbers, Number.
    click_header(&mut table, 2);

    assert_eq!(table.sort_state().column(), Some(1));
    assert_eq!(column_text(&table, 1), vec!["1", "2", "3"]);
}

#[test]
fn test_arrow_classes_follow_state() {
    let mut table = sortable_table(TableProps::new());

    let arrows = |table: &KitchenTable| -> Vec<String> {
        let root = table.element().unwrap();
        let th = root.find_all(Tag::Th)[0];
        th.find_by_class(classes::ARROW)
            .iter()
            .map(|a| a.class_attr().to_string())
            .collect()
    };

    assert_eq!(
        arrows(&table),
        vec!["KitchenTable-arrow KitchenTable-up", "KitchenTable-arrow KitchenTable-down"]
    );

    click_header(&mut table, 0);
    assert_eq!(
        arrows(&table),
        vec![
            "KitchenTable-arrow KitchenTable-up KitchenTable-sort",
            "KitchenTable-arrow KitchenTable-down"
        ]
    );

    click_header(&mut table, 0);
    assert_eq!(
        arrows(&table),
        vec![
            "KitchenTable-arrow KitchenTable-up",
            "KitchenTable-arrow KitchenTable-down KitchenTable-sort"
        ]
    );
}

#[test]
fn test_sortable_header_keeps_title() {
    let table = sortable_table(TableProps::new());
    let root = table.element().unwrap();
    let th = root.find_all(Tag::Th)[0];

    let content = th.find_by_class(classes::HEADER_CONTENT);
    assert_eq!(content.len(), 1);
    assert_eq!(content[0].text_content(), "Letter");
}

// ============================================================================
// Callback
// ============================================================================

#[test]
fn test_on_sort_end_receives_column_and_order() {
    let seen: Rc<RefCell<Vec<(String, Option<SortOrder>)>>> = Rc::default();
    let sink = seen.clone();
    let props = TableProps::new().on_sort_end(move |column, order| {
        sink.borrow_mut().push((column.title.label(), order));
    });
    let mut table = sortable_table(props);

    click_header(&mut table, 0);
    click_header(&mut table, 0);
    click_header(&mut table, 0);

    assert_eq!(
        *seen.borrow(),
        vec![
            ("Letter".to_string(), Some(SortOrder::Asc)),
            ("Letter".to_string(), Some(SortOrder::Desc)),
            ("Letter".to_string(), None),
        ]
    );
}

#[test]
fn test_sorted_column_lookup() {
    let mut table = sortable_table(TableProps::new());
    assert!(table.sorted_column().is_none());

    click_header(&mut table, 1);
    let (column, order) = table.sorted_column().unwrap();
    assert_eq!(column.title.label(), "Number");
    assert_eq!(order, SortOrder::Asc);
}

#[test]
fn test_set_columns_resets_sort() {
    let mut table = sortable_table(TableProps::new());
    click_header(&mut table, 0);

    table.set_columns(columns());
    table.render().unwrap();

    assert_eq!(table.sort_state(), SortState::Unsorted);
    assert_eq!(column_text(&table, 0), vec!["b", "a", "c"]);
}

#[test]
fn test_header_click_after_set_columns_needs_render() {
    let sorted: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = sorted.clone();
    let props = TableProps::new().on_sort_end(move |column, _| {
        sink.borrow_mut().push(column.title.label());
    });
    let mut table = sortable_table(props);
    let number_header = header_id(&table, 1);

    table.set_columns(vec![Column::new("Letter", "letter")]);

    let err = table.dispatch(&Event::click(number_header)).unwrap_err();
    assert_eq!(err, TableError::NotRendered);
    assert_eq!(table.sort_state(), SortState::Unsorted);
    assert!(sorted.borrow().is_empty());

    table.render().unwrap();
    assert_eq!(click_header(&mut table, 0), EventResult::Consumed);
    assert_eq!(table.sorted_column().unwrap().0.title.label(), "Letter");
    assert_eq!(*sorted.borrow(), vec!["Letter".to_string()]);
}

#[test]
fn test_set_data_keeps_sort_state() {
    let mut table = sortable_table(TableProps::new());
    click_header(&mut table, 0);

    table.set_data(vec![
        row! { "letter" => "z", "number" => 1 },
        row! { "letter" => "y", "number" => 2 },
    ]);
    assert!(table.element().is_none());
    table.render().unwrap();

    assert_eq!(column_text(&table, 0), vec!["y", "z"]);
}
