use kitchen_table::header::{col_span, columns_at_level, header_depth, header_rows};
use kitchen_table::prelude::*;

fn spans(element: &Element) -> Vec<Vec<(Option<u16>, Option<u16>)>> {
    element
        .find_all(Tag::Thead)[0]
        .child_elements()
        .iter()
        .map(|tr| {
            tr.child_elements()
                .iter()
                .map(|th| (th.row_span, th.col_span))
                .collect()
        })
        .collect()
}

/// City | Population (City proper | Metro (Urban area | Metro area)) | Country
fn deep_columns() -> Vec<Column> {
    vec![
        Column::new("City", "city"),
        Column::group(
            "Population",
            vec![
                Column::new("City proper", "cityProper"),
                Column::group(
                    "Metro",
                    vec![
                        Column::new("Urban area", "urbanArea"),
                        Column::new("Metro area", "metroArea"),
                    ],
                ),
            ],
        ),
        Column::new("Country", "country"),
    ]
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_flat_columns_have_one_row() {
    let columns = vec![Column::new("A", "a"), Column::new("B", "b")];
    assert_eq!(header_depth(&columns), 1);

    let rows = header_rows(&columns);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].iter().all(|c| c.row_span == 1 && c.col_span == 1));
}

#[test]
fn test_depth_and_spans() {
    let columns = deep_columns();
    assert_eq!(header_depth(&columns), 3);
    assert_eq!(col_span(&columns[1]), 3);
    assert_eq!(col_span(&columns[1].sub_columns[1]), 2);
}

#[test]
fn test_rows_by_level() {
    let columns = deep_columns();
    let rows = header_rows(&columns);

    let layout: Vec<Vec<(String, u16, u16)>> = rows
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|c| (c.column.title.label(), c.row_span, c.col_span))
                .collect()
        })
        .collect();

    assert_eq!(
        layout,
        vec![
            vec![
                ("City".to_string(), 3, 1),
                ("Population".to_string(), 1, 3),
                ("Country".to_string(), 3, 1),
            ],
            vec![
                ("City proper".to_string(), 2, 1),
                ("Metro".to_string(), 1, 2),
            ],
            vec![
                ("Urban area".to_string(), 1, 1),
                ("Metro area".to_string(), 1, 1),
            ],
        ]
    );
}

#[test]
fn test_leaf_indices_are_document_order() {
    let columns = deep_columns();
    let rows = header_rows(&columns);

    let leaves: Vec<(String, Option<usize>)> = rows
        .iter()
        .flatten()
        .map(|c| (c.column.title.label(), c.leaf_index()))
        .collect();

    assert_eq!(
        leaves,
        vec![
            ("City".to_string(), Some(0)),
            ("Population".to_string(), None),
            ("Country".to_string(), Some(4)),
            ("City proper".to_string(), Some(1)),
            ("Metro".to_string(), None),
            ("Urban area".to_string(), Some(2)),
            ("Metro area".to_string(), Some(3)),
        ]
    );
}

#[test]
fn test_columns_at_level_tracks_offsets() {
    let columns = deep_columns();
    let offsets: Vec<usize> = columns_at_level(&columns, 2)
        .into_iter()
        .map(|(offset, _)| offset)
        .collect();
    assert_eq!(offsets, vec![2, 3]);
}

#[test]
fn test_empty_group_counts_as_leaf() {
    let columns = vec![Column::new("A", "a"), Column::group("Empty", Vec::new())];
    assert_eq!(header_depth(&columns), 1);
    assert_eq!(col_span(&columns[1]), 1);
}

// ============================================================================
// Rendered header
// ============================================================================

#[test]
fn test_rendered_spans() {
    let columns = vec![
        Column::new("City", "city"),
        Column::group(
            "Population",
            vec![
                Column::new("City proper", "cityProper"),
                Column::new("Urban area", "urbanArea"),
            ],
        ),
    ];
    let mut table = KitchenTable::new(TableProps::new(), columns, Vec::new());
    let root = table.render().unwrap();

    assert_eq!(
        spans(&root),
        vec![
            vec![(Some(2), Some(1)), (Some(1), Some(2))],
            vec![(Some(1), Some(1)), (Some(1), Some(1))],
        ]
    );
    let titles: Vec<String> = root.find_all(Tag::Th).iter().map(|th| th.text_content()).collect();
    assert_eq!(titles, vec!["City", "Population", "City proper", "Urban area"]);
}

#[test]
fn test_empty_data_renders_empty_body() {
    let mut table = KitchenTable::new(TableProps::new(), vec![Column::new("A", "a")], Vec::new());
    let root = table.render().unwrap();

    assert!(root.find_all(Tag::Td).is_empty());
    assert_eq!(root.find_all(Tag::Tbody).len(), 1);
}
