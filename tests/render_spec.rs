use std::collections::BTreeMap;

use serde_json::json;
use uwodex::models::{Page, RefValue, SortDir};
use uwodex::query::{FieldKind, FieldSpec, QuerySchema, QueryState};
use uwodex::render::refs::{render_refs, LinkMode};
use uwodex::render::table::render_table;
use uwodex::render::{CellFmt, Column, ValueFmt};

const SCHEMA: QuerySchema = QuerySchema {
    fields: &[FieldSpec::new("name_search", FieldKind::Text)],
    default_page_size: 10,
    default_sort: None,
};

const COLUMNS: &[Column] = &[
    Column::plain("name", "Name").asc_first(),
    Column::plain("difficulty", "Difficulty"),
    Column::plain("skills", "Skills")
        .with_fmt(CellFmt::RefChips(ValueFmt::Paren))
        .unsortable(),
];

fn page(items: Vec<serde_json::Value>, total: u64) -> Page<serde_json::Value> {
    Page { items, total }
}

#[test]
fn ref_chips_link_value_and_label() {
    let refs = [RefValue::new(12, "Sewing").with_value(3.0)];
    let out = render_refs(Some(&refs), LinkMode::Nav, ValueFmt::Paren);
    assert_eq!(out, r#"<a class="chip" href="/obj/12">Sewing (3)</a>"#);
}

#[test]
fn absent_refs_render_nothing() {
    assert_eq!(render_refs(None, LinkMode::Nav, ValueFmt::Paren), "");
    assert_eq!(render_refs(Some(&[]), LinkMode::Nav, ValueFmt::Paren), "");
}

#[test]
fn table_renders_rows_and_sort_links() {
    let rows = vec![
        json!({"id": 1, "name": "Spice Run", "difficulty": 3,
               "skills": [{"id": 9, "name": "Search", "value": 1}]}),
        json!({"id": 2, "name": "Dye Vat", "difficulty": 5}),
    ];
    let state = QueryState::empty(&SCHEMA);
    let out = render_table(COLUMNS, &page(rows, 2), &state, &SCHEMA, "/catalog/quests", &BTreeMap::new());

    // rows navigate to the detail page
    assert!(out.contains(r#"data-href="/obj/1""#));
    assert!(out.contains(r#"data-href="/obj/2""#));
    // first column is itself a link to the same place
    assert!(out.contains(r##"<td><a href="/obj/1">Spice Run</a></td>"##));
    // sortable header carries a sort href, unsortable one does not
    assert!(out.contains("sort_by=name"));
    assert!(!out.contains("sort_by=skills"));
    // missing chip field renders an empty cell, not an error
    assert!(out.contains("<td></td>"));
    // chip cell resolved through the reference renderer
    assert!(out.contains("Search (1)"));
}

#[test]
fn sorted_header_shows_direction_marker() {
    let params = BTreeMap::new();
    let state = QueryState::empty(&SCHEMA).with_sort_toggled("name", SortDir::Asc);
    let out = render_table(COLUMNS, &page(vec![], 0), &state, &SCHEMA, "/catalog/quests", &params);
    assert!(out.contains("Name</a> ▲") || out.contains("Name ▲"));
    // toggling the sorted column again must link to the flipped direction
    assert!(out.contains("sort_order=desc"));
}

#[test]
fn pager_reflects_range_and_bounds() {
    let rows: Vec<_> = (0..10).map(|i| json!({"id": i, "name": format!("q{i}")})).collect();
    let params = BTreeMap::new();

    // first page of 23: no prev, next present
    let state = QueryState::empty(&SCHEMA);
    let out = render_table(COLUMNS, &page(rows.clone(), 23), &state, &SCHEMA, "/catalog/quests", &params);
    assert!(out.contains("1–10 of 23"));
    assert!(out.contains(r#"<span class="prev off">"#));
    assert!(out.contains("page=1"));

    // last page: prev present, no next
    let state = state.with_page(2);
    let out = render_table(COLUMNS, &page(rows, 23), &state, &SCHEMA, "/catalog/quests", &params);
    assert!(out.contains("21–23 of 23"));
    assert!(out.contains(r#"<span class="next off">"#));
}

#[test]
fn pager_offers_shared_page_sizes() {
    let state = QueryState::empty(&SCHEMA);
    let out = render_table(COLUMNS, &page(vec![], 0), &state, &SCHEMA, "/catalog/quests", &BTreeMap::new());
    assert!(out.contains(r#"<span class="size on">10</span>"#));
    assert!(out.contains("rowsPerPage=25"));
    assert!(out.contains("rowsPerPage=100"));
}

#[test]
fn empty_page_renders_headers_and_zero_range() {
    let state = QueryState::empty(&SCHEMA);
    let out = render_table(COLUMNS, &page(vec![], 0), &state, &SCHEMA, "/catalog/quests", &BTreeMap::new());
    assert!(out.contains("<thead>"));
    assert!(out.contains("0–0 of 0"));
}

#[test]
fn list_shapes_normalize_identically() {
    // envelope and bare-array backend responses decode to the same page type
    let envelope: Page<serde_json::Value> =
        serde_json::from_str(r#"{"items": [{"id": 1}], "total": 40}"#).unwrap();
    assert_eq!(envelope.total, 40);

    let bare: Page<serde_json::Value> = serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
    assert_eq!(bare.total, 2);
    assert_eq!(bare.items.len(), 2);
}
