use super::html::{escape, stringify};
use super::refs::{render_amount_table, render_refs, LinkMode, ValueFmt};
use crate::models::{Page, RefValue, SortDir};
use crate::query::{href, QuerySchema, QueryState};
use serde_json::Value;
use std::collections::BTreeMap;

pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 25, 100];

/// How one column turns its raw cell value into markup. The closed set
/// mirrors the reference renderer's recognized shapes; anything else is a
/// plain stringified cell.
#[derive(Copy, Clone, Debug)]
pub enum CellFmt {
    /// Stringified scalar
    Plain,
    /// A single `{id, name}` reference, linked
    Ref,
    /// A list of references as chips
    RefChips(ValueFmt),
    /// A list of references as an amount table
    Amounts,
}

#[derive(Copy, Clone, Debug)]
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
    pub fmt: CellFmt,
    pub sortable: bool,
    /// Direction applied when this column is sorted for the first time.
    /// "Best first" differs per field, so this is per-column, not global.
    pub initial_dir: SortDir,
}

impl Column {
    pub const fn plain(id: &'static str, label: &'static str) -> Self {
        Self { id, label, fmt: CellFmt::Plain, sortable: true, initial_dir: SortDir::Desc }
    }

    pub const fn with_fmt(mut self, fmt: CellFmt) -> Self {
        self.fmt = fmt;
        self
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub const fn asc_first(mut self) -> Self {
        self.initial_dir = SortDir::Asc;
        self
    }
}

fn render_cell(fmt: CellFmt, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match fmt {
        CellFmt::Plain => escape(&stringify(value)),
        CellFmt::Ref => match serde_json::from_value::<RefValue>(value.clone()) {
            Ok(r) => render_refs(Some(std::slice::from_ref(&r)), LinkMode::Nav, ValueFmt::Hidden),
            Err(_) => escape(&stringify(value)),
        },
        CellFmt::RefChips(vf) => match serde_json::from_value::<Vec<RefValue>>(value.clone()) {
            Ok(refs) => render_refs(Some(&refs), LinkMode::Nav, vf),
            Err(_) => escape(&stringify(value)),
        },
        CellFmt::Amounts => match serde_json::from_value::<Vec<RefValue>>(value.clone()) {
            Ok(refs) => render_amount_table(Some(&refs), LinkMode::Nav),
            Err(_) => escape(&stringify(value)),
        },
    }
}

/// Render the generic catalog table: sortable header, one row per entity
/// (row links to `/obj/{id}` when the payload carries an id), pager with the
/// shared rows-per-page options. All state transitions go through the query
/// controller and come out as plain hrefs.
pub fn render_table(
    columns: &[Column],
    page: &Page<Value>,
    state: &QueryState,
    schema: &QuerySchema,
    base_path: &str,
    current_params: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();
    out.push_str(r#"<table class="catalog"><thead><tr>"#);
    for col in columns {
        if col.sortable {
            let next = state.with_sort_toggled(col.id, col.initial_dir);
            let link = href(base_path, &next.write(current_params, schema));
            let marker = match &state.sort {
                Some(s) if s.field == col.id => match s.dir {
                    SortDir::Asc => " ▲",
                    SortDir::Desc => " ▼",
                },
                _ => "",
            };
            out.push_str(&format!(
                r#"<th><a href="{}">{}{}</a></th>"#,
                escape(&link),
                escape(col.label),
                marker
            ));
        } else {
            out.push_str(&format!("<th>{}</th>", escape(col.label)));
        }
    }
    out.push_str("</tr></thead><tbody>");

    for row in &page.items {
        let row_href = row
            .get("id")
            .and_then(Value::as_i64)
            .map(|id| format!("/obj/{id}"));
        match &row_href {
            Some(h) => out.push_str(&format!(r#"<tr class="row-link" data-href="{}">"#, escape(h))),
            None => out.push_str("<tr>"),
        }
        for (i, col) in columns.iter().enumerate() {
            let cell = render_cell(col.fmt, row.get(col.id));
            // first column doubles as the row's navigation target
            if i == 0 {
                if let (Some(h), CellFmt::Plain) = (&row_href, col.fmt) {
                    out.push_str(&format!(r#"<td><a href="{}">{}</a></td>"#, escape(h), cell));
                    continue;
                }
            }
            out.push_str(&format!("<td>{cell}</td>"));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out.push_str(&render_pager(page, state, schema, base_path, current_params));
    out
}

fn render_pager(
    page: &Page<Value>,
    state: &QueryState,
    schema: &QuerySchema,
    base_path: &str,
    current_params: &BTreeMap<String, String>,
) -> String {
    let last_page = if page.total == 0 {
        0
    } else {
        ((page.total - 1) / state.page_size as u64) as u32
    };
    let first = page.total.min(state.page as u64 * state.page_size as u64 + 1);
    let last = page.total.min((state.page as u64 + 1) * state.page_size as u64);

    let mut out = String::from(r#"<nav class="pager">"#);
    if state.page > 0 {
        let link = href(base_path, &state.with_page(state.page - 1).write(current_params, schema));
        out.push_str(&format!(r#"<a class="prev" href="{}">prev</a>"#, escape(&link)));
    } else {
        out.push_str(r#"<span class="prev off">prev</span>"#);
    }
    out.push_str(&format!(
        r#"<span class="range">{first}–{last} of {}</span>"#,
        page.total
    ));
    if state.page < last_page {
        let link = href(base_path, &state.with_page(state.page + 1).write(current_params, schema));
        out.push_str(&format!(r#"<a class="next" href="{}">next</a>"#, escape(&link)));
    } else {
        out.push_str(r#"<span class="next off">next</span>"#);
    }
    out.push_str(r#"<span class="sizes">rows:"#);
    for n in PAGE_SIZE_OPTIONS {
        if n == state.page_size {
            out.push_str(&format!(r#" <span class="size on">{n}</span>"#));
        } else {
            let link = href(base_path, &state.with_page_size(n).write(current_params, schema));
            out.push_str(&format!(r#" <a class="size" href="{}">{n}</a>"#, escape(&link)));
        }
    }
    out.push_str("</span></nav>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FieldKind, FieldSpec};
    use serde_json::json;

    const SCHEMA: QuerySchema = QuerySchema {
        fields: &[FieldSpec::new("name_search", FieldKind::Text)],
        default_page_size: 10,
        default_sort: None,
    };

    const COLUMNS: &[Column] = &[
        Column::plain("name", "Name").asc_first(),
        Column::plain("difficulty", "Difficulty"),
        Column::plain("skills", "Skills").with_fmt(CellFmt::RefChips(ValueFmt::Paren)).unsortable(),
    ];

    fn sample_page() -> Page<Value> {
        Page {
            items: vec![json!({
                "id": 812,
                "name": "Saint of the Sands",
                "difficulty": 7,
                "skills": [{"id": 3, "name": "Theology", "value": 2}],
            })],
            total: 41,
        }
    }

    #[test]
    fn t_rows_link_to_resolver_route() {
        let state = QueryState::empty(&SCHEMA);
        let out = render_table(COLUMNS, &sample_page(), &state, &SCHEMA, "/catalog/quests", &BTreeMap::new());
        assert!(out.contains(r#"data-href="/obj/812""#));
        assert!(out.contains(r#"<td><a href="/obj/812">Saint of the Sands</a></td>"#));
        assert!(out.contains(r#"href="/obj/3""#));
        assert!(out.contains("Theology (2)"));
    }

    #[test]
    fn t_sort_header_toggles_direction() {
        let state = QueryState::empty(&SCHEMA);
        let out = render_table(COLUMNS, &sample_page(), &state, &SCHEMA, "/catalog/quests", &BTreeMap::new());
        // unsorted name column links to its initial (ascending) direction
        assert!(out.contains("sort_by=name"));
        assert!(out.contains("sort_order=asc"));

        let sorted = state.with_sort_toggled("name", SortDir::Asc);
        let params = sorted.write(&BTreeMap::new(), &SCHEMA);
        let out = render_table(COLUMNS, &sample_page(), &sorted, &SCHEMA, "/catalog/quests", &params);
        // now the header link flips it
        assert!(out.contains("sort_order=desc"));
        assert!(out.contains("▲"));
    }

    #[test]
    fn t_unsortable_column_has_no_link_header() {
        let state = QueryState::empty(&SCHEMA);
        let out = render_table(COLUMNS, &sample_page(), &state, &SCHEMA, "/catalog/quests", &BTreeMap::new());
        assert!(out.contains("<th>Skills</th>"));
    }

    #[test]
    fn t_pager_boundaries() {
        let state = QueryState::empty(&SCHEMA);
        let out = render_table(COLUMNS, &sample_page(), &state, &SCHEMA, "/catalog/quests", &BTreeMap::new());
        // page 0 of 41 rows: no prev link, next link present
        assert!(out.contains(r#"<span class="prev off">"#));
        assert!(out.contains("page=1"));
        assert!(out.contains("1–10 of 41"));

        let last = state.with_page(4);
        let params = last.write(&BTreeMap::new(), &SCHEMA);
        let out = render_table(COLUMNS, &sample_page(), &last, &SCHEMA, "/catalog/quests", &params);
        assert!(out.contains(r#"<span class="next off">"#));
        assert!(out.contains("41–41 of 41"));
    }
}
