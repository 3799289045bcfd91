use crate::models::SortDir;
use crate::query::{href, FieldKind, FieldSpec, QuerySchema, QueryState};
use crate::render::html::escape;
use crate::render::refs::ValueFmt;
use crate::render::{CellFmt, Column};
use serde_json::Value;
use std::collections::BTreeMap;

/// One filter control in a view's filter bar.
#[derive(Copy, Clone, Debug)]
pub struct Filter {
    pub field: &'static str,
    pub label: &'static str,
}

/// Everything that distinguishes one catalog list view from another. The
/// ~30 listings are structurally the same page; they differ only in this
/// data, so adding a listing is adding one entry to `VIEWS`.
pub struct ViewSpec {
    pub slug: &'static str,
    pub title: &'static str,
    /// Path segment of the backend list endpoint: `/api/{backend}`.
    pub backend: &'static str,
    pub schema: QuerySchema,
    pub columns: &'static [Column],
    pub filters: &'static [Filter],
    /// Row fixup applied after fetch, e.g. composing ship display names.
    pub postprocess: Option<fn(&mut Value)>,
}

impl ViewSpec {
    pub fn base_path(&self) -> String {
        format!("/catalog/{}", self.slug)
    }

    /// The staged filter inputs. A plain GET form: nothing commits until the
    /// user submits (button or Enter), at which point the browser rewrites
    /// the URL and the controller reads it back, search-on-submit without
    /// any timer debounce.
    pub fn render_filter_bar(
        &self,
        state: &QueryState,
        current_params: &BTreeMap<String, String>,
    ) -> String {
        let mut out = format!(
            r#"<form class="filters" method="get" action="{}">"#,
            self.base_path()
        );
        for filter in self.filters {
            let value = state
                .filters
                .get(filter.field)
                .map(|v| v.encode())
                .unwrap_or_default();
            match self.schema.field(filter.field).map(|s| s.kind) {
                Some(FieldKind::Choice(options)) => {
                    out.push_str(&format!(
                        r#"<label>{} <select name="{}"><option value=""></option>"#,
                        escape(filter.label),
                        filter.field
                    ));
                    for opt in options {
                        let selected = if *opt == value { " selected" } else { "" };
                        out.push_str(&format!(
                            r#"<option{selected} value="{0}">{0}</option>"#,
                            escape(opt)
                        ));
                    }
                    out.push_str("</select></label>");
                }
                _ => {
                    out.push_str(&format!(
                        r#"<label>{} <input name="{}" value="{}" /></label>"#,
                        escape(filter.label),
                        filter.field,
                        escape(&value)
                    ));
                }
            }
        }
        // page size and sort ride along across a search submit; page resets
        // by omission
        if state.page_size != self.schema.default_page_size {
            out.push_str(&format!(
                r#"<input type="hidden" name="rowsPerPage" value="{}" />"#,
                state.page_size
            ));
        }
        let default_sort = self.schema.default_sort;
        if let Some(sort) = &state.sort {
            let is_default =
                default_sort.is_some_and(|(f, d)| f == sort.field && d == sort.dir);
            if !is_default {
                out.push_str(&format!(
                    r#"<input type="hidden" name="sort_by" value="{}" /><input type="hidden" name="sort_order" value="{}" />"#,
                    escape(&sort.field),
                    sort.dir.as_str()
                ));
            }
        }
        let reset_href = href(
            &self.base_path(),
            &state.reset(&self.schema).write(current_params, &self.schema),
        );
        out.push_str(&format!(
            r#"<button type="submit">Search</button><a class="reset" href="{}">Reset</a></form>"#,
            escape(&reset_href)
        ));
        out
    }
}

pub fn all() -> &'static [ViewSpec] {
    VIEWS
}

pub fn find(slug: &str) -> Option<&'static ViewSpec> {
    VIEWS.iter().find(|v| v.slug == slug)
}

fn compose_ship_name(row: &mut Value) {
    let extra = row
        .get("extraname")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    if extra.is_empty() {
        return;
    }
    if let Some(name) = row.get_mut("name") {
        if let Some(base) = name.as_str() {
            *name = Value::String(format!("{base} {extra}"));
        }
    }
}

static VIEWS: &[ViewSpec] = &[
    ViewSpec {
        slug: "quests",
        title: "Quests",
        backend: "quests",
        schema: QuerySchema {
            fields: &[
                FieldSpec::new("name_search", FieldKind::Text),
                FieldSpec::new("location_search", FieldKind::TextList),
                FieldSpec::new("destination_search", FieldKind::Int),
                FieldSpec::new("skills_search", FieldKind::IdList),
            ],
            default_page_size: 10,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("type", "Type").asc_first(),
            Column::plain("difficulty", "Difficulty"),
            Column::plain("location", "Accepted at").asc_first(),
            Column::plain("destination", "Destination").with_fmt(CellFmt::Ref).unsortable(),
            Column::plain("skills", "Required skills")
                .with_fmt(CellFmt::RefChips(ValueFmt::Paren))
                .unsortable(),
        ],
        filters: &[
            Filter { field: "name_search", label: "Name" },
            Filter { field: "location_search", label: "Accepted at" },
            Filter { field: "skills_search", label: "Skill ids" },
        ],
        postprocess: None,
    },
    ViewSpec {
        slug: "ships",
        title: "Ships",
        backend: "ships",
        schema: QuerySchema {
            fields: &[
                FieldSpec::new("name_search", FieldKind::Text),
                FieldSpec::new("purpose_search", FieldKind::TextList),
                FieldSpec::new("size_search", FieldKind::TextList),
                FieldSpec::new("propulsion_search", FieldKind::TextList),
                FieldSpec::new("ship_skill_search", FieldKind::TextList),
            ],
            default_page_size: 10,
            default_sort: Some(("id", SortDir::Desc)),
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("type", "Type").asc_first(),
            Column::plain("size", "Size").asc_first(),
            Column::plain("lv_adventure", "Adventure Lv"),
            Column::plain("lv_trade", "Trade Lv"),
            Column::plain("lv_battle", "Battle Lv"),
            Column::plain("durability", "Durability"),
            Column::plain("warehouse_capacity", "Cargo"),
        ],
        filters: &[
            Filter { field: "name_search", label: "Name" },
            Filter { field: "purpose_search", label: "Purpose" },
            Filter { field: "size_search", label: "Size" },
            Filter { field: "propulsion_search", label: "Propulsion" },
            Filter { field: "ship_skill_search", label: "Ship skill" },
        ],
        postprocess: Some(compose_ship_name),
    },
    ViewSpec {
        slug: "equipment",
        title: "Equipment",
        backend: "equipment",
        schema: QuerySchema {
            fields: &[
                FieldSpec::new("name_search", FieldKind::Text),
                FieldSpec::new("skills_search", FieldKind::IdList),
            ],
            default_page_size: 10,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("type", "Type").asc_first(),
            Column::plain("classification", "Classification").asc_first(),
            Column::plain("attack_power", "Attack"),
            Column::plain("defense_power", "Defense"),
            Column::plain("skills", "Skills")
                .with_fmt(CellFmt::RefChips(ValueFmt::Plus))
                .unsortable(),
        ],
        filters: &[
            Filter { field: "name_search", label: "Name" },
            Filter { field: "skills_search", label: "Skill ids" },
        ],
        postprocess: None,
    },
    ViewSpec {
        slug: "recipes",
        title: "Recipes",
        backend: "recipes",
        schema: QuerySchema {
            fields: &[FieldSpec::new("name_search", FieldKind::Text)],
            default_page_size: 10,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("era", "Era").asc_first(),
            Column::plain("required_skill", "Required skills")
                .with_fmt(CellFmt::RefChips(ValueFmt::Paren))
                .unsortable(),
        ],
        filters: &[Filter { field: "name_search", label: "Name" }],
        postprocess: None,
    },
    ViewSpec {
        slug: "consumables",
        title: "Consumables",
        backend: "consumables",
        schema: QuerySchema {
            fields: &[
                FieldSpec::new("name_search", FieldKind::Text),
                FieldSpec::new("category_search", FieldKind::TextList),
            ],
            default_page_size: 10,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("category", "Category").asc_first(),
            Column::plain("type", "Type").asc_first(),
        ],
        filters: &[
            Filter { field: "name_search", label: "Name" },
            Filter { field: "category_search", label: "Category" },
        ],
        postprocess: None,
    },
    ViewSpec {
        slug: "discoveries",
        title: "Discoveries",
        backend: "discoveries",
        schema: QuerySchema {
            fields: &[
                FieldSpec::new("name_search", FieldKind::Text),
                FieldSpec::new("category_search", FieldKind::TextList),
            ],
            default_page_size: 10,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("category", "Category").asc_first(),
            Column::plain("difficulty", "Difficulty"),
            Column::plain("card_points", "Card points"),
        ],
        filters: &[
            Filter { field: "name_search", label: "Name" },
            Filter { field: "category_search", label: "Category" },
        ],
        postprocess: None,
    },
    ViewSpec {
        slug: "cities",
        title: "Cities",
        backend: "cities",
        schema: QuerySchema {
            fields: &[
                FieldSpec::new("name_search", FieldKind::Text),
                FieldSpec::new("culture_search", FieldKind::TextList),
            ],
            default_page_size: 25,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("region", "Region").asc_first(),
            Column::plain("culture", "Culture").asc_first(),
            Column::plain("language", "Language").asc_first(),
        ],
        filters: &[
            Filter { field: "name_search", label: "Name" },
            Filter { field: "culture_search", label: "Culture" },
        ],
        postprocess: None,
    },
    ViewSpec {
        slug: "tradegoods",
        title: "Trade Goods",
        backend: "tradegoods",
        schema: QuerySchema {
            fields: &[
                FieldSpec::new("name_search", FieldKind::Text),
                FieldSpec::new("category_search", FieldKind::TextList),
            ],
            default_page_size: 10,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("category", "Category").asc_first(),
            Column::plain("classification", "Classification").asc_first(),
        ],
        filters: &[
            Filter { field: "name_search", label: "Name" },
            Filter { field: "category_search", label: "Category" },
        ],
        postprocess: None,
    },
    ViewSpec {
        slug: "jobs",
        title: "Jobs",
        backend: "jobs",
        schema: QuerySchema {
            fields: &[FieldSpec::new("name_search", FieldKind::Text)],
            default_page_size: 25,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("category", "Category").asc_first(),
            Column::plain("cost", "Cost"),
        ],
        filters: &[Filter { field: "name_search", label: "Name" }],
        postprocess: None,
    },
    ViewSpec {
        slug: "certificates",
        title: "Certificates",
        backend: "certificates",
        schema: QuerySchema {
            fields: &[FieldSpec::new("name_search", FieldKind::Text)],
            default_page_size: 25,
            default_sort: None,
        },
        columns: &[
            Column::plain("name", "Name").asc_first(),
            Column::plain("type", "Type").asc_first(),
        ],
        filters: &[Filter { field: "name_search", label: "Name" }],
        postprocess: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_slugs_are_unique() {
        let mut slugs: Vec<_> = all().iter().map(|v| v.slug).collect();
        let before = slugs.len();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), before);
    }

    #[test]
    fn t_filters_reference_schema_fields() {
        for view in all() {
            for filter in view.filters {
                assert!(
                    view.schema.field(filter.field).is_some(),
                    "{}: filter {} missing from schema",
                    view.slug,
                    filter.field
                );
            }
        }
    }

    #[test]
    fn t_ship_name_composition() {
        let mut row = serde_json::json!({"name": "Frigate", "extraname": "(Refit)"});
        compose_ship_name(&mut row);
        assert_eq!(row["name"], "Frigate (Refit)");

        let mut bare = serde_json::json!({"name": "Frigate"});
        compose_ship_name(&mut bare);
        assert_eq!(bare["name"], "Frigate");
    }

    #[test]
    fn t_filter_bar_stages_committed_values() {
        let view = find("quests").unwrap();
        let params = crate::query::parse_query(Some("name_search=santa&rowsPerPage=25"));
        let state = QueryState::read(&params, &view.schema);
        let bar = view.render_filter_bar(&state, &params);
        assert!(bar.contains(r#"value="santa""#));
        assert!(bar.contains(r#"name="rowsPerPage" value="25""#));
        assert!(bar.contains(r#"method="get""#));
    }
}
