use super::schema::{
    FieldKind, QuerySchema, PAGE_PARAM, PAGE_SIZE_PARAM, SORT_BY_PARAM, SORT_ORDER_PARAM,
};
use crate::models::SortDir;
use std::collections::BTreeMap;

/// A coerced filter value. Unset fields are simply absent from the state;
/// there is no "empty" variant on purpose, so empty never leaks into URLs or
/// outgoing backend queries.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Text(String),
    Ids(Vec<i64>),
    Texts(Vec<String>),
    Int(i64),
    Choice(String),
}

impl FilterValue {
    pub fn encode(&self) -> String {
        match self {
            FilterValue::Text(s) | FilterValue::Choice(s) => s.clone(),
            FilterValue::Int(n) => n.to_string(),
            FilterValue::Ids(ids) => ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
            FilterValue::Texts(vs) => vs.join(","),
        }
    }

    /// Coerce one raw URL parameter. Malformed input yields `None` (= unset),
    /// never an error: a mangled URL must still produce a valid state.
    pub fn decode(kind: FieldKind, raw: &str) -> Option<Self> {
        match kind {
            FieldKind::Text => {
                if raw.is_empty() {
                    None
                } else {
                    Some(FilterValue::Text(raw.to_string()))
                }
            }
            FieldKind::Int => raw.parse().ok().map(FilterValue::Int),
            FieldKind::IdList => {
                let ids: Vec<i64> = raw
                    .split(',')
                    .filter(|t| !t.is_empty())
                    .filter_map(|t| t.parse().ok())
                    .collect();
                if ids.is_empty() { None } else { Some(FilterValue::Ids(ids)) }
            }
            FieldKind::TextList => {
                let vs: Vec<String> = raw
                    .split(',')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
                if vs.is_empty() { None } else { Some(FilterValue::Texts(vs)) }
            }
            FieldKind::Choice(options) => {
                if options.contains(&raw) {
                    Some(FilterValue::Choice(raw.to_string()))
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sort {
    pub field: String,
    pub dir: SortDir,
}

/// The full filter/sort/pagination state of one list view. The URL is the
/// source of truth: this struct only ever exists as `read` of URL parameters
/// or as a patched copy on its way back into a URL.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    pub filters: BTreeMap<String, FilterValue>,
    pub sort: Option<Sort>,
    pub page: u32,
    pub page_size: u32,
}

impl QueryState {
    /// The neutral state a view shows with no URL parameters at all.
    pub fn empty(schema: &QuerySchema) -> Self {
        Self {
            filters: BTreeMap::new(),
            sort: schema
                .default_sort
                .map(|(field, dir)| Sort { field: field.to_string(), dir }),
            page: 0,
            page_size: schema.default_page_size,
        }
    }

    /// Reconstruct the state from URL parameters. Absent parameters mean
    /// "unset"; malformed ones coerce to the field default and are never an
    /// error.
    pub fn read(params: &BTreeMap<String, String>, schema: &QuerySchema) -> Self {
        let mut state = Self::empty(schema);

        if let Some(raw) = params.get(PAGE_PARAM) {
            state.page = raw.parse().unwrap_or(0);
        }
        if let Some(raw) = params.get(PAGE_SIZE_PARAM) {
            state.page_size = raw
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .unwrap_or(schema.default_page_size);
        }
        if let Some(field) = params.get(SORT_BY_PARAM) {
            let dir = params
                .get(SORT_ORDER_PARAM)
                .and_then(|s| SortDir::parse(s))
                .unwrap_or(SortDir::Desc);
            state.sort = Some(Sort { field: field.clone(), dir });
        }
        for spec in schema.fields {
            if let Some(raw) = params.get(spec.name) {
                if let Some(value) = FilterValue::decode(spec.kind, raw) {
                    state.filters.insert(spec.name.to_string(), value);
                }
            }
        }
        state
    }

    /// Serialize back to URL parameters, writing only fields that differ
    /// from the view defaults so that the neutral state is the bare URL.
    pub fn to_params(&self, schema: &QuerySchema) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        for (name, value) in &self.filters {
            let encoded = value.encode();
            if !encoded.is_empty() {
                params.insert(name.clone(), encoded);
            }
        }
        if self.page > 0 {
            params.insert(PAGE_PARAM.to_string(), self.page.to_string());
        }
        if self.page_size != schema.default_page_size {
            params.insert(PAGE_SIZE_PARAM.to_string(), self.page_size.to_string());
        }
        let default_sort = schema
            .default_sort
            .map(|(field, dir)| Sort { field: field.to_string(), dir });
        if self.sort != default_sort {
            if let Some(sort) = &self.sort {
                params.insert(SORT_BY_PARAM.to_string(), sort.field.clone());
                params.insert(SORT_ORDER_PARAM.to_string(), sort.dir.as_str().to_string());
            }
        }
        params
    }

    /// Write this state into an existing parameter set, replacing every key
    /// the schema manages and leaving unrelated keys untouched. This is the
    /// controller's only write path to the URL.
    pub fn write(
        &self,
        existing: &BTreeMap<String, String>,
        schema: &QuerySchema,
    ) -> BTreeMap<String, String> {
        let mut managed: Vec<(&str, Option<String>)> = vec![
            (PAGE_PARAM, None),
            (PAGE_SIZE_PARAM, None),
            (SORT_BY_PARAM, None),
            (SORT_ORDER_PARAM, None),
        ];
        for spec in schema.fields {
            managed.push((spec.name, None));
        }
        let mut merged = merge_params(existing, &managed);
        merged.extend(self.to_params(schema));
        merged
    }

    /// Query parameters for the outgoing backend request: `skip`/`limit`
    /// paging plus every set filter, empties excluded.
    pub fn to_backend_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        for (name, value) in &self.filters {
            let encoded = value.encode();
            if !encoded.is_empty() {
                query.push((name.clone(), encoded));
            }
        }
        if let Some(sort) = &self.sort {
            query.push((SORT_BY_PARAM.to_string(), sort.field.clone()));
            query.push((SORT_ORDER_PARAM.to_string(), sort.dir.as_str().to_string()));
        }
        query.push(("skip".to_string(), (self.page as u64 * self.page_size as u64).to_string()));
        query.push(("limit".to_string(), self.page_size.to_string()));
        query
    }

    // --- patches; every filter/sort/page-size change lands back on page 0 ---

    pub fn with_filter(&self, name: &str, value: Option<FilterValue>) -> Self {
        let mut next = self.clone();
        match value {
            Some(v) => {
                next.filters.insert(name.to_string(), v);
            }
            None => {
                next.filters.remove(name);
            }
        }
        next.page = 0;
        next
    }

    /// Toggle sorting on a column: same column flips direction, a new column
    /// starts at the view-chosen initial direction for that column.
    pub fn with_sort_toggled(&self, field: &str, initial: SortDir) -> Self {
        let mut next = self.clone();
        next.sort = Some(match &self.sort {
            Some(sort) if sort.field == field => Sort { field: sort.field.clone(), dir: sort.dir.flipped() },
            _ => Sort { field: field.to_string(), dir: initial },
        });
        next.page = 0;
        next
    }

    pub fn with_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        next.page = page;
        next
    }

    pub fn with_page_size(&self, page_size: u32) -> Self {
        let mut next = self.clone();
        next.page_size = page_size.max(1);
        next.page = 0;
        next
    }

    /// Clear all filters and sorting, back to page 0. Page size survives: a
    /// per-session convenience, not a filter.
    pub fn reset(&self, schema: &QuerySchema) -> Self {
        let mut next = Self::empty(schema);
        next.page_size = self.page_size;
        next
    }
}

/// Pure parameter merge: `Some` sets a key, `None` removes it, everything
/// else is preserved untouched. Empty values are removed rather than written,
/// so empty strings never appear in a URL.
pub fn merge_params(
    existing: &BTreeMap<String, String>,
    patch: &[(&str, Option<String>)],
) -> BTreeMap<String, String> {
    let mut merged = existing.clone();
    for (key, value) in patch {
        match value {
            Some(v) if !v.is_empty() => {
                merged.insert((*key).to_string(), v.clone());
            }
            _ => {
                merged.remove(*key);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::schema::FieldSpec;

    const SCHEMA: QuerySchema = QuerySchema {
        fields: &[
            FieldSpec::new("name_search", FieldKind::Text),
            FieldSpec::new("skills_search", FieldKind::IdList),
            FieldSpec::new("size_search", FieldKind::TextList),
            FieldSpec::new("episode", FieldKind::Int),
            FieldSpec::new("era", FieldKind::Choice(&["discovery", "expansion"])),
        ],
        default_page_size: 10,
        default_sort: None,
    };

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn t_absent_params_mean_neutral_state() {
        let state = QueryState::read(&BTreeMap::new(), &SCHEMA);
        assert_eq!(state, QueryState::empty(&SCHEMA));
        assert_eq!(state.page, 0);
        assert_eq!(state.page_size, 10);
        assert!(state.filters.is_empty());
    }

    #[test]
    fn t_malformed_numbers_coerce_to_defaults() {
        let state = QueryState::read(
            &params(&[("page", "abc"), ("rowsPerPage", "-5"), ("episode", "two")]),
            &SCHEMA,
        );
        assert_eq!(state.page, 0);
        assert_eq!(state.page_size, 10);
        assert!(!state.filters.contains_key("episode"));
    }

    #[test]
    fn t_id_list_codec() {
        let state = QueryState::read(&params(&[("skills_search", "3,7")]), &SCHEMA);
        assert_eq!(state.filters["skills_search"], FilterValue::Ids(vec![3, 7]));
        assert_eq!(state.to_params(&SCHEMA)["skills_search"], "3,7");
    }

    #[test]
    fn t_id_list_drops_empty_and_junk_tokens() {
        let state = QueryState::read(&params(&[("skills_search", ",3,,x,7,")]), &SCHEMA);
        assert_eq!(state.filters["skills_search"], FilterValue::Ids(vec![3, 7]));
    }

    #[test]
    fn t_choice_rejects_unknown_value() {
        let state = QueryState::read(&params(&[("era", "ragnarok")]), &SCHEMA);
        assert!(!state.filters.contains_key("era"));
    }

    #[test]
    fn t_filter_change_resets_page() {
        let state = QueryState::read(&params(&[("page", "4")]), &SCHEMA);
        assert_eq!(state.page, 4);
        let next = state.with_filter("name_search", Some(FilterValue::Text("dye".into())));
        assert_eq!(next.page, 0);
        let next = state.with_sort_toggled("name", SortDir::Asc);
        assert_eq!(next.page, 0);
        let next = state.with_page_size(25);
        assert_eq!(next.page, 0);
        assert_eq!(next.page_size, 25);
    }

    #[test]
    fn t_sort_toggle_flips_same_column() {
        let state = QueryState::empty(&SCHEMA).with_sort_toggled("name", SortDir::Asc);
        assert_eq!(state.sort.as_ref().unwrap().dir, SortDir::Asc);
        let flipped = state.with_sort_toggled("name", SortDir::Asc);
        assert_eq!(flipped.sort.as_ref().unwrap().dir, SortDir::Desc);
        let other = flipped.with_sort_toggled("episode", SortDir::Desc);
        assert_eq!(other.sort.as_ref().unwrap().field, "episode");
        assert_eq!(other.sort.as_ref().unwrap().dir, SortDir::Desc);
    }

    #[test]
    fn t_reset_keeps_page_size() {
        let state = QueryState::read(
            &params(&[("name_search", "santa"), ("page", "3"), ("rowsPerPage", "100")]),
            &SCHEMA,
        );
        let reset = state.reset(&SCHEMA);
        assert!(reset.filters.is_empty());
        assert_eq!(reset.page, 0);
        assert_eq!(reset.page_size, 100);
    }

    #[test]
    fn t_write_preserves_unrelated_keys() {
        let existing = params(&[("tab", "stats"), ("name_search", "old"), ("rowsPerPage", "25")]);
        let state = QueryState::read(&existing, &SCHEMA)
            .with_filter("skills_search", Some(FilterValue::Ids(vec![3])));
        let written = state.write(&existing, &SCHEMA);
        // unrelated key survives, unrelated controller field survives
        assert_eq!(written["tab"], "stats");
        assert_eq!(written["rowsPerPage"], "25");
        assert_eq!(written["name_search"], "old");
        assert_eq!(written["skills_search"], "3");
    }

    #[test]
    fn t_merge_removes_emptied_keys() {
        let existing = params(&[("name_search", "x"), ("page", "2")]);
        let merged = merge_params(&existing, &[("name_search", None), ("page", Some("0".into()))]);
        assert!(!merged.contains_key("name_search"));
        assert_eq!(merged["page"], "0");
        let merged = merge_params(&existing, &[("name_search", Some(String::new()))]);
        assert!(!merged.contains_key("name_search"));
    }

    #[test]
    fn t_backend_query_excludes_empty_search() {
        let state = QueryState::read(&params(&[("name_search", "")]), &SCHEMA);
        let query = state.to_backend_query();
        assert!(query.iter().all(|(k, _)| k != "name_search"));
        assert!(query.contains(&("skip".to_string(), "0".to_string())));
        assert!(query.contains(&("limit".to_string(), "10".to_string())));
    }

    #[test]
    fn t_backend_query_skip_is_page_times_size() {
        let state = QueryState::empty(&SCHEMA).with_page_size(25).with_page(3);
        let query = state.to_backend_query();
        assert!(query.contains(&("skip".to_string(), "75".to_string())));
        assert!(query.contains(&("limit".to_string(), "25".to_string())));
    }
}
