use crate::models::SortDir;

/// Coercion applied to one URL filter parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, committed on explicit search
    Text,
    /// Comma-joined entity ids, e.g. "3,7"
    IdList,
    /// Comma-joined plain values, e.g. "Light,Medium"
    TextList,
    /// Single integer
    Int,
    /// One of a closed set of values
    Choice(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Declarative description of one list view's recognized query state: which
/// filter fields exist, how they coerce, and the view's defaults. Everything
/// a list view needs to round-trip its URL lives here; the views differ only
/// in this data.
#[derive(Clone, Copy, Debug)]
pub struct QuerySchema {
    pub fields: &'static [FieldSpec],
    pub default_page_size: u32,
    /// Default ordering applied when the URL carries no sort parameters.
    pub default_sort: Option<(&'static str, SortDir)>,
}

impl QuerySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// URL parameters the controller owns besides the schema's filter fields.
pub const PAGE_PARAM: &str = "page";
pub const PAGE_SIZE_PARAM: &str = "rowsPerPage";
pub const SORT_BY_PARAM: &str = "sort_by";
pub const SORT_ORDER_PARAM: &str = "sort_order";
