use super::html::{escape, fmt_number, stringify};
use crate::models::{RefValue, Requirement};
use serde_json::Value;

/// Whether reference tokens link anywhere. `Inert` is a capability flag for
/// contexts without navigation (previews, unsupported embeddings), not an
/// error path: the token renders identically minus the anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkMode {
    Nav,
    Inert,
}

/// How a reference's numeric value is appended to its name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ValueFmt {
    /// "Sewing (3)", the default
    #[default]
    Paren,
    /// "Lumber x 3", crafting quantities
    Times,
    /// "Gunnery +2", stat bonuses
    Plus,
    /// value shown as-is, space separated
    Bare,
    /// value suppressed
    Hidden,
}

impl ValueFmt {
    fn apply(&self, name: &str, value: Option<f64>) -> String {
        match (self, value) {
            (ValueFmt::Hidden, _) | (_, None) => name.to_string(),
            (ValueFmt::Paren, Some(v)) => format!("{name} ({})", fmt_number(v)),
            (ValueFmt::Times, Some(v)) => format!("{name} x {}", fmt_number(v)),
            (ValueFmt::Plus, Some(v)) => format!("{name} +{}", fmt_number(v)),
            (ValueFmt::Bare, Some(v)) => format!("{name} {}", fmt_number(v)),
        }
    }
}

fn chip(label: &str, id: crate::models::EntityId, link: LinkMode) -> String {
    match link {
        LinkMode::Nav => format!(r#"<a class="chip" href="/obj/{id}">{}</a>"#, escape(label)),
        LinkMode::Inert => format!(r#"<span class="chip">{}</span>"#, escape(label)),
    }
}

/// Render an ordered sequence of references as clickable chips, one token per
/// reference. Missing or empty input renders nothing; absent cross-reference
/// fields are normal data, not errors.
pub fn render_refs(refs: Option<&[RefValue]>, link: LinkMode, fmt: ValueFmt) -> String {
    let Some(refs) = refs else {
        return String::new();
    };
    refs.iter()
        .map(|r| chip(&fmt.apply(&r.name, r.value), r.id, link))
        .collect()
}

/// Alternative groups of references (e.g. "any one of these quest chains"):
/// each inner list renders as one chip row, rows separated visually.
pub fn render_ref_groups(groups: Option<&[Vec<RefValue>]>, link: LinkMode) -> String {
    let Some(groups) = groups else {
        return String::new();
    };
    let rows: Vec<String> = groups
        .iter()
        .map(|g| format!(r#"<div class="chip-row">{}</div>"#, render_refs(Some(g), link, ValueFmt::Hidden)))
        .collect();
    rows.join("")
}

/// References as rows of an amount table: the name cell is the clickable
/// part, the "x N" suffix is a separate static cell. Used where the amount
/// must read apart from the reference itself (ingredient lists, rewards).
pub fn render_amount_table(rows: Option<&[RefValue]>, link: LinkMode) -> String {
    let Some(rows) = rows else {
        return String::new();
    };
    if rows.is_empty() {
        return String::new();
    }
    let body: String = rows
        .iter()
        .map(|r| {
            let amount = r
                .value
                .map(|v| format!("x {}", fmt_number(v)))
                .unwrap_or_default();
            format!(
                "<tr><td>{}</td><td class=\"amount\">{}</td></tr>",
                chip(&r.name, r.id, link),
                escape(&amount)
            )
        })
        .collect();
    format!(r#"<table class="amounts"><tbody>{body}</tbody></table>"#)
}

/// Free-form `{type, content}` requirement rows as a two-column table. The
/// content column recognizes a reference list; a string or number renders as
/// text; anything else falls back to its string form. Deliberately no
/// generic JSON rendering beyond that.
pub fn render_requirements_table(rows: Option<&[Requirement]>, link: LinkMode) -> String {
    let Some(rows) = rows else {
        return String::new();
    };
    if rows.is_empty() {
        return String::new();
    }
    let body: String = rows
        .iter()
        .map(|req| {
            format!(
                "<tr><th>{}</th><td>{}</td></tr>",
                escape(&req.kind),
                render_requirement_content(&req.content, link)
            )
        })
        .collect();
    format!(r#"<table class="requirements"><tbody>{body}</tbody></table>"#)
}

fn render_requirement_content(content: &Value, link: LinkMode) -> String {
    // A lone reference object also occurs in the wild.
    if let Ok(r) = serde_json::from_value::<RefValue>(content.clone()) {
        return chip(&ValueFmt::Paren.apply(&r.name, r.value), r.id, link);
    }
    if let Ok(refs) = serde_json::from_value::<Vec<RefValue>>(content.clone()) {
        return render_refs(Some(&refs), link, ValueFmt::Paren);
    }
    escape(&stringify(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn t_null_and_empty_render_nothing() {
        assert_eq!(render_refs(None, LinkMode::Nav, ValueFmt::Paren), "");
        assert_eq!(render_refs(Some(&[]), LinkMode::Nav, ValueFmt::Paren), "");
        assert_eq!(render_amount_table(None, LinkMode::Nav), "");
        assert_eq!(render_requirements_table(Some(&[]), LinkMode::Nav), "");
    }

    #[test]
    fn t_single_ref_yields_one_clickable_token() {
        let refs = [RefValue::new(1, "A")];
        let out = render_refs(Some(&refs), LinkMode::Nav, ValueFmt::Paren);
        assert_eq!(out, r#"<a class="chip" href="/obj/1">A</a>"#);
    }

    #[test]
    fn t_inert_mode_renders_static_token() {
        let refs = [RefValue::new(1, "A")];
        let out = render_refs(Some(&refs), LinkMode::Inert, ValueFmt::Paren);
        assert!(out.starts_with("<span"));
        assert!(!out.contains("href"));
    }

    #[test]
    fn t_value_formatters() {
        let r = [RefValue::new(7, "Sewing").with_value(3.0)];
        let paren = render_refs(Some(&r), LinkMode::Inert, ValueFmt::Paren);
        assert!(paren.contains("Sewing (3)"));
        let times = render_refs(Some(&r), LinkMode::Inert, ValueFmt::Times);
        assert!(times.contains("Sewing x 3"));
        let plus = render_refs(Some(&r), LinkMode::Inert, ValueFmt::Plus);
        assert!(plus.contains("Sewing +3"));
        let hidden = render_refs(Some(&r), LinkMode::Inert, ValueFmt::Hidden);
        assert!(hidden.contains(">Sewing<"));
    }

    #[test]
    fn t_name_is_escaped() {
        let refs = [RefValue::new(2, "<Tiger> & Cub")];
        let out = render_refs(Some(&refs), LinkMode::Nav, ValueFmt::Hidden);
        assert!(out.contains("&lt;Tiger&gt; &amp; Cub"));
        assert!(!out.contains("<Tiger>"));
    }

    #[test]
    fn t_amount_table_separates_link_from_suffix() {
        let rows = [RefValue::new(31, "Lumber").with_value(5.0)];
        let out = render_amount_table(Some(&rows), LinkMode::Nav);
        assert!(out.contains(r#"href="/obj/31""#));
        assert!(out.contains(">Lumber<"));
        // suffix cell is static text, not part of the anchor
        assert!(out.contains(r#"<td class="amount">x 5</td>"#));
    }

    #[test]
    fn t_requirements_recognize_ref_list() {
        let rows = [Requirement {
            kind: "Skills".into(),
            content: json!([{"id": 3, "name": "Search", "value": 2}]),
        }];
        let out = render_requirements_table(Some(&rows), LinkMode::Nav);
        assert!(out.contains("<th>Skills</th>"));
        assert!(out.contains(r#"href="/obj/3""#));
        assert!(out.contains("Search (2)"));
    }

    #[test]
    fn t_requirements_fall_back_to_string_form() {
        let rows = [
            Requirement { kind: "Note".into(), content: json!("members only") },
            Requirement { kind: "Fame".into(), content: json!({"adventure": 1000}) },
        ];
        let out = render_requirements_table(Some(&rows), LinkMode::Nav);
        assert!(out.contains("members only"));
        assert!(out.contains(&escape(r#"{"adventure":1000}"#)));
    }
}
