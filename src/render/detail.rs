use super::html::escape;

/// Detail page header: kind label beside the entity name.
pub fn detail_title(kind_label: &str, name: &str) -> String {
    format!(
        r#"<header class="detail-title"><span class="kind">{}</span><h1>{}</h1></header>"#,
        escape(kind_label),
        escape(name)
    )
}

/// One labelled value in a detail grid. An empty value renders nothing at
/// all, label included; sparse payloads should not leave labelled holes.
/// `value_html` is already-rendered markup; callers escape their own text.
pub fn detail_item(label: &str, value_html: &str) -> String {
    if value_html.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="detail-item"><div class="label">{}</div><div class="value">{}</div></div>"#,
        escape(label),
        value_html
    )
}

/// Convenience for plain-text values.
pub fn detail_text(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => detail_item(label, &escape(v)),
        _ => String::new(),
    }
}

/// A titled group of detail items.
pub fn detail_section(title: &str, items_html: &str) -> String {
    if items_html.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="detail-section"><h2>{}</h2><div class="detail-grid">{}</div></section>"#,
        escape(title),
        items_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_empty_value_renders_nothing() {
        assert_eq!(detail_item("Description", ""), "");
        assert_eq!(detail_text("Description", None), "");
        assert_eq!(detail_text("Description", Some("")), "");
        assert_eq!(detail_section("Rewards", ""), "");
    }

    #[test]
    fn t_title_has_both_parts() {
        let out = detail_title("Quest", "The Pirate Hunter");
        assert!(out.contains(">Quest<"));
        assert!(out.contains("The Pirate Hunter"));
    }
}
