use serde_json::Value;

/// Escape text for element content and double-quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a number without a trailing ".0" when it is integral; quantities
/// arrive as JSON numbers and "x 3.0" reads wrong.
pub fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Convert an arbitrary JSON value into display text. This is the renderer's
/// last resort for shapes outside the recognized closed set; it always yields
/// something and never guesses structure. Arrays render element-joined
/// without brackets.
pub fn stringify(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(stringify).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(v).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn t_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn t_fmt_number() {
        assert_eq!(fmt_number(3.0), "3");
        assert_eq!(fmt_number(2.5), "2.5");
        assert_eq!(fmt_number(-1.0), "-1");
    }

    #[test]
    fn t_stringify_closed_set() {
        assert_eq!(stringify(&json!("text")), "text");
        assert_eq!(stringify(&json!(12)), "12");
        assert_eq!(stringify(&json!(null)), "");
        assert_eq!(stringify(&json!(["a", 1])), "a, 1");
        assert_eq!(stringify(&json!({"k": 1})), r#"{"k":1}"#);
    }
}
