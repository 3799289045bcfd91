use super::html::escape;
use crate::views;

/// Page shell shared by every route. The nav highlight is derived purely
/// from the rendered route's own slug; there is no current-tab state
/// anywhere.
pub fn page(title: &str, active_slug: Option<&str>, body: &str) -> String {
    let mut nav = String::new();
    for view in views::all() {
        let class = if Some(view.slug) == active_slug { r#" class="on""# } else { "" };
        nav.push_str(&format!(
            r#"<a{class} href="/catalog/{}">{}</a>"#,
            view.slug,
            escape(view.title)
        ));
    }
    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <title>{title} · uwodex</title>
  <style>{CSS}</style>
</head>
<body>
  <nav id="top"><a href="/" class="brand">uwodex</a>{nav}</nav>
  <main>{body}</main>
  <script>
    document.querySelectorAll('tr.row-link').forEach(function (tr) {{
      tr.addEventListener('click', function (ev) {{
        if (ev.target.closest('a')) return;
        window.location = tr.dataset.href;
      }});
    }});
  </script>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Error banner page used for transport failures and bad routes; the banner
/// never replaces query state, it is just another rendered state.
pub fn error_page(title: &str, message: &str) -> String {
    page(
        title,
        None,
        &format!(
            r#"<div class="banner error"><strong>{}</strong><p>{}</p></div>"#,
            escape(title),
            escape(message)
        ),
    )
}

/// Informational page (not-found, no-detail, unsupported kind).
pub fn notice_page(title: &str, message: &str) -> String {
    page(
        title,
        None,
        &format!(
            r#"<div class="banner notice"><strong>{}</strong><p>{}</p></div>"#,
            escape(title),
            escape(message)
        ),
    )
}

const CSS: &str = r#"
body{background:#0d0f14;color:#c7d0dc;font-family:sans-serif;margin:0}
main{padding:16px 24px;max-width:1200px}
#top{display:flex;flex-wrap:wrap;gap:2px 14px;padding:10px 24px;background:#111625}
#top a{color:#8fa3bd;text-decoration:none;font-size:13px}
#top a.on{color:#e6eef8;border-bottom:1px solid #4a7ac4}
#top .brand{color:#e6eef8;font-weight:bold;margin-right:10px}
a{color:#7eb3ff}
table.catalog{border-collapse:collapse;width:100%;margin-top:12px}
table.catalog th,table.catalog td{border:1px solid #1d2236;padding:6px 10px;text-align:left;font-size:14px}
table.catalog th a{color:#c7d0dc;text-decoration:none}
tr.row-link{cursor:pointer}
tr.row-link:hover{background:#131a2b}
.chip{display:inline-block;background:#1a2133;border:1px solid #2a3a5c;border-radius:12px;padding:2px 10px;margin:2px;font-size:13px}
.chip-row{margin:4px 0}
.pager{display:flex;gap:16px;align-items:center;padding:10px 0}
.pager .off{color:#4a5468}
.filters{display:flex;flex-wrap:wrap;gap:8px;align-items:center;margin:12px 0}
.filters input,.filters select{background:#0f1320;color:#e6eef8;border:1px solid #1d2236;padding:8px}
.filters button{background:#1d2a44;color:#e6eef8;border:1px solid #2a3a5c;padding:8px 14px;cursor:pointer}
.detail-title{display:flex;gap:12px;align-items:baseline;border-bottom:1px solid #1d2236;margin-bottom:16px}
.detail-title .kind{color:#4a7ac4;font-weight:bold}
.detail-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:12px}
.detail-item .label{color:#8fa3bd;font-size:12px}
.detail-item .value{white-space:pre-line}
.detail-section{margin:18px 0}
table.amounts td,table.requirements td,table.requirements th{border:1px solid #1d2236;padding:4px 8px;font-size:13px}
table.requirements th{color:#8fa3bd;font-weight:normal}
.banner{border:1px solid #5c2a2a;background:#1d1116;padding:14px 18px;margin-top:16px}
.banner.notice{border-color:#2a3a5c;background:#111625}
.home-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:10px;margin-top:16px}
.home-grid a{display:block;background:#111625;border:1px solid #1d2236;padding:14px;text-decoration:none}
"#;
