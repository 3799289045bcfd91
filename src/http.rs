use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::ApiClient;
use crate::error::{ApiError, AppError};
use crate::models::{EntityId, Resolution};
use crate::query::{parse_query, QueryState};
use crate::registry;
use crate::render::{layout, table};
use crate::views;
use serde_json::Value;

pub async fn serve(addr: std::net::SocketAddr, client: ApiClient) -> anyhow::Result<()> {
    let app = router(client);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn router(client: ApiClient) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/catalog/{view}", get(catalog))
        .route("/obj/{id}", get(obj))
        .with_state(AppState { client })
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

#[derive(Clone)]
struct AppState {
    client: ApiClient,
}

async fn index() -> Html<String> {
    let mut body = String::from(r#"<h1>Catalog</h1><div class="home-grid">"#);
    for view in views::all() {
        body.push_str(&format!(
            r#"<a href="{}">{}</a>"#,
            view.base_path(),
            view.title
        ));
    }
    body.push_str("</div>");
    Html(layout::page("Catalog", None, &body))
}

// Each request renders its own fetch result and nothing else: with full
// server rendering, one request/response pair is one view instance, so the
// query a result belongs to is fixed by the request itself. No fetch state
// is shared across requests.
async fn catalog(
    Path(slug): Path<String>,
    RawQuery(raw): RawQuery,
    State(st): State<AppState>,
) -> Result<Html<String>, AppError> {
    let view = views::find(&slug).ok_or(AppError::UnknownView(slug))?;
    let params = parse_query(raw.as_deref());
    let state = QueryState::read(&params, &view.schema);
    // Canonical params for link building: what the committed state writes
    // back, not the raw incoming string.
    let params = state.write(&params, &view.schema);

    let mut page = st.client.list(view.backend, &state.to_backend_query()).await?;
    if let Some(fix) = view.postprocess {
        page.items.iter_mut().for_each(fix);
    }
    tracing::debug!(view = view.slug, total = page.total, "catalog page");

    let mut body = format!("<h1>{}</h1>", view.title);
    body.push_str(&view.render_filter_bar(&state, &params));
    body.push_str(&table::render_table(
        view.columns,
        &page,
        &state,
        &view.schema,
        &view.base_path(),
        &params,
    ));
    Ok(Html(layout::page(view.title, Some(view.slug), &body)))
}

async fn obj(
    Path(raw_id): Path<String>,
    State(st): State<AppState>,
) -> Result<Html<String>, AppError> {
    let id: EntityId = raw_id.parse().map_err(|_| AppError::InvalidId(raw_id))?;

    // Fresh resolution per request; envelopes are never held across ids.
    let html = match st.client.resolve(id).await? {
        Resolution::Found { kind, data } => match registry::lookup(kind) {
            Some(entry) => {
                let body = (entry.present)(&data)?;
                let name = data.get("name").and_then(Value::as_str).unwrap_or("");
                let title = if name.is_empty() {
                    format!("{} {}", entry.label, id)
                } else {
                    format!("{} · {}", name, entry.label)
                };
                layout::page(&title, None, &body)
            }
            None => layout::notice_page(
                "No detail page",
                &format!("No detail page is available for kind \"{}\" yet.", kind.label()),
            ),
        },
        Resolution::UnknownKind { tag, .. } => {
            tracing::warn!(%id, tag, "object resolved to unrecognized kind");
            layout::notice_page(
                "Unrecognized kind",
                &format!("Object {id} has kind \"{tag}\", which this catalog does not recognize."),
            )
        }
        Resolution::NotFound => layout::notice_page(
            "Not found",
            &format!("Object {id} is not in the catalog."),
        ),
        Resolution::NoDetail => layout::notice_page(
            "No detail available",
            &format!("Object {id} exists but has no detail data."),
        ),
    };
    Ok(Html(html))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            AppError::UnknownView(slug) => (
                StatusCode::NOT_FOUND,
                "Unknown catalog",
                format!("There is no catalog named \"{slug}\"."),
            ),
            AppError::InvalidId(raw) => (
                StatusCode::NOT_FOUND,
                "Invalid id",
                format!("\"{raw}\" is not an entity id."),
            ),
            AppError::Api(ApiError::Status { status: 404, path }) => (
                StatusCode::NOT_FOUND,
                "Not found",
                format!("The backend has nothing at {path}."),
            ),
            AppError::Api(ApiError::Transport(_)) => (
                StatusCode::BAD_GATEWAY,
                "Backend unreachable",
                "The catalog backend is not responding. Try again shortly.".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                self.to_string(),
            ),
        };
        tracing::error!(error = %self, %status, "request failed");
        (status, Html(layout::error_page(title, &message))).into_response()
    }
}
