use axum::extract::{FromRef, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::staff::{self, Staff};
use sortlink_axum::{AppError, CurrentSort, SortContext};
use sortlink_core::config::SortConfig;
use sortlink_core::html::escape;
use sortlink_core::link::{sortable_link, SortableLink};
use sortlink_core::request::RequestContext;

const PAGE_SIZE: usize = 5;

#[derive(Clone)]
pub struct AppState {
    pub config: SortConfig,
}

impl FromRef<AppState> for SortConfig {
    fn from_ref(state: &AppState) -> SortConfig {
        state.config.clone()
    }
}

pub fn build_router(config: SortConfig) -> Router {
    let state = AppState { config };
    Router::new()
        .route("/", get(staff_table))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: SortConfig, port: u16) -> anyhow::Result<()> {
    let app = build_router(config);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("staff table at http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// GET / — the sortable, paginated staff table.
async fn staff_table(
    State(app): State<AppState>,
    SortContext(ctx): SortContext,
    current: CurrentSort,
) -> Result<Html<String>, AppError> {
    let mut rows = staff::roster();
    staff::order(&mut rows, &current);

    let page = page_number(&ctx);
    let page_count = rows.len().div_ceil(PAGE_SIZE).max(1);
    let window = rows
        .iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect::<Vec<_>>();

    Ok(Html(render_page(
        &window, page, page_count, &ctx, &app.config,
    )?))
}

fn render_page(
    rows: &[&Staff],
    page: usize,
    page_count: usize,
    ctx: &RequestContext,
    config: &SortConfig,
) -> Result<String, AppError> {
    let mut out = String::from(
        "<!doctype html>\n<html>\n<head><title>Staff</title></head>\n<body>\n<table>\n<tr>",
    );

    for (key, title) in [
        ("name", "Name"),
        ("team.name", "Team"),
        ("age", "Age"),
        ("joined", "Joined"),
    ] {
        out.push_str("<th>");
        out.push_str(&sortable_link(key, title, ctx, config)?);
        out.push_str("</th>");
    }
    out.push_str("<th>");
    out.push_str(&SortableLink::new("").title("Notes").render(ctx, config)?);
    out.push_str("</th></tr>\n");

    for staff in rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td></td></tr>\n",
            escape(staff.name),
            escape(staff.team),
            staff.age,
            staff.joined,
        ));
    }
    out.push_str("</table>\n<nav>");

    if page > 1 {
        out.push_str(&format!(
            "<a href=\"{}\">previous</a> ",
            escape(&page_href(ctx, page - 1))
        ));
    }
    out.push_str(&format!("page {} of {}", page, page_count));
    if page < page_count {
        out.push_str(&format!(
            " <a href=\"{}\">next</a>",
            escape(&page_href(ctx, page + 1))
        ));
    }
    out.push_str("</nav>\n</body>\n</html>\n");

    Ok(out)
}

fn page_number(ctx: &RequestContext) -> usize {
    ctx.query()
        .iter()
        .rev()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

// Pagination links keep the query string so the current sort survives page
// changes; only the page number is replaced.
fn page_href(ctx: &RequestContext, page: usize) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in ctx.query() {
        if key != "page" {
            serializer.append_pair(key, value);
        }
    }
    serializer.append_pair("page", &page.to_string());
    format!("{}?{}", ctx.path(), serializer.finish())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
