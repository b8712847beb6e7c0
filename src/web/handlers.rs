//! HTTP request handlers

use super::state::AppState;
use crate::error::ScrapeError;
use crate::results::SerpReport;
use crate::scrape::{run_search, SearchInput};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use tera::Context;

/// Form fields for search and export
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    /// Search keyword
    pub keyword: Option<String>,
    /// Optional location scope
    pub location: Option<String>,
    /// Presence-flag checkbox
    pub ignore_location: Option<String>,
}

impl SearchForm {
    fn into_input(self) -> SearchInput {
        SearchInput {
            keyword: self.keyword.unwrap_or_default(),
            location: self.location,
            ignore_location: self.ignore_location.is_some(),
        }
    }
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> Response {
    let ctx = page_context(&state, &SearchInput::default(), &SerpReport::default(), false, None);
    render_page(&state, ctx)
}

/// Search submission handler
pub async fn search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Response {
    let input = form.into_input();

    match run_search(state.fetcher.as_ref(), &input).await {
        Ok(report) => {
            let ctx = page_context(&state, &input, &report, true, None);
            render_page(&state, ctx)
        }
        Err(ScrapeError::Fetch(e)) => {
            tracing::warn!("results page fetch failed: {}", e);
            let message = format!("Could not reach the search engine: {}", e);
            let ctx = page_context(&state, &input, &SerpReport::default(), false, Some(&message));
            let page = render_page(&state, ctx);
            (StatusCode::BAD_GATEWAY, page).into_response()
        }
        Err(e) => {
            tracing::error!("search failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

/// CSV download handler; repeats the fetch + extract for the same inputs
pub async fn export(State(state): State<AppState>, Query(form): Query<SearchForm>) -> Response {
    let input = form.into_input();

    match run_search(state.fetcher.as_ref(), &input).await {
        Ok(report) => match crate::export::to_csv(&report) {
            Ok(body) => {
                let filename = crate::export::export_filename(&input.keyword);
                (
                    [
                        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                        (
                            header::CONTENT_DISPOSITION,
                            format!("attachment; filename=\"{}\"", filename),
                        ),
                    ],
                    body,
                )
                    .into_response()
            }
            Err(e) => {
                tracing::error!("csv rendering failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Export error").into_response()
            }
        },
        Err(ScrapeError::Fetch(e)) => {
            tracing::warn!("results page fetch failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                "Could not reach the search engine",
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("export failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

/// Build the template context for the form page
fn page_context(
    state: &AppState,
    input: &SearchInput,
    report: &SerpReport,
    searched: bool,
    error: Option<&str>,
) -> Context {
    let export_link = if searched && !input.keyword.trim().is_empty() {
        Some(export_href(input))
    } else {
        None
    };

    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("keyword", &input.keyword);
    ctx.insert("location", input.location.as_deref().unwrap_or(""));
    ctx.insert("ignore_location", &input.ignore_location);
    ctx.insert("organic", &report.organic);
    ctx.insert("local", &report.local);
    ctx.insert("searched", &searched);
    ctx.insert("export_href", &export_link);
    ctx.insert("error", &error);
    ctx
}

/// Export URL carrying the same three inputs as the submitted form
fn export_href(input: &SearchInput) -> String {
    let mut href = format!("/export?keyword={}", urlencoding::encode(input.keyword.trim()));
    if let Some(location) = input.location.as_deref().filter(|l| !l.trim().is_empty()) {
        href.push_str(&format!("&location={}", urlencoding::encode(location.trim())));
    }
    if input.ignore_location {
        href.push_str("&ignore_location=on");
    }
    href
}

/// Render the index template, falling back to a plain 500 on template errors
fn render_page(state: &AppState, ctx: Context) -> Response {
    match state.templates.render("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}
