//! HTTP server for the interactive dashboard
//!
//! `flixdash serve netflix_titles.csv` → loads the catalog, starts the server,
//! opens the browser.
//!
//! The page is a single embedded HTML file. Every time a control or the
//! search box changes, it calls `/api/dashboard` and redraws from the JSON
//! answer; the server recomputes the whole view from the shared catalog on
//! each call and keeps nothing between requests.

use crate::catalog::{Catalog, ContentType};
use crate::dashboard::{Dashboard, DashboardView};
use crate::error::{Error, Result};
use crate::filter::FilterControls;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::sync::Arc;
use tiny_http::{Header, Method, Request, Response, Server};

// Embed the UI directly in the binary
const UI_HTML: &str = include_str!("ui.html");

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self { ok: false, data: None, error: Some(error.into()) }
    }
}

/// Control values sent by the page. Absent fields fall back to the defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct DashboardParams {
    /// Comma-separated content types. Absent = all, empty = none.
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub year_min: Option<i32>,
    #[serde(default)]
    pub year_max: Option<i32>,
    #[serde(default)]
    pub search: String,
}

impl DashboardParams {
    pub fn controls(&self, catalog: &Catalog) -> FilterControls {
        let defaults = FilterControls::defaults(catalog);
        let (default_min, default_max) = defaults.year_range;

        let types = match self.types.as_deref() {
            None => defaults.types,
            Some(raw) => parse_types(raw),
        };

        FilterControls {
            types,
            year_range: (
                self.year_min.unwrap_or(default_min),
                self.year_max.unwrap_or(default_max),
            ),
        }
    }
}

/// Parse a comma-separated type list, ignoring unknown names
pub fn parse_types(raw: &str) -> Vec<ContentType> {
    let mut types = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match name.parse::<ContentType>() {
            Ok(t) if !types.contains(&t) => types.push(t),
            Ok(_) => {}
            Err(e) => debug!("ignoring type filter: {}", e),
        }
    }
    types
}

/// Static facts about the loaded catalog
#[derive(Serialize, Debug)]
pub struct CatalogInfo {
    pub source: Option<String>,
    pub titles: usize,
    pub skipped_rows: usize,
    pub content_types: Vec<ContentType>,
    pub year_bounds: Option<(i32, i32)>,
}

impl CatalogInfo {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            source: catalog.source().map(|p| p.display().to_string()),
            titles: catalog.len(),
            skipped_rows: catalog.skipped_rows(),
            content_types: catalog.content_types(),
            year_bounds: catalog.release_year_bounds(),
        }
    }
}

/// Start server, optionally open browser, serve UI until the process ends
pub fn start(port: u16, catalog: Arc<Catalog>, open_browser: bool) -> Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr).map_err(|e| Error::Server(e.to_string()))?;

    let url = format!("http://localhost:{}", port);
    let source = catalog
        .source()
        .map(|p| p.canonicalize().unwrap_or_else(|_| p.to_path_buf()).display().to_string())
        .unwrap_or_else(|| "(in memory)".to_string());

    eprintln!("\n\x1b[1;31m🎬 flixdash\x1b[0m");
    eprintln!("   {}", url);
    eprintln!("   Catalog: {} ({} titles)\n", source, catalog.len());
    info!("listening on {}", addr);

    if open_browser {
        if let Err(e) = open::that(&url) {
            warn!("could not open browser: {}", e);
        }
    }

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &catalog, &source) {
            warn!("request failed: {}", e);
        }
    }

    Ok(())
}

fn handle_request(mut request: Request, catalog: &Catalog, source: &str) -> io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/");
    let method = request.method().clone();
    debug!("{} {}", method, url);

    match (&method, path) {
        (&Method::Get, "/") => {
            let html = render_ui(source);
            respond(request, html, "text/html; charset=utf-8", 200)
        }

        (&Method::Get, "/api/dashboard") | (&Method::Post, "/api/dashboard") => {
            let json = match parse_params(&mut request) {
                Ok(params) => dashboard_json(catalog, &params)?,
                Err(e) => serde_json::to_string(&ApiResponse::<()>::failure(e))?,
            };
            respond(request, json, "application/json", 200)
        }

        (&Method::Get, "/api/catalog") => {
            let info = CatalogInfo::from_catalog(catalog);
            let json = serde_json::to_string(&ApiResponse::success(info))?;
            respond(request, json, "application/json", 200)
        }

        _ => respond(request, "Not found".to_string(), "text/plain", 404),
    }
}

fn respond(request: Request, body: String, content_type: &str, status: u16) -> io::Result<()> {
    let mut response = Response::from_string(body).with_status_code(status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()) {
        response = response.with_header(header);
    }
    request.respond(response)
}

fn render_ui(source: &str) -> String {
    UI_HTML.replace("{{SOURCE}}", &html_escape(source))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Read control values from the query string, then the JSON body
fn parse_params(request: &mut Request) -> std::result::Result<DashboardParams, String> {
    let url = request.url().to_string();

    if let Some(query) = url.split('?').nth(1) {
        return parse_query(query);
    }

    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| format!("cannot read request body: {}", e))?;

    if body.trim().is_empty() {
        return Ok(DashboardParams::default());
    }
    serde_json::from_str(&body).map_err(|e| format!("invalid JSON body: {}", e))
}

pub fn parse_query(query: &str) -> std::result::Result<DashboardParams, String> {
    serde_urlencoded::from_str(query).map_err(|e| format!("invalid query: {}", e))
}

/// Run the pipeline for one request and serialize the answer
pub fn dashboard_json(catalog: &Catalog, params: &DashboardParams) -> serde_json::Result<String> {
    let view: DashboardView = Dashboard::build(catalog, &params.controls(catalog), &params.search);
    serde_json::to_string(&ApiResponse::success(view))
}
