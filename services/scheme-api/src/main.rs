//! Service that aggregates government welfare scheme listings from the
//! upstream scrape API and serves them as canonical records, degrading to
//! curated fallback data whenever live aggregation fails.

mod fallback;
mod normalize;
mod scrape;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use shared::config::Settings;
use shared::dto::{SchemeRecord, SortOrder};

use crate::scrape::ScrapeClient;

#[derive(Clone)]
struct AppState {
    scraper: Arc<ScrapeClient>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemeQuery {
    category: Option<String>,
    search_query: Option<String>,
    sort_by: Option<String>,
}

#[derive(Debug)]
struct SchemeParams {
    category: String,
    search_query: String,
    sort_by: SortOrder,
}

#[derive(Serialize)]
struct SchemeResponse {
    success: bool,
    data: Vec<SchemeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn healthz() -> impl Responder {
    web::Json(HealthResponse { status: "ok" })
}

/// Merges query-string and body parameters; body fields win when both are
/// present. Unrecognized sort values fall back to relevance.
fn resolve_params(query: SchemeQuery, body: Option<SchemeQuery>) -> SchemeParams {
    let mut category = query.category;
    let mut search_query = query.search_query;
    let mut sort_by = query.sort_by;
    if let Some(body) = body {
        if body.category.is_some() {
            category = body.category;
        }
        if body.search_query.is_some() {
            search_query = body.search_query;
        }
        if body.sort_by.is_some() {
            sort_by = body.sort_by;
        }
    }
    SchemeParams {
        category: category.unwrap_or_else(|| "all".to_string()),
        search_query: search_query.unwrap_or_default(),
        sort_by: sort_by
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default(),
    }
}

async fn schemes(
    state: web::Data<AppState>,
    query: web::Query<SchemeQuery>,
    body: Option<web::Json<SchemeQuery>>,
) -> impl Responder {
    let params = resolve_params(query.into_inner(), body.map(web::Json::into_inner));
    info!(
        category = %params.category,
        search = %params.search_query,
        sort = %params.sort_by,
        "scheme query"
    );

    let target = state
        .scraper
        .target_url(&params.category, &params.search_query);

    match state.scraper.fetch(&target).await {
        Ok(payload) => {
            let mut records = normalize::normalize_schemes(
                &payload,
                &params.category,
                state.scraper.site_origin(),
            );
            if records.is_empty() {
                info!(category = %params.category, "no usable upstream records, serving fallback data");
                records = fallback::filter_by_search(
                    fallback::fallback_schemes(&params.category),
                    &params.search_query,
                );
            }
            let records = normalize::sort_schemes(records, params.sort_by);
            HttpResponse::Ok().json(SchemeResponse {
                success: true,
                data: records,
                error: None,
            })
        }
        Err(err) => {
            warn!(category = %params.category, error = %err, "upstream scrape failed, serving fallback data");
            let records = normalize::sort_schemes(
                fallback::filter_by_search(
                    fallback::fallback_schemes(&params.category),
                    &params.search_query,
                ),
                params.sort_by,
            );
            HttpResponse::Ok().json(SchemeResponse {
                success: false,
                data: records,
                error: Some(err.to_string()),
            })
        }
    }
}

fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec!["authorization", "x-client-info", "apikey", "content-type"])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::new().expect("configuration error");
    let scraper = Arc::new(
        ScrapeClient::new(
            settings.scrape_api_url.clone(),
            settings.scrape_api_key.clone(),
            settings.scheme_site_origin.clone(),
            settings.upstream_timeout(),
        )
        .expect("scrape client"),
    );
    let state = AppState { scraper };

    let bind_addr = format!("{}:{}", settings.http_bind, settings.scheme_http_port);
    info!(%bind_addr, "starting scheme-api");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(permissive_cors())
            .route("/healthz", web::get().to(healthz))
            .route("/schemes", web::get().to(schemes))
            .route("/schemes", web::post().to(schemes))
    })
    .bind(bind_addr)?
    .run()
    .await
}
