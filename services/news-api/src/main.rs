//! Service that aggregates categorized local news for authenticated
//! callers, biasing upstream searches with the caller's profile location
//! and degrading to sample data when the live search fails.

mod fallback;
mod normalize;
mod search;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use shared::config::Settings;
use shared::dto::{Language, NewsRecord};
use shared::error::AppError;
use shared::identity::IdentityClient;
use shared::profile::ProfileClient;

use crate::search::{search_term, NewsSearchClient};

const ALL_CATEGORIES: [&str; 4] = ["agriculture", "healthcare", "education", "local news"];

#[derive(Clone)]
struct AppState {
    identity: Arc<IdentityClient>,
    profiles: Arc<ProfileClient>,
    searcher: Arc<NewsSearchClient>,
}

#[derive(Debug, Deserialize)]
struct NewsRequest {
    category: String,
    #[serde(default)]
    refresh: bool,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RefreshAllRequest {
    #[serde(default)]
    language: Option<String>,
}

#[derive(Serialize)]
struct NewsResponse {
    news: Vec<NewsRecord>,
    location: String,
    category: String,
    refreshed: bool,
    language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct CategoryResult {
    category: String,
    news: Vec<NewsRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct RefreshAllResponse {
    results: Vec<CategoryResult>,
    location: String,
    language: String,
    refreshed: bool,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    news: Vec<NewsRecord>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn healthz() -> impl Responder {
    web::Json(HealthResponse { status: "ok" })
}

fn bearer_token(req: &HttpRequest) -> Result<&str, AppError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let token = header_value.strip_prefix("Bearer ").unwrap_or("");
    if token.is_empty() {
        return Err(AppError::Unauthenticated);
    }
    Ok(token)
}

async fn authenticate(req: &HttpRequest, state: &AppState) -> Result<String, AppError> {
    let token = bearer_token(req)?;
    state.identity.verify(token).await
}

/// Translates an authentication failure into a response. Unauthenticated
/// callers get no data, not even sample data; only an internal failure
/// carries fallback records.
fn auth_error_response(err: AppError, fallback_set: Vec<NewsRecord>) -> HttpResponse {
    match err {
        AppError::Unauthenticated => HttpResponse::Unauthorized().json(ErrorResponse {
            error: err.to_string(),
            details: None,
            fallback: None,
            news: Vec::new(),
        }),
        AppError::AuthRejected(details) => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Invalid or expired credential".into(),
            details: Some(details),
            fallback: None,
            news: Vec::new(),
        }),
        other => HttpResponse::InternalServerError().json(ErrorResponse {
            error: other.to_string(),
            details: None,
            fallback: Some(true),
            news: fallback_set,
        }),
    }
}

/// Runs the fetch → normalize → fallback pipeline for one category.
/// Returns the records plus the fallback flag and error detail, if any.
async fn fetch_category(
    state: &AppState,
    term: &str,
    category: &str,
    language: Language,
    refresh: bool,
) -> (Vec<NewsRecord>, Option<bool>, Option<String>) {
    match state.searcher.fetch(term, language, refresh).await {
        Ok(payload) => {
            let records = normalize::normalize_news(&payload, category);
            if records.is_empty() {
                info!(%category, "no usable upstream news, serving sample data");
                (fallback::fallback_news(category, language), Some(true), None)
            } else {
                (records, None, None)
            }
        }
        Err(err) => {
            warn!(%category, error = %err, "news search failed, serving sample data");
            (
                fallback::fallback_news(category, language),
                Some(true),
                Some(err.to_string()),
            )
        }
    }
}

async fn news(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<NewsRequest>,
) -> impl Responder {
    let body = body.into_inner();
    let language = body
        .language
        .as_deref()
        .map(Language::parse_or_default)
        .unwrap_or_default();

    let caller = match authenticate(&req, &state).await {
        Ok(caller) => caller,
        Err(err) => {
            return auth_error_response(err, fallback::fallback_news(&body.category, language))
        }
    };

    info!(category = %body.category, %language, refresh = body.refresh, "news query");

    let location = state.profiles.location_for(&caller).await.display_string();
    let term = search_term(&body.category, &location);
    let (records, fallback, error) =
        fetch_category(&state, &term, &body.category, language, body.refresh).await;

    HttpResponse::Ok().json(NewsResponse {
        news: records,
        location,
        category: body.category,
        refreshed: body.refresh,
        language: language.to_string(),
        fallback,
        error,
    })
}

/// Refreshes every category at once. The four fetches run concurrently and
/// each branch's outcome is captured independently; one failing category
/// never cancels its siblings.
async fn refresh_all(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: Option<web::Json<RefreshAllRequest>>,
) -> impl Responder {
    let language = body
        .map(web::Json::into_inner)
        .unwrap_or_default()
        .language
        .as_deref()
        .map(Language::parse_or_default)
        .unwrap_or_default();

    let caller = match authenticate(&req, &state).await {
        Ok(caller) => caller,
        Err(err) => return auth_error_response(err, Vec::new()),
    };

    info!(%language, "refreshing all news categories");

    let location = state.profiles.location_for(&caller).await.display_string();
    let state_ref = state.get_ref();
    let location_ref = location.as_str();

    let fetches = ALL_CATEGORIES.iter().map(|category| async move {
        let term = search_term(category, location_ref);
        let (news, fallback, error) =
            fetch_category(state_ref, &term, category, language, true).await;
        CategoryResult {
            category: (*category).to_string(),
            news,
            fallback,
            error,
        }
    });
    let results = join_all(fetches).await;

    HttpResponse::Ok().json(RefreshAllResponse {
        results,
        location,
        language: language.to_string(),
        refreshed: true,
    })
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
    let timeout = settings.upstream_timeout();
    let state = AppState {
        identity: Arc::new(
            IdentityClient::new(
                settings.identity_base_url.clone(),
                settings.service_api_key.clone(),
                timeout,
            )
            .expect("identity client"),
        ),
        profiles: Arc::new(
            ProfileClient::new(
                settings.profile_base_url.clone(),
                settings.service_api_key.clone(),
                timeout,
            )
            .expect("profile client"),
        ),
        searcher: Arc::new(
            NewsSearchClient::new(
                settings.news_api_url.clone(),
                settings.news_api_key.clone(),
                timeout,
            )
            .expect("news search client"),
        ),
    };

    let bind_addr = format!("{}:{}", settings.http_bind, settings.news_http_port);
    info!(%bind_addr, "starting news-api");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(permissive_cors())
            .route("/healthz", web::get().to(healthz))
            .route("/news", web::post().to(news))
            .route("/news/refresh-all", web::post().to(refresh_all))
    })
    .bind(bind_addr)?
    .run()
    .await
}
