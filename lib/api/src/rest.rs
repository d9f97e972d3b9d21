use actix_web::error::InternalError;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result as ActixResult};
use actix_cors::Cors;
use colsim_core::{Error, TokenizerConfig};
use colsim_similarity::{ComparisonRequest, DistanceBreakdown};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 256 * 1024;

/// Listener settings for the REST server
#[derive(Debug, Clone)]
pub struct RestConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; `None` keeps the actix default of one per core
    pub workers: Option<usize>,
    pub max_payload_bytes: usize,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: None,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

#[derive(Deserialize)]
struct CompareQuery {
    /// Field separator, overrides `separator` in the body
    comma: Option<String>,
    /// Comment prefix, overrides `commentPrefix` in the body
    comment: Option<String>,
    #[serde(default)]
    explain: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareResponse {
    #[serde(flatten)]
    request: ComparisonRequest,
    compare_result: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explain: Option<Vec<DistanceBreakdown>>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(config: RestConfig) -> std::io::Result<()> {
        let max_payload_bytes = config.max_payload_bytes;

        let mut server = HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .configure(|cfg| configure_with_limit(cfg, max_payload_bytes))
        });

        if let Some(workers) = config.workers {
            server = server.workers(workers);
        }

        server
            .bind((config.host.as_str(), config.port))?
            .run()
            .await
    }
}

/// Register the API routes with the default payload limit
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_with_limit(cfg, DEFAULT_MAX_PAYLOAD_BYTES);
}

/// Register the API routes, rejecting JSON bodies above `max_payload_bytes`
pub fn configure_with_limit(cfg: &mut web::ServiceConfig, max_payload_bytes: usize) {
    let json_config = web::JsonConfig::default()
        .limit(max_payload_bytes)
        .error_handler(|err, req| {
            let message = format!("unable to parse request: {}", err);
            malformed_request(err, req, message)
        });

    let query_config = web::QueryConfig::default().error_handler(|err, req| {
        let message = format!("invalid query string: {}", err);
        malformed_request(err, req, message)
    });

    cfg.app_data(json_config)
        .app_data(query_config)
        .route("/compare", web::put().to(compare_headers))
        .route("/compare", web::post().to(compare_headers))
        .route("/health", web::get().to(health));
}

fn malformed_request<E>(err: E, req: &HttpRequest, message: String) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    warn!(path = %req.path(), "{}", message);
    let response = HttpResponse::BadRequest().json(serde_json::json!({
        "error": message,
        "kind": "malformed_request"
    }));
    InternalError::from_response(err, response).into()
}

fn client_error(err: &Error) -> HttpResponse {
    warn!(kind = err.kind(), "Rejected comparison request: {}", err);
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": err.to_string(),
        "kind": err.kind()
    }))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

async fn compare_headers(
    query: web::Query<CompareQuery>,
    req: web::Json<ComparisonRequest>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    let request = req.into_inner();

    if let Err(e) = request.check_fields() {
        return Ok(client_error(&e));
    }

    let config = match TokenizerConfig::from_parts(
        non_empty(&query.comma).or(request.separator.as_deref()),
        non_empty(&query.comment).or(request.comment_prefix.as_deref()),
    ) {
        Ok(config) => config,
        Err(e) => return Ok(client_error(&e)),
    };

    let explain = query.explain;
    let result = web::block(move || {
        let outcome = request.execute_with(config, explain);
        (request, outcome)
    })
    .await;

    let (request, outcome) = match result {
        Ok(pair) => pair,
        Err(e) => {
            error!("Comparison task failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "comparison failed"
            })));
        }
    };

    match outcome {
        Ok(outcome) => {
            debug!(scores = ?outcome.scores, "Comparison finished");
            Ok(HttpResponse::Ok().json(CompareResponse {
                request,
                compare_result: outcome.scores,
                explain: outcome.breakdowns,
            }))
        }
        Err(e) => Ok(client_error(&e)),
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    })))
}
