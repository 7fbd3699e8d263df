//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`.
//! Requests are served one at a time; each evaluation finishes before the
//! next request is read.

use std::io::Cursor;

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{self, ApiError, ApiResponse, EvaluateRequest, ValidateRequest};
use crate::config::Config;

use super::assets;

/// A framework-neutral HTTP reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header value
    pub content_type: &'static str,
    /// Response body
    pub body: Vec<u8>,
}

impl Reply {
    /// Body as UTF-8 text (lossy)
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let response = Response::from_data(self.body).with_status_code(StatusCode(self.status));
        match Header::from_bytes("Content-Type", self.content_type) {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Bind `addr` and serve the form page and API until the process stops
pub fn serve(addr: &str, config: &Config) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    log::info!("Listening on http://{addr}");

    for mut request in server.incoming_requests() {
        let reply = handle_request(&mut request, config);
        log::debug!("{} {} -> {}", request.method(), request.url(), reply.status);
        if let Err(e) = request.respond(reply.into_response()) {
            log::warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

fn handle_request(request: &mut Request, config: &Config) -> Reply {
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = String::new();
    if matches!(method, Method::Post)
        && let Err(e) = request.as_reader().read_to_string(&mut body)
    {
        return error_reply(&ApiError::bad_request(format!("Failed to read request body: {e}")));
    }

    route(&method, &url, &body, config)
}

// =============================================================================
// ROUTING
// =============================================================================

/// Map a request to a reply
///
/// This is the main routing function. API paths accept both `/api/v1/...`
/// and `/api/...`; everything else is looked up among the static assets.
#[must_use]
pub fn route(method: &Method, url: &str, body: &str, config: &Config) -> Reply {
    let path = url.split_once('?').map_or(url, |(p, _)| p);

    let Some(api_path) = path.strip_prefix("/api/v1").or_else(|| path.strip_prefix("/api")) else {
        return static_reply(method, path);
    };

    match (method, api_path) {
        (&Method::Get, "/options") => success_reply(&api::list_options(config)),

        (&Method::Post, "/evaluate") => match parse_json::<EvaluateRequest>(body) {
            Ok(req) => handle_result(api::evaluate(&req, config)),
            Err(e) => error_reply(&e),
        },

        (&Method::Post, "/validate") => match parse_json::<ValidateRequest>(body) {
            Ok(req) => success_reply(&api::validate_live(&req)),
            Err(e) => error_reply(&e),
        },

        _ => error_reply(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        ))),
    }
}

fn static_reply(method: &Method, path: &str) -> Reply {
    match (method, assets::lookup(path)) {
        (&Method::Get, Some(asset)) => Reply {
            status: 200,
            content_type: asset.content_type,
            body: asset.contents.to_vec(),
        },
        _ => Reply {
            status: 404,
            content_type: "text/plain; charset=utf-8",
            body: b"Not Found".to_vec(),
        },
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => success_reply(&data),
        Err(e) => error_reply(&e),
    }
}

fn success_reply<T: Serialize>(data: &T) -> Reply {
    json_reply(&ApiResponse::success(data), 200)
}

fn error_reply(error: &ApiError) -> Reply {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_reply(&response, error.status_code())
}

fn json_reply<T: Serialize>(data: &T, status: u16) -> Reply {
    match serde_json::to_vec(data) {
        Ok(body) => Reply {
            status,
            content_type: "application/json",
            body,
        },
        Err(e) => {
            log::error!("Failed to serialize response: {e}");
            internal_reply(&ApiError::internal(format!("Failed to serialize response: {e}")))
        },
    }
}

/// Last-resort reply built without going through `Serialize`
fn internal_reply(error: &ApiError) -> Reply {
    let body = serde_json::json!({
        "success": false,
        "error": {
            "code": error.code.as_str(),
            "message": error.message,
        },
    });
    Reply {
        status: error.status_code(),
        content_type: "application/json",
        body: body.to_string().into_bytes(),
    }
}
