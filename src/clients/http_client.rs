//! Lowest layer: one reqwest client bound to a BookStack instance.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, ResponseBody};
use crate::config::BookStackConfig;

/// Crate version, reported in `User-Agent`.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends [`HttpRequest`]s to `<base>/api/<path>` with the configured
/// credentials and sorts replies into JSON or binary bodies.
///
/// A 429 is only waited out when the request allows more than one try.
/// The client is `Send + Sync` and is meant to be shared.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// e.g. `https://docs.example.com/api`
    base_uri: String,
    /// Sent with every request, `Authorization` included.
    default_headers: HashMap<String, String>,
    rate_limit_tries: u32,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Builds the reqwest client and default headers for `config`.
    ///
    /// # Errors
    ///
    /// [`HttpError::Network`] when reqwest cannot set up TLS.
    pub fn new(config: &BookStackConfig) -> Result<Self, HttpError> {
        let base_uri = format!("{}/api", config.base_url());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}bookstack-api v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.credentials().authorization_header(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_ssl())
            .build()?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
            rate_limit_tries: config.rate_limit_tries(),
        })
    }

    /// API root, `<base>/api`.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Attempts per request when BookStack answers 429.
    #[must_use]
    pub const fn rate_limit_tries(&self) -> u32 {
        self.rate_limit_tries
    }

    /// Builds the full URL for an endpoint path.
    ///
    /// A leading `/` and an `api/` prefix are tolerated, so `pages`,
    /// `/pages`, and `/api/pages` resolve to the same URL.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let path = path.strip_prefix("api/").unwrap_or(path);
        format!("{}/{}", self.base_uri, path)
    }

    /// Sends `request`, waiting out 429s while `request.tries` allows.
    ///
    /// # Errors
    ///
    /// Each [`HttpError`] variant: a request that fails
    /// [`HttpRequest::verify`], a transport failure, a non-2xx reply, a 429
    /// on the last allowed try, or a JSON reply that does not parse.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.endpoint_url(&request.path);
        let max_tries = request.tries.max(1);

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            tracing::debug!("{} {}", request.http_method.to_string().to_uppercase(), url);

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            req_builder = match request.body_type {
                Some(DataType::Multipart) => req_builder.multipart(Self::build_form(&request)?),
                Some(DataType::Json) => {
                    let body = request.body.as_ref().map_or_else(String::new, Value::to_string);
                    req_builder
                        .header("Content-Type", DataType::Json.as_content_type())
                        .body(body)
                }
                None => req_builder,
            };

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let bytes = res.bytes().await?.to_vec();

            let mut response = HttpResponse::new(code, res_headers, ResponseBody::empty());

            if response.is_ok() {
                let content_type = response.content_type().unwrap_or_default().to_string();
                response.body = Self::parse_body(code, &content_type, bytes)?;
                return Ok(response);
            }

            if code != 429 {
                let (message, body) = Self::error_message(code, &bytes);
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    body,
                }));
            }

            let wait = response.retry_after_secs();
            let message = format!("Rate limit exceeded. Retry after {wait} seconds.");

            // A Retry-After too large for a Duration ends the retries.
            let delay = match Duration::try_from_secs_f64(wait) {
                Ok(delay) if tries < max_tries => delay,
                _ if max_tries == 1 => {
                    let (_, body) = Self::error_message(code, &bytes);
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message,
                        body,
                    }));
                }
                _ => {
                    return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                        code,
                        tries,
                        message,
                    }));
                }
            };

            tracing::warn!(
                "Rate limited on {}; retrying in {}s (attempt {}/{})",
                request.path,
                wait,
                tries,
                max_tries
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Classifies a successful response body.
    fn parse_body(code: u16, content_type: &str, bytes: Vec<u8>) -> Result<ResponseBody, HttpError> {
        if code == 204 || bytes.is_empty() {
            return Ok(ResponseBody::empty());
        }
        if content_type.contains("application/json") {
            return Ok(ResponseBody::Structured(serde_json::from_slice(&bytes)?));
        }
        Ok(ResponseBody::Binary(bytes))
    }

    /// Extracts the error message from a failed response.
    ///
    /// BookStack wraps errors as `{"error": {"code": .., "message": ..}}`.
    fn error_message(code: u16, bytes: &[u8]) -> (String, Option<Value>) {
        let parsed: Option<Value> = serde_json::from_slice(bytes).ok();

        let message = parsed
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(|error| match error {
                Value::String(s) => Some(s.clone()),
                other => other.get("message").and_then(Value::as_str).map(String::from),
            })
            .unwrap_or_else(|| {
                let text = String::from_utf8_lossy(bytes).trim().to_string();
                if text.is_empty() {
                    format!("HTTP {code}")
                } else {
                    text
                }
            });

        (message, parsed)
    }

    /// Builds a multipart form from the structured body and attached files.
    fn build_form(request: &HttpRequest) -> Result<reqwest::multipart::Form, HttpError> {
        let mut form = reqwest::multipart::Form::new();

        if let Some(body) = &request.body {
            for (name, value) in flatten_form_fields(body) {
                form = form.text(name, value);
            }
        }

        for file in &request.files {
            form = form.part(file.field.clone(), file.to_part()?);
        }

        Ok(form)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Flattens a JSON object into form field pairs.
///
/// Nested values use bracket notation (`tags[0][name]`), booleans become
/// `1`/`0`, and nulls are omitted.
#[must_use]
pub fn flatten_form_fields(body: &Value) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    if let Value::Object(map) = body {
        for (key, value) in map {
            flatten_into(key.clone(), value, &mut fields);
        }
    }
    fields
}

fn flatten_into(name: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((name, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => out.push((name, n.to_string())),
        Value::String(s) => out.push((name, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(format!("{name}[{i}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten_into(format!("{name}[{key}]"), item, out);
            }
        }
    }
}
