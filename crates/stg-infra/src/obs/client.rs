//! Authenticated read-only HTTP access to the build service API.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use stg_core::ports::GatewayError;
use stg_core::ApiConfig;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ObsClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: Option<String>,
}

impl ObsClient {
    /// Build a client from API settings. A zero timeout falls back to 30s.
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(config.url.trim_end_matches('/')).map_err(|e| {
            GatewayError::Transport(format!("invalid API URL \"{}\": {}", config.url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Transport(format!(
                "API URL \"{}\" cannot be a base URL",
                config.url
            )));
        }

        let timeout = match config.timeout_secs {
            0 => DEFAULT_TIMEOUT,
            secs => Duration::from_secs(secs),
        };
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// `GET {api}/{segments...}?{query}` and return the body text.
    pub async fn get_xml(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<String, GatewayError> {
        let url = self.make_url(segments, query);
        debug!(%url, "GET");

        let mut request = self.http.get(url.clone());
        if !self.username.is_empty() {
            request = request.basic_auth(&self.username, self.password.as_deref());
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(map_status_code(status, url.path()));
        }

        response.text().await.map_err(map_transport_error)
    }

    fn make_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if let Some(status) = error.status() {
        map_status_code(status, error.url().map(Url::path).unwrap_or_default())
    } else if error.is_decode() {
        GatewayError::Malformed(error.to_string())
    } else {
        GatewayError::Transport(error.to_string())
    }
}

fn map_status_code(code: StatusCode, path: &str) -> GatewayError {
    match code {
        StatusCode::NOT_FOUND => GatewayError::NotFound(path.to_string()),
        StatusCode::UNAUTHORIZED => GatewayError::Unauthorized(path.to_string()),
        StatusCode::FORBIDDEN => GatewayError::Forbidden(path.to_string()),
        _ => GatewayError::UnexpectedStatus(code.as_u16()),
    }
}
