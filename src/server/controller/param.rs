use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;

use crate::server::{state::AppState, util::pagination::PageRequest};

/// Query parameters shared by every list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParam {
    pub page: Option<i64>,
    #[serde(rename = "pageSize", alias = "PageSize")]
    pub page_size: Option<i64>,
}

impl PaginationParam {
    pub fn into_request(self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

/// Query parameters of the moto list endpoint.
///
/// Fields are spelled out instead of flattening `PaginationParam`, which would break
/// numeric parsing of query strings.
#[derive(Debug, Default, Deserialize)]
pub struct MotoListParam {
    pub page: Option<i64>,
    #[serde(rename = "pageSize", alias = "PageSize")]
    pub page_size: Option<i64>,
    #[serde(alias = "Placa")]
    pub placa: Option<String>,
}

impl MotoListParam {
    pub fn into_parts(self) -> (PageRequest, Option<String>) {
        (PageRequest::new(self.page, self.page_size), self.placa)
    }
}

/// `{scheme}://{host}` the client used to reach the server.
///
/// Honors `X-Forwarded-Proto` and `X-Forwarded-Host` so links stay valid behind a
/// reverse proxy. Falls back to the configured application URL when the request
/// carries no host at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(pub String);

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Proxies may append to these headers, the first entry is the client-facing one
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let origin = match header("x-forwarded-host").or_else(|| header("host")) {
            Some(host) => {
                let scheme = header("x-forwarded-proto").unwrap_or("http");
                format!("{}://{}", scheme, host)
            }
            None => state.app_url.clone(),
        };

        Ok(Self(origin))
    }
}
