//! HTTP execution for [`ApiRequest`] values.
//!
//! Client-side (hydrate): real calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`]; pages
//! only issue requests from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become [`ApiError::Network`]. Non-2xx responses are
//! classified by [`ApiError::from_status`] with the backend's `detail`.
//! Audit writes are best-effort: callers log and continue on failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::audit::AuditEntry;
use super::endpoints::{self, ApiRequest};
use super::error::{ApiError, extract_detail};

/// Fallback recorded when the public IP lookup fails.
pub const UNKNOWN_IP: &str = "unknown IP";

/// Status and body text of a completed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body text for 2xx, otherwise the classified error.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] matching a non-2xx status.
    pub fn into_result(self) -> Result<String, ApiError> {
        if self.is_ok() {
            Ok(self.body)
        } else {
            Err(ApiError::from_status(self.status, extract_detail(&self.body)))
        }
    }

    /// Decode a 2xx JSON body.
    ///
    /// # Errors
    ///
    /// Returns a status error for non-2xx or [`ApiError::Decode`] for bad JSON.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let body = self.into_result()?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Send `req` to the configured backend.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if no response arrives.
pub async fn execute(req: &ApiRequest) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        use super::endpoints::{Body, Method};
        use crate::util::query::build_query;

        let url = req.url(endpoints::api_base());
        let mut builder = match req.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = &req.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = match &req.body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(value),
            Body::Form(pairs) => builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(build_query(pairs)),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Send and decode a JSON response.
///
/// # Errors
///
/// See [`execute`] and [`RawResponse::decode`].
pub async fn send<T: DeserializeOwned>(req: &ApiRequest) -> Result<T, ApiError> {
    execute(req).await?.decode()
}

/// Send and ignore the response body.
///
/// # Errors
///
/// See [`execute`] and [`RawResponse::into_result`].
pub async fn send_empty(req: &ApiRequest) -> Result<(), ApiError> {
    execute(req).await?.into_result().map(|_| ())
}

/// Write an audit entry.
///
/// # Errors
///
/// Returns the failure so callers can log it; nothing should block on it.
pub async fn record_audit(entry: &AuditEntry, token: Option<&str>) -> Result<(), ApiError> {
    send_empty(&endpoints::record_log(entry, token)?).await
}

/// Caller's public IP, or [`UNKNOWN_IP`].
pub async fn public_ip() -> String {
    match send::<serde_json::Value>(&endpoints::public_ip()).await {
        Ok(value) => ip_from_response(&value),
        Err(_) => UNKNOWN_IP.to_owned(),
    }
}

fn ip_from_response(value: &serde_json::Value) -> String {
    value
        .get("ip")
        .and_then(serde_json::Value::as_str)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN_IP)
        .to_owned()
}

/// Upload a CSV file as multipart form data with its target project and
/// interface.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the form cannot be built or sent, or a
/// status error from the backend.
#[cfg(feature = "hydrate")]
pub async fn upload_csv(
    file: &web_sys::File,
    project_id: &str,
    interface: &str,
    token: Option<&str>,
) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_str("project_id", project_id)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_str("interface", interface)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let url = ApiRequest::post(endpoints::UPLOAD_CSV_PATH).url(endpoints::api_base());
    let mut builder = Request::post(&url);
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = builder
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let raw = RawResponse { status: resp.status(), body: resp.text().await.unwrap_or_default() };
    let ack: super::types::Acknowledgement = raw.decode()?;
    Ok(ack.text_or("File uploaded successfully and is being processed."))
}
