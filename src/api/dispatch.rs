//! Request dispatch: one GET per call, result handed back untouched

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Everything the HTTP client returned for a completed request.
///
/// Any status, including 404 and 5xx, arrives here as a normal response; the
/// body is the raw text exactly as received.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Issues exactly one GET for `url` with the fixed header set.
///
/// No retries, no status classification and no body parsing happen here.
/// Transport failures (connect, timeout, body read) come back as
/// `AppError::Transport` carrying the client's own error.
#[instrument(skip(client, headers))]
pub async fn dispatch(
    client: &Client,
    url: &str,
    headers: &HeaderMap,
) -> Result<RawResponse, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).headers(headers.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(AppError::Transport(e));
        }
    };

    let status = response.status();
    let response_headers = response.headers().clone();
    debug!("Response status: {status}");
    debug!("Response headers: {:?}", response_headers);

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::Transport(e));
        }
    };
    debug!("Response length: {} bytes", body.len());

    Ok(RawResponse {
        url: url.to_string(),
        status,
        headers: response_headers,
        body,
    })
}

/// Completion-callback form of [`dispatch`].
///
/// `callback` runs exactly once, after the request has finished, with the
/// same value `dispatch` would have returned.
pub async fn dispatch_then<F>(client: &Client, url: &str, headers: &HeaderMap, callback: F)
where
    F: FnOnce(Result<RawResponse, AppError>),
{
    let result = dispatch(client, url, headers).await;
    callback(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http_client::create_test_http_client;
    use crate::constants::APP_ID_HEADER;
    use reqwest::header::HeaderValue;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    fn app_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(APP_ID_HEADER, HeaderValue::from_static("tba_wrapper:test:1"));
        headers
    }

    #[tokio::test]
    async fn test_dispatch_success_passes_body_through() {
        let mock_server = MockServer::start().await;
        let body = r#"{"key":"frc254","nickname":"The Cheesy Poofs"}"#;

        Mock::given(method("GET"))
            .and(path("/api/v2/team/frc254"))
            .and(header(APP_ID_HEADER, "tba_wrapper:test:1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/api/v2/team/frc254", mock_server.uri());
        let response = dispatch(&client, &url, &app_headers()).await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.is_success());
        assert_eq!(response.body, body);
        assert_eq!(response.url, url);
    }

    #[tokio::test]
    async fn test_dispatch_not_found_is_a_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404 Not Found"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/api/v2/team/undefined", mock_server.uri());
        let response = dispatch(&client, &url, &app_headers()).await.unwrap();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(!response.is_success());
        assert_eq!(response.body, "404 Not Found");
    }

    #[tokio::test]
    async fn test_dispatch_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/api/v2/events/2014", mock_server.uri());
        let response = dispatch(&client, &url, &app_headers()).await.unwrap();

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_connection_failure_is_transport_error() {
        let client = create_test_http_client();
        let result = dispatch(&client, "http://127.0.0.1:1/api/v2/team/frc254", &app_headers()).await;

        match result {
            Err(AppError::Transport(e)) => assert!(e.is_connect() || e.is_request()),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_timeout_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&mock_server)
            .await;

        let client = Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let url = format!("{}/api/v2/districts/2015", mock_server.uri());
        let result = dispatch(&client, &url, &app_headers()).await;

        match result {
            Err(AppError::Transport(e)) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_then_calls_back_once() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/api/v2/districts/2014", mock_server.uri());
        let mut calls = Vec::new();

        dispatch_then(&client, &url, &app_headers(), |result| {
            calls.push(result.map(|r| r.body));
        })
        .await;

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].as_deref().unwrap(), "[]");
    }
}
