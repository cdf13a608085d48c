use dioxus::logger::tracing;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::contexts::{ApiError, ApiResult};

/// The resource kinds exposed by the backend, one list endpoint each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Nodes,
    Pods,
    Events,
    Services,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Nodes,
        ResourceKind::Pods,
        ResourceKind::Events,
        ResourceKind::Services,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Nodes => "/v1/nodes",
            ResourceKind::Pods => "/v1/pods",
            ResourceKind::Events => "/v1/events",
            ResourceKind::Services => "/v1/services",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Nodes => "Nodes",
            ResourceKind::Pods => "Pods",
            ResourceKind::Events => "Events",
            ResourceKind::Services => "Services",
        }
    }
}

/// Thin HTTP client over the backend's list endpoints
#[derive(Clone, Debug)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::InvalidBaseUrl("URL is empty".to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn endpoint_url(&self, kind: ResourceKind) -> String {
        format!("{}{}", self.base_url, kind.path())
    }

    /// GET the list endpoint for `kind` and decode its JSON array
    pub async fn list<T: DeserializeOwned>(&self, kind: ResourceKind) -> ApiResult<Vec<T>> {
        let url = self.endpoint_url(kind);
        tracing::info!("Fetching {} from {}", kind.display_name(), url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Failed to fetch {}: {}", kind.display_name(), status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let items: Vec<T> = serde_json::from_slice(&bytes)?;
        tracing::debug!("Fetched {} {}", items.len(), kind.display_name());

        Ok(items)
    }

    /// Hit every list endpoint concurrently and report which ones answered
    pub async fn check_endpoints(&self) -> Vec<(ResourceKind, ApiResult<usize>)> {
        let count = |kind: ResourceKind| async move {
            let result = self
                .list::<serde_json::Value>(kind)
                .await
                .map(|items| items.len());
            (kind, result)
        };

        futures::future::join_all(ResourceKind::ALL.map(count)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NodeRecord;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `response` verbatim to every connection and return the base URL
    async fn serve(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    fn client(base_url: &str) -> BackendClient {
        BackendClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        let client = client("http://localhost:8080/");

        assert_eq!(client.endpoint_url(ResourceKind::Nodes), "http://localhost:8080/v1/nodes");
        assert_eq!(client.endpoint_url(ResourceKind::Pods), "http://localhost:8080/v1/pods");
        assert_eq!(client.endpoint_url(ResourceKind::Events), "http://localhost:8080/v1/events");
        assert_eq!(client.endpoint_url(ResourceKind::Services), "http://localhost:8080/v1/services");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(matches!(
            BackendClient::new("  ", Duration::from_secs(1)),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_list_decodes_json_array() {
        let body = r#"[{"name":"a","status":"Ready"},{"name":"b","status":"NotReady"}]"#;
        let response: &'static str = Box::leak(
            format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            )
            .into_boxed_str(),
        );
        let base_url = serve(response).await;

        let nodes: Vec<NodeRecord> = client(&base_url).list(ResourceKind::Nodes).await.unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].status.as_deref(), Some("NotReady"));
    }

    #[tokio::test]
    async fn test_non_success_status_fails_fetch() {
        let base_url = serve(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 4\r\nConnection: close\r\n\r\ndown",
        )
        .await;

        let result = client(&base_url).list::<NodeRecord>(ResourceKind::Nodes).await;
        match result {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "down");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_array_body_is_decode_error() {
        let base_url = serve(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        )
        .await;

        let result = client(&base_url).list::<NodeRecord>(ResourceKind::Pods).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_check_endpoints_reports_every_resource() {
        let base_url = serve(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 7\r\nConnection: close\r\n\r\n[{},{}]",
        )
        .await;

        let results = client(&base_url).check_endpoints().await;
        let kinds: Vec<ResourceKind> = results.iter().map(|(kind, _)| *kind).collect();

        assert_eq!(kinds, ResourceKind::ALL.to_vec());
        assert!(results.iter().all(|(_, result)| matches!(result, Ok(2))));
    }
}
