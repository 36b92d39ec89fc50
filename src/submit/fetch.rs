use super::error::TransportError;
use super::transport::Reply;
use super::transport::Service;
use super::transport::Transport;

/// The browser's `fetch`, through gloo-net.
#[derive(Debug, Clone, Default)]
pub struct Fetch {
    service: Service,
}

impl From<Service> for Fetch {
    fn from(service: Service) -> Self {
        Self { service }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for Fetch {
    async fn post(&self, path: &str, body: String) -> Result<Reply, TransportError> {
        let url = self.service.url(path);
        log::debug!("POST {}", url);
        let response = gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Reply { status, body })
    }
}
