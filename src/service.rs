use crate::error::QueryFailed;
use crate::query::QueryInput;
use crate::results::FindPathResponse;

use async_trait::async_trait;
use log::trace;
use reqwest::Client;

/// Something that can plan a route for a query.
#[async_trait]
pub trait RouteService: Send + Sync {
    async fn find_path(&self, input: &QueryInput)
                       -> Result<FindPathResponse, QueryFailed>;
}

/// Route service reached over HTTP.
pub struct HttpRouteService {
    client: Client,
    base_url: String,
    escape_segments: bool,
}

impl HttpRouteService {
    pub fn new(base_url: &str, escape_segments: bool) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            escape_segments: escape_segments,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RouteService for HttpRouteService {
    async fn find_path(&self, input: &QueryInput)
                       -> Result<FindPathResponse, QueryFailed> {
        let url = input.url(&self.base_url, self.escape_segments)?;
        trace!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(QueryFailed::Status(status));
        }

        let body = response.bytes().await?;

        Ok(FindPathResponse::from_slice(&body)?)
    }
}
