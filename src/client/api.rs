use async_trait::async_trait;
use reqwest::{Response, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::ClientError;
use crate::data::{Category, Stakeholder};

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, ClientError>;
}

#[async_trait]
pub trait StakeholderService: Send + Sync {
    async fn search(&self, query: &StakeholderQuery) -> Result<Vec<Stakeholder>, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderQuery {
    pub name: String,
    pub category_ids: Vec<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance: f64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Talks to the directory backend. `base_url` points at the versioned api root,
/// e.g. `http://localhost:8000/api/v1`.
#[derive(Clone)]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .default_headers(header::HeaderMap::from_iter([(
                header::ACCEPT,
                header::HeaderValue::from_static("application/json"),
            )]))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_owned());

            return Err(ClientError::Status { status, message });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CategoryService for HttpApi {
    #[tracing::instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Category>, ClientError> {
        let response = self.client.get(self.url("/categories")).send().await?;

        Self::decode(response).await
    }
}

#[async_trait]
impl StakeholderService for HttpApi {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &StakeholderQuery) -> Result<Vec<Stakeholder>, ClientError> {
        let response = self
            .client
            .post(self.url("/stakeholders/query"))
            .json(query)
            .send()
            .await?;

        Self::decode(response).await
    }
}
