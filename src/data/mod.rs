use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use postgres::Postgres;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

use crate::config::Config;

mod postgres;

#[cfg(test)]
pub mod memory;

/// Storage backing the suggestion endpoints. Bodies are stored as given.
#[async_trait]
pub trait SuggestionStore: Send + Sync {
    async fn select_all(&self) -> Result<Vec<Suggestion>>;

    /// `id` is passed through untouched; an id the store cannot interpret is an error,
    /// an id it can interpret but does not hold is `Ok(None)`.
    async fn select_by_id(&self, id: &str) -> Result<Option<Suggestion>>;

    async fn insert(&self, fields: Map<String, Value>) -> Result<Suggestion>;
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn select_all(&self) -> Result<Vec<Category>>;
}

#[async_trait]
pub trait StakeholderStore: Send + Sync {
    /// Active stakeholders whose name contains `name` (case-insensitive) and which carry
    /// at least one of `category_ids`.
    async fn query(&self, name: Option<&str>, category_ids: &[i32]) -> Result<Vec<StakeholderRow>>;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn select_all(&self) -> Result<Vec<Account>>;

    async fn update_roles(
        &self,
        id: i32,
        is_admin: bool,
        is_security_admin: bool,
    ) -> Result<Option<Account>>;
}

#[derive(Clone)]
pub struct Data {
    pub suggestions: Arc<dyn SuggestionStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub stakeholders: Arc<dyn StakeholderStore>,
    pub accounts: Arc<dyn AccountStore>,
}

impl Data {
    pub async fn new(config: &Config) -> Result<Self> {
        let postgres = Postgres::new(&config.database_url)
            .await
            .context("error creating postgres")?;

        return Ok(Self {
            suggestions: Arc::new(postgres.suggestions),
            categories: Arc::new(postgres.categories),
            stakeholders: Arc::new(postgres.stakeholders),
            accounts: Arc::new(postgres.accounts),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub inactive: bool,
}

/// A stored suggestion: whatever the submitter sent, plus the id it was stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: i32,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StakeholderRow {
    pub id: i32,
    pub name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub id: i32,
    pub name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub categories: Vec<Category>,
    /// Miles from the search origin, when the search had one.
    pub distance: Option<f64>,
}

impl Stakeholder {
    pub fn from_row(row: StakeholderRow, distance: Option<f64>) -> Self {
        Stakeholder {
            id: row.id,
            name: row.name,
            address1: row.address1,
            address2: row.address2,
            city: row.city,
            state: row.state,
            zip: row.zip,
            phone: row.phone,
            website: row.website,
            latitude: row.latitude,
            longitude: row.longitude,
            categories: row.categories,
            distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub is_security_admin: bool,
    pub email_confirmed: bool,
    pub created_at: DateTime<Utc>,
}
