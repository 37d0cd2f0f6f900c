use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::query_as;

use super::Pool;
use crate::data::{Category, CategoryStore};

#[derive(Clone)]
pub struct Categories {
    pool: Pool,
}

impl Categories {
    pub(crate) fn new(pool: Pool) -> Self {
        return Self { pool };
    }
}

#[async_trait]
impl CategoryStore for Categories {
    #[tracing::instrument(skip(self))]
    async fn select_all(&self) -> Result<Vec<Category>> {
        let rows = query_as::<_, Category>("select id, name, inactive from categories order by id")
            .fetch_all(&self.pool)
            .await
            .context("error selecting categories")?;

        Ok(rows)
    }
}
