use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{prelude::FromRow, query_as, types::Json};

use super::Pool;
use crate::data::{Suggestion, SuggestionStore};

#[derive(Clone)]
pub struct Suggestions {
    pool: Pool,
}

impl Suggestions {
    pub(crate) fn new(pool: Pool) -> Self {
        return Self { pool };
    }
}

#[derive(FromRow)]
struct SuggestionRow {
    id: i32,
    body: Json<Map<String, Value>>,
}

impl From<SuggestionRow> for Suggestion {
    fn from(row: SuggestionRow) -> Self {
        Suggestion {
            id: row.id,
            fields: row.body.0,
        }
    }
}

#[async_trait]
impl SuggestionStore for Suggestions {
    #[tracing::instrument(skip(self))]
    async fn select_all(&self) -> Result<Vec<Suggestion>> {
        let rows = query_as::<_, SuggestionRow>("select id, body from suggestions order by id")
            .fetch_all(&self.pool)
            .await
            .context("error selecting suggestions")?;

        return Ok(rows.into_iter().map(Suggestion::from).collect());
    }

    #[tracing::instrument(skip(self))]
    async fn select_by_id(&self, id: &str) -> Result<Option<Suggestion>> {
        let id = id
            .parse::<i32>()
            .with_context(|| format!("invalid suggestion id {id:?}"))?;

        let row = query_as::<_, SuggestionRow>("select id, body from suggestions where id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("error selecting suggestion")?;

        return Ok(row.map(Suggestion::from));
    }

    #[tracing::instrument(skip(self))]
    async fn insert(&self, fields: Map<String, Value>) -> Result<Suggestion> {
        let row = query_as::<_, SuggestionRow>(
            "insert into suggestions (body) values ($1) returning id, body",
        )
        .bind(Json(fields))
        .fetch_one(&self.pool)
        .await
        .context("error inserting suggestion")?;

        return Ok(row.into());
    }
}
