use anyhow::{Context, Result};
use sqlx::PgPool;

mod suggestions;
pub use suggestions::*;

mod categories;
pub use categories::*;

mod stakeholders;
pub use stakeholders::*;

mod accounts;
pub use accounts::*;

type Pool = PgPool;

pub(crate) struct Postgres {
    pub suggestions: Suggestions,
    pub categories: Categories,
    pub stakeholders: Stakeholders,
    pub accounts: Accounts,
}

impl Postgres {
    pub async fn new(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url)
            .await
            .context("error connecting to postgres")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("error running migrations")?;

        return Ok(Self {
            suggestions: Suggestions::new(pool.clone()),
            categories: Categories::new(pool.clone()),
            stakeholders: Stakeholders::new(pool.clone()),
            accounts: Accounts::new(pool),
        });
    }
}
