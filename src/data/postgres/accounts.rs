use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::query_as;

use super::Pool;
use crate::data::{Account, AccountStore};

#[derive(Clone)]
pub struct Accounts {
    pool: Pool,
}

impl Accounts {
    pub(crate) fn new(pool: Pool) -> Self {
        return Self { pool };
    }
}

#[async_trait]
impl AccountStore for Accounts {
    #[tracing::instrument(skip(self))]
    async fn select_all(&self) -> Result<Vec<Account>> {
        let rows = query_as::<_, Account>(
            r#"
            select id, email, first_name, last_name,
                   is_admin, is_security_admin, email_confirmed, created_at
            from accounts
            order by last_name, first_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("error selecting accounts")?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self))]
    async fn update_roles(
        &self,
        id: i32,
        is_admin: bool,
        is_security_admin: bool,
    ) -> Result<Option<Account>> {
        let row = query_as::<_, Account>(
            r#"
            update accounts
            set
                is_admin = $2,
                is_security_admin = $3
            where id = $1
            returning id, email, first_name, last_name,
                      is_admin, is_security_admin, email_confirmed, created_at
            "#,
        )
        .bind(id)
        .bind(is_admin)
        .bind(is_security_admin)
        .fetch_optional(&self.pool)
        .await
        .context("error updating account roles")?;

        Ok(row)
    }
}
