use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{QueryBuilder, prelude::FromRow, query_as};

use super::Pool;
use crate::data::{Category, StakeholderRow, StakeholderStore};

#[derive(Clone)]
pub struct Stakeholders {
    pool: Pool,
}

impl Stakeholders {
    pub(crate) fn new(pool: Pool) -> Self {
        return Self { pool };
    }
}

#[derive(FromRow)]
struct StakeholderCols {
    id: i32,
    name: String,
    address_1: Option<String>,
    address_2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(FromRow)]
struct StakeholderCategoryCols {
    stakeholder_id: i32,
    id: i32,
    name: String,
    inactive: bool,
}

/// `ilike` pattern matching `text` anywhere, with `\`, `%` and `_` taken literally.
fn contains_pattern(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{escaped}%")
}

#[async_trait]
impl StakeholderStore for Stakeholders {
    #[tracing::instrument(skip(self))]
    async fn query(&self, name: Option<&str>, category_ids: &[i32]) -> Result<Vec<StakeholderRow>> {
        let mut qb = QueryBuilder::new(
            "select s.id, s.name, s.address_1, s.address_2, s.city, s.state, s.zip,
                    s.phone, s.website, s.latitude, s.longitude
             from stakeholders s
             where s.inactive = false
               and exists (
                   select 1 from stakeholder_categories sc
                   where sc.stakeholder_id = s.id and sc.category_id = any(",
        );

        qb.push_bind(category_ids.to_vec());
        qb.push("))");

        if let Some(name) = name {
            qb.push(" and s.name ilike ");
            qb.push_bind(contains_pattern(name));
            qb.push(r" escape '\'");
        }

        qb.push(" order by s.name");

        let rows = qb
            .build_query_as::<StakeholderCols>()
            .fetch_all(&self.pool)
            .await
            .context("error querying stakeholders")?;

        let ids = rows.iter().map(|row| row.id).collect::<Vec<i32>>();

        let category_rows = query_as::<_, StakeholderCategoryCols>(
            r#"
            select sc.stakeholder_id, c.id, c.name, c.inactive
            from stakeholder_categories sc
            join categories c on c.id = sc.category_id
            where sc.stakeholder_id = any($1)
            order by c.id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .context("error querying stakeholder categories")?;

        let mut categories: HashMap<i32, Vec<Category>> = HashMap::default();
        for row in category_rows {
            categories
                .entry(row.stakeholder_id)
                .or_default()
                .push(Category {
                    id: row.id,
                    name: row.name,
                    inactive: row.inactive,
                });
        }

        let result = rows
            .into_iter()
            .map(|row| StakeholderRow {
                categories: categories.remove(&row.id).unwrap_or_default(),
                id: row.id,
                name: row.name,
                address1: row.address_1,
                address2: row.address_2,
                city: row.city,
                state: row.state,
                zip: row.zip,
                phone: row.phone,
                website: row.website,
                latitude: row.latitude,
                longitude: row.longitude,
            })
            .collect();

        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::contains_pattern;

    #[test]
    fn plain_text_is_wrapped() {
        assert_eq!(contains_pattern("pantry"), "%pantry%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("_"), r"%\_%");
        assert_eq!(contains_pattern("%"), r"%\%%");
        assert_eq!(contains_pattern("W_st"), r"%W\_st%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
