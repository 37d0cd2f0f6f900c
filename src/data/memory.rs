//! In-process stores for driving the handlers and services in tests.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};

use super::{
    Account, AccountStore, Category, CategoryStore, Data, StakeholderRow, StakeholderStore,
    Suggestion, SuggestionStore,
};

#[derive(Default)]
pub struct Memory {
    suggestions: Mutex<Vec<Suggestion>>,
    categories: Mutex<Vec<Category>>,
    /// Rows paired with their `inactive` flag.
    stakeholders: Mutex<Vec<(StakeholderRow, bool)>>,
    accounts: Mutex<Vec<Account>>,
}

impl Memory {
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.lock().expect("categories lock") = categories;
        self
    }

    pub fn with_stakeholders(self, stakeholders: Vec<StakeholderRow>) -> Self {
        self.stakeholders
            .lock()
            .expect("stakeholders lock")
            .extend(stakeholders.into_iter().map(|row| (row, false)));
        self
    }

    pub fn with_inactive_stakeholders(self, stakeholders: Vec<StakeholderRow>) -> Self {
        self.stakeholders
            .lock()
            .expect("stakeholders lock")
            .extend(stakeholders.into_iter().map(|row| (row, true)));
        self
    }

    pub fn with_accounts(self, accounts: Vec<Account>) -> Self {
        *self.accounts.lock().expect("accounts lock") = accounts;
        self
    }

    pub fn into_data(self) -> Data {
        let memory = Arc::new(self);

        Data {
            suggestions: memory.clone(),
            categories: memory.clone(),
            stakeholders: memory.clone(),
            accounts: memory,
        }
    }
}

#[async_trait]
impl SuggestionStore for Memory {
    async fn select_all(&self) -> Result<Vec<Suggestion>> {
        Ok(self.suggestions.lock().expect("suggestions lock").clone())
    }

    async fn select_by_id(&self, id: &str) -> Result<Option<Suggestion>> {
        let id = id
            .parse::<i32>()
            .with_context(|| format!("invalid suggestion id {id:?}"))?;

        let suggestions = self.suggestions.lock().expect("suggestions lock");

        Ok(suggestions.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, fields: Map<String, Value>) -> Result<Suggestion> {
        let mut suggestions = self.suggestions.lock().expect("suggestions lock");

        let suggestion = Suggestion {
            id: suggestions.len() as i32 + 1,
            fields,
        };
        suggestions.push(suggestion.clone());

        Ok(suggestion)
    }
}

#[async_trait]
impl CategoryStore for Memory {
    async fn select_all(&self) -> Result<Vec<Category>> {
        Ok(self.categories.lock().expect("categories lock").clone())
    }
}

#[async_trait]
impl StakeholderStore for Memory {
    async fn query(&self, name: Option<&str>, category_ids: &[i32]) -> Result<Vec<StakeholderRow>> {
        let needle = name.map(|name| name.to_lowercase());

        let mut rows = self
            .stakeholders
            .lock()
            .expect("stakeholders lock")
            .iter()
            .filter(|(_, inactive)| !inactive)
            .map(|(row, _)| row)
            .filter(|row| row.categories.iter().any(|c| category_ids.contains(&c.id)))
            .filter(|row| match &needle {
                Some(needle) => row.name.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect::<Vec<_>>();

        rows.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(rows)
    }
}

#[async_trait]
impl AccountStore for Memory {
    async fn select_all(&self) -> Result<Vec<Account>> {
        let mut accounts = self.accounts.lock().expect("accounts lock").clone();
        accounts.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });

        Ok(accounts)
    }

    async fn update_roles(
        &self,
        id: i32,
        is_admin: bool,
        is_security_admin: bool,
    ) -> Result<Option<Account>> {
        let mut accounts = self.accounts.lock().expect("accounts lock");

        let Some(account) = accounts.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        account.is_admin = is_admin;
        account.is_security_admin = is_security_admin;

        Ok(Some(account.clone()))
    }
}

/// Every call fails, the way a dropped database connection would.
pub struct Unavailable;

impl Unavailable {
    pub fn into_data() -> Data {
        let unavailable = Arc::new(Unavailable);

        Data {
            suggestions: unavailable.clone(),
            categories: unavailable.clone(),
            stakeholders: unavailable.clone(),
            accounts: unavailable,
        }
    }
}

#[async_trait]
impl SuggestionStore for Unavailable {
    async fn select_all(&self) -> Result<Vec<Suggestion>> {
        bail!("connection refused")
    }

    async fn select_by_id(&self, _id: &str) -> Result<Option<Suggestion>> {
        bail!("connection refused")
    }

    async fn insert(&self, _fields: Map<String, Value>) -> Result<Suggestion> {
        bail!("connection refused")
    }
}

#[async_trait]
impl CategoryStore for Unavailable {
    async fn select_all(&self) -> Result<Vec<Category>> {
        bail!("connection refused")
    }
}

#[async_trait]
impl StakeholderStore for Unavailable {
    async fn query(&self, _name: Option<&str>, _ids: &[i32]) -> Result<Vec<StakeholderRow>> {
        bail!("connection refused")
    }
}

#[async_trait]
impl AccountStore for Unavailable {
    async fn select_all(&self) -> Result<Vec<Account>> {
        bail!("connection refused")
    }

    async fn update_roles(&self, _id: i32, _admin: bool, _sec: bool) -> Result<Option<Account>> {
        bail!("connection refused")
    }
}

pub fn category(id: i32, name: &str, inactive: bool) -> Category {
    Category {
        id,
        name: name.to_owned(),
        inactive,
    }
}

pub fn account(id: i32, email: &str, first_name: &str, last_name: &str) -> Account {
    Account {
        id,
        email: email.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        is_admin: false,
        is_security_admin: false,
        email_confirmed: true,
        created_at: Utc::now(),
    }
}

pub fn stakeholder(
    id: i32,
    name: &str,
    coords: Option<(f64, f64)>,
    categories: Vec<Category>,
) -> StakeholderRow {
    StakeholderRow {
        id,
        name: name.to_owned(),
        address1: None,
        address2: None,
        city: None,
        state: None,
        zip: None,
        phone: None,
        website: None,
        latitude: coords.map(|(lat, _)| lat),
        longitude: coords.map(|(_, lon)| lon),
        categories,
    }
}
