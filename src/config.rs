use anyhow::Context;
use dotenv::dotenv;
use serde::Deserialize;
use tracing::warn;

#[derive(Deserialize)]
pub struct EnvironmentVariables {
    pub database_url: String,
    pub front_base_url: String,
    pub port: Option<u16>,
}

pub struct Config {
    pub database_url: String,
    pub front_base_url: String,
    pub port: u16,
}

impl Config {
    pub fn new() -> Result<Self, anyhow::Error> {
        let _ = dotenv().map_err(|err| warn!("error loading .env: {:?}", err));

        let envs =
            envy::from_env::<EnvironmentVariables>().context("invalid environment variables")?;

        return Ok(Config::from(envs));
    }
}

impl From<EnvironmentVariables> for Config {
    fn from(envs: EnvironmentVariables) -> Self {
        Config {
            database_url: envs.database_url,
            front_base_url: envs.front_base_url,
            port: envs.port.unwrap_or(8000),
        }
    }
}
