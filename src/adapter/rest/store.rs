//! PostgREST record store adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::StoreErrorBody;
use super::TokenCell;
use crate::config::BackendConfig;
use crate::domain::{BotConfig, Trade, User, UserId, Wallet};
use crate::error::{Error, Result};
use crate::port::{NewUser, RecordStore};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// One filtered/ordered/limited read against a named collection.
///
/// Renders to PostgREST query parameters: `select=*`, `column=eq.value`,
/// `order=column.desc`, `limit=n`.
#[derive(Debug, Default)]
struct Select {
    filters: Vec<(String, String)>,
    order_desc: Option<&'static str>,
    limit: Option<usize>,
}

impl Select {
    fn new() -> Self {
        Self::default()
    }

    fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    fn order_desc(mut self, column: &'static str) -> Self {
        self.order_desc = Some(column);
        self
    }

    fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Expect zero or one row.
    fn single(mut self) -> Self {
        self.limit = Some(1);
        self
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(self.filters.iter().cloned());
        if let Some(column) = self.order_desc {
            params.push(("order".to_string(), format!("{column}.desc")));
        }
        if let Some(n) = self.limit {
            params.push(("limit".to_string(), n.to_string()));
        }
        params
    }
}

/// Record store client against the hosted REST endpoint.
pub struct RestStore {
    http: HttpClient,
    rest_url: String,
    anon_key: String,
    token: TokenCell,
}

impl RestStore {
    #[must_use]
    pub fn new(config: &BackendConfig, token: TokenCell) -> Self {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| HttpClient::new());

        Self {
            http,
            rest_url: format!("{}/rest/v1", config.base_url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
            token,
        }
    }

    /// Bearer token for the request: the signed-in user's when present,
    /// the publishable key otherwise.
    fn bearer(&self) -> String {
        self.token.get().unwrap_or_else(|| self.anon_key.clone())
    }

    async fn select<T: DeserializeOwned>(&self, table: &str, select: Select) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.rest_url, table);
        debug!(table, "record store read");

        let response = self
            .http
            .get(&url)
            .query(&select.query())
            .header("apikey", &self.anon_key)
            .bearer_auth(self.bearer())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::store_error(response).await);
        }

        Ok(response.json::<Vec<T>>().await?)
    }

    /// Map a non-success response to a value-returned store error carrying
    /// the backend's own message.
    async fn store_error(response: reqwest::Response) -> Error {
        let status = response.status();
        let message = response
            .json::<StoreErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.details))
            .unwrap_or_else(|| format!("HTTP {status}"));
        Error::Store(message)
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn user_profile(&self, id: &UserId) -> Result<Option<User>> {
        let rows: Vec<User> = self
            .select("users", Select::new().eq("id", id).single())
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn active_wallets(&self, id: &UserId) -> Result<Vec<Wallet>> {
        self.select(
            "wallets",
            Select::new().eq("user_id", id).eq("is_active", true),
        )
        .await
    }

    async fn recent_trades(&self, id: &UserId, limit: usize) -> Result<Vec<Trade>> {
        self.select(
            "trades",
            Select::new()
                .eq("user_id", id)
                .order_desc("created_at")
                .limit(limit),
        )
        .await
    }

    async fn bot_configs(&self, id: &UserId) -> Result<Vec<BotConfig>> {
        self.select("bot_configs", Select::new().eq("user_id", id))
            .await
    }

    async fn insert_user(&self, user: &NewUser) -> Result<()> {
        let url = format!("{}/users", self.rest_url);
        debug!(user_id = %user.id, "inserting profile row");

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(self.bearer())
            .json(user)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::store_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_renders_postgrest_params() {
        let select = Select::new()
            .eq("user_id", "abc")
            .order_desc("created_at")
            .limit(10);
        assert_eq!(
            select.query(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("user_id".to_string(), "eq.abc".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn single_caps_limit_at_one() {
        let select = Select::new().eq("id", "abc").single();
        assert!(select
            .query()
            .contains(&("limit".to_string(), "1".to_string())));
    }
}
