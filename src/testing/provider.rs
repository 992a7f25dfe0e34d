use crate::*;
use std::time::Duration;

/// In-memory [`MetadataProvider`] with switchable failures.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// Every query fails.
    pub down: bool,
    pub failing_schemas: bool,
    /// Column query for this table fails.
    pub failing_columns: Option<String>,
    /// Sleep before answering the table query.
    pub delay: Option<Duration>,
}

impl FakeProvider {
    fn answer(&self, items: &[&str]) -> Result<Vec<String>> {
        if self.down {
            return Err(Error::Provider("connection refused".into()));
        }
        Ok(items.iter().map(|s| s.to_string()).collect())
    }
}

impl MetadataProvider for FakeProvider {
    async fn tables(&self) -> Result<Vec<String>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answer(&["users", "orders"])
    }

    async fn views(&self) -> Result<Vec<String>> {
        self.answer(&["active_users"])
    }

    async fn columns(&self, table: &str) -> Result<Vec<String>> {
        if self.failing_columns.as_deref() == Some(table) {
            return Err(Error::Provider(format!("permission denied for {table}")));
        }
        match table {
            "users" => self.answer(&["id", "name", "email"]),
            "orders" => self.answer(&["id", "user_id", "total"]),
            _ => self.answer(&[]),
        }
    }

    async fn schemas(&self) -> Result<Vec<String>> {
        if self.failing_schemas {
            return Err(Error::Provider("schemas unavailable".into()));
        }
        self.answer(&["public"])
    }

    async fn functions(&self) -> Result<Vec<String>> {
        self.answer(&["count", "now"])
    }

    async fn databases(&self) -> Result<Vec<String>> {
        self.answer(&["mydb"])
    }

    fn datatypes(&self) -> Vec<String> {
        vec!["integer".into(), "text".into()]
    }
}
