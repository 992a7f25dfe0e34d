//! Background metadata refresh.
//!
//! The host owns the database connection; it exposes schema queries through
//! [`MetadataProvider`] and this module turns them into a fresh [`Metadata`]
//! snapshot under a deadline. The current snapshot is only replaced once a
//! new one is complete, so a failed or slow refresh leaves completion working
//! on the previous picture.
use super::*;
use std::{future::Future, time::Duration};
use tokio::{task::JoinHandle, time::Instant};

/// Live schema queries supplied by the host.
pub trait MetadataProvider: Send + Sync {
    fn tables(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
    fn views(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
    fn columns(&self, table: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
    fn schemas(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
    fn functions(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
    fn databases(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
    /// Datatypes are usually a static list per dialect.
    fn datatypes(&self) -> Vec<String>;
}

/// Inputs to a refresh that do not come from the database.
#[derive(Debug, Clone)]
pub struct RefreshOptions {
    pub timeout: Duration,
    /// Backslash commands known to the host's command registry.
    pub specials: Vec<SpecialCommand>,
    /// Saved query names.
    pub favorites: Vec<String>,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            specials: Vec::new(),
            favorites: Vec::new(),
        }
    }
}

impl RefreshOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            timeout: settings.refresh_timeout(),
            ..Self::default()
        }
    }
}

/// Build a new snapshot from `provider`.
///
/// A category whose query fails is logged and left empty. If every list
/// query fails the provider is considered unreachable and the first error is
/// returned. Exceeding `options.timeout` yields [`Error::Timeout`].
pub async fn refresh<P: MetadataProvider>(provider: &P, options: &RefreshOptions) -> Result<Metadata> {
    debug!("Refreshing completion metadata");
    let started = Instant::now();
    let meta = tokio::time::timeout(options.timeout, collect(provider, options))
        .await
        .map_err(|_| Error::Timeout(options.timeout))??;
    debug!(
        "Completion metadata refreshed in {:#.2?}: {} tables, {} views, {} functions",
        started.elapsed(),
        meta.tables.len(),
        meta.views.len(),
        meta.functions.len()
    );
    Ok(meta)
}

async fn collect<P: MetadataProvider>(provider: &P, options: &RefreshOptions) -> Result<Metadata> {
    let mut failures = Failures::default();
    let mut meta = Metadata {
        tables: failures.check("tables", provider.tables().await),
        views: failures.check("views", provider.views().await),
        schemas: failures.check("schemas", provider.schemas().await),
        functions: failures.check("functions", provider.functions().await),
        databases: failures.check("databases", provider.databases().await),
        datatypes: provider.datatypes(),
        specials: options.specials.clone(),
        favorites: options.favorites.clone(),
        ..Metadata::default()
    };
    if let Some(err) = failures.all_failed() {
        return Err(err);
    }

    for table in &meta.tables {
        match provider.columns(table).await {
            Ok(cols) => {
                meta.columns.insert(table.clone(), cols);
            }
            Err(e) => warn!("Failed to load columns of {table} for completion: {e}"),
        }
    }
    Ok(meta)
}

#[derive(Default)]
struct Failures {
    attempted: usize,
    first: Option<Error>,
    count: usize,
}

impl Failures {
    fn check(&mut self, what: &str, result: Result<Vec<String>>) -> Vec<String> {
        self.attempted += 1;
        result.unwrap_or_else(|e| {
            warn!("Failed to load {what} for completion: {e}");
            self.count += 1;
            self.first.get_or_insert(e);
            Vec::new()
        })
    }

    fn all_failed(self) -> Option<Error> {
        (self.count == self.attempted).then_some(self.first).flatten()
    }
}

impl MetadataHandle {
    /// Refresh from `provider` and swap the result in. On error the current
    /// snapshot stays in place.
    pub async fn refresh_from<P: MetadataProvider>(
        &self,
        provider: &P,
        options: &RefreshOptions,
    ) -> Result {
        match refresh(provider, options).await {
            Ok(meta) => {
                self.replace(meta);
                Ok(())
            }
            Err(e) => {
                warn!("Keeping previous completion metadata: {e}");
                Err(e)
            }
        }
    }
}

/// Run [`MetadataHandle::refresh_from`] on a tokio task.
pub fn spawn_refresh<P: MetadataProvider + 'static>(
    handle: MetadataHandle,
    provider: Arc<P>,
    options: RefreshOptions,
) -> JoinHandle<Result> {
    tokio::spawn(async move { handle.refresh_from(provider.as_ref(), &options).await })
}
