//! Plugin lifecycle and refresh orchestration.

use crate::PluginConfig;
use mixmoji_cache::{MetadataCache, RefreshOutcome};
use mixmoji_core::MetadataStore;
use mixmoji_error::{MixmojiResult, StorageError, StorageErrorKind};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

/// The Mixmoji plugin core.
///
/// Owns the metadata cache, the in-memory store, and the single-flight guard
/// that keeps the periodic timer and manual refreshes from racing on the
/// metadata/descriptor file pair.
///
/// # Example
///
/// ```rust,ignore
/// use mixmoji_bot::{MixmojiPlugin, PluginConfig};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let plugin = Arc::new(MixmojiPlugin::new(PluginConfig::default()));
///     plugin.bootstrap().await?;
///     let scheduler = plugin.spawn_scheduler();
///
///     // Host command dispatch calls plugin.mix(..) / plugin.refresh_now(..)
///
///     if let Some(handle) = scheduler {
///         handle.abort();
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MixmojiPlugin {
    config: PluginConfig,
    cache: MetadataCache,
    store: MetadataStore,
    refresh_lock: Mutex<()>,
}

impl MixmojiPlugin {
    /// Create a plugin from configuration.
    ///
    /// Floors are applied to the configured interval and timeout; nothing
    /// touches the network or disk until [`bootstrap`](Self::bootstrap).
    pub fn new(config: PluginConfig) -> Self {
        let config = config.normalized();
        let cache = MetadataCache::new(
            config.resolved_data_dir(),
            config.metadata_url().clone(),
            config.timeout(),
        );
        Self {
            config,
            cache,
            store: MetadataStore::new(),
            refresh_lock: Mutex::new(()),
        }
    }

    /// The active configuration (after floor clamping).
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// The in-memory metadata store.
    pub fn store(&self) -> &MetadataStore {
        &self.store
    }

    /// The on-disk cache controller.
    pub fn cache(&self) -> &MetadataCache {
        &self.cache
    }

    /// Prepare the plugin for serving lookups.
    ///
    /// With no metadata file on disk, downloads one first; a refresh that
    /// produces nothing while the file is still absent is a failure since
    /// lookups cannot be served without metadata. With a file present, loads
    /// it directly with no network call.
    ///
    /// # Errors
    ///
    /// Any fetch, storage, or parse failure propagates; the plugin must not
    /// serve lookups after a failed bootstrap.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) -> MixmojiResult<()> {
        if !self.cache.has_metadata().await {
            info!("No cached metadata, downloading");
            if self.cache.refresh().await? == RefreshOutcome::NotModified
                && !self.cache.has_metadata().await
            {
                return Err(StorageError::new(StorageErrorKind::MissingMetadata(
                    self.cache.metadata_path().display().to_string(),
                ))
                .into());
            }
        }

        let doc = self.cache.read_document().await?;
        self.store.load(doc);
        info!("Metadata store ready");
        Ok(())
    }

    /// Run one refresh pass and report whether an update occurred.
    ///
    /// Shared by the periodic timer and the host's manual refresh command.
    /// The pass holds the single-flight guard: revalidate the cache, and on
    /// new content reload the store from the freshly written file. An
    /// unchanged upstream leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Fetch, storage, and parse failures propagate to the caller.
    #[instrument(skip(self))]
    pub async fn refresh_now(&self) -> MixmojiResult<RefreshOutcome> {
        let _guard = self.refresh_lock.lock().await;

        let outcome = self.cache.refresh().await?;
        if outcome == RefreshOutcome::Updated {
            let doc = self.cache.read_document().await?;
            self.store.load(doc);
        }
        Ok(outcome)
    }

    /// Spawn the background refresh loop.
    ///
    /// Returns `None` when `auto_update` is off. The loop runs one refresh
    /// pass per interval tick and never terminates on a failed tick; the
    /// returned handle lets the host abort it on shutdown.
    pub fn spawn_scheduler(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if !*self.config.auto_update() {
            info!("Auto-update disabled, not spawning scheduler");
            return None;
        }

        let plugin = Arc::clone(self);
        let period = self.config.update_interval();
        info!(period_secs = period.as_secs(), "Spawning metadata refresh scheduler");

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately; bootstrap already loaded.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match plugin.refresh_now().await {
                    Ok(outcome) => info!(%outcome, "Scheduled metadata refresh"),
                    Err(e) => warn!(error = %e, "Scheduled metadata refresh failed"),
                }
            }
        }))
    }
}
