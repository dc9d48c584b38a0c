use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::FeedConfig;
use crate::elements::OrbitalElementRecord;
use crate::feed::error::FeedError;
use crate::feed::sources::{ElementSource, GroupCatalogSource, ObjectCatalogSource, ProxySource};
use crate::feed::store::ElementStore;

/// Refresh orchestrator: walks the source fallback chain and owns the
/// cached element set. A failing step is non-fatal; only exhausting every
/// source is reported, and even then the previous cache stays in use.
pub struct CatalogFeed {
    sources: Vec<Box<dyn ElementSource>>,
    store: ElementStore,
}

impl CatalogFeed {
    pub fn new(sources: Vec<Box<dyn ElementSource>>) -> Self {
        Self {
            sources,
            store: ElementStore::new(),
        }
    }

    /// Assemble the chain in fallback order from configuration: proxy
    /// first when configured, then the group catalog, then the per-object
    /// catalog.
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let mut sources: Vec<Box<dyn ElementSource>> = Vec::new();
        if let Some(proxy_url) = &config.proxy_url {
            sources.push(Box::new(ProxySource::new(client.clone(), proxy_url.clone())));
        }
        sources.push(Box::new(GroupCatalogSource::new(
            client.clone(),
            config.group_url.clone(),
            config.groups.clone(),
        )));
        sources.push(Box::new(ObjectCatalogSource::new(
            client,
            config.object_url.clone(),
            config.catalog_ids.clone(),
        )));

        Ok(Self::new(sources))
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    /// The element set currently serving reads; stale data is better than
    /// no data, so this survives failed refreshes untouched.
    pub fn cached(&self) -> Option<Arc<Vec<OrbitalElementRecord>>> {
        self.store.current()
    }

    /// Run the fallback chain once. Each step is attempted only if the
    /// prior step errored or came back empty.
    pub async fn refresh(&self) -> Result<Arc<Vec<OrbitalElementRecord>>, FeedError> {
        let mut failures = Vec::new();

        for source in &self.sources {
            match source.fetch().await {
                Ok(records) => {
                    log::info!(
                        "refreshed {} element records via {}",
                        records.len(),
                        source.name()
                    );
                    return Ok(self.store.replace(records));
                }
                Err(e) => {
                    log::warn!("element source {} failed: {}", source.name(), e);
                    failures.push(format!("{}: {}", source.name(), e));
                }
            }
        }

        log::warn!("element refresh exhausted all sources; serving cached set");
        Err(FeedError::AllSourcesFailed(failures.join("; ")))
    }
}
