use async_trait::async_trait;
use reqwest::Client;

use crate::elements::{parse_catalog, OrbitalElementRecord};
use crate::feed::error::FeedError;

/// One step of the refresh fallback chain.
#[async_trait]
pub trait ElementSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self) -> Result<Vec<OrbitalElementRecord>, FeedError>;
}

/// Operator-controlled proxy endpoint serving a whole catalog body.
pub struct ProxySource {
    client: Client,
    url: String,
}

impl ProxySource {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ElementSource for ProxySource {
    fn name(&self) -> &str {
        "proxy"
    }

    async fn fetch(&self) -> Result<Vec<OrbitalElementRecord>, FeedError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let records = parse_catalog(&body);
        if records.is_empty() {
            return Err(FeedError::Empty);
        }
        Ok(records)
    }
}

/// Public catalog service queried one group at a time. A failing group is
/// skipped; the step only fails when no group yields records.
pub struct GroupCatalogSource {
    client: Client,
    base_url: String,
    groups: Vec<String>,
}

impl GroupCatalogSource {
    pub fn new(client: Client, base_url: String, groups: Vec<String>) -> Self {
        Self {
            client,
            base_url,
            groups,
        }
    }
}

#[async_trait]
impl ElementSource for GroupCatalogSource {
    fn name(&self) -> &str {
        "group-catalog"
    }

    async fn fetch(&self) -> Result<Vec<OrbitalElementRecord>, FeedError> {
        let mut records = Vec::new();

        for group in &self.groups {
            let url = format!("{}?GROUP={}&FORMAT=tle", self.base_url, group);
            match fetch_text(&self.client, &url).await {
                Ok(body) => records.extend(parse_catalog(&body)),
                Err(e) => {
                    log::warn!("group '{}' fetch failed: {}", group, e);
                }
            }
        }

        if records.is_empty() {
            return Err(FeedError::Empty);
        }
        Ok(records)
    }
}

/// Secondary catalog service queried per object. Last resort: one request
/// per configured catalog id, failures skipped individually.
pub struct ObjectCatalogSource {
    client: Client,
    base_url: String,
    catalog_ids: Vec<u64>,
}

impl ObjectCatalogSource {
    pub fn new(client: Client, base_url: String, catalog_ids: Vec<u64>) -> Self {
        Self {
            client,
            base_url,
            catalog_ids,
        }
    }
}

#[async_trait]
impl ElementSource for ObjectCatalogSource {
    fn name(&self) -> &str {
        "object-catalog"
    }

    async fn fetch(&self) -> Result<Vec<OrbitalElementRecord>, FeedError> {
        let mut records = Vec::new();

        for id in &self.catalog_ids {
            let url = format!("{}?CATNR={}&FORMAT=tle", self.base_url, id);
            match fetch_text(&self.client, &url).await {
                Ok(body) => records.extend(parse_catalog(&body)),
                Err(e) => {
                    log::warn!("object {} fetch failed: {}", id, e);
                }
            }
        }

        if records.is_empty() {
            return Err(FeedError::Empty);
        }
        Ok(records)
    }
}

async fn fetch_text(client: &Client, url: &str) -> Result<String, FeedError> {
    Ok(client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?)
}
