use std::{sync::Arc, time::Duration};

use anyhow::Result;
use log::info;
use reqwest::{Client, Proxy};

use crate::{Config, fetching::ManifestFetcher};

pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<ManifestFetcher>,
    /// For requesting anything beside manifests
    pub http_client: Arc<Client>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let mut builder = Client::builder();

        if let Some(user_agent) = &config.http.user_agent {
            builder = builder.user_agent(user_agent);
        }

        if let Some(proxy) = &config.http.proxy {
            info!("With proxy: {}", proxy);
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(timeout.into()));
        }

        let http_client = Arc::new(builder.build()?);

        Ok(Self {
            config,
            fetcher: Arc::new(ManifestFetcher::new(http_client.clone())),
            http_client,
        })
    }
}
