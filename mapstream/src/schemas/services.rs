use std::collections::HashMap;

use serde::Deserialize;

/// Client-service descriptor from the platform configuration document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrationClient {
    pub base_url: Option<String>,
    #[serde(default)]
    pub endpoints: HashMap<String, ServiceEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    pub href: Option<String>,
    pub method: Option<String>,
    #[serde(default)]
    pub templated: bool,
}
