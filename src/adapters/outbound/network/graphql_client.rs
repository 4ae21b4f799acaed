use crate::asset_health::domain::{AssetKey, AssetNode, AssetStatus};
use crate::ports::outbound::AssetGraphRepository;
use crate::shared::error::AssetError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const BASE_OPERATION: &str = "FailingAssetsBaseQuery";
const STATUS_OPERATION: &str = "FailingAssetsStatusQuery";

const BASE_QUERY: &str = r#"
query FailingAssetsBaseQuery {
  assetNodes {
    id
    assetKey {
      path
    }
    dependedByKeys {
      path
    }
  }
}
"#;

const STATUS_QUERY: &str = r#"
query FailingAssetsStatusQuery($assetKeys: [AssetKeyInput!]!) {
  assetsLatestInfo(assetKeys: $assetKeys) {
    assetKey {
      path
    }
    latestMaterialization {
      runId
    }
    latestRun {
      id
    }
  }
}
"#;

/// GraphQL client for the asset graph API of an orchestration server
///
/// Implements the AssetGraphRepository port with two queries: one for every
/// asset node and its downstream edges, one for the latest run info of a
/// list of keys. Retries are left to the caller; timeouts are enforced by
/// the underlying HTTP client.
pub struct DagsterGraphQlClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DagsterGraphQlClient {
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:3000/graphql";
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the given GraphQL endpoint
    ///
    /// # Errors
    /// Returns an error if the endpoint is not an http(s) URL or the HTTP
    /// client cannot be built
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let parsed = reqwest::Url::parse(endpoint).map_err(|e| AssetError::Validation {
            message: format!("invalid endpoint URL '{}': {}", endpoint, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AssetError::Validation {
                message: format!(
                    "endpoint URL '{}' must use http or https, got '{}'",
                    endpoint,
                    parsed.scheme()
                ),
            }
            .into());
        }

        let user_agent = format!("failing-assets/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one GraphQL operation and decodes its `data`
    async fn execute<V, T>(&self, operation: &str, query: &str, variables: V) -> Result<T>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let request = GraphQlRequest {
            operation_name: operation,
            query,
            variables,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssetError::EndpointRequest {
                endpoint: self.endpoint.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::EndpointRequest {
                endpoint: self.endpoint.clone(),
                details: format!("{} returned status code {}", operation, status),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| AssetError::EndpointRequest {
            endpoint: self.endpoint.clone(),
            details: e.to_string(),
        })?;

        decode_response(operation, &body)
    }
}

#[async_trait]
impl AssetGraphRepository for DagsterGraphQlClient {
    async fn fetch_asset_nodes(&self) -> Result<Vec<AssetNode>> {
        let data: AssetNodesData = self
            .execute(BASE_OPERATION, BASE_QUERY, serde_json::json!({}))
            .await?;
        Ok(data.asset_nodes.into_iter().map(AssetNode::from).collect())
    }

    async fn fetch_asset_statuses(&self, asset_keys: &[AssetKey]) -> Result<Vec<AssetStatus>> {
        if asset_keys.is_empty() {
            return Ok(Vec::new());
        }

        let data: AssetsLatestInfoData = self
            .execute(
                STATUS_OPERATION,
                STATUS_QUERY,
                StatusVariables { asset_keys },
            )
            .await?;
        Ok(data
            .assets_latest_info
            .into_iter()
            .map(AssetStatus::from)
            .collect())
    }
}

/// Decodes a GraphQL response body, turning `errors` into an error
fn decode_response<T: DeserializeOwned>(operation: &str, body: &str) -> Result<T> {
    let response: GraphQlResponse<T> = serde_json::from_str(body)
        .with_context(|| format!("Failed to parse {} response", operation))?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(AssetError::GraphQl {
            operation: operation.to_string(),
            messages: messages.join("; "),
        }
        .into());
    }

    response
        .data
        .ok_or_else(|| anyhow::anyhow!("{} response contained no data", operation))
}

// GraphQL request/response structures

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, V> {
    operation_name: &'a str,
    query: &'a str,
    variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusVariables<'a> {
    asset_keys: &'a [AssetKey],
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetNodesData {
    asset_nodes: Vec<WireAssetNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAssetNode {
    id: String,
    asset_key: AssetKey,
    #[serde(default)]
    depended_by_keys: Vec<AssetKey>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetsLatestInfoData {
    assets_latest_info: Vec<WireLatestInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLatestInfo {
    asset_key: AssetKey,
    #[serde(default)]
    latest_materialization: Option<WireMaterialization>,
    #[serde(default)]
    latest_run: Option<WireRun>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMaterialization {
    run_id: String,
}

#[derive(Debug, Deserialize)]
struct WireRun {
    id: String,
}

impl From<WireAssetNode> for AssetNode {
    fn from(node: WireAssetNode) -> Self {
        AssetNode::new(node.id, node.asset_key, node.depended_by_keys)
    }
}

impl From<WireLatestInfo> for AssetStatus {
    fn from(info: WireLatestInfo) -> Self {
        AssetStatus::new(
            info.asset_key,
            info.latest_materialization.map(|m| m.run_id),
            info.latest_run.map(|r| r.id),
        )
    }
}
