use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;

/// How the stub GraphQL server answers
#[derive(Clone, Copy, Debug)]
pub enum StubMode {
    /// `raw` failed; `clean` and `agg` sit downstream of it
    AssetGraph,
    /// Every request gets this HTTP status and a non-GraphQL body
    HttpStatus(u16),
    /// 200 with both `data` and a non-empty `errors` array
    PartialErrors,
    /// Asset graph answers normally; status queries get `data` plus `errors`
    StatusErrors,
}

fn asset_graph() -> Value {
    json!({
        "data": {
            "assetNodes": [
                { "id": "1", "assetKey": { "path": ["raw"] },
                  "dependedByKeys": [{ "path": ["clean"] }] },
                { "id": "2", "assetKey": { "path": ["clean"] },
                  "dependedByKeys": [{ "path": ["agg"] }] },
                { "id": "3", "assetKey": { "path": ["agg"] },
                  "dependedByKeys": [] }
            ]
        }
    })
}

fn status_for(path: &Value) -> Value {
    let failing = path == &json!(["raw"]);
    json!({
        "assetKey": { "path": path },
        "latestMaterialization": { "runId": if failing { "run-1" } else { "run-2" } },
        "latestRun": { "id": "run-2" }
    })
}

/// Answers one GraphQL request from the fixed asset graph
pub fn respond(request: &Value) -> Value {
    match request["operationName"].as_str() {
        Some("FailingAssetsBaseQuery") => asset_graph(),
        Some("FailingAssetsStatusQuery") => {
            let infos: Vec<Value> = request["variables"]["assetKeys"]
                .as_array()
                .map(|keys| keys.iter().map(|k| status_for(&k["path"])).collect())
                .unwrap_or_default();
            json!({ "data": { "assetsLatestInfo": infos } })
        }
        _ => json!({ "errors": [{ "message": "unknown operation" }] }),
    }
}

async fn graphql_handler(
    State(mode): State<StubMode>,
    Json(request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    match mode {
        StubMode::AssetGraph => (StatusCode::OK, Json(respond(&request))),
        StubMode::HttpStatus(code) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(json!({ "message": "upstream unavailable" })),
        ),
        StubMode::StatusErrors
            if request["operationName"] == "FailingAssetsBaseQuery" =>
        {
            (StatusCode::OK, Json(respond(&request)))
        }
        StubMode::PartialErrors | StubMode::StatusErrors => {
            let data = respond(&request)["data"].clone();
            (
                StatusCode::OK,
                Json(json!({ "data": data, "errors": [{ "message": "partial" }] })),
            )
        }
    }
}

/// Starts the stub server and returns its GraphQL endpoint
pub async fn start_stub_server(mode: StubMode) -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/graphql", post(graphql_handler))
        .with_state(mode);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr: SocketAddr = listener.local_addr().expect("listener addr");
    let endpoint = format!("http://{addr}/graphql");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub server");
    });

    (endpoint, handle)
}
