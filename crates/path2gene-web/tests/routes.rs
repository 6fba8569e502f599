//! Route tests against an in-memory SPARQL endpoint.
//!
//! Run with: cargo test --package path2gene-web --test routes

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{header, Request, StatusCode},
    Router,
};
use path2gene_common::Config;
use path2gene_sparql::{SparqlEndpoint, SparqlResults};
use path2gene_web::{router::build_router, state::AppState};
use tower::ServiceExt;

const CONFIG: &str = r#"
[path2gene]
sparql_server = "http://localhost:8890/sparql"
secret_key = "test"

[graph]
uniprot = "http://uniprot.org"
itag = "http://itag2.pbr.wur.nl/"
"#;

fn lit(value: &str) -> serde_json::Value {
    serde_json::json!({ "type": "literal", "value": value })
}

/// Answers by query shape; `None` simulates an unusable endpoint reply.
struct FakeStore {
    online: bool,
    queries: Mutex<Vec<String>>,
}

impl FakeStore {
    fn new(online: bool) -> Arc<Self> {
        Arc::new(Self { online, queries: Mutex::new(Vec::new()) })
    }

    fn last_query(&self) -> String {
        self.queries.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl SparqlEndpoint for FakeStore {
    async fn select(&self, query: &str) -> Option<SparqlResults> {
        self.queries.lock().unwrap().push(query.to_string());
        if !self.online {
            return None;
        }
        let bindings = if query.contains("SELECT DISTINCT ?pathdesc") {
            serde_json::json!([
                { "pathdesc": lit("Fruit ripening") },
                { "pathdesc": lit("Fruit ripening;shared") },
            ])
        } else if query.contains("SELECT DISTINCT ?gene ?desc ?pathdesc") {
            serde_json::json!([
                { "gene": lit("Solyc01g001"), "desc": lit("enzyme A, putative"), "pathdesc": lit("Fruit ripening") },
                { "gene": lit("Solyc02g002"), "desc": lit("enzyme B"), "pathdesc": lit("Fruit ripening;shared") },
            ])
        } else {
            serde_json::json!([
                { "gene": lit("Solyc03g003"), "desc": lit("<b>enzyme C</b>") },
            ])
        };
        Some(serde_json::from_value(serde_json::json!({ "results": { "bindings": bindings } })).unwrap())
    }
}

fn app(store: Arc<FakeStore>) -> Router {
    let config = Config::from_toml(CONFIG).unwrap();
    let state = AppState::with_endpoint(config, store).unwrap();
    build_router(state).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4242))))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp.headers().get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: Router, body: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_index_shows_form() {
    let (status, _, body) = get(app(FakeStore::new(true)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="pathway_name""#));
    assert!(body.contains("Pathway name (or part of it)"));
}

#[tokio::test]
async fn test_form_submit_redirects_to_search() {
    let resp = post_form(app(FakeStore::new(true)), "pathway_name=fruit+ripening").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/search/fruit%20ripening");
}

#[tokio::test]
async fn test_blank_form_submit_is_not_redirected() {
    let store = FakeStore::new(true);
    let resp = post_form(app(store.clone()), "pathway_name=+++").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("Please enter a pathway name"));
    assert!(store.last_query().is_empty());
}

#[tokio::test]
async fn test_search_lists_pathways_and_core() {
    let store = FakeStore::new(true);
    let (status, _, body) = get(app(store.clone()), "/search/ripening").await;
    assert_eq!(status, StatusCode::OK);

    let first = body.find(">Fruit ripening</a>").expect("first pathway");
    let second = body.find(">Fruit ripening;shared</a>").expect("second pathway");
    assert!(first < second);
    assert_eq!(body.matches(">Fruit ripening*</a>").count(), 1);
    assert!(body.contains(r#"href="/path/Fruit%20ripening%2A""#));
    assert!(body.contains(r#"href="/csv/Fruit%20ripening%3Bshared""#));
    assert!(!body.contains("did not return a usable answer"));
    assert!(store.last_query().contains(r#"regex(?pathdesc, "ripening", "i")"#));
}

#[tokio::test]
async fn test_search_with_failed_endpoint_renders_empty_page() {
    let (status, _, body) = get(app(FakeStore::new(false)), "/search/ripening").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("0 pathway(s) found"));
    assert!(body.contains("did not return a usable answer"));
}

#[tokio::test]
async fn test_wildcard_path_lists_genes_in_order() {
    let store = FakeStore::new(true);
    let (status, _, body) = get(app(store.clone()), "/path/Fruit%20ripening%2A").await;
    assert_eq!(status, StatusCode::OK);

    let a = body.find(">Solyc01g001<").expect("first gene");
    let b = body.find(">Solyc02g002<").expect("second gene");
    assert!(a < b);
    assert!(body.contains("2 gene(s) found"));
    assert!(store.last_query().contains(r#"regex(?pathdesc, "Fruit ripening", "i")"#));
}

#[tokio::test]
async fn test_exact_path_keeps_slashes_and_escapes_html() {
    let store = FakeStore::new(true);
    let (status, _, body) = get(app(store.clone()), "/path/Glycolysis/step%202").await;
    assert_eq!(status, StatusCode::OK);

    assert!(store.last_query().contains(r#"rdfs:comment "Glycolysis/step 2" ."#));
    assert!(body.contains("&lt;b&gt;enzyme C"));
    assert!(!body.contains("<b>enzyme C</b>"));
}

#[tokio::test]
async fn test_path_with_failed_endpoint_is_empty_report() {
    let (status, _, body) = get(app(FakeStore::new(false)), "/path/ripening*").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No genes found."));
    assert!(body.contains("did not return a usable answer"));
}

#[tokio::test]
async fn test_csv_export() {
    let (status, content_type, body) = get(app(FakeStore::new(true)), "/csv/Fruit%20ripening*").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/excel"));

    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("Gene ID, Gene description, Pathway"));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.len() == 3));
    assert_eq!(&rows[0][0], "Solyc01g001");
    assert_eq!(&rows[0][1], "enzyme A, putative");
    assert_eq!(&rows[1][2], "Fruit ripening;shared");
}

#[tokio::test]
async fn test_csv_with_failed_endpoint_is_header_only() {
    let (status, _, body) = get(app(FakeStore::new(false)), "/csv/ripening*").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Gene ID, Gene description, Pathway\n");
}
