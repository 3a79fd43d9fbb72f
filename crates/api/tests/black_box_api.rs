use reqwest::StatusCode;
use serde_json::json;

use apmed_api::config::ApiConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(config: ApiConfig) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = apmed_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn spawn_default() -> Self {
        Self::spawn(ApiConfig {
            bind_addr: "unused".to_string(),
            chat_upstream: None,
            catalog_download_url: Some("https://cdn.apexpromed.example/catalog.pdf".to_string()),
        })
        .await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_answers_ok() {
    let srv = TestServer::spawn_default().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn face_mask_view_expands_and_filters_variants() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/catalog/categories/face-masks/items", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let items: Vec<serde_json::Value> = res.json().await.unwrap();
    let names: Vec<&str> = items
        .iter()
        .map(|i| i["displayName"].as_str().unwrap())
        .collect();

    let three_ply = items
        .iter()
        .filter(|i| i["slug"] == "3-ply-face-masks")
        .count();
    assert_eq!(three_ply, 6);
    assert!(names.contains(&"N95 Respirator with Valve"));
    assert!(!names.contains(&"N95 Respirator Bulk Pack"));
    assert!(!names.iter().any(|n| n.contains("Goggle") || n.contains("Cap")));

    // Variant cards carry commercial fields and composite keys.
    let card = items.iter().find(|i| i["slug"] == "3-ply-face-masks").unwrap();
    assert_eq!(card["key"], "1/AP FM 01");
    assert!(card["packingPerBox"].is_string());
}

#[tokio::test]
async fn shoe_cover_view_skips_variantless_products() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let items: Vec<serde_json::Value> = client
        .get(format!("{}/catalog/categories/shoe-covers/items", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let codes: Vec<&str> = items
        .iter()
        .filter_map(|i| i["productCode"].as_str())
        .collect();
    assert_eq!(codes, ["AP SC 01", "AP SC 02", "AP SL 01"]);
    assert!(!items.iter().any(|i| i["slug"] == "plastic-shoe-cover"));
}

#[tokio::test]
async fn unknown_category_kinds_answer_400() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/catalog/categories/bandages/items", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_category_kind");
}

#[tokio::test]
async fn category_labels_follow_the_country_selection() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let label_for = |categories: &[serde_json::Value]| {
        categories
            .iter()
            .find(|c| c["key"] == "face-masks")
            .map(|c| c["label"].as_str().unwrap().to_string())
            .unwrap()
    };

    let categories: Vec<serde_json::Value> = client
        .get(format!("{}/catalog/categories", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(label_for(&categories), "Face Masks");

    let res = client
        .put(format!("{}/locale/selected", srv.base_url))
        .json(&json!({"code": "de"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let categories: Vec<serde_json::Value> = client
        .get(format!("{}/catalog/categories", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(label_for(&categories), "Gesichtsmasken");

    let res = client
        .put(format!("{}/locale/selected", srv.base_url))
        .json(&json!({"code": "zz"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unknown_country");
}

#[tokio::test]
async fn product_detail_by_slug() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/catalog/products/3-ply-face-masks", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["name"], "3 Ply Face Masks");
    assert_eq!(product["variants"].as_array().unwrap().len(), 6);

    let res = client
        .get(format!("{}/catalog/products/no-such-product", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_form_validates_then_accepts() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/contact", srv.base_url))
        .json(&json!({"name": "Dr. Rao", "message": "Bulk pricing please"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["field"], "email");

    let res = client
        .post(format!("{}/api/contact", srv.base_url))
        .json(&json!({
            "name": "Dr. Rao",
            "email": "rao@hospital.example",
            "message": "Bulk pricing please",
            "productInterest": "Surgical Gowns"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(!body["reference"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn newsletter_hands_out_the_configured_catalog_url() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/newsletter", srv.base_url))
        .json(&json!({"name": "B. Fernandes", "email": "b@clinic.example"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["data"]["catalogDownloadUrl"],
        "https://cdn.apexpromed.example/catalog.pdf"
    );

    // Without a configured URL the field is absent, and the caller skips
    // the download branch.
    let bare = TestServer::spawn(ApiConfig {
        bind_addr: "unused".to_string(),
        chat_upstream: None,
        catalog_download_url: None,
    })
    .await;
    let res = client
        .post(format!("{}/api/newsletter", bare.base_url))
        .json(&json!({"name": "B. Fernandes", "email": "b@clinic.example"}))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["data"].get("catalogDownloadUrl").is_none());
}

#[tokio::test]
async fn chat_serves_the_fallback_when_no_upstream_is_reachable() {
    // No upstream configured at all.
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/chat", srv.base_url))
        .json(&json!({"message": "Do you stock FFP2 masks?", "conversation": []}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["reply"].as_str().unwrap().contains(apmed_leads::chat::SUPPORT_PHONE));

    // Upstream configured but unreachable: same fallback, still a 200.
    let dead = TestServer::spawn(ApiConfig {
        bind_addr: "unused".to_string(),
        chat_upstream: Some("http://127.0.0.1:9/api/chat".to_string()),
        catalog_download_url: None,
    })
    .await;
    let res = client
        .post(format!("{}/api/chat", dead.base_url))
        .json(&json!({
            "message": "hello",
            "conversation": [
                {"type": "user", "content": "hello", "timestamp": "2026-03-14T09:26:53Z"}
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["reply"].as_str().unwrap().contains(apmed_leads::chat::SUPPORT_EMAIL));
}
