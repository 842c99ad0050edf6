use std::path::PathBuf;

use tokio::net::TcpListener;
use uuid::Uuid;

use super::*;

const INDEX_HTML: &str = "<!DOCTYPE html><html><body></body></html>";

/// Scratch site directory removed on drop.
struct ScratchSite {
    root: PathBuf,
}

impl ScratchSite {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("portfolio-site-{}", Uuid::new_v4()));
        std::fs::create_dir_all(root.join("pkg")).unwrap();
        std::fs::write(root.join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(root.join("pkg/client.js"), "export default function init() {}").unwrap();
        std::fs::write(root.join("image.png"), [0x89, b'P', b'N', b'G']).unwrap();
        Self { root }
    }
}

impl Drop for ScratchSite {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

async fn spawn_host(site: &ScratchSite) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(&site.root);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let site = ScratchSite::new();
    let base = spawn_host(&site).await;

    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index_html() {
    let site = ScratchSite::new();
    let base = spawn_host(&site).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn bundle_files_are_served() {
    let site = ScratchSite::new();
    let base = spawn_host(&site).await;

    let js = reqwest::get(format!("{base}/pkg/client.js")).await.unwrap();
    assert_eq!(js.status(), reqwest::StatusCode::OK);
    assert!(js.text().await.unwrap().contains("init"));

    let image = reqwest::get(format!("{base}/image.png")).await.unwrap();
    assert_eq!(image.status(), reqwest::StatusCode::OK);
    assert_eq!(image.bytes().await.unwrap().as_ref(), &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn unknown_path_falls_back_to_index() {
    let site = ScratchSite::new();
    let base = spawn_host(&site).await;

    let resp = reqwest::get(format!("{base}/no/such/page")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let site = ScratchSite::new();
    let base = spawn_host(&site).await;

    let image = reqwest::get(format!("{base}/man.jpg")).await.unwrap();
    assert_eq!(image.status(), reqwest::StatusCode::NOT_FOUND);

    let nested = reqwest::get(format!("{base}/pkg/missing.png")).await.unwrap();
    assert_eq!(nested.status(), reqwest::StatusCode::NOT_FOUND);
    assert_ne!(nested.text().await.unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn page_shell_is_served_as_html() {
    let site = ScratchSite::new();
    let base = spawn_host(&site).await;

    let resp = reqwest::get(format!("{base}/about")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let content_type = resp.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/html"), "{content_type}");
}

#[test]
fn asset_paths_are_detected_by_extension() {
    assert!(is_asset_path("/image.png"));
    assert!(is_asset_path("/pkg/client_bg.wasm"));
    assert!(!is_asset_path("/"));
    assert!(!is_asset_path("/no/such/page"));
    assert!(!is_asset_path("/.well-known/"));
}
