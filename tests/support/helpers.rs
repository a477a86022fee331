// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;

use pressgate::application::ports::{cache::EdgeCache, codes::CodeGenerator, time::Clock};
use pressgate::application::services::ApplicationServices;
use pressgate::domain::article::{Article, ArticleReadRepository, ArticleWriteRepository};
use pressgate::domain::category::CategoryRepository;
use pressgate::domain::redirect::{RedirectRule, RedirectRuleSource};
use pressgate::infrastructure::codes::RandomCodeGenerator;
use pressgate::presentation::http::{routes::build_router, state::HttpState};

use super::builders::t0;
use super::mocks::{FixedClock, InMemoryArticleStore, RecordingEdge, StaticCategories, StaticRules};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_BASE_URL: &str = "https://example.test";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryArticleStore>,
    pub edge: Arc<RecordingEdge>,
}

pub struct TestAppBuilder {
    articles: Vec<Article>,
    secret: Option<String>,
    rules: Vec<RedirectRule>,
    codes: Option<Arc<dyn CodeGenerator>>,
}

/// Router wired against the in-memory mocks; the write secret defaults to
/// [`TEST_SECRET`] and the clock is pinned to [`t0`].
pub fn app(articles: Vec<Article>) -> TestAppBuilder {
    TestAppBuilder {
        articles,
        secret: Some(TEST_SECRET.to_string()),
        rules: Vec::new(),
        codes: None,
    }
}

impl TestAppBuilder {
    pub fn without_secret(mut self) -> Self {
        self.secret = None;
        self
    }

    pub fn with_secret(mut self, secret: &str) -> Self {
        self.secret = Some(secret.to_string());
        self
    }

    pub fn with_rule(mut self, source: &str, destination: &str) -> Self {
        self.rules.push(RedirectRule {
            source: source.to_string(),
            destination: destination.to_string(),
        });
        self
    }

    pub fn with_codes(mut self, codes: Arc<dyn CodeGenerator>) -> Self {
        self.codes = Some(codes);
        self
    }

    pub fn build(self) -> TestApp {
        let store = Arc::new(InMemoryArticleStore::with_articles(self.articles));
        let edge = Arc::new(RecordingEdge::default());

        let read_repo: Arc<dyn ArticleReadRepository> = store.clone();
        let write_repo: Arc<dyn ArticleWriteRepository> = store.clone();
        let categories: Arc<dyn CategoryRepository> = Arc::new(StaticCategories::default());
        let rules: Arc<dyn RedirectRuleSource> = Arc::new(StaticRules { rules: self.rules });
        let edge_port: Arc<dyn EdgeCache> = edge.clone();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(t0()));
        let codes = self
            .codes
            .unwrap_or_else(|| Arc::new(RandomCodeGenerator) as Arc<dyn CodeGenerator>);

        let services = Arc::new(ApplicationServices::new(
            read_repo,
            write_repo,
            categories,
            rules,
            edge_port,
            clock,
            codes,
            self.secret
                .map(pressgate::application::commands::articles::WriteCapability::new),
            TEST_BASE_URL.to_string(),
            Duration::from_secs(2),
        ));

        let router = build_router(HttpState { services });
        TestApp {
            router,
            store,
            edge,
        }
    }
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    payload: Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(payload.to_string())).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn post_empty(router: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("valid json body");
    (status, json)
}

pub fn cache_control(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// The view-count increment runs as a detached task; poll briefly instead
/// of racing it.
pub async fn wait_for_views(store: &InMemoryArticleStore, id: i64, expected: i64) {
    for _ in 0..100 {
        if store.get(id).map(|article| article.views) == Some(expected) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!(
        "article {id} never reached {expected} views (got {:?})",
        store.get(id).map(|article| article.views)
    );
}
