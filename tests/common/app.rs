use std::net::SocketAddr;
use std::time::Duration;

use axum_test::TestServer;
use portfolio_gateway::build_router;
use portfolio_gateway::config::Config;
use portfolio_gateway::state::AppState;
use wiremock::MockServer;

/// Test configuration pointing the gateway at `catalog_api_url`
pub fn test_config(catalog_api_url: &str) -> Config {
    Config {
        catalog_api_url: catalog_api_url.trim_end_matches('/').to_string(),
        upstream_timeout: None,
        gateway_url: "http://127.0.0.1:3000".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// A base URL nothing is listening on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind free port");
    let addr = listener.local_addr().expect("Failed to read free port");
    drop(listener);
    format!("http://{addr}")
}

/// Test application wrapper
#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub upstream: Option<MockServer>,
}

#[allow(dead_code)]
impl TestApp {
    /// Gateway in front of a mock catalog
    pub async fn new() -> Self {
        let upstream = MockServer::start().await;
        let mut app = Self::with_upstream_url(&upstream.uri());
        app.upstream = Some(upstream);
        app
    }

    /// Gateway in front of a mock catalog, with a client timeout
    pub async fn with_upstream_timeout(timeout: Duration) -> Self {
        let upstream = MockServer::start().await;
        let config = Config {
            upstream_timeout: Some(timeout),
            ..test_config(&upstream.uri())
        };
        let mut app = Self::with_config(config);
        app.upstream = Some(upstream);
        app
    }

    /// Gateway whose catalog refuses connections
    pub fn unreachable() -> Self {
        Self::with_upstream_url(&unreachable_url())
    }

    fn with_upstream_url(url: &str) -> Self {
        Self::with_config(test_config(url))
    }

    fn with_config(config: Config) -> Self {
        let state = AppState::new(config).expect("Failed to create test app state");
        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            state,
            upstream: None,
        }
    }

    pub fn upstream(&self) -> &MockServer {
        self.upstream.as_ref().expect("Test app has no mock upstream")
    }
}

/// Serve the gateway on a real socket, for clients that need a URL
#[allow(dead_code)]
pub async fn spawn_gateway(catalog_api_url: &str) -> String {
    let state = AppState::new(test_config(catalog_api_url)).expect("Failed to create app state");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind gateway");
    let addr: SocketAddr = listener.local_addr().expect("Failed to read gateway address");

    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("Gateway crashed");
    });

    format!("http://{addr}")
}
