#![allow(dead_code)]

use std::sync::{Arc, Once};

use recipes::models::{AppState, Recipe};
use recipes::server::{RunningServer, Server};
use recipes::services::store::RecipeStore;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("recipes=debug")
            .with_test_writer()
            .init();
    });
}

/// A running server with its own isolated store.
pub struct TestApp {
    /// Returned address format: `http://127.0.0.1:8492`
    pub address: String,
    pub client: reqwest::Client,
    server: RunningServer,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }

    pub async fn list_recipes(&self) -> Vec<Recipe> {
        let response = self
            .client
            .get(self.url("/recipes"))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Failed to parse recipe list")
    }

    pub async fn stop(self) {
        self.server.stop().await.expect("Failed to stop server");
    }
}

/// Spawns the application on a random port. With `seeded` the store starts
/// with the fixture recipes, otherwise it starts empty.
pub async fn spawn_app(seeded: bool) -> TestApp {
    init_tracing_once();

    let store = if seeded {
        RecipeStore::with_seed()
    } else {
        RecipeStore::new()
    };
    let state = Arc::new(AppState::new(store));

    // Randomly choose an available port
    let server = Server::start("127.0.0.1:0", state)
        .await
        .expect("Failed to bind random port at localhost");

    TestApp {
        address: server.url(),
        client: reqwest::Client::new(),
        server,
    }
}
