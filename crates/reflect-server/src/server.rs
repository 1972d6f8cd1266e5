use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use graphql_reflect::{Reflect, SchemaOptions};
use serde::Deserialize;
use tokio::{net::TcpListener, signal};

use crate::{
    error::{Error, Result},
    pets::{Cat, Dog},
};

pub(crate) struct AppStateInner {
    pub dogs: Arc<Vec<Dog>>,
    pub cats: Arc<Vec<Cat>>,
    pub options: SchemaOptions,
}

/// Shared by all requests. The served values are never modified.
#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    pub fn new(dogs: Vec<Dog>, cats: Vec<Cat>, options: SchemaOptions) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                dogs: Arc::new(dogs),
                cats: Arc::new(cats),
                options,
            }),
        }
    }
}

impl std::ops::Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    query: String,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/dogs", post(query_dogs))
        .route("/cats", post(query_cats))
        .with_state(state)
}

/// Starts listening on `listen_address` and serves until a termination signal is received.
pub(crate) async fn serve(listen_address: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(listen_address).await.map_err(Error::Server)?;

    tracing::info!("Dogs and cats exposed at http://{listen_address}/dogs and http://{listen_address}/cats");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(graceful_shutdown())
        .await
        .map_err(Error::Server)
}

type QueryRequest = std::result::Result<Json<QueryBody>, JsonRejection>;

async fn query_dogs(State(state): State<AppState>, body: QueryRequest) -> Response {
    execute("dogs", state.dogs.clone(), body, &state.options).await
}

async fn query_cats(State(state): State<AppState>, body: QueryRequest) -> Response {
    execute("cats", state.cats.clone(), body, &state.options).await
}

async fn execute<T: Reflect>(root_field: &str, root: T, body: QueryRequest, options: &SchemaOptions) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!("rejected request body: {rejection}");
            return bad_request("Invalid request body");
        }
    };

    match graphql_reflect::query_async_with_options(root_field, root, &body.query, options).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(error) => {
            tracing::debug!(root_field, "query failed: {error}");
            bad_request(&error.to_string())
        }
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Waits for Ctrl+C or, on unix, a termination signal.
async fn graceful_shutdown() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}
