use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{AncestralPath, Sap};
use crate::boundary;
use crate::graph::{Digraph, Graph};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "state_poisoned", "Session store is unavailable".to_string()))
    }

    fn check_capacity(&self, sessions: &HashMap<Uuid, Session>) -> Result<(), ApiError> {
        if sessions.len() >= self.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions may be open", self.max_sessions),
            ));
        }
        Ok(())
    }

    fn sap(&self, session_id: &Uuid) -> Result<Arc<Sap>, ApiError> {
        let sessions = self.sessions()?;
        sessions
            .get(session_id)
            .map(|session| Arc::clone(&session.sap))
            .ok_or_else(session_not_found)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(load_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/sap/:session_id", post(query_pair))
        .route("/api/sap/:session_id/sets", post(query_sets))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Load a graph from edge-list text into a new session
pub async fn load_graph(
    State(state): State<AppState>,
    Json(request): Json<LoadGraphRequest>,
) -> Result<Json<SessionInfo>, ApiError> {
    state.check_capacity(&*state.sessions()?)?;

    let graph: Digraph = request.edge_list.parse().map_err(|err| error_response(&err))?;
    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let session = Session::new(Sap::from_digraph(graph));
    let info = session.info();

    // Other loads may have finished while this one was parsing
    let mut sessions = state.sessions()?;
    state.check_capacity(&sessions)?;
    sessions.insert(session.id, session);

    Ok(Json(info))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sap = state.sap(&session_id)?;
    Ok(Json(convert_graph_to_web(sap.graph())))
}

/// Shortest ancestral path between two vertices
pub async fn query_pair(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PairQueryRequest>,
) -> Result<Json<SapResponse>, ApiError> {
    let sap = state.sap(&session_id)?;
    let n = sap.graph().vertex_count();

    let start_time = Instant::now();
    let result = boundary::vertex(request.v, n)
        .and_then(|v| Ok((v, boundary::vertex(request.w, n)?)))
        .and_then(|(v, w)| sap.query(v, w))
        .map_err(|err| error_response(&err))?;

    Ok(Json(to_response(result, start_time)))
}

/// Shortest ancestral path between two vertex sets
pub async fn query_sets(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SetQueryRequest>,
) -> Result<Json<SapResponse>, ApiError> {
    let sap = state.sap(&session_id)?;
    let n = sap.graph().vertex_count();

    let start_time = Instant::now();
    let result = boundary::vertex_set(request.v, n)
        .and_then(|v| Ok((v, boundary::vertex_set(request.w, n)?)))
        .and_then(|(v, w)| sap.query_sets(v, w))
        .map_err(|err| error_response(&err))?;

    Ok(Json(to_response(result, start_time)))
}

/// List all active sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.sessions()?;
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let sessions = state.sessions()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.info())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn to_response(result: Option<AncestralPath>, start_time: Instant) -> SapResponse {
    let execution_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    match result {
        Some(found) => SapResponse {
            query_id: Uuid::new_v4(),
            length: boundary::to_sentinel(Some(found.length)),
            ancestor: boundary::to_sentinel(Some(found.ancestor)),
            from: Some(found.from),
            to: Some(found.to),
            path: found.path,
            execution_time_ms,
        },
        None => SapResponse {
            query_id: Uuid::new_v4(),
            length: boundary::NOT_FOUND,
            ancestor: boundary::NOT_FOUND,
            from: None,
            to: None,
            path: Vec::new(),
            execution_time_ms,
        },
    }
}

fn convert_graph_to_web(graph: &Digraph) -> WebGraph {
    let nodes = (0..graph.vertex_count())
        .map(|i| WebNode {
            id: i,
            label: format!("Vertex {}", i),
            outdegree: graph.outdegree(i),
            indegree: graph.indegree(i).unwrap_or(0),
            is_root: graph.outdegree(i) == 0,
        })
        .collect();

    let links = graph
        .edges()
        .map(|(source, target)| WebEdge { source, target })
        .collect();

    WebGraph { nodes, links }
}

fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::InvalidVertex { .. } => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
        Error::InvalidEdge(_, _) => (StatusCode::BAD_REQUEST, "invalid_edge"),
        Error::Parse(_) => (StatusCode::BAD_REQUEST, "malformed_edge_list"),
        Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
    };
    api_error(status, code, err.to_string())
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}
