use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sap_graph::web::api::*;
use sap_graph::web::models::*;

const EDGE_LIST: &str = "4 3\n3 1\n1 0\n2 0\n";

async fn load(state: &AppState) -> SessionInfo {
    let request = LoadGraphRequest {
        edge_list: EDGE_LIST.to_string(),
    };
    load_graph(State(state.clone()), Json(request)).await.unwrap().0
}

#[tokio::test]
async fn test_load_and_query_pair() {
    let state = AppState::new();
    let info = load(&state).await;
    assert_eq!(info.vertex_count, 4);
    assert_eq!(info.edge_count, 3);
    assert_eq!(info.root_count, 1);

    let response = query_pair(State(state.clone()), Path(info.id), Json(PairQueryRequest { v: 3, w: 2 }))
        .await
        .unwrap()
        .0;
    assert_eq!(response.length, 3);
    assert_eq!(response.ancestor, 0);
    assert_eq!(response.path, vec![3, 1, 0, 2]);

    let graph = get_graph(State(state.clone()), Path(info.id)).await.unwrap().0;
    assert_eq!(graph.nodes.len(), 4);
    assert_eq!(graph.links.len(), 3);
    assert!(graph.nodes[0].is_root);

    let sessions = list_sessions(State(state)).await.unwrap().0;
    assert_eq!(sessions, vec![info.id]);
}

#[tokio::test]
async fn test_not_found_is_reported_as_minus_one() {
    let state = AppState::new();
    let request = LoadGraphRequest {
        edge_list: "3 1 1 0".to_string(),
    };
    let info = load_graph(State(state.clone()), Json(request)).await.unwrap().0;

    let response = query_pair(State(state), Path(info.id), Json(PairQueryRequest { v: 1, w: 2 }))
        .await
        .unwrap()
        .0;
    assert_eq!(response.length, -1);
    assert_eq!(response.ancestor, -1);
    assert!(response.path.is_empty());
}

#[tokio::test]
async fn test_set_query_and_errors() {
    let state = AppState::new();
    let info = load(&state).await;

    let request = SetQueryRequest {
        v: vec![Some(3)],
        w: vec![Some(2), Some(1)],
    };
    let response = query_sets(State(state.clone()), Path(info.id), Json(request))
        .await
        .unwrap()
        .0;
    assert_eq!(response.length, 1);
    assert_eq!(response.ancestor, 1);

    let (status, body) = query_pair(State(state.clone()), Path(info.id), Json(PairQueryRequest { v: -1, w: 0 }))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.0.error, "invalid_vertex");

    let request = SetQueryRequest {
        v: vec![Some(3), None],
        w: vec![Some(2)],
    };
    let (status, body) = query_sets(State(state.clone()), Path(info.id), Json(request))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.0.error, "invalid_argument");

    let (status, _) = get_session(State(state), Path(uuid::Uuid::new_v4())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_edge_list_and_session_limit() {
    let state = AppState::with_max_sessions(1);
    let request = LoadGraphRequest {
        edge_list: "2 1 0".to_string(),
    };
    let (status, body) = load_graph(State(state.clone()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.0.error, "malformed_edge_list");

    load(&state).await;
    let request = LoadGraphRequest {
        edge_list: EDGE_LIST.to_string(),
    };
    let (status, _) = load_graph(State(state), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_full_store_rejects_before_parsing() {
    let state = AppState::with_max_sessions(1);
    load(&state).await;

    // Malformed text still gets the capacity error, so it was never parsed
    let request = LoadGraphRequest {
        edge_list: "not an edge list".to_string(),
    };
    let (status, body) = load_graph(State(state.clone()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body.0.error, "session_limit_reached");

    let sessions = list_sessions(State(state)).await.unwrap().0;
    assert_eq!(sessions.len(), 1);
}
