use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::Sap;
use crate::graph::Graph;

/// Represents a vertex in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
    #[serde(default)]
    pub outdegree: usize,
    #[serde(default)]
    pub indegree: usize,
    #[serde(default)]
    pub is_root: bool,
}

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Request to load a graph from edge-list text
#[derive(Debug, Deserialize)]
pub struct LoadGraphRequest {
    /// `V`, `E`, then `E` pairs `from to`, whitespace separated
    pub edge_list: String,
}

/// Pair query; IDs are signed so out-of-range input can be reported
#[derive(Debug, Deserialize)]
pub struct PairQueryRequest {
    pub v: i64,
    pub w: i64,
}

/// Set query; `null` members are rejected
#[derive(Debug, Deserialize)]
pub struct SetQueryRequest {
    pub v: Vec<Option<i64>>,
    pub w: Vec<Option<i64>>,
}

/// Query result; `length` and `ancestor` are -1 when there is no common ancestor
#[derive(Debug, Clone, Serialize)]
pub struct SapResponse {
    pub query_id: Uuid,
    pub length: i64,
    pub ancestor: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<usize>,
    pub path: Vec<usize>,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Public view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub root_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Session holding a loaded graph ready for queries
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub sap: Arc<Sap>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(sap: Sap) -> Self {
        Self {
            id: Uuid::new_v4(),
            sap: Arc::new(sap),
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        let graph = self.sap.graph();
        SessionInfo {
            id: self.id,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            root_count: graph.roots().len(),
            created_at: self.created_at,
        }
    }
}
