//! Network messages - communication between App and Network layers

use crate::models::{Exchange, RequestPlan};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Execute a validated request
    Dispatch { id: u64, plan: RequestPlan },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The request completed and its body was fully read
    Completed { id: u64, exchange: Exchange },
    /// Transport or read failure; the message is passed through as-is
    Failed {
        id: u64,
        message: String,
        elapsed_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
