use serde::{Deserialize, Serialize};

/// Fixed status line reported by the health endpoint.
pub const STATUS_MESSAGE: &str = "Smart Card Tunisia API is running";

/// Body payload for the `/api/health` endpoint.
///
/// Serializes to `{"message":"Smart Card Tunisia API is running"}`. The key
/// order and exact text are part of the endpoint's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Human-readable status line.
    pub message: String,
}

impl HealthStatus {
    /// The canonical payload, identical on every invocation.
    pub fn running() -> Self {
        HealthStatus {
            message: STATUS_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_the_exact_contract_text() {
        let json = serde_json::to_string(&HealthStatus::running()).expect("serializable");
        assert_eq!(json, r#"{"message":"Smart Card Tunisia API is running"}"#);
    }

    #[test]
    fn test_every_construction_serializes_identically() {
        let first = serde_json::to_string(&HealthStatus::running()).expect("serializable");
        let second = serde_json::to_string(&HealthStatus::running()).expect("serializable");
        assert_eq!(first, second);
    }
}
