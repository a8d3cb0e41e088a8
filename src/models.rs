//! JSON response bodies.

use serde::{Deserialize, Serialize};

/// Liveness state reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub version: String,
    pub build_time: String,
    pub runtime_version: String,
    pub uptime: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_wire_format() {
        let status = HealthStatus {
            status: HealthState::Healthy,
            version: "0.1.0".to_string(),
            build_time: "2025-01-01T00:00:00Z".to_string(),
            runtime_version: "rustc 1.83.0".to_string(),
            uptime: "3s".to_string(),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(
            json,
            r#"{"status":"healthy","version":"0.1.0","build_time":"2025-01-01T00:00:00Z","runtime_version":"rustc 1.83.0","uptime":"3s"}"#
        );
    }

    #[test]
    fn test_message_wire_format() {
        let json = serde_json::to_string(&Message::new("Hello, World!")).unwrap();
        assert_eq!(json, r#"{"message":"Hello, World!"}"#);
    }
}
