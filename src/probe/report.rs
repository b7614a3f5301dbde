// Machine-readable summary of one probe run
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub shape: Vec<usize>,
    pub device: String,
    pub min: f32,
    pub max: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AcceleratorStatus {
    Available {
        backend: String,
        device: String,
        value: f32,
    },
    Unavailable {
        backend: String,
        message: String,
    },
}

impl AcceleratorStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, AcceleratorStatus::Available { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub sample: SampleSummary,
    pub accelerator: AcceleratorStatus,
    pub compiled_backends: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_tagged() {
        let status = AcceleratorStatus::Unavailable {
            backend: "metal".to_string(),
            message: "MPS device not found.".to_string(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["backend"], "metal");
        assert!(!status.is_available());
    }
}
