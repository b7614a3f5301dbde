// mps-check - verifies the candle tensor stack and the Metal (MPS) backend
pub mod config;
pub mod logger;
pub mod probe;
