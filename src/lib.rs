pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod handler;
pub mod logging;
pub mod metrics;

// Ports and the pipeline use case
pub mod app;
// Adapters implementing the ports with reqwest, aws-sdk-s3 and tracing
pub mod infra;
