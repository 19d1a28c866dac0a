//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use slotgate_core::{RouteError, RouterConfigError};
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<slotgate_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("invalid routing configuration: {0}")]
    RouterConfig(#[from] RouterConfigError),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("command rejected: {0}")]
    Route(#[from] RouteError),
    #[error("failed to serialise output: {0}")]
    Serialise(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}
