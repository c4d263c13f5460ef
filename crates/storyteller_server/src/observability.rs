//! Logging and tracing initialization.

#[cfg(feature = "otel")]
use opentelemetry::{KeyValue, global, trace::TracerProvider};
#[cfg(feature = "otel")]
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
#[cfg(feature = "otel")]
use opentelemetry_stdout::SpanExporter;
use std::env;
use storyteller_error::{ServerError, ServerErrorKind};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging and tracing.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name for telemetry attribution
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON-formatted logs
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: false,
        }
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

/// Initialize logging with custom configuration.
///
/// This sets up:
/// - An `EnvFilter` from `RUST_LOG`, falling back to the configured level
/// - Text or JSON formatted output
/// - With the `otel` feature, an OpenTelemetry bridge exporting spans to stdout
///
/// # Errors
///
/// Returns error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_observability_with_config(config: ObservabilityConfig) -> Result<(), ServerError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| observability_error(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    #[cfg(feature = "otel")]
    {
        let resource = Resource::builder()
            .with_service_name(config.service_name.clone())
            .with_attributes(vec![KeyValue::new(
                "service.version",
                config.service_version.clone(),
            )])
            .build();

        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_resource(resource)
            .build();
        global::set_tracer_provider(provider.clone());

        let tracer = provider.tracer(config.service_name.clone());
        registry
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()
            .map_err(|e| observability_error(e.to_string()))?;
    }

    #[cfg(not(feature = "otel"))]
    registry
        .try_init()
        .map_err(|e| observability_error(e.to_string()))?;

    tracing::info!(
        service_name = %config.service_name,
        service_version = %config.service_version,
        json_logs = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}

#[track_caller]
fn observability_error(message: String) -> ServerError {
    ServerError::new(ServerErrorKind::Observability(message))
}
