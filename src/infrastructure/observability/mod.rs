use crate::config::Config;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

/// Lifecycle transitions applied, labelled by `action` and `content_type`
pub const CONTENT_TRANSITIONS_TOTAL: &str = "coursedesk_content_transitions_total";
/// Audit or notification writes that failed after a status change, labelled by `sink`
pub const SIDE_EFFECT_FAILURES_TOTAL: &str = "coursedesk_side_effect_failures_total";
/// Grade writes, labelled by the submission `status` they started from
pub const SUBMISSIONS_GRADED_TOTAL: &str = "coursedesk_submissions_graded_total";

const DEFAULT_FILTER: &str = "coursedesk=debug,sqlx=warn";

pub struct ObservabilityGuard;

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        shutdown();
    }
}

pub fn init(config: &Config) -> anyhow::Result<ObservabilityGuard> {
    init_tracing(config)?;
    init_metrics(config)?;
    Ok(ObservabilityGuard)
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    // Optional OTLP layer for distributed tracing
    if let Some(endpoint) = &config.otel_exporter_endpoint {
        let exporter = opentelemetry_otlp::new_exporter()
            .tonic()
            .with_endpoint(endpoint);

        let tracer = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(exporter)
            .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
                KeyValue::new("service.name", config.service_name.clone()),
                KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            ])))
            .install_batch(runtime::Tokio)?;

        let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .try_init()?;
    } else {
        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

fn init_metrics(config: &Config) -> anyhow::Result<()> {
    let Some(port) = config.metrics_port else {
        describe_metrics();
        tracing::debug!("METRICS_PORT not set; metrics stay in-process");
        return Ok(());
    };

    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()?;
    describe_metrics();

    tracing::info!("Metrics exporter (Prometheus) started on port {}", port);
    Ok(())
}

fn describe_metrics() {
    metrics::describe_counter!(
        CONTENT_TRANSITIONS_TOTAL,
        "Content lifecycle transitions applied"
    );
    metrics::describe_counter!(
        SIDE_EFFECT_FAILURES_TOTAL,
        "Audit or notification writes that failed after a status change"
    );
    metrics::describe_counter!(SUBMISSIONS_GRADED_TOTAL, "Submission grades written");
}

pub fn shutdown() {
    global::shutdown_tracer_provider();
}
