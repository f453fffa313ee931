use std::error::Error;

use opentelemetry::{Key, KeyValue, global};
use opentelemetry_sdk::{Resource, propagation::TraceContextPropagator, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::config::{AppConfig, DistributionConfig, TracingConfig};

const DEFAULT_FILTER: &str = "info";
const VERSION_KEY: &str = "version";

/// Tracer configuration and initialization.
///
/// Handles setting up logging and span export for the authors service.
pub struct Tracer;

impl Tracer {
    /// Installs tracing according to the `tracing` section of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already set.
    pub fn install(config: &AppConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
        match config.tracing {
            TracingConfig::Memory => Ok(()),
            TracingConfig::Stdout => Self::install_stdout(&config.distribution),
        }
    }

    /// Exports spans to stdout and prints log events.
    ///
    /// Events are filtered by `RUST_LOG`, defaulting to `info`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already set.
    pub fn install_stdout(
        distribution: &DistributionConfig,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        global::set_text_map_propagator(TraceContextPropagator::new());
        global::set_tracer_provider(
            SdkTracerProvider::builder()
                .with_resource(Self::resource(distribution))
                .with_simple_exporter(SpanExporter::default())
                .build(),
        );

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().pretty().with_filter(filter))
            .try_init()?;

        Ok(())
    }

    /// Resource describing this service in exported spans.
    pub fn resource(distribution: &DistributionConfig) -> Resource {
        let builder = Resource::builder().with_service_name(distribution.name.clone());
        match &distribution.version {
            Some(version) => builder
                .with_attribute(KeyValue::new(Key::from_static_str(VERSION_KEY), version.clone()))
                .build(),
            None => builder.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use opentelemetry::Value;

    use super::*;

    fn distribution(version: Option<&str>) -> DistributionConfig {
        DistributionConfig {
            name: "authors-service".into(),
            version: version.map(Into::into),
        }
    }

    #[test]
    fn resource_attributes() {
        let resource = Tracer::resource(&distribution(Some("1.2.3")));
        assert_eq!(
            resource.get(&Key::from_static_str("service.name")),
            Some(Value::from("authors-service"))
        );
        assert_eq!(
            resource.get(&Key::from_static_str(VERSION_KEY)),
            Some(Value::from("1.2.3"))
        );

        let resource = Tracer::resource(&distribution(None));
        assert_eq!(resource.get(&Key::from_static_str(VERSION_KEY)), None);
    }
}
