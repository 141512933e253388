use std::sync::{Arc, OnceLock};

use anyhow::Result;
use opentelemetry::{Context, global};
use opentelemetry_otlp::{LogExporter, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, logs::SdkLoggerProvider, metrics::SdkMeterProvider, trace::SdkTracerProvider,
};
use tokio::time::Instant;

#[derive(Clone)]
pub struct Telemetry {
    service_name: String,
    otel_endpoint: String,
    tracer_provider: Arc<OnceLock<SdkTracerProvider>>,
    meter_provider: Arc<OnceLock<SdkMeterProvider>>,
    logger_provider: Arc<OnceLock<SdkLoggerProvider>>,
}

pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

impl Telemetry {
    pub fn new(service_name: impl Into<String>, otel_endpoint: String) -> Self {
        Self {
            service_name: service_name.into(),
            otel_endpoint,
            tracer_provider: Arc::new(OnceLock::new()),
            meter_provider: Arc::new(OnceLock::new()),
            logger_provider: Arc::new(OnceLock::new()),
        }
    }

    fn get_resource(&self) -> Resource {
        Resource::builder()
            .with_service_name(self.service_name.clone())
            .build()
    }

    pub fn init_tracer(&self) -> SdkTracerProvider {
        let provider = self
            .tracer_provider
            .get_or_init(|| {
                let exporter = SpanExporter::builder()
                    .with_tonic()
                    .with_endpoint(self.otel_endpoint.clone())
                    .build()
                    .expect("Failed to create span exporter");

                SdkTracerProvider::builder()
                    .with_resource(self.get_resource())
                    .with_batch_exporter(exporter)
                    .build()
            })
            .clone();

        global::set_tracer_provider(provider.clone());

        provider
    }

    pub fn init_meter(&self) -> SdkMeterProvider {
        let provider = self
            .meter_provider
            .get_or_init(|| {
                let exporter = MetricExporter::builder()
                    .with_tonic()
                    .with_endpoint(self.otel_endpoint.clone())
                    .build()
                    .expect("Failed to create metric exporter");

                SdkMeterProvider::builder()
                    .with_resource(self.get_resource())
                    .with_periodic_exporter(exporter)
                    .build()
            })
            .clone();

        global::set_meter_provider(provider.clone());

        provider
    }

    pub fn init_logger(&self) -> SdkLoggerProvider {
        self.logger_provider
            .get_or_init(|| {
                let exporter = LogExporter::builder()
                    .with_tonic()
                    .with_endpoint(self.otel_endpoint.clone())
                    .build()
                    .expect("Failed to create log exporter");

                SdkLoggerProvider::builder()
                    .with_resource(self.get_resource())
                    .with_batch_exporter(exporter)
                    .build()
            })
            .clone()
    }

    pub async fn shutdown(self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(provider) = self.tracer_provider.get()
            && let Err(e) = provider.shutdown()
        {
            errors.push(format!("tracer provider: {e}"));
        }
        if let Some(provider) = self.meter_provider.get()
            && let Err(e) = provider.shutdown()
        {
            errors.push(format!("meter provider: {e}"));
        }
        if let Some(provider) = self.logger_provider.get()
            && let Err(e) = provider.shutdown()
        {
            errors.push(format!("logger provider: {e}"));
        }

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        Ok(())
    }
}
