mod logs;
mod metrics;
mod otel;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::otel::{Telemetry, TracingContext};
