//! OpenTelemetry-based observability with file-based trace export.
//!
//! The widget has no network access inside the Zellij sandbox, so spans are
//! serialized as OTLP JSON and appended to a local file for offline analysis.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → RotatingFile
//! ```
//!
//! Files rotate at 10 MiB and keep three numbered backups. The filter level
//! comes from the `trace_level` plugin option (default `"info"`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: `SpanExporter` and OTLP JSON encoding
//! - [`rotating_file`]: Size-bounded line writer

pub mod exporter;
pub mod init;
pub mod rotating_file;

pub use exporter::{encode_batch, file_tracer_provider, OtlpFileExporter};
pub use init::init_tracing;
pub use rotating_file::RotatingFile;
