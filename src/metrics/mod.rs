//! Feature-gated counters for [`FitnessCache`](crate::cache::FitnessCache).
//!
//! Recording, snapshotting and export are separate traits so the cache only
//! ever writes counters, tests and benches read snapshots, and monitoring
//! publishes them.
//!
//! ```text
//!   FitnessCache ──record_*──► FitnessCacheMetrics
//!                                     │ snapshot()
//!                                     ▼
//!                          FitnessMetricsSnapshot ──export──► PrometheusTextExporter
//! ```

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
