use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::FitnessMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for fitness cache snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// or forwarded to a collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        };
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(err) = writeln!(writer, "# TYPE {name} {kind}\n{name} {value}") {
            tracing::warn!(metric = %name, error = %err, "failed to write metric");
        }
    }
}

impl<W: Write + Send> MetricsExporter<FitnessMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &FitnessMetricsSnapshot) {
        self.write_metric("counter", "find_calls_total", snapshot.find_calls);
        self.write_metric("counter", "find_hits_total", snapshot.find_hits);
        self.write_metric("counter", "find_misses_total", snapshot.find_misses);
        self.write_metric("counter", "insert_calls_total", snapshot.insert_calls);
        self.write_metric("counter", "insert_new_total", snapshot.insert_new);
        self.write_metric(
            "counter",
            "duplicate_inserts_total",
            snapshot.duplicate_inserts,
        );
        self.write_metric(
            "counter",
            "evicted_entries_total",
            snapshot.evicted_entries,
        );
        self.write_metric(
            "counter",
            "forgotten_entries_total",
            snapshot.forgotten_entries,
        );
        self.write_metric("counter", "update_calls_total", snapshot.update_calls);
        self.write_metric("counter", "clear_calls_total", snapshot.clear_calls);
        self.write_metric("gauge", "cache_len", snapshot.cache_len as u64);
        self.write_metric("gauge", "capacity", snapshot.capacity as u64);
    }
}
