use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Per-operation request counters and oracle-call timing. Extraction
/// failures count responses the parser could not turn into a record.
pub struct Metrics {
    extract_requests: AtomicUsize,
    extract_failures: AtomicUsize,
    predict_requests: AtomicUsize,
    summarize_requests: AtomicUsize,

    // Timing (in microseconds)
    total_extract_time_us: AtomicU64,
    total_predict_time_us: AtomicU64,
    total_summarize_time_us: AtomicU64,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            extract_requests: AtomicUsize::new(0),
            extract_failures: AtomicUsize::new(0),
            predict_requests: AtomicUsize::new(0),
            summarize_requests: AtomicUsize::new(0),
            total_extract_time_us: AtomicU64::new(0),
            total_predict_time_us: AtomicU64::new(0),
            total_summarize_time_us: AtomicU64::new(0),
        })
    }

    pub fn record_extract(&self, duration: std::time::Duration, unparsed: bool) {
        self.extract_requests.fetch_add(1, Ordering::Relaxed);
        if unparsed {
            self.extract_failures.fetch_add(1, Ordering::Relaxed);
        }
        self.total_extract_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_predict(&self, duration: std::time::Duration) {
        self.predict_requests.fetch_add(1, Ordering::Relaxed);
        self.total_predict_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_summarize(&self, duration: std::time::Duration) {
        self.summarize_requests.fetch_add(1, Ordering::Relaxed);
        self.total_summarize_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            extract_requests: self.extract_requests.load(Ordering::Relaxed),
            extract_failures: self.extract_failures.load(Ordering::Relaxed),
            predict_requests: self.predict_requests.load(Ordering::Relaxed),
            summarize_requests: self.summarize_requests.load(Ordering::Relaxed),
            avg_extract_time_ms: avg_time_ms(&self.total_extract_time_us, &self.extract_requests),
            avg_predict_time_ms: avg_time_ms(&self.total_predict_time_us, &self.predict_requests),
            avg_summarize_time_ms: avg_time_ms(
                &self.total_summarize_time_us,
                &self.summarize_requests,
            ),
        }
    }
}

fn avg_time_ms(total_us: &AtomicU64, count: &AtomicUsize) -> f64 {
    let total = total_us.load(Ordering::Relaxed) as f64;
    let cnt = count.load(Ordering::Relaxed) as f64;
    if cnt > 0.0 { total / cnt / 1000.0 } else { 0.0 }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub extract_requests: usize,
    pub extract_failures: usize,
    pub predict_requests: usize,
    pub summarize_requests: usize,
    pub avg_extract_time_ms: f64,
    pub avg_predict_time_ms: f64,
    pub avg_summarize_time_ms: f64,
}
