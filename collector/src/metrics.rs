use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Histogram, HistogramOpts, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref MEASUREMENTS_TOTAL: Counter = Counter::with_opts(Opts::new(
        "collector_measurements_total",
        "Total measurements accepted and stored"
    ))
    .unwrap();
    pub static ref REJECTED_TOTAL: Counter = Counter::with_opts(Opts::new(
        "collector_rejected_total",
        "Total measurements rejected by validation"
    ))
    .unwrap();
    pub static ref DB_FAILURES_TOTAL: Counter = Counter::with_opts(Opts::new(
        "collector_db_failures_total",
        "Total database insert failures"
    ))
    .unwrap();
    pub static ref INSERT_LATENCY_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "collector_insert_latency_seconds",
            "Time taken to insert a measurement into the DB"
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0
        ])
    )
    .unwrap();
}

pub fn init_metrics() {
    REGISTRY
        .register(Box::new(MEASUREMENTS_TOTAL.clone()))
        .unwrap();
    REGISTRY.register(Box::new(REJECTED_TOTAL.clone())).unwrap();
    REGISTRY
        .register(Box::new(DB_FAILURES_TOTAL.clone()))
        .unwrap();
    REGISTRY
        .register(Box::new(INSERT_LATENCY_SECONDS.clone()))
        .unwrap();
}

pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}
