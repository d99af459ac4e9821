//! Pool gauges in the default Prometheus registry
//!
//! Recorded when a pool is created and whenever `record_pool_state` is
//! called; `render_metrics` exports the registry in text format.

use prometheus::{register_int_gauge_vec, Encoder, IntGaugeVec, TextEncoder};
use sqlx::SqlitePool;

lazy_static::lazy_static! {
    /// Connections per pool, labelled idle / active / max
    static ref DB_POOL_CONNECTIONS: IntGaugeVec = register_int_gauge_vec!(
        "db_pool_connections",
        "Database pool connection count by state",
        &["service", "state"]
    ).expect("Prometheus metrics registration should succeed at startup");
}

/// Snapshot the pool's connection counts into the gauges
pub fn record_pool_state(pool: &SqlitePool, service: &str) {
    let size = pool.size() as i64;
    let idle = pool.num_idle() as i64;

    for (state, value) in [
        ("idle", idle),
        ("active", size - idle),
        ("max", pool.options().get_max_connections() as i64),
    ] {
        DB_POOL_CONNECTIONS
            .with_label_values(&[service, state])
            .set(value);
    }
}

/// Default registry in Prometheus text exposition format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
