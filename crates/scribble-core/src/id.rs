//! Record ids and timestamps.

// Use web-time on WASM, std::time otherwise
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Length of the random hex suffix appended to every id.
const SUFFIX_LEN: usize = 12;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Generate a record id of the form `<prefix>-<millis>-<random hex>`.
///
/// The random suffix keeps two records created within the same millisecond
/// distinct.
pub fn generate_id(prefix: &str, timestamp: u64) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, timestamp, &random[..SUFFIX_LEN])
}
