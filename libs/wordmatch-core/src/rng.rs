//! Time-seeded random generator construction.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fresh generator seeded from the wall clock. Every shuffle operation
/// reseeds; no reproducibility across calls is promised.
pub(crate) fn time_seeded() -> StdRng {
    let seed = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_millis());
    StdRng::seed_from_u64(seed as u64)
}
