/// Highest schema version any migration chain can produce.
/// Bump together with a new step in every chain.
pub const LATEST_SCHEMA_VERSION: u32 = 2;

/// Record key carrying the schema version.
pub const SCHEMA_VERSION_FIELD: &str = "schemaVersion";

/// Client tier assigned to jobs that predate tier-based site visits.
pub const DEFAULT_CLIENT_TIER: &str = "Tier 3";

/// Accepted client tiers, in priority order.
pub const CLIENT_TIERS: [&str; 3] = ["Tier 1", "Tier 2", "Tier 3"];

/// Location text for legacy jobs whose location object had no address.
pub const INVALID_LOCATION_PLACEHOLDER: &str = "[Invalid Location Data]";

/// Submission revision given to QA reports written before revisions were tracked.
pub const DEFAULT_REPORT_REVISION: u64 = 1;
