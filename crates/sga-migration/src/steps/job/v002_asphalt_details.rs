//! v002: nest flat asphalt fields into `asphaltDetails`, add `clientTier`.

use serde_json::Value;

use sga_core::constants::{CLIENT_TIERS, DEFAULT_CLIENT_TIER};
use sga_core::models::{Coercion, ValueShape};

use crate::coerce::{ensure_object_or_null, CoercionLog};
use crate::Record;

/// Top-level fields that moved under `asphaltDetails`.
const FLAT_ASPHALT_FIELDS: [&str; 4] = [
    "asphaltPlant",
    "startTimeYard",
    "estimatedFinishTime",
    "dayShift",
];

pub fn migrate(record: &mut Record, log: &mut CoercionLog) {
    let flat: Record = FLAT_ASPHALT_FIELDS
        .iter()
        .filter_map(|key| {
            record
                .remove(*key)
                .filter(|value| !value.is_null())
                .map(|value| (key.to_string(), value))
        })
        .collect();

    ensure_object_or_null(record, "asphaltDetails", "asphaltDetails", log);
    if !flat.is_empty() {
        match record.get_mut("asphaltDetails") {
            // Values already nested win over stale flat copies.
            Some(Value::Object(details)) => {
                for (key, value) in flat {
                    details.entry(key).or_insert(value);
                }
            }
            _ => {
                record.insert("asphaltDetails".to_string(), Value::Object(flat));
            }
        }
    }

    ensure_client_tier(record, log);
}

pub(super) fn conform_details(record: &mut Record, log: &mut CoercionLog) {
    ensure_object_or_null(record, "asphaltDetails", "asphaltDetails", log);
    ensure_client_tier(record, log);
}

/// Missing tiers default to `Tier 3`; recognisable variants (`2`, `"tier 1"`)
/// are normalised; anything else is replaced by the default.
fn ensure_client_tier(record: &mut Record, log: &mut CoercionLog) {
    let slot = record.entry("clientTier").or_insert(Value::Null);
    let normalized = match slot {
        Value::Null => {
            *slot = Value::from(DEFAULT_CLIENT_TIER);
            return;
        }
        Value::String(text) => parse_tier(text),
        Value::Number(n) => n.as_u64().and_then(tier_from_rank),
        _ => None,
    };
    if normalized.is_some() && slot.as_str() == normalized {
        return;
    }
    let tier = normalized.unwrap_or(DEFAULT_CLIENT_TIER);
    let found = ValueShape::of(slot);
    *slot = Value::from(tier);
    log.push(Coercion::new(
        "clientTier",
        ValueShape::String,
        found,
        slot.to_string(),
    ));
}

fn parse_tier(text: &str) -> Option<&'static str> {
    let lowered = text.trim().to_ascii_lowercase();
    let rank = lowered.strip_prefix("tier").unwrap_or(lowered.as_str()).trim();
    rank.parse::<u64>().ok().and_then(tier_from_rank)
}

fn tier_from_rank(rank: u64) -> Option<&'static str> {
    let index = usize::try_from(rank).ok()?.checked_sub(1)?;
    CLIENT_TIERS.get(index).copied()
}
