//! Display projection of a detail record
//!
//! The loader treats detail records as opaque. This view pulls out the fields
//! a catalog page shows and tolerates any of them being missing or malformed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named base stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
    pub name: String,
    pub value: u64,
}

/// Display fields of one item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonProfile {
    pub id: Option<u64>,
    pub name: String,
    /// Height in metres
    pub height_m: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<BaseStat>,
    pub sprite: Option<String>,
    pub artwork: Option<String>,
    pub artwork_shiny: Option<String>,
}

impl PokemonProfile {
    /// Project a detail record, falling back to `name` when the record has none
    pub fn from_record(name: &str, record: &Value) -> Self {
        Self {
            id: record.get("id").and_then(Value::as_u64),
            name: record
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            // upstream reports decimetres and hectograms
            height_m: record
                .get("height")
                .and_then(Value::as_f64)
                .map(|h| h / 10.0),
            weight_kg: record
                .get("weight")
                .and_then(Value::as_f64)
                .map(|w| w / 10.0),
            types: named_entries(record, "types", "/type/name"),
            abilities: named_entries(record, "abilities", "/ability/name"),
            stats: base_stats(record),
            sprite: string_at(record, "/sprites/front_default"),
            artwork: string_at(record, "/sprites/other/official-artwork/front_default"),
            artwork_shiny: string_at(record, "/sprites/other/official-artwork/front_shiny"),
        }
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u64 {
        self.stats.iter().map(|s| s.value).sum()
    }
}

fn string_at(record: &Value, pointer: &str) -> Option<String> {
    record
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(String::from)
}

/// Collect `pointer` from every element of the array at `field`
fn named_entries(record: &Value, field: &str, pointer: &str) -> Vec<String> {
    record
        .get(field)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.pointer(pointer).and_then(Value::as_str))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn base_stats(record: &Value) -> Vec<BaseStat> {
    record
        .get("stats")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    Some(BaseStat {
                        name: entry.pointer("/stat/name")?.as_str()?.to_string(),
                        value: entry.get("base_stat")?.as_u64()?,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
