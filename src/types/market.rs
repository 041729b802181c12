use serde::{Deserialize, Serialize};

/// World region an index trades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Americas,
    Europe,
    Asia,
    Other,
}

/// Approximate position of an exchange on the dashboard's world map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: u32,
    pub y: u32,
}

/// Static metadata for a world index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketIndex {
    pub code: &'static str,
    pub name: &'static str,
    pub region: Region,
    pub country: &'static str,
    pub currency: &'static str,
    pub position: MapPosition,
}

/// One-shot value of a world index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub index_code: String,
    pub display_name: String,
    pub region: Region,
    pub country: String,
    pub currency: String,
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
    pub position: MapPosition,
}
