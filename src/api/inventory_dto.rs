use serde::{Deserialize, Serialize};

/// JSON shape of a room inventory file.
///
/// ```json
/// { "floors": [ { "floor": 1, "rooms": [101, 102, 103] } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDto {
    pub floors: Vec<FloorDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorDto {
    pub floor: u32,
    #[serde(default)]
    pub rooms: Vec<u32>,
}
