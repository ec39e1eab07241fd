use serde::de::DeserializeOwned;
use std::fs;

use crate::api::inventory_dto::InventoryDto;
use crate::domain::inventory::Inventory;
use crate::error::Result;

/// Parses a JSON file into a given type `T`.
///
/// This function reads a file from `file_path`, attempts to parse it
/// as JSON, and returns an instance of `T`.
///
/// Errors are automatically converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path)?;

    let parsed_data: T = serde_json::from_str(&data)?;

    Ok(parsed_data)
}

/// Loads and validates a room inventory from a JSON file.
pub fn load_inventory(file_path: &str) -> Result<Inventory> {
    let dto: InventoryDto = parse_json_file(file_path)?;
    log::debug!("Inventory file '{}' lists {} floors.", file_path, dto.floors.len());

    Inventory::from_dto(dto)
}
