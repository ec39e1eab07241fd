pub mod inventory_dto;
