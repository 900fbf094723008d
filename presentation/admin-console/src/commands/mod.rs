pub mod dto;
pub mod error;
pub mod error_mapper;
