pub mod catalog_dto;
pub mod test_dto;
