pub mod employee;
pub mod exam;
pub mod navigation;
pub mod test;
