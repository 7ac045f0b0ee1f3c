pub mod employee_service;
pub mod exam_service;
pub mod navigation_service;
pub mod test_service;
