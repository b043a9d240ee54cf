//! 직원 관련 응답 DTO

pub mod employee_response;

pub use employee_response::EmployeeResponse;
