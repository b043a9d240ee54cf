//! 직원 관련 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{CreateEmployeeRequest, NewEmployee};
pub use response::EmployeeResponse;
