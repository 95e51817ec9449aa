pub mod filtering;
pub mod system_response;
