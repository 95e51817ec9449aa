pub mod logging;
pub mod validation_functions;
