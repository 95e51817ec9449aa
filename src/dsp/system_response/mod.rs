pub mod polynomial;
pub mod rational_function;
pub mod system_functions;
pub mod zero_pole_gain;
