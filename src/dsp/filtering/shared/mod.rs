pub mod errors;
pub mod filter;
pub mod filter_design_utils;
