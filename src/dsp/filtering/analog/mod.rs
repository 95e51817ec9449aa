pub mod analog_filter;
pub mod approximation;
pub mod butterworth;
pub mod chebyshev;
pub mod elliptic;
pub mod frequency_transform;
pub mod inverse_chebyshev;
pub mod order_estimate;
pub mod prototype;
mod tests;
