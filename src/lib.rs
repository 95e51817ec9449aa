pub mod dsp;
pub mod general;

pub use dsp::filtering::analog::analog_filter::{AnalogFilter, DesignStage};
pub use dsp::filtering::analog::approximation::{Approximation, ApproximationType};
pub use dsp::filtering::analog::order_estimate::{OrderAndCutoffFrequencies, OrderAndCutoffFrequency};
pub use dsp::filtering::shared::errors::{FilterDesignError, FilterResult};
pub use dsp::filtering::shared::filter::{BandPassSpecs, BandStopSpecs, FilterType, HighPassSpecs, LowPassSpecs};
pub use dsp::system_response::system_functions::TransferFunction;
pub use general::logging::initialize_logger;
