use std::fmt;
use serde::{Deserialize, Serialize};
use crate::dsp::filtering::shared::errors::{FilterDesignError, FilterResult};
use crate::dsp::filtering::shared::filter::FilterType;
use super::butterworth::Butterworth;
use super::chebyshev::Chebyshev;
use super::elliptic::Elliptic;
use super::inverse_chebyshev::InverseChebyshev;
use super::prototype::LowPassPrototype;

/// Largest prototype order the designer will build. Coefficient expansion loses all precision well before this.
pub const MAXIMUM_ORDER: usize = 64;


/// Minimum integer order for an exact order estimate, never below 1.
pub fn round_order(exact_order: f64) -> FilterResult<usize> {
    if !exact_order.is_finite() {
        return Err(FilterDesignError::NumericDegeneracy(format!("order estimate is {}", exact_order)));
    }

    let order = exact_order.ceil().max(1.0);
    if order > MAXIMUM_ORDER as f64 {
        return Err(FilterDesignError::UnsupportedConfiguration(
            format!("required order {} exceeds the maximum of {}", order, MAXIMUM_ORDER)
        ));
    }

    return Ok(order as usize);
}


/// What every approximation family provides to the designer.
pub trait Approximation {
    /// Real valued order needed to meet the given edges and attenuations. Only the frequency ratio matters.
    fn exact_order(&self, pass_frequency: f64, stop_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> f64;

    /// Normalized prototype. Each family reads the attenuation(s) it is defined by.
    fn build_prototype(&self, order: usize, pass_band_ripple: f64, stop_band_attenuation: f64) -> FilterResult<LowPassPrototype>;

    /// Frequency the prototype's 1 rad/s is moved to for low-pass and high-pass designs.
    fn scaling_frequency(&self, filter_type: FilterType, order: usize, eps: f64, pass_frequency: f64, stop_frequency: f64) -> f64;

    /// `bw` of the band-pass `s <- bw (s^2 + w0^2) / s` and band-stop `s <- bw s / (s^2 + w0^2)` substitutions.
    fn bandwidth_factor(&self, filter_type: FilterType, order: usize, eps: f64, q_factor: f64, center_frequency: f64, selectivity: f64) -> f64;

    /// True when the stop band ripples down to exactly the prototype's attenuation.
    fn has_equiripple_stop_band(&self) -> bool {
        false
    }

    fn min_order(&self, pass_frequency: f64, stop_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> FilterResult<usize> {
        return round_order(self.exact_order(pass_frequency, stop_frequency, pass_band_ripple, stop_band_attenuation));
    }

    /// Selectivity of one stop band edge of a band design, as seen by the low-pass prototype.
    fn band_edge_selectivity(&self, filter_type: FilterType, q_factor: f64, center_frequency: f64, stop_frequency: f64) -> f64 {
        let normalized = stop_frequency / center_frequency;
        let band_pass_selectivity = q_factor * ((normalized * normalized - 1.0) / normalized).abs();

        match filter_type {
            FilterType::BandStop => 1.0 / band_pass_selectivity,
            _ => band_pass_selectivity
        }
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproximationType {
    Butterworth,
    Chebyshev,
    InverseChebyshev,
    Elliptic
}

impl ApproximationType {
    pub fn family(&self) -> &'static dyn Approximation {
        match self {
            ApproximationType::Butterworth => &Butterworth,
            ApproximationType::Chebyshev => &Chebyshev,
            ApproximationType::InverseChebyshev => &InverseChebyshev,
            ApproximationType::Elliptic => &Elliptic,
        }
    }
}

impl fmt::Display for ApproximationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApproximationType::Butterworth => "Butterworth",
            ApproximationType::Chebyshev => "Chebyshev I",
            ApproximationType::InverseChebyshev => "inverse Chebyshev",
            ApproximationType::Elliptic => "elliptic",
        };
        write!(f, "{}", name)
    }
}

impl Approximation for ApproximationType {
    fn exact_order(&self, pass_frequency: f64, stop_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> f64 {
        self.family().exact_order(pass_frequency, stop_frequency, pass_band_ripple, stop_band_attenuation)
    }

    fn build_prototype(&self, order: usize, pass_band_ripple: f64, stop_band_attenuation: f64) -> FilterResult<LowPassPrototype> {
        if order == 0 || order > MAXIMUM_ORDER {
            return Err(FilterDesignError::UnsupportedConfiguration(
                format!("prototype order must be within 1..={}, got {}", MAXIMUM_ORDER, order)
            ));
        }

        self.family().build_prototype(order, pass_band_ripple, stop_band_attenuation)
    }

    fn has_equiripple_stop_band(&self) -> bool {
        self.family().has_equiripple_stop_band()
    }

    fn scaling_frequency(&self, filter_type: FilterType, order: usize, eps: f64, pass_frequency: f64, stop_frequency: f64) -> f64 {
        self.family().scaling_frequency(filter_type, order, eps, pass_frequency, stop_frequency)
    }

    fn bandwidth_factor(&self, filter_type: FilterType, order: usize, eps: f64, q_factor: f64, center_frequency: f64, selectivity: f64) -> f64 {
        self.family().bandwidth_factor(filter_type, order, eps, q_factor, center_frequency, selectivity)
    }
}
