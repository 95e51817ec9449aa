use num::Complex;
use crate::dsp::filtering::shared::errors::FilterResult;
use crate::dsp::filtering::shared::filter::FilterType;
use crate::dsp::filtering::shared::filter_design_utils::{attenuation_factor, ripple_factor};
use crate::dsp::system_response::zero_pole_gain::ZeroPoleGain;
use super::approximation::Approximation;
use super::prototype::{pole_angle_schedule, LowPassPrototype};


/// Poles on the ellipse `-sinh(a) cos(phi) + j cosh(a) sin(phi)`, `a = asinh(1/eps) / n`.
pub fn chebyshev_poles(order: usize, eps: f64) -> Vec<Complex<f64>> {
    let a = (1.0 / eps).asinh() / order as f64;
    let sinh_a = a.sinh();
    let cosh_a = a.cosh();

    return pole_angle_schedule(order)
        .iter()
        .map(|(_, angle)| {
            let angle = angle.to_radians();
            Complex::new(-sinh_a * angle.cos(), cosh_a * angle.sin())
        })
        .collect();
}

/// `acosh(sqrt(amin / amax)) / acosh(ws / wp)`, shared with the inverse family.
pub fn chebyshev_exact_order(pass_frequency: f64, stop_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> f64 {
    let max_attenuation = attenuation_factor(pass_band_ripple);
    let min_attenuation = attenuation_factor(stop_band_attenuation);

    return (min_attenuation / max_attenuation).sqrt().acosh() / (stop_frequency / pass_frequency).acosh();
}


/// Equiripple pass band, monotonic stop band.
pub struct Chebyshev;

impl Approximation for Chebyshev {
    fn exact_order(&self, pass_frequency: f64, stop_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> f64 {
        return chebyshev_exact_order(pass_frequency, stop_frequency, pass_band_ripple, stop_band_attenuation);
    }

    fn build_prototype(&self, order: usize, pass_band_ripple: f64, _stop_band_attenuation: f64) -> FilterResult<LowPassPrototype> {
        let eps = ripple_factor(pass_band_ripple);
        let poles = chebyshev_poles(order, eps);

        let mut gain = ZeroPoleGain::calculate_gain(&[], &poles);
        // even orders sit at the bottom of a ripple at DC
        if order % 2 == 0 {
            gain /= (1.0 + eps * eps).sqrt();
        }

        return Ok(LowPassPrototype::new(eps, ZeroPoleGain::new(vec![], poles, gain)?));
    }

    fn scaling_frequency(&self, _filter_type: FilterType, _order: usize, _eps: f64, pass_frequency: f64, _stop_frequency: f64) -> f64 {
        return pass_frequency;
    }

    fn bandwidth_factor(&self, filter_type: FilterType, _order: usize, _eps: f64, q_factor: f64, center_frequency: f64, _selectivity: f64) -> f64 {
        match filter_type {
            FilterType::BandStop => center_frequency / q_factor,
            _ => q_factor / center_frequency
        }
    }
}
