use num::Complex;
use crate::dsp::filtering::shared::errors::FilterResult;
use crate::dsp::filtering::shared::filter::FilterType;
use crate::dsp::filtering::shared::filter_design_utils::{attenuation_factor, ripple_factor};
use crate::dsp::system_response::zero_pole_gain::ZeroPoleGain;
use super::approximation::Approximation;
use super::prototype::{pole_angle_schedule, LowPassPrototype};


/// Maximally flat magnitude. The prototype is half power at 1 rad/s, the ripple factor then
/// moves the `ap` point onto the requested edge.
pub struct Butterworth;

impl Approximation for Butterworth {
    fn exact_order(&self, pass_frequency: f64, stop_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> f64 {
        let max_attenuation = attenuation_factor(pass_band_ripple);
        let min_attenuation = attenuation_factor(stop_band_attenuation);

        let numerator = (min_attenuation / max_attenuation).log10();
        let denominator = 2.0 * (stop_frequency / pass_frequency).log10();

        return numerator / denominator;
    }

    fn build_prototype(&self, order: usize, pass_band_ripple: f64, _stop_band_attenuation: f64) -> FilterResult<LowPassPrototype> {
        let eps = ripple_factor(pass_band_ripple);

        let poles: Vec<Complex<f64>> = pole_angle_schedule(order)
            .iter()
            .map(|(_, angle)| {
                let angle = angle.to_radians();
                Complex::new(-angle.cos(), angle.sin())
            })
            .collect();

        let gain = ZeroPoleGain::calculate_gain(&[], &poles);

        return Ok(LowPassPrototype::new(eps, ZeroPoleGain::new(vec![], poles, gain)?));
    }

    fn scaling_frequency(&self, filter_type: FilterType, order: usize, eps: f64, pass_frequency: f64, _stop_frequency: f64) -> f64 {
        let ripple_shift = eps.powf(1.0 / order as f64);

        match filter_type {
            FilterType::HighPass => pass_frequency * ripple_shift,
            _ => pass_frequency / ripple_shift
        }
    }

    fn bandwidth_factor(&self, filter_type: FilterType, order: usize, eps: f64, q_factor: f64, center_frequency: f64, _selectivity: f64) -> f64 {
        let ripple_shift = eps.powf(1.0 / order as f64);

        match filter_type {
            FilterType::BandStop => ripple_shift * center_frequency / q_factor,
            _ => ripple_shift * q_factor / center_frequency
        }
    }
}
