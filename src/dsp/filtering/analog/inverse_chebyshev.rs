use std::f64::consts::PI;
use num::Complex;
use crate::dsp::filtering::shared::errors::FilterResult;
use crate::dsp::filtering::shared::filter::FilterType;
use crate::dsp::filtering::shared::filter_design_utils::ripple_factor;
use crate::dsp::system_response::zero_pole_gain::ZeroPoleGain;
use super::approximation::Approximation;
use super::chebyshev::{chebyshev_exact_order, chebyshev_poles};
use super::prototype::{pole_angle_schedule, LowPassPrototype};


/// Chebyshev type II. Monotonic pass band, equiripple stop band; the prototype has its
/// stop band edge at 1 rad/s where the loss equals the stop band attenuation.
pub struct InverseChebyshev;

impl Approximation for InverseChebyshev {
    fn exact_order(&self, pass_frequency: f64, stop_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> f64 {
        return chebyshev_exact_order(pass_frequency, stop_frequency, pass_band_ripple, stop_band_attenuation);
    }

    fn build_prototype(&self, order: usize, _pass_band_ripple: f64, stop_band_attenuation: f64) -> FilterResult<LowPassPrototype> {
        let eps = 1.0 / ripple_factor(stop_band_attenuation);

        let poles: Vec<Complex<f64>> = chebyshev_poles(order, eps)
            .iter()
            .map(|pole| *pole / pole.norm_sqr())
            .collect();

        let zeros: Vec<Complex<f64>> = pole_angle_schedule(order)
            .iter()
            .filter(|(k, _)| 2 * k + 1 != order as i64)
            .map(|(k, _)| {
                let sign = if *k < 0 { -1.0 } else { 1.0 };
                let angle = PI / order as f64 * (*k as f64 + 0.5);
                Complex::new(0.0, sign / angle.cos())
            })
            .collect();

        let gain = ZeroPoleGain::calculate_gain(&zeros, &poles);

        return Ok(LowPassPrototype::new(eps, ZeroPoleGain::new(zeros, poles, gain)?));
    }

    fn has_equiripple_stop_band(&self) -> bool {
        true
    }

    fn scaling_frequency(&self, _filter_type: FilterType, _order: usize, _eps: f64, _pass_frequency: f64, stop_frequency: f64) -> f64 {
        return stop_frequency;
    }

    fn bandwidth_factor(&self, filter_type: FilterType, _order: usize, _eps: f64, q_factor: f64, center_frequency: f64, selectivity: f64) -> f64 {
        // the dominating stop band edge lands on the prototype's 1 rad/s
        match filter_type {
            FilterType::BandStop => center_frequency / (q_factor * selectivity),
            _ => q_factor / (center_frequency * selectivity)
        }
    }
}
