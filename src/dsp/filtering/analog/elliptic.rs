use std::f64::consts::PI;
use num::Complex;
use log::{debug, trace};
use crate::dsp::filtering::shared::errors::{FilterDesignError, FilterResult};
use crate::dsp::filtering::shared::filter::FilterType;
use crate::dsp::system_response::zero_pole_gain::ZeroPoleGain;
use super::approximation::Approximation;
use super::chebyshev::Chebyshev;
use super::prototype::LowPassPrototype;

/// The descending sequence stops once a term falls to this value.
pub const DESCENDING_THRESHOLD: f64 = 1.0e-150;
pub const DESCENDING_MAX_STEPS: usize = 64;
/// Refinement of the modulus ladder stops once a modulus falls below this value.
pub const LADDER_THRESHOLD: f64 = 1.0e-14;
pub const LADDER_MAX_STEPS: usize = 10;


/// Equiripple in both bands. The prototype's pass band edge is at 1 rad/s.
pub struct Elliptic;

struct ModulusLadder {
    ripples: Vec<f64>,
    descending: Vec<f64>,
    moduli: Vec<f64>
}

impl ModulusLadder {
    /// Descending Landen sequence `g`, the modulus ladder `ek` and the ripple sequence `e`.
    fn new(order: usize, pass_band_ripple: f64, stop_band_attenuation: f64) -> FilterResult<Self> {
        let decibel_to_neper = (10.0 as f64).ln() * 0.05;
        let pass_nepers = decibel_to_neper * pass_band_ripple;
        let stop_nepers = decibel_to_neper * stop_band_attenuation;

        let mut ripples = vec![(2.0 * pass_nepers.exp() * pass_nepers.sinh()).sqrt()];
        let mut descending = vec![ripples[0] / ((2.0 * stop_nepers).exp() - 1.0).sqrt()];

        let mut term = descending[0];
        if !(term > 0.0 && term < 1.0) {
            return Err(FilterDesignError::NumericDegeneracy(
                format!("elliptic discrimination {} is outside (0, 1)", term)
            ));
        }

        while term > DESCENDING_THRESHOLD {
            if descending.len() > DESCENDING_MAX_STEPS {
                return Err(FilterDesignError::NumericDegeneracy(
                    format!("descending sequence did not reach {:e} in {} steps", DESCENDING_THRESHOLD, DESCENDING_MAX_STEPS)
                ));
            }

            term = term / (1.0 + (1.0 - term * term).sqrt());
            term *= term;
            descending.push(term);
        }
        let descending_top = descending.len() - 1;

        let mut moduli = vec![0.0; descending_top + LADDER_MAX_STEPS];
        let mut ladder_top = descending_top;

        for step in 0..LADDER_MAX_STEPS {
            ladder_top = descending_top + step;
            moduli[ladder_top] = 4.0 * (descending[descending_top] / 4.0).powf((2.0 as f64).powi(step as i32) / order as f64);

            if moduli[ladder_top] < LADDER_THRESHOLD {
                break;
            }
        }
        moduli.truncate(ladder_top + 1);

        for index in (1..=ladder_top).rev() {
            moduli[index - 1] = 2.0 * moduli[index].sqrt() / (1.0 + moduli[index]);
        }

        for index in 1..=descending_top {
            let a = (1.0 + descending[index]) * ripples[index - 1] * 0.5;
            ripples.push(a + (a * a + descending[index]).sqrt());
        }

        trace!("elliptic ladder: {} descending terms, {} moduli", descending.len(), moduli.len());

        Ok(ModulusLadder { ripples, descending, moduli })
    }

    fn descending_top(&self) -> usize {
        self.descending.len() - 1
    }

    /// Continued fraction over the ladder, applied top down.
    fn climb_complex(&self, start: Complex<f64>) -> Complex<f64> {
        let mut value = start;

        for modulus in self.moduli.iter().skip(1).rev() {
            value = (value - *modulus / value) / (1.0 + modulus);
        }

        return value;
    }

    fn climb_zero(&self, start: f64) -> f64 {
        let mut value = start;

        for modulus in self.moduli.iter().skip(1).rev() {
            value = (value + modulus / value) / (1.0 + modulus);
        }

        return value;
    }

    fn climb_real(&self, start: f64) -> f64 {
        let mut value = start;

        for modulus in self.moduli.iter().skip(1).rev() {
            value = (value - modulus / value) / (1.0 + modulus);
        }

        return value;
    }
}


impl Approximation for Elliptic {
    /// Nome based estimate (four term series for `q`), not an exact elliptic integral ratio.
    fn exact_order(&self, pass_frequency: f64, stop_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> f64 {
        let k = pass_frequency / stop_frequency;
        let kp = (1.0 - k * k).sqrt().sqrt();
        let u = 0.5 * (1.0 - kp) / (1.0 + kp);
        let q = u + 2.0 * u.powi(5) + 15.0 * u.powi(9) + 150.0 * u.powi(13);
        let discrimination = ((10.0 as f64).powf(0.1 * stop_band_attenuation) - 1.0)
            / ((10.0 as f64).powf(0.1 * pass_band_ripple) - 1.0);

        return (16.0 * discrimination).log10() / (1.0 / q).log10();
    }

    fn build_prototype(&self, order: usize, pass_band_ripple: f64, stop_band_attenuation: f64) -> FilterResult<LowPassPrototype> {
        if order == 1 {
            debug!("elliptic order 1 degenerates to a first order Chebyshev I prototype");
            return Chebyshev.build_prototype(order, pass_band_ripple, stop_band_attenuation);
        }

        let ladder = ModulusLadder::new(order, pass_band_ripple, stop_band_attenuation)?;
        let pair_count = order / 2;
        let odd = order % 2 == 1;
        let order_float = order as f64;

        let top_ripple = ladder.ripples[ladder.descending_top()];
        let u2 = ((1.0 + (1.0 + top_ripple * top_ripple).sqrt()) / top_ripple).ln() / order_float;

        let zero_count = if odd { order - 1 } else { order };
        let mut zeros = vec![Complex::new(0.0, 0.0); zero_count];
        let mut poles = vec![Complex::new(0.0, 0.0); order];
        let minus_j = Complex::new(0.0, -1.0);

        for pair in 0..pair_count {
            let slot = zero_count - 1 - 2 * pair;
            let u1 = (2.0 * pair as f64 + 1.0) * PI / (2.0 * order_float);

            let c = ladder.climb_complex(minus_j / Complex::new(-u1, u2).cos());
            let d = ladder.climb_zero(1.0 / u1.cos());

            let pole = c.inv();
            poles[slot] = pole;
            poles[slot - 1] = pole.conj();

            let zero = Complex::new(0.0, d / ladder.moduli[0]);
            zeros[slot] = zero;
            zeros[slot - 1] = zero.conj();
        }

        if odd {
            let a = ladder.climb_real(1.0 / u2.sinh());
            poles[order - 1] = Complex::new(-1.0 / a, 0.0);
        }

        let eps = ladder.ripples[0];
        let mut gain = ZeroPoleGain::calculate_gain(&zeros, &poles);
        if !odd {
            gain /= (1.0 + eps * eps).sqrt();
        }

        return Ok(LowPassPrototype::new(eps, ZeroPoleGain::new(zeros, poles, gain)?));
    }

    fn has_equiripple_stop_band(&self) -> bool {
        true
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
