use serde::{Deserialize, Serialize};
use crate::dsp::filtering::shared::errors::{FilterDesignError, FilterResult};
use crate::dsp::filtering::shared::filter::{BandPassSpecs, BandStopSpecs, FilterType, HighPassSpecs, LowPassSpecs};
use crate::dsp::filtering::shared::filter_design_utils::band_center_and_q;
use crate::general::validation_functions::is_positive_finite;
use super::approximation::{round_order, Approximation, ApproximationType};
use super::prototype::LowPassPrototype;


/// Prototype order and the frequency its 1 rad/s lands on, ready for the fixed order low-pass and high-pass designs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderAndCutoffFrequency {
    pub order: usize,
    pub cutoff_frequency: f64
}

/// Prototype order and the pair of frequencies its +-1 rad/s land on, for the fixed order band designs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderAndCutoffFrequencies {
    pub order: usize,
    pub lower_cutoff_frequency: f64,
    pub upper_cutoff_frequency: f64
}

impl OrderAndCutoffFrequencies {
    /// The edges `w1 < w2` with `w1 * w2 = w0^2` and `w2 - w1 = band_width`.
    pub fn from_center_and_width(order: usize, center_frequency: f64, band_width: f64) -> Self {
        let lower_cutoff_frequency = 0.5 * ((band_width * band_width + 4.0 * center_frequency * center_frequency).sqrt() - band_width);

        OrderAndCutoffFrequencies {
            order,
            lower_cutoff_frequency,
            upper_cutoff_frequency: lower_cutoff_frequency + band_width
        }
    }
}


pub(crate) fn checked_factor(name: &str, value: f64) -> FilterResult<f64> {
    if !is_positive_finite(value) {
        return Err(FilterDesignError::NumericDegeneracy(format!("{} is {}", name, value)));
    }
    Ok(value)
}

/// `(exact order, selectivity)` of the edge that needs the higher order; ties go to the upper edge.
fn dominating_edge(lower: (f64, f64), upper: (f64, f64)) -> (f64, f64) {
    if lower.0 > upper.0 {
        return lower;
    }
    return upper;
}


/// Order and prototype for a single edge design. Specs must already be validated.
pub(crate) struct SingleEdgePlan {
    pub estimate: OrderAndCutoffFrequency,
    pub prototype: LowPassPrototype
}

/// Order, prototype and substitution parameters for a band design. Specs must already be validated.
pub(crate) struct BandPlan {
    pub order: usize,
    pub selectivity: f64,
    pub center_frequency: f64,
    pub bandwidth: f64,
    pub prototype: LowPassPrototype
}

impl BandPlan {
    pub fn band_pass_estimate(&self) -> OrderAndCutoffFrequencies {
        return OrderAndCutoffFrequencies::from_center_and_width(self.order, self.center_frequency, 1.0 / self.bandwidth);
    }

    pub fn band_stop_estimate(&self) -> OrderAndCutoffFrequencies {
        return OrderAndCutoffFrequencies::from_center_and_width(self.order, self.center_frequency, self.bandwidth);
    }
}


pub(crate) fn plan_low_pass(specs: &LowPassSpecs, approximation: ApproximationType) -> FilterResult<SingleEdgePlan> {
    let wp = specs.pass_band_frequency;
    let ws = specs.stop_band_frequency;

    let order = approximation.min_order(wp, ws, specs.pass_band_ripple, specs.stop_band_attenuation)?;
    let prototype = approximation.build_prototype(order, specs.pass_band_ripple, specs.stop_band_attenuation)?;
    let cutoff_frequency = checked_factor(
        "low-pass scaling frequency",
        approximation.scaling_frequency(FilterType::LowPass, order, prototype.eps, wp, ws)
    )?;

    Ok(SingleEdgePlan { estimate: OrderAndCutoffFrequency { order, cutoff_frequency }, prototype })
}

pub(crate) fn plan_high_pass(specs: &HighPassSpecs, approximation: ApproximationType) -> FilterResult<SingleEdgePlan> {
    let wp = specs.pass_band_frequency;
    let ws = specs.stop_band_frequency;

    // selectivity of a high-pass is wp / ws
    let order = approximation.min_order(ws, wp, specs.pass_band_ripple, specs.stop_band_attenuation)?;
    let prototype = approximation.build_prototype(order, specs.pass_band_ripple, specs.stop_band_attenuation)?;
    let cutoff_frequency = checked_factor(
        "high-pass scaling frequency",
        approximation.scaling_frequency(FilterType::HighPass, order, prototype.eps, wp, ws)
    )?;

    Ok(SingleEdgePlan { estimate: OrderAndCutoffFrequency { order, cutoff_frequency }, prototype })
}

pub(crate) fn plan_band_pass(specs: &BandPassSpecs, approximation: ApproximationType) -> FilterResult<BandPlan> {
    let (center_frequency, q_factor) = band_center_and_q(specs.lower_pass_band_frequency, specs.upper_pass_band_frequency);
    let strictest_attenuation = specs.lower_stop_band_attenuation.max(specs.upper_stop_band_attenuation);

    // an equiripple stop band has one floor, which both edges must clear
    let (lower_attenuation, upper_attenuation) = if approximation.has_equiripple_stop_band() {
        (strictest_attenuation, strictest_attenuation)
    }
    else {
        (specs.lower_stop_band_attenuation, specs.upper_stop_band_attenuation)
    };

    let edge = |stop_frequency: f64, stop_band_attenuation: f64| {
        let selectivity = approximation.band_edge_selectivity(FilterType::BandPass, q_factor, center_frequency, stop_frequency);
        (approximation.exact_order(1.0, selectivity, specs.pass_band_ripple, stop_band_attenuation), selectivity)
    };
    let (exact, selectivity) = dominating_edge(
        edge(specs.lower_stop_band_frequency, lower_attenuation),
        edge(specs.upper_stop_band_frequency, upper_attenuation)
    );
    let order = round_order(exact)?;

    let prototype = approximation.build_prototype(order, specs.pass_band_ripple, strictest_attenuation)?;
    let bandwidth = checked_factor(
        "band-pass bandwidth factor",
        approximation.bandwidth_factor(FilterType::BandPass, order, prototype.eps, q_factor, center_frequency, selectivity)
    )?;

    Ok(BandPlan { order, selectivity, center_frequency, bandwidth, prototype })
}

pub(crate) fn plan_band_stop(specs: &BandStopSpecs, approximation: ApproximationType) -> FilterResult<BandPlan> {
    let (center_frequency, q_factor) = band_center_and_q(specs.lower_pass_band_frequency, specs.upper_pass_band_frequency);

    let edge = |stop_frequency: f64| {
        let selectivity = approximation.band_edge_selectivity(FilterType::BandStop, q_factor, center_frequency, stop_frequency);
        (approximation.exact_order(1.0, selectivity, specs.pass_band_ripple, specs.stop_band_attenuation), selectivity)
    };
    let (exact, selectivity) = dominating_edge(
        edge(specs.lower_stop_band_frequency),
        edge(specs.upper_stop_band_frequency)
    );
    let order = round_order(exact)?;

    let prototype = approximation.build_prototype(order, specs.pass_band_ripple, specs.stop_band_attenuation)?;
    let bandwidth = checked_factor(
        "band-stop bandwidth factor",
        approximation.bandwidth_factor(FilterType::BandStop, order, prototype.eps, q_factor, center_frequency, selectivity)
    )?;

    Ok(BandPlan { order, selectivity, center_frequency, bandwidth, prototype })
}
