use std::fmt;
use log::Level;
use crate::dsp::filtering::shared::errors::{FilterDesignError, FilterResult};
use crate::dsp::filtering::shared::filter::{BandPassSpecs, BandStopSpecs, FilterType, HighPassSpecs, LowPassSpecs};
use crate::dsp::system_response::rational_function::RationalFunction;
use crate::dsp::system_response::system_functions::TransferFunction;
use crate::general::logging::log_design_message;
use crate::general::validation_functions::is_positive_finite;
use super::approximation::{Approximation, ApproximationType};
use super::frequency_transform::{lp_to_bp, lp_to_bs, lp_to_hp, lp_to_lp};
use super::order_estimate::{
    plan_band_pass, plan_band_stop, plan_high_pass, plan_low_pass, OrderAndCutoffFrequencies, OrderAndCutoffFrequency
};


/// Stages of a single design request, entered strictly in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DesignStage {
    SpecValidated,
    OrderEstimated,
    PrototypeBuilt,
    GainCorrected,
    Transformed,
    Done
}

impl fmt::Display for DesignStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}


struct DesignProgress {
    filter_type: FilterType,
    approximation: ApproximationType,
    stage: Option<DesignStage>
}

impl DesignProgress {
    fn start(filter_type: FilterType, approximation: ApproximationType) -> Self {
        DesignProgress { filter_type, approximation, stage: None }
    }

    fn enter(&mut self, stage: DesignStage, detail: String) {
        debug_assert!(self.stage.map_or(true, |current| current < stage));
        self.stage = Some(stage);

        log_design_message(
            &format!("{} {} design: {} ({})", self.approximation, self.filter_type, stage, detail),
            Level::Debug
        );
    }
}


fn check_fixed_order_inputs(pass_band_ripple: f64, stop_band_attenuation: f64, edges: &[f64]) -> FilterResult<()> {
    if !is_positive_finite(pass_band_ripple) || !is_positive_finite(stop_band_attenuation) || stop_band_attenuation <= pass_band_ripple {
        return Err(FilterDesignError::InvalidSpec(
            format!("need 0 < pass_band_ripple < stop_band_attenuation, got {} and {}", pass_band_ripple, stop_band_attenuation)
        ));
    }
    if !edges.iter().all(|edge| is_positive_finite(*edge)) {
        return Err(FilterDesignError::InvalidSpec(format!("edge frequencies must be positive, got {:?}", edges)));
    }
    Ok(())
}


/// A designed analog filter: realized order and its transfer function.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalogFilter {
    order: usize,
    filter_type: FilterType,
    approximation: ApproximationType,
    transfer_function: TransferFunction
}

impl AnalogFilter {
    fn finish(
        mut progress: DesignProgress,
        prototype_order: usize,
        rational_function: RationalFunction
    ) -> FilterResult<Self> {
        progress.enter(DesignStage::Transformed, format!("degree {}", rational_function.denominator.degree()));
        let transfer_function = TransferFunction::from_rational_function(rational_function)?;

        let order = if progress.filter_type.is_band() { 2 * prototype_order } else { prototype_order };
        progress.enter(DesignStage::Done, format!("realized order {}", order));

        Ok(AnalogFilter {
            order,
            filter_type: progress.filter_type,
            approximation: progress.approximation,
            transfer_function
        })
    }

    pub fn min_order(
        pass_frequency: f64,
        stop_frequency: f64,
        pass_band_ripple: f64,
        stop_band_attenuation: f64,
        approximation: ApproximationType
    ) -> FilterResult<usize> {
        return approximation.min_order(pass_frequency, stop_frequency, pass_band_ripple, stop_band_attenuation);
    }

    /// Order and cutoff that `low_pass_from_order` turns into the same filter as `new_low_pass`.
    pub fn low_pass_order(specs: &LowPassSpecs, approximation: ApproximationType) -> FilterResult<OrderAndCutoffFrequency> {
        specs.validate()?;
        return Ok(plan_low_pass(specs, approximation)?.estimate);
    }

    pub fn high_pass_order(specs: &HighPassSpecs, approximation: ApproximationType) -> FilterResult<OrderAndCutoffFrequency> {
        specs.validate()?;
        return Ok(plan_high_pass(specs, approximation)?.estimate);
    }

    /// Prototype order and cutoff pair for `band_pass_from_order`.
    pub fn band_pass_order(specs: &BandPassSpecs, approximation: ApproximationType) -> FilterResult<OrderAndCutoffFrequencies> {
        specs.validate()?;
        return Ok(plan_band_pass(specs, approximation)?.band_pass_estimate());
    }

    pub fn band_stop_order(specs: &BandStopSpecs, approximation: ApproximationType) -> FilterResult<OrderAndCutoffFrequencies> {
        specs.validate()?;
        return Ok(plan_band_stop(specs, approximation)?.band_stop_estimate());
    }

    pub fn new_low_pass(specs: &LowPassSpecs, approximation: ApproximationType) -> FilterResult<Self> {
        let mut progress = DesignProgress::start(FilterType::LowPass, approximation);
        specs.validate()?;
        progress.enter(DesignStage::SpecValidated, format!("{:?}", specs));

        let plan = plan_low_pass(specs, approximation)?;
        progress.enter(DesignStage::OrderEstimated, format!("n = {}", plan.estimate.order));
        progress.enter(DesignStage::PrototypeBuilt, format!("eps = {}", plan.prototype.eps));
        progress.enter(DesignStage::GainCorrected, format!("factor = {}", plan.estimate.cutoff_frequency));

        let rational_function = lp_to_lp(&plan.prototype.to_rational_function(), plan.estimate.cutoff_frequency);
        return AnalogFilter::finish(progress, plan.estimate.order, rational_function);
    }

    pub fn new_high_pass(specs: &HighPassSpecs, approximation: ApproximationType) -> FilterResult<Self> {
        let mut progress = DesignProgress::start(FilterType::HighPass, approximation);
        specs.validate()?;
        progress.enter(DesignStage::SpecValidated, format!("{:?}", specs));

        let plan = plan_high_pass(specs, approximation)?;
        progress.enter(DesignStage::OrderEstimated, format!("n = {}", plan.estimate.order));
        progress.enter(DesignStage::PrototypeBuilt, format!("eps = {}", plan.prototype.eps));
        progress.enter(DesignStage::GainCorrected, format!("factor = {}", plan.estimate.cutoff_frequency));

        let rational_function = lp_to_hp(&plan.prototype.to_rational_function(), plan.estimate.cutoff_frequency);
        return AnalogFilter::finish(progress, plan.estimate.order, rational_function);
    }

    pub fn new_band_pass(specs: &BandPassSpecs, approximation: ApproximationType) -> FilterResult<Self> {
        let mut progress = DesignProgress::start(FilterType::BandPass, approximation);
        specs.validate()?;
        progress.enter(DesignStage::SpecValidated, format!("{:?}", specs));

        let plan = plan_band_pass(specs, approximation)?;
        progress.enter(DesignStage::OrderEstimated, format!("n = {}, selectivity = {}", plan.order, plan.selectivity));
        progress.enter(DesignStage::PrototypeBuilt, format!("eps = {}", plan.prototype.eps));
        progress.enter(DesignStage::GainCorrected, format!("w0 = {}, bw = {}", plan.center_frequency, plan.bandwidth));

        let rational_function = lp_to_bp(&plan.prototype.to_rational_function(), plan.center_frequency, plan.bandwidth);
        return AnalogFilter::finish(progress, plan.order, rational_function);
    }

    pub fn new_band_stop(specs: &BandStopSpecs, approximation: ApproximationType) -> FilterResult<Self> {
        let mut progress = DesignProgress::start(FilterType::BandStop, approximation);
        specs.validate()?;
        progress.enter(DesignStage::SpecValidated, format!("{:?}", specs));

        let plan = plan_band_stop(specs, approximation)?;
        progress.enter(DesignStage::OrderEstimated, format!("n = {}, selectivity = {}", plan.order, plan.selectivity));
        progress.enter(DesignStage::PrototypeBuilt, format!("eps = {}", plan.prototype.eps));
        progress.enter(DesignStage::GainCorrected, format!("w0 = {}, bw = {}", plan.center_frequency, plan.bandwidth));

        let rational_function = lp_to_bs(&plan.prototype.to_rational_function(), plan.center_frequency, plan.bandwidth);
        return AnalogFilter::finish(progress, plan.order, rational_function);
    }

    /// Fixed order low-pass with the prototype's 1 rad/s moved to `cutoff_frequency`.
    pub fn low_pass_from_order(
        order: usize,
        pass_band_ripple: f64,
        stop_band_attenuation: f64,
        cutoff_frequency: f64,
        approximation: ApproximationType
    ) -> FilterResult<Self> {
        let mut progress = DesignProgress::start(FilterType::LowPass, approximation);
        check_fixed_order_inputs(pass_band_ripple, stop_band_attenuation, &[cutoff_frequency])?;
        progress.enter(DesignStage::SpecValidated, format!("n = {}, wn = {}", order, cutoff_frequency));
        progress.enter(DesignStage::OrderEstimated, "fixed".to_string());

        let prototype = approximation.build_prototype(order, pass_band_ripple, stop_band_attenuation)?;
        progress.enter(DesignStage::PrototypeBuilt, format!("eps = {}", prototype.eps));
        progress.enter(DesignStage::GainCorrected, format!("factor = {}", cutoff_frequency));

        let rational_function = lp_to_lp(&prototype.to_rational_function(), cutoff_frequency);
        return AnalogFilter::finish(progress, order, rational_function);
    }

    pub fn high_pass_from_order(
        order: usize,
        pass_band_ripple: f64,
        stop_band_attenuation: f64,
        cutoff_frequency: f64,
        approximation: ApproximationType
    ) -> FilterResult<Self> {
        let mut progress = DesignProgress::start(FilterType::HighPass, approximation);
        check_fixed_order_inputs(pass_band_ripple, stop_band_attenuation, &[cutoff_frequency])?;
        progress.enter(DesignStage::SpecValidated, format!("n = {}, wn = {}", order, cutoff_frequency));
        progress.enter(DesignStage::OrderEstimated, "fixed".to_string());

        let prototype = approximation.build_prototype(order, pass_band_ripple, stop_band_attenuation)?;
        progress.enter(DesignStage::PrototypeBuilt, format!("eps = {}", prototype.eps));
        progress.enter(DesignStage::GainCorrected, format!("factor = {}", cutoff_frequency));

        let rational_function = lp_to_hp(&prototype.to_rational_function(), cutoff_frequency);
        return AnalogFilter::finish(progress, order, rational_function);
    }

    /// Fixed order band-pass whose prototype edges land on `lower_frequency` and `upper_frequency`.
    pub fn band_pass_from_order(
        order: usize,
        pass_band_ripple: f64,
        stop_band_attenuation: f64,
        lower_frequency: f64,
        upper_frequency: f64,
        approximation: ApproximationType
    ) -> FilterResult<Self> {
        let mut progress = DesignProgress::start(FilterType::BandPass, approximation);
        check_fixed_order_inputs(pass_band_ripple, stop_band_attenuation, &[lower_frequency, upper_frequency])?;
        if lower_frequency >= upper_frequency {
            return Err(FilterDesignError::InvalidSpec(format!("band edges {} >= {}", lower_frequency, upper_frequency)));
        }
        progress.enter(DesignStage::SpecValidated, format!("n = {}, w1 = {}, w2 = {}", order, lower_frequency, upper_frequency));
        progress.enter(DesignStage::OrderEstimated, "fixed".to_string());

        let prototype = approximation.build_prototype(order, pass_band_ripple, stop_band_attenuation)?;
        progress.enter(DesignStage::PrototypeBuilt, format!("eps = {}", prototype.eps));

        let center_frequency = (lower_frequency * upper_frequency).sqrt();
        let bandwidth = 1.0 / (upper_frequency - lower_frequency);
        progress.enter(DesignStage::GainCorrected, format!("w0 = {}, bw = {}", center_frequency, bandwidth));

        let rational_function = lp_to_bp(&prototype.to_rational_function(), center_frequency, bandwidth);
        return AnalogFilter::finish(progress, order, rational_function);
    }

    pub fn band_stop_from_order(
        order: usize,
        pass_band_ripple: f64,
        stop_band_attenuation: f64,
        lower_frequency: f64,
        upper_frequency: f64,
        approximation: ApproximationType
    ) -> FilterResult<Self> {
        let mut progress = DesignProgress::start(FilterType::BandStop, approximation);
        check_fixed_order_inputs(pass_band_ripple, stop_band_attenuation, &[lower_frequency, upper_frequency])?;
        if lower_frequency >= upper_frequency {
            return Err(FilterDesignError::InvalidSpec(format!("band edges {} >= {}", lower_frequency, upper_frequency)));
        }
        progress.enter(DesignStage::SpecValidated, format!("n = {}, w1 = {}, w2 = {}", order, lower_frequency, upper_frequency));
        progress.enter(DesignStage::OrderEstimated, "fixed".to_string());

        let prototype = approximation.build_prototype(order, pass_band_ripple, stop_band_attenuation)?;
        progress.enter(DesignStage::PrototypeBuilt, format!("eps = {}", prototype.eps));

        let center_frequency = (lower_frequency * upper_frequency).sqrt();
        let bandwidth = upper_frequency - lower_frequency;
        progress.enter(DesignStage::GainCorrected, format!("w0 = {}, bw = {}", center_frequency, bandwidth));

        let rational_function = lp_to_bs(&prototype.to_rational_function(), center_frequency, bandwidth);
        return AnalogFilter::finish(progress, order, rational_function);
    }

    /// Realized order; twice the prototype order for band designs.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    pub fn approximation(&self) -> ApproximationType {
        self.approximation
    }

    pub fn transfer_function(&self) -> &TransferFunction {
        &self.transfer_function
    }

    pub fn numerator(&self) -> &[f64] {
        self.transfer_function.numerator()
    }

    pub fn denominator(&self) -> &[f64] {
        self.transfer_function.denominator()
    }
}

impl fmt::Display for AnalogFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "order {} {} {} filter: b = {:?}, a = {:?}",
            self.order, self.approximation, self.filter_type, self.numerator(), self.denominator()
        )
    }
}
