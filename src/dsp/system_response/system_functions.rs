use num::Complex;
use crate::dsp::filtering::shared::errors::{FilterDesignError, FilterResult};
use crate::dsp::filtering::shared::filter_design_utils::linear_to_db;
use super::polynomial::Polynomial;
use super::rational_function::RationalFunction;


/// Continuous-time transfer function with a monic denominator.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferFunction {
    numerator: Polynomial,
    denominator: Polynomial
}

impl TransferFunction {
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> FilterResult<Self> {
        let normalization_factor = denominator.leading_coefficient();

        if normalization_factor == 0.0 || !normalization_factor.is_finite() {
            return Err(FilterDesignError::NumericDegeneracy(
                format!("denominator leading coefficient is {}", normalization_factor)
            ));
        }

        let numerator = numerator.scale(1.0 / normalization_factor);
        let denominator = denominator.scale(1.0 / normalization_factor);

        if !numerator.is_finite() || !denominator.is_finite() {
            return Err(FilterDesignError::NumericDegeneracy("transfer function has non-finite coefficients".to_string()));
        }

        Ok(TransferFunction { numerator, denominator })
    }

    pub fn from_rational_function(rational_function: RationalFunction) -> FilterResult<Self> {
        return TransferFunction::new(rational_function.numerator, rational_function.denominator);
    }

    pub fn numerator(&self) -> &[f64] {
        self.numerator.coefficients()
    }

    pub fn denominator(&self) -> &[f64] {
        self.denominator.coefficients()
    }

    pub fn order(&self) -> usize {
        self.denominator.degree()
    }

    pub fn to_rational_function(&self) -> RationalFunction {
        RationalFunction::new(self.numerator.clone(), self.denominator.clone())
    }

    pub fn evaluate(&self, argument: Complex<f64>) -> Complex<f64> {
        return self.numerator.evaluate(argument) / self.denominator.evaluate(argument);
    }

    pub fn magnitude_at(&self, angular_frequency: f64) -> f64 {
        return self.evaluate(Complex::new(0.0, angular_frequency)).norm();
    }

    /// Loss in dB at `angular_frequency`, positive when the filter attenuates.
    pub fn attenuation_db_at(&self, angular_frequency: f64) -> f64 {
        return -linear_to_db(self.magnitude_at(angular_frequency));
    }
}
