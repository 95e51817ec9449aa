use num::{Complex, One};
use crate::dsp::filtering::shared::errors::{FilterDesignError, FilterResult};
use super::polynomial::Polynomial;
use super::rational_function::RationalFunction;

const CONJUGATE_TOLERANCE: f64 = 1e-9;


/// `H(s) = gain * prod(s - zero) / prod(s - pole)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroPoleGain {
    pub zeros: Vec<Complex<f64>>,
    pub poles: Vec<Complex<f64>>,
    pub gain: f64
}

fn roots_match(left: &Complex<f64>, right: &Complex<f64>) -> bool {
    let scale = left.norm().max(right.norm()).max(1.0);
    return (left - right).norm() <= CONJUGATE_TOLERANCE * scale;
}

fn is_real(root: &Complex<f64>) -> bool {
    return root.im.abs() <= CONJUGATE_TOLERANCE * root.norm().max(1.0);
}

fn has_conjugate_pairs(roots: &[Complex<f64>]) -> bool {
    for root in roots.iter().filter(|root| !is_real(root)) {
        let matching = roots.iter().filter(|other| roots_match(other, root)).count();
        let conjugates = roots.iter().filter(|other| roots_match(other, &root.conj())).count();

        if matching != conjugates {
            return false;
        }
    }

    return true;
}

impl ZeroPoleGain {
    pub fn new(zeros: Vec<Complex<f64>>, poles: Vec<Complex<f64>>, gain: f64) -> FilterResult<Self> {
        let all_finite = zeros.iter().chain(poles.iter()).all(|root| root.re.is_finite() && root.im.is_finite());

        if !all_finite || !gain.is_finite() {
            return Err(FilterDesignError::NumericDegeneracy(format!("non-finite zero, pole or gain (gain = {})", gain)));
        }
        if !has_conjugate_pairs(&zeros) {
            return Err(FilterDesignError::NumericDegeneracy(format!("zeros are not in conjugate pairs: {:?}", zeros)));
        }
        if !has_conjugate_pairs(&poles) {
            return Err(FilterDesignError::NumericDegeneracy(format!("poles are not in conjugate pairs: {:?}", poles)));
        }

        Ok(ZeroPoleGain { zeros, poles, gain })
    }

    /// `Re(prod(-pole) / prod(-zero))`, the gain giving unity response at DC.
    pub fn calculate_gain(zeros: &[Complex<f64>], poles: &[Complex<f64>]) -> f64 {
        let pole_product = poles.iter().fold(Complex::<f64>::one(), |product, pole| product * (-pole));
        let zero_product = zeros.iter().fold(Complex::<f64>::one(), |product, zero| product * (-zero));

        return (pole_product / zero_product).re;
    }

    pub fn to_rational_function(&self) -> RationalFunction {
        return RationalFunction::new(
            Polynomial::from_roots(&self.zeros).scale(self.gain),
            Polynomial::from_roots(&self.poles)
        );
    }

    pub fn evaluate(&self, argument: Complex<f64>) -> Complex<f64> {
        let numerator = self.zeros.iter().fold(Complex::new(self.gain, 0.0), |product, zero| product * (argument - zero));
        let denominator = self.poles.iter().fold(Complex::<f64>::one(), |product, pole| product * (argument - pole));

        return numerator / denominator;
    }
}
