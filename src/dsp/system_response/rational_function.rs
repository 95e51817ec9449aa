use num::Complex;
use super::polynomial::Polynomial;


#[derive(Clone, Debug, PartialEq)]
pub struct RationalFunction {
    pub numerator: Polynomial,
    pub denominator: Polynomial
}

impl RationalFunction {
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> Self {
        RationalFunction { numerator, denominator }
    }

    /// Replaces `s` with `substitution(s)` and clears the inner denominators, multiplying both
    /// halves by `d^max(deg N, deg D)` so the result is again a ratio of polynomials.
    pub fn substitute(&self, substitution: &RationalFunction) -> RationalFunction {
        let numerator_degree = self.numerator.degree();
        let denominator_degree = self.denominator.degree();
        let common_degree = numerator_degree.max(denominator_degree);

        let inner_numerator = &substitution.numerator;
        let inner_denominator = &substitution.denominator;

        let numerator = self.numerator
            .substitute(inner_numerator, inner_denominator)
            .multiply(&inner_denominator.pow(common_degree - numerator_degree));
        let denominator = self.denominator
            .substitute(inner_numerator, inner_denominator)
            .multiply(&inner_denominator.pow(common_degree - denominator_degree));

        return RationalFunction::new(numerator, denominator);
    }

    /// `N(factor * s) / D(factor * s)`.
    pub fn scale_argument(&self, factor: f64) -> RationalFunction {
        return RationalFunction::new(self.numerator.scale_argument(factor), self.denominator.scale_argument(factor));
    }

    pub fn evaluate(&self, argument: Complex<f64>) -> Complex<f64> {
        return self.numerator.evaluate(argument) / self.denominator.evaluate(argument);
    }
}
