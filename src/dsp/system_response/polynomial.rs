use num::{Complex, Zero};


/// Real polynomial in `s`, coefficients ordered highest degree first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        if coefficients.is_empty() {
            return Polynomial { coefficients: vec![0.0] };
        }

        Polynomial { coefficients }
    }

    pub fn constant(value: f64) -> Self {
        Polynomial { coefficients: vec![value] }
    }

    /// Monic product of `(s - root)`. Roots are expected in conjugate pairs, so the imaginary
    /// residue of the expansion is rounding noise and is dropped.
    pub fn from_roots(roots: &[Complex<f64>]) -> Self {
        let mut product: Vec<Complex<f64>> = vec![Complex::new(1.0, 0.0)];

        for root in roots.iter() {
            let mut next_product = vec![Complex::zero(); product.len() + 1];

            for (index, coefficient) in product.iter().enumerate() {
                next_product[index] += coefficient;
                next_product[index + 1] -= coefficient * root;
            }
            product = next_product;
        }

        return Polynomial::new(product.iter().map(|coefficient| coefficient.re).collect());
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[0]
    }

    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut product = vec![0.0; self.coefficients.len() + other.coefficients.len() - 1];

        for (left_index, left) in self.coefficients.iter().enumerate() {
            for (right_index, right) in other.coefficients.iter().enumerate() {
                product[left_index + right_index] += left * right;
            }
        }

        return Polynomial::new(product);
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let length = self.coefficients.len().max(other.coefficients.len());
        let mut sum = vec![0.0; length];

        // right aligned, constant terms share the last slot
        for (offset, coefficient) in self.coefficients.iter().rev().enumerate() {
            sum[length - 1 - offset] += coefficient;
        }
        for (offset, coefficient) in other.coefficients.iter().rev().enumerate() {
            sum[length - 1 - offset] += coefficient;
        }

        return Polynomial::new(sum);
    }

    pub fn scale(&self, factor: f64) -> Polynomial {
        return Polynomial::new(self.coefficients.iter().map(|coefficient| coefficient * factor).collect());
    }

    pub fn pow(&self, exponent: usize) -> Polynomial {
        let mut result = Polynomial::constant(1.0);

        for _ in 0..exponent {
            result = result.multiply(self);
        }

        return result;
    }

    pub fn evaluate(&self, argument: Complex<f64>) -> Complex<f64> {
        return self.coefficients
            .iter()
            .fold(Complex::zero(), |accumulator, coefficient| accumulator * argument + coefficient);
    }

    /// `p(factor * s)`.
    pub fn scale_argument(&self, factor: f64) -> Polynomial {
        let mut power = 1.0;
        let mut scaled = self.coefficients.clone();

        for coefficient in scaled.iter_mut().rev() {
            *coefficient *= power;
            power *= factor;
        }

        return Polynomial::new(scaled);
    }

    /// Reverses the coefficient order and pads with trailing zeros up to `length`,
    /// which is `s^(length - 1) * p(1/s)`.
    pub fn reversed_padded(&self, length: usize) -> Polynomial {
        let mut reversed: Vec<f64> = self.coefficients.iter().rev().cloned().collect();

        if reversed.len() < length {
            reversed.resize(length, 0.0);
        }

        return Polynomial::new(reversed);
    }

    /// Homogenized composition `p(n/d) * d^deg(p)`.
    pub fn substitute(&self, numerator: &Polynomial, denominator: &Polynomial) -> Polynomial {
        let degree = self.degree();

        let mut numerator_powers: Vec<Polynomial> = Vec::with_capacity(degree + 1);
        let mut denominator_powers: Vec<Polynomial> = Vec::with_capacity(degree + 1);
        numerator_powers.push(Polynomial::constant(1.0));
        denominator_powers.push(Polynomial::constant(1.0));

        for power in 1..=degree {
            numerator_powers.push(numerator_powers[power - 1].multiply(numerator));
            denominator_powers.push(denominator_powers[power - 1].multiply(denominator));
        }

        let mut composition = Polynomial::constant(0.0);

        for (index, coefficient) in self.coefficients.iter().enumerate() {
            let term_degree = degree - index;
            let term = numerator_powers[term_degree]
                .multiply(&denominator_powers[degree - term_degree])
                .scale(*coefficient);

            composition = composition.add(&term);
        }

        return composition;
    }

    pub fn is_finite(&self) -> bool {
        return self.coefficients.iter().all(|coefficient| coefficient.is_finite());
    }
}
