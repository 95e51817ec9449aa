use crate::dsp::system_response::polynomial::Polynomial;
use crate::dsp::system_response::rational_function::RationalFunction;

// All mappings return new rational functions; the prototype is never modified.


/// `s <- s / factor`.
pub fn lp_to_lp(prototype: &RationalFunction, factor: f64) -> RationalFunction {
    return prototype.scale_argument(1.0 / factor);
}

/// `s <- factor / s`.
pub fn lp_to_hp(prototype: &RationalFunction, factor: f64) -> RationalFunction {
    let scaled = prototype.scale_argument(factor);
    return reverse_coefficients(&scaled.numerator, &scaled.denominator);
}

/// `s <- 1 / s`: both polynomials reversed degree for degree and zero padded to
/// `max(deg N, deg D) + 1` coefficients, so numerator and denominator come out the same length.
pub fn reverse_coefficients(numerator: &Polynomial, denominator: &Polynomial) -> RationalFunction {
    let filter_length = numerator.degree().max(denominator.degree()) + 1;

    return RationalFunction::new(
        numerator.reversed_padded(filter_length),
        denominator.reversed_padded(filter_length)
    );
}

/// `s <- bw (s^2 + w0^2) / s`. The order doubles.
pub fn lp_to_bp(prototype: &RationalFunction, center_frequency: f64, bandwidth: f64) -> RationalFunction {
    let substitution = RationalFunction::new(
        Polynomial::new(vec![bandwidth, 0.0, bandwidth * center_frequency * center_frequency]),
        Polynomial::new(vec![1.0, 0.0])
    );

    return prototype.substitute(&substitution);
}

/// `s <- bw s / (s^2 + w0^2)`. The order doubles.
pub fn lp_to_bs(prototype: &RationalFunction, center_frequency: f64, bandwidth: f64) -> RationalFunction {
    let substitution = RationalFunction::new(
        Polynomial::new(vec![bandwidth, 0.0]),
        Polynomial::new(vec![1.0, 0.0, center_frequency * center_frequency])
    );

    return prototype.substitute(&substitution);
}
