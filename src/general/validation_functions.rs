#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundType {
    Inclusive,
    Exclusive
}


pub fn is_within_bounds<T: PartialOrd>(term: T, bounds: (T, T), bound_types: (BoundType, BoundType)) -> bool {
    let obey_lower_bound = match bound_types.0 {
        BoundType::Inclusive => term >= bounds.0,
        BoundType::Exclusive => term > bounds.0
    };
    let obey_upper_bound = match bound_types.1 {
        BoundType::Inclusive => term <= bounds.1,
        BoundType::Exclusive => term < bounds.1
    };

    return obey_lower_bound && obey_upper_bound;
}

/// Positive and finite. Every frequency and attenuation the designer accepts must pass this.
pub fn is_positive_finite(term: f64) -> bool {
    return term.is_finite() && is_within_bounds(term, (0.0, f64::INFINITY), (BoundType::Exclusive, BoundType::Exclusive));
}

/// True when every element is strictly greater than the one before it.
pub fn is_strictly_increasing(terms: &[f64]) -> bool {
    return terms.windows(2).all(|pair| pair[0] < pair[1]);
}
