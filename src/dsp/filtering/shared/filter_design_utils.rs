use std::f64::consts::PI;


pub fn linear_to_db(gain_value: f64) -> f64 {
    return 20.0 * gain_value.log10();
}

pub fn db_to_linear(gain_value: f64) -> f64 {
    return (10.0 as f64).powf(gain_value / 20.0);
}

pub fn hz_to_angular(frequency_hz: f64) -> f64 {
    return 2.0 * PI * frequency_hz;
}

/// `10^(a/10) - 1`, the squared ripple factor belonging to an attenuation of `a` dB.
pub fn attenuation_factor(attenuation_db: f64) -> f64 {
    return (10.0 as f64).powf(0.1 * attenuation_db) - 1.0;
}

pub fn ripple_factor(attenuation_db: f64) -> f64 {
    return attenuation_factor(attenuation_db).sqrt();
}

/// Geometric band centre and quality factor of a pair of band edges.
pub fn band_center_and_q(lower_frequency: f64, upper_frequency: f64) -> (f64, f64) {
    let center_frequency = (lower_frequency * upper_frequency).sqrt();
    let q_factor = center_frequency / (upper_frequency - lower_frequency);

    return (center_frequency, q_factor);
}
