use crate::dsp::system_response::rational_function::RationalFunction;
use crate::dsp::system_response::zero_pole_gain::ZeroPoleGain;


/// Low-pass filter normalized to a characteristic frequency of 1 rad/s, together with the
/// ripple factor used when its frequency or bandwidth factor is chosen.
#[derive(Clone, Debug, PartialEq)]
pub struct LowPassPrototype {
    pub eps: f64,
    pub zero_pole_gain: ZeroPoleGain
}

impl LowPassPrototype {
    pub fn new(eps: f64, zero_pole_gain: ZeroPoleGain) -> Self {
        LowPassPrototype { eps, zero_pole_gain }
    }

    pub fn order(&self) -> usize {
        self.zero_pole_gain.poles.len()
    }

    pub fn to_rational_function(&self) -> RationalFunction {
        self.zero_pole_gain.to_rational_function()
    }
}


/// Pole angles in degrees shared by the Butterworth and Chebyshev families, paired with their
/// index `k`. Even and odd orders use different offsets so that no pole sits on the imaginary axis.
pub fn pole_angle_schedule(order: usize) -> Vec<(i64, f64)> {
    let order_signed = order as i64;
    let order_inverse = 1.0 / order as f64;

    if order % 2 == 0 {
        return ((-order_signed / 2 + 1)..=(order_signed / 2))
            .map(|k| (k, order_inverse * (180.0 * k as f64 - 90.0)))
            .collect();
    }

    let half_span = (order_signed - 1) / 2;
    return (-half_span..=half_span)
        .map(|k| (k, order_inverse * 180.0 * k as f64))
        .collect();
}
