// Frequencies are angular (rad/s, the unit of the Laplace variable). Attenuations are positive dB.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::general::validation_functions::{is_positive_finite, is_strictly_increasing};
use super::errors::{FilterDesignError, FilterResult};


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    LowPass,
    HighPass,
    BandPass,
    BandStop
}

impl FilterType {
    pub fn is_band(&self) -> bool {
        return matches!(self, FilterType::BandPass | FilterType::BandStop);
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterType::LowPass => "low-pass",
            FilterType::HighPass => "high-pass",
            FilterType::BandPass => "band-pass",
            FilterType::BandStop => "band-stop",
        };
        write!(f, "{}", name)
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LowPassSpecs {
    pub pass_band_frequency: f64,
    pub stop_band_frequency: f64,
    pub pass_band_ripple: f64,
    pub stop_band_attenuation: f64
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighPassSpecs {
    pub pass_band_frequency: f64,
    pub stop_band_frequency: f64,
    pub pass_band_ripple: f64,
    pub stop_band_attenuation: f64
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandPassSpecs {
    pub lower_pass_band_frequency: f64,
    pub upper_pass_band_frequency: f64,
    pub lower_stop_band_frequency: f64,
    pub upper_stop_band_frequency: f64,
    pub pass_band_ripple: f64,
    pub lower_stop_band_attenuation: f64,
    pub upper_stop_band_attenuation: f64
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandStopSpecs {
    pub lower_pass_band_frequency: f64,
    pub upper_pass_band_frequency: f64,
    pub lower_stop_band_frequency: f64,
    pub upper_stop_band_frequency: f64,
    pub pass_band_ripple: f64,
    pub stop_band_attenuation: f64
}


fn check_positive(name: &str, value: f64) -> FilterResult<()> {
    if !is_positive_finite(value) {
        return Err(FilterDesignError::InvalidSpec(format!("{} must be positive and finite, got {}", name, value)));
    }
    Ok(())
}

fn check_attenuations(pass_band_ripple: f64, stop_band_attenuations: &[(&str, f64)]) -> FilterResult<()> {
    check_positive("pass_band_ripple", pass_band_ripple)?;

    for (name, attenuation) in stop_band_attenuations.iter() {
        check_positive(name, *attenuation)?;

        if *attenuation <= pass_band_ripple {
            return Err(FilterDesignError::InvalidSpec(
                format!("{} ({} dB) must exceed pass_band_ripple ({} dB)", name, attenuation, pass_band_ripple)
            ));
        }
    }
    Ok(())
}

fn check_edges(edges: &[(&str, f64)], ordering: &str) -> FilterResult<()> {
    for (name, frequency) in edges.iter() {
        check_positive(name, *frequency)?;
    }

    let frequencies: Vec<f64> = edges.iter().map(|(_, frequency)| *frequency).collect();
    if !is_strictly_increasing(&frequencies) {
        return Err(FilterDesignError::InvalidSpec(format!("band edges must satisfy {}, got {:?}", ordering, frequencies)));
    }
    Ok(())
}


impl LowPassSpecs {
    pub fn new(pass_band_frequency: f64, stop_band_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> Self {
        LowPassSpecs { pass_band_frequency, stop_band_frequency, pass_band_ripple, stop_band_attenuation }
    }

    pub fn validate(&self) -> FilterResult<()> {
        check_edges(
            &[("pass_band_frequency", self.pass_band_frequency), ("stop_band_frequency", self.stop_band_frequency)],
            "pass_band_frequency < stop_band_frequency"
        )?;
        return check_attenuations(self.pass_band_ripple, &[("stop_band_attenuation", self.stop_band_attenuation)]);
    }
}

impl HighPassSpecs {
    pub fn new(pass_band_frequency: f64, stop_band_frequency: f64, pass_band_ripple: f64, stop_band_attenuation: f64) -> Self {
        HighPassSpecs { pass_band_frequency, stop_band_frequency, pass_band_ripple, stop_band_attenuation }
    }

    pub fn validate(&self) -> FilterResult<()> {
        check_edges(
            &[("stop_band_frequency", self.stop_band_frequency), ("pass_band_frequency", self.pass_band_frequency)],
            "stop_band_frequency < pass_band_frequency"
        )?;
        return check_attenuations(self.pass_band_ripple, &[("stop_band_attenuation", self.stop_band_attenuation)]);
    }
}

impl BandPassSpecs {
    pub fn validate(&self) -> FilterResult<()> {
        check_edges(
            &[
                ("lower_stop_band_frequency", self.lower_stop_band_frequency),
                ("lower_pass_band_frequency", self.lower_pass_band_frequency),
                ("upper_pass_band_frequency", self.upper_pass_band_frequency),
                ("upper_stop_band_frequency", self.upper_stop_band_frequency),
            ],
            "ws1 < wp1 < wp2 < ws2"
        )?;
        return check_attenuations(
            self.pass_band_ripple,
            &[
                ("lower_stop_band_attenuation", self.lower_stop_band_attenuation),
                ("upper_stop_band_attenuation", self.upper_stop_band_attenuation),
            ]
        );
    }
}

impl BandStopSpecs {
    pub fn validate(&self) -> FilterResult<()> {
        check_edges(
            &[
                ("lower_pass_band_frequency", self.lower_pass_band_frequency),
                ("lower_stop_band_frequency", self.lower_stop_band_frequency),
                ("upper_stop_band_frequency", self.upper_stop_band_frequency),
                ("upper_pass_band_frequency", self.upper_pass_band_frequency),
            ],
            "wp1 < ws1 < ws2 < wp2"
        )?;
        return check_attenuations(self.pass_band_ripple, &[("stop_band_attenuation", self.stop_band_attenuation)]);
    }
}
