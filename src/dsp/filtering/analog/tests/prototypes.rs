#[cfg(test)]
pub mod prototypes_tests {
    use approx::assert_relative_eq;
    use num::Complex;
    use crate::dsp::filtering::analog::approximation::{Approximation, ApproximationType};
    use crate::dsp::filtering::analog::prototype::{pole_angle_schedule, LowPassPrototype};
    use crate::dsp::filtering::shared::errors::FilterDesignError;
    use crate::dsp::filtering::shared::filter_design_utils::ripple_factor;

    fn loss_db(prototype: &LowPassPrototype, angular_frequency: f64) -> f64 {
        let response = prototype.zero_pole_gain.evaluate(Complex::new(0.0, angular_frequency));
        return -20.0 * response.norm().log10();
    }

    fn assert_stable(prototype: &LowPassPrototype) {
        for pole in prototype.zero_pole_gain.poles.iter() {
            assert!(pole.re < 0.0, "pole {} is not in the left half plane", pole);
        }
    }

    #[test]
    fn angle_schedule_avoids_the_imaginary_axis() {
        let even: Vec<f64> = pole_angle_schedule(4).iter().map(|(_, angle)| *angle).collect();
        assert!(even == vec![-67.5, -22.5, 22.5, 67.5]);

        let odd: Vec<i64> = pole_angle_schedule(3).iter().map(|(k, _)| *k).collect();
        assert!(odd == vec![-1, 0, 1]);
        assert_relative_eq!(pole_angle_schedule(3)[2].1, 60.0, epsilon = 1e-12);
    }

    #[test]
    fn butterworth_poles_sit_on_the_unit_circle() {
        for order in 1..=9 {
            let prototype = ApproximationType::Butterworth.build_prototype(order, 1.0, 40.0).unwrap();

            assert!(prototype.order() == order);
            assert!(prototype.zero_pole_gain.zeros.is_empty());
            assert_stable(&prototype);
            for pole in prototype.zero_pole_gain.poles.iter() {
                assert_relative_eq!(pole.norm(), 1.0, epsilon = 1e-12);
            }

            assert_relative_eq!(loss_db(&prototype, 0.0), 0.0, epsilon = 1e-9);
            assert_relative_eq!(loss_db(&prototype, 1.0), 3.0102999566398121, epsilon = 1e-9);
            assert_relative_eq!(prototype.eps, ripple_factor(1.0), epsilon = 1e-15);
        }
    }

    #[test]
    fn chebyshev_loses_the_ripple_at_the_band_edge() {
        let ripple = 0.5;

        for order in 1..=8 {
            let prototype = ApproximationType::Chebyshev.build_prototype(order, ripple, 40.0).unwrap();
            assert_stable(&prototype);
            assert_relative_eq!(loss_db(&prototype, 1.0), ripple, epsilon = 1e-9);

            let dc_loss = if order % 2 == 0 { ripple } else { 0.0 };
            assert_relative_eq!(loss_db(&prototype, 0.0), dc_loss, epsilon = 1e-9);
        }
    }

    #[test]
    fn inverse_chebyshev_reaches_the_stop_band_attenuation_at_unity() {
        let stop_band_attenuation = 40.0;

        for order in 1..=8 {
            let prototype = ApproximationType::InverseChebyshev.build_prototype(order, 1.0, stop_band_attenuation).unwrap();
            assert_stable(&prototype);

            let zero_count = if order % 2 == 1 { order - 1 } else { order };
            assert!(prototype.zero_pole_gain.zeros.len() == zero_count);
            for zero in prototype.zero_pole_gain.zeros.iter() {
                assert!(zero.re == 0.0 && zero.im.abs() > 1.0);
            }

            assert_relative_eq!(loss_db(&prototype, 0.0), 0.0, epsilon = 1e-9);
            assert_relative_eq!(loss_db(&prototype, 1.0), stop_band_attenuation, epsilon = 1e-7);
        }
    }

    #[test]
    fn elliptic_prototypes() {
        let ripple = 1.0;

        for order in 2..=8 {
            let prototype = ApproximationType::Elliptic.build_prototype(order, ripple, 40.0).unwrap();
            assert_stable(&prototype);
            assert!(prototype.zero_pole_gain.poles.len() == order);
            assert!(prototype.zero_pole_gain.zeros.len() == order - order % 2);

            assert_relative_eq!(loss_db(&prototype, 1.0), ripple, epsilon = 1e-6);

            let dc_loss = if order % 2 == 0 { ripple } else { 0.0 };
            assert_relative_eq!(loss_db(&prototype, 0.0), dc_loss, epsilon = 1e-6);
        }
    }

    #[test]
    fn first_order_elliptic_is_first_order_chebyshev() {
        let elliptic = ApproximationType::Elliptic.build_prototype(1, 1.0, 40.0).unwrap();
        let chebyshev = ApproximationType::Chebyshev.build_prototype(1, 1.0, 40.0).unwrap();
        assert!(elliptic == chebyshev);

        let eps = ripple_factor(1.0);
        assert_relative_eq!(elliptic.zero_pole_gain.poles[0].re, -1.0 / eps, epsilon = 1e-12);
        assert_relative_eq!(elliptic.zero_pole_gain.gain, 1.0 / eps, epsilon = 1e-12);
    }

    #[test]
    fn order_outside_the_supported_range() {
        for approximation in [
            ApproximationType::Butterworth,
            ApproximationType::Chebyshev,
            ApproximationType::InverseChebyshev,
            ApproximationType::Elliptic
        ] {
            let empty = approximation.build_prototype(0, 1.0, 40.0);
            assert!(matches!(empty, Err(FilterDesignError::UnsupportedConfiguration(_))));

            let huge = approximation.build_prototype(65, 1.0, 40.0);
            assert!(matches!(huge, Err(FilterDesignError::UnsupportedConfiguration(_))));
        }
    }
}
