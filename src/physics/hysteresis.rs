use crate::models::{FieldSample, RodParameters};

// Stability thresholds. Changing either breaks agreement with the reference model.
pub const ABSOLUTE_ERROR: f64 = 1e-6;
pub const DENOMINATOR_EPSILON: f64 = 1e-9;

/// Langevin M_an(H_eff) and dM_an/dH_eff, both zero for |H_eff / a| <= ABSOLUTE_ERROR.
pub fn anhysteretic(params: &RodParameters, h_eff: f64) -> (f64, f64) {
    if (h_eff / params.a).abs() > ABSOLUTE_ERROR {
        let x = h_eff / params.a;
        let tanhx = x.tanh();
        let man = params.ms * (1.0 / tanhx - 1.0 / x);
        let dman_dheff = params.ms / params.a * (1.0 - 1.0 / (tanhx * tanhx) + 1.0 / (x * x));
        (man, dman_dheff)
    } else {
        (0.0, 0.0)
    }
}

fn clamp_denominator(denominator: f64) -> f64 {
    if denominator.abs() < DENOMINATOR_EPSILON {
        DENOMINATOR_EPSILON.copysign(denominator)
    } else {
        denominator
    }
}

pub fn dmdt(params: &RodParameters, m: f64, h: f64, dh_dt: f64) -> f64 {
    let h_eff = h + params.alpha * m;
    let (man, dman_dheff) = anhysteretic(params, h_eff);

    // Branch on the direction the field is moving, not on the field itself
    let sign = if dh_dt >= 0.0 { 1.0 } else { -1.0 };
    let denominator = clamp_denominator(params.k * sign - params.alpha * (man - m));

    let dmirr_dh = (man - m) / denominator;
    let dmrev_dh = params.c * dman_dheff;
    let dm_dh = (1.0 - params.c) * dmirr_dh + dmrev_dh;

    dm_dh * dh_dt
}

pub fn dmdt_sample(params: &RodParameters, m: f64, sample: &FieldSample) -> f64 {
    dmdt(params, m, sample.h, sample.dh_dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    const FIXTURE: RodParameters = RodParameters {
        ms: 1.4e5,
        a: 2.0e3,
        k: 1.0e3,
        c: 0.2,
        alpha: 1.0e-3,
    };

    #[test_case(5.0e4, 1.5e3, 1.0e2, -782.51825848; "rising field")]
    #[test_case(5.0e4, 1.5e3, -1.0e2, -1650.58156137; "falling field")]
    #[test_case(5.0e4, 1591.5494309189535, 79.57747154594767, -510.24644148; "projected field")]
    fn matches_reference_model(m: f64, h: f64, dh_dt: f64, expected: f64) {
        assert_abs_diff_eq!(dmdt(&FIXTURE, m, h, dh_dt), expected, epsilon = 1e-6);
    }

    #[test]
    fn falling_field_selects_the_other_branch() {
        let rising = dmdt(&FIXTURE, 5.0e4, 1.5e3, 1.0e2);
        let falling = dmdt(&FIXTURE, 5.0e4, 1.5e3, -1.0e2);
        assert!((rising - falling).abs() > 1.0);
    }

    #[test]
    fn zero_rate_is_rising_branch_and_gives_zero() {
        let value = dmdt(&FIXTURE, 5.0e4, 1.5e3, 0.0);
        assert_eq!(value, 0.0);
    }

    #[test_case(0.0; "exact zero")]
    #[test_case(0.5e-6 * 2.0e3; "inside threshold")]
    #[test_case(-0.999e-6 * 2.0e3; "inside threshold negative")]
    #[test_case(ABSOLUTE_ERROR * 2.0e3; "on threshold")]
    #[test_case(-ABSOLUTE_ERROR * 2.0e3; "on threshold negative")]
    fn anhysteretic_is_zero_near_origin(h_eff: f64) {
        let (man, dman_dheff) = anhysteretic(&FIXTURE, h_eff);
        assert_eq!(man, 0.0);
        assert_eq!(dman_dheff, 0.0);
    }

    #[test]
    fn anhysteretic_follows_langevin_outside_threshold() {
        let (man, dman_dheff) = anhysteretic(&FIXTURE, 1.55e3);
        assert_abs_diff_eq!(man, 34796.64107505434, epsilon = 1e-6);
        assert_abs_diff_eq!(dman_dheff, 20.776800325587622, epsilon = 1e-9);
    }

    #[test]
    fn anhysteretic_is_odd() {
        let (pos, dpos) = anhysteretic(&FIXTURE, 3.0e3);
        let (neg, dneg) = anhysteretic(&FIXTURE, -3.0e3);
        assert_abs_diff_eq!(pos, -neg, epsilon = 1e-9);
        assert_abs_diff_eq!(dpos, dneg, epsilon = 1e-12);
    }

    #[test]
    fn demagnetized_rod_in_zero_field_stays_finite() {
        let value = dmdt(&FIXTURE, 0.0, 0.0, 1.0e-7);
        assert!(value.is_finite());
        assert_eq!(value, 0.0);
    }

    #[test]
    fn near_saturation_stays_finite() {
        let value = dmdt(&FIXTURE, 1.3e5, 2.5e3, 1.0);
        assert!(value.is_finite());
        assert_abs_diff_eq!(value, -52.20777896167597, epsilon = 1e-9);
    }

    #[test]
    fn vanishing_denominator_is_clamped() {
        // h_eff = 1 - 0.5 * 2 = 0 so M_an = 0, and k - alpha * (0 - m) = 1 - 1 = 0
        let params = RodParameters {
            ms: 1.4e5,
            a: 2.0e3,
            k: 1.0,
            c: 0.2,
            alpha: 0.5,
        };
        let value = dmdt(&params, -2.0, 1.0, 1.0);
        assert!(value.is_finite());
        assert_relative_eq!(value, 1.6e9, max_relative = 1e-12);
    }

    #[test_case(0.0, DENOMINATOR_EPSILON; "positive zero")]
    #[test_case(-0.0, -DENOMINATOR_EPSILON; "negative zero")]
    #[test_case(3.0e-12, DENOMINATOR_EPSILON; "tiny positive")]
    #[test_case(-3.0e-12, -DENOMINATOR_EPSILON; "tiny negative")]
    #[test_case(-2.5, -2.5; "untouched")]
    #[test_case(1.0e-9, 1.0e-9; "at threshold")]
    fn clamp_keeps_sign(input: f64, expected: f64) {
        let clamped = clamp_denominator(input);
        assert_eq!(clamped, expected);
        assert_eq!(clamped.is_sign_negative(), expected.is_sign_negative());
    }

    #[test]
    fn nan_propagates() {
        assert!(dmdt(&FIXTURE, f64::NAN, 1.5e3, 1.0e2).is_nan());
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let mut rng = StdRng::seed_from_u64(0x4a41);
        for _ in 0..500 {
            let m = rng.gen_range(-1.4e5..1.4e5);
            let h = rng.gen_range(-5.0e3..5.0e3);
            let dh_dt = rng.gen_range(-1.0e3..1.0e3);
            let first = dmdt(&FIXTURE, m, h, dh_dt);
            let second = dmdt(&FIXTURE, m, h, dh_dt);
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn both_rate_branches_are_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let m = rng.gen_range(-1.0e5..1.0e5);
            let h = rng.gen_range(-4.0e3..4.0e3);
            let rate = rng.gen_range(1.0..1.0e3);
            let up = dmdt(&FIXTURE, m, h, rate);
            let down = dmdt(&FIXTURE, m, h, -rate);
            assert!(up.is_finite() && down.is_finite());
            assert_ne!(up, -down);
        }
    }

    #[test]
    fn sample_wrapper_matches_scalar_form() {
        let sample = FieldSample::new(1.5e3, 1.0e2);
        assert_eq!(
            dmdt_sample(&FIXTURE, 5.0e4, &sample),
            dmdt(&FIXTURE, 5.0e4, 1.5e3, 1.0e2)
        );
    }
}
