//! Fixed-seed scenarios for the two-rate study.
//!
//! Trial counts are large enough that the statistical checks hold with a wide
//! margin; seeds are fixed so they are reproducible anyway.

use lccusum::{
    approx_run_length, estimate_arl, estimate_arl_detailed, run_report, ArlConfig, SamplingScheme,
    Weights,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn acceptable_rate_signals_sooner_than_unacceptable() {
    // With the weights as derived, the walk drifts up at p0 and down at p0 + δ.
    let (p0, delta) = (0.3, 0.1);
    let w = Weights::new(p0, delta).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let arl_unacceptable = estimate_arl(&mut rng, 1.0, w, p0 + delta, 1000, 200).unwrap();
    let arl_acceptable = estimate_arl(&mut rng, 1.0, w, p0, 1000, 200).unwrap();
    assert!(
        arl_unacceptable > arl_acceptable,
        "ARL0={arl_unacceptable} should exceed ARL1={arl_acceptable}"
    );
}

#[test]
fn report_orders_arl0_above_arl1() {
    let cfg = ArlConfig {
        p0: 0.1,
        delta: 0.1,
        threshold: 2.0,
        trials: 800,
        subjects: 300,
        ..ArlConfig::default()
    }
    .with_seed(17);
    let (mut rng, seed) = cfg.rng();
    assert_eq!(seed, 17);
    let r = run_report(&cfg, &mut rng).unwrap();
    assert!(r.arl0.mean > r.arl1.mean, "{r}");
    // Far more unacceptable-rate runs reach the end without signalling.
    assert!(r.arl0.censored > r.arl1.censored);
    let (lo, hi) = r.arl1.confidence_interval(1.96);
    assert!(lo <= r.arl1.mean && r.arl1.mean <= hi);
}

#[test]
fn positive_drift_estimate_is_near_wald_approximation() {
    // p0 = 0.1, δ = 0.2: drift at p0 ≈ 0.116 per step, h / drift ≈ 26.
    let w = Weights::new(0.1, 0.2).unwrap();
    let h = 3.0;
    let approx = approx_run_length(h, w.drift(0.1)).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let est = estimate_arl_detailed(&mut rng, h, w, 0.1, 2000, 1000, SamplingScheme::FixedCount)
        .unwrap();
    assert_eq!(est.censored, 0, "horizon should be long enough");
    assert!(
        est.mean > 0.5 * approx && est.mean < 1.5 * approx,
        "estimate {} vs approximation {}",
        est.mean,
        approx
    );
}

#[test]
fn bernoulli_scheme_agrees_with_fixed_count_in_the_mean() {
    let w = Weights::new(0.1, 0.2).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let fixed =
        estimate_arl_detailed(&mut rng, 3.0, w, 0.1, 2000, 1000, SamplingScheme::FixedCount)
            .unwrap();
    let iid = estimate_arl_detailed(&mut rng, 3.0, w, 0.1, 2000, 1000, SamplingScheme::Bernoulli)
        .unwrap();
    let rel = (fixed.mean - iid.mean).abs() / fixed.mean;
    assert!(rel < 0.15, "fixed={} iid={}", fixed.mean, iid.mean);
}

#[test]
fn non_positive_threshold_with_leading_success_is_immediate() {
    // rate 0: all zeros, so the first step already lifts the score above h = 0.
    let w = Weights::new(0.25, 0.1).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(estimate_arl(&mut rng, 0.0, w, 0.0, 50, 40).unwrap(), 1.0);
    assert_eq!(estimate_arl(&mut rng, -1.0, w, 0.0, 50, 40).unwrap(), 1.0);
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes() {
    let cfg = ArlConfig {
        trials: 20,
        subjects: 30,
        ..ArlConfig::default()
    };
    let r = run_report(&cfg, &mut StdRng::seed_from_u64(3)).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["config"]["trials"], 20);
    assert!(json["arl0"]["mean"].is_number());
    assert!(json["weights"]["wt0"].as_f64().unwrap() > 0.0);
}
