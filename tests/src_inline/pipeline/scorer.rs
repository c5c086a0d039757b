use super::*;
use crate::model::build_mode;

fn demo_modes() -> Vec<Mode> {
    vec![
        build_mode("audio", 0.35, 0.82, 0.55, 0.18),
        build_mode("visual", 0.60, 0.92, 0.90, 0.45),
        build_mode("tactile", 0.25, 0.60, 0.40, 0.12),
        build_mode("vestibular", 0.40, 0.70, 0.50, 0.30),
    ]
}

#[test]
fn test_single_mode_formula() {
    let modes = vec![build_mode("audio", 0.35, 0.82, 0.55, 0.18)];
    let out = compute_optima(&modes, None);
    let base: f64 = 0.55 * 0.82 + 0.35 * 0.55 - 0.25 * 0.18;
    let expected = 0.65 * base + 0.35 * base * base;
    let score = out.score_star.unwrap();
    assert!((base - 0.5985).abs() < 1e-12);
    assert!((score - expected).abs() < 1e-12);
    assert!((score - 0.5144).abs() < 1e-4);
    assert_eq!(out.mode_star.as_deref(), Some("audio"));
    assert_eq!(out.lambda_star, Some(0.35));
}

#[test]
fn test_lambda_zero_is_linear() {
    let mode = build_mode("m", 0.0, 0.3, 0.7, 0.9);
    let weights = Weights::default_v1();
    let base = weights.snr * 0.3 + weights.coverage * 0.7 - weights.cost * 0.9;
    assert_eq!(score_mode(&mode, &weights), base);
}

#[test]
fn test_lambda_one_is_quadratic() {
    let mode = build_mode("m", 1.0, 0.3, 0.7, 0.9);
    let weights = Weights::default_v1();
    let base = weights.snr * 0.3 + weights.coverage * 0.7 - weights.cost * 0.9;
    assert_eq!(score_mode(&mode, &weights), base * base);
}

#[test]
fn test_demo_ranking_order() {
    let modes = demo_modes();
    let out = compute_optima(&modes, None);
    let names = out.ranking.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["visual", "audio", "vestibular", "tactile"]);
    assert_eq!(out.ranking.len(), modes.len());
    for pair in out.ranking.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
    assert_eq!(out.ranking[0].1, out.score_star.unwrap());
    assert_eq!(out.lambda_star, Some(0.60));
}

#[test]
fn test_alignment_and_triad() {
    let out = compute_optima(&demo_modes(), None);
    let score_star = out.score_star.unwrap();
    let delta_phi = (score_star - H7_TARGET).abs();
    assert_eq!(out.delta_phi, Some(delta_phi));
    assert_eq!(out.alignment, Some((1.0 - delta_phi).max(0.0)));
    assert!((out.triad.energy - 0.76).abs() < 1e-12);
    assert!((out.triad.information - 0.5875).abs() < 1e-12);
    assert_eq!(out.triad.consciousness, out.alignment.unwrap());
    assert_eq!(out.h7_target, 0.70);
}

#[test]
fn test_alignment_floor_at_zero() {
    // base = 0.55 * 4 = 2.2, far above the target.
    let modes = vec![build_mode("loud", 0.0, 4.0, 0.0, 0.0)];
    let out = compute_optima(&modes, None);
    assert!(out.delta_phi.unwrap() > 1.0);
    assert_eq!(out.alignment, Some(0.0));
    assert_eq!(out.triad.consciousness, 0.0);
}

#[test]
fn test_empty_input() {
    let out = compute_optima(&[], None);
    assert_eq!(out.mode_star, None);
    assert_eq!(out.lambda_star, None);
    assert_eq!(out.score_star, None);
    assert_eq!(out.delta_phi, None);
    assert_eq!(out.alignment, None);
    assert!(out.ranking.is_empty());
    assert_eq!(out.triad, Triad::default());
}

#[test]
fn test_ties_keep_input_order() {
    let modes = vec![
        build_mode("first", 0.2, 0.5, 0.5, 0.1),
        build_mode("low", 0.2, 0.1, 0.1, 0.1),
        build_mode("second", 0.2, 0.5, 0.5, 0.1),
    ];
    let out = compute_optima(&modes, None);
    let names = out.ranking.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["first", "second", "low"]);
    assert_eq!(out.mode_star.as_deref(), Some("first"));
}

#[test]
fn test_custom_weights_change_winner() {
    let modes = demo_modes();
    let weights = Weights {
        snr: 1.0,
        coverage: 0.0,
        cost: 3.0,
    };
    assert_eq!(
        compute_optima(&modes, None).mode_star.as_deref(),
        Some("visual")
    );
    let out = compute_optima(&modes, Some(&weights));
    assert_eq!(out.mode_star.as_deref(), Some("audio"));
}

#[test]
fn test_out_of_range_inputs_not_clamped() {
    let mode = build_mode("wild", 2.0, 1.5, -0.5, 0.0);
    let weights = Weights::default_v1();
    let base = 0.55 * 1.5 + 0.35 * -0.5;
    let expected = (1.0 - 2.0) * base + 2.0 * base * base;
    assert!((score_mode(&mode, &weights) - expected).abs() < 1e-12);
}

#[test]
fn test_determinism_bits() {
    let a = compute_optima(&demo_modes(), None);
    let b = compute_optima(&demo_modes(), None);
    assert_eq!(
        a.score_star.unwrap().to_bits(),
        b.score_star.unwrap().to_bits()
    );
    assert_eq!(a, b);
}

#[test]
fn test_missing_lambda_gives_no_lambda_star() {
    let modes = vec![
        Mode {
            name: "bare".to_string(),
            lambda: None,
            snr: 0.9,
            coverage: 0.0,
            cost: 0.0,
        },
        build_mode("quiet", 0.5, 0.1, 0.1, 0.1),
    ];
    let out = compute_optima(&modes, None);
    assert_eq!(out.mode_star.as_deref(), Some("bare"));
    assert_eq!(out.lambda_star, None);
    // Scored as lambda = 0.0, i.e. the linear response.
    assert_eq!(out.score_star, Some(0.55 * 0.9));
}
