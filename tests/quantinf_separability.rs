mod common;

use common::approx_eq;
use quantinf::core::measures::{
    kl_distance, log_negativity, negativity, peres_horodecki, NEGATIVITY_MASK, PERES_HORODECKI_MASK,
};
use quantinf::core::ops::{ket2dm, EPS};
use quantinf::core::states::{bell_state, maximally_mixed, product_ket, werner_state, BellKind};
use quantinf::core::{QState, QuantInfError, StateKind};

fn bell_oper() -> QState {
    ket2dm(&bell_state(BellKind::PhiPlus)).into()
}

#[test]
fn default_masks_transpose_different_factors() {
    assert_eq!(PERES_HORODECKI_MASK, [0, 1]);
    assert_eq!(NEGATIVITY_MASK, [1, 0]);
}

#[test]
fn bell_state_is_flagged_entangled() {
    let rho = bell_oper();
    assert!(peres_horodecki(&rho, &PERES_HORODECKI_MASK).unwrap());
    assert!(peres_horodecki(&rho, &NEGATIVITY_MASK).unwrap());
    assert!(approx_eq(negativity(&rho, &NEGATIVITY_MASK).unwrap(), 0.5, 1e-10));
    assert!(approx_eq(log_negativity(&rho, &NEGATIVITY_MASK).unwrap(), 1.0, 1e-10));
}

#[test]
fn product_state_is_separable() {
    let rho: QState = ket2dm(&product_ket(&[(2, 0), (2, 0)]).unwrap()).into();
    assert!(!peres_horodecki(&rho, &PERES_HORODECKI_MASK).unwrap());
    assert!(negativity(&rho, &NEGATIVITY_MASK).unwrap().abs() < 1e-10);
    assert!(log_negativity(&rho, &NEGATIVITY_MASK).unwrap().abs() < 1e-10);

    let mixed: QState = maximally_mixed(&[2, 2]).unwrap().into();
    assert!(!peres_horodecki(&mixed, &PERES_HORODECKI_MASK).unwrap());
    assert!(negativity(&mixed, &NEGATIVITY_MASK).unwrap().abs() < 1e-10);
}

#[test]
fn werner_negativity_matches_closed_form() {
    // partial transpose spectrum: (1+p)/4 (×3) and (1−3p)/4
    let rho: QState = werner_state(0.8).unwrap().into();
    assert!(approx_eq(negativity(&rho, &NEGATIVITY_MASK).unwrap(), 0.35, 1e-10));
    assert!(approx_eq(log_negativity(&rho, &NEGATIVITY_MASK).unwrap(), 1.7f64.log2(), 1e-10));
}

#[test]
fn negativity_positive_iff_ppt_test_fails() {
    for p in [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.7, 0.9, 1.0] {
        let rho: QState = werner_state(p).unwrap().into();
        let entangled = peres_horodecki(&rho, &PERES_HORODECKI_MASK).unwrap();
        let neg = negativity(&rho, &NEGATIVITY_MASK).unwrap();
        assert!(neg > -1e-10, "p = {p}: negativity {neg}");
        assert_eq!(entangled, neg > EPS, "p = {p}: negativity {neg}");
        assert_eq!(entangled, p > 1.0 / 3.0);
    }
}

#[test]
fn werner_just_past_threshold_is_entangled() {
    // smallest partial-transpose eigenvalue is -2.25e-9
    let rho: QState = werner_state(1.0 / 3.0 + 3e-9).unwrap().into();
    let neg = negativity(&rho, &NEGATIVITY_MASK).unwrap();
    assert!(peres_horodecki(&rho, &PERES_HORODECKI_MASK).unwrap(), "negativity {neg}");
    assert!(neg > EPS);
    assert!(approx_eq(neg, 2.25e-9, 1e-12));
}

#[test]
fn kets_are_rejected() {
    let ket = QState::from(bell_state(BellKind::PhiPlus));
    let expected = QuantInfError::invalid_kind("operator", StateKind::Ket);
    assert_eq!(peres_horodecki(&ket, &PERES_HORODECKI_MASK).unwrap_err(), expected);
    assert_eq!(negativity(&ket, &NEGATIVITY_MASK).unwrap_err(), expected);
    assert_eq!(log_negativity(&ket, &NEGATIVITY_MASK).unwrap_err(), expected);
    assert_eq!(kl_distance(&ket, &bell_oper()).unwrap_err(), expected);
    assert_eq!(kl_distance(&bell_oper(), &ket).unwrap_err(), expected);
}

#[test]
fn mask_length_must_match_subsystems() {
    let err = negativity(&bell_oper(), &[1, 0, 0]).unwrap_err();
    assert!(matches!(err, QuantInfError::DimensionMismatch(_)));
}
