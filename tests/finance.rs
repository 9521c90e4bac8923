use rural_infra_toolbox::finance::{annualize, npv, pvf, FinanceError};

#[test]
fn npv_at_zero_rate_equals_duration() {
    assert_eq!(npv(0, 0.0), 0.0);
    assert_eq!(npv(1, 0.0), 1.0);
    assert_eq!(npv(20, 0.0), 20.0);
}

#[test]
fn npv_single_year_is_one_for_any_rate() {
    for r in [0.0, 0.02, 0.06, 0.15, 0.5] {
        assert_eq!(npv(1, r), 1.0, "rate={r}");
    }
}

#[test]
fn npv_is_geometric_sum() {
    let r: f64 = 0.06;
    let expected = 1.0 + 1.0 / 1.06 + 1.0 / (1.06f64 * 1.06);
    assert!((npv(3, r) - expected).abs() < 1e-12);
}

#[test]
fn annualize_splits_capex_over_npv_factor() {
    let capex = 1200.0;
    let annual = annualize(capex, 20, 0.06).expect("annualize");
    assert!((annual - capex / npv(20, 0.06)).abs() < 1e-12);
    assert!(annual > capex / 20.0); // 할인 때문에 단순 분할보다 크다
}

#[test]
fn annualize_rejects_zero_duration() {
    assert_eq!(
        annualize(1000.0, 0, 0.06).unwrap_err(),
        FinanceError::ZeroDuration
    );
}

#[test]
fn annualize_rejects_rate_outside_unit_interval() {
    assert!(matches!(
        annualize(1000.0, 10, 1.0),
        Err(FinanceError::InvalidRate(_))
    ));
    assert!(matches!(
        annualize(1000.0, 10, -0.01),
        Err(FinanceError::InvalidRate(_))
    ));
}

#[test]
fn pvf_matches_closed_form() {
    let r: f64 = 0.06;
    let n = 20.0;
    let growth = 1.06f64.powf(n);
    let expected = (growth - 1.0) / (growth * r);
    assert!((pvf(r, n).expect("pvf") - expected).abs() < 1e-12);
}

#[test]
fn pvf_rejects_zero_rate() {
    assert!(matches!(pvf(0.0, 20.0), Err(FinanceError::InvalidRate(_))));
}
