use rural_infra_toolbox::hydro::{
    self, ElecTech, H2Tech, HydroConstants, HydroParams, HydroSite, WaterResource,
};

fn site() -> HydroSite {
    HydroSite {
        pv: 5.0,
        wind: 6.0,
        ocean_dist: 300.0,
        water_dist: 20.0,
        port_dist: 400.0,
        rest_area: 2.0,
        avail_area: 40.0,
    }
}

#[test]
fn pv_selected_when_cheaper() {
    let res = hydro::evaluate(&site(), &HydroParams::default(), &HydroConstants::default())
        .expect("evaluate");
    assert_eq!(res.elec_technology, ElecTech::Pv);
    assert_eq!(res.cost_elec, res.cost_elec_pv);
    assert!(res.cost_elec_pv < res.cost_elec_wind);
}

#[test]
fn wind_selected_when_cheaper() {
    let mut s = site();
    s.pv = 2.0;
    s.wind = 10.0;
    let res = hydro::evaluate(&s, &HydroParams::default(), &HydroConstants::default())
        .expect("evaluate");
    assert_eq!(res.elec_technology, ElecTech::Wind);
    assert_eq!(res.cost_elec, res.cost_elec_wind);
}

#[test]
fn cheapest_water_matches_cheaper_explicit_option() {
    // 수원이 가깝고 바다가 멀면 cheapest = domestic
    let consts = HydroConstants::default();
    let mut s = site();
    s.water_dist = 1.0;
    s.ocean_dist = 500.0;

    let mut pars = HydroParams::default();
    pars.water_resource = WaterResource::Cheapest;
    let cheapest = hydro::evaluate(&s, &pars, &consts).expect("evaluate");
    pars.water_resource = WaterResource::Domestic;
    let domestic = hydro::evaluate(&s, &pars, &consts).expect("evaluate");
    pars.water_resource = WaterResource::Ocean;
    let ocean = hydro::evaluate(&s, &pars, &consts).expect("evaluate");

    assert!((cheapest.cost_h2 - domestic.cost_h2).abs() < 1e-12);
    assert!(domestic.cost_h2 < ocean.cost_h2);
}

#[test]
fn transport_raises_delivered_cost_with_port_distance() {
    let pars = HydroParams::default();
    let consts = HydroConstants::default();
    let near = hydro::evaluate(
        &HydroSite {
            port_dist: 0.0,
            ..site()
        },
        &pars,
        &consts,
    )
    .expect("evaluate");
    let far = hydro::evaluate(&site(), &pars, &consts).expect("evaluate");
    assert!((near.h2_cost_to_demand - near.cost_h2).abs() < 1e-12);
    let expected = far.cost_h2 + pars.h2_trans_cost * 400.0 / 100.0;
    assert!((far.h2_cost_to_demand - expected).abs() < 1e-9);
}

#[test]
fn area_gate_zeroes_possible_generation() {
    let mut s = site();
    s.avail_area = 2.5;
    s.rest_area = 2.0; // 가용 0.5 < min_area 1.0
    let res = hydro::evaluate(&s, &HydroParams::default(), &HydroConstants::default())
        .expect("evaluate");
    assert_eq!(res.tech, H2Tech::None);
    assert_eq!(res.pv_gwh, 0.0);
    assert_eq!(res.wind_gwh, 0.0);
    // 단가 지표는 게이트와 무관하게 계산된다
    assert!(res.cost_h2 > 0.0);
}

#[test]
fn feasible_site_reports_positive_generation() {
    let res = hydro::evaluate(&site(), &HydroParams::default(), &HydroConstants::default())
        .expect("evaluate");
    assert_eq!(res.tech, H2Tech::Green);
    assert!(res.pv_gwh > 0.0);
    assert!(res.wind_gwh > 0.0);
    assert!((res.pv_radiation - 5.0 * 365.0).abs() < 1e-12);
}

#[test]
fn zero_wind_speed_fails_validation() {
    let mut s = site();
    s.wind = 0.0;
    assert!(hydro::evaluate(&s, &HydroParams::default(), &HydroConstants::default()).is_err());
}

#[test]
fn evaluation_is_deterministic() {
    let pars = HydroParams::default();
    let consts = HydroConstants::default();
    let a = hydro::evaluate(&site(), &pars, &consts).expect("evaluate");
    let b = hydro::evaluate(&site(), &pars, &consts).expect("evaluate");
    assert_eq!(a, b);
}
