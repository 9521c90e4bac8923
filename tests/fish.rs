use rural_infra_toolbox::fish::{
    self, costs, eligibility::constrain_output, roads, FarmTech, FishConstants, FishParams,
    FishResult,
};
use rural_infra_toolbox::site::{RoadClass, Town};

fn town() -> Town {
    Town {
        pop: 2000.0,
        precip: 40.0,
        grid_dist: 25.0,
        lake_dist: 5.0,
        water_dist: 50.0,
        river_dist: 50.0,
        road_dist: 15.0,
        urban_dist: 10.0,
        city_dist: 100.0,
        adm1: "nairobi".to_string(),
        road_class: RoadClass::Earth,
    }
}

#[test]
fn dry_remote_town_yields_canonical_zero_record() {
    let mut t = town();
    t.lake_dist = 50.0;
    t.precip = 20.0; // min_precip(30) 이하
    let res = fish::evaluate(&t, &FishParams::default(), &FishConstants::default())
        .expect("evaluate");
    assert_eq!(res, FishResult::none());
    assert_eq!(res.tech, FarmTech::None);
    assert_eq!(res.fish_output, 0.0);
    assert_eq!(res.revenue, 0.0);
    assert_eq!(res.profit, 0.0);
    assert_eq!(res.gov_costs, 0.0);
    assert_eq!(res.gov_annual, 0.0);
    assert_eq!(res.social, 0.0);
}

#[test]
fn demographic_gate_downgrades_suitable_site_to_none() {
    // 호수는 가깝지만(케이지 적지) 인구가 너무 적다
    let mut t = town();
    t.pop = 100.0;
    let res = fish::evaluate(&t, &FishParams::default(), &FishConstants::default())
        .expect("evaluate");
    assert_eq!(res, FishResult::none());
}

#[test]
fn output_bound_by_labor_capacity() {
    // hhs=400, labor=200, cage 3명/ton → 66.67 ton/yr < max 1000
    let pars = FishParams::default();
    let consts = FishConstants::default();
    let (output, tech) = constrain_output(&town(), &pars, &consts);
    assert_eq!(tech, FarmTech::Cage);
    assert!((output - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn output_bound_by_parameter_maximum() {
    // pop=60000 → 노동력 한계 2000 ton/yr > max 1000
    let mut t = town();
    t.pop = 60_000.0;
    let pars = FishParams::default();
    let (output, tech) = constrain_output(&t, &pars, &FishConstants::default());
    assert_eq!(tech, FarmTech::Cage);
    assert_eq!(output, pars.max_fish_output);
}

#[test]
fn output_bound_by_pond_precipitation_cap() {
    // 연못: 강수량 31mm → 시설 한계 620 ton/yr가 구속 조건
    let mut t = town();
    t.lake_dist = 50.0;
    t.water_dist = 3.0;
    t.precip = 31.0;
    t.pop = 60_000.0;
    let (output, tech) = constrain_output(&t, &FishParams::default(), &FishConstants::default());
    assert_eq!(tech, FarmTech::Pond);
    assert!((output - 31.0 * 20.0).abs() < 1e-9);
}

#[test]
fn elec_capex_is_step_function_of_grid_distance() {
    let pars = FishParams::default();
    let consts = FishConstants::default();
    let mut t = town();
    t.pop = 1000.0; // hhs = 200

    t.grid_dist = 0.5;
    assert_eq!(costs::elec_capex(&t, &pars, &consts), 0.0);

    t.grid_dist = 10.0;
    let expected = 15_000.0 * 10.0 + 4800.0 * 200.0;
    assert!((costs::elec_capex(&t, &pars, &consts) - expected).abs() < 1e-9);

    t.grid_dist = 25.0;
    let expected = 6000.0 * (200.0 * 0.2) + 500.0 * 200.0;
    assert!((costs::elec_capex(&t, &pars, &consts) - expected).abs() < 1e-9);
}

#[test]
fn farm_elec_cost_zero_when_grid_reachable() {
    let pars = FishParams::default();
    let consts = FishConstants::default();
    let mut t = town();

    t.grid_dist = 0.5;
    assert_eq!(costs::elec_cost_for_farm(&t, &pars, &consts).unwrap(), 0.0);
    t.grid_dist = 10.0;
    assert_eq!(costs::elec_cost_for_farm(&t, &pars, &consts).unwrap(), 0.0);
    t.grid_dist = 25.0;
    assert!(costs::elec_cost_for_farm(&t, &pars, &consts).unwrap() > 0.0);
}

#[test]
fn pond_revenue_is_discounted() {
    let pars = FishParams::default();
    let consts = FishConstants::default();
    let cage = costs::revenue_per_ton(&pars, &consts, FarmTech::Cage);
    let pond = costs::revenue_per_ton(&pars, &consts, FarmTech::Pond);
    assert_eq!(cage, pars.fish_price);
    assert!((pond - pars.fish_price * 0.75).abs() < 1e-9);
}

#[test]
fn heavy_traffic_requires_paved_road_with_upgrade_cost() {
    let pars = FishParams::default();
    let consts = FishConstants::default();
    let mut t = town();
    t.pop = 1_000_000.0; // 500대/일 → 연 182,500 > 73,000

    let needed = roads::required_road_class(&t, &pars, &consts, FarmTech::Cage, 0.0);
    assert_eq!(needed, RoadClass::Paved);
    // earth → paved, road_dist 15 ≥ 10 이므로 근접 할증 없음
    assert_eq!(roads::road_cap_cost(&t, &consts, needed), 507_228.0);
    t.road_dist = 5.0;
    assert!((roads::road_cap_cost(&t, &consts, needed) - 507_228.0 * 1.3).abs() < 1e-6);
    assert_eq!(roads::road_maintenance(&consts, needed), 7_526.0);
}

#[test]
fn no_upgrade_needed_means_zero_road_capex() {
    let consts = FishConstants::default();
    let mut t = town();
    t.road_class = RoadClass::Paved;
    assert_eq!(roads::road_cap_cost(&t, &consts, RoadClass::Earth), 0.0);
    assert_eq!(roads::road_cap_cost(&t, &consts, RoadClass::Paved), 0.0);
}

#[test]
fn negative_profit_is_clamped_to_zero_independently() {
    let mut pars = FishParams::default();
    pars.fish_price = 100.0; // 운영비에도 못 미치는 단가
    let res = fish::evaluate(&town(), &pars, &FishConstants::default()).expect("evaluate");
    assert_eq!(res.tech, FarmTech::Cage);
    assert_eq!(res.profit, 0.0);
    assert!(res.revenue > 0.0);
    assert!(res.gov_costs > 0.0);
    assert!(res.social > 0.0);
}

#[test]
fn reference_scenario_end_to_end() {
    let res = fish::evaluate(&town(), &FishParams::default(), &FishConstants::default())
        .expect("evaluate");
    assert_eq!(res.tech, FarmTech::Cage);
    assert!((res.fish_output - 200.0 / 3.0).abs() < 1e-9);
    assert!((res.revenue - 6000.0 * 200.0 / 3.0).abs() < 1e-6);
    assert!(res.profit > 0.0);
    // 전력망에서 멀어 마이크로그리드 신설: 가구 400
    let expected_gov = 6000.0 * (400.0 * 0.2) + 500.0 * 400.0;
    assert!((res.gov_costs - expected_gov).abs() < 1e-6);
    assert_eq!(res.gov_annual, 0.0); // earth 도로 유지비 없음
    // 사회적 편익 = (1875 + 21.9) * 400 * 1.47 * (0.15 + 0.1)
    let expected_social = (1875.0 + 21.9) * 400.0 * 1.47 * 0.25;
    assert!((res.social - expected_social).abs() < 1e-3);
}

#[test]
fn evaluation_is_deterministic() {
    let pars = FishParams::default();
    let consts = FishConstants::default();
    let a = fish::evaluate(&town(), &pars, &consts).expect("evaluate");
    let b = fish::evaluate(&town(), &pars, &consts).expect("evaluate");
    assert_eq!(a, b);
}

#[test]
fn negative_distance_fails_evaluation() {
    let mut t = town();
    t.grid_dist = -1.0;
    assert!(fish::evaluate(&t, &FishParams::default(), &FishConstants::default()).is_err());
}
