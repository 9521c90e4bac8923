use rural_infra_toolbox::irri::{
    self, CropTech, IrriConstants, IrriParams, IrriSite, IrrigationTech,
};

fn site() -> IrriSite {
    IrriSite {
        crop_extent: 40.0,
        crop_yield: 2.0,
        market_dist: 50.0,
        wtd_mean: 10.0,
        grid_dist: 5.0,
    }
}

#[test]
fn production_multipliers_per_technology() {
    assert_eq!(IrrigationTech::Pump.production_multiplier(), 2.5);
    assert_eq!(IrrigationTech::Bore.production_multiplier(), 1.9);
    assert_eq!(IrrigationTech::Gravity.production_multiplier(), 0.7);
}

#[test]
fn production_scales_with_technology_multiplier() {
    let consts = IrriConstants::default();
    let mut pars = IrriParams::default();
    pars.tech_type = IrrigationTech::Pump;
    let pump = irri::evaluate(&site(), &pars, &consts).expect("evaluate");
    pars.tech_type = IrrigationTech::Bore;
    let bore = irri::evaluate(&site(), &pars, &consts).expect("evaluate");
    let ratio = bore.crop_production / pump.crop_production;
    assert!((ratio - 1.9 / 2.5).abs() < 1e-9);
}

#[test]
fn reference_site_production() {
    // 경작지 절반 관개: (40*0.5/100) * 0.7373276 * 100 * 2 * 2.5
    let res = irri::evaluate(&site(), &IrriParams::default(), &IrriConstants::default())
        .expect("evaluate");
    let expected = 0.2 * 0.7373276 * 100.0 * 2.0 * 2.5;
    assert!((res.crop_production - expected).abs() < 1e-9);
    assert_eq!(res.tech, CropTech::Agri);
    assert!(res.revenue > 0.0);
}

#[test]
fn negative_profit_is_clamped_to_zero() {
    // 기준 부지에서는 양수 비용이 매출을 넘어 이익이 0으로 잘린다
    let res = irri::evaluate(&site(), &IrriParams::default(), &IrriConstants::default())
        .expect("evaluate");
    assert!(res.transp_cost > 0.0);
    assert!(res.irrig_cost > 0.0);
    assert_eq!(res.profit, 0.0);
}

#[test]
fn tiny_production_gates_to_none() {
    let mut s = site();
    s.crop_extent = 0.1;
    s.crop_yield = 0.1;
    let res = irri::evaluate(&s, &IrriParams::default(), &IrriConstants::default())
        .expect("evaluate");
    assert_eq!(res.tech, CropTech::None);
    assert!(res.crop_production <= 0.5);
}

#[test]
fn negative_attribute_fails_validation() {
    let mut s = site();
    s.market_dist = -1.0;
    assert!(irri::evaluate(&s, &IrriParams::default(), &IrriConstants::default()).is_err());
}
