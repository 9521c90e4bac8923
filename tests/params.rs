use rural_infra_toolbox::fish::{FishConstants, FishParams};
use rural_infra_toolbox::hydro::HydroParams;
use rural_infra_toolbox::irri::IrriParams;

fn reference_fish_toml() -> String {
    toml::to_string(&FishParams::default()).expect("serialize")
}

#[test]
fn reference_fish_params_round_trip() {
    let pars = FishParams::from_toml_str(&reference_fish_toml()).expect("parse");
    assert_eq!(pars.duration, 20);
    assert!((pars.interest_rate - 0.06).abs() < 1e-12);
    assert!((pars.fish_price - 6000.0).abs() < 1e-12);
}

#[test]
fn missing_key_is_a_configuration_error() {
    let toml = reference_fish_toml()
        .lines()
        .filter(|l| !l.starts_with("fish_price"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(FishParams::from_toml_str(&toml).is_err());
}

#[test]
fn unknown_key_is_a_configuration_error() {
    let mut toml = reference_fish_toml();
    toml.push_str("\nmystery_knob = 1.0\n");
    assert!(FishParams::from_toml_str(&toml).is_err());
}

#[test]
fn zero_duration_is_rejected_eagerly() {
    let toml = reference_fish_toml().replace("duration = 20", "duration = 0");
    assert!(FishParams::from_toml_str(&toml).is_err());
}

#[test]
fn interest_rate_must_be_unit_fraction() {
    let mut pars = FishParams::default();
    pars.interest_rate = 1.5;
    assert!(pars.validate().is_err());
    pars.interest_rate = -0.1;
    assert!(pars.validate().is_err());
}

#[test]
fn population_band_must_be_ordered() {
    let mut pars = FishParams::default();
    pars.min_pop = 10_000.0;
    pars.max_pop = 500.0;
    assert!(pars.validate().is_err());
}

#[test]
fn default_parameter_sets_validate() {
    assert!(FishParams::default().validate().is_ok());
    assert!(HydroParams::default().validate().is_ok());
    assert!(IrriParams::default().validate().is_ok());
}

#[test]
fn key_county_lookup_is_case_insensitive() {
    let consts = FishConstants::default();
    assert!(consts.is_key_county("Kisumu"));
    assert!(consts.is_key_county(" HOMA BAY "));
    assert!(!consts.is_key_county("nairobi"));
}

#[test]
fn hydro_enum_options_parse_from_toml() {
    let toml = r#"
pv_capex = 650.0
wind_capex = 1500.0
interest_rate = 0.06
min_area = 1.0
water_tran_cost = 10.0
elec_water_treatment = 1.0
elec_ocean_water_treatment = 3.6
h2_state = "liquid"
water_resource = "cheapest"
h2_trans_cost = 15.0
wind_dist = 5.0
pv_size = 6.0
"#;
    let pars = HydroParams::from_toml_str(toml).expect("parse");
    assert_eq!(pars.h2_state, rural_infra_toolbox::hydro::H2State::Liquid);
    assert_eq!(
        pars.water_resource,
        rural_infra_toolbox::hydro::WaterResource::Cheapest
    );
}

#[test]
fn hydro_unknown_water_resource_is_rejected() {
    let toml = r#"
pv_capex = 650.0
wind_capex = 1500.0
interest_rate = 0.06
min_area = 1.0
water_tran_cost = 10.0
elec_water_treatment = 1.0
elec_ocean_water_treatment = 3.6
h2_state = "liquid"
water_resource = "rainwater"
h2_trans_cost = 15.0
wind_dist = 5.0
pv_size = 6.0
"#;
    assert!(HydroParams::from_toml_str(toml).is_err());
}

#[test]
fn irri_tech_type_parses_from_toml() {
    let toml = r#"
tech_type = "bore"
tcost_per_ton_km = 0.2
pump_energy_int = 0.08
crop_price = 200.0
"#;
    let pars = IrriParams::from_toml_str(toml).expect("parse");
    assert_eq!(
        pars.tech_type,
        rural_infra_toolbox::irri::IrrigationTech::Bore
    );
}
