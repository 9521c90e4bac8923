use crate::finance::{self, FinanceError};
use crate::fish::eligibility::FarmTech;
use crate::fish::params::{FishConstants, FishParams};
use crate::site::Town;

/// 기술별 소요 토지 면적을 반환한다. [acre/ton]
fn land_required(consts: &FishConstants, farm_type: FarmTech) -> f64 {
    match farm_type {
        FarmTech::Cage => consts.land_req_cage,
        _ => consts.land_req_pond,
    }
}

/// 토지 임차료를 계산한다. [USD/ton/yr]
pub fn land_rent(pars: &FishParams, consts: &FishConstants, farm_type: FarmTech) -> f64 {
    let land_cost = land_required(consts, farm_type) * consts.land_value; // USD/ton
    land_cost * pars.interest_rate // USD/ton/yr
}

/// 마을 전화(電化)에 필요한 일시 투자비를 계산한다. [USD]
///
/// 거리 3단계 규칙: 이미 연결됨 / 전력망 연장 / 마이크로그리드 신설.
pub fn elec_capex(town: &Town, pars: &FishParams, consts: &FishConstants) -> f64 {
    if town.grid_dist < consts.grid_conn_dist {
        // 이미 전력망에 연결된 것으로 본다
        0.0
    } else if town.grid_dist < consts.grid_ext_dist {
        // 전력망 연장이 가능한 거리
        let mv_cost = consts.mv_cost_pkm * town.grid_dist; // USD
        let conn_cost = consts.conn_cost_phh * town.hhs(); // USD
        mv_cost + conn_cost
    } else {
        let kw_needed = town.hhs() * consts.hh_load_kw; // kW
        let mg_cost = pars.mg_cost_pkw * kw_needed; // USD
        let conn_cost = consts.mg_conn_cost_phh * town.hhs(); // USD
        mg_cost + conn_cost
    }
}

/// 양식장 전력 공급 비용을 계산한다. [USD/ton/yr]
///
/// 전력망 연결(연장 포함) 구간에서는 0, 그 밖에서는 마이크로그리드
/// 발전 설비 투자비를 연할부로 환산한다.
pub fn elec_cost_for_farm(
    town: &Town,
    pars: &FishParams,
    consts: &FishConstants,
) -> Result<f64, FinanceError> {
    let total_power_req = consts
        .min_farm_power_kw
        .max(pars.ice_power + pars.aeration_power); // kW/ton
    if town.grid_dist < consts.grid_ext_dist {
        Ok(0.0)
    } else {
        let mg_cap_cost = pars.mg_cost_pkw * total_power_req; // USD/ton
        finance::annualize(mg_cap_cost, pars.duration, pars.interest_rate)
    }
}

/// 양식 설비 투자비의 연할부금을 계산한다. [USD/ton/yr]
pub fn farm_cap_cost_annual(
    pars: &FishParams,
    consts: &FishConstants,
    farm_type: FarmTech,
) -> Result<f64, FinanceError> {
    let farm_cap_cost = match farm_type {
        FarmTech::Cage => consts.farm_capex_cage,
        _ => consts.farm_capex_pond,
    }; // USD/ton
    finance::annualize(farm_cap_cost, pars.duration, pars.interest_rate)
}

/// 운송비를 계산한다. [USD/ton/yr]
///
/// 2구간 모델: 도시권까지 근거리 구간 + 도시권에서 대도시까지 장거리 구간.
/// 각 구간에 선도 유지(얼음·취급) 할증 배수를 곱해 합산한다.
pub fn transport_costs(town: &Town, consts: &FishConstants) -> f64 {
    let urban_to_city = town.city_dist - town.urban_dist; // km
    let to_urban = consts.short_dist_flat + consts.short_dist_spec * town.urban_dist; // USD/ton
    let to_city = consts.long_dist_flat + consts.long_dist_spec * urban_to_city; // USD/ton
    to_urban * consts.short_dist_multi + to_city * consts.long_dist_multi // USD/ton/yr
}

/// 판매 단가를 계산한다. 연못 생산은 저가 판정을 받아 할인된다. [USD/ton]
pub fn revenue_per_ton(pars: &FishParams, consts: &FishConstants, farm_type: FarmTech) -> f64 {
    let mut fish_price = pars.fish_price;
    if farm_type == FarmTech::Pond {
        fish_price *= consts.pond_price_multi;
    }
    fish_price
}

/// 부대 설비(제빙·포기) 투자비의 연할부금을 계산한다. [USD/ton/yr]
pub fn equipment_costs(pars: &FishParams, consts: &FishConstants) -> Result<f64, FinanceError> {
    let capex_equipment = consts.capex_ice + consts.capex_aeration; // USD/ton capacity
    finance::annualize(capex_equipment, pars.duration, pars.interest_rate)
}

/// 운영비(사료·인건비·치어·기타·전력)를 계산한다. [USD/ton]
pub fn running_costs(pars: &FishParams, consts: &FishConstants, farm_type: FarmTech) -> f64 {
    let elec_aeration = consts.aeration_hours * pars.aeration_power * 365.0; // kWh/ton/yr

    let cost_misc = match farm_type {
        FarmTech::Cage => consts.cost_misc_cage,
        _ => consts.cost_misc_pond,
    }; // USD/ton
    let cost_ice = consts.elec_price * pars.elec_ice; // USD/ton
    let cost_aeration = consts.elec_price * elec_aeration; // USD/ton
    consts.cost_feed + consts.cost_labor + consts.cost_fingerlings + cost_misc + cost_ice
        + cost_aeration
}
