use crate::fish::costs::elec_capex;
use crate::fish::eligibility::FarmTech;
use crate::fish::params::{FishConstants, FishParams};
use crate::site::{RoadClass, Town};

/// 교통량이 요구하는 도로 등급을 판정한다.
///
/// 일일 기본 교통량(pop / traffic_pp)에 어류 화물 차량을 더해 연간
/// 교통량으로 환산하고, 두 임계값과 비교한다. 현재 등급은 보지 않는다.
pub fn required_road_class(
    town: &Town,
    pars: &FishParams,
    consts: &FishConstants,
    farm_type: FarmTech,
    fish_output: f64,
) -> RoadClass {
    let traffic = town.pop / pars.traffic_pp; // 대/일
    let fish_vehicles = match farm_type {
        FarmTech::Cage => consts.vehicles_cage,
        _ => consts.vehicles_pond,
    }; // 대/ton/yr
    let total_traffic = traffic * 365.0 + fish_vehicles * fish_output * pars.truck_econ_multi;
    if total_traffic > consts.paved_traffic {
        RoadClass::Paved
    } else if total_traffic > consts.gravel_traffic {
        RoadClass::Gravel
    } else {
        RoadClass::Earth
    }
}

/// (현재, 필요) 등급 조합에 따른 도로 개량 단가를 계산한다. [USD/km]
///
/// 개량이 필요 없으면 0. 간선 도로에 가까우면 접속 공사 할증이 붙는다.
pub fn road_cap_cost(town: &Town, consts: &FishConstants, needed: RoadClass) -> f64 {
    let mut cost = match (town.road_class, needed) {
        (RoadClass::Earth, RoadClass::Gravel) => consts.upgrade_earth_gravel,
        (RoadClass::Gravel, RoadClass::Paved) => consts.upgrade_gravel_paved,
        (RoadClass::Earth, RoadClass::Paved) => consts.upgrade_earth_paved,
        _ => 0.0,
    };
    if town.road_dist < consts.near_road_dist {
        cost *= consts.near_road_multi;
    }
    cost
}

/// 도로 등급별 유지비를 반환한다. [USD/km/yr]
pub fn road_maintenance(consts: &FishConstants, needed: RoadClass) -> f64 {
    match needed {
        RoadClass::Earth => 0.0,
        RoadClass::Gravel => consts.maint_gravel,
        RoadClass::Paved => consts.maint_paved,
    }
}

/// 정부 부담 비용을 계산한다.
///
/// 반환: (일시 투자비 [USD], 연간 유지비 [USD/yr])
pub fn gov_costs(
    town: &Town,
    pars: &FishParams,
    consts: &FishConstants,
    needed: RoadClass,
) -> (f64, f64) {
    let elec = elec_capex(town, pars, consts); // USD
    let road_capex = road_cap_cost(town, consts, needed) * town.road_dist; // USD
    let road_maint = road_maintenance(consts, needed) * town.road_dist; // USD/yr
    (elec + road_capex, road_maint)
}
