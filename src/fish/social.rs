use crate::fish::params::FishConstants;
use crate::site::Town;

/// 전화(電化)에 따른 사회적 편익을 계산한다. [USD/yr]
///
/// 가구당 취사·조명 에너지 대체량에 배출계수와 (탄소 사회적 비용 +
/// 보건 편익) 단가를 곱한다. 기술 선택과 무관하게 인구 속성만으로
/// 결정된다.
pub fn social_benefit(town: &Town, consts: &FishConstants) -> f64 {
    let energy_phh = consts.energy_cooking + consts.energy_lights; // kWh/yr
    let energy_total = energy_phh * town.hhs(); // kWh
    let benefit_rate = consts.social_carbon_cost + consts.health_benefits; // USD/kgCO2/yr
    benefit_rate * consts.co2_per_kwh * energy_total // USD/yr
}
