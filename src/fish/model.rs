use serde::{Deserialize, Serialize};

use crate::finance::FinanceError;
use crate::fish::costs;
use crate::fish::eligibility::{constrain_output, FarmTech};
use crate::fish::params::{FishConstants, FishParams, ParamError};
use crate::fish::roads;
use crate::fish::social::social_benefit;
use crate::site::{SiteError, Town};

/// 마을 하나에 대한 양식장 평가 결과.
///
/// tech가 none이면 모든 수치 필드는 정확히 0이다. 그 외에는 각 필드가
/// 독립적으로 0 이상으로 잘린다(적자 마을도 손실로 보고하지 않는다).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishResult {
    /// 선택된 양식 기술
    pub tech: FarmTech,
    /// 생산량 [ton/yr]
    pub fish_output: f64,
    /// 매출 [USD/yr]
    pub revenue: f64,
    /// 이익(인프라 사용 부담금 차감 후) [USD/yr]
    pub profit: f64,
    /// 정부 일시 투자비 [USD]
    pub gov_costs: f64,
    /// 정부 연간 유지비 [USD/yr]
    pub gov_annual: f64,
    /// 사회적 편익 [USD/yr]
    pub social: f64,
}

impl FishResult {
    /// 생산이 성립하지 않는 마을의 표준 0 결과.
    pub fn none() -> Self {
        Self {
            tech: FarmTech::None,
            fish_output: 0.0,
            revenue: 0.0,
            profit: 0.0,
            gov_costs: 0.0,
            gov_annual: 0.0,
            social: 0.0,
        }
    }
}

/// 평가 실패를 표현한다. 부적지 판정은 실패가 아니라 [`FishResult::none`]이다.
#[derive(Debug)]
pub enum EvalError {
    /// 마을 속성 불변조건 위반
    Site(SiteError),
    /// 파라미터 누락/범위 오류
    Params(ParamError),
    /// 연할부 환산 오류
    Finance(FinanceError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::Site(e) => write!(f, "마을 속성 오류: {e}"),
            EvalError::Params(e) => write!(f, "파라미터 오류: {e}"),
            EvalError::Finance(e) => write!(f, "재무 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<SiteError> for EvalError {
    fn from(value: SiteError) -> Self {
        EvalError::Site(value)
    }
}

impl From<ParamError> for EvalError {
    fn from(value: ParamError) -> Self {
        EvalError::Params(value)
    }
}

impl From<FinanceError> for EvalError {
    fn from(value: FinanceError) -> Self {
        EvalError::Finance(value)
    }
}

/// 양식장 모델의 진입점. 다른 함수는 직접 호출하지 않는다.
///
/// 같은 (마을, 파라미터) 쌍이면 항상 비트 단위로 동일한 결과를 낸다.
pub fn evaluate(
    town: &Town,
    pars: &FishParams,
    consts: &FishConstants,
) -> Result<FishResult, EvalError> {
    town.validate()?;
    pars.validate()?;

    // 기술 선택과 생산량 결정
    let (fish_output, farm_type) = constrain_output(town, pars, consts); // ton/yr

    if farm_type == FarmTech::None {
        return Ok(FishResult::none());
    }

    // 톤당 비용
    let land_rent = costs::land_rent(pars, consts, farm_type); // USD/ton/yr
    let elec_cost_for_farm = costs::elec_cost_for_farm(town, pars, consts)?; // USD/ton/yr
    let farm_annual = costs::farm_cap_cost_annual(pars, consts, farm_type)?; // USD/ton/yr
    let equipment_annual = costs::equipment_costs(pars, consts)?; // USD/ton/yr
    let running_costs = costs::running_costs(pars, consts, farm_type); // USD/ton
    let transport_costs = costs::transport_costs(town, consts); // USD/ton/yr
    let costs_per_ton = land_rent
        + elec_cost_for_farm
        + running_costs
        + farm_annual
        + equipment_annual
        + transport_costs; // USD/ton/yr

    // 톤당 매출과 이익
    let revenue_per_ton = costs::revenue_per_ton(pars, consts, farm_type); // USD/ton/yr
    let profit_per_ton = revenue_per_ton - costs_per_ton; // USD/ton/yr

    // 기술과 무관한 인프라 사용 부담금
    let grid_cost = pars.grid_cost * town.grid_dist; // USD/yr
    let road_cost = pars.road_cost * town.road_dist; // USD/yr
    let infra_cost = grid_cost + road_cost; // USD/yr

    // 절대 매출·이익
    let revenue = revenue_per_ton * fish_output; // USD/yr
    let profit = profit_per_ton * fish_output - infra_cost; // USD/yr

    // 정부 부담 비용
    let needed = roads::required_road_class(town, pars, consts, farm_type, fish_output);
    let (gov_costs, gov_annual) = roads::gov_costs(town, pars, consts, needed);

    // 가구 전화에 따른 편익
    let social = social_benefit(town, consts);

    Ok(FishResult {
        tech: farm_type,
        fish_output: fish_output.max(0.0),
        revenue: revenue.max(0.0),
        profit: profit.max(0.0),
        gov_costs: gov_costs.max(0.0),
        gov_annual: gov_annual.max(0.0),
        social: social.max(0.0),
    })
}
