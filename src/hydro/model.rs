use serde::{Deserialize, Serialize};

use crate::finance::{pvf, FinanceError};
use crate::fish::ParamError;
use crate::hydro::params::{H2State, HydroConstants, HydroParams, WaterResource};
use crate::site::SiteError;

/// 수소 생산 후보지 하나의 자원·면적 속성.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydroSite {
    /// 태양광 일 발전량 [kWh/kWp/day]
    pub pv: f64,
    /// 평균 풍속 [m/s]
    pub wind: f64,
    /// 해안까지 거리 [km]
    pub ocean_dist: f64,
    /// 내륙 수원까지 거리 [km]
    pub water_dist: f64,
    /// 수출항(수요처)까지 거리 [km]
    pub port_dist: f64,
    /// 이용 제한 면적(산림·농지·수면) [km2]
    pub rest_area: f64,
    /// 전체 면적 [km2]
    pub avail_area: f64,
}

impl HydroSite {
    /// 속성 불변조건을 검사한다. 발전량·풍속은 0이면 단가가 정의되지
    /// 않으므로 양수를 요구한다.
    pub fn validate(&self) -> Result<(), SiteError> {
        let positive = [("pv", self.pv), ("wind", self.wind)];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(SiteError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(SiteError::NegativeAttribute { field, value });
            }
        }
        let non_negative = [
            ("ocean_dist", self.ocean_dist),
            ("water_dist", self.water_dist),
            ("port_dist", self.port_dist),
            ("rest_area", self.rest_area),
            ("avail_area", self.avail_area),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(SiteError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(SiteError::NegativeAttribute { field, value });
            }
        }
        Ok(())
    }
}

/// 후보지의 발전 기술 선택 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElecTech {
    Pv,
    Wind,
}

impl std::fmt::Display for ElecTech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ElecTech::Pv => "pv",
            ElecTech::Wind => "wind",
        })
    }
}

/// 면적 게이트 통과 여부. None은 실패가 아니라 정상 결과다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum H2Tech {
    None,
    Green,
}

impl H2Tech {
    pub fn as_str(&self) -> &'static str {
        match self {
            H2Tech::None => "none",
            H2Tech::Green => "green_h2",
        }
    }
}

/// 후보지 하나의 수소 생산 단가 평가 결과.
///
/// 단가 지표(LCOE/LCOH)는 면적 게이트와 무관하게 항상 계산된다.
/// 게이트에 걸리면 tech=none이 되고 설치 가능량(pv_gwh/wind_gwh)만 0이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydroResult {
    /// 면적 게이트 판정
    pub tech: H2Tech,
    /// 더 저렴한 발전 기술
    pub elec_technology: ElecTech,
    /// 태양광 발전 단가 [EUR/MWh]
    pub cost_elec_pv: f64,
    /// 풍력 발전 단가 [EUR/MWh]
    pub cost_elec_wind: f64,
    /// 최저 발전 단가 [EUR/MWh]
    pub cost_elec: f64,
    /// 수소 생산 단가 [EUR/kg]
    pub cost_h2: f64,
    /// 해수 담수화 기준 수소 생산 단가 [EUR/kg]
    pub cost_h2_ocean: f64,
    /// 풍력 비발전량(정격 1kW당 연 발전량) [kWh/kW/yr]
    pub turbine_output: f64,
    /// 연 일사량 환산 [kWh/kWp/yr]
    pub pv_radiation: f64,
    /// 평균 풍속 [m/s]
    pub wind_speed: f64,
    /// 수요처 인도 단가(운송 포함) [EUR/kg]
    pub h2_cost_to_demand: f64,
    /// 가용 면적 태양광 연 발전량 [GWh/yr]
    pub pv_gwh: f64,
    /// 가용 면적 풍력 연 발전량 [GWh/yr]
    pub wind_gwh: f64,
}

/// 평가 실패를 표현한다.
#[derive(Debug)]
pub enum HydroError {
    /// 후보지 속성 불변조건 위반
    Site(SiteError),
    /// 파라미터 누락/범위 오류
    Params(ParamError),
    /// 현재가치 환산 오류
    Finance(FinanceError),
}

impl std::fmt::Display for HydroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HydroError::Site(e) => write!(f, "후보지 속성 오류: {e}"),
            HydroError::Params(e) => write!(f, "파라미터 오류: {e}"),
            HydroError::Finance(e) => write!(f, "재무 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for HydroError {}

impl From<SiteError> for HydroError {
    fn from(value: SiteError) -> Self {
        HydroError::Site(value)
    }
}

impl From<ParamError> for HydroError {
    fn from(value: ParamError) -> Self {
        HydroError::Params(value)
    }
}

impl From<FinanceError> for HydroError {
    fn from(value: FinanceError) -> Self {
        HydroError::Finance(value)
    }
}

/// 취급 비용(압축 또는 액화)을 계산한다. [EUR/kg]
fn handling_costs(pars: &HydroParams, consts: &HydroConstants, cost_elec: f64) -> f64 {
    match pars.h2_state {
        H2State::Liquid => consts.energy_liquid * (cost_elec / 1000.0),
        H2State::Compressed => {
            // 등엔트로피 압축일(k=1.4, 압축기 효율 0.8) 근사
            let ratio = consts.compression_pressure / consts.ely_output_pressure;
            let work = (0.003944 * 298.15 * (ratio.powf(0.4 / 1.4) - 1.0)) / 0.8;
            work * (cost_elec / 1000.0)
        }
    }
}

/// 수소 1kg당 용수 조달 비용을 계산한다. [EUR/kg]
fn water_cost_from(
    dist_km: f64,
    treatment_kwh: f64,
    pars: &HydroParams,
    consts: &HydroConstants,
    cost_elec: f64,
) -> f64 {
    (consts.water_spec_cost + (pars.water_tran_cost / 100.0) * dist_km
        + treatment_kwh * cost_elec)
        * consts.ely_water
        / 1000.0
}

/// 조달 방식에 따른 용수 비용을 계산한다. [EUR/kg]
fn water_costs(
    site: &HydroSite,
    pars: &HydroParams,
    consts: &HydroConstants,
    cost_elec: f64,
) -> f64 {
    let domestic = water_cost_from(
        site.water_dist,
        pars.elec_water_treatment,
        pars,
        consts,
        cost_elec,
    );
    let ocean = water_cost_from(
        site.ocean_dist,
        pars.elec_ocean_water_treatment,
        pars,
        consts,
        cost_elec,
    );
    match pars.water_resource {
        WaterResource::Domestic => domestic,
        WaterResource::Ocean => ocean,
        WaterResource::Cheapest => domestic.min(ocean),
    }
}

/// 그린수소 모델의 진입점.
///
/// 태양광/풍력 발전 단가를 비교해 싼 쪽으로 전해조를 돌렸을 때의
/// 수소 생산·인도 단가와, 가용 면적에 설치 가능한 발전량을 계산한다.
pub fn evaluate(
    site: &HydroSite,
    pars: &HydroParams,
    consts: &HydroConstants,
) -> Result<HydroResult, HydroError> {
    site.validate()?;
    pars.validate()?;

    // 발전 단가
    let pv_factor = pvf(pars.interest_rate, consts.pv_lifetime)?;
    let cost_elec_pv =
        ((pars.pv_capex / pv_factor + consts.pv_opex) / site.pv / 365.0) * 1000.0; // EUR/MWh
    let pv_radiation = site.pv * 365.0; // kWh/kWp/yr

    // 풍력 비발전량 [kWh/kW/yr]
    let swept = consts.d_rot * consts.d_rot * std::f64::consts::PI / 4.0; // m2
    let turbine_output = 0.5 * consts.cp * consts.den_air * swept * site.wind.powi(3) * 8760.0
        / 1000.0
        / consts.turbine_rating_kw;
    let wind_factor = pvf(pars.interest_rate, consts.wind_lifetime)?;
    let cost_elec_wind =
        ((pars.wind_capex / wind_factor + consts.wind_opex) / turbine_output) * 1000.0; // EUR/MWh

    let cost_elec = cost_elec_pv.min(cost_elec_wind);
    let elec_technology = if cost_elec_pv > cost_elec_wind {
        ElecTech::Wind
    } else {
        ElecTech::Pv
    };

    // 전해조 고정비 [EUR/kg]
    let ely_factor = pvf(pars.interest_rate, consts.ely_lt)?;
    let cost_ely = ((consts.ely_capex / ely_factor) / (consts.ely_cap * 8760.0))
        * (consts.h2_en_den / consts.ely_eff)
        * (1.0 + consts.ely_opex);

    // 수소 생산 단가 [EUR/kg]
    let cost_elec_h2 = (cost_elec / 1000.0) * (consts.h2_en_den / consts.ely_eff);
    let handling = handling_costs(pars, consts, cost_elec);
    let ocean_water = water_cost_from(
        site.ocean_dist,
        pars.elec_ocean_water_treatment,
        pars,
        consts,
        cost_elec,
    );
    let cost_h2_ocean = cost_elec_h2 + cost_ely + handling + ocean_water;
    let cost_h2 = cost_elec_h2 + cost_ely + handling + water_costs(site, pars, consts, cost_elec);

    // 수요처(수출항) 인도 단가
    let h2_cost_to_demand = cost_h2 + pars.h2_trans_cost * site.port_dist / 100.0;

    // 면적 게이트: 제한 면적을 뺀 가용 면적이 최소 면적을 넘어야 한다
    let available_area = site.avail_area - site.rest_area; // km2
    let tech = if available_area > pars.min_area {
        H2Tech::Green
    } else {
        H2Tech::None
    };

    // 설치 가능량
    let (pv_gwh, wind_gwh) = if available_area > pars.min_area {
        let pv_kwp = available_area * 1_000_000.0 / pars.pv_size;
        let turbine_area = std::f64::consts::PI * (pars.wind_dist * consts.d_rot).powi(2) / 4.0;
        let turbines = available_area * 1_000_000.0 / turbine_area;
        (
            pv_kwp * site.pv / 1_000_000.0,          // GWh/yr
            turbine_output * turbines / 1_000_000.0, // GWh/yr
        )
    } else {
        (0.0, 0.0)
    };

    Ok(HydroResult {
        tech,
        elec_technology,
        cost_elec_pv,
        cost_elec_wind,
        cost_elec,
        cost_h2,
        cost_h2_ocean,
        turbine_output,
        pv_radiation,
        wind_speed: site.wind,
        h2_cost_to_demand,
        pv_gwh,
        wind_gwh,
    })
}
