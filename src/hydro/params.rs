use serde::{Deserialize, Serialize};

/// 수소 저장·출하 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum H2State {
    /// 압축 수소(전해조 출구압 → 500bar 압축)
    Compressed,
    /// 액화 수소
    Liquid,
}

/// 전해용수 조달 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterResource {
    /// 내륙 수원(담수)
    Domestic,
    /// 해수 담수화
    Ocean,
    /// 두 방식 중 저렴한 쪽
    Cheapest,
}

/// 그린수소 모델의 사용자 조정 파라미터 묶음.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HydroParams {
    /// 태양광 설비 투자비 [EUR/kWp]
    pub pv_capex: f64,
    /// 풍력 설비 투자비 [EUR/kW]
    pub wind_capex: f64,
    /// 이자율(0~1 소수)
    pub interest_rate: f64,
    /// 발전 부지로 성립하는 최소 가용 면적 [km2]
    pub min_area: f64,
    /// 용수 운송비 [EUR/m3/100km]
    pub water_tran_cost: f64,
    /// 담수 처리 전력 사용량 [kWh/m3]
    pub elec_water_treatment: f64,
    /// 해수 담수화 전력 사용량 [kWh/m3]
    pub elec_ocean_water_treatment: f64,
    /// 수소 출하 상태
    pub h2_state: H2State,
    /// 용수 조달 방식
    pub water_resource: WaterResource,
    /// 수소 운송비 [EUR/kg/100km]
    pub h2_trans_cost: f64,
    /// 터빈 간격(로터 지름 배수)
    pub wind_dist: f64,
    /// 태양광 1kWp 소요 면적 [m2/kWp]
    pub pv_size: f64,
}

impl Default for HydroParams {
    /// 기준(reference) 파라미터 세트.
    fn default() -> Self {
        Self {
            pv_capex: 650.0,
            wind_capex: 1500.0,
            interest_rate: 0.06,
            min_area: 1.0,
            water_tran_cost: 10.0,
            elec_water_treatment: 1.0,
            elec_ocean_water_treatment: 3.6,
            h2_state: H2State::Compressed,
            water_resource: WaterResource::Cheapest,
            h2_trans_cost: 15.0,
            wind_dist: 5.0,
            pv_size: 6.0,
        }
    }
}

impl HydroParams {
    /// TOML 문자열에서 파라미터 세트를 읽는다. 키 누락·미지 키는 즉시 오류.
    pub fn from_toml_str(src: &str) -> Result<Self, crate::fish::ParamError> {
        let pars: HydroParams = toml::from_str(src)?;
        pars.validate()?;
        Ok(pars)
    }

    /// 값 범위를 검사한다.
    pub fn validate(&self) -> Result<(), crate::fish::ParamError> {
        use crate::fish::ParamError;
        if self.interest_rate <= 0.0 || self.interest_rate >= 1.0 {
            return Err(ParamError::OutOfRange(
                "interest_rate는 0 초과 1 미만이어야 합니다.",
            ));
        }
        if self.pv_size <= 0.0 || self.wind_dist <= 0.0 {
            return Err(ParamError::OutOfRange(
                "pv_size와 wind_dist는 0보다 커야 합니다.",
            ));
        }
        let non_negative = [
            self.pv_capex,
            self.wind_capex,
            self.min_area,
            self.water_tran_cost,
            self.elec_water_treatment,
            self.elec_ocean_water_treatment,
            self.h2_trans_cost,
        ];
        if non_negative.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ParamError::OutOfRange(
                "모든 단가·면적 파라미터는 0 이상의 유한한 값이어야 합니다.",
            ));
        }
        Ok(())
    }
}

/// 그린수소 모델의 고정 기술 상수.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HydroConstants {
    /// 태양광 설비 수명 [yr]
    pub pv_lifetime: f64,
    /// 태양광 운영비 [EUR/kWp/yr]
    pub pv_opex: f64,
    /// 풍력 설비 수명 [yr]
    pub wind_lifetime: f64,
    /// 풍력 운영비 [EUR/kW/yr]
    pub wind_opex: f64,
    /// 풍력 터빈 성능 계수
    pub cp: f64,
    /// 공기 밀도 [kg/m3]
    pub den_air: f64,
    /// 로터 지름 [m]
    pub d_rot: f64,
    /// 기준 터빈 정격 [kW]
    pub turbine_rating_kw: f64,

    /// 전해조 투자비 [EUR/kW]
    pub ely_capex: f64,
    /// 전해조 운영비(투자비 대비 비율/yr)
    pub ely_opex: f64,
    /// 전해조 수명 [yr]
    pub ely_lt: f64,
    /// 전해조 효율(0~1)
    pub ely_eff: f64,
    /// 전해조 가동률(0~1)
    pub ely_cap: f64,
    /// 수소 1kg당 용수 사용량 [liter/kg]
    pub ely_water: f64,
    /// 전해조 출구 압력 [bar]
    pub ely_output_pressure: f64,

    /// 용수 기본 단가 [EUR/m3]
    pub water_spec_cost: f64,
    /// 수소 에너지 밀도 [kWh/kg]
    pub h2_en_den: f64,
    /// 액화 에너지 사용량 [kWh/kg]
    pub energy_liquid: f64,
    /// 압축 목표 압력 [bar]
    pub compression_pressure: f64,
}

impl Default for HydroConstants {
    fn default() -> Self {
        Self {
            pv_lifetime: 20.0,
            pv_opex: 9.3,
            wind_lifetime: 20.0,
            wind_opex: 40.0,
            cp: 0.45,
            den_air: 1.14,
            d_rot: 100.0,
            turbine_rating_kw: 3000.0,

            ely_capex: 1280.0,
            ely_opex: 0.02,
            ely_lt: 10.0,
            ely_eff: 0.6,
            ely_cap: 0.6,
            ely_water: 10.0,
            ely_output_pressure: 30.0,

            water_spec_cost: 1.2,
            h2_en_den: 33.33,
            energy_liquid: 9.0,
            compression_pressure: 500.0,
        }
    }
}
