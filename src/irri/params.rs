use serde::{Deserialize, Serialize};

use crate::fish::ParamError;

/// 관개 방식. 생산 증대 배수가 방식마다 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationTech {
    /// 지표수 양수
    Pump,
    /// 관정(지하수)
    Bore,
    /// 자연 유하
    Gravity,
}

impl IrrigationTech {
    /// 관개 도입에 따른 생산 증대 배수.
    pub fn production_multiplier(&self) -> f64 {
        match self {
            IrrigationTech::Pump => 2.5,
            IrrigationTech::Bore => 1.9,
            IrrigationTech::Gravity => 0.7,
        }
    }
}

/// 관개 모델의 사용자 조정 파라미터 묶음.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IrriParams {
    /// 관개 방식
    pub tech_type: IrrigationTech,
    /// 작물 운송비 [USD/ton/km]
    pub tcost_per_ton_km: f64,
    /// 양수 에너지 원단위 [kWh/m3/m]
    pub pump_energy_int: f64,
    /// 작물 판매 단가 [USD/ton]
    pub crop_price: f64,
}

impl Default for IrriParams {
    /// 기준(reference) 파라미터 세트.
    fn default() -> Self {
        Self {
            tech_type: IrrigationTech::Pump,
            tcost_per_ton_km: 0.2,
            pump_energy_int: 0.08,
            crop_price: 200.0,
        }
    }
}

impl IrriParams {
    /// TOML 문자열에서 파라미터 세트를 읽는다. 키 누락·미지 키는 즉시 오류.
    pub fn from_toml_str(src: &str) -> Result<Self, ParamError> {
        let pars: IrriParams = toml::from_str(src)?;
        pars.validate()?;
        Ok(pars)
    }

    /// 값 범위를 검사한다.
    pub fn validate(&self) -> Result<(), ParamError> {
        let non_negative = [self.tcost_per_ton_km, self.pump_energy_int, self.crop_price];
        if non_negative.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ParamError::OutOfRange(
                "모든 단가 파라미터는 0 이상의 유한한 값이어야 합니다.",
            ));
        }
        Ok(())
    }
}

/// 관개 모델의 고정 상수.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct IrriConstants {
    /// 헥스 셀 면적 [km2]
    pub hex_area_km2: f64,
    /// km2 → ha 환산 계수
    pub km2_to_ha: f64,
    /// 작물 용수 원단위 [m3/ton/yr]
    pub crop_water_needs: f64,
    /// 양수 펌프 효율(0~1)
    pub pump_eff: f64,
    /// 전력 단가 [USD/kWh]
    pub kwh_cost: f64,
    /// 관개 농업이 성립하는 최소 생산량 [ton/yr]
    pub min_production: f64,
}

impl Default for IrriConstants {
    fn default() -> Self {
        Self {
            hex_area_km2: 0.7373276,
            km2_to_ha: 100.0,
            crop_water_needs: 50.0,
            pump_eff: 0.8,
            kwh_cost: 0.8,
            min_production: 0.5,
        }
    }
}
