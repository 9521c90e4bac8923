use serde::{Deserialize, Serialize};

use crate::fish::ParamError;
use crate::irri::params::{IrriConstants, IrriParams};
use crate::site::SiteError;

/// 관개 후보지 하나의 농업 속성.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrriSite {
    /// 경작지 비율(우세 토지피복 기준) [%]
    pub crop_extent: f64,
    /// 작물 수확량 [ton/ha/yr]
    pub crop_yield: f64,
    /// 시장까지 거리 [km]
    pub market_dist: f64,
    /// 지하수위 평균 심도 [m]
    pub wtd_mean: f64,
    /// 전력망까지 거리 [km]
    pub grid_dist: f64,
}

impl IrriSite {
    /// 속성 불변조건을 검사한다.
    pub fn validate(&self) -> Result<(), SiteError> {
        let fields = [
            ("crop_extent", self.crop_extent),
            ("crop_yield", self.crop_yield),
            ("market_dist", self.market_dist),
            ("wtd_mean", self.wtd_mean),
            ("grid_dist", self.grid_dist),
        ];
        for (field, value) in fields {
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

/// 관개 농업 성립 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropTech {
    None,
    Agri,
}

impl CropTech {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropTech::None => "none",
            CropTech::Agri => "agri",
        }
    }
}

/// 관개 후보지 하나의 평가 결과. 모든 수치 필드는 0 이상으로 잘린다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrriResult {
    /// 최소 생산량 게이트 판정
    pub tech: CropTech,
    /// 작물 생산량 [ton/yr]
    pub crop_production: f64,
    /// 운송비 [USD/yr]
    pub transp_cost: f64,
    /// 양수·관개 비용 [USD/yr]
    pub irrig_cost: f64,
    /// 매출 [USD/yr]
    pub revenue: f64,
    /// 이익 [USD/yr]
    pub profit: f64,
}

/// 평가 실패를 표현한다.
#[derive(Debug)]
pub enum IrriError {
    /// 후보지 속성 불변조건 위반
    Site(SiteError),
    /// 파라미터 오류
    Params(ParamError),
}

impl std::fmt::Display for IrriError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrriError::Site(e) => write!(f, "후보지 속성 오류: {e}"),
            IrriError::Params(e) => write!(f, "파라미터 오류: {e}"),
        }
    }
}

impl std::error::Error for IrriError {}

impl From<SiteError> for IrriError {
    fn from(value: SiteError) -> Self {
        IrriError::Site(value)
    }
}

impl From<ParamError> for IrriError {
    fn from(value: ParamError) -> Self {
        IrriError::Params(value)
    }
}

/// 관개 모델의 진입점.
///
/// 경작지 절반에 관개를 도입했을 때의 생산량과, 운송·양수 비용을 뺀
/// 이익을 계산한다.
pub fn evaluate(
    site: &IrriSite,
    pars: &IrriParams,
    consts: &IrriConstants,
) -> Result<IrriResult, IrriError> {
    site.validate()?;
    pars.validate()?;

    let multi = pars.tech_type.production_multiplier();

    // 경작지 절반 관개 가정
    let irrigated_share = (site.crop_extent * 0.5) / 100.0;
    let crop_production =
        irrigated_share * consts.hex_area_km2 * consts.km2_to_ha * site.crop_yield * multi; // ton/yr

    // 시장 운송비
    let transp_cost =
        (site.market_dist * 0.833) * site.crop_extent * pars.tcost_per_ton_km; // USD/yr

    // 지하수위까지 양수하는 에너지 비용
    let irrig_cost = ((crop_production * consts.crop_water_needs * site.wtd_mean
        * pars.pump_energy_int)
        / consts.pump_eff)
        * consts.kwh_cost
        * site.grid_dist; // USD/yr

    let revenue = crop_production * pars.crop_price; // USD/yr
    let profit = revenue - transp_cost - irrig_cost; // USD/yr

    let tech = if crop_production > consts.min_production {
        CropTech::Agri
    } else {
        CropTech::None
    };

    Ok(IrriResult {
        tech,
        crop_production: crop_production.max(0.0),
        transp_cost: transp_cost.max(0.0),
        irrig_cost: irrig_cost.max(0.0),
        revenue: revenue.max(0.0),
        profit: profit.max(0.0),
    })
}
