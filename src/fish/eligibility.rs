use serde::{Deserialize, Serialize};

use crate::fish::params::{FishConstants, FishParams};
use crate::site::Town;

/// 선택된 양식 기술. None은 실패가 아니라 정상적인 평가 결과다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FarmTech {
    None,
    Cage,
    Pond,
}

impl FarmTech {
    pub fn as_str(&self) -> &'static str {
        match self {
            FarmTech::None => "none",
            FarmTech::Cage => "cage",
            FarmTech::Pond => "pond",
        }
    }
}

impl std::fmt::Display for FarmTech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 입지 적합성만으로 양식 기술을 분류한다. 우선순위 고정, 첫 일치가 선택된다.
///
/// 1) 호수가 충분히 가까우면 cage
/// 2) 수원/하천이 가깝거나, 강수량이 충분하거나, 항상 포함 구역이면 pond
/// 3) 그 외 none
fn classify(town: &Town, pars: &FishParams, consts: &FishConstants) -> FarmTech {
    if town.lake_dist < pars.max_lake_dist {
        FarmTech::Cage
    } else if town.water_dist < pars.max_water_dist
        || town.river_dist < pars.max_water_dist
        || town.precip > pars.min_precip
        || consts.is_key_county(&town.adm1)
    {
        FarmTech::Pond
    } else {
        FarmTech::None
    }
}

/// 생산량과 양식 기술을 결정한다. 기술 선택과 생산 타당성에 관한
/// 모든 주요 판단은 이 함수에 모은다.
///
/// 입지 분류와 별개로, 강수량과 인구 구간 조건(인구 생존성 게이트)을
/// 통과해야 생산량이 0보다 커진다. 두 판정은 독립이며 둘 다 통과해야
/// 최종적으로 기술이 성립한다. 생산량이 0이면 기술도 none으로 내린다.
///
/// 반환: (fish_output [ton/yr], farm_type)
pub fn constrain_output(
    town: &Town,
    pars: &FishParams,
    consts: &FishConstants,
) -> (f64, FarmTech) {
    let mut farm_type = classify(town, pars, consts);

    let mut fish_output = 0.0;
    if town.precip > pars.min_precip && town.pop > pars.min_pop && town.pop < pars.max_pop {
        // 기술별 시설 한계 생산량
        let max_from_farm = match farm_type {
            FarmTech::Cage => pars.max_fish_output,
            FarmTech::Pond => town.precip * consts.pond_precip_yield,
            FarmTech::None => 0.0,
        };

        // 노동력 한계 생산량
        let labor = town.hhs() * pars.labor_per_hh; // 투입 가능 인원
        let labor_needed = match farm_type {
            FarmTech::Cage => consts.labor_needed_cage,
            _ => consts.labor_needed_pond,
        }; // 명/ton/yr
        let max_from_labor = labor / labor_needed; // ton/yr

        fish_output = pars
            .max_fish_output
            .min(max_from_labor)
            .min(max_from_farm); // ton/yr
    }

    if fish_output == 0.0 {
        farm_type = FarmTech::None;
    }
    if farm_type == FarmTech::None {
        fish_output = 0.0;
    }
    (fish_output, farm_type)
}
