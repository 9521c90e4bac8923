use serde::{Deserialize, Serialize};

/// 가구당 평균 인원. 인구를 가구 수로 환산할 때 사용한다.
pub const HH_SIZE: f64 = 5.0;

/// 도로 등급. 교통량이 많을수록 높은 등급이 필요하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadClass {
    Earth,
    Gravel,
    Paved,
}

impl RoadClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadClass::Earth => "earth",
            RoadClass::Gravel => "gravel",
            RoadClass::Paved => "paved",
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_road_class() -> RoadClass {
    RoadClass::Earth
}

/// 평가 대상 한 곳(마을/헥스 셀)의 물리·인구 속성.
///
/// 거리 필드는 모두 km, 강수량은 mm/yr 단위다. 지리 전처리 파이프라인이
/// 생성한 속성 테이블에서 읽어 오며, 평가 중에는 변경되지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Town {
    /// 인구 [명]
    pub pop: f64,
    /// 연 강수량 [mm/yr]
    pub precip: f64,
    /// 전력망까지 거리 [km]
    pub grid_dist: f64,
    /// 대형 호수(케이지 적지)까지 거리 [km]
    pub lake_dist: f64,
    /// 기타 수원까지 거리 [km]
    pub water_dist: f64,
    /// 하천까지 거리 [km]
    pub river_dist: f64,
    /// 간선 도로까지 거리 [km]
    pub road_dist: f64,
    /// 가까운 도시권까지 거리 [km]
    pub urban_dist: f64,
    /// 대도시까지 거리 [km]
    pub city_dist: f64,
    /// 행정 구역(1단계) 이름
    pub adm1: String,
    /// 현재 도로 등급. 속성 데이터에 없으면 earth로 간주한다.
    #[serde(default = "default_road_class")]
    pub road_class: RoadClass,
}

/// 마을 속성 불변조건 위반을 표현한다.
#[derive(Debug, PartialEq)]
pub enum SiteError {
    /// 음수가 될 수 없는 속성이 음수인 경우
    NegativeAttribute { field: &'static str, value: f64 },
    /// 유한한 수가 아닌 속성(NaN/무한대)
    NotFinite { field: &'static str },
}

impl std::fmt::Display for SiteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteError::NegativeAttribute { field, value } => {
                write!(f, "마을 속성 '{field}'은(는) 음수가 될 수 없습니다: {value}")
            }
            SiteError::NotFinite { field } => {
                write!(f, "마을 속성 '{field}'이(가) 유한한 수가 아닙니다.")
            }
        }
    }
}

impl std::error::Error for SiteError {}

impl Town {
    /// 가구 수 = 인구 / 가구당 인원.
    pub fn hhs(&self) -> f64 {
        self.pop / HH_SIZE
    }

    /// 모든 수치 속성이 0 이상이고 유한한지 검사한다.
    ///
    /// 위반 시 해당 마을의 평가는 즉시 실패해야 하며, 잘려나간 채
    /// 의미 없는 결과를 만들지 않는다.
    pub fn validate(&self) -> Result<(), SiteError> {
        let fields = [
            ("pop", self.pop),
            ("precip", self.precip),
            ("grid_dist", self.grid_dist),
            ("lake_dist", self.lake_dist),
            ("water_dist", self.water_dist),
            ("river_dist", self.river_dist),
            ("road_dist", self.road_dist),
            ("urban_dist", self.urban_dist),
            ("city_dist", self.city_dist),
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
