use serde::{Deserialize, Serialize};

/// 파라미터 로드/검증 오류를 표현한다.
#[derive(Debug)]
pub enum ParamError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류(누락/미지 키 포함)
    Parse(toml::de::Error),
    /// 값이 허용 범위를 벗어난 경우
    OutOfRange(&'static str),
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::Io(e) => write!(f, "파라미터 파일 입출력 오류: {e}"),
            ParamError::Parse(e) => write!(f, "파라미터 파싱 오류: {e}"),
            ParamError::OutOfRange(msg) => write!(f, "파라미터 범위 오류: {msg}"),
        }
    }
}

impl std::error::Error for ParamError {}

impl From<std::io::Error> for ParamError {
    fn from(value: std::io::Error) -> Self {
        ParamError::Io(value)
    }
}

impl From<toml::de::Error> for ParamError {
    fn from(value: toml::de::Error) -> Self {
        ParamError::Parse(value)
    }
}

/// 양식장 모델의 사용자 조정 파라미터 묶음.
///
/// 한 번의 평가 동안 불변이며, 민감도 분석 시 여러 세트를 만들어 비교한다.
/// TOML에서 읽을 때는 모든 키가 있어야 하고 미지 키는 거부한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FishParams {
    /// 전력망 사용 부담금 [USD/km/yr]
    pub grid_cost: f64,
    /// 도로 사용 부담금 [USD/km/yr]
    pub road_cost: f64,
    /// 투자 상환 기간 [yr]
    pub duration: u32,
    /// 이자율(0~1 소수)
    pub interest_rate: f64,
    /// 어류 판매 단가 [USD/ton]
    pub fish_price: f64,
    /// 한 곳의 최대 생산량 [ton/yr]
    pub max_fish_output: f64,
    /// 가구당 투입 가능 노동력 [명/가구]
    pub labor_per_hh: f64,
    /// 생산이 성립하는 최소 인구 [명]
    pub min_pop: f64,
    /// 생산이 성립하는 최대 인구 [명]
    pub max_pop: f64,
    /// 케이지 양식이 가능한 호수까지 최대 거리 [km]
    pub max_lake_dist: f64,
    /// 연못 용수 확보가 가능한 수원까지 최대 거리 [km]
    pub max_water_dist: f64,
    /// 수원이 없을 때 연못이 성립하는 최소 강수량 [mm/yr]
    pub min_precip: f64,
    /// 경제 활동에 따른 화물 교통 증가 배수
    pub truck_econ_multi: f64,
    /// 차량 1대당 인구 [명/대]. 일일 교통량 = pop / traffic_pp.
    pub traffic_pp: f64,
    /// 마이크로그리드 건설 단가 [USD/kW]
    pub mg_cost_pkw: f64,
    /// 제빙 전력 사용량 [kWh/ton/yr]
    pub elec_ice: f64,
    /// 제빙 설비 전력 [kW/ton]
    pub ice_power: f64,
    /// 포기(aeration) 설비 전력 [kW/ton]
    pub aeration_power: f64,
}

impl Default for FishParams {
    /// 기준(reference) 파라미터 세트.
    fn default() -> Self {
        Self {
            grid_cost: 200.0,
            road_cost: 500.0,
            duration: 20,
            interest_rate: 0.06,
            fish_price: 6000.0,
            max_fish_output: 1000.0,
            labor_per_hh: 0.5,
            min_pop: 500.0,
            max_pop: 100_000.0,
            max_lake_dist: 9.0,
            max_water_dist: 9.0,
            min_precip: 30.0,
            truck_econ_multi: 1.0,
            traffic_pp: 2000.0,
            mg_cost_pkw: 6000.0,
            elec_ice: 125.0,
            ice_power: 0.1,
            aeration_power: 1.25,
        }
    }
}

impl FishParams {
    /// TOML 문자열에서 파라미터 세트를 읽는다. 키 누락·미지 키는 즉시 오류.
    pub fn from_toml_str(src: &str) -> Result<Self, ParamError> {
        let pars: FishParams = toml::from_str(src)?;
        pars.validate()?;
        Ok(pars)
    }

    /// 파일에서 파라미터 세트를 읽는다.
    pub fn from_toml_path(path: &std::path::Path) -> Result<Self, ParamError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 값 범위를 검사한다. 비용 함수 호출 전에 반드시 통과해야 한다.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.duration == 0 {
            return Err(ParamError::OutOfRange("duration은 1년 이상이어야 합니다."));
        }
        if !(0.0..1.0).contains(&self.interest_rate) {
            return Err(ParamError::OutOfRange(
                "interest_rate는 0 이상 1 미만이어야 합니다.",
            ));
        }
        if self.traffic_pp <= 0.0 {
            return Err(ParamError::OutOfRange("traffic_pp는 0보다 커야 합니다."));
        }
        if self.max_pop < self.min_pop {
            return Err(ParamError::OutOfRange(
                "max_pop은 min_pop 이상이어야 합니다.",
            ));
        }
        let non_negative = [
            self.grid_cost,
            self.road_cost,
            self.fish_price,
            self.max_fish_output,
            self.labor_per_hh,
            self.min_pop,
            self.max_lake_dist,
            self.max_water_dist,
            self.min_precip,
            self.truck_econ_multi,
            self.mg_cost_pkw,
            self.elec_ice,
            self.ice_power,
            self.aeration_power,
        ];
        if non_negative.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ParamError::OutOfRange(
                "모든 단가·한계 파라미터는 0 이상의 유한한 값이어야 합니다.",
            ));
        }
        Ok(())
    }
}

/// 양식장 모델의 고정 경제·기술 상수.
///
/// 전역 가변 상태 대신 명시적 불변 구조체로 전달한다. 민감도 분석에서
/// 조정하는 값은 [`FishParams`] 쪽에 두고, 여기는 문헌 기반 고정값만 둔다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FishConstants {
    /// 토지 가격 [USD/acre]
    pub land_value: f64,
    /// 케이지 양식 소요 면적 [acre/ton]
    pub land_req_cage: f64,
    /// 연못 양식 소요 면적 [acre/ton]
    pub land_req_pond: f64,
    /// 케이지 1톤당 필요 노동력 [명/ton/yr]
    pub labor_needed_cage: f64,
    /// 연못 1톤당 필요 노동력 [명/ton/yr]
    pub labor_needed_pond: f64,
    /// 연못 최대 생산량 계수 [ton/yr per mm/yr]
    pub pond_precip_yield: f64,
    /// 연못 생산 어가(魚價) 할인 배수
    pub pond_price_multi: f64,

    /// 기존 전력망 연결로 간주하는 거리 [km]
    pub grid_conn_dist: f64,
    /// 전력망 연장이 가능한 최대 거리 [km]
    pub grid_ext_dist: f64,
    /// 중압 배전선 건설 단가 [USD/km]
    pub mv_cost_pkm: f64,
    /// 전력망 연장 시 가구당 인입비 [USD/hh]
    pub conn_cost_phh: f64,
    /// 마이크로그리드 가구당 인입비 [USD/hh]
    pub mg_conn_cost_phh: f64,
    /// 가구당 전력 수요 [kW/hh]
    pub hh_load_kw: f64,
    /// 양식장 최소 전력 수요 [kW/ton]
    pub min_farm_power_kw: f64,
    /// 양식장 전력 단가 [USD/kWh]
    pub elec_price: f64,

    /// 근거리 운송 기본료 [USD/ton]
    pub short_dist_flat: f64,
    /// 근거리 운송 거리 요율 [USD/ton/km]
    pub short_dist_spec: f64,
    /// 장거리 운송 기본료 [USD/ton]
    pub long_dist_flat: f64,
    /// 장거리 운송 거리 요율 [USD/ton/km]
    pub long_dist_spec: f64,
    /// 근거리 할증 배수(얼음·선도 유지)
    pub short_dist_multi: f64,
    /// 장거리 할증 배수
    pub long_dist_multi: f64,

    /// 케이지 설비 투자비 [USD/ton]
    pub farm_capex_cage: f64,
    /// 연못 설비 투자비 [USD/ton]
    pub farm_capex_pond: f64,
    /// 제빙 설비 투자비 [USD/ton capacity]
    pub capex_ice: f64,
    /// 포기 설비 투자비 [USD/ton capacity]
    pub capex_aeration: f64,

    /// 일일 포기 가동 시간 [h]
    pub aeration_hours: f64,
    /// 사료비 [USD/ton]
    pub cost_feed: f64,
    /// 인건비 [USD/ton]
    pub cost_labor: f64,
    /// 치어비 [USD/ton]
    pub cost_fingerlings: f64,
    /// 케이지 기타 운영비 [USD/ton]
    pub cost_misc_cage: f64,
    /// 연못 기타 운영비 [USD/ton]
    pub cost_misc_pond: f64,

    /// 케이지 화물 차량 발생 [대/ton/yr]
    pub vehicles_cage: f64,
    /// 연못 화물 차량 발생 [대/ton/yr]
    pub vehicles_pond: f64,
    /// 포장도로가 필요한 연간 교통량 [대/yr]
    pub paved_traffic: f64,
    /// 자갈도로가 필요한 연간 교통량 [대/yr]
    pub gravel_traffic: f64,
    /// 도로 개량비: earth→gravel [USD/km]
    pub upgrade_earth_gravel: f64,
    /// 도로 개량비: gravel→paved [USD/km]
    pub upgrade_gravel_paved: f64,
    /// 도로 개량비: earth→paved [USD/km]
    pub upgrade_earth_paved: f64,
    /// 간선 도로 근접 할증이 적용되는 거리 [km]
    pub near_road_dist: f64,
    /// 간선 도로 근접 할증 배수
    pub near_road_multi: f64,
    /// 자갈도로 유지비 [USD/km/yr]
    pub maint_gravel: f64,
    /// 포장도로 유지비 [USD/km/yr]
    pub maint_paved: f64,

    /// 가구당 취사 에너지 대체량 [kWh/yr]
    pub energy_cooking: f64,
    /// 가구당 조명 에너지 대체량 [kWh/yr]
    pub energy_lights: f64,
    /// 대체 에너지 배출계수 [kgCO2/kWh]
    pub co2_per_kwh: f64,
    /// 탄소의 사회적 비용 [USD/kgCO2/yr]
    pub social_carbon_cost: f64,
    /// 보건 편익 [USD/kgCO2/yr]
    pub health_benefits: f64,

    /// 수자원·강수 조건과 무관하게 항상 포함하는 행정 구역(소문자)
    pub key_counties: Vec<String>,
}

impl Default for FishConstants {
    fn default() -> Self {
        Self {
            land_value: 4000.0,
            land_req_cage: 0.01,
            land_req_pond: 0.83,
            labor_needed_cage: 3.0,
            labor_needed_pond: 1.0,
            pond_precip_yield: 20.0,
            pond_price_multi: 0.75,

            grid_conn_dist: 1.0,
            grid_ext_dist: 20.0,
            mv_cost_pkm: 15_000.0,
            conn_cost_phh: 4800.0,
            mg_conn_cost_phh: 500.0,
            hh_load_kw: 0.2,
            min_farm_power_kw: 2.0,
            elec_price: 0.25,

            short_dist_flat: 7.88,
            short_dist_spec: 1.214,
            long_dist_flat: 13.54,
            long_dist_spec: 0.086,
            short_dist_multi: 1.5,
            long_dist_multi: 2.0,

            farm_capex_cage: 138.89,
            farm_capex_pond: 1950.0,
            capex_ice: 1000.0,
            capex_aeration: 200.0,

            aeration_hours: 10.0,
            cost_feed: 1375.0,
            cost_labor: 150.7,
            cost_fingerlings: 500.0,
            cost_misc_cage: 48.02,
            cost_misc_pond: 226.67,

            vehicles_cage: 7.7,
            vehicles_pond: 10.2,
            paved_traffic: 200.0 * 365.0,
            gravel_traffic: 50.0 * 365.0,
            upgrade_earth_gravel: 92_266.0,
            upgrade_gravel_paved: 414_962.0,
            upgrade_earth_paved: 507_228.0,
            near_road_dist: 10.0,
            near_road_multi: 1.3,
            maint_gravel: 5_822.0,
            maint_paved: 7_526.0,

            energy_cooking: 1875.0,
            energy_lights: 21.9,
            co2_per_kwh: 1.47,
            social_carbon_cost: 0.15,
            health_benefits: 0.1,

            key_counties: [
                "homa bay",
                "migori",
                "kakamega",
                "kirinyaga",
                "nyeri",
                "meru",
                "tharaka nithi",
                "kisii",
                "kisumu",
                "siaya",
                "busia",
                "embu",
                "kiambu",
                "machakos",
                "kajiado",
                "kitui",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl FishConstants {
    /// 행정 구역이 항상 포함 목록에 있는지 확인한다.
    pub fn is_key_county(&self, adm1: &str) -> bool {
        let name = adm1.trim().to_lowercase();
        self.key_counties.iter().any(|c| c == &name)
    }
}
