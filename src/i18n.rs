use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_FISH: &str = "main_menu.fish";
    pub const MAIN_MENU_HYDRO: &str = "main_menu.hydro";
    pub const MAIN_MENU_IRRI: &str = "main_menu.irri";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PARAMS_DEFAULT: &str = "params.default";
    pub const PARAMS_LOADED: &str = "params.loaded";

    pub const FISH_HEADING: &str = "fish.heading";
    pub const PROMPT_POP: &str = "prompt.pop";
    pub const PROMPT_PRECIP: &str = "prompt.precip";
    pub const PROMPT_GRID_DIST: &str = "prompt.grid_dist";
    pub const PROMPT_LAKE_DIST: &str = "prompt.lake_dist";
    pub const PROMPT_WATER_DIST: &str = "prompt.water_dist";
    pub const PROMPT_RIVER_DIST: &str = "prompt.river_dist";
    pub const PROMPT_ROAD_DIST: &str = "prompt.road_dist";
    pub const PROMPT_URBAN_DIST: &str = "prompt.urban_dist";
    pub const PROMPT_CITY_DIST: &str = "prompt.city_dist";
    pub const PROMPT_ADM1: &str = "prompt.adm1";
    pub const PROMPT_ROAD_CLASS: &str = "prompt.road_class";
    pub const RESULT_FARM_TYPE: &str = "result.farm_type";
    pub const RESULT_OUTPUT: &str = "result.output";
    pub const RESULT_GOV_CAPEX: &str = "result.gov_capex";
    pub const RESULT_GOV_ANNUAL: &str = "result.gov_annual";
    pub const RESULT_REVENUE: &str = "result.revenue";
    pub const RESULT_PROFIT: &str = "result.profit";
    pub const RESULT_SOCIAL: &str = "result.social";
    pub const RESULT_NO_FARM: &str = "result.no_farm";

    pub const HYDRO_HEADING: &str = "hydro.heading";
    pub const PROMPT_PV: &str = "prompt.pv";
    pub const PROMPT_WIND: &str = "prompt.wind";
    pub const PROMPT_OCEAN_DIST: &str = "prompt.ocean_dist";
    pub const PROMPT_H2O_DIST: &str = "prompt.h2o_dist";
    pub const PROMPT_PORT_DIST: &str = "prompt.port_dist";
    pub const PROMPT_REST_AREA: &str = "prompt.rest_area";
    pub const PROMPT_AVAIL_AREA: &str = "prompt.avail_area";
    pub const RESULT_ELEC_TECH: &str = "result.elec_tech";
    pub const RESULT_COST_ELEC: &str = "result.cost_elec";
    pub const RESULT_COST_H2: &str = "result.cost_h2";
    pub const RESULT_H2_TO_DEMAND: &str = "result.h2_to_demand";
    pub const RESULT_PV_GWH: &str = "result.pv_gwh";
    pub const RESULT_WIND_GWH: &str = "result.wind_gwh";
    pub const RESULT_NO_AREA: &str = "result.no_area";

    pub const IRRI_HEADING: &str = "irri.heading";
    pub const PROMPT_CROP_EXTENT: &str = "prompt.crop_extent";
    pub const PROMPT_CROP_YIELD: &str = "prompt.crop_yield";
    pub const PROMPT_MARKET_DIST: &str = "prompt.market_dist";
    pub const PROMPT_WTD: &str = "prompt.wtd";
    pub const PROMPT_GRID_DIST_IRRI: &str = "prompt.grid_dist_irri";
    pub const RESULT_CROP_PRODUCTION: &str = "result.crop_production";
    pub const RESULT_TRANSP_COST: &str = "result.transp_cost";
    pub const RESULT_IRRIG_COST: &str = "result.irrig_cost";
    pub const RESULT_NO_AGRI: &str = "result.no_agri";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Rural Infrastructure Toolbox ===",
        MAIN_MENU_FISH => "1) 양식장(Fish Farm) 평가",
        MAIN_MENU_HYDRO => "2) 그린수소(LCOH) 평가",
        MAIN_MENU_IRRI => "3) 관개 농업 평가",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PARAMS_DEFAULT => "기준 파라미터 세트를 사용합니다.",
        PARAMS_LOADED => "파라미터 파일을 읽었습니다:",
        FISH_HEADING => "\n-- 양식장 평가 --",
        PROMPT_POP => "인구 [명]: ",
        PROMPT_PRECIP => "연 강수량 [mm/yr]: ",
        PROMPT_GRID_DIST => "전력망까지 거리 [km]: ",
        PROMPT_LAKE_DIST => "호수까지 거리 [km]: ",
        PROMPT_WATER_DIST => "기타 수원까지 거리 [km]: ",
        PROMPT_RIVER_DIST => "하천까지 거리 [km]: ",
        PROMPT_ROAD_DIST => "간선 도로까지 거리 [km]: ",
        PROMPT_URBAN_DIST => "도시권까지 거리 [km]: ",
        PROMPT_CITY_DIST => "대도시까지 거리 [km]: ",
        PROMPT_ADM1 => "행정 구역 이름: ",
        PROMPT_ROAD_CLASS => "현재 도로 등급 (1=earth 2=gravel 3=paved): ",
        RESULT_FARM_TYPE => "양식 기술:",
        RESULT_OUTPUT => "생산량:",
        RESULT_GOV_CAPEX => "정부 투자비:",
        RESULT_GOV_ANNUAL => "정부 연간 유지비:",
        RESULT_REVENUE => "매출:",
        RESULT_PROFIT => "이익:",
        RESULT_SOCIAL => "사회적 편익:",
        RESULT_NO_FARM => "이 마을에는 양식장이 성립하지 않습니다.",
        HYDRO_HEADING => "\n-- 그린수소 평가 --",
        PROMPT_PV => "태양광 일 발전량 [kWh/kWp/day]: ",
        PROMPT_WIND => "평균 풍속 [m/s]: ",
        PROMPT_OCEAN_DIST => "해안까지 거리 [km]: ",
        PROMPT_H2O_DIST => "수원까지 거리 [km]: ",
        PROMPT_PORT_DIST => "수출항까지 거리 [km]: ",
        PROMPT_REST_AREA => "이용 제한 면적 [km2]: ",
        PROMPT_AVAIL_AREA => "전체 면적 [km2]: ",
        RESULT_ELEC_TECH => "발전 기술:",
        RESULT_COST_ELEC => "발전 단가:",
        RESULT_COST_H2 => "수소 생산 단가:",
        RESULT_H2_TO_DEMAND => "수요처 인도 단가:",
        RESULT_PV_GWH => "태양광 설치 가능량:",
        RESULT_WIND_GWH => "풍력 설치 가능량:",
        RESULT_NO_AREA => "가용 면적이 부족해 발전 부지가 성립하지 않습니다.",
        IRRI_HEADING => "\n-- 관개 농업 평가 --",
        PROMPT_CROP_EXTENT => "경작지 비율 [%]: ",
        PROMPT_CROP_YIELD => "작물 수확량 [ton/ha/yr]: ",
        PROMPT_MARKET_DIST => "시장까지 거리 [km]: ",
        PROMPT_WTD => "지하수위 심도 [m]: ",
        PROMPT_GRID_DIST_IRRI => "전력망까지 거리 [km]: ",
        RESULT_CROP_PRODUCTION => "작물 생산량:",
        RESULT_TRANSP_COST => "운송비:",
        RESULT_IRRIG_COST => "관개 비용:",
        RESULT_NO_AGRI => "생산량이 너무 적어 관개 농업이 성립하지 않습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Rural Infrastructure Toolbox ===",
        MAIN_MENU_FISH => "1) Fish Farm Feasibility",
        MAIN_MENU_HYDRO => "2) Green Hydrogen (LCOH)",
        MAIN_MENU_IRRI => "3) Irrigation Feasibility",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PARAMS_DEFAULT => "Using the reference parameter set.",
        PARAMS_LOADED => "Loaded parameter file:",
        FISH_HEADING => "\n-- Fish Farm Feasibility --",
        PROMPT_POP => "Population [persons]: ",
        PROMPT_PRECIP => "Annual precipitation [mm/yr]: ",
        PROMPT_GRID_DIST => "Distance to grid [km]: ",
        PROMPT_LAKE_DIST => "Distance to lake [km]: ",
        PROMPT_WATER_DIST => "Distance to other water body [km]: ",
        PROMPT_RIVER_DIST => "Distance to river [km]: ",
        PROMPT_ROAD_DIST => "Distance to main road [km]: ",
        PROMPT_URBAN_DIST => "Distance to urban centre [km]: ",
        PROMPT_CITY_DIST => "Distance to major city [km]: ",
        PROMPT_ADM1 => "Administrative region: ",
        PROMPT_ROAD_CLASS => "Current road class (1=earth 2=gravel 3=paved): ",
        RESULT_FARM_TYPE => "Farm type:",
        RESULT_OUTPUT => "Output:",
        RESULT_GOV_CAPEX => "Gov capex:",
        RESULT_GOV_ANNUAL => "Gov annual:",
        RESULT_REVENUE => "Revenue:",
        RESULT_PROFIT => "Profit:",
        RESULT_SOCIAL => "Social benefit:",
        RESULT_NO_FARM => "No farm possible here.",
        HYDRO_HEADING => "\n-- Green Hydrogen Feasibility --",
        PROMPT_PV => "Daily PV yield [kWh/kWp/day]: ",
        PROMPT_WIND => "Mean wind speed [m/s]: ",
        PROMPT_OCEAN_DIST => "Distance to ocean [km]: ",
        PROMPT_H2O_DIST => "Distance to water body [km]: ",
        PROMPT_PORT_DIST => "Distance to export port [km]: ",
        PROMPT_REST_AREA => "Restricted area [km2]: ",
        PROMPT_AVAIL_AREA => "Total area [km2]: ",
        RESULT_ELEC_TECH => "Electricity technology:",
        RESULT_COST_ELEC => "Electricity cost:",
        RESULT_COST_H2 => "H2 production cost:",
        RESULT_H2_TO_DEMAND => "H2 cost at demand centre:",
        RESULT_PV_GWH => "Possible PV generation:",
        RESULT_WIND_GWH => "Possible wind generation:",
        RESULT_NO_AREA => "Not enough unrestricted area for a plant.",
        IRRI_HEADING => "\n-- Irrigation Feasibility --",
        PROMPT_CROP_EXTENT => "Cropped-area share [%]: ",
        PROMPT_CROP_YIELD => "Crop yield [ton/ha/yr]: ",
        PROMPT_MARKET_DIST => "Distance to market [km]: ",
        PROMPT_WTD => "Water-table depth [m]: ",
        PROMPT_GRID_DIST_IRRI => "Distance to grid [km]: ",
        RESULT_CROP_PRODUCTION => "Crop production:",
        RESULT_TRANSP_COST => "Transport cost:",
        RESULT_IRRIG_COST => "Irrigation cost:",
        RESULT_NO_AGRI => "Production too low for irrigated agriculture.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}
