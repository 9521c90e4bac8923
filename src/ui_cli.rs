use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::fish::{self, FishConstants, FishParams, FishResult};
use crate::hydro::{self, HydroConstants, HydroParams, HydroSite};
use crate::i18n::{keys, Translator};
use crate::irri::{self, IrriConstants, IrriParams, IrriSite};
use crate::site::{RoadClass, Town};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FishFarm,
    Hydrogen,
    Irrigation,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_FISH));
    println!("{}", tr.t(keys::MAIN_MENU_HYDRO));
    println!("{}", tr.t(keys::MAIN_MENU_IRRI));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::FishFarm),
            "2" => return Ok(MenuChoice::Hydrogen),
            "3" => return Ok(MenuChoice::Irrigation),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 양식장 평가 메뉴를 처리한다.
pub fn handle_fish(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FISH_HEADING));
    let pars = match &cfg.fish_params {
        Some(path) => {
            let pars = FishParams::from_toml_path(Path::new(path))?;
            println!("{} {path}", tr.t(keys::PARAMS_LOADED));
            pars
        }
        None => {
            println!("{}", tr.t(keys::PARAMS_DEFAULT));
            FishParams::default()
        }
    };
    let consts = FishConstants::default();

    let town = Town {
        pop: read_f64(tr, tr.t(keys::PROMPT_POP))?,
        precip: read_f64(tr, tr.t(keys::PROMPT_PRECIP))?,
        grid_dist: read_f64(tr, tr.t(keys::PROMPT_GRID_DIST))?,
        lake_dist: read_f64(tr, tr.t(keys::PROMPT_LAKE_DIST))?,
        water_dist: read_f64(tr, tr.t(keys::PROMPT_WATER_DIST))?,
        river_dist: read_f64(tr, tr.t(keys::PROMPT_RIVER_DIST))?,
        road_dist: read_f64(tr, tr.t(keys::PROMPT_ROAD_DIST))?,
        urban_dist: read_f64(tr, tr.t(keys::PROMPT_URBAN_DIST))?,
        city_dist: read_f64(tr, tr.t(keys::PROMPT_CITY_DIST))?,
        adm1: read_line(tr.t(keys::PROMPT_ADM1))?.trim().to_string(),
        road_class: read_road_class(tr)?,
    };

    let result = fish::evaluate(&town, &pars, &consts)?;
    print_fish_result(tr, &result);
    Ok(())
}

fn print_fish_result(tr: &Translator, res: &FishResult) {
    if res.tech == fish::FarmTech::None {
        println!("{}", tr.t(keys::RESULT_NO_FARM));
        return;
    }
    println!("{} {}", tr.t(keys::RESULT_FARM_TYPE), res.tech);
    println!("{} {:.1} ton/yr", tr.t(keys::RESULT_OUTPUT), res.fish_output);
    println!("{} {:.0} USD", tr.t(keys::RESULT_GOV_CAPEX), res.gov_costs);
    println!(
        "{} {:.0} USD/yr",
        tr.t(keys::RESULT_GOV_ANNUAL),
        res.gov_annual
    );
    println!("{} {:.0} USD/yr", tr.t(keys::RESULT_REVENUE), res.revenue);
    println!("{} {:.0} USD/yr", tr.t(keys::RESULT_PROFIT), res.profit);
    println!("{} {:.0} USD/yr", tr.t(keys::RESULT_SOCIAL), res.social);
}

/// 그린수소 평가 메뉴를 처리한다.
pub fn handle_hydro(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HYDRO_HEADING));
    let pars = match &cfg.hydro_params {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let pars = HydroParams::from_toml_str(&content)?;
            println!("{} {path}", tr.t(keys::PARAMS_LOADED));
            pars
        }
        None => {
            println!("{}", tr.t(keys::PARAMS_DEFAULT));
            HydroParams::default()
        }
    };
    let consts = HydroConstants::default();

    let site = HydroSite {
        pv: read_f64(tr, tr.t(keys::PROMPT_PV))?,
        wind: read_f64(tr, tr.t(keys::PROMPT_WIND))?,
        ocean_dist: read_f64(tr, tr.t(keys::PROMPT_OCEAN_DIST))?,
        water_dist: read_f64(tr, tr.t(keys::PROMPT_H2O_DIST))?,
        port_dist: read_f64(tr, tr.t(keys::PROMPT_PORT_DIST))?,
        rest_area: read_f64(tr, tr.t(keys::PROMPT_REST_AREA))?,
        avail_area: read_f64(tr, tr.t(keys::PROMPT_AVAIL_AREA))?,
    };

    let res = hydro::evaluate(&site, &pars, &consts)?;
    if res.tech == hydro::H2Tech::None {
        println!("{}", tr.t(keys::RESULT_NO_AREA));
    }
    println!("{} {}", tr.t(keys::RESULT_ELEC_TECH), res.elec_technology);
    println!(
        "{} {:.1} EUR/MWh",
        tr.t(keys::RESULT_COST_ELEC),
        res.cost_elec
    );
    println!("{} {:.2} EUR/kg", tr.t(keys::RESULT_COST_H2), res.cost_h2);
    println!(
        "{} {:.2} EUR/kg",
        tr.t(keys::RESULT_H2_TO_DEMAND),
        res.h2_cost_to_demand
    );
    println!("{} {:.1} GWh/yr", tr.t(keys::RESULT_PV_GWH), res.pv_gwh);
    println!("{} {:.1} GWh/yr", tr.t(keys::RESULT_WIND_GWH), res.wind_gwh);
    Ok(())
}

/// 관개 농업 평가 메뉴를 처리한다.
pub fn handle_irri(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::IRRI_HEADING));
    let pars = match &cfg.irri_params {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let pars = IrriParams::from_toml_str(&content)?;
            println!("{} {path}", tr.t(keys::PARAMS_LOADED));
            pars
        }
        None => {
            println!("{}", tr.t(keys::PARAMS_DEFAULT));
            IrriParams::default()
        }
    };
    let consts = IrriConstants::default();

    let site = IrriSite {
        crop_extent: read_f64(tr, tr.t(keys::PROMPT_CROP_EXTENT))?,
        crop_yield: read_f64(tr, tr.t(keys::PROMPT_CROP_YIELD))?,
        market_dist: read_f64(tr, tr.t(keys::PROMPT_MARKET_DIST))?,
        wtd_mean: read_f64(tr, tr.t(keys::PROMPT_WTD))?,
        grid_dist: read_f64(tr, tr.t(keys::PROMPT_GRID_DIST_IRRI))?,
    };

    let res = irri::evaluate(&site, &pars, &consts)?;
    if res.tech == irri::CropTech::None {
        println!("{}", tr.t(keys::RESULT_NO_AGRI));
    }
    println!(
        "{} {:.1} ton/yr",
        tr.t(keys::RESULT_CROP_PRODUCTION),
        res.crop_production
    );
    println!(
        "{} {:.0} USD/yr",
        tr.t(keys::RESULT_TRANSP_COST),
        res.transp_cost
    );
    println!(
        "{} {:.0} USD/yr",
        tr.t(keys::RESULT_IRRIG_COST),
        res.irrig_cost
    );
    println!("{} {:.0} USD/yr", tr.t(keys::RESULT_REVENUE), res.revenue);
    println!("{} {:.0} USD/yr", tr.t(keys::RESULT_PROFIT), res.profit);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "ko".to_string(),
        "2" => cfg.language = "en".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_road_class(tr: &Translator) -> Result<RoadClass, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_ROAD_CLASS))?;
    let class = match sel.trim() {
        "2" => RoadClass::Gravel,
        "3" => RoadClass::Paved,
        _ => RoadClass::Earth,
    };
    Ok(class)
}
