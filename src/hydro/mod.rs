//! 그린수소 생산 단가(LCOH) 모델.
//!
//! 태양광/풍력 발전 단가를 비교하고, 전해조·취급·용수·운송 비용을
//! 합산해 수요처 인도 단가를 계산한다.

pub mod model;
pub mod params;

pub use model::{evaluate, ElecTech, H2Tech, HydroError, HydroResult, HydroSite};
pub use params::{H2State, HydroConstants, HydroParams, WaterResource};
