//! 내수면 양식장(케이지/연못) 기술경제성 모델.
//!
//! 입지 적합성·인구 생존성 이중 게이트로 기술을 고르고, 하위 시스템별
//! 톤당 비용을 합산해 매출·이익·정부 부담·사회적 편익을 계산한다.

pub mod costs;
pub mod eligibility;
pub mod model;
pub mod params;
pub mod roads;
pub mod social;

pub use eligibility::FarmTech;
pub use model::{evaluate, EvalError, FishResult};
pub use params::{FishConstants, FishParams, ParamError};
