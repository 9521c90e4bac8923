//! 관개 농업 기술경제성 모델.

pub mod model;
pub mod params;

pub use model::{evaluate, CropTech, IrriError, IrriResult, IrriSite};
pub use params::{IrriConstants, IrriParams, IrrigationTech};
