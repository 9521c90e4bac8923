//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 배치 구동도 쉽게 한다.

pub mod app;
pub mod config;
pub mod finance;
pub mod fish;
pub mod hydro;
pub mod i18n;
pub mod irri;
pub mod site;
pub mod ui_cli;
