use crate::config::Config;
use crate::fish;
use crate::hydro;
use crate::i18n::{self, Translator};
use crate::irri;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 파라미터 로드/검증 오류
    Params(fish::ParamError),
    /// 양식장 모델 평가 오류
    Fish(fish::EvalError),
    /// 수소 모델 평가 오류
    Hydro(hydro::HydroError),
    /// 관개 모델 평가 오류
    Irri(irri::IrriError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Params(e) => write!(f, "파라미터 오류: {e}"),
            AppError::Fish(e) => write!(f, "양식장 모델 오류: {e}"),
            AppError::Hydro(e) => write!(f, "수소 모델 오류: {e}"),
            AppError::Irri(e) => write!(f, "관개 모델 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<fish::ParamError> for AppError {
    fn from(value: fish::ParamError) -> Self {
        AppError::Params(value)
    }
}

impl From<fish::EvalError> for AppError {
    fn from(value: fish::EvalError) -> Self {
        AppError::Fish(value)
    }
}

impl From<hydro::HydroError> for AppError {
    fn from(value: hydro::HydroError) -> Self {
        AppError::Hydro(value)
    }
}

impl From<irri::IrriError> for AppError {
    fn from(value: irri::IrriError) -> Self {
        AppError::Irri(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::FishFarm => ui_cli::handle_fish(tr, config)?,
            MenuChoice::Hydrogen => ui_cli::handle_hydro(tr, config)?,
            MenuChoice::Irrigation => ui_cli::handle_irri(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
