use clap::Parser;

use rural_infra_toolbox::{app, config, i18n};

/// 농촌 인프라 기술경제성 평가 CLI.
#[derive(Debug, Parser)]
#[command(name = "rural_infra_toolbox", version)]
struct Cli {
    /// 언어 코드(ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리(locales/ 대신 사용)
    #[arg(long)]
    lang_pack: Option<String>,
    /// 양식장 모델 파라미터 TOML 파일
    #[arg(long)]
    fish_params: Option<String>,
    /// 수소 모델 파라미터 TOML 파일
    #[arg(long)]
    hydro_params: Option<String>,
    /// 관개 모델 파라미터 TOML 파일
    #[arg(long)]
    irri_params: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(path) = cli.fish_params {
        cfg.fish_params = Some(path);
    }
    if let Some(path) = cli.hydro_params {
        cfg.hydro_params = Some(path);
    }
    if let Some(path) = cli.irri_params {
        cfg.irri_params = Some(path);
    }

    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new_with_pack(&lang, cli.lang_pack.as_deref());

    app::run(&mut cfg, &tr)?;
    Ok(())
}
