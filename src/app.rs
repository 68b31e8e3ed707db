use std::fs::File;
use std::io;
use std::path::Path;

use crate::config::{Config, ConfigError, OutputFormat};
use crate::engine::{self, CalculationResult};
use crate::equipment::{Catalog, CatalogError};
use crate::i18n::{self, keys, Translator};
use crate::load::{self, CalculationRequest, InputError};
use crate::ui_cli::{self, Cli, Command, MenuChoice, RecommendArgs};
use crate::validation::report::{missing_data_csv, CatalogReport};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 카탈로그 로드 오류
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
    /// 부하/선호 입력 검증 실패
    #[error(transparent)]
    Input(#[from] InputError),
    /// 요청 JSON 파싱/결과 직렬화 오류
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV 출력 오류
    #[error("CSV 오류: {0}")]
    Csv(#[from] csv::Error),
}

/// 명령행 인자와 설정으로 애플리케이션을 실행한다.
pub fn run(cli: Cli, config: &Config) -> Result<(), AppError> {
    let lang = i18n::resolve_language(cli.lang.as_deref(), &config.language);
    let tr = Translator::new_with_pack(lang.as_code(), Some(Path::new("locales")));
    let format = cli.format.unwrap_or(config.output_format);

    let catalog_path = cli.catalog.as_deref().or(config.catalog_path.as_deref());
    let catalog = match catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::built_in()?,
    };
    tracing::debug!(items = catalog.len(), "catalog ready");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Recommend(args) => recommend(&tr, config, &catalog, &args, format),
        Command::Catalog => list_catalog(&tr, &catalog, format),
        Command::Validate => {
            print!("{}", CatalogReport::build(&catalog.equipment));
            Ok(())
        }
        Command::MissingData { output } => match output {
            Some(path) => {
                missing_data_csv(&catalog.equipment, File::create(&path)?)?;
                println!("{} {}", tr.t(keys::MISSING_DATA_WRITTEN), path.display());
                Ok(())
            }
            None => Ok(missing_data_csv(&catalog.equipment, io::stdout().lock())?),
        },
        Command::Interactive => interactive(&tr, config, &catalog, format),
    }
}

/// 경계 검증 후 엔진을 실행한다.
pub fn calculate(request: &CalculationRequest, catalog: &Catalog) -> Result<CalculationResult, InputError> {
    load::validate_request(request)?;
    Ok(engine::calculate_equipment_recommendations(
        &request.load_inputs,
        &request.preferences,
        &catalog.equipment,
    ))
}

fn recommend(
    tr: &Translator,
    config: &Config,
    catalog: &Catalog,
    args: &RecommendArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let request = args.to_request(config.default_sizing_preference)?;
    let result = calculate(&request, catalog)?;
    print_result(tr, &result, format)
}

fn print_result(tr: &Translator, result: &CalculationResult, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => ui_cli::write_result(&mut io::stdout().lock(), tr, result)?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn list_catalog(tr: &Translator, catalog: &Catalog, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => ui_cli::write_catalog(&mut io::stdout().lock(), tr, catalog)?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog.active())?),
    }
    Ok(())
}

/// 대화형 메인 루프. 입력 검증 실패는 메시지만 보여주고 계속한다.
fn interactive(
    tr: &Translator,
    config: &Config,
    catalog: &Catalog,
    format: OutputFormat,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Recommend => {
                let request = ui_cli::prompt_request(tr, config.default_sizing_preference)?;
                match calculate(&request, catalog) {
                    Ok(result) => print_result(tr, &result, format)?,
                    Err(err) => {
                        println!("{}", tr.t(keys::INPUT_INVALID));
                        for issue in err.issues() {
                            println!("  - {}", issue.message);
                        }
                    }
                }
            }
            MenuChoice::Catalog => list_catalog(tr, catalog, format)?,
            MenuChoice::Validate => print!("{}", CatalogReport::build(&catalog.equipment)),
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
