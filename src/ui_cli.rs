use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::AppError;
use crate::config::{OutputFormat, DEFAULT_CONFIG_PATH};
use crate::engine::CalculationResult;
use crate::equipment::{Catalog, DistributionType, EquipmentType, Staging, UnitLocation};
use crate::i18n::{keys, Translator};
use crate::load::{CalculationRequest, LoadInputs, SizingPreference, UserPreferences};
use crate::numfmt::thousands;
use crate::sizing::EquipmentRecommendation;
use crate::units::{convert_capacity, CapacityUnit};
use crate::validation::{Severity, ValidationSummary};

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(name = "hvac_sizing_toolbox_cli", version, about = "HVAC equipment sizing and validation")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 화면 언어 (en, ko). 지정하지 않으면 설정/시스템 로케일을 따른다.
    #[arg(long, global = true)]
    pub lang: Option<String>,
    /// 카탈로그 파일 (TOML/JSON). 설정의 catalog_path보다 우선한다.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// 출력 형식
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
    /// 생략하면 대화형 모드로 실행한다.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 부하에 맞는 장비 추천
    Recommend(RecommendArgs),
    /// 활성 장비 목록
    Catalog,
    /// 카탈로그 검증 보고서
    Validate,
    /// 필수 필드 누락 CSV
    MissingData {
        /// 저장 경로. 생략하면 표준 출력.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// 대화형 모드
    Interactive,
}

/// `recommend` 인자. `--request`로 JSON 요청 파일을 주거나 플래그로 직접 입력한다.
#[derive(Debug, Clone, Default, Args)]
pub struct RecommendArgs {
    /// `{"loadInputs": ..., "preferences": ...}` 형식의 JSON 파일
    #[arg(long, conflicts_with_all = ["heating", "cooling", "sensible"])]
    pub request: Option<PathBuf>,
    /// 총 난방 부하 [BTU/hr]
    #[arg(long, default_value_t = 0.0)]
    pub heating: f64,
    /// 총 냉방 부하 [BTU/hr]
    #[arg(long, default_value_t = 0.0)]
    pub cooling: f64,
    /// 현열 냉방 부하 [BTU/hr]
    #[arg(long, default_value_t = 0.0)]
    pub sensible: f64,
    #[arg(long)]
    pub summer_temp: Option<f64>,
    #[arg(long)]
    pub winter_temp: Option<f64>,
    /// 해발 고도 [ft]
    #[arg(long)]
    pub elevation: Option<f64>,
    #[arg(long)]
    pub humidity: Option<f64>,
    /// 장비 분류 (쉼표 구분). 생략하면 전체.
    #[arg(long = "type", value_delimiter = ',')]
    pub types: Vec<EquipmentType>,
    #[arg(long)]
    pub distribution: Option<DistributionType>,
    /// size_to_heating | size_to_cooling
    #[arg(long)]
    pub sizing: Option<SizingPreference>,
    #[arg(long, value_delimiter = ',')]
    pub brand: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub staging: Vec<Staging>,
    #[arg(long, value_delimiter = ',')]
    pub location: Vec<UnitLocation>,
    /// 최소 AFUE (소수, 0.95 = 95%)
    #[arg(long)]
    pub min_afue: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
}

impl RecommendArgs {
    /// 인자를 계산 요청으로 만든다. 선호에 sizing 기준이 없으면 `default_sizing`을 채운다.
    pub fn to_request(
        &self,
        default_sizing: Option<SizingPreference>,
    ) -> Result<CalculationRequest, AppError> {
        let mut request = match &self.request {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                serde_json::from_str::<CalculationRequest>(&content)?
            }
            None => CalculationRequest {
                load_inputs: LoadInputs {
                    total_heating_btu: self.heating,
                    total_cooling_btu: self.cooling,
                    sensible_cooling_btu: self.sensible,
                    outdoor_summer_design_temp: self.summer_temp,
                    outdoor_winter_design_temp: self.winter_temp,
                    elevation: self.elevation,
                    indoor_humidity: self.humidity,
                },
                preferences: UserPreferences {
                    equipment_types: if self.types.is_empty() {
                        EquipmentType::ALL.to_vec()
                    } else {
                        self.types.clone()
                    },
                    distribution_type: self.distribution,
                    sizing_preference: self.sizing,
                    brand_filter: self.brand.clone(),
                    staging_filter: self.staging.clone(),
                    min_afue: self.min_afue,
                    max_price: self.max_price,
                    unit_location_filter: self.location.clone(),
                },
            },
        };
        if request.preferences.sizing_preference.is_none() {
            request.preferences.sizing_preference = default_sizing;
        }
        Ok(request)
    }
}

/// 대화형 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Recommend,
    Catalog,
    Validate,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RECOMMEND));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_VALIDATE));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Recommend),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Validate),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 표준 입력으로 부하와 장비 분류를 묻는다.
pub fn prompt_request(
    tr: &Translator,
    default_sizing: Option<SizingPreference>,
) -> Result<CalculationRequest, AppError> {
    let heating = read_f64(tr, tr.t(keys::PROMPT_HEATING_LOAD))?;
    let cooling = read_f64(tr, tr.t(keys::PROMPT_COOLING_LOAD))?;
    let sensible = if cooling > 0.0 {
        read_f64(tr, tr.t(keys::PROMPT_SENSIBLE_LOAD))?
    } else {
        0.0
    };
    let elevation = read_f64(tr, tr.t(keys::PROMPT_ELEVATION))?;

    let equipment_types = loop {
        let line = read_line(tr.t(keys::PROMPT_EQUIPMENT_TYPES))?;
        match parse_types(&line) {
            Ok(types) => break types,
            Err(msg) => println!("{msg}"),
        }
    };

    let sizing_preference = match read_line(tr.t(keys::PROMPT_SIZING_PREFERENCE))?.trim() {
        "1" => Some(SizingPreference::SizeToCooling),
        "2" => Some(SizingPreference::SizeToHeating),
        _ => default_sizing,
    };

    Ok(CalculationRequest {
        load_inputs: LoadInputs {
            total_heating_btu: heating,
            total_cooling_btu: cooling,
            sensible_cooling_btu: sensible,
            elevation: (elevation != 0.0).then_some(elevation),
            ..LoadInputs::default()
        },
        preferences: UserPreferences {
            sizing_preference,
            ..UserPreferences::for_types(&equipment_types)
        },
    })
}

/// 쉼표로 구분된 분류 목록. 빈 입력은 전체 분류.
pub fn parse_types(line: &str) -> Result<Vec<EquipmentType>, String> {
    let parts: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        return Ok(EquipmentType::ALL.to_vec());
    }
    parts.into_iter().map(|s| s.parse::<EquipmentType>()).collect()
}

/// 추천 결과와 검증 요약을 텍스트로 출력한다.
pub fn write_result<W: Write>(
    out: &mut W,
    tr: &Translator,
    result: &CalculationResult,
) -> io::Result<()> {
    writeln!(out, "\n== {} ==", tr.t(keys::RESULT_HEADING))?;
    if result.recommendations.is_empty() {
        writeln!(out, "{}", tr.t(keys::RESULT_NONE))?;
    }
    for (rank, rec) in result.recommendations.iter().enumerate() {
        write_recommendation(out, tr, rank + 1, rec)?;
    }
    write_summary(out, tr, &result.validation_summary)
}

fn write_recommendation<W: Write>(
    out: &mut W,
    tr: &Translator,
    rank: usize,
    rec: &EquipmentRecommendation,
) -> io::Result<()> {
    let eq = &rec.equipment;
    writeln!(
        out,
        "\n{rank}. [{}] {} {} ({}, {})",
        tr.status(rec.sizing_status),
        eq.manufacturer,
        eq.model,
        eq.equipment_type,
        eq.id
    )?;
    write!(
        out,
        "   {} {}% | {} ${}",
        tr.t(keys::RESULT_SIZING),
        rec.sizing_percentage,
        tr.t(keys::RESULT_PRICE),
        thousands(eq.price)
    )?;
    if let Some(btu) = eq.heating_capacity_btu {
        write!(out, " | {} {} BTU/hr", tr.t(keys::RESULT_HEATING_CAPACITY), thousands(btu))?;
    }
    if let Some(btu) = eq.cooling_capacity_btu {
        let tons = convert_capacity(btu, CapacityUnit::BtuPerHour, CapacityUnit::Ton);
        write!(
            out,
            " | {} {} BTU/hr ({tons:.1} ton)",
            tr.t(keys::RESULT_COOLING_CAPACITY),
            thousands(btu)
        )?;
    }
    writeln!(out)?;
    if let Some(kw) = rec.backup_heat_required {
        writeln!(out, "   {}: {kw} kW", tr.t(keys::RESULT_BACKUP_HEAT))?;
    }
    if let Some(cfm) = rec.recommended_cfm {
        writeln!(out, "   {}: {} CFM", tr.t(keys::RESULT_CFM), thousands(f64::from(cfm)))?;
    }
    if !rec.warnings.is_empty() {
        writeln!(out, "   {}:", tr.t(keys::RESULT_WARNINGS))?;
        for w in &rec.warnings {
            writeln!(out, "     ! {w}")?;
        }
    }
    if !rec.instructions.is_empty() {
        writeln!(out, "   {}:", tr.t(keys::RESULT_INSTRUCTIONS))?;
        for i in &rec.instructions {
            writeln!(out, "     - {i}")?;
        }
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, tr: &Translator, summary: &ValidationSummary) -> io::Result<()> {
    writeln!(
        out,
        "\n== {} [{}/{} {}] ==",
        tr.t(keys::SUMMARY_HEADING),
        summary.included_equipment,
        summary.total_equipment,
        tr.t(keys::SUMMARY_INCLUDED)
    )?;
    writeln!(out, "{}: {}", tr.t(keys::SUMMARY_EXCLUDED), summary.excluded_equipment)?;
    if summary.errors.is_empty() {
        return writeln!(out, "{}", tr.t(keys::SUMMARY_NO_ERRORS));
    }
    for severity in [Severity::Critical, Severity::Warning, Severity::Info] {
        let errors: Vec<_> = summary.errors_with(severity).collect();
        if errors.is_empty() {
            continue;
        }
        writeln!(out, "{} ({}):", tr.severity(severity), errors.len())?;
        for err in errors {
            writeln!(
                out,
                "  {} {} ({}): {}",
                err.manufacturer, err.model, err.equipment_id, err.message
            )?;
            if let Some(details) = &err.technical_details {
                writeln!(out, "    {details}")?;
            }
        }
    }
    Ok(())
}

/// 활성 장비 목록을 출력한다.
pub fn write_catalog<W: Write>(out: &mut W, tr: &Translator, catalog: &Catalog) -> io::Result<()> {
    let active = catalog.active();
    writeln!(
        out,
        "== {} ({} {}) ==",
        tr.t(keys::CATALOG_HEADING),
        active.len(),
        tr.t(keys::CATALOG_COUNT)
    )?;
    for eq in active {
        writeln!(
            out,
            "{:<10} {:<18} {:<24} ${}",
            eq.id,
            eq.equipment_type.code(),
            eq.display_name(),
            thousands(eq.price)
        )?;
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().replace(',', "").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
