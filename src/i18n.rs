//! CLI 화면 문자열 번역.
//!
//! 엔진이 만드는 경고/지침 문장은 데이터로 취급하므로 번역하지 않는다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::sizing::SizingStatus;
use crate::validation::Severity;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RECOMMEND: &str = "main_menu.recommend";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_VALIDATE: &str = "main_menu.validate";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_HEATING_LOAD: &str = "prompt.heating_load";
    pub const PROMPT_COOLING_LOAD: &str = "prompt.cooling_load";
    pub const PROMPT_SENSIBLE_LOAD: &str = "prompt.sensible_load";
    pub const PROMPT_ELEVATION: &str = "prompt.elevation";
    pub const PROMPT_EQUIPMENT_TYPES: &str = "prompt.equipment_types";
    pub const PROMPT_SIZING_PREFERENCE: &str = "prompt.sizing_preference";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_NONE: &str = "result.none";
    pub const RESULT_SIZING: &str = "result.sizing";
    pub const RESULT_PRICE: &str = "result.price";
    pub const RESULT_HEATING_CAPACITY: &str = "result.heating_capacity";
    pub const RESULT_COOLING_CAPACITY: &str = "result.cooling_capacity";
    pub const RESULT_BACKUP_HEAT: &str = "result.backup_heat";
    pub const RESULT_CFM: &str = "result.cfm";
    pub const RESULT_WARNINGS: &str = "result.warnings";
    pub const RESULT_INSTRUCTIONS: &str = "result.instructions";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_INCLUDED: &str = "summary.included";
    pub const SUMMARY_EXCLUDED: &str = "summary.excluded";
    pub const SUMMARY_NO_ERRORS: &str = "summary.no_errors";

    pub const STATUS_OPTIMAL: &str = "status.optimal";
    pub const STATUS_ACCEPTABLE: &str = "status.acceptable";
    pub const STATUS_OVERSIZED: &str = "status.oversized";
    pub const STATUS_UNDERSIZED: &str = "status.undersized";

    pub const SEVERITY_CRITICAL: &str = "severity.critical";
    pub const SEVERITY_WARNING: &str = "severity.warning";
    pub const SEVERITY_INFO: &str = "severity.info";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_COUNT: &str = "catalog.count";

    pub const INPUT_INVALID: &str = "input.invalid";
    pub const MISSING_DATA_WRITTEN: &str = "missing_data.written";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let lang = Language::from_code(lang_code);
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang));
        Self { lang, overrides }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
        }
    }

    pub fn status(&self, status: SizingStatus) -> &str {
        self.t(match status {
            SizingStatus::Optimal => keys::STATUS_OPTIMAL,
            SizingStatus::Acceptable => keys::STATUS_ACCEPTABLE,
            SizingStatus::Oversized => keys::STATUS_OVERSIZED,
            SizingStatus::Undersized => keys::STATUS_UNDERSIZED,
        })
    }

    pub fn severity(&self, severity: Severity) -> &str {
        self.t(match severity {
            Severity::Critical => keys::SEVERITY_CRITICAL,
            Severity::Warning => keys::SEVERITY_WARNING,
            Severity::Info => keys::SEVERITY_INFO,
        })
    }
}

/// CLI 플래그 → 설정 → 시스템 로케일 → en 순으로 언어를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> Language {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
        .or_else(detect_system_language)
        .unwrap_or(Language::En)
}

fn normalize_lang(code: &str) -> Option<Language> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some(Language::Ko),
        other if other.starts_with("en") => Some(Language::En),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<Language> {
    let lang = loc.split(['.', '_', '-']).next().unwrap_or_default();
    normalize_lang(lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션/키로 구성된 문자열 테이블.
fn load_overrides(dir: &Path, lang: Language) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{}.toml", lang.as_code()));
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

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== HVAC Equipment Sizing ===",
        MAIN_MENU_RECOMMEND => "1) Recommend equipment",
        MAIN_MENU_CATALOG => "2) List catalog",
        MAIN_MENU_VALIDATE => "3) Catalog validation report",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_HEATING_LOAD => "Total heating load [BTU/hr]: ",
        PROMPT_COOLING_LOAD => "Total cooling load [BTU/hr]: ",
        PROMPT_SENSIBLE_LOAD => "Sensible cooling load [BTU/hr]: ",
        PROMPT_ELEVATION => "Elevation [ft] (0 if unknown): ",
        PROMPT_EQUIPMENT_TYPES => {
            "Equipment types, comma separated (furnace, ac, heat_pump, boiler, combo; enter for all): "
        }
        PROMPT_SIZING_PREFERENCE => "Heat pump sizing (1=cooling, 2=heating, enter=default): ",
        RESULT_HEADING => "Recommendations",
        RESULT_NONE => "No equipment matches these loads and preferences.",
        RESULT_SIZING => "sizing",
        RESULT_PRICE => "price",
        RESULT_HEATING_CAPACITY => "heating",
        RESULT_COOLING_CAPACITY => "cooling",
        RESULT_BACKUP_HEAT => "backup heat",
        RESULT_CFM => "airflow",
        RESULT_WARNINGS => "warnings",
        RESULT_INSTRUCTIONS => "instructions",
        SUMMARY_HEADING => "Validation summary",
        SUMMARY_INCLUDED => "included",
        SUMMARY_EXCLUDED => "excluded",
        SUMMARY_NO_ERRORS => "No data errors.",
        STATUS_OPTIMAL => "Optimal",
        STATUS_ACCEPTABLE => "Acceptable",
        STATUS_OVERSIZED => "Oversized",
        STATUS_UNDERSIZED => "Undersized",
        SEVERITY_CRITICAL => "Critical",
        SEVERITY_WARNING => "Warning",
        SEVERITY_INFO => "Info",
        CATALOG_HEADING => "Equipment catalog",
        CATALOG_COUNT => "active items",
        INPUT_INVALID => "Input rejected:",
        MISSING_DATA_WRITTEN => "Missing-data CSV written to",
        _ => "[missing translation]",
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 냉난방 장비 용량 선정 ===",
        MAIN_MENU_RECOMMEND => "1) 장비 추천",
        MAIN_MENU_CATALOG => "2) 카탈로그 목록",
        MAIN_MENU_VALIDATE => "3) 카탈로그 검증 보고서",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_HEATING_LOAD => "총 난방 부하 [BTU/hr]: ",
        PROMPT_COOLING_LOAD => "총 냉방 부하 [BTU/hr]: ",
        PROMPT_SENSIBLE_LOAD => "현열 냉방 부하 [BTU/hr]: ",
        PROMPT_ELEVATION => "해발 고도 [ft] (모르면 0): ",
        PROMPT_EQUIPMENT_TYPES => {
            "장비 분류, 쉼표 구분 (furnace, ac, heat_pump, boiler, combo; 엔터=전체): "
        }
        PROMPT_SIZING_PREFERENCE => "히트펌프 선정 기준 (1=냉방, 2=난방, 엔터=기본): ",
        RESULT_HEADING => "추천 결과",
        RESULT_NONE => "조건에 맞는 장비가 없습니다.",
        RESULT_SIZING => "용량비",
        RESULT_PRICE => "가격",
        RESULT_HEATING_CAPACITY => "난방",
        RESULT_COOLING_CAPACITY => "냉방",
        RESULT_BACKUP_HEAT => "보조 전열",
        RESULT_CFM => "풍량",
        RESULT_WARNINGS => "경고",
        RESULT_INSTRUCTIONS => "지침",
        SUMMARY_HEADING => "검증 요약",
        SUMMARY_INCLUDED => "포함",
        SUMMARY_EXCLUDED => "제외",
        SUMMARY_NO_ERRORS => "데이터 오류 없음.",
        STATUS_OPTIMAL => "최적",
        STATUS_ACCEPTABLE => "허용",
        STATUS_OVERSIZED => "과대",
        STATUS_UNDERSIZED => "과소",
        SEVERITY_CRITICAL => "치명",
        SEVERITY_WARNING => "경고",
        SEVERITY_INFO => "정보",
        CATALOG_HEADING => "장비 카탈로그",
        CATALOG_COUNT => "활성 항목",
        INPUT_INVALID => "입력 거부:",
        MISSING_DATA_WRITTEN => "누락 데이터 CSV 저장:",
        _ => return None,
    })
}
