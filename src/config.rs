use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::load::SizingPreference;

/// 기본 설정 파일 경로 (작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// 사람이 읽는 표 형식
    #[default]
    Text,
    /// `{"recommendations": ..., "validationSummary": ...}` JSON
    Json,
}

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto" | "en" | "ko"
    pub language: String,
    /// 내장 카탈로그 대신 사용할 TOML/JSON 카탈로그
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    /// `tracing_subscriber::EnvFilter` 지시문. `RUST_LOG`가 있으면 그쪽이 우선한다.
    pub log_filter: String,
    /// 요청에 sizing 선호가 없을 때 쓰는 기본값
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sizing_preference: Option<SizingPreference>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            catalog_path: None,
            output_format: OutputFormat::Text,
            log_filter: "warn".to_string(),
            default_sizing_preference: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나, 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hvac_sizing_{}_{name}.toml", std::process::id()))
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch_path("created");
        let _ = fs::remove_file(&path);

        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let reloaded = load_or_default(&path).unwrap();
        assert_eq!(reloaded, cfg);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str(
            "output_format = \"json\"\ndefault_sizing_preference = \"size_to_heating\"\n",
        )
        .unwrap();
        assert_eq!(cfg.output_format, OutputFormat::Json);
        assert_eq!(
            cfg.default_sizing_preference,
            Some(SizingPreference::SizeToHeating)
        );
        assert_eq!(cfg.language, "auto");
        assert_eq!(cfg.log_filter, "warn");
        assert!(cfg.catalog_path.is_none());
    }

    #[test]
    fn save_round_trips_catalog_path() {
        let path = scratch_path("saved");
        let cfg = Config {
            catalog_path: Some(PathBuf::from("data/custom.json")),
            language: "ko".into(),
            ..Config::default()
        };
        cfg.save(&path).unwrap();
        let loaded = load_or_default(&path).unwrap();
        assert_eq!(loaded, cfg);
        let _ = fs::remove_file(&path);
    }
}
