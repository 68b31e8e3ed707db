use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::Equipment;

/// 빌드 시 포함되는 기본 장비 카탈로그.
const BUILT_IN_CATALOG: &str = include_str!("../../data/equipment.toml");

/// 카탈로그 로드 중 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// 파일 입출력 오류
    #[error("catalog file error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 파싱 오류
    #[error("catalog TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON 파싱 오류
    #[error("catalog JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// 확장자로 형식을 알 수 없음
    #[error("unsupported catalog format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// 장비 카탈로그. 계산 중에는 읽기 전용으로만 쓰인다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl Catalog {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// `{"equipment": [...]}` 객체 또는 장비 배열 자체를 받는다.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if value.is_array() {
            let equipment: Vec<Equipment> = serde_json::from_value(value)?;
            Ok(Self { equipment })
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    /// 확장자(.toml / .json)에 따라 파일을 읽는다.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;
        let catalog = match ext.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };
        tracing::debug!(path = %path.display(), items = catalog.equipment.len(), "catalog loaded");
        Ok(catalog)
    }

    /// 내장 카탈로그를 로드한다.
    pub fn built_in() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILT_IN_CATALOG)
    }

    /// 판매 중인(`isActive`) 장비만 돌려준다.
    pub fn active(&self) -> Vec<&Equipment> {
        self.equipment.iter().filter(|eq| eq.is_active).collect()
    }

    pub fn len(&self) -> usize {
        self.equipment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }
}
