//! 장비 레코드와 부하 입력의 검증.
//!
//! - `type_check`: 정규화 + 분류별 필드 패턴 검증 (원본 레코드 → `TypedEquipment`)
//! - `spec_check`: 효율/용량 수치의 공학적 타당성 점검 (경고만 생성)
//! - `load_check`: 부하 입력 자체의 일관성 점검 (경고만 생성)
//! - `report`: 카탈로그 전체 검증 보고서와 누락 데이터 CSV

pub mod load_check;
pub mod report;
pub mod spec_check;
pub mod type_check;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equipment::{Equipment, EquipmentInfo};

pub use load_check::load_warnings;
pub use spec_check::{check_specifications, spec_validation_error};
pub use type_check::{check_fields, normalize, validate_type, FieldCheck};

/// 검증 오류 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    TypeValidation,
    SpecValidation,
    DataInconsistency,
}

/// 심각도. `Critical`은 추천에서 제외, 나머지는 주석만 붙는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// 장비 1건에 대한 검증 오류.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentValidationError {
    pub equipment_id: String,
    pub manufacturer: String,
    pub model: String,
    pub error_type: ErrorType,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<String>,
}

impl EquipmentValidationError {
    pub(crate) fn for_record(
        eq: &Equipment,
        error_type: ErrorType,
        severity: Severity,
        message: String,
        technical_details: Option<String>,
    ) -> Self {
        Self {
            equipment_id: eq.id.clone(),
            manufacturer: eq.manufacturer.clone(),
            model: eq.model.clone(),
            error_type,
            severity,
            message,
            technical_details,
        }
    }

    pub(crate) fn for_info(
        info: &EquipmentInfo,
        error_type: ErrorType,
        severity: Severity,
        message: String,
        technical_details: Option<String>,
    ) -> Self {
        Self {
            equipment_id: info.id.clone(),
            manufacturer: info.manufacturer.clone(),
            model: info.model.clone(),
            error_type,
            severity,
            message,
            technical_details,
        }
    }
}

impl fmt::Display for EquipmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} ({}): {}",
            self.severity.label(),
            self.manufacturer,
            self.model,
            self.equipment_id,
            self.message
        )?;
        if let Some(details) = &self.technical_details {
            write!(f, " - {details}")?;
        }
        Ok(())
    }
}

/// 계산 1회에 대한 검증 요약.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// 분류/활성 필터를 통과한 장비 수
    pub total_equipment: usize,
    /// 추천 결과를 만든 장비 수
    pub included_equipment: usize,
    /// total - included
    pub excluded_equipment: usize,
    pub errors: Vec<EquipmentValidationError>,
}

impl ValidationSummary {
    pub fn errors_with(&self, severity: Severity) -> impl Iterator<Item = &EquipmentValidationError> {
        self.errors.iter().filter(move |e| e.severity == severity)
    }

    pub fn has_issues(&self) -> bool {
        self.excluded_equipment > 0 || !self.errors.is_empty()
    }
}
