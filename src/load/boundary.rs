//! 엔진 진입 전 입력 경계 검증.
//!
//! 엔진은 입력이 이미 유효하다고 가정하므로, CLI/요청 처리 계층이 여기서 먼저 걸러낸다.
//! 위반 사항은 필드별로 모두 모아서 한 번에 돌려준다.

use std::fmt;

use super::{CalculationRequest, LoadInputs, UserPreferences};
use crate::numfmt::thousands;

pub const MAX_LOAD_BTU: f64 = 500_000.0;
pub const MIN_DESIGN_TEMP_F: f64 = -30.0;
pub const MAX_DESIGN_TEMP_F: f64 = 150.0;
pub const MIN_ELEVATION_FT: f64 = -3_000.0;
pub const MAX_ELEVATION_FT: f64 = 30_000.0;
pub const MIN_SHR: f64 = 0.65;
pub const MAX_SHR: f64 = 1.0;

/// 필드 하나에 대한 위반 사항.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputIssue {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// 하나 이상의 필드가 범위/교차 조건을 위반함
    #[error("invalid input: {}", join_issues(.0))]
    Invalid(Vec<InputIssue>),
}

impl InputError {
    pub fn issues(&self) -> &[InputIssue] {
        match self {
            InputError::Invalid(issues) => issues,
        }
    }
}

fn join_issues(issues: &[InputIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn check_range(
    issues: &mut Vec<InputIssue>,
    field: &'static str,
    label: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() || value < min || value > max {
        issues.push(InputIssue {
            field,
            message: format!(
                "{label} must be between {} and {}",
                thousands(min),
                thousands(max)
            ),
        });
    }
}

fn collect_load_issues(inputs: &LoadInputs, issues: &mut Vec<InputIssue>) {
    check_range(
        issues,
        "totalHeatingBtu",
        "Total Heating Load",
        inputs.total_heating_btu,
        0.0,
        MAX_LOAD_BTU,
    );
    check_range(
        issues,
        "totalCoolingBtu",
        "Total Cooling Load",
        inputs.total_cooling_btu,
        0.0,
        MAX_LOAD_BTU,
    );
    check_range(
        issues,
        "sensibleCoolingBtu",
        "Sensible Cooling Load",
        inputs.sensible_cooling_btu,
        0.0,
        MAX_LOAD_BTU,
    );
    if let Some(t) = inputs.outdoor_summer_design_temp {
        check_range(
            issues,
            "outdoorSummerDesignTemp",
            "Summer Design Temperature",
            t,
            MIN_DESIGN_TEMP_F,
            MAX_DESIGN_TEMP_F,
        );
    }
    if let Some(t) = inputs.outdoor_winter_design_temp {
        check_range(
            issues,
            "outdoorWinterDesignTemp",
            "Winter Design Temperature",
            t,
            MIN_DESIGN_TEMP_F,
            MAX_DESIGN_TEMP_F,
        );
    }
    if let Some(elev) = inputs.elevation {
        check_range(
            issues,
            "elevation",
            "Elevation",
            elev,
            MIN_ELEVATION_FT,
            MAX_ELEVATION_FT,
        );
    }
    if let Some(rh) = inputs.indoor_humidity {
        check_range(issues, "indoorHumidity", "Indoor Humidity", rh, 0.0, 100.0);
    }

    if inputs.sensible_cooling_btu > inputs.total_cooling_btu {
        issues.push(InputIssue {
            field: "sensibleCoolingBtu",
            message: "Sensible cooling cannot exceed total cooling load".into(),
        });
    } else if inputs.has_cooling_load() {
        let shr = inputs.sensible_heat_ratio();
        if !(MIN_SHR..=MAX_SHR).contains(&shr) {
            issues.push(InputIssue {
                field: "sensibleCoolingBtu",
                message: format!(
                    "Sensible heat ratio {shr:.2} must be between {MIN_SHR:.2} and {MAX_SHR:.2}"
                ),
            });
        }
    }

    if !inputs.has_heating_load() && !inputs.has_cooling_load() {
        issues.push(InputIssue {
            field: "totalHeatingBtu",
            message: "Enter a heating or cooling load greater than zero".into(),
        });
    }

    if let (Some(winter), Some(summer)) = (
        inputs.outdoor_winter_design_temp,
        inputs.outdoor_summer_design_temp,
    ) {
        if winter >= summer {
            issues.push(InputIssue {
                field: "outdoorWinterDesignTemp",
                message: "Winter design temperature must be lower than summer design temperature"
                    .into(),
            });
        }
    }
}

fn collect_preference_issues(prefs: &UserPreferences, issues: &mut Vec<InputIssue>) {
    if prefs.equipment_types.is_empty() {
        issues.push(InputIssue {
            field: "equipmentTypes",
            message: "Select at least one equipment type".into(),
        });
    }
    if let Some(afue) = prefs.min_afue {
        if !(afue > 0.0 && afue <= 1.0) {
            issues.push(InputIssue {
                field: "minAfue",
                message: "Minimum AFUE must be a fraction between 0 and 1".into(),
            });
        }
    }
    if let Some(price) = prefs.max_price {
        if !price.is_finite() || price < 0.0 {
            issues.push(InputIssue {
                field: "maxPrice",
                message: "Maximum price cannot be negative".into(),
            });
        }
    }
}

fn finish(issues: Vec<InputIssue>) -> Result<(), InputError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(InputError::Invalid(issues))
    }
}

/// 부하 입력의 범위와 교차 조건을 검증한다.
pub fn validate_load_inputs(inputs: &LoadInputs) -> Result<(), InputError> {
    let mut issues = Vec::new();
    collect_load_issues(inputs, &mut issues);
    finish(issues)
}

/// 선호 조건을 검증한다.
pub fn validate_preferences(prefs: &UserPreferences) -> Result<(), InputError> {
    let mut issues = Vec::new();
    collect_preference_issues(prefs, &mut issues);
    finish(issues)
}

/// 요청 전체를 검증한다. 부하와 선호 조건의 위반 사항을 모두 모은다.
pub fn validate_request(request: &CalculationRequest) -> Result<(), InputError> {
    let mut issues = Vec::new();
    collect_load_issues(&request.load_inputs, &mut issues);
    collect_preference_issues(&request.preferences, &mut issues);
    finish(issues)
}
