//! 추천 계산 진입점.
//!
//! 카탈로그 전체를 한 번 훑으면서 검증 → 판정 → 정렬을 수행하고,
//! 추천 목록과 검증 요약을 함께 돌려준다. 장비 한 건의 데이터 결함 때문에
//! 계산 전체가 실패하는 일은 없다.

use serde::Serialize;

use crate::equipment::Equipment;
use crate::load::{LoadInputs, UserPreferences};
use crate::sizing::{self, EquipmentRecommendation, Evaluation, SizingContext};
use crate::validation::{
    check_specifications, load_warnings, spec_validation_error, validate_type, ValidationSummary,
};

/// 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub recommendations: Vec<EquipmentRecommendation>,
    pub validation_summary: ValidationSummary,
}

/// 부하와 선호 조건에 맞는 장비 추천을 계산한다.
///
/// 입력은 경계 검증(`load::validate_request`)을 이미 통과했다고 가정한다.
pub fn calculate_equipment_recommendations(
    loads: &LoadInputs,
    preferences: &UserPreferences,
    equipment: &[Equipment],
) -> CalculationResult {
    let load_level_warnings = load_warnings(loads);
    let ctx = SizingContext::new(loads, preferences);

    let candidates: Vec<&Equipment> = equipment
        .iter()
        .filter(|eq| eq.is_active && preferences.includes_type(eq.equipment_type))
        .collect();

    let mut errors = Vec::new();
    let mut recommendations = Vec::new();

    for raw in &candidates {
        let typed = match validate_type(raw) {
            Ok(typed) => typed,
            Err(err) => {
                tracing::warn!(equipment_id = %raw.id, "skipping equipment: {}", err.message);
                errors.push(err);
                continue;
            }
        };

        let spec_warnings = check_specifications(&typed);
        if let Some(err) = spec_validation_error(&typed, &spec_warnings) {
            errors.push(err);
        }

        match sizing::evaluate(&typed, &ctx) {
            Evaluation::Included(mut rec) => {
                rec.warnings.extend(load_level_warnings.iter().cloned());
                rec.warnings.extend(spec_warnings);
                recommendations.push(rec);
            }
            Evaluation::Excluded(reason) => {
                tracing::debug!(equipment_id = %raw.id, "excluded: {reason}");
            }
        }
    }

    recommendations.sort_by(|a, b| a.rank_cmp(b));

    let total = candidates.len();
    let included = recommendations.len();
    tracing::info!(
        total,
        included,
        errors = errors.len(),
        "equipment recommendations calculated"
    );

    CalculationResult {
        recommendations,
        validation_summary: ValidationSummary {
            total_equipment: total,
            included_equipment: included,
            excluded_equipment: total - included,
            errors,
        },
    }
}
