//! 효율/용량 수치의 타당성 점검. 실패 모드 없이 경고 문자열만 만든다.

use super::{EquipmentValidationError, ErrorType, Severity};
use crate::equipment::{DistributionType, EquipmentKind, TypedEquipment};
use crate::units::BTU_PER_TON;
use crate::numfmt::thousands;

pub const AFUE_RANGE: (f64, f64) = (0.80, 0.98);
pub const SEER_RANGE: (f64, f64) = (13.0, 25.0);
pub const HSPF_RANGE: (f64, f64) = (8.0, 15.0);
/// 퍼니스 출력은 공칭 입력의 110%를 넘을 수 없다.
pub const FURNACE_OUTPUT_TO_INPUT_MAX: f64 = 1.10;
/// 에어컨 냉방 용량과 공칭 톤 환산값의 허용 차이 [BTU/hr]
pub const AC_TONNAGE_TOLERANCE_BTU: f64 = 2_000.0;
/// 히트펌프 난방/냉방 용량비 상한
pub const HEAT_PUMP_HEAT_TO_COOL_MAX: f64 = 1.5;

fn outside(value: f64, (lo, hi): (f64, f64)) -> bool {
    value < lo || value > hi
}

fn check_afue(afue: f64, warnings: &mut Vec<String>) {
    if outside(afue, AFUE_RANGE) {
        warnings.push(format!(
            "AFUE of {:.1}% is outside the expected range of 80-98%",
            afue * 100.0
        ));
    }
}

fn check_seer(seer: f64, warnings: &mut Vec<String>) {
    if outside(seer, SEER_RANGE) {
        warnings.push(format!(
            "SEER of {seer} is outside the expected range of 13-25"
        ));
    }
}

fn check_hspf(hspf: f64, warnings: &mut Vec<String>) {
    if outside(hspf, HSPF_RANGE) {
        warnings.push(format!(
            "HSPF of {hspf} is outside the expected range of 8-15"
        ));
    }
}

/// 분류별 타당성 범위를 점검해 경고 목록을 돌려준다. 비어 있으면 이상 없음.
pub fn check_specifications(eq: &TypedEquipment) -> Vec<String> {
    let mut warnings = Vec::new();
    match eq.kind {
        EquipmentKind::Furnace(s) => {
            check_afue(s.afue, &mut warnings);
            if s.heating_capacity_btu > s.nominal_btu * FURNACE_OUTPUT_TO_INPUT_MAX {
                warnings.push(format!(
                    "Heating output of {} BTU/hr exceeds 110% of the {} BTU/hr nominal input",
                    thousands(s.heating_capacity_btu),
                    thousands(s.nominal_btu)
                ));
            }
        }
        EquipmentKind::Ac(s) => {
            check_seer(s.seer, &mut warnings);
            let nominal_btu = s.nominal_tons * BTU_PER_TON;
            if (s.cooling_capacity_btu - nominal_btu).abs() > AC_TONNAGE_TOLERANCE_BTU {
                warnings.push(format!(
                    "Cooling capacity of {} BTU/hr does not match the {} ton nominal rating ({} BTU/hr)",
                    thousands(s.cooling_capacity_btu),
                    s.nominal_tons,
                    thousands(nominal_btu)
                ));
            }
        }
        EquipmentKind::HeatPump(s) => {
            check_seer(s.seer, &mut warnings);
            check_hspf(s.hspf, &mut warnings);
            if s.heating_capacity_btu > s.cooling_capacity_btu * HEAT_PUMP_HEAT_TO_COOL_MAX {
                warnings.push(format!(
                    "Heating capacity of {} BTU/hr exceeds 1.5 times the {} BTU/hr cooling capacity",
                    thousands(s.heating_capacity_btu),
                    thousands(s.cooling_capacity_btu)
                ));
            }
        }
        EquipmentKind::Boiler(s) => {
            check_afue(s.afue, &mut warnings);
            if eq.info.distribution_type != DistributionType::Hydronic {
                warnings.push(
                    "Boiler is not listed with hydronic distribution; boilers require hydronic distribution"
                        .to_string(),
                );
            }
        }
        EquipmentKind::Combo(s) => {
            check_afue(s.afue, &mut warnings);
            check_seer(s.seer, &mut warnings);
        }
    }
    warnings
}

/// 경고 목록을 요약 오류 1건(`spec_validation` / `warning`)으로 묶는다.
pub fn spec_validation_error(
    eq: &TypedEquipment,
    warnings: &[String],
) -> Option<EquipmentValidationError> {
    if warnings.is_empty() {
        return None;
    }
    Some(EquipmentValidationError::for_info(
        &eq.info,
        ErrorType::SpecValidation,
        Severity::Warning,
        format!(
            "{} specification value(s) outside expected engineering ranges",
            warnings.len()
        ),
        Some(warnings.join("; ")),
    ))
}
