use super::air_conditioner::effective_tons;
use super::{
    classify_cooling, cooling_max_percent, ductwork_instruction, recommended_cfm,
    sizing_percentage, EquipmentRecommendation, Evaluation, ExclusionReason, SizingContext,
    SizingStatus,
};
use crate::equipment::{HeatPumpSpec, TypedEquipment};
use crate::units::btu_to_kw_rounded;
use crate::numfmt::thousands;

/// 이 SHR 미만이면 제습 부담이 큰 것으로 본다.
pub const HUMID_SHR: f64 = 0.95;

const HEATING_OPTIMAL_MAX: i64 = 120;
const HEATING_ACCEPTABLE_MAX: i64 = 150;

/// 히트펌프 용량 선정 기준 부하.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingBasis {
    /// 난방 우세 + 습한 기후: 냉방 기준으로 고르고 난방 부족분은 보조 전열로 채운다
    CoolingWithBackupHeat,
    /// 난방 기준
    Heating,
    /// 냉방 기준 (냉방 우세 또는 동일)
    Cooling,
}

/// 부하 구성과 사용자 선호에 따라 선정 기준을 고른다.
///
/// 냉방 부하가 없는 난방 전용 건물은 선호와 관계없이 난방 기준으로 본다.
pub fn sizing_basis(ctx: &SizingContext<'_>) -> SizingBasis {
    let loads = ctx.loads;
    let heating_dominant = loads.total_heating_btu > loads.total_cooling_btu;
    if heating_dominant && !loads.has_cooling_load() {
        SizingBasis::Heating
    } else if heating_dominant && ctx.shr < HUMID_SHR && !ctx.preferences.sizes_to_heating() {
        SizingBasis::CoolingWithBackupHeat
    } else if heating_dominant && ctx.preferences.sizes_to_heating() {
        SizingBasis::Heating
    } else {
        SizingBasis::Cooling
    }
}

fn classify_heating(percentage: i64) -> Option<SizingStatus> {
    if percentage < 100 {
        None
    } else if percentage <= HEATING_OPTIMAL_MAX {
        Some(SizingStatus::Optimal)
    } else if percentage <= HEATING_ACCEPTABLE_MAX {
        Some(SizingStatus::Acceptable)
    } else {
        Some(SizingStatus::Oversized)
    }
}

/// 히트펌프를 판정한다. 모든 분기에서 권장 풍량은 에어컨과 같은 방식으로 계산한다.
///
/// 보조 전열과 제습 안내는 과대 판정이 아닐 때만 붙는다.
pub fn evaluate(eq: &TypedEquipment, spec: HeatPumpSpec, ctx: &SizingContext<'_>) -> Evaluation {
    let loads = ctx.loads;
    if !loads.has_heating_load() && !loads.has_cooling_load() {
        return Evaluation::Excluded(ExclusionReason::NoRelevantLoad);
    }

    let mut warnings = Vec::new();
    let mut instructions = Vec::new();
    let mut backup_heat_required = None;

    let basis = sizing_basis(ctx);
    let (percentage, status) = match basis {
        SizingBasis::Cooling | SizingBasis::CoolingWithBackupHeat => {
            let cooling_load = loads.total_cooling_btu;
            if cooling_load <= 0.0 {
                return Evaluation::Excluded(ExclusionReason::NoRelevantLoad);
            }
            let percentage = sizing_percentage(spec.cooling_capacity_btu, cooling_load);
            let max_percent = cooling_max_percent(eq.info.staging, cooling_load);
            let Some(status) = classify_cooling(percentage, max_percent) else {
                return Evaluation::Excluded(ExclusionReason::Undersized { percentage });
            };

            if basis == SizingBasis::CoolingWithBackupHeat && status != SizingStatus::Oversized {
                let heat_deficit = loads.total_heating_btu - spec.heating_capacity_btu;
                if heat_deficit > 0.0 {
                    let kw = btu_to_kw_rounded(heat_deficit);
                    backup_heat_required = Some(kw);
                    warnings.push(format!(
                        "Be sure to add backup heat. {kw} kW of backup heat are required."
                    ));
                }
                instructions.push(format!(
                    "Use OEM data to verify the system has {} BTU min latent capacity",
                    thousands(ctx.latent_cooling_btu)
                ));
            }
            (percentage, status)
        }
        SizingBasis::Heating => {
            let percentage = sizing_percentage(spec.heating_capacity_btu, loads.total_heating_btu);
            let Some(status) = classify_heating(percentage) else {
                return Evaluation::Excluded(ExclusionReason::Undersized { percentage });
            };

            if loads.has_cooling_load() && status != SizingStatus::Oversized {
                if ctx.shr < HUMID_SHR {
                    warnings.push(
                        "A system sized for heating will be oversized for cooling and struggle to remove moisture. Add a standalone dehumidifier and use OEM data to verify that the system turns down to <80% of total cooling load."
                            .to_string(),
                    );
                } else {
                    instructions.push(
                        "Sizing the system to heating will oversize it for cooling. For optimal comfort and to avoid wear & tear on the system, use performance data to verify that it turns down to <80% of total cooling load."
                            .to_string(),
                    );
                }
            }
            (percentage, status)
        }
    };

    let cfm = recommended_cfm(
        effective_tons(spec.nominal_tons, spec.cooling_capacity_btu),
        ctx.shr,
    );
    instructions.push(ductwork_instruction(cfm));

    let mut rec = EquipmentRecommendation::new(eq, status, percentage);
    rec.warnings = warnings;
    rec.instructions = instructions;
    rec.backup_heat_required = backup_heat_required;
    rec.recommended_cfm = Some(cfm);
    Evaluation::Included(rec)
}
