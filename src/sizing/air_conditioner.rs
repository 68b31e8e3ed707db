use super::{
    classify_cooling, cooling_max_percent, ductwork_instruction, recommended_cfm,
    sizing_percentage, EquipmentRecommendation, Evaluation, ExclusionReason, SizingContext,
    SizingStatus,
};
use crate::equipment::{AcSpec, TypedEquipment};
use crate::units::BTU_PER_TON;

/// 이 SHR 미만이면 잠열 용량 확인 지침을 추가한다.
pub const LATENT_CHECK_SHR: f64 = 0.95;

/// 명목 톤이 없으면 냉방 용량으로 환산한다.
pub(crate) fn effective_tons(nominal_tons: f64, cooling_capacity_btu: f64) -> f64 {
    if nominal_tons > 0.0 {
        nominal_tons
    } else {
        cooling_capacity_btu / BTU_PER_TON
    }
}

/// 에어컨을 냉방 부하 기준으로 판정한다. 고도 보정은 없다.
pub fn evaluate(eq: &TypedEquipment, spec: AcSpec, ctx: &SizingContext<'_>) -> Evaluation {
    let cooling_load = ctx.loads.total_cooling_btu;
    if cooling_load <= 0.0 {
        return Evaluation::Excluded(ExclusionReason::NoRelevantLoad);
    }

    let percentage = sizing_percentage(spec.cooling_capacity_btu, cooling_load);
    let max_percent = cooling_max_percent(eq.info.staging, cooling_load);
    let Some(status) = classify_cooling(percentage, max_percent) else {
        return Evaluation::Excluded(ExclusionReason::Undersized { percentage });
    };

    let mut rec = EquipmentRecommendation::new(eq, status, percentage);
    if status == SizingStatus::Oversized {
        rec.warnings.push(format!(
            "This air conditioner is {percentage}% oversized and may struggle with humidity control."
        ));
    }

    let cfm = recommended_cfm(
        effective_tons(spec.nominal_tons, spec.cooling_capacity_btu),
        ctx.shr,
    );
    rec.recommended_cfm = Some(cfm);
    rec.instructions.push(ductwork_instruction(cfm));
    if ctx.shr < LATENT_CHECK_SHR {
        rec.instructions
            .push("Use OEM data to verify system has adequate latent capacity".to_string());
    }
    Evaluation::Included(rec)
}
