use super::{
    sizing_percentage, EquipmentRecommendation, Evaluation, ExclusionReason, SizingContext,
    SizingStatus,
};
use crate::equipment::{ComboSpec, TypedEquipment};
use crate::units::BTU_PER_TON;

const HEATING_OVERSIZED_ABOVE: i64 = 140;
const COOLING_OVERSIZED_ABOVE: i64 = 130;
const HEATING_ACCEPTABLE_ABOVE: i64 = 125;
const COOLING_ACCEPTABLE_ABOVE: i64 = 115;
/// 일체형은 SHR과 무관하게 톤당 400 CFM을 쓴다.
const COMBO_CFM_PER_TON: f64 = 400.0;

/// 퍼니스+에어컨 일체형을 난방/냉방 양쪽 부하로 판정한다.
///
/// 어느 한쪽이라도 100% 미만이면 제외한다. 부하가 없는 쪽은 100%로 본다.
/// 보고하는 비율은 두 비율의 평균이다.
pub fn evaluate(eq: &TypedEquipment, spec: ComboSpec, ctx: &SizingContext<'_>) -> Evaluation {
    let loads = ctx.loads;
    if !loads.has_heating_load() && !loads.has_cooling_load() {
        return Evaluation::Excluded(ExclusionReason::NoRelevantLoad);
    }

    let heating_pct = if loads.has_heating_load() {
        sizing_percentage(spec.heating_capacity_btu, loads.total_heating_btu)
    } else {
        100
    };
    let cooling_pct = if loads.has_cooling_load() {
        sizing_percentage(spec.cooling_capacity_btu, loads.total_cooling_btu)
    } else {
        100
    };

    if heating_pct < 100 || cooling_pct < 100 {
        return Evaluation::Excluded(ExclusionReason::Undersized {
            percentage: heating_pct.min(cooling_pct),
        });
    }

    let average = ((heating_pct + cooling_pct) as f64 / 2.0).round() as i64;
    let mut rec = EquipmentRecommendation::new(eq, SizingStatus::Optimal, average);

    if heating_pct > HEATING_OVERSIZED_ABOVE || cooling_pct > COOLING_OVERSIZED_ABOVE {
        rec.sizing_status = SizingStatus::Oversized;
        rec.warnings.push(format!(
            "System oversized - Heating: {heating_pct}%, Cooling: {cooling_pct}%"
        ));
    } else if heating_pct > HEATING_ACCEPTABLE_ABOVE || cooling_pct > COOLING_ACCEPTABLE_ABOVE {
        rec.sizing_status = SizingStatus::Acceptable;
    }

    let cfm = (spec.cooling_capacity_btu / BTU_PER_TON * COMBO_CFM_PER_TON).round() as u32;
    rec.recommended_cfm = Some(cfm);
    rec.instructions = vec![
        "Verify shared ductwork is sized for both heating and cooling airflow requirements"
            .to_string(),
        "Consider zoning controls if heating and cooling loads vary significantly by area"
            .to_string(),
    ];
    Evaluation::Included(rec)
}
