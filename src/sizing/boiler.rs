use super::{
    sizing_percentage, EquipmentRecommendation, Evaluation, ExclusionReason, SizingContext,
    SizingStatus,
};
use crate::equipment::{BoilerSpec, DistributionType, TypedEquipment};

const OPTIMAL_MAX: i64 = 125;
const ACCEPTABLE_MAX: i64 = 150;

/// 보일러를 난방 부하 기준으로 판정한다.
///
/// 카탈로그의 난방 출력은 이미 AFUE가 반영된 값이므로 다시 보정하지 않는다.
/// 과대 용량은 제외하지 않고 경고만 붙인다.
pub fn evaluate(eq: &TypedEquipment, spec: BoilerSpec, ctx: &SizingContext<'_>) -> Evaluation {
    let heating_load = ctx.loads.total_heating_btu;
    if heating_load <= 0.0 {
        return Evaluation::Excluded(ExclusionReason::NoRelevantLoad);
    }

    let percentage = sizing_percentage(spec.heating_capacity_btu, heating_load);
    let mut warnings = Vec::new();
    let status = if percentage < 100 {
        return Evaluation::Excluded(ExclusionReason::Undersized { percentage });
    } else if percentage <= OPTIMAL_MAX {
        SizingStatus::Optimal
    } else if percentage <= ACCEPTABLE_MAX {
        warnings.push(format!(
            "This boiler is {percentage}% of the heating load. Consider if oversizing is appropriate for pickup and recovery."
        ));
        SizingStatus::Acceptable
    } else {
        warnings.push(format!(
            "This boiler is significantly oversized at {percentage}% of load. May cause short cycling and reduced efficiency."
        ));
        SizingStatus::Oversized
    };

    let mut rec = EquipmentRecommendation::new(eq, status, percentage);
    rec.warnings = warnings;
    if eq.info.distribution_type == DistributionType::Hydronic {
        rec.instructions = vec![
            "Verify zone control and pump sizing for proper flow rates".to_string(),
            "Consider boiler reset controls for optimal efficiency".to_string(),
        ];
    }
    Evaluation::Included(rec)
}
