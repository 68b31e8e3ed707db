use super::{
    sizing_percentage, EquipmentRecommendation, Evaluation, ExclusionReason, SizingContext,
    SizingStatus,
};
use crate::equipment::{FurnaceSpec, TypedEquipment};
use crate::numfmt::thousands;

/// 이 고도 [ft]를 넘으면 출력 감소를 적용한다.
pub const DERATING_START_FT: f64 = 1_000.0;
/// 1000 ft당 출력 감소율 [%]
pub const DERATING_PERCENT_PER_1000_FT: f64 = 3.0;

const OPTIMAL_MAX: i64 = 140;
const OVERSIZED_MAX: i64 = 200;

/// 고도 보정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derating {
    /// 감소율 [%]
    pub percent: f64,
    /// 보정 후 출력 [BTU/hr]
    pub output_btu: f64,
}

/// 고도에 따른 출력 감소를 계산한다. 기준 고도 이하이면 `None`.
pub fn elevation_derating(output_btu: f64, elevation_ft: f64) -> Option<Derating> {
    if elevation_ft <= DERATING_START_FT {
        return None;
    }
    let percent = DERATING_PERCENT_PER_1000_FT * elevation_ft / 1000.0;
    Some(Derating {
        percent,
        output_btu: output_btu * (1.0 - percent / 100.0),
    })
}

/// 퍼니스를 난방 부하 기준으로 판정한다.
///
/// 100~140% 최적, 140~200% 과대(경고), 그 밖은 제외.
pub fn evaluate(eq: &TypedEquipment, spec: FurnaceSpec, ctx: &SizingContext<'_>) -> Evaluation {
    let heating_load = ctx.loads.total_heating_btu;
    if heating_load <= 0.0 {
        return Evaluation::Excluded(ExclusionReason::NoRelevantLoad);
    }

    let mut warnings = Vec::new();
    let elevation = ctx.loads.elevation_ft();
    let output = match elevation_derating(spec.heating_capacity_btu, elevation) {
        Some(derate) => {
            warnings.push(format!(
                "Heating output derated by {:.1}% for {} ft elevation ({} BTU/hr effective output)",
                derate.percent,
                thousands(elevation),
                thousands(derate.output_btu.round())
            ));
            derate.output_btu
        }
        None => spec.heating_capacity_btu,
    };

    let percentage = sizing_percentage(output, heating_load);
    let status = if percentage < 100 {
        return Evaluation::Excluded(ExclusionReason::Undersized { percentage });
    } else if percentage <= OPTIMAL_MAX {
        SizingStatus::Optimal
    } else if percentage <= OVERSIZED_MAX {
        warnings.push(format!(
            "This furnace is {percentage}% oversized. Use only if the AC system requires more blower power to accommodate the cooling load."
        ));
        SizingStatus::Oversized
    } else {
        return Evaluation::Excluded(ExclusionReason::BeyondOversizeLimit { percentage });
    };

    let mut rec = EquipmentRecommendation::new(eq, status, percentage);
    rec.warnings = warnings;
    rec.instructions = vec![
        "Verify ductwork can handle required airflow".to_string(),
        "Check static pressure requirements for optimal performance".to_string(),
    ];
    Evaluation::Included(rec)
}
