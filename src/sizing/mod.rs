//! 장비 분류별 용량 판정.
//!
//! 각 판정 함수는 순수 함수이며, 자신이 만든 경고/지침 목록만 담은 추천을 돌려준다.
//! 기준 미달(과소)이나 허용 한도를 넘는 과대 장비는 오류가 아니라
//! `Evaluation::Excluded`로 조용히 빠진다.

pub mod air_conditioner;
pub mod boiler;
pub mod combo;
pub mod filter;
pub mod furnace;
pub mod heat_pump;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equipment::{EquipmentKind, EquipmentSnapshot, Staging, TypedEquipment};
use crate::load::{LoadInputs, UserPreferences};
use crate::numfmt::thousands;

pub use filter::passes_filters;

/// 용량 적합도 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingStatus {
    Optimal,
    Acceptable,
    Oversized,
    Undersized,
}

impl SizingStatus {
    /// 정렬 순위 (작을수록 앞).
    pub fn rank(self) -> u8 {
        match self {
            SizingStatus::Optimal => 1,
            SizingStatus::Acceptable => 2,
            SizingStatus::Oversized => 3,
            SizingStatus::Undersized => 4,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SizingStatus::Optimal => "optimal",
            SizingStatus::Acceptable => "acceptable",
            SizingStatus::Oversized => "oversized",
            SizingStatus::Undersized => "undersized",
        }
    }
}

impl fmt::Display for SizingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 장비 1건에 대한 추천 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRecommendation {
    pub equipment: EquipmentSnapshot,
    pub sizing_status: SizingStatus,
    /// 설계 부하 대비 공급 용량 [%], 정수 반올림
    pub sizing_percentage: i64,
    pub warnings: Vec<String>,
    pub instructions: Vec<String>,
    /// 필요한 보조 전열 [kW]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_heat_required: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_cfm: Option<u32>,
}

impl EquipmentRecommendation {
    pub fn new(eq: &TypedEquipment, sizing_status: SizingStatus, sizing_percentage: i64) -> Self {
        Self {
            equipment: eq.snapshot(),
            sizing_status,
            sizing_percentage,
            warnings: Vec::new(),
            instructions: Vec::new(),
            backup_heat_required: None,
            recommended_cfm: None,
        }
    }

    /// 상태 순위 → 100%와의 거리 순으로 비교한다.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.sizing_status
            .rank()
            .cmp(&other.sizing_status.rank())
            .then_with(|| {
                (self.sizing_percentage - 100)
                    .abs()
                    .cmp(&(other.sizing_percentage - 100).abs())
            })
    }
}

/// 제외 사유. 요약에는 남지 않고 로그에만 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// 선호 조건(브랜드, 가격 등) 불일치
    FilteredOut,
    /// 판정에 필요한 부하가 0
    NoRelevantLoad,
    /// 부하를 감당하지 못함
    Undersized { percentage: i64 },
    /// 허용 한도를 넘는 과대 용량
    BeyondOversizeLimit { percentage: i64 },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::FilteredOut => write!(f, "does not match preferences"),
            ExclusionReason::NoRelevantLoad => write!(f, "no relevant design load"),
            ExclusionReason::Undersized { percentage } => {
                write!(f, "undersized at {percentage}% of load")
            }
            ExclusionReason::BeyondOversizeLimit { percentage } => {
                write!(f, "oversized beyond limit at {percentage}% of load")
            }
        }
    }
}

/// 판정 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Included(EquipmentRecommendation),
    Excluded(ExclusionReason),
}

impl Evaluation {
    pub fn recommendation(self) -> Option<EquipmentRecommendation> {
        match self {
            Evaluation::Included(rec) => Some(rec),
            Evaluation::Excluded(_) => None,
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, Evaluation::Included(_))
    }
}

/// 계산 1회 동안 모든 판정이 공유하는 입력과 파생값.
#[derive(Debug, Clone, Copy)]
pub struct SizingContext<'a> {
    pub loads: &'a LoadInputs,
    pub preferences: &'a UserPreferences,
    /// 현열비
    pub shr: f64,
    /// 잠열 냉방 부하 [BTU/hr]
    pub latent_cooling_btu: f64,
}

impl<'a> SizingContext<'a> {
    pub fn new(loads: &'a LoadInputs, preferences: &'a UserPreferences) -> Self {
        Self {
            loads,
            preferences,
            shr: loads.sensible_heat_ratio(),
            latent_cooling_btu: loads.latent_cooling_btu(),
        }
    }
}

/// 공급 용량 / 부하 × 100 을 정수로 반올림한다. 부하는 0보다 커야 한다.
pub fn sizing_percentage(capacity_btu: f64, load_btu: f64) -> i64 {
    (capacity_btu / load_btu * 100.0).round() as i64
}

/// 냉방 기준 판정의 하한 [%]
pub const COOLING_MIN_PERCENT: i64 = 90;
/// 냉방 기준 최적 구간 상한 [%]
pub const COOLING_OPTIMAL_MAX_PERCENT: i64 = 110;
/// 단일 단 장비에 완화된 상한을 적용하는 냉방 부하 경계 [BTU/hr]
pub const SMALL_COOLING_LOAD_BTU: f64 = 24_000.0;

/// 냉방 기준 허용 상한 [%]. 단수와 부하 크기에 따라 달라진다.
pub fn cooling_max_percent(staging: Staging, cooling_load_btu: f64) -> i64 {
    match staging {
        Staging::SingleStage if cooling_load_btu <= SMALL_COOLING_LOAD_BTU => 120,
        Staging::SingleStage => 115,
        Staging::TwoStage => 125,
        Staging::VariableSpeed => 130,
    }
}

/// 냉방 기준 판정 (에어컨, 냉방 기준 히트펌프). 하한 미달은 `None`.
pub fn classify_cooling(percentage: i64, max_percent: i64) -> Option<SizingStatus> {
    if percentage < COOLING_MIN_PERCENT {
        None
    } else if percentage <= COOLING_OPTIMAL_MAX_PERCENT {
        Some(SizingStatus::Optimal)
    } else if percentage <= max_percent {
        Some(SizingStatus::Acceptable)
    } else {
        Some(SizingStatus::Oversized)
    }
}

/// SHR에 따른 톤당 풍량 [CFM/ton].
pub fn cfm_per_ton(shr: f64) -> f64 {
    if shr < 0.85 {
        350.0
    } else if shr <= 0.95 {
        400.0
    } else {
        450.0
    }
}

/// 권장 풍량 = ceil(톤 × 톤당 풍량).
pub fn recommended_cfm(tons: f64, shr: f64) -> u32 {
    (tons * cfm_per_ton(shr)).ceil() as u32
}

pub(crate) fn ductwork_instruction(cfm: u32) -> String {
    format!(
        "Verify existing ductwork is capable of handling at least {} CFM",
        thousands(f64::from(cfm))
    )
}

/// 선호 조건을 먼저 적용한 뒤 분류별 판정 함수로 보낸다.
pub fn evaluate(eq: &TypedEquipment, ctx: &SizingContext<'_>) -> Evaluation {
    if !passes_filters(eq, ctx.preferences) {
        return Evaluation::Excluded(ExclusionReason::FilteredOut);
    }
    match eq.kind {
        EquipmentKind::Furnace(spec) => furnace::evaluate(eq, spec, ctx),
        EquipmentKind::Ac(spec) => air_conditioner::evaluate(eq, spec, ctx),
        EquipmentKind::HeatPump(spec) => heat_pump::evaluate(eq, spec, ctx),
        EquipmentKind::Boiler(spec) => boiler::evaluate(eq, spec, ctx),
        EquipmentKind::Combo(spec) => combo::evaluate(eq, spec, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooling_limits_follow_staging() {
        assert_eq!(cooling_max_percent(Staging::SingleStage, 24_000.0), 120);
        assert_eq!(cooling_max_percent(Staging::SingleStage, 24_001.0), 115);
        assert_eq!(cooling_max_percent(Staging::TwoStage, 60_000.0), 125);
        assert_eq!(cooling_max_percent(Staging::VariableSpeed, 10_000.0), 130);
    }

    #[test]
    fn cooling_bands_are_inclusive() {
        assert_eq!(classify_cooling(89, 120), None);
        assert_eq!(classify_cooling(90, 120), Some(SizingStatus::Optimal));
        assert_eq!(classify_cooling(110, 120), Some(SizingStatus::Optimal));
        assert_eq!(classify_cooling(111, 120), Some(SizingStatus::Acceptable));
        assert_eq!(classify_cooling(120, 120), Some(SizingStatus::Acceptable));
        assert_eq!(classify_cooling(121, 120), Some(SizingStatus::Oversized));
    }

    #[test]
    fn cfm_depends_on_shr_band() {
        assert_eq!(recommended_cfm(3.0, 0.80), 1050);
        assert_eq!(recommended_cfm(3.0, 0.85), 1200);
        assert_eq!(recommended_cfm(3.0, 0.95), 1200);
        assert_eq!(recommended_cfm(3.0, 0.96), 1350);
        assert_eq!(recommended_cfm(2.5, 0.80), 875);
    }
}
