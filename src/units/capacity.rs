use serde::{Deserialize, Serialize};

/// 1 냉동톤(ton of refrigeration)에 해당하는 BTU/hr.
pub const BTU_PER_TON: f64 = 12_000.0;

/// 1 kW에 해당하는 BTU/hr. 보조 전열(backup heat) 환산에 쓰는 값이다.
pub const BTU_PER_KW: f64 = 3_412.0;

/// 열용량(부하) 단위. 내부 기준은 BTU/hr이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityUnit {
    BtuPerHour,
    Ton,
    Kilowatt,
    Watt,
}

fn to_btu_per_hour(value: f64, unit: CapacityUnit) -> f64 {
    match unit {
        CapacityUnit::BtuPerHour => value,
        CapacityUnit::Ton => value * BTU_PER_TON,
        CapacityUnit::Kilowatt => value * BTU_PER_KW,
        CapacityUnit::Watt => value * BTU_PER_KW / 1000.0,
    }
}

fn from_btu_per_hour(value: f64, unit: CapacityUnit) -> f64 {
    match unit {
        CapacityUnit::BtuPerHour => value,
        CapacityUnit::Ton => value / BTU_PER_TON,
        CapacityUnit::Kilowatt => value / BTU_PER_KW,
        CapacityUnit::Watt => value / BTU_PER_KW * 1000.0,
    }
}

/// 열용량을 변환한다.
pub fn convert_capacity(value: f64, from: CapacityUnit, to: CapacityUnit) -> f64 {
    let btu = to_btu_per_hour(value, from);
    from_btu_per_hour(btu, to)
}

/// BTU/hr 값을 소수 첫째 자리로 반올림한 kW로 바꾼다.
pub fn btu_to_kw_rounded(btu_per_hour: f64) -> f64 {
    (convert_capacity(btu_per_hour, CapacityUnit::BtuPerHour, CapacityUnit::Kilowatt) * 10.0)
        .round()
        / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tons_round_trip_through_btu() {
        let btu = convert_capacity(3.0, CapacityUnit::Ton, CapacityUnit::BtuPerHour);
        assert_eq!(btu, 36_000.0);
        let kw = convert_capacity(btu, CapacityUnit::BtuPerHour, CapacityUnit::Kilowatt);
        assert!((kw - 36_000.0 / 3_412.0).abs() < 1e-9);
    }

    #[test]
    fn backup_heat_rounding() {
        assert_eq!(btu_to_kw_rounded(20_000.0), 5.9);
        assert_eq!(btu_to_kw_rounded(3_412.0), 1.0);
    }
}
