//! 건물 부하 입력과 사용자 선호 조건.
//!
//! 부하 값은 외부(Manual J 등)에서 계산되어 들어오며, 이 크레이트는 계산하지 않는다.

pub mod boundary;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equipment::{DistributionType, EquipmentType, Staging, UnitLocation};

pub use boundary::{validate_load_inputs, validate_preferences, validate_request, InputError, InputIssue};

/// 사용자 입력 부하.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadInputs {
    /// 총 난방 부하 [BTU/hr]
    pub total_heating_btu: f64,
    /// 총 냉방 부하 [BTU/hr]
    pub total_cooling_btu: f64,
    /// 현열 냉방 부하 [BTU/hr]
    pub sensible_cooling_btu: f64,
    /// 하절기 외기 설계 온도 [°F]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_summer_design_temp: Option<f64>,
    /// 동절기 외기 설계 온도 [°F]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_winter_design_temp: Option<f64>,
    /// 해발 고도 [ft]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    /// 실내 상대습도 [%]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indoor_humidity: Option<f64>,
}

impl LoadInputs {
    /// 잠열 냉방 부하 = 총 냉방 - 현열 냉방.
    pub fn latent_cooling_btu(&self) -> f64 {
        self.total_cooling_btu - self.sensible_cooling_btu
    }

    /// 현열비(SHR). 냉방 부하가 없으면 0.
    pub fn sensible_heat_ratio(&self) -> f64 {
        if self.total_cooling_btu > 0.0 {
            self.sensible_cooling_btu / self.total_cooling_btu
        } else {
            0.0
        }
    }

    pub fn elevation_ft(&self) -> f64 {
        self.elevation.unwrap_or(0.0)
    }

    pub fn has_heating_load(&self) -> bool {
        self.total_heating_btu > 0.0
    }

    pub fn has_cooling_load(&self) -> bool {
        self.total_cooling_btu > 0.0
    }
}

/// 히트펌프 용량 선정 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingPreference {
    SizeToHeating,
    SizeToCooling,
}

impl FromStr for SizingPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "size_to_heating" | "heating" => Ok(SizingPreference::SizeToHeating),
            "size_to_cooling" | "cooling" => Ok(SizingPreference::SizeToCooling),
            other => Err(format!("unknown sizing preference '{other}'")),
        }
    }
}

/// 장비 선택/필터 조건. 비어 있는 필터는 "제약 없음"을 뜻한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub equipment_types: Vec<EquipmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_type: Option<DistributionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizing_preference: Option<SizingPreference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brand_filter: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub staging_filter: Vec<Staging>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_afue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit_location_filter: Vec<UnitLocation>,
}

impl UserPreferences {
    /// 지정한 분류만 대상으로 하는 기본 선호 조건.
    pub fn for_types(types: &[EquipmentType]) -> Self {
        Self {
            equipment_types: types.to_vec(),
            ..Self::default()
        }
    }

    pub fn includes_type(&self, equipment_type: EquipmentType) -> bool {
        self.equipment_types.contains(&equipment_type)
    }

    pub fn sizes_to_heating(&self) -> bool {
        self.sizing_preference == Some(SizingPreference::SizeToHeating)
    }
}

/// 계산 요청 본문 (`{"loadInputs": ..., "preferences": ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub load_inputs: LoadInputs,
    pub preferences: UserPreferences,
}
