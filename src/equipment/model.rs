use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 장비 분류. 카탈로그의 `equipmentType` 판별자와 1:1로 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Furnace,
    Ac,
    HeatPump,
    Boiler,
    FurnaceAcCombo,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 5] = [
        EquipmentType::Furnace,
        EquipmentType::Ac,
        EquipmentType::HeatPump,
        EquipmentType::Boiler,
        EquipmentType::FurnaceAcCombo,
    ];

    /// 직렬화 표기(snake_case)와 같은 코드 문자열.
    pub fn code(self) -> &'static str {
        match self {
            EquipmentType::Furnace => "furnace",
            EquipmentType::Ac => "ac",
            EquipmentType::HeatPump => "heat_pump",
            EquipmentType::Boiler => "boiler",
            EquipmentType::FurnaceAcCombo => "furnace_ac_combo",
        }
    }

    /// 검증 메시지에 쓰는 복수형 명칭 ("Required for furnaces").
    pub fn plural_label(self) -> &'static str {
        match self {
            EquipmentType::Furnace => "furnaces",
            EquipmentType::Ac => "air conditioners",
            EquipmentType::HeatPump => "heat pumps",
            EquipmentType::Boiler => "boilers",
            EquipmentType::FurnaceAcCombo => "combo systems",
        }
    }

    /// 이 분류에서 반드시 값이 있어야 하는 용량/효율 필드.
    /// 목록에 없는 필드는 정규화 단계에서 모두 null이 된다.
    pub fn required_fields(self) -> &'static [SpecField] {
        use SpecField::*;
        match self {
            EquipmentType::Furnace | EquipmentType::Boiler => {
                &[NominalBtu, HeatingCapacityBtu, Afue]
            }
            EquipmentType::Ac => &[NominalTons, CoolingCapacityBtu, LatentCoolingBtu, Seer],
            EquipmentType::HeatPump => &[
                NominalTons,
                HeatingCapacityBtu,
                CoolingCapacityBtu,
                LatentCoolingBtu,
                Seer,
                Hspf,
            ],
            EquipmentType::FurnaceAcCombo => &[
                NominalTons,
                NominalBtu,
                HeatingCapacityBtu,
                CoolingCapacityBtu,
                LatentCoolingBtu,
                Afue,
                Seer,
            ],
        }
    }

    /// 이 분류에서 값이 있으면 안 되는 필드.
    ///
    /// 잠열 용량처럼 일부 필드는 필수도 금지도 아니다(카탈로그 보고서가 문제 삼지 않는다).
    pub fn forbidden_fields(self) -> &'static [SpecField] {
        use SpecField::*;
        match self {
            EquipmentType::Furnace | EquipmentType::Boiler => {
                &[NominalTons, CoolingCapacityBtu, Seer, Hspf]
            }
            EquipmentType::Ac => &[NominalBtu, HeatingCapacityBtu, Afue, Hspf],
            EquipmentType::HeatPump => &[NominalBtu, Afue],
            EquipmentType::FurnaceAcCombo => &[Hspf],
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// CLI 인자용 파싱. `-`와 `_`를 같게 보고, `combo`는 일체형의 별칭이다.
impl FromStr for EquipmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "furnace" => Ok(EquipmentType::Furnace),
            "ac" => Ok(EquipmentType::Ac),
            "heat_pump" => Ok(EquipmentType::HeatPump),
            "boiler" => Ok(EquipmentType::Boiler),
            "furnace_ac_combo" | "combo" => Ok(EquipmentType::FurnaceAcCombo),
            other => Err(format!(
                "unknown equipment type '{other}' (expected furnace, ac, heat_pump, boiler, furnace_ac_combo)"
            )),
        }
    }
}

fn normalize_code(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}

/// 공기/온수 분배 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionType {
    Ducted,
    Ductless,
    Hydronic,
}

/// 압축기/버너 단수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Staging {
    SingleStage,
    TwoStage,
    VariableSpeed,
}

/// 실내기/실외기 설치 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitLocation {
    Indoor,
    Outdoor,
    SplitSystem,
}

impl FromStr for DistributionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "ducted" => Ok(DistributionType::Ducted),
            "ductless" => Ok(DistributionType::Ductless),
            "hydronic" => Ok(DistributionType::Hydronic),
            other => Err(format!("unknown distribution type '{other}'")),
        }
    }
}

impl FromStr for Staging {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "single_stage" | "single" => Ok(Staging::SingleStage),
            "two_stage" | "two" => Ok(Staging::TwoStage),
            "variable_speed" | "variable" => Ok(Staging::VariableSpeed),
            other => Err(format!("unknown staging '{other}'")),
        }
    }
}

impl FromStr for UnitLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "indoor" => Ok(UnitLocation::Indoor),
            "outdoor" => Ok(UnitLocation::Outdoor),
            "split_system" | "split" => Ok(UnitLocation::SplitSystem),
            other => Err(format!("unknown unit location '{other}'")),
        }
    }
}

/// 카탈로그 메타데이터. 판정에는 쓰지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemFunction {
    Heating,
    Cooling,
    HeatingCooling,
}

/// 분류에 따라 null 여부가 정해지는 용량/효율 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecField {
    NominalTons,
    NominalBtu,
    HeatingCapacityBtu,
    CoolingCapacityBtu,
    LatentCoolingBtu,
    Afue,
    Seer,
    Hspf,
}

impl SpecField {
    pub const ALL: [SpecField; 8] = [
        SpecField::NominalTons,
        SpecField::NominalBtu,
        SpecField::HeatingCapacityBtu,
        SpecField::CoolingCapacityBtu,
        SpecField::LatentCoolingBtu,
        SpecField::Afue,
        SpecField::Seer,
        SpecField::Hspf,
    ];

    /// 카탈로그/JSON에서 쓰는 필드 이름.
    pub fn name(self) -> &'static str {
        match self {
            SpecField::NominalTons => "nominalTons",
            SpecField::NominalBtu => "nominalBtu",
            SpecField::HeatingCapacityBtu => "heatingCapacityBtu",
            SpecField::CoolingCapacityBtu => "coolingCapacityBtu",
            SpecField::LatentCoolingBtu => "latentCoolingBtu",
            SpecField::Afue => "afue",
            SpecField::Seer => "seer",
            SpecField::Hspf => "hspf",
        }
    }
}

impl fmt::Display for SpecField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 카탈로그 원본 레코드. 용량/효율 필드는 모두 nullable이며,
/// 검증 전에는 어떤 필드 조합이든 들어올 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub price: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub equipment_type: EquipmentType,
    pub distribution_type: DistributionType,
    pub staging: Staging,
    pub unit_location: UnitLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_function: Option<SystemFunction>,

    /// 공칭 냉방 톤
    #[serde(default)]
    pub nominal_tons: Option<f64>,
    /// 공칭 입력 [BTU/hr]
    #[serde(default)]
    pub nominal_btu: Option<f64>,
    /// 난방 출력 [BTU/hr] (카탈로그 값이 이미 AFUE 보정됨)
    #[serde(default)]
    pub heating_capacity_btu: Option<f64>,
    /// 냉방 전용량 [BTU/hr]
    #[serde(default)]
    pub cooling_capacity_btu: Option<f64>,
    /// 잠열 냉방 용량 [BTU/hr]
    #[serde(default)]
    pub latent_cooling_btu: Option<f64>,

    /// 소수 표기 (0.95 = 95%)
    #[serde(default)]
    pub afue: Option<f64>,
    #[serde(default)]
    pub seer: Option<f64>,
    #[serde(default)]
    pub hspf: Option<f64>,

    #[serde(default)]
    pub image_url: String,
}

fn default_active() -> bool {
    true
}

impl Equipment {
    pub fn field(&self, field: SpecField) -> Option<f64> {
        match field {
            SpecField::NominalTons => self.nominal_tons,
            SpecField::NominalBtu => self.nominal_btu,
            SpecField::HeatingCapacityBtu => self.heating_capacity_btu,
            SpecField::CoolingCapacityBtu => self.cooling_capacity_btu,
            SpecField::LatentCoolingBtu => self.latent_cooling_btu,
            SpecField::Afue => self.afue,
            SpecField::Seer => self.seer,
            SpecField::Hspf => self.hspf,
        }
    }

    pub fn field_mut(&mut self, field: SpecField) -> &mut Option<f64> {
        match field {
            SpecField::NominalTons => &mut self.nominal_tons,
            SpecField::NominalBtu => &mut self.nominal_btu,
            SpecField::HeatingCapacityBtu => &mut self.heating_capacity_btu,
            SpecField::CoolingCapacityBtu => &mut self.cooling_capacity_btu,
            SpecField::LatentCoolingBtu => &mut self.latent_cooling_btu,
            SpecField::Afue => &mut self.afue,
            SpecField::Seer => &mut self.seer,
            SpecField::Hspf => &mut self.hspf,
        }
    }

    /// "제조사 모델" 형태의 표시 이름.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }
}
