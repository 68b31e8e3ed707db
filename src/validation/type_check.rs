//! 원본 장비 레코드를 분류별 타입으로 바꾸는 유일한 경계.

use super::{EquipmentValidationError, ErrorType, Severity};
use crate::equipment::{
    AcSpec, BoilerSpec, ComboSpec, Equipment, EquipmentInfo, EquipmentKind, EquipmentType,
    FurnaceSpec, HeatPumpSpec, SpecField, TypedEquipment,
};

/// 분류에 필요 없는 필드를 모두 null로 만든 사본을 돌려준다.
///
/// 상류 데이터가 관계없는 필드를 채워 보내도 여기서 정리되므로, 이후 검증 실패는
/// 필수 데이터 누락만을 뜻한다. 두 번 적용해도 결과는 같다.
pub fn normalize(raw: &Equipment) -> Equipment {
    let mut eq = raw.clone();
    let required = raw.equipment_type.required_fields();
    for field in SpecField::ALL {
        if !required.contains(&field) {
            *eq.field_mut(field) = None;
        }
    }
    eq
}

/// 분류별 필드 패턴 검사 결과.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCheck {
    /// 값이 있어야 하는데 null인 필드
    pub missing: Vec<SpecField>,
    /// null이어야 하는데 값이 있는 필드
    pub forbidden: Vec<SpecField>,
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty() && self.forbidden.is_empty()
    }

    /// 오류의 technicalDetails 문자열.
    pub fn details(&self) -> String {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("Missing required fields: {}", join_fields(&self.missing)));
        }
        if !self.forbidden.is_empty() {
            parts.push(format!(
                "Forbidden fields present: {}",
                join_fields(&self.forbidden)
            ));
        }
        parts.join("; ")
    }
}

fn join_fields(fields: &[SpecField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 레코드의 null/non-null 패턴을 선언된 분류의 규칙과 비교한다.
pub fn check_fields(eq: &Equipment) -> FieldCheck {
    let ty = eq.equipment_type;
    FieldCheck {
        missing: ty
            .required_fields()
            .iter()
            .copied()
            .filter(|f| eq.field(*f).is_none())
            .collect(),
        forbidden: ty
            .forbidden_fields()
            .iter()
            .copied()
            .filter(|f| eq.field(*f).is_some())
            .collect(),
    }
}

fn build_kind(eq: &Equipment) -> Option<EquipmentKind> {
    use SpecField::*;
    let f = |field: SpecField| eq.field(field);
    let kind = match eq.equipment_type {
        EquipmentType::Furnace => EquipmentKind::Furnace(FurnaceSpec {
            nominal_btu: f(NominalBtu)?,
            heating_capacity_btu: f(HeatingCapacityBtu)?,
            afue: f(Afue)?,
        }),
        EquipmentType::Ac => EquipmentKind::Ac(AcSpec {
            nominal_tons: f(NominalTons)?,
            cooling_capacity_btu: f(CoolingCapacityBtu)?,
            latent_cooling_btu: f(LatentCoolingBtu)?,
            seer: f(Seer)?,
        }),
        EquipmentType::HeatPump => EquipmentKind::HeatPump(HeatPumpSpec {
            nominal_tons: f(NominalTons)?,
            heating_capacity_btu: f(HeatingCapacityBtu)?,
            cooling_capacity_btu: f(CoolingCapacityBtu)?,
            latent_cooling_btu: f(LatentCoolingBtu)?,
            seer: f(Seer)?,
            hspf: f(Hspf)?,
        }),
        EquipmentType::Boiler => EquipmentKind::Boiler(BoilerSpec {
            nominal_btu: f(NominalBtu)?,
            heating_capacity_btu: f(HeatingCapacityBtu)?,
            afue: f(Afue)?,
        }),
        EquipmentType::FurnaceAcCombo => EquipmentKind::Combo(ComboSpec {
            nominal_tons: f(NominalTons)?,
            nominal_btu: f(NominalBtu)?,
            heating_capacity_btu: f(HeatingCapacityBtu)?,
            cooling_capacity_btu: f(CoolingCapacityBtu)?,
            latent_cooling_btu: f(LatentCoolingBtu)?,
            afue: f(Afue)?,
            seer: f(Seer)?,
        }),
    };
    Some(kind)
}

/// 정규화 후 분류 규칙을 검증해 `TypedEquipment`를 만든다.
///
/// 실패하면 `type_validation` / `critical` 오류를 돌려준다.
pub fn validate_type(raw: &Equipment) -> Result<TypedEquipment, EquipmentValidationError> {
    let normalized = normalize(raw);
    let check = check_fields(&normalized);
    match build_kind(&normalized) {
        Some(kind) if check.is_valid() => Ok(TypedEquipment {
            info: EquipmentInfo::from_record(&normalized),
            kind,
        }),
        _ => Err(EquipmentValidationError::for_record(
            raw,
            ErrorType::TypeValidation,
            Severity::Critical,
            format!(
                "Equipment data does not match the {} schema",
                raw.equipment_type
            ),
            Some(check.details()),
        )),
    }
}
