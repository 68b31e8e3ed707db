//! 검증을 통과한 장비의 분류별 타입.
//!
//! 원본 레코드(`Equipment`)는 모든 용량 필드가 nullable이지만, 여기의 타입은
//! 분류별로 필요한 필드만 non-null로 가진다. 판정 로직(`sizing`)은 이 타입만 본다.

use serde::Serialize;

use super::model::{DistributionType, Equipment, EquipmentType, Staging, UnitLocation};

/// 분류와 무관한 공통 정보.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentInfo {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub price: f64,
    pub distribution_type: DistributionType,
    pub staging: Staging,
    pub unit_location: UnitLocation,
    pub image_url: String,
}

impl EquipmentInfo {
    pub(crate) fn from_record(eq: &Equipment) -> Self {
        Self {
            id: eq.id.clone(),
            manufacturer: eq.manufacturer.clone(),
            model: eq.model.clone(),
            price: eq.price,
            distribution_type: eq.distribution_type,
            staging: eq.staging,
            unit_location: eq.unit_location,
            image_url: eq.image_url.clone(),
        }
    }
}

/// 퍼니스(가스 난방기)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurnaceSpec {
    pub nominal_btu: f64,
    pub heating_capacity_btu: f64,
    pub afue: f64,
}

/// 에어컨(냉방 전용)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcSpec {
    pub nominal_tons: f64,
    pub cooling_capacity_btu: f64,
    pub latent_cooling_btu: f64,
    pub seer: f64,
}

/// 히트펌프(냉난방)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPumpSpec {
    pub nominal_tons: f64,
    pub heating_capacity_btu: f64,
    pub cooling_capacity_btu: f64,
    pub latent_cooling_btu: f64,
    pub seer: f64,
    pub hspf: f64,
}

/// 보일러(온수 난방)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilerSpec {
    pub nominal_btu: f64,
    pub heating_capacity_btu: f64,
    pub afue: f64,
}

/// 퍼니스 + 에어컨 일체형
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboSpec {
    pub nominal_tons: f64,
    pub nominal_btu: f64,
    pub heating_capacity_btu: f64,
    pub cooling_capacity_btu: f64,
    pub latent_cooling_btu: f64,
    pub afue: f64,
    pub seer: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquipmentKind {
    Furnace(FurnaceSpec),
    Ac(AcSpec),
    HeatPump(HeatPumpSpec),
    Boiler(BoilerSpec),
    Combo(ComboSpec),
}

/// 타입 검증을 통과한 장비.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedEquipment {
    pub info: EquipmentInfo,
    pub kind: EquipmentKind,
}

impl TypedEquipment {
    pub fn equipment_type(&self) -> EquipmentType {
        match self.kind {
            EquipmentKind::Furnace(_) => EquipmentType::Furnace,
            EquipmentKind::Ac(_) => EquipmentType::Ac,
            EquipmentKind::HeatPump(_) => EquipmentType::HeatPump,
            EquipmentKind::Boiler(_) => EquipmentType::Boiler,
            EquipmentKind::Combo(_) => EquipmentType::FurnaceAcCombo,
        }
    }

    pub fn afue(&self) -> Option<f64> {
        match self.kind {
            EquipmentKind::Furnace(s) => Some(s.afue),
            EquipmentKind::Boiler(s) => Some(s.afue),
            EquipmentKind::Combo(s) => Some(s.afue),
            EquipmentKind::Ac(_) | EquipmentKind::HeatPump(_) => None,
        }
    }

    /// 추천 결과에 실어 보낼 평탄화된 스냅숏을 만든다.
    pub fn snapshot(&self) -> EquipmentSnapshot {
        let mut snap = EquipmentSnapshot {
            id: self.info.id.clone(),
            manufacturer: self.info.manufacturer.clone(),
            model: self.info.model.clone(),
            price: self.info.price,
            equipment_type: self.equipment_type(),
            distribution_type: self.info.distribution_type,
            staging: self.info.staging,
            unit_location: self.info.unit_location,
            nominal_tons: None,
            nominal_btu: None,
            heating_capacity_btu: None,
            cooling_capacity_btu: None,
            latent_cooling_btu: None,
            afue: None,
            seer: None,
            hspf: None,
            image_url: self.info.image_url.clone(),
        };
        match self.kind {
            EquipmentKind::Furnace(s) => {
                snap.nominal_btu = Some(s.nominal_btu);
                snap.heating_capacity_btu = Some(s.heating_capacity_btu);
                snap.afue = Some(s.afue);
            }
            EquipmentKind::Boiler(s) => {
                snap.nominal_btu = Some(s.nominal_btu);
                snap.heating_capacity_btu = Some(s.heating_capacity_btu);
                snap.afue = Some(s.afue);
            }
            EquipmentKind::Ac(s) => {
                snap.nominal_tons = Some(s.nominal_tons);
                snap.cooling_capacity_btu = Some(s.cooling_capacity_btu);
                snap.latent_cooling_btu = Some(s.latent_cooling_btu);
                snap.seer = Some(s.seer);
            }
            EquipmentKind::HeatPump(s) => {
                snap.nominal_tons = Some(s.nominal_tons);
                snap.heating_capacity_btu = Some(s.heating_capacity_btu);
                snap.cooling_capacity_btu = Some(s.cooling_capacity_btu);
                snap.latent_cooling_btu = Some(s.latent_cooling_btu);
                snap.seer = Some(s.seer);
                snap.hspf = Some(s.hspf);
            }
            EquipmentKind::Combo(s) => {
                snap.nominal_tons = Some(s.nominal_tons);
                snap.nominal_btu = Some(s.nominal_btu);
                snap.heating_capacity_btu = Some(s.heating_capacity_btu);
                snap.cooling_capacity_btu = Some(s.cooling_capacity_btu);
                snap.latent_cooling_btu = Some(s.latent_cooling_btu);
                snap.afue = Some(s.afue);
                snap.seer = Some(s.seer);
            }
        }
        snap
    }
}

/// 추천 결과의 장비 정보. 분류에 해당하지 않는 필드는 null로 직렬화된다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSnapshot {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub price: f64,
    pub equipment_type: EquipmentType,
    pub distribution_type: DistributionType,
    pub staging: Staging,
    pub unit_location: UnitLocation,
    pub nominal_tons: Option<f64>,
    pub nominal_btu: Option<f64>,
    pub heating_capacity_btu: Option<f64>,
    pub cooling_capacity_btu: Option<f64>,
    pub latent_cooling_btu: Option<f64>,
    pub afue: Option<f64>,
    pub seer: Option<f64>,
    pub hspf: Option<f64>,
    pub image_url: String,
}
