//! 장비 데이터 모델과 카탈로그.
//!
//! - `model`: 카탈로그 원본 레코드(모든 용량 필드 nullable)
//! - `typed`: 검증을 통과한 분류별 타입
//! - `catalog`: TOML/JSON 카탈로그 로드

pub mod catalog;
pub mod model;
pub mod typed;

pub use catalog::{Catalog, CatalogError};
pub use model::{
    DistributionType, Equipment, EquipmentType, SpecField, Staging, SystemFunction, UnitLocation,
};
pub use typed::{
    AcSpec, BoilerSpec, ComboSpec, EquipmentInfo, EquipmentKind, EquipmentSnapshot, FurnaceSpec,
    HeatPumpSpec, TypedEquipment,
};
