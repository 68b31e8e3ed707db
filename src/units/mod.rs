//! 열용량 단위 정의 및 변환 모듈.

pub mod capacity;

pub use capacity::{btu_to_kw_rounded, convert_capacity, CapacityUnit, BTU_PER_KW, BTU_PER_TON};
