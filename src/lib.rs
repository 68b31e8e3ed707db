//! 냉난방 장비 용량 선정/검증 엔진.
//!
//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 전송 계층에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod engine;
pub mod equipment;
pub mod i18n;
pub mod load;
pub mod numfmt;
pub mod sizing;
pub mod ui_cli;
pub mod units;
pub mod validation;

pub use engine::{calculate_equipment_recommendations, CalculationResult};
