//! 카탈로그 전체 검증 보고서.
//!
//! 엔진의 타입 검증과 달리 정규화하지 않은 원본 레코드를 본다. 관계없는 필드에
//! 값이 들어간 경우도 드러내서 데이터 정리에 쓰기 위함이다.

use std::fmt;
use std::io;

use super::type_check::check_fields;
use crate::equipment::{Equipment, EquipmentType, SpecField};

const TOP_CAUSES: usize = 5;

/// 문제 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// 필수 필드가 null
    Missing,
    /// 금지 필드에 값이 있음
    Forbidden,
}

/// 필드 하나에 대한 문제.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub field: SpecField,
    pub kind: IssueKind,
    pub expected: String,
    pub actual: String,
    pub issue: String,
}

impl FieldIssue {
    /// 원인 분류 키 ("latentCoolingBtu: Required for air conditioners").
    pub fn category(&self) -> String {
        format!("{}: {}", self.field, self.issue)
    }
}

/// 원본 레코드의 필드별 문제 목록.
pub fn field_issues(eq: &Equipment) -> Vec<FieldIssue> {
    let check = check_fields(eq);
    let label = eq.equipment_type.plural_label();
    let missing = check.missing.iter().map(|&field| FieldIssue {
        field,
        kind: IssueKind::Missing,
        expected: "number".into(),
        actual: "null".into(),
        issue: format!("Required for {label}"),
    });
    let forbidden = check.forbidden.iter().map(|&field| FieldIssue {
        field,
        kind: IssueKind::Forbidden,
        expected: "null".into(),
        actual: eq.field(field).map(|v| v.to_string()).unwrap_or_default(),
        issue: format!("Must be null for {label}"),
    });
    missing.chain(forbidden).collect()
}

/// 검증에 실패한 장비 1건.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidItem {
    pub equipment: Equipment,
    pub issues: Vec<FieldIssue>,
}

/// 원인별 집계.
#[derive(Debug, Clone, PartialEq)]
pub struct Cause {
    pub field: SpecField,
    pub kind: IssueKind,
    pub issue: String,
    pub count: usize,
}

impl Cause {
    fn recommendations(&self) -> Vec<String> {
        match (self.kind, self.field) {
            (IssueKind::Missing, SpecField::LatentCoolingBtu) => vec![
                "Calculate as 30-35% of total cooling capacity".into(),
                "Formula: latentCoolingBtu = coolingCapacityBtu * 0.33".into(),
            ],
            (IssueKind::Missing, SpecField::Hspf) => vec![
                "Look up manufacturer specifications".into(),
                "Typical range: 8.0 - 10.5 for modern heat pumps".into(),
            ],
            (IssueKind::Missing, field) => {
                vec![format!("Look up manufacturer specifications for {field}")]
            }
            (IssueKind::Forbidden, field) => {
                vec![format!("Set {field} to null for this equipment type")]
            }
        }
    }
}

/// 카탈로그 검증 보고서.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReport {
    pub total: usize,
    pub invalid: Vec<InvalidItem>,
}

impl CatalogReport {
    pub fn build(equipment: &[Equipment]) -> Self {
        let invalid = equipment
            .iter()
            .filter_map(|eq| {
                let issues = field_issues(eq);
                (!issues.is_empty()).then(|| InvalidItem {
                    equipment: eq.clone(),
                    issues,
                })
            })
            .collect();
        Self {
            total: equipment.len(),
            invalid,
        }
    }

    pub fn valid_count(&self) -> usize {
        self.total - self.invalid.len()
    }

    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }

    /// 가장 많은 장비에 영향을 준 원인부터 최대 5개. 동률은 처음 나온 순서를 유지한다.
    pub fn top_causes(&self) -> Vec<Cause> {
        let mut causes: Vec<Cause> = Vec::new();
        for item in &self.invalid {
            for issue in &item.issues {
                match causes
                    .iter_mut()
                    .find(|c| c.field == issue.field && c.issue == issue.issue)
                {
                    Some(cause) => cause.count += 1,
                    None => causes.push(Cause {
                        field: issue.field,
                        kind: issue.kind,
                        issue: issue.issue.clone(),
                        count: 1,
                    }),
                }
            }
        }
        causes.sort_by(|a, b| b.count.cmp(&a.count));
        causes.truncate(TOP_CAUSES);
        causes
    }

    /// 분류별 실패 목록. 분류는 처음 나온 순서.
    pub fn by_type(&self) -> Vec<(EquipmentType, Vec<&InvalidItem>)> {
        let mut groups: Vec<(EquipmentType, Vec<&InvalidItem>)> = Vec::new();
        for item in &self.invalid {
            let ty = item.equipment.equipment_type;
            match groups.iter_mut().find(|(t, _)| *t == ty) {
                Some((_, items)) => items.push(item),
                None => groups.push((ty, vec![item])),
            }
        }
        groups
    }
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(80);
        writeln!(f, "{rule}")?;
        writeln!(f, "EQUIPMENT VALIDATION REPORT")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "SUMMARY:")?;
        writeln!(f, "- Total equipment items: {}", self.total)?;
        writeln!(f, "- Valid equipment items: {}", self.valid_count())?;
        writeln!(f, "- Invalid equipment items: {}", self.invalid.len())?;
        writeln!(f)?;

        if self.is_clean() {
            writeln!(f, "ALL EQUIPMENT ITEMS ARE VALID")?;
            return Ok(());
        }

        let causes = self.top_causes();
        writeln!(f, "TOP CAUSES OF INVALIDATION:")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for cause in &causes {
            writeln!(f, "{} items: {}: {}", cause.count, cause.field, cause.issue)?;
        }
        writeln!(f)?;

        for (ty, items) in self.by_type() {
            writeln!(
                f,
                "INVALID {} EQUIPMENT ({} items):",
                ty.code().to_uppercase(),
                items.len()
            )?;
            writeln!(f, "{}", "-".repeat(60))?;
            for item in items {
                let eq = &item.equipment;
                writeln!(f, "{} {} ({})", eq.manufacturer, eq.model, eq.id)?;
                for issue in &item.issues {
                    writeln!(
                        f,
                        "  x {}: Expected {}, got {}",
                        issue.field, issue.expected, issue.actual
                    )?;
                    writeln!(f, "     Issue: {}", issue.issue)?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f, "FIXING RECOMMENDATIONS:")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for cause in &causes {
            writeln!(
                f,
                "For {} items with \"{}: {}\":",
                cause.count, cause.field, cause.issue
            )?;
            for line in cause.recommendations() {
                writeln!(f, "  - {line}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// 잠열 용량 추정 비율 (냉방 용량 대비)
pub const LATENT_FRACTION_ESTIMATE: f64 = 0.33;
/// 누락된 HSPF 대신 제안하는 전형값
pub const TYPICAL_HSPF: &str = "9.0";

/// 필수 필드 누락 목록을 CSV로 쓴다. 수작업 보완용.
pub fn missing_data_csv<W: io::Write>(equipment: &[Equipment], writer: W) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([
        "id",
        "manufacturer",
        "model",
        "equipmentType",
        "missingField",
        "suggestedValue",
        "notes",
    ])?;

    for eq in equipment {
        for issue in field_issues(eq)
            .into_iter()
            .filter(|i| i.kind == IssueKind::Missing)
        {
            let (suggested, notes) = match (issue.field, eq.cooling_capacity_btu) {
                (SpecField::LatentCoolingBtu, Some(cooling)) if cooling > 0.0 => (
                    format!("{}", (cooling * LATENT_FRACTION_ESTIMATE).round()),
                    "33% of cooling capacity".to_string(),
                ),
                (SpecField::Hspf, _) => (
                    TYPICAL_HSPF.to_string(),
                    "Typical value - verify with manufacturer data".to_string(),
                ),
                _ => (String::new(), String::new()),
            };
            out.write_record([
                eq.id.as_str(),
                eq.manufacturer.as_str(),
                eq.model.as_str(),
                eq.equipment_type.code(),
                issue.field.name(),
                suggested.as_str(),
                notes.as_str(),
            ])?;
        }
    }
    out.flush()?;
    Ok(())
}
