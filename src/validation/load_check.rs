use crate::load::LoadInputs;

/// 두 부하가 동시에 이 값을 넘으면 Manual J 재확인을 권한다.
pub const LARGE_HEATING_LOAD_BTU: f64 = 200_000.0;
pub const LARGE_COOLING_LOAD_BTU: f64 = 100_000.0;
/// 이 값보다 낮은 SHR은 잠열 부하가 큰 것으로 본다.
pub const LOW_SHR_THRESHOLD: f64 = 0.70;
/// 난방/냉방 부하비가 이 값(또는 역수)을 벗어나면 경고한다.
pub const MAX_HEATING_COOLING_RATIO: f64 = 3.0;

/// 부하 입력의 일관성을 점검한다. 결과는 모든 추천에 공통으로 붙는다.
pub fn load_warnings(inputs: &LoadInputs) -> Vec<String> {
    let mut warnings = Vec::new();

    if inputs.total_heating_btu > LARGE_HEATING_LOAD_BTU
        && inputs.total_cooling_btu > LARGE_COOLING_LOAD_BTU
    {
        warnings.push(
            "Heating and cooling loads are both unusually large for a residence. Verify the Manual J calculation before selecting equipment."
                .to_string(),
        );
    }

    if inputs.has_cooling_load() {
        let shr = inputs.sensible_heat_ratio();
        if shr < LOW_SHR_THRESHOLD {
            warnings.push(format!(
                "Sensible heat ratio of {shr:.2} indicates a high latent load. Select equipment with strong dehumidification capability."
            ));
        }
    }

    if inputs.has_heating_load() && inputs.has_cooling_load() {
        let ratio = inputs.total_heating_btu / inputs.total_cooling_btu;
        if ratio > MAX_HEATING_COOLING_RATIO || ratio < 1.0 / MAX_HEATING_COOLING_RATIO {
            warnings.push(format!(
                "Heating-to-cooling load ratio of {ratio:.2} is unusual. Verify envelope inputs or consider zoned equipment."
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loads(heating: f64, cooling: f64, sensible: f64) -> LoadInputs {
        LoadInputs {
            total_heating_btu: heating,
            total_cooling_btu: cooling,
            sensible_cooling_btu: sensible,
            ..LoadInputs::default()
        }
    }

    #[test]
    fn typical_loads_have_no_warnings() {
        assert!(load_warnings(&loads(60_000.0, 30_000.0, 24_000.0)).is_empty());
    }

    #[test]
    fn each_check_fires_independently() {
        let huge = load_warnings(&loads(250_000.0, 120_000.0, 100_000.0));
        assert_eq!(huge.len(), 1);
        assert!(huge[0].contains("Manual J"));

        let humid = load_warnings(&loads(40_000.0, 30_000.0, 20_000.0));
        assert_eq!(humid.len(), 1);
        assert!(humid[0].contains("latent"));

        let skewed = load_warnings(&loads(100_000.0, 20_000.0, 18_000.0));
        assert_eq!(skewed.len(), 1);
        assert!(skewed[0].contains("ratio"));
    }

    #[test]
    fn cooling_dominant_ratio_is_flagged() {
        let w = load_warnings(&loads(10_000.0, 40_000.0, 36_000.0));
        assert_eq!(w.len(), 1, "{w:?}");
        assert!(w[0].contains("ratio of 0.25"));

        // exactly 1/3 stays quiet
        assert!(load_warnings(&loads(10_000.0, 30_000.0, 27_000.0)).is_empty());
    }

    #[test]
    fn heating_only_load_skips_cooling_checks() {
        assert!(load_warnings(&loads(80_000.0, 0.0, 0.0)).is_empty());
    }
}
