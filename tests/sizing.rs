mod common;

use common::{ac, assert_close, boiler, combo, furnace, heat_pump, loads, prefs};
use hvac_sizing_toolbox::equipment::{
    DistributionType, Equipment, EquipmentType, Staging, UnitLocation,
};
use hvac_sizing_toolbox::load::{LoadInputs, SizingPreference, UserPreferences};
use hvac_sizing_toolbox::sizing::furnace::elevation_derating;
use hvac_sizing_toolbox::sizing::heat_pump::{sizing_basis, SizingBasis};
use hvac_sizing_toolbox::sizing::{
    self, recommended_cfm, EquipmentRecommendation, Evaluation, ExclusionReason, SizingContext,
    SizingStatus,
};
use hvac_sizing_toolbox::validation::validate_type;

fn evaluate(eq: &Equipment, loads: &LoadInputs, prefs: &UserPreferences) -> Evaluation {
    let typed = validate_type(eq).expect("fixture must be type-valid");
    let ctx = SizingContext::new(loads, prefs);
    sizing::evaluate(&typed, &ctx)
}

fn included(eq: &Equipment, loads: &LoadInputs, prefs: &UserPreferences) -> EquipmentRecommendation {
    match evaluate(eq, loads, prefs) {
        Evaluation::Included(rec) => rec,
        Evaluation::Excluded(reason) => panic!("{} unexpectedly excluded: {reason}", eq.id),
    }
}

#[test]
fn furnace_simple_match_is_optimal() {
    let rec = included(
        &furnace("f1", 72_000.0),
        &loads(60_000.0, 0.0, 0.0),
        &prefs(&[EquipmentType::Furnace]),
    );
    assert_eq!(rec.sizing_status, SizingStatus::Optimal);
    assert_eq!(rec.sizing_percentage, 120);
    assert!(rec.warnings.is_empty(), "{:?}", rec.warnings);
    assert_eq!(rec.instructions.len(), 2);
    assert_eq!(rec.recommended_cfm, None);
    assert_eq!(rec.backup_heat_required, None);
}

#[test]
fn furnace_elevation_derating_reduces_output() {
    let derate = elevation_derating(80_000.0, 5_000.0).unwrap();
    assert_close(derate.percent, 15.0, 1e-9);
    assert_close(derate.output_btu, 68_000.0, 1e-6);
    assert!(elevation_derating(80_000.0, 1_000.0).is_none());

    let site = LoadInputs {
        elevation: Some(5_000.0),
        ..loads(60_000.0, 0.0, 0.0)
    };
    let rec = included(&furnace("f1", 80_000.0), &site, &prefs(&[EquipmentType::Furnace]));
    // 68000 / 60000
    assert_eq!(rec.sizing_percentage, 113);
    assert_eq!(rec.warnings.len(), 1);
    assert!(rec.warnings[0].contains("15.0%"), "{}", rec.warnings[0]);
    assert!(rec.warnings[0].contains("68,000"), "{}", rec.warnings[0]);
}

#[test]
fn furnace_outside_100_to_200_is_always_excluded() {
    let p = prefs(&[EquipmentType::Furnace]);
    let l = loads(50_000.0, 0.0, 0.0);
    for pct in [40.0, 80.0, 99.0, 201.0, 260.0] {
        let eval = evaluate(&furnace("f", pct * 500.0), &l, &p);
        assert!(!eval.is_included(), "{pct}% should be excluded");
    }
    assert_eq!(
        evaluate(&furnace("f", 120_000.0), &l, &p),
        Evaluation::Excluded(ExclusionReason::BeyondOversizeLimit { percentage: 240 })
    );

    let rec = included(&furnace("f", 100_000.0), &l, &p);
    assert_eq!(rec.sizing_status, SizingStatus::Oversized);
    assert!(rec.warnings[0].contains("200%"));
}

#[test]
fn furnace_without_heating_load_is_excluded() {
    let eval = evaluate(
        &furnace("f", 60_000.0),
        &loads(0.0, 30_000.0, 24_000.0),
        &prefs(&[EquipmentType::Furnace]),
    );
    assert_eq!(eval, Evaluation::Excluded(ExclusionReason::NoRelevantLoad));
}

#[test]
fn oversized_single_stage_ac_is_flagged() {
    let rec = included(
        &ac("a1", 3.0, Staging::SingleStage),
        &loads(0.0, 24_000.0, 20_000.0),
        &prefs(&[EquipmentType::Ac]),
    );
    assert_eq!(rec.sizing_percentage, 150);
    assert_eq!(rec.sizing_status, SizingStatus::Oversized);
    assert!(rec.warnings.iter().any(|w| w.contains("150%")));
    // SHR 0.83 -> 350 CFM/ton
    assert_eq!(rec.recommended_cfm, Some(1_050));
    assert!(rec
        .instructions
        .iter()
        .any(|i| i.contains("at least 1,050 CFM")));
    assert!(rec.instructions.iter().any(|i| i.contains("latent capacity")));
}

#[test]
fn ac_limits_depend_on_staging() {
    let p = prefs(&[EquipmentType::Ac]);
    let l = loads(0.0, 28_000.0, 25_200.0);
    let status = |staging| included(&ac("a", 3.0, staging), &l, &p).sizing_status;
    // 36000 / 28000 = 129%
    assert_eq!(status(Staging::SingleStage), SizingStatus::Oversized);
    assert_eq!(status(Staging::TwoStage), SizingStatus::Oversized);
    assert_eq!(status(Staging::VariableSpeed), SizingStatus::Acceptable);
}

#[test]
fn cooling_equipment_below_90_percent_is_excluded() {
    let l = loads(20_000.0, 30_000.0, 27_000.0);
    // 24000 / 30000 = 80%
    assert!(!evaluate(&ac("a", 2.0, Staging::VariableSpeed), &l, &prefs(&[EquipmentType::Ac])).is_included());
    assert!(!evaluate(&heat_pump("h", 2.0, 24_000.0), &l, &prefs(&[EquipmentType::HeatPump])).is_included());
}

#[test]
fn heat_pump_reports_backup_heat_in_humid_heating_climate() {
    let l = loads(60_000.0, 36_000.0, 27_000.0);
    let p = prefs(&[EquipmentType::HeatPump]);
    let ctx = SizingContext::new(&l, &p);
    assert_eq!(sizing_basis(&ctx), SizingBasis::CoolingWithBackupHeat);

    let rec = included(&heat_pump("h1", 3.0, 40_000.0), &l, &p);
    assert_eq!(rec.sizing_status, SizingStatus::Optimal);
    assert_eq!(rec.sizing_percentage, 100);
    assert_eq!(rec.backup_heat_required, Some(5.9));
    assert!(rec
        .warnings
        .iter()
        .any(|w| w == "Be sure to add backup heat. 5.9 kW of backup heat are required."));
    assert!(rec
        .instructions
        .iter()
        .any(|i| i.contains("9,000 BTU min latent capacity")));
    assert_eq!(rec.recommended_cfm, Some(1_050));
}

#[test]
fn heat_pump_sized_to_heating_uses_heating_bands() {
    let l = loads(60_000.0, 36_000.0, 27_000.0);
    let p = UserPreferences {
        sizing_preference: Some(SizingPreference::SizeToHeating),
        ..prefs(&[EquipmentType::HeatPump])
    };
    assert_eq!(sizing_basis(&SizingContext::new(&l, &p)), SizingBasis::Heating);

    let rec = included(&heat_pump("h5", 5.0, 66_000.0), &l, &p);
    assert_eq!(rec.sizing_percentage, 110);
    assert_eq!(rec.sizing_status, SizingStatus::Optimal);
    assert!(rec.warnings.iter().any(|w| w.contains("standalone dehumidifier")));
    assert_eq!(rec.backup_heat_required, None);

    let rec = included(&heat_pump("h5", 5.0, 84_000.0), &l, &p);
    assert_eq!(rec.sizing_status, SizingStatus::Acceptable);

    assert!(!evaluate(&heat_pump("h4", 4.0, 54_000.0), &l, &p).is_included());
}

#[test]
fn dry_climate_heating_sizing_asks_for_turn_down_check() {
    let l = loads(60_000.0, 36_000.0, 36_000.0);
    let p = UserPreferences {
        sizing_preference: Some(SizingPreference::SizeToHeating),
        ..prefs(&[EquipmentType::HeatPump])
    };
    let rec = included(&heat_pump("h5", 5.0, 66_000.0), &l, &p);
    assert!(rec.warnings.is_empty(), "{:?}", rec.warnings);
    assert!(rec.instructions.iter().any(|i| i.contains("turns down to <80%")));
}

#[test]
fn cooling_dominant_heat_pump_sizes_to_cooling() {
    let l = loads(20_000.0, 36_000.0, 32_400.0);
    let p = prefs(&[EquipmentType::HeatPump]);
    assert_eq!(sizing_basis(&SizingContext::new(&l, &p)), SizingBasis::Cooling);

    let rec = included(&heat_pump("h3", 3.0, 36_000.0), &l, &p);
    assert_eq!(rec.sizing_percentage, 100);
    assert_eq!(rec.backup_heat_required, None);
    // SHR 0.90 -> 400 CFM/ton
    assert_eq!(rec.recommended_cfm, Some(1_200));
}

#[test]
fn heating_only_building_sizes_heat_pump_to_heating() {
    let l = loads(40_000.0, 0.0, 0.0);
    let p = prefs(&[EquipmentType::HeatPump]);
    assert_eq!(sizing_basis(&SizingContext::new(&l, &p)), SizingBasis::Heating);

    let rec = included(&heat_pump("h3", 3.0, 44_000.0), &l, &p);
    assert_eq!(rec.sizing_percentage, 110);
    assert!(rec.warnings.is_empty());
}

#[test]
fn dry_heating_dominant_load_sizes_heat_pump_to_cooling_without_backup() {
    // SHR 1.0 with the default preference
    let l = loads(60_000.0, 36_000.0, 36_000.0);
    let p = prefs(&[EquipmentType::HeatPump]);
    assert_eq!(sizing_basis(&SizingContext::new(&l, &p)), SizingBasis::Cooling);

    let rec = included(&heat_pump("h3", 3.0, 40_000.0), &l, &p);
    assert_eq!(rec.sizing_status, SizingStatus::Optimal);
    assert_eq!(rec.sizing_percentage, 100);
    assert_eq!(rec.backup_heat_required, None);
    assert!(rec.warnings.iter().all(|w| !w.contains("backup heat")));
    assert!(rec.instructions.iter().all(|i| !i.contains("latent capacity")));
    assert_eq!(rec.recommended_cfm, Some(1_350));
}

#[test]
fn oversized_heat_pump_gets_no_backup_heat_or_latent_note() {
    let l = loads(60_000.0, 24_000.0, 18_000.0);
    let p = prefs(&[EquipmentType::HeatPump]);
    assert_eq!(sizing_basis(&SizingContext::new(&l, &p)), SizingBasis::CoolingWithBackupHeat);

    // 48,000 / 24,000 = 200% > 120% single-stage limit
    let rec = included(&heat_pump("h4", 4.0, 30_000.0), &l, &p);
    assert_eq!(rec.sizing_status, SizingStatus::Oversized);
    assert_eq!(rec.sizing_percentage, 200);
    assert_eq!(rec.backup_heat_required, None);
    assert!(rec.warnings.iter().all(|w| !w.contains("backup heat")));
    assert_eq!(rec.instructions.len(), 1, "{:?}", rec.instructions);
    assert!(rec.instructions[0].contains("CFM"));
}

#[test]
fn boiler_bands_and_hydronic_instructions() {
    let l = loads(50_000.0, 0.0, 0.0);
    let p = prefs(&[EquipmentType::Boiler]);

    let rec = included(&boiler("b", 60_000.0), &l, &p);
    assert_eq!(rec.sizing_status, SizingStatus::Optimal);
    assert!(rec.instructions.iter().any(|i| i.contains("pump sizing")));

    let rec = included(&boiler("b", 70_000.0), &l, &p);
    assert_eq!(rec.sizing_status, SizingStatus::Acceptable);
    assert!(rec.warnings[0].contains("140%"));

    let rec = included(&boiler("b", 90_000.0), &l, &p);
    assert_eq!(rec.sizing_status, SizingStatus::Oversized);
    assert!(rec.warnings[0].contains("significantly oversized at 180%"));

    assert!(!evaluate(&boiler("b", 45_000.0), &l, &p).is_included());
}

#[test]
fn combo_excluded_when_heating_side_is_short() {
    let eval = evaluate(
        &combo("c", 40_000.0, 36_000.0),
        &loads(50_000.0, 30_000.0, 24_000.0),
        &prefs(&[EquipmentType::FurnaceAcCombo]),
    );
    assert_eq!(eval, Evaluation::Excluded(ExclusionReason::Undersized { percentage: 80 }));
}

#[test]
fn combo_reports_average_and_fixed_airflow() {
    let p = prefs(&[EquipmentType::FurnaceAcCombo]);
    // heating 110%, cooling 100%
    let rec = included(&combo("c", 55_000.0, 30_000.0), &loads(50_000.0, 30_000.0, 24_000.0), &p);
    assert_eq!(rec.sizing_status, SizingStatus::Optimal);
    assert_eq!(rec.sizing_percentage, 105);
    assert_eq!(rec.recommended_cfm, Some(1_000));
    assert_eq!(rec.instructions.len(), 2);

    // cooling 120% -> acceptable
    let rec = included(&combo("c", 55_000.0, 36_000.0), &loads(50_000.0, 30_000.0, 24_000.0), &p);
    assert_eq!(rec.sizing_status, SizingStatus::Acceptable);

    // heating 150% -> oversized
    let rec = included(&combo("c", 75_000.0, 30_000.0), &loads(50_000.0, 30_000.0, 24_000.0), &p);
    assert_eq!(rec.sizing_status, SizingStatus::Oversized);
    assert_eq!(rec.warnings[0], "System oversized - Heating: 150%, Cooling: 100%");
}

#[test]
fn combo_treats_missing_load_as_exact_match() {
    let rec = included(
        &combo("c", 60_000.0, 36_000.0),
        &loads(50_000.0, 0.0, 0.0),
        &prefs(&[EquipmentType::FurnaceAcCombo]),
    );
    assert_eq!(rec.sizing_percentage, 110);
}

#[test]
fn filtered_equipment_is_excluded_before_sizing() {
    let l = loads(60_000.0, 0.0, 0.0);
    let p = UserPreferences {
        brand_filter: vec!["Trane".to_string()],
        ..prefs(&[EquipmentType::Furnace])
    };
    assert_eq!(
        evaluate(&furnace("f", 72_000.0), &l, &p),
        Evaluation::Excluded(ExclusionReason::FilteredOut)
    );

    let p = UserPreferences {
        min_afue: Some(0.97),
        ..prefs(&[EquipmentType::Furnace, EquipmentType::Ac])
    };
    assert!(!evaluate(&furnace("f", 72_000.0), &l, &p).is_included());
    // AFUE floor does not apply to equipment without an AFUE rating
    let cooling = loads(0.0, 24_000.0, 20_000.0);
    assert!(evaluate(&ac("a", 2.0, Staging::SingleStage), &cooling, &p).is_included());

    let p = UserPreferences {
        max_price: Some(1_500.0),
        ..prefs(&[EquipmentType::Furnace])
    };
    assert!(!evaluate(&furnace("f", 72_000.0), &l, &p).is_included());
}

#[test]
fn distribution_staging_and_location_filters_gate_equipment() {
    // fixture furnace: ducted, single stage, indoor
    let l = loads(60_000.0, 0.0, 0.0);
    let base = prefs(&[EquipmentType::Furnace]);
    let eq = furnace("f", 72_000.0);

    let p = UserPreferences {
        distribution_type: Some(DistributionType::Hydronic),
        ..base.clone()
    };
    assert_eq!(evaluate(&eq, &l, &p), Evaluation::Excluded(ExclusionReason::FilteredOut));
    let p = UserPreferences {
        distribution_type: Some(DistributionType::Ducted),
        ..base.clone()
    };
    assert!(evaluate(&eq, &l, &p).is_included());

    let p = UserPreferences {
        staging_filter: vec![Staging::TwoStage, Staging::VariableSpeed],
        ..base.clone()
    };
    assert_eq!(evaluate(&eq, &l, &p), Evaluation::Excluded(ExclusionReason::FilteredOut));
    let p = UserPreferences {
        staging_filter: vec![Staging::SingleStage, Staging::TwoStage],
        ..base.clone()
    };
    assert!(evaluate(&eq, &l, &p).is_included());

    let p = UserPreferences {
        unit_location_filter: vec![UnitLocation::Outdoor],
        ..base.clone()
    };
    assert_eq!(evaluate(&eq, &l, &p), Evaluation::Excluded(ExclusionReason::FilteredOut));
    let p = UserPreferences {
        unit_location_filter: vec![UnitLocation::Indoor],
        ..base
    };
    assert!(evaluate(&eq, &l, &p).is_included());
}

#[test]
fn all_preference_filters_must_pass() {
    let l = loads(60_000.0, 0.0, 0.0);
    let eq = furnace("f", 72_000.0);
    let brand_ok = UserPreferences {
        brand_filter: vec!["Acme".to_string()],
        ..prefs(&[EquipmentType::Furnace])
    };
    assert!(evaluate(&eq, &l, &brand_ok).is_included());

    // brand matches, staging does not
    let p = UserPreferences {
        staging_filter: vec![Staging::VariableSpeed],
        ..brand_ok.clone()
    };
    assert_eq!(evaluate(&eq, &l, &p), Evaluation::Excluded(ExclusionReason::FilteredOut));

    // brand matches, price does not
    let p = UserPreferences {
        max_price: Some(1_999.0),
        ..brand_ok.clone()
    };
    assert_eq!(evaluate(&eq, &l, &p), Evaluation::Excluded(ExclusionReason::FilteredOut));

    let p = UserPreferences {
        staging_filter: vec![Staging::SingleStage],
        max_price: Some(2_000.0),
        ..brand_ok
    };
    assert!(evaluate(&eq, &l, &p).is_included());
}

#[test]
fn cfm_follows_shr_bands_for_any_tonnage() {
    for tons in [1.5, 2.0, 3.0, 4.0, 5.0] {
        assert_eq!(recommended_cfm(tons, 0.80), (tons * 350.0_f64).ceil() as u32);
        assert_eq!(recommended_cfm(tons, 0.90), (tons * 400.0_f64).ceil() as u32);
        assert_eq!(recommended_cfm(tons, 0.97), (tons * 450.0_f64).ceil() as u32);
    }
}
