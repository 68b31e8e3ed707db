#![allow(dead_code)]

use hvac_sizing_toolbox::equipment::{
    DistributionType, Equipment, EquipmentType, Staging, UnitLocation,
};
use hvac_sizing_toolbox::load::{LoadInputs, UserPreferences};

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

pub fn loads(heating: f64, cooling: f64, sensible: f64) -> LoadInputs {
    LoadInputs {
        total_heating_btu: heating,
        total_cooling_btu: cooling,
        sensible_cooling_btu: sensible,
        ..LoadInputs::default()
    }
}

pub fn prefs(types: &[EquipmentType]) -> UserPreferences {
    UserPreferences::for_types(types)
}

fn blank(id: &str, equipment_type: EquipmentType) -> Equipment {
    Equipment {
        id: id.to_string(),
        manufacturer: "Acme".to_string(),
        model: format!("{}-M", id.to_uppercase()),
        price: 2_000.0,
        is_active: true,
        equipment_type,
        distribution_type: DistributionType::Ducted,
        staging: Staging::SingleStage,
        unit_location: UnitLocation::Indoor,
        system_function: None,
        nominal_tons: None,
        nominal_btu: None,
        heating_capacity_btu: None,
        cooling_capacity_btu: None,
        latent_cooling_btu: None,
        afue: None,
        seer: None,
        hspf: None,
        image_url: String::new(),
    }
}

pub fn furnace(id: &str, heating_capacity_btu: f64) -> Equipment {
    Equipment {
        nominal_btu: Some(heating_capacity_btu),
        heating_capacity_btu: Some(heating_capacity_btu),
        afue: Some(0.95),
        ..blank(id, EquipmentType::Furnace)
    }
}

pub fn ac(id: &str, tons: f64, staging: Staging) -> Equipment {
    let cooling = tons * 12_000.0;
    Equipment {
        staging,
        unit_location: UnitLocation::Outdoor,
        nominal_tons: Some(tons),
        cooling_capacity_btu: Some(cooling),
        latent_cooling_btu: Some(cooling * 0.3),
        seer: Some(16.0),
        ..blank(id, EquipmentType::Ac)
    }
}

pub fn heat_pump(id: &str, tons: f64, heating_capacity_btu: f64) -> Equipment {
    let cooling = tons * 12_000.0;
    Equipment {
        unit_location: UnitLocation::SplitSystem,
        nominal_tons: Some(tons),
        heating_capacity_btu: Some(heating_capacity_btu),
        cooling_capacity_btu: Some(cooling),
        latent_cooling_btu: Some(cooling * 0.3),
        seer: Some(16.0),
        hspf: Some(9.0),
        ..blank(id, EquipmentType::HeatPump)
    }
}

pub fn boiler(id: &str, heating_capacity_btu: f64) -> Equipment {
    Equipment {
        distribution_type: DistributionType::Hydronic,
        nominal_btu: Some(heating_capacity_btu / 0.9),
        heating_capacity_btu: Some(heating_capacity_btu),
        afue: Some(0.9),
        ..blank(id, EquipmentType::Boiler)
    }
}

pub fn combo(id: &str, heating_capacity_btu: f64, cooling_capacity_btu: f64) -> Equipment {
    Equipment {
        nominal_tons: Some(cooling_capacity_btu / 12_000.0),
        nominal_btu: Some(heating_capacity_btu),
        heating_capacity_btu: Some(heating_capacity_btu),
        cooling_capacity_btu: Some(cooling_capacity_btu),
        latent_cooling_btu: Some(cooling_capacity_btu * 0.3),
        afue: Some(0.95),
        seer: Some(15.0),
        ..blank(id, EquipmentType::FurnaceAcCombo)
    }
}
