//! Static reference catalog of Angola's administrative hierarchy.
//!
//! Units are stored flat in declaration order; grouping is expressed through
//! each unit's `parent` name and resolved by normalized-name lookup. The
//! catalog covers the twelve provinces the source data declares plus the
//! municipality groups it details (Luanda, Benguela, Huambo) and district
//! groups for five municipalities.

use crate::model::{AdminUnit, DistrictType, Level, Risk};
use crate::name::matches;

const PROVINCES: &[(&str, Risk, u64, f64)] = &[
    ("Benguela", Risk::High, 2_231_385, 31_788.0),
    ("Bié", Risk::Medium, 1_455_255, 70_314.0),
    ("Cuando Cubango", Risk::Low, 534_002, 199_049.0),
    ("Cunene", Risk::Medium, 990_087, 78_342.0),
    ("Cuanza Norte", Risk::High, 443_386, 24_110.0),
    ("Huambo", Risk::High, 2_019_555, 34_270.0),
    ("Luanda", Risk::VeryHigh, 8_329_517, 2_417.0),
    ("Lunda Sul", Risk::Medium, 537_587, 77_637.0),
    ("Malanje", Risk::High, 1_108_404, 97_602.0),
    ("Moxico", Risk::Low, 758_568, 223_023.0),
    ("Uíge", Risk::High, 1_483_118, 58_698.0),
    ("Zaire", Risk::Medium, 594_428, 40_130.0),
];

const MUNICIPALITIES: &[(&str, &str, u64, f64)] = &[
    ("Luanda", "Belas", 600_000, 500.0),
    ("Luanda", "Cacuaco", 850_000, 450.0),
    ("Luanda", "Cazenga", 980_000, 32.0),
    ("Luanda", "Icolo e Bengo", 150_000, 3_600.0),
    ("Luanda", "Luanda", 2_200_000, 116.0),
    ("Luanda", "Quiçama", 25_000, 13_900.0),
    ("Luanda", "Viana", 2_000_000, 1_700.0),
    ("Benguela", "Balombo", 35_000, 3_000.0),
    ("Benguela", "Benguela", 555_000, 2_800.0),
    ("Benguela", "Bocoio", 120_000, 4_500.0),
    ("Benguela", "Caimbambo", 95_000, 2_100.0),
    ("Benguela", "Catumbela", 300_000, 3_600.0),
    ("Benguela", "Lobito", 450_000, 3_600.0),
    ("Huambo", "Bailundo", 400_000, 5_000.0),
    ("Huambo", "Cachiungo", 75_000, 3_200.0),
    ("Huambo", "Caála", 180_000, 3_400.0),
    ("Huambo", "Huambo", 650_000, 4_200.0),
    ("Huambo", "Londuimbali", 85_000, 2_800.0),
    ("Huambo", "Longonjo", 120_000, 4_100.0),
];

const DISTRICTS: &[(&str, &str, u64, DistrictType)] = &[
    ("Luanda", "Ingombota", 150_000, DistrictType::Commercial),
    ("Luanda", "Maianga", 180_000, DistrictType::Residential),
    ("Luanda", "Rangel", 220_000, DistrictType::Residential),
    ("Luanda", "Sambizanga", 280_000, DistrictType::Residential),
    ("Luanda", "Ilha de Luanda", 45_000, DistrictType::Touristic),
    ("Luanda", "Maculusso", 90_000, DistrictType::Residential),
    ("Cacuaco", "Kikolo", 180_000, DistrictType::Residential),
    ("Cacuaco", "Sequele", 140_000, DistrictType::Residential),
    ("Cacuaco", "Funda", 160_000, DistrictType::Residential),
    ("Cacuaco", "Quiage", 95_000, DistrictType::Residential),
    ("Viana", "Viana Sede", 250_000, DistrictType::Residential),
    ("Viana", "Calumbo", 180_000, DistrictType::Residential),
    ("Viana", "Catete", 120_000, DistrictType::Residential),
    ("Viana", "Kikuxi", 200_000, DistrictType::Industrial),
    ("Benguela", "Centro", 85_000, DistrictType::Commercial),
    ("Benguela", "Compão", 70_000, DistrictType::Residential),
    ("Benguela", "Calombotão", 55_000, DistrictType::Residential),
    ("Benguela", "Praia Morena", 40_000, DistrictType::Residential),
    ("Lobito", "Canata", 90_000, DistrictType::Residential),
    ("Lobito", "Caponte", 75_000, DistrictType::Residential),
    ("Lobito", "Compão", 60_000, DistrictType::Residential),
    ("Lobito", "Restinga", 50_000, DistrictType::Port),
];

#[derive(Debug, Clone)]
pub struct Dataset {
    units: Vec<AdminUnit>,
}

impl Dataset {
    /// Build the Angola catalog in declaration order.
    pub fn angola() -> Self {
        let mut units = Vec::with_capacity(PROVINCES.len() + MUNICIPALITIES.len() + DISTRICTS.len());
        for &(name, risk, population, area) in PROVINCES {
            units.push(AdminUnit::province(name, risk, population, area));
        }
        for &(province, name, population, area) in MUNICIPALITIES {
            units.push(AdminUnit::municipality(province, name, population, area));
        }
        for &(municipality, name, population, ty) in DISTRICTS {
            units.push(AdminUnit::district(municipality, name, population, ty));
        }
        Self { units }
    }

    pub fn units(&self) -> &[AdminUnit] {
        &self.units
    }

    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &AdminUnit> {
        self.units.iter().filter(move |u| u.level == level)
    }

    pub fn provinces(&self) -> impl Iterator<Item = &AdminUnit> {
        self.at_level(Level::Province)
    }

    pub fn municipalities(&self) -> impl Iterator<Item = &AdminUnit> {
        self.at_level(Level::Municipality)
    }

    pub fn districts(&self) -> impl Iterator<Item = &AdminUnit> {
        self.at_level(Level::District)
    }

    /// First unit at `level` whose normalized name matches. Duplicate names
    /// across parent scopes (e.g. the Compão districts of Benguela and
    /// Lobito) resolve to the earliest declaration.
    pub fn find(&self, level: Level, name: &str) -> Option<&AdminUnit> {
        self.at_level(level).find(|u| matches(&u.name, name))
    }

    pub fn municipalities_of(&self, province: &str) -> Vec<&AdminUnit> {
        self.municipalities()
            .filter(|m| m.parent.as_deref().is_some_and(|p| matches(p, province)))
            .collect()
    }

    pub fn districts_of(&self, municipality: &str) -> Vec<&AdminUnit> {
        self.districts()
            .filter(|d| d.parent.as_deref().is_some_and(|m| matches(m, municipality)))
            .collect()
    }

    pub fn province_of_municipality(&self, municipality: &str) -> Option<&str> {
        self.find(Level::Municipality, municipality)?.parent.as_deref()
    }

    pub fn municipality_of_district(&self, district: &str) -> Option<&str> {
        self.find(Level::District, district)?.parent.as_deref()
    }

    /// Two-hop resolution through the district's municipality. `None` when
    /// any link is missing; an ungrouped unit is tolerated, not an error.
    pub fn province_of_district(&self, district: &str) -> Option<&str> {
        let municipality = self.municipality_of_district(district)?;
        self.province_of_municipality(municipality)
    }
}
