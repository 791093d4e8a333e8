//! Integration tests for the weapon bay pass.
//!
//! Exercises: JSON designs → validation → BayGroup scan → mirror merge
//! → printable rows
//!
//! All tests are pure logic — no UI, no rendering.

use mml_print::bay::BayGroup;
use mml_print::design::{load_designs, validate_design, UnitDesign};
use mml_print::equipment::{AmmoBin, AugmentFlag, MountedWeapon, WeaponBay, WeaponKind};
use mml_print::location::Location;
use mml_print::sheet::{bay_rows, collect_bay_groups, merge_lateral, prepare_bays};

const SAMPLE_UNITS: &str = include_str!("../../../data/sample_units.json");

// ── Helpers ────────────────────────────────────────────────────────────

fn sample(name: &str) -> UnitDesign {
    load_designs(SAMPLE_UNITS)
        .unwrap()
        .into_iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("no sample design named {name}"))
}

fn labels(design: &UnitDesign) -> Vec<String> {
    design.weapon_table().into_iter().map(|r| r.label).collect()
}

fn srm6() -> WeaponKind {
    WeaponKind::new("ISSRM6", "SRM 6", true)
}

fn srm_bay(location: Location, shots: &[i32]) -> WeaponBay {
    let mut bay = WeaponBay::new(location, false);
    bay.weapons.push(MountedWeapon::new(srm6()));
    bay.ammo = shots
        .iter()
        .map(|&s| AmmoBin::new("SRM-6 Ammo", "ISSRM6", s))
        .collect();
    bay
}

// ── Sample designs ─────────────────────────────────────────────────────

#[test]
fn sample_designs_are_valid() {
    let designs = load_designs(SAMPLE_UNITS).unwrap();
    assert_eq!(designs.len(), 3);
    for design in &designs {
        let issues = validate_design(design);
        assert!(issues.is_empty(), "{}: {issues:?}", design.name);
    }
}

#[test]
fn dropship_wings_merge_per_facing() {
    let leopard = sample("Leopard (2537)");
    assert_eq!(
        labels(&leopard),
        vec!["N", "FLS/FRS", "FLS (R)/FRS (R)", "A"]
    );
}

#[test]
fn permuted_ammo_and_spent_bins_still_merge() {
    let avenger = sample("Avenger");
    let rows = avenger.weapon_table();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].label, "FLS/FRS");
    assert_eq!(rows[1].ammo, vec!["AC/10 Ammo (20)", "AC/10 Ammo (10)"]);
    assert_eq!(rows[0].notes, vec!["Artemis IV"]);
}

#[test]
fn warship_rows_follow_display_order() {
    let essex = sample("Essex II");
    assert_eq!(labels(&essex), vec!["N", "LBS/RBS", "ALS", "ARS", "A"]);
}

#[test]
fn partial_capacitors_are_noted() {
    let essex = sample("Essex II");
    let groups = essex.bay_groups();
    let nose = &groups[0];
    assert_eq!(nose.count_augmentations(AugmentFlag::PpcCapacitor), 2);
    assert!(!nose.all_have_augmentation(AugmentFlag::PpcCapacitor));
    assert_eq!(essex.weapon_table()[0].notes, vec!["PPC Capacitor (2/3)"]);
}

// ── Pass invariants ────────────────────────────────────────────────────

#[test]
fn merge_preserves_weapon_totals() {
    for design in load_designs(SAMPLE_UNITS).unwrap() {
        let raw: u32 = collect_bay_groups(&design.bays)
            .iter()
            .map(BayGroup::weapon_count)
            .sum();
        let mounted = design.bays.iter().map(|b| b.weapons.len() as u32).sum::<u32>();
        assert_eq!(raw, mounted, "{}", design.name);

        // A merged row stands for every location it lists.
        let printed: u32 = design
            .bay_groups()
            .iter()
            .map(|g| g.weapon_count() * g.locations().len() as u32)
            .sum();
        assert_eq!(printed, mounted, "{}", design.name);
    }
}

#[test]
fn rows_are_sorted_by_weight() {
    for design in load_designs(SAMPLE_UNITS).unwrap() {
        let weights: Vec<u8> = design
            .bay_groups()
            .iter()
            .map(BayGroup::display_weight)
            .collect();
        let mut sorted = weights.clone();
        sorted.sort();
        assert_eq!(weights, sorted, "{}", design.name);
    }
}

#[test]
fn merged_groups_hold_at_most_two_locations() {
    for design in load_designs(SAMPLE_UNITS).unwrap() {
        for group in design.bay_groups() {
            assert!(group.locations().len() <= 2, "{}", design.name);
        }
    }
}

#[test]
fn merge_is_deterministic() {
    let design = sample("Leopard (2537)");
    assert_eq!(design.weapon_table(), design.weapon_table());
}

// ── Ammo matching ──────────────────────────────────────────────────────

#[test]
fn greedy_ammo_matching_pairs_duplicates() {
    let merged = prepare_bays(&[
        srm_bay(Location::AftLeft, &[15, 15, 30]),
        srm_bay(Location::AftRight, &[30, 15, 15]),
    ]);
    assert_eq!(merged.len(), 1);
}

#[test]
fn unequal_duplicates_do_not_match() {
    let merged = prepare_bays(&[
        srm_bay(Location::AftLeft, &[15, 15, 30]),
        srm_bay(Location::AftRight, &[15, 30, 30]),
    ]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn merge_only_when_both_directions_agree() {
    let groups = collect_bay_groups(&[
        srm_bay(Location::LeftBroadside, &[15]),
        srm_bay(Location::RightBroadside, &[15]),
    ]);
    assert!(groups[0].can_combine(&groups[1]));
    assert!(groups[1].can_combine(&groups[0]));
    let rows = bay_rows(&merge_lateral(groups));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "LBS/RBS");
    assert_eq!(rows[0].weapons, vec!["1 SRM 6"]);
}
