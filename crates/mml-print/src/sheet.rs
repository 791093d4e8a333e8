//! The weapon bay pass of a capital ship record sheet.
//!
//! Scans the bays a unit reports, groups them per (location, facing),
//! collapses mirror bays into one row, and produces plain-text row data for
//! the sheet layout to place.
//!
//! ```
//! use mml_print::equipment::{MountedWeapon, WeaponBay, WeaponKind};
//! use mml_print::location::Location;
//! use mml_print::sheet::{bay_rows, prepare_bays};
//!
//! let laser = MountedWeapon::new(WeaponKind::new("ISLargeLaser", "Large Laser", false));
//! let mut left = WeaponBay::new(Location::LeftBroadside, false);
//! left.weapons.push(laser.clone());
//! let mut right = WeaponBay::new(Location::RightBroadside, false);
//! right.weapons.push(laser);
//!
//! let rows = bay_rows(&prepare_bays(&[left, right]));
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].label, "LBS/RBS");
//! ```

use std::collections::VecDeque;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::bay::BayGroup;
use crate::equipment::{AugmentFlag, WeaponBay};

/// One printed row of the weapon table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BayRow {
    /// Location column, e.g. "FLS/FRS" or "FLS (R)".
    pub label: String,
    /// "<count> <weapon>" per weapon kind.
    pub weapons: Vec<String>,
    /// "<ammo> (<shots>)" per bin.
    pub ammo: Vec<String>,
    /// Linked equipment notes, e.g. "Artemis IV" or "PPC Capacitor (2/3)".
    pub notes: Vec<String>,
}

/// Build one group per (location, facing), in the order bays are first seen.
///
/// A bay reported more than once for the same location and facing
/// accumulates into the same group. Ammo bins whose weapon is not in the
/// reported bay are skipped.
pub fn collect_bay_groups(bays: &[WeaponBay]) -> Vec<BayGroup> {
    let mut groups: Vec<BayGroup> = Vec::new();
    for bay in bays {
        let idx = match groups
            .iter()
            .position(|g| g.locations()[0] == bay.location && g.rear() == bay.rear)
        {
            Some(idx) => idx,
            None => {
                groups.push(BayGroup::new(bay.location, bay.rear));
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        for weapon in &bay.weapons {
            group.add_weapon(weapon);
        }
        for bin in &bay.ammo {
            match bay.weapon_kind(&bin.weapon_id) {
                Some(kind) => group.add_ammo(kind, bin),
                None => debug!(
                    "Skipping {} in {}: no {} in bay",
                    bin.name,
                    bay.location.abbreviation(),
                    bin.weapon_id
                ),
            }
        }
    }
    groups
}

/// Collapse mirror bays and sort the result for printing.
///
/// Each group is combined with the first later group it matches in both
/// directions. A group takes part in at most one merge.
pub fn merge_lateral(groups: Vec<BayGroup>) -> Vec<BayGroup> {
    let mut pending: VecDeque<BayGroup> = groups.into();
    let mut merged = Vec::with_capacity(pending.len());
    while let Some(mut group) = pending.pop_front() {
        let partner = pending
            .iter()
            .position(|other| group.can_combine(other) && other.can_combine(&group));
        if let Some(other) = partner.and_then(|idx| pending.remove(idx)) {
            group.combine(&other);
            debug!("Combined bays into {}", location_label(&group));
        }
        merged.push(group);
    }
    merged.sort_by(|a, b| a.display_cmp(b));
    merged
}

/// Run the full bay pass: group, then merge mirror bays.
pub fn prepare_bays(bays: &[WeaponBay]) -> Vec<BayGroup> {
    let groups = collect_bay_groups(bays);
    let found = groups.len();
    let merged = merge_lateral(groups);
    info!("Weapon bays: {} reported, {} grouped, {} rows", bays.len(), found, merged.len());
    merged
}

/// Location column text for a group.
pub fn location_label(group: &BayGroup) -> String {
    group
        .locations()
        .iter()
        .map(|loc| {
            if group.rear() && loc.is_side_mount() {
                format!("{} (R)", loc.abbreviation())
            } else {
                loc.abbreviation()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Linked equipment notes for a group, one per flag present on any weapon.
pub fn augmentation_notes(group: &BayGroup) -> Vec<String> {
    let total = group.weapon_count();
    AugmentFlag::all()
        .iter()
        .filter_map(|&flag| {
            let count = group.count_augmentations(flag);
            if count == 0 {
                None
            } else if group.all_have_augmentation(flag) {
                Some(flag.label().to_string())
            } else {
                Some(format!("{} ({count}/{total})", flag.label()))
            }
        })
        .collect()
}

/// Turn prepared groups into printable rows, keeping their order.
pub fn bay_rows(groups: &[BayGroup]) -> Vec<BayRow> {
    groups
        .iter()
        .map(|group| BayRow {
            label: location_label(group),
            weapons: group
                .weapons()
                .iter()
                .map(|(kind, count)| format!("{count} {}", kind.name))
                .collect(),
            ammo: group
                .ammo()
                .values()
                .flatten()
                .map(|bin| format!("{} ({})", bin.name, bin.shots_left))
                .collect(),
            notes: augmentation_notes(group),
        })
        .collect()
}
