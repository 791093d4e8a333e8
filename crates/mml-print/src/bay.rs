//! Weapon bay grouping for capital ship and small craft record sheets.
//!
//! A [`BayGroup`] collects the weapons, ammunition and linked devices of one
//! bay so the sheet can print a single row for it. Identical bays on opposite
//! sides of the hull (FLS and FRS, say) can be collapsed into one row listing
//! both locations.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::equipment::{AmmoBin, AugmentFlag, AugmentKind, MountedWeapon, WeaponKind};
use crate::location::{is_opposing, Location};

/// The weapons, ammunition and linked devices of one bay, or of several
/// identical bays once combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BayGroup {
    /// Bay location, or locations if mirror bays were combined. Always sorted
    /// by display weight.
    locations: Vec<Location>,
    rear: bool,
    /// Distinct weapon kinds with the number mounted.
    weapons: BTreeMap<WeaponKind, u32>,
    /// Bins feeding each ammo-using weapon kind.
    ammo: BTreeMap<WeaponKind, Vec<AmmoBin>>,
    /// Linked devices per weapon kind, counted per weapon.
    ///
    /// Most of these are all-or-nothing for a bay by the rules, but nothing
    /// says every PPC in a bay needs a capacitor, so each weapon is counted on
    /// its own. Builds that only put Artemis on some launchers, or mix Artemis
    /// types, are counted the same way.
    augmentations: BTreeMap<WeaponKind, BTreeMap<AugmentKind, u32>>,
}

impl BayGroup {
    pub fn new(location: Location, rear: bool) -> Self {
        Self {
            locations: vec![location],
            rear,
            weapons: BTreeMap::new(),
            ammo: BTreeMap::new(),
            augmentations: BTreeMap::new(),
        }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn rear(&self) -> bool {
        self.rear
    }

    pub fn weapons(&self) -> &BTreeMap<WeaponKind, u32> {
        &self.weapons
    }

    pub fn ammo(&self) -> &BTreeMap<WeaponKind, Vec<AmmoBin>> {
        &self.ammo
    }

    pub fn augmentations(&self) -> &BTreeMap<WeaponKind, BTreeMap<AugmentKind, u32>> {
        &self.augmentations
    }

    /// Add a weapon to the bay.
    ///
    /// Returns `true` if this is the first weapon of its kind in the bay,
    /// `false` if an existing count was incremented.
    pub fn add_weapon(&mut self, weapon: &MountedWeapon) -> bool {
        let as_new = match self.weapons.get_mut(&weapon.kind) {
            Some(count) => {
                *count += 1;
                false
            }
            None => {
                self.weapons.insert(weapon.kind.clone(), 1);
                true
            }
        };
        if let Some(device) = &weapon.linked_by {
            *self
                .augmentations
                .entry(weapon.kind.clone())
                .or_default()
                .entry(device.clone())
                .or_insert(0) += 1;
        }
        as_new
    }

    /// Add an ammunition bin feeding `weapon`.
    ///
    /// Ignored if the weapon does not use ammunition or the bin is empty.
    pub fn add_ammo(&mut self, weapon: &WeaponKind, bin: &AmmoBin) {
        if !weapon.uses_ammo || bin.shots_left <= 0 {
            return;
        }
        self.ammo
            .entry(weapon.clone())
            .or_default()
            .push(bin.clone());
    }

    /// Whether this bay is the lateral mirror of `other` and the two can print
    /// as one row (FLS/FRS, LBS/RBS, ...).
    ///
    /// Groups that already hold more than one location cannot be combined
    /// again.
    pub fn can_combine(&self, other: &BayGroup) -> bool {
        self.locations.len() == 1
            && other.locations.len() == 1
            && is_opposing(
                self.locations[0],
                other.locations[0],
                self.rear,
                other.rear,
            )
            && self.weapons == other.weapons
            && self.ammo_matches(other)
            && self.augmentations == other.augmentations
    }

    /// Compare ammunition by what prints: for each weapon kind the bins must
    /// pair off one to one by name and shots left, in any order.
    ///
    /// Pairing is greedy first-fit with no backtracking.
    fn ammo_matches(&self, other: &BayGroup) -> bool {
        if self.ammo.len() != other.ammo.len() {
            return false;
        }
        if !self.ammo.keys().eq(other.ammo.keys()) {
            return false;
        }
        for (weapon, bins) in &self.ammo {
            let Some(other_bins) = other.ammo.get(weapon) else {
                return false;
            };
            if bins.len() != other_bins.len() {
                return false;
            }
            let mut taken = vec![false; other_bins.len()];
            for bin in bins {
                let found = other_bins
                    .iter()
                    .enumerate()
                    .find(|(i, candidate)| !taken[*i] && bin.prints_like(candidate))
                    .map(|(i, _)| i);
                match found {
                    Some(i) => taken[i] = true,
                    None => return false,
                }
            }
        }
        true
    }

    /// Merge `other` into this group.
    ///
    /// Only the locations change, since a combinable bay holds the same
    /// weapons. Call only after [`BayGroup::can_combine`] has returned `true`;
    /// nothing is re-checked here.
    pub fn combine(&mut self, other: &BayGroup) {
        self.locations.extend_from_slice(&other.locations);
        let rear = self.rear;
        self.locations.sort_by_key(|loc| loc.weight(rear));
    }

    /// Total number of weapons in the bay.
    pub fn weapon_count(&self) -> u32 {
        self.weapons.values().sum()
    }

    /// Number of weapons in the bay linked to a device with `flag`.
    pub fn count_augmentations(&self, flag: AugmentFlag) -> u32 {
        self.augmentations
            .keys()
            .map(|weapon| self.count_augmentations_for(weapon, flag))
            .sum()
    }

    /// Number of weapons of kind `weapon` linked to a device with `flag`.
    pub fn count_augmentations_for(&self, weapon: &WeaponKind, flag: AugmentFlag) -> u32 {
        self.augmentations
            .get(weapon)
            .map(|devices| {
                devices
                    .iter()
                    .filter(|(device, _)| device.has_flag(flag))
                    .map(|(_, count)| *count)
                    .sum::<u32>()
            })
            .unwrap_or(0)
    }

    /// Whether every weapon in the bay is linked to a device with `flag`.
    pub fn all_have_augmentation(&self, flag: AugmentFlag) -> bool {
        self.count_augmentations(flag) == self.weapon_count()
    }

    /// Weight of the first location, used to order rows on the sheet.
    pub fn display_weight(&self) -> u8 {
        self.locations[0].weight(self.rear)
    }

    /// Order two groups for printing.
    pub fn display_cmp(&self, other: &BayGroup) -> Ordering {
        self.display_weight().cmp(&other.display_weight())
    }
}
