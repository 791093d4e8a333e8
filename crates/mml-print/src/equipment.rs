//! Equipment data consumed by the print pass.
//!
//! The rules engine owns the real equipment definitions. These types carry
//! just the fields the weapon table needs: identities to group weapons by,
//! the capability flags of linked devices, and the shots left in each bin.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Capability flags of equipment that links to a single weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AugmentFlag {
    ArtemisIv,
    ArtemisV,
    ArtemisProto,
    ApolloFcs,
    PpcCapacitor,
    LaserInsulator,
    RiscLaserPulseModule,
}

impl AugmentFlag {
    pub fn all() -> &'static [AugmentFlag] {
        &[
            Self::ArtemisIv,
            Self::ArtemisV,
            Self::ArtemisProto,
            Self::ApolloFcs,
            Self::PpcCapacitor,
            Self::LaserInsulator,
            Self::RiscLaserPulseModule,
        ]
    }

    /// Label printed in the notes of a bay row.
    pub fn label(self) -> &'static str {
        match self {
            Self::ArtemisIv => "Artemis IV",
            Self::ArtemisV => "Artemis V",
            Self::ArtemisProto => "Prototype Artemis",
            Self::ApolloFcs => "Apollo FCS",
            Self::PpcCapacitor => "PPC Capacitor",
            Self::LaserInsulator => "Laser Insulator",
            Self::RiscLaserPulseModule => "RISC LPM",
        }
    }
}

/// A kind of device that can be linked to a weapon (Artemis, capacitors, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AugmentKind {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub flags: BTreeSet<AugmentFlag>,
}

impl AugmentKind {
    pub fn new(id: &str, name: &str, flags: &[AugmentFlag]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            flags: flags.iter().copied().collect(),
        }
    }

    pub fn has_flag(&self, flag: AugmentFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// A weapon type. Two mounted weapons with the same kind are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeaponKind {
    pub id: String,
    pub name: String,
    /// Whether the weapon feeds from ammunition bins.
    #[serde(default)]
    pub uses_ammo: bool,
}

impl WeaponKind {
    pub fn new(id: &str, name: &str, uses_ammo: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            uses_ammo,
        }
    }
}

/// One ammunition bin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmmoBin {
    /// Short display name, e.g. "LRM-20 Ammo".
    pub name: String,
    /// Id of the weapon kind this bin feeds.
    pub weapon_id: String,
    /// Shots remaining. Spent bins report zero (or less, for damaged bins).
    pub shots_left: i32,
}

impl AmmoBin {
    pub fn new(name: &str, weapon_id: &str, shots_left: i32) -> Self {
        Self {
            name: name.to_string(),
            weapon_id: weapon_id.to_string(),
            shots_left,
        }
    }

    /// Whether two bins print identically: same name, same shots.
    pub fn prints_like(&self, other: &AmmoBin) -> bool {
        self.name == other.name && self.shots_left == other.shots_left
    }
}

/// A weapon as mounted on a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountedWeapon {
    pub kind: WeaponKind,
    /// Device linked to this particular weapon, if any.
    #[serde(default)]
    pub linked_by: Option<AugmentKind>,
}

impl MountedWeapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            linked_by: None,
        }
    }

    pub fn linked(kind: WeaponKind, device: AugmentKind) -> Self {
        Self {
            kind,
            linked_by: Some(device),
        }
    }
}

/// A weapon bay as reported by the rules engine: every weapon and ammunition
/// bin mounted at one (location, facing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponBay {
    pub location: Location,
    #[serde(default)]
    pub rear: bool,
    #[serde(default)]
    pub weapons: Vec<MountedWeapon>,
    #[serde(default)]
    pub ammo: Vec<AmmoBin>,
}

impl WeaponBay {
    pub fn new(location: Location, rear: bool) -> Self {
        Self {
            location,
            rear,
            weapons: Vec::new(),
            ammo: Vec::new(),
        }
    }

    /// Find the kind of a weapon in this bay by id.
    pub fn weapon_kind(&self, weapon_id: &str) -> Option<&WeaponKind> {
        self.weapons
            .iter()
            .map(|w| &w.kind)
            .find(|k| k.id == weapon_id)
    }
}
