//! Unit designs as the print pass sees them.
//!
//! The rules engine normally hands the sheet a fully built entity. For
//! headless runs and tests, designs are read from JSON instead: a list of
//! named units, each with the weapon bays it mounts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bay::BayGroup;
use crate::equipment::WeaponBay;
use crate::location::Location;
use crate::sheet::{bay_rows, prepare_bays, BayRow};

/// A unit and its weapon bays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDesign {
    pub name: String,
    #[serde(default)]
    pub bays: Vec<WeaponBay>,
}

impl UnitDesign {
    /// Grouped and merged bays, in print order.
    pub fn bay_groups(&self) -> Vec<BayGroup> {
        log::info!("Preparing weapon bays for {}", self.name);
        prepare_bays(&self.bays)
    }

    /// The rows of this unit's weapon table.
    pub fn weapon_table(&self) -> Vec<BayRow> {
        bay_rows(&self.bay_groups())
    }
}

/// Failure to read a design file.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("Failed to parse unit designs: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No unit designs found")]
    Empty,
}

/// A problem with a design that would print a misleading weapon table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignIssue {
    /// Unit name is blank.
    EmptyName,
    /// Bay with no weapons in it.
    EmptyBay { location: Location, rear: bool },
    /// Ammo bin that feeds no weapon in its bay.
    OrphanAmmo { location: Location, ammo: String },
    /// Two bays reported for the same location and facing.
    DuplicateBay { location: Location, rear: bool },
}

/// Parse a JSON array of unit designs.
pub fn load_designs(json: &str) -> Result<Vec<UnitDesign>, DesignError> {
    let designs: Vec<UnitDesign> = serde_json::from_str(json)?;
    if designs.is_empty() {
        return Err(DesignError::Empty);
    }
    Ok(designs)
}

/// Validate a design, returning all issues found.
pub fn validate_design(design: &UnitDesign) -> Vec<DesignIssue> {
    let mut issues = Vec::new();

    if design.name.trim().is_empty() {
        issues.push(DesignIssue::EmptyName);
    }

    let mut seen: Vec<(Location, bool)> = Vec::new();
    for bay in &design.bays {
        let key = (bay.location, bay.rear);
        if seen.contains(&key) {
            issues.push(DesignIssue::DuplicateBay {
                location: bay.location,
                rear: bay.rear,
            });
        } else {
            seen.push(key);
        }

        if bay.weapons.is_empty() {
            issues.push(DesignIssue::EmptyBay {
                location: bay.location,
                rear: bay.rear,
            });
        }

        for bin in &bay.ammo {
            if bay.weapon_kind(&bin.weapon_id).is_none() {
                issues.push(DesignIssue::OrphanAmmo {
                    location: bay.location,
                    ammo: bin.name.clone(),
                });
            }
        }
    }

    issues
}
