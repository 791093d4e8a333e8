//! Record sheet print logic for MegaMekLab.
//!
//! This crate holds the parts of sheet printing that do not depend on the
//! UI or the SVG pipeline. Functions take plain equipment data and return
//! plain row data, so they can be tested without building a unit in the
//! editor.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`bay`] | `BayGroup`: weapon, ammo and linked-device aggregation for one bay |
//! | [`design`] | Unit designs read from JSON, with validation |
//! | [`equipment`] | Weapon kinds, ammo bins, linked devices and their flags |
//! | [`location`] | Bay locations, display weights, opposing sides |
//! | [`sheet`] | Scan, mirror-bay merge and row text for the weapon table |

pub mod bay;
pub mod design;
pub mod equipment;
pub mod location;
pub mod sheet;
