//! Torque unit conversion between SI (N·m) and datasheet (kg·cm) units.

use crate::constants::NM_TO_KGCM;

/// Convert a torque in N·m to kg·cm.
#[must_use]
pub fn nm_to_kgcm(nm: f64) -> f64 {
    nm * NM_TO_KGCM
}

/// Convert a torque in kg·cm to N·m.
#[must_use]
pub fn kgcm_to_nm(kgcm: f64) -> f64 {
    kgcm / NM_TO_KGCM
}
