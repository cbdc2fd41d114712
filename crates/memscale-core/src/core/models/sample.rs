use super::formula::MolecularFormula;
use serde::{Deserialize, Serialize};

/// A molecule/memory pair confirmed by an actual calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct VerifiedSample {
    pub carbon_count: u32,
    pub memory_mb: f64,
}

impl VerifiedSample {
    pub const fn new(carbon_count: u32, memory_mb: f64) -> Self {
        Self {
            carbon_count,
            memory_mb,
        }
    }

    /// Memory cost per carbon atom in MB.
    #[inline]
    pub fn scaling_coefficient(&self) -> f64 {
        self.memory_mb / self.carbon_count as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    Verified,
    Estimated,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Verified => "verified",
            Provenance::Estimated => "estimated",
        }
    }
}

/// One point of the working sequence: either a seed carried over from the
/// verified table or a value produced by the extrapolation loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub formula: MolecularFormula,
    pub memory_mb: f64,
    pub provenance: Provenance,
}

impl Sample {
    pub fn verified(seed: &VerifiedSample) -> Self {
        Self {
            formula: MolecularFormula::new(seed.carbon_count),
            memory_mb: seed.memory_mb,
            provenance: Provenance::Verified,
        }
    }

    pub fn estimated(carbon_count: u32, memory_mb: f64) -> Self {
        Self {
            formula: MolecularFormula::new(carbon_count),
            memory_mb,
            provenance: Provenance::Estimated,
        }
    }

    #[inline]
    pub fn carbon_count(&self) -> u32 {
        self.formula.carbon_count()
    }

    pub fn label(&self) -> String {
        self.formula.label()
    }

    pub fn is_estimated(&self) -> bool {
        self.provenance == Provenance::Estimated
    }
}
