use std::fmt;

/// Molecular formula of a member of the coronene family (C6n²H6n).
///
/// Only the carbon count is stored; the hydrogen count follows from the
/// geometric scaling of the hexagonal flake, `H = round(sqrt(C / 6) * 6)`.
/// For carbon counts that are not of the form 6n² the hydrogen count is an
/// approximation used purely for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MolecularFormula {
    carbon_count: u32,
}

impl MolecularFormula {
    pub fn new(carbon_count: u32) -> Self {
        Self { carbon_count }
    }

    pub fn carbon_count(&self) -> u32 {
        self.carbon_count
    }

    pub fn hydrogen_count(&self) -> u32 {
        hydrogen_count_for(self.carbon_count)
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MolecularFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}H{}", self.carbon_count, self.hydrogen_count())
    }
}

pub fn hydrogen_count_for(carbon_count: u32) -> u32 {
    let rings_per_edge = (carbon_count as f64 / 6.0).sqrt();
    (rings_per_edge * 6.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrogen_count_matches_coronene_family() {
        assert_eq!(hydrogen_count_for(24), 12);
        assert_eq!(hydrogen_count_for(54), 18);
        assert_eq!(hydrogen_count_for(96), 24);
        assert_eq!(hydrogen_count_for(384), 48);
    }

    #[test]
    fn label_is_rendered_as_plain_formula() {
        assert_eq!(MolecularFormula::new(150).label(), "C150H30");
        assert_eq!(MolecularFormula::new(216).to_string(), "C216H36");
    }

    #[test]
    fn hydrogen_count_rounds_for_irregular_carbon_counts() {
        // sqrt(100 / 6) * 6 = 24.49...
        assert_eq!(hydrogen_count_for(100), 24);
        // sqrt(110 / 6) * 6 = 25.69...
        assert_eq!(hydrogen_count_for(110), 26);
    }

    #[test]
    fn zero_carbons_yield_zero_hydrogens() {
        assert_eq!(MolecularFormula::new(0).label(), "C0H0");
    }
}
