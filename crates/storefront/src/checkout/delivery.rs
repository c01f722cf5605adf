//! Delivery fee table.
//!
//! Flat per-district pricing for islandwide courier delivery. The table is
//! the commercial source of truth; districts it does not know about fall
//! back to the standard rate rather than failing checkout.

use deneth_core::Rupees;

/// Standard rate applied when a district is not in the table.
pub const DEFAULT_FEE: Rupees = Rupees::new(350);

/// District preselected on the checkout form.
pub const DEFAULT_DISTRICT: &str = "Colombo 1-15";

/// District name to flat delivery fee, in rupees.
const RATES: &[(&str, i64)] = &[
    ("Colombo 1-15", 250),
    ("Colombo (Suburb)", 300),
    ("Gampaha", 350),
    ("Kalutara", 350),
    ("Kandy", 350),
    ("Galle", 350),
    ("Matara", 350),
    ("Hambantota", 350),
    ("Jaffna", 400),
    ("Mannar", 400),
    ("Trincomalee", 400),
    ("Vavuniya", 400),
    ("Ampara", 400),
    ("Batticaloa", 400),
    ("Kilinochchi", 400),
    ("Mullaitivu", 400),
    ("Kurunegala", 350),
    ("Puttalam", 350),
    ("Anuradhapura", 350),
    ("Polonnaruwa", 350),
    ("Badulla", 350),
    ("Monaragala", 350),
    ("Ratnapura", 350),
    ("Kegalle", 350),
    ("Matale", 350),
    ("Nuwara Eliya", 350),
];

/// Delivery fee for a district. Unknown districts get [`DEFAULT_FEE`].
#[must_use]
pub fn fee_for(district: &str) -> Rupees {
    RATES
        .iter()
        .find(|(name, _)| *name == district)
        .map_or(DEFAULT_FEE, |(_, fee)| Rupees::new(*fee))
}

/// All deliverable districts, sorted alphabetically for the form dropdown.
#[must_use]
pub fn districts() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = RATES.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_tiers() {
        assert_eq!(fee_for("Colombo 1-15"), Rupees::new(250));
        assert_eq!(fee_for("Colombo (Suburb)"), Rupees::new(300));
        assert_eq!(fee_for("Kandy"), Rupees::new(350));
        assert_eq!(fee_for("Jaffna"), Rupees::new(400));
        assert_eq!(fee_for("Kilinochchi"), Rupees::new(400));
    }

    #[test]
    fn test_unknown_district_uses_default() {
        assert_eq!(fee_for("Atlantis"), DEFAULT_FEE);
        assert_eq!(fee_for(""), DEFAULT_FEE);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // the form only offers table entries, so no fuzzy matching
        assert_eq!(fee_for("jaffna"), DEFAULT_FEE);
    }

    #[test]
    fn test_districts_sorted_and_complete() {
        let names = districts();
        assert_eq!(names.len(), 26);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&DEFAULT_DISTRICT));
    }
}
