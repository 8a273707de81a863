//! The five resource facets searched for every category.

use std::fmt;

use serde::Serialize;

/// A resource kind searched for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    /// Fraud scheme examples (`FederalFraudScheme`).
    Scheme,
    /// Fraud awareness resources (`FraudEducation`).
    Awareness,
    /// Fraud prevention and detection guidance (`FraudDetection`).
    Detection,
    /// Fraud risk management principles. Category-independent.
    RiskPrinciple,
    /// Audit reports (`AuditProduct`).
    Report,
}

impl Facet {
    /// Every facet in reporting order.
    pub const ALL: [Facet; 5] = [
        Facet::Scheme,
        Facet::Awareness,
        Facet::Detection,
        Facet::RiskPrinciple,
        Facet::Report,
    ];

    /// Human-readable facet title.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Facet::Scheme => "Fraud Scheme Examples",
            Facet::Awareness => "Fraud Awareness Resources",
            Facet::Detection => "Fraud Prevention & Detection Guidance",
            Facet::RiskPrinciple => "Fraud Risk Mgmt Principles",
            Facet::Report => "GAO Reports",
        }
    }

    /// Position in [`Facet::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true if results ignore the selected category.
    #[must_use]
    pub fn is_category_independent(self) -> bool {
        self == Facet::RiskPrinciple
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
