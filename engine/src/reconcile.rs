//! Reconciliation report types: per-facet comparison rows, membership status,
//! and summary aggregation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::config::{ComparisonConfig, ComparisonKey};
use crate::facet::Facet;
use crate::record::ResourceRecord;

/// Label of the trailing summary row.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Which policies returned an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MembershipStatus {
    /// Returned by both policies.
    Both,
    /// Returned by the Modern policy only.
    ModernOnly,
    /// Returned by the Legacy policy only.
    LegacyOnly,
}

impl MembershipStatus {
    fn classify(in_modern: bool, in_legacy: bool) -> Self {
        match (in_modern, in_legacy) {
            (true, true) => MembershipStatus::Both,
            (true, false) => MembershipStatus::ModernOnly,
            // A key comes from at least one side, so (false, false) cannot occur.
            (false, _) => MembershipStatus::LegacyOnly,
        }
    }

    /// Human-readable status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MembershipStatus::Both => "Both",
            MembershipStatus::ModernOnly => "Modern Only",
            MembershipStatus::LegacyOnly => "Legacy Only",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a facet comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Comparison key (label or IRI, per [`ComparisonKey`]).
    pub key: String,
    /// Display label.
    pub label: String,
    /// Present in the Modern results.
    pub in_modern: bool,
    /// Present in the Legacy results.
    pub in_legacy: bool,
    /// Membership status.
    pub status: MembershipStatus,
    /// Description, truncated for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sorted, comma-joined relation markers (Scheme facet only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_relations: Option<String>,
}

/// The comparison table of one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetComparison {
    /// Facet compared.
    pub facet: Facet,
    /// Rows sorted case-insensitively by label.
    pub rows: Vec<ComparisonRow>,
}

impl FacetComparison {
    /// Number of rows returned by the Modern policy.
    #[must_use]
    pub fn modern_count(&self) -> usize {
        self.rows.iter().filter(|r| r.in_modern).count()
    }

    /// Number of rows returned by the Legacy policy.
    #[must_use]
    pub fn legacy_count(&self) -> usize {
        self.rows.iter().filter(|r| r.in_legacy).count()
    }

    /// Number of rows with `status`.
    #[must_use]
    pub fn count(&self, status: MembershipStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }
}

/// Compares the two policies' results for one facet.
///
/// Records are keyed per `options.key`; when several records on one side
/// share a key, the last one wins. The description prefers the Modern
/// record's and is truncated to `options.description_limit` characters plus
/// `...`. Linked relations prefer the Modern record's.
#[must_use]
pub fn compare_facet(
    facet: Facet,
    modern: &[ResourceRecord],
    legacy: &[ResourceRecord],
    options: &ComparisonConfig,
) -> FacetComparison {
    let key_of = |r: &ResourceRecord| match options.key {
        ComparisonKey::Label => r.label.clone(),
        ComparisonKey::Id => r.id.clone(),
    };
    let modern_by_key: BTreeMap<String, &ResourceRecord> =
        modern.iter().map(|r| (key_of(r), r)).collect();
    let legacy_by_key: BTreeMap<String, &ResourceRecord> =
        legacy.iter().map(|r| (key_of(r), r)).collect();

    let mut keys: Vec<&String> = modern_by_key.keys().chain(legacy_by_key.keys()).collect();
    keys.sort();
    keys.dedup();

    let mut rows: Vec<ComparisonRow> = keys
        .into_iter()
        .map(|key| {
            let m = modern_by_key.get(key).copied();
            let l = legacy_by_key.get(key).copied();
            let label = m.or(l).map(|r| r.label.clone()).unwrap_or_else(|| key.clone());
            let description = m
                .and_then(|r| non_empty(&r.description))
                .or_else(|| l.and_then(|r| non_empty(&r.description)))
                .map(|d| truncate(d, options.description_limit));
            let linked_relations = m
                .and_then(|r| r.linked_relations.as_ref())
                .or_else(|| l.and_then(|r| r.linked_relations.as_ref()))
                .map(|set| set.iter().map(String::as_str).collect::<Vec<_>>().join(", "));
            ComparisonRow {
                key: key.clone(),
                label,
                in_modern: m.is_some(),
                in_legacy: l.is_some(),
                status: MembershipStatus::classify(m.is_some(), l.is_some()),
                description,
                linked_relations,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        (a.label.to_lowercase(), &a.label, &a.key).cmp(&(b.label.to_lowercase(), &b.label, &b.key))
    });
    FacetComparison { facet, rows }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Cuts `text` to `limit` characters followed by `...` when it is longer.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte, _)) => format!("{}...", &text[..byte]),
        None => text.to_string(),
    }
}

/// One summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Facet display name, or [`TOTAL_LABEL`].
    pub facet: String,
    /// Modern-side matches.
    pub modern_count: usize,
    /// Legacy-side matches.
    pub legacy_count: usize,
}

/// Per-facet counts plus a totals row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    /// One row per facet, in input order.
    pub rows: Vec<SummaryRow>,
    /// Sum over all facets.
    pub total: SummaryRow,
}

impl ComparisonSummary {
    /// Facet rows followed by the totals row.
    pub fn iter_with_total(&self) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().chain(std::iter::once(&self.total))
    }
}

/// Aggregates facet comparisons into summary counts.
#[must_use]
pub fn summarize(comparisons: &[FacetComparison]) -> ComparisonSummary {
    let rows: Vec<SummaryRow> = comparisons
        .iter()
        .map(|c| SummaryRow {
            facet: c.facet.display_name().to_string(),
            modern_count: c.modern_count(),
            legacy_count: c.legacy_count(),
        })
        .collect();
    let total = SummaryRow {
        facet: TOTAL_LABEL.to_string(),
        modern_count: rows.iter().map(|r| r.modern_count).sum(),
        legacy_count: rows.iter().map(|r| r.legacy_count).sum(),
    };
    ComparisonSummary { rows, total }
}
