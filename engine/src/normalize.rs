//! Result normalization: per-instance deduplication and canonical ordering.

use std::collections::{BTreeSet, HashMap};

use crate::record::{ResourceRecord, SchemeRow};

/// Folds raw Scheme rows into one record per instance IRI.
///
/// Relation markers of every row for an instance are unioned; label,
/// description, narrative and provenance come from the first row seen for
/// that instance. The result is sorted with [`sort_records`].
#[must_use]
pub fn merge_scheme_rows(rows: impl IntoIterator<Item = SchemeRow>) -> Vec<ResourceRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut records: Vec<ResourceRecord> = Vec::new();

    for row in rows {
        let slot = match index.get(&row.id) {
            Some(&slot) => slot,
            None => {
                index.insert(row.id.clone(), records.len());
                records.push(ResourceRecord {
                    description: row.description,
                    narrative: row.narrative,
                    provenance: row.provenance,
                    linked_relations: Some(BTreeSet::new()),
                    ..ResourceRecord::new(row.id, row.label)
                });
                records.len() - 1
            }
        };
        if let Some(relations) = records[slot].linked_relations.as_mut() {
            relations.insert(row.relation);
        }
    }

    sort_records(&mut records);
    records
}

/// Sorts records case-insensitively by label. Ties fall back to the raw
/// label and then the IRI so the order never depends on input order.
pub fn sort_records(records: &mut [ResourceRecord]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, label: &str, relation: &str, description: Option<&str>) -> SchemeRow {
        SchemeRow {
            id: id.into(),
            label: label.into(),
            description: description.map(str::to_string),
            narrative: None,
            provenance: None,
            relation: relation.into(),
        }
    }

    #[test]
    fn duplicate_rows_merge_relations() {
        let merged = merge_scheme_rows(vec![
            row("s1", "Ponzi", "involves", Some("first")),
            row("s2", "advance fee", "directSubclass", None),
            row("s1", "Ponzi alias", "exploits", Some("second")),
            row("s1", "Ponzi", "involves", None),
        ]);
        assert_eq!(merged.len(), 2);

        let ponzi = merged.iter().find(|r| r.id == "s1").unwrap();
        assert_eq!(ponzi.label, "Ponzi");
        assert_eq!(ponzi.description.as_deref(), Some("first"));
        let relations: Vec<_> = ponzi.linked_relations.iter().flatten().cloned().collect();
        assert_eq!(relations, vec!["exploits", "involves"]);
    }

    #[test]
    fn output_is_case_insensitively_sorted() {
        let merged = merge_scheme_rows(vec![
            row("s1", "zeta", "p", None),
            row("s2", "Alpha", "p", None),
            row("s3", "beta", "p", None),
        ]);
        let labels: Vec<_> = merged.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn same_label_different_iri_is_not_merged() {
        let merged = merge_scheme_rows(vec![row("s2", "Twin", "p", None), row("s1", "Twin", "q", None)]);
        let ids: Vec<_> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn no_rows_no_records() {
        assert!(merge_scheme_rows(Vec::new()).is_empty());
    }
}
