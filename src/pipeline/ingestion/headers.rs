use std::collections::HashMap;

use tracing::debug;

use crate::domain::CanonicalField;

/// The per-file outcome of header standardization: which raw column supplies
/// each canonical field. Chosen headers are stored in lowered form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderResolution {
    chosen: HashMap<CanonicalField, String>,
}

impl HeaderResolution {
    /// The lowered raw header chosen to supply a canonical field, if any.
    pub fn header_for(&self, field: CanonicalField) -> Option<&str> {
        self.chosen.get(&field).map(|header| header.as_str())
    }

    /// Reverse lookup used during row construction: the canonical field a
    /// lowered raw header was chosen to supply. At most one field can claim a
    /// given header string, so the scan is unambiguous.
    pub fn field_for(&self, lowered_header: &str) -> Option<CanonicalField> {
        self.chosen
            .iter()
            .find(|(_, header)| header.as_str() == lowered_header)
            .map(|(field, _)| *field)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    fn assign(&mut self, field: CanonicalField, header: String) {
        self.chosen.insert(field, header);
    }
}

/// Map raw header strings onto canonical fields by keyword containment.
///
/// Matching is case-insensitive: each header is lowered, then scanned against
/// the canonical fields in declared order, and assigned to the first field
/// with a keyword contained in it. Headers matching no field are dropped.
/// When several headers match the same field, the last one in header order
/// wins the assignment.
pub fn standardize(headers: &[&str]) -> HeaderResolution {
    let mut resolution = HeaderResolution::default();
    for header in headers {
        let lowered = header.to_lowercase();
        let matched = CanonicalField::ALL
            .iter()
            .copied()
            .find(|field| field.keywords().iter().any(|keyword| lowered.contains(keyword)));
        match matched {
            Some(field) => resolution.assign(field, lowered),
            None => debug!(header = %lowered, "header matched no canonical field; dropped"),
        }
    }
    resolution
}
