//! The fixed property set produced for every component.
//!
//! Invariants: every key is always present, in a fixed order, holding
//! either a meaningful value or the explicit `"NA"` sentinel; and merging
//! into a component never regresses an existing meaningful value.

use super::component::Property;

/// The explicit placeholder meaning "value not determined", distinct from
/// absence.
pub const NA: &str = "NA";

/// The twelve enrichment property keys, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    PatchStatus,
    ReleaseDate,
    EndOfLifeDate,
    Criticality,
    UsageRestrictions,
    CommentsOrNotes,
    ExecutableProperty,
    ArchiveProperty,
    StructuredProperty,
    UniqueIdentifier,
    ComponentSupplier,
    ComponentOrigin,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 12] = [
        PropertyKey::PatchStatus,
        PropertyKey::ReleaseDate,
        PropertyKey::EndOfLifeDate,
        PropertyKey::Criticality,
        PropertyKey::UsageRestrictions,
        PropertyKey::CommentsOrNotes,
        PropertyKey::ExecutableProperty,
        PropertyKey::ArchiveProperty,
        PropertyKey::StructuredProperty,
        PropertyKey::UniqueIdentifier,
        PropertyKey::ComponentSupplier,
        PropertyKey::ComponentOrigin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::PatchStatus => "Patch Status",
            PropertyKey::ReleaseDate => "Release Date",
            PropertyKey::EndOfLifeDate => "End-of-Life Date",
            PropertyKey::Criticality => "Criticality",
            PropertyKey::UsageRestrictions => "Usage Restrictions",
            PropertyKey::CommentsOrNotes => "Comments or Notes",
            PropertyKey::ExecutableProperty => "Executable Property",
            PropertyKey::ArchiveProperty => "Archive Property",
            PropertyKey::StructuredProperty => "Structured Property",
            PropertyKey::UniqueIdentifier => "Unique Identifier",
            PropertyKey::ComponentSupplier => "Component Supplier",
            PropertyKey::ComponentOrigin => "Component Origin",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).expect("key in ALL")
    }
}

/// A complete enrichment record: all twelve keys, each holding a value or
/// the `"NA"` sentinel. Construction starts fully-"NA", so total provider
/// failure still yields a well-formed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySet {
    values: [String; 12],
}

impl PropertySet {
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| NA.to_string()),
        }
    }

    /// Set a key. Empty values collapse to the sentinel so the "always
    /// meaningful or NA" invariant holds by construction.
    pub fn set(&mut self, key: PropertyKey, value: impl Into<String>) {
        let value = value.into();
        self.values[key.index()] = if value.is_empty() {
            NA.to_string()
        } else {
            value
        };
    }

    /// Like `set`, treating `None` as the sentinel.
    pub fn set_opt(&mut self, key: PropertyKey, value: Option<String>) {
        match value {
            Some(v) => self.set(key, v),
            None => self.set(key, NA),
        }
    }

    pub fn get(&self, key: PropertyKey) -> &str {
        &self.values[key.index()]
    }

    /// Key/value pairs in the fixed output order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyKey, &str)> {
        PropertyKey::ALL
            .iter()
            .map(move |k| (*k, self.values[k.index()].as_str()))
    }

    /// Merge this set into a component's property list with upsert-by-key
    /// semantics. An existing value is replaced unless the replacement
    /// would regress a meaningful, non-"NA" value back to "NA" or empty;
    /// keys absent from the list are appended in output order.
    pub fn merge_into(&self, properties: &mut Vec<Property>) {
        for (key, value) in self.iter() {
            match properties.iter_mut().find(|p| p.name == key.as_str()) {
                Some(existing) => {
                    let regresses = (value.is_empty() || value == NA)
                        && !existing.value.is_empty()
                        && existing.value != NA;
                    if !regresses {
                        existing.value = value.to_string();
                    }
                }
                None => properties.push(Property {
                    name: key.as_str().to_string(),
                    value: value.to_string(),
                }),
            }
        }
    }
}

impl Default for PropertySet {
    fn default() -> Self {
        Self::new()
    }
}
