//! Alias-based field lookup over a [`RawRecord`].
//!
//! Resolution runs in two passes over the alias list:
//! 1. exact key match, in alias order (a present key wins even when its
//!    value is `0` or empty);
//! 2. case-insensitive key match, in alias order.
//!
//! An exact match always beats a case-insensitive one, regardless of where
//! either alias sits in the list.

use crate::raw::{RawRecord, RawValue};

/// How a value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    CaseInsensitive,
}

/// A successful lookup: the record key that matched and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub key: &'a str,
    pub value: &'a RawValue,
    pub kind: MatchKind,
}

/// Find the entry for the first matching alias, or `None`.
pub fn resolve_entry<'a, S: AsRef<str>>(record: &'a RawRecord, aliases: &[S]) -> Option<Resolved<'a>> {
    for alias in aliases {
        let alias = alias.as_ref();
        if let Some((key, value)) = record.iter().find(|(k, _)| *k == alias) {
            return Some(Resolved {
                key,
                value,
                kind: MatchKind::Exact,
            });
        }
    }

    let lowered: Vec<(String, &'a str, &'a RawValue)> = record
        .iter()
        .map(|(k, v)| (k.to_lowercase(), k, v))
        .collect();
    for alias in aliases {
        let alias_lowered = alias.as_ref().to_lowercase();
        if let Some((_, key, value)) = lowered.iter().find(|(k, _, _)| *k == alias_lowered) {
            return Some(Resolved {
                key: *key,
                value: *value,
                kind: MatchKind::CaseInsensitive,
            });
        }
    }
    None
}

/// The value for the first matching alias, or `None`.
pub fn resolve<'a, S: AsRef<str>>(record: &'a RawRecord, aliases: &[S]) -> Option<&'a RawValue> {
    resolve_entry(record, aliases).map(|r| r.value)
}
