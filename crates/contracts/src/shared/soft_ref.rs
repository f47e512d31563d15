//! Soft references between collections.
//!
//! Records point at each other by display text (order code, entity name), never by
//! a structural key. A reference that matches nothing contributes nothing.

use serde::{Deserialize, Serialize};

/// How the referenced text is compared against the target key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRule {
    /// Byte-for-byte equality (entity names)
    Exact,
    /// Equality after uppercasing both sides (order codes)
    IgnoreCase,
}

/// A by-name reference to a record in another collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftRef<'a> {
    pub key: &'a str,
    pub rule: MatchRule,
}

impl<'a> SoftRef<'a> {
    pub fn exact(key: &'a str) -> Self {
        Self {
            key,
            rule: MatchRule::Exact,
        }
    }

    pub fn ignore_case(key: &'a str) -> Self {
        Self {
            key,
            rule: MatchRule::IgnoreCase,
        }
    }

    /// Does `candidate` point at this key? `None` never matches.
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        match self.rule {
            MatchRule::Exact => candidate == self.key,
            MatchRule::IgnoreCase => candidate.to_uppercase() == self.key.to_uppercase(),
        }
    }

    /// First record whose key matches, if any
    pub fn resolve<'r, T, F>(&self, records: &'r [T], key_of: F) -> Option<&'r T>
    where
        F: Fn(&T) -> &str,
    {
        records.iter().find(|r| self.matches(Some(key_of(r))))
    }

    /// Sum of `value_of` over the records whose reference matches; zero when none do
    pub fn join_sum<T, R, V>(&self, records: &[T], ref_of: R, value_of: V) -> i64
    where
        R: Fn(&T) -> Option<&str>,
        V: Fn(&T) -> i64,
    {
        records
            .iter()
            .filter(|r| self.matches(ref_of(r)))
            .map(value_of)
            .sum()
    }
}

/// Case-insensitive substring test used for task-type markers ("instal", "instala")
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_rule_is_case_sensitive() {
        let r = SoftRef::exact("ET Norte");
        assert!(r.matches(Some("ET Norte")));
        assert!(!r.matches(Some("ET NORTE")));
        assert!(!r.matches(None));
    }

    #[test]
    fn test_ignore_case_rule() {
        let r = SoftRef::ignore_case("PED-1001");
        assert!(r.matches(Some("ped-1001")));
        assert!(!r.matches(Some("PED-1002")));
    }

    #[test]
    fn test_join_sum_without_match_is_zero() {
        let rows = vec![(Some("A"), 3_i64), (None, 4), (Some("B"), 5)];
        let r = SoftRef::exact("C");
        assert_eq!(r.join_sum(&rows, |(k, _)| *k, |(_, v)| *v), 0);
        let r = SoftRef::exact("A");
        assert_eq!(r.join_sum(&rows, |(k, _)| *k, |(_, v)| *v), 3);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Instalación Módulo", "instal"));
        assert!(contains_ignore_case("PRE-INSTALADO", "instala"));
        assert!(contains_ignore_case("Instalar chapa", "instala"));
        assert!(!contains_ignore_case("Instalo marco", "instala"));
        assert!(!contains_ignore_case("Pintura", "instal"));
    }
}
