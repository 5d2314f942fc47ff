//! OID reconciliation.
//!
//! Decides which LFS objects still need a download link: everything the
//! repository references minus everything already linked locally. Pure set
//! arithmetic, no I/O.

use std::collections::{HashMap, HashSet};

/// Mapping from OID (hex string) to declared object size in bytes.
pub type OidMap = HashMap<String, u64>;

/// Compute the OIDs that still need a download link.
///
/// Returns `oids` with every member of `linked` removed. Order-independent:
/// the result only depends on the key sets involved.
pub fn missing_oids(oids: &OidMap, linked: &HashSet<String>) -> OidMap {
    oids.iter()
        .filter(|(oid, _)| !linked.contains(*oid))
        .map(|(oid, &size)| (oid.clone(), size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid_map(entries: &[(&str, u64)]) -> OidMap {
        entries
            .iter()
            .map(|(oid, size)| (oid.to_string(), *size))
            .collect()
    }

    #[test]
    fn test_missing_is_set_difference() {
        let oids = oid_map(&[("a", 10), ("b", 20), ("c", 30)]);
        let linked: HashSet<_> = ["a".to_string(), "c".to_string()].into();

        let missing = missing_oids(&oids, &linked);

        assert_eq!(missing, oid_map(&[("b", 20)]));
    }

    #[test]
    fn test_missing_disjoint_from_linked() {
        let oids = oid_map(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let linked: HashSet<_> = ["b".to_string(), "d".to_string()].into();

        let missing = missing_oids(&oids, &linked);

        assert!(missing.keys().all(|oid| !linked.contains(oid)));
        assert_eq!(missing.len(), oids.len() - linked.len());
    }

    #[test]
    fn test_nothing_linked_keeps_everything() {
        let oids = oid_map(&[("a", 10), ("b", 20)]);

        assert_eq!(missing_oids(&oids, &HashSet::new()), oids);
    }

    #[test]
    fn test_everything_linked_leaves_nothing() {
        let oids = oid_map(&[("a", 10), ("b", 20)]);
        let linked: HashSet<_> = oids.keys().cloned().collect();

        assert!(missing_oids(&oids, &linked).is_empty());
    }

    #[test]
    fn test_linked_oids_outside_set_are_ignored() {
        let oids = oid_map(&[("a", 10)]);
        let linked: HashSet<_> = ["z".to_string()].into();

        assert_eq!(missing_oids(&oids, &linked), oids);
    }
}
