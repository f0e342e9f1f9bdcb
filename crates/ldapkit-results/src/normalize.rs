//! Normalization of raw search results into clean entries.
//!
//! This is the one piece of real logic in the crate: a pure recursive
//! transformation from the client's count-prefixed wire shape into an
//! [`Entry`] application code can consume without knowing the wire's
//! bookkeeping conventions.

use crate::entry::Entry;
use crate::raw::{RawElement, RawEntry};

/// Recursively normalize a raw entry.
///
/// Walks the elements of `raw` in wire order:
///
/// - empty slots are dropped entirely;
/// - a sub-entry with a non-empty distinguished name not yet present in the
///   accumulated mapping is stored keyed by that dn (first occurrence wins);
///   any other sub-entry is appended positionally, so a later duplicate dn
///   never overwrites the earlier keyed subtree;
/// - an attribute whose value block holds exactly one slot becomes a scalar.
///   A one-slot block is ambiguous on the wire between "one genuine value"
///   and "sentinel only"; the wire does not encode enough to tell them
///   apart, and downstream callers rely on the scalar reading, so it is kept
///   as is. Larger blocks become an ordered list of all slots but the last,
///   which is the wire's redundant dn sentinel, not a value.
///
/// Total over any well-formed raw shape; never fails.
pub fn normalize(raw: &RawEntry) -> Entry {
    let mut clean = Entry::new();

    for element in raw.elements() {
        match element {
            RawElement::Null => {}
            RawElement::Entry(sub) => {
                // Explicit lookup-before-insert: the dn keys the subtree only
                // if it is usable and still unclaimed at this level.
                match sub.dn().filter(|dn| !dn.is_empty()) {
                    Some(dn) if !clean.has(dn) => clean.insert(dn, normalize(sub)),
                    _ => clean.push(normalize(sub)),
                }
            }
            RawElement::Attribute { name, values } => match values.count() {
                // A zero-slot block never materializes a key.
                0 => {}
                1 => {
                    if let Some(value) = values.slot(0) {
                        clean.insert(name.clone(), value);
                    }
                }
                count => {
                    clean.insert(name.clone(), values.slots()[..count - 1].to_vec());
                }
            },
        }
    }

    clean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Value;
    use crate::raw::RawValues;

    const SENTINEL: &str = "cn";

    #[test]
    fn test_single_valued_attributes_become_scalars() {
        // {count:2, 0:"cn", cn:{count:2,...}, 1:"mail", mail:{count:1,...}}
        // but with cn also arriving single-slot.
        let raw = RawEntry::new()
            .with_attribute("cn", RawValues::single("Alice"))
            .with_attribute("mail", RawValues::single("a@x.com"));

        let clean = normalize(&raw);
        assert_eq!(clean.get_str("cn"), Some("Alice"));
        assert_eq!(clean.get_str("mail"), Some("a@x.com"));
        assert_eq!(clean.len(), 2);
    }

    #[test]
    fn test_multi_valued_attribute_drops_trailing_sentinel() {
        let raw = RawEntry::new().with_attribute(
            "mail",
            RawValues::new(["a@x.com", "b@x.com", "c@x.com", SENTINEL]),
        );

        let clean = normalize(&raw);
        assert_eq!(
            clean.get_list("mail"),
            Some(
                &[
                    "a@x.com".to_string(),
                    "b@x.com".to_string(),
                    "c@x.com".to_string()
                ][..]
            )
        );
    }

    #[test]
    fn test_two_slot_block_yields_one_element_list() {
        // Two slots means one genuine value plus the sentinel; the reference
        // shape still renders it as a list, not a scalar.
        let raw = RawEntry::new().with_attribute("mail", RawValues::new(["a@x.com", SENTINEL]));

        let clean = normalize(&raw);
        assert_eq!(clean.get_list("mail"), Some(&["a@x.com".to_string()][..]));
    }

    #[test]
    fn test_null_elements_are_dropped_everywhere() {
        let child = RawEntry::new()
            .with_dn("cn=Bob,dc=example,dc=com")
            .with_null()
            .with_attribute("cn", RawValues::single("Bob"));
        let raw = RawEntry::new()
            .with_null()
            .with_attribute("cn", RawValues::single("Alice"))
            .with_null()
            .with_child(child);

        let clean = normalize(&raw);
        assert_eq!(clean.len(), 2);
        assert_eq!(clean.positional().count(), 0);

        let sub = clean.get_entry("cn=Bob,dc=example,dc=com").unwrap();
        assert_eq!(sub.len(), 1);
        assert_eq!(sub.get_str("cn"), Some("Bob"));
    }

    #[test]
    fn test_sub_entry_keyed_by_dn_equals_normalizing_it_alone() {
        let child = RawEntry::new()
            .with_dn("cn=Bob,dc=example,dc=com")
            .with_attribute("cn", RawValues::single("Bob"))
            .with_attribute("mail", RawValues::new(["b@x.com", "b2@x.com", SENTINEL]));
        let raw = RawEntry::new().with_child(child.clone());

        let clean = normalize(&raw);
        let keyed = clean.get_entry("cn=Bob,dc=example,dc=com").unwrap();
        assert_eq!(keyed, &normalize(&child));
    }

    #[test]
    fn test_duplicate_dn_becomes_positional_without_overwriting() {
        let first = RawEntry::new()
            .with_dn("cn=Bob,dc=example,dc=com")
            .with_attribute("cn", RawValues::single("Bob"));
        let second = RawEntry::new()
            .with_dn("cn=Bob,dc=example,dc=com")
            .with_attribute("cn", RawValues::single("Robert"));
        let raw = RawEntry::new().with_child(first).with_child(second);

        let clean = normalize(&raw);

        // First occurrence holds the key.
        let keyed = clean.get_entry("cn=Bob,dc=example,dc=com").unwrap();
        assert_eq!(keyed.get_str("cn"), Some("Bob"));

        // Second occurrence lands positionally.
        let positional: Vec<&Value> = clean.positional().collect();
        assert_eq!(positional.len(), 1);
        let dup = positional[0].as_entry().unwrap();
        assert_eq!(dup.get_str("cn"), Some("Robert"));
    }

    #[test]
    fn test_sub_entry_without_dn_is_positional() {
        let raw = RawEntry::new()
            .with_child(RawEntry::new().with_attribute("cn", RawValues::single("Bob")))
            .with_child(
                RawEntry::new()
                    .with_dn("")
                    .with_attribute("cn", RawValues::single("Carol")),
            );

        let clean = normalize(&raw);
        let positional: Vec<&Value> = clean.positional().collect();
        assert_eq!(positional.len(), 2);
        assert_eq!(
            positional[0].as_entry().and_then(|e| e.get_str("cn")),
            Some("Bob")
        );
        assert_eq!(
            positional[1].as_entry().and_then(|e| e.get_str("cn")),
            Some("Carol")
        );
    }

    #[test]
    fn test_mixed_single_and_multi_valued_attributes() {
        // {count:2, 0:"cn", cn:{count:2,0:"Alice",1:<sentinel>},
        //  1:"mail", mail:{count:1,0:"a@x.com"}}
        let raw = RawEntry::new()
            .with_attribute("cn", RawValues::new(["Alice", SENTINEL]))
            .with_attribute("mail", RawValues::single("a@x.com"));

        let clean = normalize(&raw);
        assert_eq!(clean.get_list("cn"), Some(&["Alice".to_string()][..]));
        assert_eq!(clean.get_str("mail"), Some("a@x.com"));
    }

    #[test]
    fn test_three_real_values_keep_order() {
        let raw = RawEntry::new()
            .with_attribute("cn", RawValues::new(["a", "b", "c", SENTINEL]));

        let clean = normalize(&raw);
        assert_eq!(
            clean.get_list("cn"),
            Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
        );
    }

    #[test]
    fn test_deterministic_over_identical_input() {
        let raw = RawEntry::new()
            .with_attribute("cn", RawValues::new(["a", "b", SENTINEL]))
            .with_child(RawEntry::new().with_attribute("ou", RawValues::single("people")))
            .with_null()
            .with_child(
                RawEntry::new()
                    .with_dn("ou=x,dc=example,dc=com")
                    .with_attribute("ou", RawValues::single("x")),
            );

        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn test_empty_entry_normalizes_to_empty() {
        assert!(normalize(&RawEntry::new()).is_empty());
    }
}
