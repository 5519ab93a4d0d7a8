//! The patch tree produced by comparing two values.

use super::{Path, Summary};
use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Patch describes how one value turned into another.
///
/// `Added` and `Removed` only ever appear as children of a `MapChange`;
/// comparing two values at the top level yields `Equal`, `PrimitiveChange`
/// or `MapChange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "changed", rename_all = "snake_case")]
pub enum Patch {
    /// Both sides were equal.
    Equal { value: Value },

    /// The key only exists on the new side.
    Added { value: Value },

    /// The key only exists on the old side.
    Removed { value: Value },

    /// The values differ and cannot be compared key by key.
    PrimitiveChange { removed: Value, added: Value },

    /// Both sides are keyed and at least one key differs.
    ///
    /// `value` holds a child patch for every key of either side. `added` and
    /// `removed` hold the new and old values of every key whose child is not
    /// `Equal`. For records, `type_tag` is set and `added`/`removed` are the
    /// complete new and old records instead.
    MapChange {
        value: BTreeMap<String, Patch>,
        added: Value,
        removed: Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        type_tag: Option<String>,
    },
}

/// PatchKind is the tag of a patch without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatchKind {
    Equal,
    Added,
    Removed,
    PrimitiveChange,
    MapChange,
}

impl PatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchKind::Equal => "equal",
            PatchKind::Added => "added",
            PatchKind::Removed => "removed",
            PatchKind::PrimitiveChange => "primitive_change",
            PatchKind::MapChange => "map_change",
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Patch {
    pub fn kind(&self) -> PatchKind {
        match self {
            Patch::Equal { .. } => PatchKind::Equal,
            Patch::Added { .. } => PatchKind::Added,
            Patch::Removed { .. } => PatchKind::Removed,
            Patch::PrimitiveChange { .. } => PatchKind::PrimitiveChange,
            Patch::MapChange { .. } => PatchKind::MapChange,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Patch::Equal { .. })
    }

    pub fn is_changed(&self) -> bool {
        !self.is_equal()
    }

    /// Returns the record type tag of a record-level `MapChange`.
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            Patch::MapChange { type_tag, .. } => type_tag.as_deref(),
            _ => None,
        }
    }

    /// Returns the child patches of a `MapChange`.
    pub fn children(&self) -> Option<&BTreeMap<String, Patch>> {
        match self {
            Patch::MapChange { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the child patch for `key` of a `MapChange`.
    pub fn child(&self, key: &str) -> Option<&Patch> {
        self.children().and_then(|children| children.get(key))
    }

    /// Follows `keys` through nested `MapChange`s.
    pub fn get_path(&self, keys: &[&str]) -> Option<&Patch> {
        keys.iter().try_fold(self, |patch, key| patch.child(key))
    }

    /// Returns the old side of this node, if it had one.
    ///
    /// For a `MapChange` this is the `removed` summary, not the full old value.
    pub fn old_value(&self) -> Option<&Value> {
        match self {
            Patch::Equal { value } | Patch::Removed { value } => Some(value),
            Patch::Added { .. } => None,
            Patch::PrimitiveChange { removed, .. } | Patch::MapChange { removed, .. } => {
                Some(removed)
            }
        }
    }

    /// Returns the new side of this node, if it had one.
    ///
    /// For a `MapChange` this is the `added` summary, not the full new value.
    pub fn new_value(&self) -> Option<&Value> {
        match self {
            Patch::Equal { value } | Patch::Added { value } => Some(value),
            Patch::Removed { .. } => None,
            Patch::PrimitiveChange { added, .. } | Patch::MapChange { added, .. } => Some(added),
        }
    }

    /// Flattens the patch into added, removed and modified key paths.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::new();
        self.collect_summary(Path::new(), &mut summary);
        summary
    }

    fn collect_summary(&self, path: Path, summary: &mut Summary) {
        match self {
            Patch::Equal { .. } => {}
            Patch::Added { .. } => {
                summary.added.insert(path);
            }
            Patch::Removed { .. } => {
                summary.removed.insert(path);
            }
            Patch::PrimitiveChange { .. } => {
                summary.modified.insert(path);
            }
            Patch::MapChange { value, .. } => {
                for (key, child) in value {
                    child.collect_summary(path.with(key.as_str()), summary);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;
    use pretty_assertions::assert_eq;

    fn sample() -> Patch {
        Patch::MapChange {
            value: BTreeMap::from([
                ("a".to_string(), Patch::Equal { value: Value::Int(1) }),
                (
                    "b".to_string(),
                    Patch::MapChange {
                        value: BTreeMap::from([(
                            "c".to_string(),
                            Patch::Added { value: Value::Int(2) },
                        )]),
                        added: Value::map([("c", 2)]),
                        removed: Value::Map(Map::new()),
                        type_tag: None,
                    },
                ),
            ]),
            added: Value::map([("b", Value::map([("c", 2)]))]),
            removed: Value::map([("b", Value::Map(Map::new()))]),
            type_tag: None,
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(sample().kind(), PatchKind::MapChange);
        assert_eq!(PatchKind::PrimitiveChange.to_string(), "primitive_change");
        assert_eq!(Patch::Equal { value: Value::Null }.kind().to_string(), "equal");
    }

    #[test]
    fn test_navigation() {
        let patch = sample();
        assert!(patch.is_changed());
        assert_eq!(patch.child("a"), Some(&Patch::Equal { value: Value::Int(1) }));
        assert_eq!(
            patch.get_path(&["b", "c"]),
            Some(&Patch::Added { value: Value::Int(2) })
        );
        assert_eq!(patch.get_path(&[]), Some(&patch));
        assert_eq!(patch.get_path(&["a", "x"]), None);
        assert_eq!(patch.get_path(&["missing"]), None);
    }

    #[test]
    fn test_sides() {
        let added = Patch::Added { value: Value::Int(2) };
        assert_eq!(added.old_value(), None);
        assert_eq!(added.new_value(), Some(&Value::Int(2)));

        let removed = Patch::Removed { value: Value::Int(3) };
        assert_eq!(removed.old_value(), Some(&Value::Int(3)));
        assert_eq!(removed.new_value(), None);

        let change = Patch::PrimitiveChange {
            removed: Value::Int(3),
            added: Value::from("x"),
        };
        assert_eq!(change.old_value(), Some(&Value::Int(3)));
        assert_eq!(change.new_value(), Some(&Value::from("x")));

        assert_eq!(
            sample().new_value(),
            Some(&Value::map([("b", Value::map([("c", 2)]))]))
        );
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "changed": "map_change",
                "value": {
                    "a": {"changed": "equal", "value": 1},
                    "b": {
                        "changed": "map_change",
                        "value": {"c": {"changed": "added", "value": 2}},
                        "added": {"c": 2},
                        "removed": {}
                    }
                },
                "added": {"b": {"c": 2}},
                "removed": {"b": {}}
            })
        );
    }

    #[test]
    fn test_serialize_record_change() {
        let patch = Patch::MapChange {
            value: BTreeMap::from([(
                "a".to_string(),
                Patch::PrimitiveChange {
                    removed: Value::Int(1),
                    added: Value::Int(2),
                },
            )]),
            added: Value::record("Foo", [("a", 2)]),
            removed: Value::record("Foo", [("a", 1)]),
            type_tag: Some("Foo".to_string()),
        };
        assert_eq!(patch.type_tag(), Some("Foo"));

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["type_tag"], "Foo");
        assert_eq!(json["added"], serde_json::json!({"__type__": "Foo", "a": 2}));
        assert_eq!(
            json["value"]["a"],
            serde_json::json!({"changed": "primitive_change", "removed": 1, "added": 2})
        );
    }
}
