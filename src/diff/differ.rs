//! Recursive comparison of two values.

use crate::patch::Patch;
use crate::value::{Map, Record, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Compares `old` against `new` and returns the patch between them.
///
/// Checks run in a fixed order:
///
/// 1. equal values give `Equal`;
/// 2. if either side is not keyed, the result is a `PrimitiveChange`;
/// 3. a record compared with a record of another tag, or with a plain map,
///    is a `PrimitiveChange`;
/// 4. records of the same tag are compared field by field and the resulting
///    `MapChange` carries the tag and the complete old and new records;
/// 5. maps are compared key by key.
///
/// The function is total. Recursion depth follows the nesting depth of the
/// inputs.
pub fn compare(old: &Value, new: &Value) -> Patch {
    let patch = compare_values(old, new);
    debug!(verdict = %patch.kind(), "compared values");
    patch
}

impl Value {
    /// Compares this value, as the old side, against `new`.
    pub fn compare(&self, new: &Value) -> Patch {
        compare(self, new)
    }
}

fn compare_values(old: &Value, new: &Value) -> Patch {
    if old == new {
        return Patch::Equal { value: old.clone() };
    }

    match (old, new) {
        (Value::Map(lhs), Value::Map(rhs)) => match compare_maps(lhs, rhs) {
            Some(changes) => changes.into_patch(),
            None => Patch::Equal { value: old.clone() },
        },
        (Value::Record(lhs), Value::Record(rhs)) if lhs.type_tag == rhs.type_tag => {
            compare_records(lhs, rhs, old, new)
        }
        _ => Patch::PrimitiveChange {
            removed: old.clone(),
            added: new.clone(),
        },
    }
}

fn compare_records(lhs: &Record, rhs: &Record, old: &Value, new: &Value) -> Patch {
    trace!(type_tag = %lhs.type_tag, "comparing records");
    match compare_maps(&lhs.fields, &rhs.fields) {
        Some(changes) => Patch::MapChange {
            value: changes.value,
            added: new.clone(),
            removed: old.clone(),
            type_tag: Some(lhs.type_tag.clone()),
        },
        None => Patch::Equal { value: old.clone() },
    }
}

/// Per-key results of a keyed comparison that found a difference.
struct MapChanges {
    value: BTreeMap<String, Patch>,
    added: Map,
    removed: Map,
}

impl MapChanges {
    fn into_patch(self) -> Patch {
        Patch::MapChange {
            value: self.value,
            added: Value::Map(self.added),
            removed: Value::Map(self.removed),
            type_tag: None,
        }
    }
}

/// Compares two key sets. Returns `None` when every key compared equal.
fn compare_maps(old: &Map, new: &Map) -> Option<MapChanges> {
    trace!(old_keys = old.len(), new_keys = new.len(), "comparing keyed values");

    let mut value = BTreeMap::new();
    let mut added = Map::new();
    let mut removed = Map::new();

    for (key, old_val) in old {
        let child = match new.get(key) {
            Some(new_val) => {
                let child = compare_values(old_val, new_val);
                if child.is_changed() {
                    removed.set(key.as_str(), old_val.clone());
                    added.set(key.as_str(), new_val.clone());
                }
                child
            }
            None => {
                removed.set(key.as_str(), old_val.clone());
                Patch::Removed {
                    value: old_val.clone(),
                }
            }
        };
        value.insert(key.clone(), child);
    }

    for (key, new_val) in new {
        if old.has(key) {
            continue;
        }
        added.set(key.as_str(), new_val.clone());
        value.insert(
            key.clone(),
            Patch::Added {
                value: new_val.clone(),
            },
        );
    }

    if value.values().all(Patch::is_equal) {
        return None;
    }

    Some(MapChanges {
        value,
        added,
        removed,
    })
}
