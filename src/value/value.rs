//! Core value types and operations.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Reserved key carrying a record's type tag in serialized form.
pub const TYPE_TAG_KEY: &str = "__type__";

/// Value is any datum the differ can compare.
///
/// `Map` and `Record` are keyed and get compared key by key. Everything
/// else, lists included, is primitive and only compared by equality.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
    Record(Record),
}

/// Map is an unordered mapping from string keys to values.
///
/// Entries are kept sorted so that iteration, and therefore every patch
/// built from a map, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Map {
    pub fields: BTreeMap<String, Value>,
}

/// Record is a map of fields tagged with the name of its shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record {
    pub type_tag: String,
    pub fields: Map,
}

impl Value {
    /// Builds a `Value::Map` from key/value pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(entries.into_iter().collect())
    }

    /// Builds a `Value::Record` from a type tag and field pairs.
    pub fn record<K, V, I>(type_tag: impl Into<String>, fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(Record::new(type_tag, fields.into_iter().collect()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns true for maps and records, the values compared key by key.
    pub fn is_keyed(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Record(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the key/value entries of a map or the fields of a record.
    pub fn as_keyed(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            Value::Record(r) => Some(&r.fields),
            _ => None,
        }
    }

    /// Returns the type tag of a record.
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            Value::Record(r) => Some(&r.type_tag),
            _ => None,
        }
    }

    fn type_order(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Float(_) => 3,
            Value::String(_) => 4,
            Value::List(_) => 5,
            Value::Map(_) => 6,
            Value::Record(_) => 7,
        }
    }
}

// NaN equals itself and sorts above every number.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => cmp_f64(*a, *b) == Ordering::Equal,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        let type_cmp = self.type_order().cmp(&other.type_order());
        if type_cmp != Ordering::Equal {
            return type_cmp;
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => cmp_f64(*a, *b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => a.cmp(b),
            (Value::Record(a), Value::Record(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => {
                // Equal floats must hash alike: fold -0.0 into 0.0 and every NaN into one.
                let bits = if f.is_nan() {
                    f64::NAN.to_bits()
                } else if *f == 0.0 {
                    0u64
                } else {
                    f.to_bits()
                };
                bits.hash(state)
            }
            Value::String(s) => s.hash(state),
            Value::List(l) => l.hash(state),
            Value::Map(m) => m.hash(state),
            Value::Record(r) => r.hash(state),
        }
    }
}

impl Map {
    pub fn new() -> Self {
        Map {
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Map {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Record {
    pub fn new(type_tag: impl Into<String>, fields: Map) -> Self {
        Record {
            type_tag: type_tag.into(),
            fields,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = serde_json::Error;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Value::deserialize(json)
    }
}

// A key that is the tag key behind zero or more backslashes. Such keys get one
// more backslash when written so that the bare tag key only ever means a tag.
fn is_tag_like_key(key: &str) -> bool {
    key.trim_start_matches('\\') == TYPE_TAG_KEY
}

fn escape_key(key: &str) -> Cow<'_, str> {
    if is_tag_like_key(key) {
        Cow::Owned(format!("\\{}", key))
    } else {
        Cow::Borrowed(key)
    }
}

fn unescape_key(key: String) -> String {
    if key != TYPE_TAG_KEY && is_tag_like_key(&key) {
        key[1..].to_string()
    } else {
        key
    }
}

fn serialize_fields<M: SerializeMap>(map: &mut M, fields: &Map) -> Result<(), M::Error> {
    for (k, v) in fields {
        map.serialize_entry(&*escape_key(k), v)?;
    }
    Ok(())
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        serialize_fields(&mut map, self)?;
        map.end()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(TYPE_TAG_KEY, &self.type_tag)?;
        serialize_fields(&mut map, &self.fields)?;
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            // JSON would silently turn these into null.
            Value::Float(f) if !f.is_finite() => Err(ser::Error::custom(format!(
                "cannot serialize non-finite float {}",
                f
            ))),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(l) => l.serialize(serializer),
            Value::Map(m) => m.serialize(serializer),
            Value::Record(r) => r.serialize(serializer),
        }
    }
}

/// Builds a map, or a record when the entries carry a string type tag.
fn keyed_from_entries(entries: Vec<(String, Value)>) -> Result<Value, String> {
    let mut type_tag = None;
    let mut fields = BTreeMap::new();

    for (key, value) in entries {
        if key == TYPE_TAG_KEY {
            match value {
                Value::String(tag) => type_tag = Some(tag),
                other => {
                    return Err(format!(
                        "{} must be a string, got {:?}",
                        TYPE_TAG_KEY, other
                    ))
                }
            }
        } else {
            fields.insert(unescape_key(key), value);
        }
    }

    let fields = Map { fields };
    Ok(match type_tag {
        Some(tag) => Value::Record(Record::new(tag, fields)),
        None => Value::Map(fields),
    })
}

/// Map key of any scalar type, kept as its string form.
struct MapKey(String);

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MapKeyVisitor)
    }
}

struct MapKeyVisitor;

impl<'de> Visitor<'de> for MapKeyVisitor {
    type Value = MapKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar map key")
    }

    fn visit_unit<E: de::Error>(self) -> Result<MapKey, E> {
        Ok(MapKey("null".to_string()))
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<MapKey, E> {
        Ok(MapKey(b.to_string()))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<MapKey, E> {
        Ok(MapKey(i.to_string()))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<MapKey, E> {
        Ok(MapKey(u.to_string()))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<MapKey, E> {
        Ok(MapKey(f.to_string()))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<MapKey, E> {
        Ok(MapKey(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<MapKey, E> {
        Ok(MapKey(s))
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON or YAML value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<Value, E> {
        Ok(Value::Int(i))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<Value, E> {
        Ok(match i64::try_from(u) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(u as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Value, E> {
        Ok(Value::Float(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((MapKey(key), value)) = access.next_entry::<MapKey, Value>()? {
            entries.push((key, value));
        }
        keyed_from_entries(entries).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Map(map) => Ok(map),
            Value::Record(r) => Err(de::Error::custom(format!(
                "expected a map, found a {} record",
                r.type_tag
            ))),
            other => Err(de::Error::custom(format!("expected a map, found {:?}", other))),
        }
    }
}

/// Parse a value from JSON.
pub fn from_json(json: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a value to JSON.
pub fn to_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Parse a value from YAML.
pub fn from_yaml(yaml: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Serialize a value to YAML.
pub fn to_yaml(value: &Value) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &Value) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_keyed_predicates() {
        assert!(Value::map([("a", 1)]).is_keyed());
        assert!(Value::record("Foo", [("a", 1)]).is_keyed());
        assert!(!Value::List(vec![Value::Int(1)]).is_keyed());
        assert!(!Value::from("x").is_keyed());
        assert!(!Value::Null.is_keyed());

        let rec = Value::record("Foo", [("a", 1)]);
        assert_eq!(rec.type_tag(), Some("Foo"));
        assert_eq!(rec.as_keyed().and_then(|m| m.get("a")), Some(&Value::Int(1)));
        assert_eq!(Value::map([("a", 1)]).type_tag(), None);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Bool(true), Value::Bool(false));
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        // No numeric coercion.
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::Float(0.0), Value::Float(-0.0));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_record_equality() {
        let a = Value::record("Foo", [("a", 1), ("b", 2)]);
        let b = Value::record("Foo", [("b", 2), ("a", 1)]);
        let c = Value::record("Bar", [("a", 1), ("b", 2)]);
        let m = Value::map([("a", 1), ("b", 2)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, m);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        assert_eq!(hash_of(&Value::Float(0.0)), hash_of(&Value::Float(-0.0)));
        assert_eq!(
            hash_of(&Value::Float(f64::NAN)),
            hash_of(&Value::Float(-f64::NAN))
        );
        assert_eq!(
            hash_of(&Value::map([("a", 1), ("b", 2)])),
            hash_of(&Value::map([("b", 2), ("a", 1)]))
        );
    }

    #[test]
    fn test_value_ordering() {
        let mut values = vec![
            Value::record("Foo", [("a", 1)]),
            Value::Float(f64::NAN),
            Value::from("s"),
            Value::Int(3),
            Value::Float(1.5),
            Value::Null,
            Value::map([("a", 1)]),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Int(3),
                Value::Float(1.5),
                Value::Float(f64::NAN),
                Value::from("s"),
                Value::map([("a", 1)]),
                Value::record("Foo", [("a", 1)]),
            ]
        );
    }

    #[test]
    fn test_map_operations() {
        let mut map = Map::new();
        assert!(map.is_empty());

        map.set("key", "value");
        assert!(map.has("key"));
        assert_eq!(map.get("key"), Some(&Value::from("value")));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["key"]);

        map.delete("key");
        assert!(!map.has("key"));
    }

    #[test]
    fn test_json_record_tag() {
        let value = from_json(r#"{"__type__":"Foo","a":1,"b":{"c":[1,2.5,"x"]}}"#).unwrap();
        assert_eq!(
            value,
            Value::record(
                "Foo",
                [
                    ("a", Value::Int(1)),
                    (
                        "b",
                        Value::map([(
                            "c",
                            Value::List(vec![Value::Int(1), Value::Float(2.5), Value::from("x")]),
                        )]),
                    ),
                ],
            )
        );

        let json = to_json(&value).unwrap();
        assert!(json.starts_with(r#"{"__type__":"Foo""#));
        assert_eq!(from_json(&json).unwrap(), value);
    }

    #[test]
    fn test_non_string_tag_is_rejected() {
        let err = from_json(r#"{"__type__":7}"#).unwrap_err();
        assert!(err.to_string().contains("__type__ must be a string"));
    }

    #[test]
    fn test_tag_key_in_map_round_trips() {
        let value = Value::map([(TYPE_TAG_KEY, "Foo")]);
        let json = to_json(&value).unwrap();
        assert_eq!(json, r#"{"\\__type__":"Foo"}"#);
        assert_eq!(from_json(&json).unwrap(), value);
    }

    #[test]
    fn test_tag_key_in_record_round_trips() {
        let value = Value::record("Foo", [(TYPE_TAG_KEY, "Bar")]);
        let json = to_json(&value).unwrap();
        assert_eq!(json, r#"{"__type__":"Foo","\\__type__":"Bar"}"#);
        assert_eq!(from_json(&json).unwrap(), value);
    }

    #[test]
    fn test_escaped_keys_round_trip() {
        let value = Value::map([
            ("\\__type__", Value::Int(1)),
            ("\\\\__type__", Value::Int(2)),
            ("\\plain", Value::Int(3)),
        ]);
        let json = to_json(&value).unwrap();
        let parsed = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(parsed["\\\\__type__"], 1);
        assert_eq!(parsed["\\\\\\__type__"], 2);
        assert_eq!(parsed["\\plain"], 3);
        assert_eq!(from_json(&json).unwrap(), value);
        assert_eq!(from_yaml(&to_yaml(&value).unwrap()).unwrap(), value);
    }

    #[test]
    fn test_yaml_scalar_keys() {
        let value = from_yaml("ports:\n  80: http\n  443: https\nflags:\n  true: x\n  1.5: y\n  ~: z\n").unwrap();
        assert_eq!(
            value,
            Value::map([
                ("ports", Value::map([("80", "http"), ("443", "https")])),
                ("flags", Value::map([("true", "x"), ("1.5", "y"), ("null", "z")])),
            ])
        );
    }

    #[test]
    fn test_non_finite_floats_do_not_serialize() {
        assert!(to_json(&Value::Float(f64::NAN)).is_err());
        assert!(to_json(&Value::map([("x", f64::INFINITY)])).is_err());
        assert!(to_yaml(&Value::List(vec![Value::Float(f64::NEG_INFINITY)])).is_err());
        assert_eq!(to_json(&Value::Float(-0.5)).unwrap(), "-0.5");
    }

    #[test]
    fn test_map_deserialize_rejects_record() {
        let map: Map = serde_json::from_str(r#"{"a":1}"#).unwrap();
        assert_eq!(map.get("a"), Some(&Value::Int(1)));
        assert!(serde_json::from_str::<Map>(r#"{"__type__":"Foo"}"#).is_err());
        assert!(serde_json::from_str::<Map>("[1]").is_err());
    }

    #[test]
    fn test_yaml_parse() {
        let value = from_yaml("a: 1\nb:\n  __type__: Foo\n  c: null\n").unwrap();
        assert_eq!(
            value,
            Value::map([
                ("a", Value::Int(1)),
                ("b", Value::record("Foo", [("c", Value::Null)])),
            ])
        );
        assert_eq!(from_yaml(&to_yaml(&value).unwrap()).unwrap(), value);
    }

    #[test]
    fn test_from_serde_json() {
        let json = serde_json::json!({
            "n": 1,
            "f": 1.5,
            "big": u64::MAX,
            "r": {"__type__": "Foo", "x": true}
        });
        let value = Value::try_from(json).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("n"), Some(&Value::Int(1)));
        assert_eq!(map.get("f"), Some(&Value::Float(1.5)));
        assert!(map.get("big").unwrap().as_float().is_some());
        assert_eq!(map.get("r"), Some(&Value::record("Foo", [("x", true)])));

        assert!(Value::try_from(serde_json::json!({"__type__": false})).is_err());
    }
}
