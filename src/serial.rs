use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use bimap::BidirMap;
use std::fmt;

// The wire form is just the forward entries; the reverse index is
// rebuilt by replaying them through `insert` rather than trusted from
// the wire.
impl Serialize for BidirMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in &self.forward {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = BidirMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a map of string keys to string values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = BidirMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for BidirMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EntryVisitor)
    }
}
