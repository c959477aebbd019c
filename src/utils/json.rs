// Lenient decoders for fields the backend does not type consistently. Records written by
// other clients may carry numeric ids or the published year as a string.

pub mod id {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!("invalid id {}", other))),
        }
    }
}

pub mod year {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(year: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(*year)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| D::Error::custom(format!("invalid year {}", n))),
            Value::String(s) => s.trim().parse::<i32>().map_err(D::Error::custom),
            other => Err(D::Error::custom(format!("invalid year {}", other))),
        }
    }
}
