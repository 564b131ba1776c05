use std::collections::HashMap;

use numtoa::NumToA;

use crate::prelude::{fmt_err, ErrorCode, InlineStr, RelayResult};

/// Dynamically typed value read from submitted form data or from a condition literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Int(i32),
    Long(i64),
    Double(f64),
    Boolean(bool),
    String(InlineStr),
    Map(HashMap<InlineStr, Object>),
    List(Vec<Object>),
    Null,
}

impl Object {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Long(_) | Self::Double(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Int(_) => "int",
            Object::Long(_) => "long",
            Object::Double(_) => "double",
            Object::Boolean(_) => "bool",
            Object::String(_) => "string",
            Object::Map(_) => "map",
            Object::List(_) => "list",
            Object::Null => "null",
        }
    }

    /// Numeric view used for comparisons. Integers widen to `f64`.
    pub fn as_f64(&self) -> RelayResult<f64> {
        match self {
            Self::Int(v) => Ok(*v as f64),
            Self::Long(v) => Ok(*v as f64),
            Self::Double(v) => Ok(*v),
            _ => fmt_err!(UnsupportedType, "not a number {:?}", self),
        }
    }

    pub fn to_string(&self) -> InlineStr {
        match self {
            Object::Int(v) => (*v).numtoa_str(10, &mut [0; 16]).into(),
            Object::Long(v) => (*v).numtoa_str(10, &mut [0; 32]).into(),
            Object::Double(v) => v.to_string().into(),
            Object::Boolean(v) => {
                if *v {
                    "True".into()
                } else {
                    "False".into()
                }
            }
            Object::String(v) => v.clone(),
            Object::Map(v) => Self::convert_hashmap_to_json(v).to_string().into(),
            Object::List(v) => Self::convert_list_to_json(v).to_string().into(),
            Object::Null => "".into(),
        }
    }
}

/// json <-> object
impl Object {
    fn convert_hashmap_to_json(hash_map: &HashMap<InlineStr, Object>) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(hash_map.len());
        for (k, v) in hash_map {
            map.insert(k.to_string(), v.to_json());
        }
        serde_json::Value::Object(map)
    }

    fn convert_list_to_json(list: &[Object]) -> serde_json::Value {
        serde_json::Value::Array(list.iter().map(|v| v.to_json()).collect())
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Object::Int(v) => serde_json::Value::Number((*v).into()),
            Object::Long(v) => serde_json::Value::Number((*v).into()),
            Object::Double(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Object::Boolean(v) => serde_json::Value::Bool(*v),
            Object::String(v) => serde_json::Value::String(v.to_string()),
            Object::Map(v) => Self::convert_hashmap_to_json(v),
            Object::List(v) => Self::convert_list_to_json(v),
            Object::Null => serde_json::Value::Null,
        }
    }

    pub fn convert_jsonmap_to_hashmap(
        jsonmap: &serde_json::Map<String, serde_json::Value>,
    ) -> HashMap<InlineStr, Object> {
        let mut map = HashMap::with_capacity(jsonmap.len());
        for (k, v) in jsonmap {
            map.insert(k.into(), Self::from_json(v));
        }
        map
    }

    pub fn from_json(json: &serde_json::Value) -> Object {
        match json {
            serde_json::Value::Bool(v) => (*v).into(),
            serde_json::Value::Number(v) => {
                if let Some(v) = v.as_i64() {
                    if v < i32::MAX as i64 && v > i32::MIN as i64 {
                        Object::Int(v as i32)
                    } else {
                        Object::Long(v)
                    }
                } else {
                    // u64 beyond i64 range or a fraction
                    Object::Double(v.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(v) => v.into(),
            serde_json::Value::Object(v) => Object::Map(Self::convert_jsonmap_to_hashmap(v)),
            serde_json::Value::Array(v) => Object::List(v.iter().map(Self::from_json).collect()),
            serde_json::Value::Null => Object::Null,
        }
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::Int(value)
    }
}
impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Long(value)
    }
}
impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Double(value)
    }
}
impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}
impl From<InlineStr> for Object {
    fn from(value: InlineStr) -> Self {
        Object::String(value)
    }
}
impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::String(InlineStr::from(value))
    }
}
impl From<&String> for Object {
    fn from(value: &String) -> Self {
        Object::String(InlineStr::from(value.as_str()))
    }
}
impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::String(InlineStr::from(value))
    }
}
impl From<Vec<Object>> for Object {
    fn from(value: Vec<Object>) -> Self {
        Object::List(value)
    }
}
impl From<HashMap<InlineStr, Object>> for Object {
    fn from(value: HashMap<InlineStr, Object>) -> Self {
        Object::Map(value)
    }
}
