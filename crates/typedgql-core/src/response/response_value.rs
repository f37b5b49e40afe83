use indexmap::IndexMap;

/// A value loaded from a response's `data`, typed by the schema.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseValue {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    /// A value passed through unchanged: a custom scalar loaded by a codec
    /// that keeps the raw JSON, or an object-typed field selected without a
    /// sub-selection.
    Json(serde_json::Value),
    List(Vec<ResponseValue>),
    Null,
    Object(ResponseObject),
    String(String),
}
impl ResponseValue {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(bool) = self {
            Some(*bool)
        } else {
            None
        }
    }

    pub fn as_enum(&self) -> Option<&str> {
        if let Self::Enum(member_name) = self {
            Some(member_name.as_str())
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(float) => Some(*float),
            Self::Int(int) => Some(*int as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(int) = self {
            Some(*int)
        } else {
            None
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        if let Self::Json(json) = self {
            Some(json)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[ResponseValue]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ResponseObject> {
        if let Self::Object(object) = self {
            Some(object)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// The loaded fields of one object in a response, keyed by the alias (or
/// name) each field was selected under and ordered as the selection set
/// selected them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseObject {
    pub(super) fields: IndexMap<String, ResponseValue>,
    pub(super) type_name: Option<String>,
}
impl ResponseObject {
    pub fn fields(&self) -> &IndexMap<String, ResponseValue> {
        &self.fields
    }

    /// Look up a field by the alias (or name) it was selected under.
    pub fn get(&self, selected_name: &str) -> Option<&ResponseValue> {
        self.fields.get(selected_name)
    }

    pub fn into_fields(self) -> IndexMap<String, ResponseValue> {
        self.fields
    }

    /// The concrete type of this object, if the response carried its
    /// `__typename`.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}
impl std::ops::Index<&str> for ResponseObject {
    type Output = ResponseValue;

    fn index(&self, selected_name: &str) -> &ResponseValue {
        &self.fields[selected_name]
    }
}
