use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    convert::{TryFrom, TryInto},
};

/// A key-tracked parameter map built from one JSON object of a scene file.
///
/// Getters record which keys were read so `check_unused_keys` can warn about
/// typos in scene files.
pub struct InputParams {
    params: HashMap<String, InputParamsValue>,
    name: Cow<'static, str>,
    visited_names: HashSet<String>,
}

pub enum InputParamsValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    String(String),
    Array(Vec<InputParamsValue>),
}

macro_rules! params_get {
    ( $( ( $name:ident, $type:ty, $variant:ident, $hint:expr ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                pub fn [<get_ $name>](&mut self, key: &str) -> anyhow::Result<$type> {
                    if let Some(value) = self.params.get(key) {
                        if let InputParamsValue::$variant(value) = value {
                            self.visited_names.insert(key.to_owned());
                            return Ok(*value);
                        }
                        anyhow::bail!(format!("{} - '{}' should be {}", self.name, key, $hint));
                    }
                    anyhow::bail!(format!("{} - there is no '{}' field", self.name, key));
                }

                pub fn [<get_ $name _or>](&mut self, key: &str, fallback: $type) -> $type {
                    if self.params.contains_key(key) {
                        self.[<get_ $name>](key).unwrap_or(fallback)
                    } else {
                        fallback
                    }
                }
            }
        )+
    };
}

impl InputParams {
    pub fn set_name(&mut self, name: Cow<'static, str>) {
        self.name = name;
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    params_get! {
        (int, i32, Int, "integer"),
        (bool, bool, Bool, "boolean"),
    }

    /// Integer field destined for a `u32`; negative values are an error
    /// rather than wrapping.
    pub fn get_u32(&mut self, key: &str) -> anyhow::Result<u32> {
        let value = self.get_int(key)?;
        if value < 0 {
            anyhow::bail!(format!(
                "{} - '{}' should be a non-negative integer",
                self.name, key
            ));
        }
        Ok(value as u32)
    }

    pub fn get_u32_or(&mut self, key: &str, fallback: u32) -> anyhow::Result<u32> {
        if self.params.contains_key(key) {
            self.get_u32(key)
        } else {
            Ok(fallback)
        }
    }

    /// Integer-valued JSON numbers are accepted where a float is expected.
    pub fn get_float(&mut self, key: &str) -> anyhow::Result<f32> {
        if let Some(value) = self.params.get(key) {
            let value = match value {
                InputParamsValue::Float(v) => *v,
                InputParamsValue::Int(v) => *v as f32,
                _ => anyhow::bail!(format!("{} - '{}' should be float", self.name, key)),
            };
            self.visited_names.insert(key.to_owned());
            return Ok(value);
        }
        anyhow::bail!(format!("{} - there is no '{}' field", self.name, key));
    }

    pub fn get_float_or(&mut self, key: &str, fallback: f32) -> f32 {
        if self.params.contains_key(key) {
            self.get_float(key).unwrap_or(fallback)
        } else {
            fallback
        }
    }

    pub fn get_float3(&mut self, key: &str) -> anyhow::Result<[f32; 3]> {
        if let Some(value) = self.params.get(key) {
            let error_info = format!(
                "{} - '{}' should be an array with 3 floats",
                self.name, key
            );
            if let InputParamsValue::Array(arr) = value {
                if arr.len() == 3 {
                    let mut result = [0.0_f32; 3];
                    for (i, ele) in arr.iter().enumerate() {
                        result[i] = match ele {
                            InputParamsValue::Float(v) => *v,
                            InputParamsValue::Int(v) => *v as f32,
                            _ => anyhow::bail!(error_info),
                        };
                    }
                    self.visited_names.insert(key.to_owned());
                    return Ok(result);
                }
            }
            anyhow::bail!(error_info);
        }
        anyhow::bail!(format!("{} - there is no '{}' field", self.name, key));
    }

    pub fn get_float3_or(&mut self, key: &str, fallback: [f32; 3]) -> [f32; 3] {
        if self.params.contains_key(key) {
            self.get_float3(key).unwrap_or(fallback)
        } else {
            fallback
        }
    }

    pub fn get_str(&mut self, key: &str) -> anyhow::Result<String> {
        if let Some(value) = self.params.get(key) {
            if let InputParamsValue::String(value) = value {
                self.visited_names.insert(key.to_owned());
                return Ok(value.clone());
            }
            anyhow::bail!(format!("{} - '{}' should be string", self.name, key));
        }
        anyhow::bail!(format!("{} - there is no '{}' field", self.name, key));
    }

    pub fn check_unused_keys(&self) {
        for k in self.params.keys() {
            if !k.starts_with('#') && !self.visited_names.contains(k) {
                log::warn!("{} - unused key '{}'", self.name, k);
            }
        }
    }
}

impl TryFrom<&serde_json::Value> for InputParamsValue {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Bool(v) => Ok(Self::Bool(*v)),
            serde_json::Value::Number(v) => {
                if let Some(v) = v.as_i64() {
                    Ok(Self::Int(v as i32))
                } else {
                    Ok(Self::Float(v.as_f64().unwrap_or(f64::NAN) as f32))
                }
            }
            serde_json::Value::String(v) => Ok(Self::String(v.clone())),
            serde_json::Value::Array(arr) => {
                let mut values = Vec::<InputParamsValue>::with_capacity(arr.len());
                for v in arr {
                    match v.try_into() {
                        Ok(v) => values.push(v),
                        Err(e) => anyhow::bail!(format!("can't convert array element: {}", e)),
                    }
                }
                Ok(Self::Array(values))
            }
            _ => anyhow::bail!("can't convert json value to a scene parameter"),
        }
    }
}

impl TryFrom<&serde_json::Value> for InputParams {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        if let serde_json::Value::Object(value) = value {
            let mut params = HashMap::<String, InputParamsValue>::with_capacity(value.len());
            for (k, v) in value {
                match v.try_into() {
                    Ok(v) => {
                        params.insert(k.clone(), v);
                    }
                    Err(e) => anyhow::bail!(format!("can't convert member '{}': {}", k, e)),
                }
            }
            Ok(Self {
                params,
                name: Cow::Borrowed(""),
                visited_names: HashSet::new(),
            })
        } else {
            anyhow::bail!("can't convert non-object json value to parameters");
        }
    }
}
