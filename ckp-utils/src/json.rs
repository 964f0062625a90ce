use anyhow::{anyhow, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{to_string, to_string_pretty, to_value, Map, Value};
use std::{fs, io::Read};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    to_string(&jsonify_internal(
        &to_value(obj).expect("to_value failed on serializable object"),
    ))
    .expect("to_string failed on serializable object")
}

pub fn jsonify_pretty<T>(obj: &T) -> String
where
    T: Serialize,
{
    to_string_pretty(&jsonify_internal(
        &to_value(obj).expect("to_value failed on serializable object"),
    ))
    .expect("to_string failed on serializable object")
}

pub fn jsonify_internal(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), jsonify_internal(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(jsonify_internal).collect()),
        _ => json_value.clone(),
    }
}

/// Reads a command line json argument: `-` for stdin, a path ending in `.json`,
/// or the json text itself.
pub fn read_json_arg(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read json from stdin: {}", e))?;
        Ok(buffer)
    } else if arg.ends_with(".json") {
        fs::read_to_string(arg).map_err(|e| anyhow!("Failed to read file {}: {}", arg, e))
    } else {
        Ok(arg.to_string())
    }
}

pub fn load_json_arg<T>(arg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json_str = read_json_arg(arg)?;
    dejsonify::<T>(&json_str).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
