// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Option merging and dotted-path helpers shared by the add-ons.

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Overlay `overrides` onto `defaults`, one level deep.
///
/// Keys present in both take the override. Nested objects in `overrides` replace the
/// default object wholesale; they are not merged.
pub fn merge_options(defaults: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Merge user-supplied props over default props and decode the result into the
/// fully-populated options type.
///
/// Unset `Option` fields must be skipped on serialization so they do not mask defaults.
pub fn resolve<D, P, T>(defaults: &D, overrides: &P) -> Result<T>
where
    D: Serialize,
    P: Serialize,
    T: DeserializeOwned,
{
    let defaults = into_map(serde_json::to_value(defaults)?);
    let overrides = into_map(serde_json::to_value(overrides)?);
    Ok(serde_json::from_value(Value::Object(merge_options(
        &defaults, &overrides,
    )))?)
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Assign `new_value` at a dotted `path`, creating intermediate objects as needed.
///
/// Intermediate values that are not objects are replaced by an empty object.
pub fn set_path(value: &mut Value, path: &str, new_value: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    set_nested(value, &segments, new_value);
}

fn set_nested(value: &mut Value, path: &[&str], new_value: Value) {
    let Some((key, remaining)) = path.split_first() else {
        *value = new_value;
        return;
    };

    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    let Value::Object(map) = value else {
        return;
    };

    if remaining.is_empty() {
        map.insert(key.to_string(), new_value);
    } else {
        let entry = map
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        set_nested(entry, remaining, new_value);
    }
}

/// Look up the value at a dotted `path`
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
}
