//! Diffing JSON arrays whose element type is only known at run time.

use serde_json::Value;

use seqdiff_types::Patch;

use crate::config::DiffConfig;
use crate::engine::{DiffEngine, MyersEngine};
use crate::error::{DiffError, DiffResult};

/// Kind of a JSON value, for homogeneity checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Diff two JSON arrays with the default engine.
pub fn diff_json(original: &Value, revised: &Value) -> DiffResult<Patch<Value>> {
    diff_json_with(&DiffConfig::default(), original, revised)
}

/// Diff two JSON arrays with an explicit configuration.
///
/// Both values must be arrays, and every element of both arrays must have
/// the same JSON kind.
pub fn diff_json_with(config: &DiffConfig, original: &Value, revised: &Value) -> DiffResult<Patch<Value>> {
    let original = as_array(original, "original")?;
    let revised = as_array(revised, "revised")?;
    check_homogeneous(original, revised)?;
    MyersEngine::new(config.clone())?.diff(original, revised)
}

fn as_array<'a>(value: &'a Value, side: &str) -> DiffResult<&'a [Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DiffError::InvalidInput(format!(
            "{side} must be a JSON array, got {}",
            JsonKind::of(other).name()
        ))),
    }
}

fn check_homogeneous(original: &[Value], revised: &[Value]) -> DiffResult<()> {
    let mut expected: Option<JsonKind> = None;
    let sides = [("original", original), ("revised", revised)];
    for (side, items) in sides {
        for (index, item) in items.iter().enumerate() {
            let kind = JsonKind::of(item);
            match expected {
                None => expected = Some(kind),
                Some(want) if want != kind => {
                    return Err(DiffError::InvalidInput(format!(
                        "{side}[{index}] is a {}, expected every element to be a {}",
                        kind.name(),
                        want.name()
                    )));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqdiff_types::DeltaKind;
    use serde_json::json;

    #[test]
    fn string_arrays_diff() {
        let patch = diff_json(&json!(["a", "b", "c"]), &json!(["a", "x", "c"])).unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.deltas()[0].kind(), DeltaKind::Change);
        assert_eq!(patch.deltas()[0].revised().elements(), &[json!("x")]);
    }

    #[test]
    fn objects_compare_by_content() {
        let a = json!([{"id": 1}, {"id": 2}]);
        let b = json!([{"id": 1}, {"id": 3}]);
        let patch = diff_json(&a, &b).unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.deltas()[0].original().position(), 1);
    }

    #[test]
    fn empty_arrays_are_accepted() {
        assert!(diff_json(&json!([]), &json!([])).unwrap().is_empty());
        let patch = diff_json(&json!([]), &json!([1, 2])).unwrap();
        assert_eq!(patch.deltas()[0].kind(), DeltaKind::Insert);
    }

    #[test]
    fn non_array_is_rejected() {
        let err = diff_json(&json!({"a": 1}), &json!([])).unwrap_err();
        assert!(matches!(err, DiffError::InvalidInput(ref msg) if msg.contains("original")));
        let err = diff_json(&json!([]), &json!("text")).unwrap_err();
        assert!(matches!(err, DiffError::InvalidInput(ref msg) if msg.contains("revised")));
    }

    #[test]
    fn mixed_kinds_within_an_array_are_rejected() {
        let err = diff_json(&json!(["a", 1]), &json!(["a"])).unwrap_err();
        assert!(matches!(err, DiffError::InvalidInput(ref msg) if msg.contains("original[1]")));
    }

    #[test]
    fn mixed_kinds_across_arrays_are_rejected() {
        let err = diff_json(&json!([1, 2]), &json!([true])).unwrap_err();
        assert!(matches!(err, DiffError::InvalidInput(ref msg) if msg.contains("revised[0]")));
    }

    #[test]
    fn signed_zero_is_not_a_change() {
        let a = json!([1.0, 0.0, 2.0]);
        let b = json!([1.0, -0.0, 2.0]);
        assert_eq!(a, b);
        assert!(diff_json(&a, &b).unwrap().is_empty());
        assert!(diff_json_with(&DiffConfig::plain(), &a, &b).unwrap().is_empty());
    }

    #[test]
    fn plain_config_gives_same_patch() {
        let a = json!([1, 2, 3, 4]);
        let b = json!([2, 3, 5]);
        assert_eq!(
            diff_json_with(&DiffConfig::plain(), &a, &b).unwrap(),
            diff_json(&a, &b).unwrap()
        );
    }
}
