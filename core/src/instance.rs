//! Loading problem instances from their JSON form.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every top-level key other than `keys` is an x-coordinate; its record holds
//! the y-value as a digit string in the given base.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use math::point::Point;
use math::radix::{self, MAX_BASE, MIN_BASE};
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{instrument, warn};

use crate::error::{RecoveryError, RecoveryResult};
use crate::point_set::PointSet;

const KEYS_FIELD: &str = "keys";

#[derive(Debug, Deserialize, Serialize)]
struct Keys {
    k: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<usize>,
}

/// Bases appear as strings in the wild, but plain integers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBase {
    Text(String),
    Number(u32),
}

impl RawBase {
    fn resolve(&self) -> Result<u32, String> {
        match self {
            RawBase::Number(base) => Ok(*base),
            RawBase::Text(text) => text
                .parse()
                .map_err(|_| format!("base {text:?} is not an integer")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

/// A decoded problem instance: threshold plus points sorted by x.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    threshold: usize,
    declared_count: Option<usize>,
    points: Vec<Point>,
}

impl Instance {
    /// Build an instance directly; points are sorted by x-coordinate.
    pub fn new(threshold: usize, mut points: Vec<Point>) -> Self {
        points.sort_by_key(|point| point.x);
        Instance {
            threshold,
            declared_count: None,
            points,
        }
    }

    /// Record the share count advertised in `keys.n`.
    pub fn with_declared_count(mut self, count: usize) -> Self {
        self.declared_count = Some(count);
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The share count advertised by the instance, if it carried one.
    pub fn declared_count(&self) -> Option<usize> {
        self.declared_count
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Validate the threshold against the decoded points.
    pub fn point_set(&self) -> RecoveryResult<PointSet> {
        PointSet::new(self.points.clone(), self.threshold)
    }

    /// Consume the instance into a validated point set.
    pub fn into_point_set(self) -> RecoveryResult<PointSet> {
        PointSet::new(self.points, self.threshold)
    }

    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> RecoveryResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> RecoveryResult<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn from_json_str(text: &str) -> RecoveryResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> RecoveryResult<Self> {
        let Value::Object(mut fields) = value else {
            return Err(RecoveryError::malformed(
                "instance must be a JSON object",
            ));
        };

        let keys = fields.remove(KEYS_FIELD).ok_or_else(|| {
            RecoveryError::malformed("missing `keys` record")
        })?;
        let keys: Keys = serde_json::from_value(keys).map_err(|err| {
            RecoveryError::malformed(format!("invalid `keys` record: {err}"))
        })?;

        let mut decoded: BTreeMap<i64, Point> = BTreeMap::new();
        for (key, share) in fields {
            let point = decode_share(&key, share)?;
            let x = point.x;
            if decoded.insert(x, point).is_some() {
                return Err(RecoveryError::malformed(format!(
                    "x-coordinate {x} appears more than once"
                )));
            }
        }

        if let Some(declared) = keys.n {
            if declared != decoded.len() {
                warn!(
                    declared,
                    found = decoded.len(),
                    "share count differs from keys.n"
                );
            }
        }

        Ok(Instance {
            threshold: keys.k,
            declared_count: keys.n,
            points: decoded.into_values().collect(),
        })
    }

    /// Serialize back to the JSON form, writing every value in `base`.
    pub fn to_json_value(&self, base: u32) -> RecoveryResult<Value> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(RecoveryError::malformed(format!(
                "cannot encode values in base {base}"
            )));
        }

        let keys = Keys {
            k: self.threshold,
            n: Some(self.declared_count.unwrap_or(self.points.len())),
        };
        let mut fields = Map::new();
        fields.insert(KEYS_FIELD.to_string(), serde_json::to_value(keys)?);

        for point in &self.points {
            if point.y.is_negative() {
                return Err(RecoveryError::malformed(format!(
                    "value at x = {} is negative and has no digit form",
                    point.x
                )));
            }
            fields.insert(
                point.x.to_string(),
                json!({
                    "base": base.to_string(),
                    "value": point.y.to_str_radix(base),
                }),
            );
        }

        Ok(Value::Object(fields))
    }
}

fn decode_share(key: &str, share: Value) -> RecoveryResult<Point> {
    let x: i64 = key.parse().map_err(|_| {
        RecoveryError::malformed(format!(
            "share key {key:?} is not an integer x-coordinate"
        ))
    })?;
    let raw: RawShare = serde_json::from_value(share).map_err(|err| {
        RecoveryError::malformed(format!("share at x = {x}: {err}"))
    })?;
    let base = raw.base.resolve().map_err(|reason| {
        RecoveryError::malformed(format!("share at x = {x}: {reason}"))
    })?;
    let y = radix::decode(&raw.value, base)
        .map_err(|source| RecoveryError::MalformedShare { x, source })?;

    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use math::error::RadixError;
    use math::{big, points};

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn parses_sample_instance() {
        let instance = Instance::from_json_str(SAMPLE).unwrap();
        assert_eq!(instance.threshold(), 3);
        assert_eq!(instance.declared_count(), Some(4));
        assert_eq!(
            instance.points(),
            points![(1, 4), (2, 7), (3, 12), (6, 39)].as_slice()
        );

        let set = instance.into_point_set().unwrap();
        assert_eq!(set.threshold(), 3);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn points_are_sorted_numerically() {
        let text = r#"{
            "keys": { "k": 1 },
            "10": { "base": "10", "value": "1" },
            "-3": { "base": "10", "value": "2" },
            "9": { "base": "10", "value": "3" }
        }"#;
        let instance = Instance::from_json_str(text).unwrap();
        let xs: Vec<i64> = instance.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-3, 9, 10]);
        assert_eq!(instance.declared_count(), None);
    }

    #[test]
    fn numeric_bases_are_accepted() {
        let text = r#"{
            "keys": { "k": 1 },
            "1": { "base": 16, "value": "FF" }
        }"#;
        let instance = Instance::from_json_str(text).unwrap();
        assert_eq!(instance.points()[0].y, big!(255));
    }

    #[test]
    fn missing_keys_is_malformed() {
        let text = r#"{ "1": { "base": "10", "value": "4" } }"#;
        assert!(matches!(
            Instance::from_json_str(text),
            Err(RecoveryError::MalformedInstance(_))
        ));
    }

    #[test]
    fn missing_threshold_is_malformed() {
        let text = r#"{ "keys": { "n": 1 }, "1": { "base": "10", "value": "4" } }"#;
        let err = Instance::from_json_str(text).unwrap_err();
        assert!(matches!(err, RecoveryError::MalformedInstance(_)));
        assert!(err.to_string().contains("keys"));
    }

    #[test]
    fn non_object_is_malformed() {
        assert!(matches!(
            Instance::from_json_str("[1, 2, 3]"),
            Err(RecoveryError::MalformedInstance(_))
        ));
    }

    #[test]
    fn invalid_json_keeps_parser_error() {
        assert!(matches!(
            Instance::from_json_str("{ \"keys\": "),
            Err(RecoveryError::Json(_))
        ));
    }

    #[test]
    fn non_integer_x_is_malformed() {
        let text = r#"{
            "keys": { "k": 1 },
            "one": { "base": "10", "value": "4" }
        }"#;
        let err = Instance::from_json_str(text).unwrap_err();
        assert!(err.to_string().contains("\"one\""));
    }

    #[test]
    fn equivalent_x_keys_collide() {
        let text = r#"{
            "keys": { "k": 1 },
            "1": { "base": "10", "value": "4" },
            "01": { "base": "10", "value": "5" }
        }"#;
        let err = Instance::from_json_str(text).unwrap_err();
        assert!(matches!(err, RecoveryError::MalformedInstance(_)));
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn malformed_digit_names_the_share() {
        let text = r#"{
            "keys": { "k": 1 },
            "5": { "base": "2", "value": "1021" }
        }"#;
        assert!(matches!(
            Instance::from_json_str(text),
            Err(RecoveryError::MalformedShare {
                x: 5,
                source: RadixError::MalformedDigit {
                    digit: '2',
                    position: 2,
                    base: 2
                }
            })
        ));
    }

    #[test]
    fn unsupported_base_is_reported() {
        let text = r#"{
            "keys": { "k": 1 },
            "5": { "base": "40", "value": "1" }
        }"#;
        assert!(matches!(
            Instance::from_json_str(text),
            Err(RecoveryError::MalformedShare {
                x: 5,
                source: RadixError::UnsupportedBase(40)
            })
        ));
    }

    #[test]
    fn non_numeric_base_is_malformed() {
        let text = r#"{
            "keys": { "k": 1 },
            "5": { "base": "ten", "value": "1" }
        }"#;
        assert!(matches!(
            Instance::from_json_str(text),
            Err(RecoveryError::MalformedInstance(_))
        ));
    }

    #[test]
    fn missing_value_is_malformed() {
        let text = r#"{ "keys": { "k": 1 }, "5": { "base": "10" } }"#;
        assert!(matches!(
            Instance::from_json_str(text),
            Err(RecoveryError::MalformedInstance(_))
        ));
    }

    #[test]
    fn threshold_above_share_count_fails_on_point_set() {
        let text = r#"{
            "keys": { "n": 1, "k": 2 },
            "1": { "base": "10", "value": "4" }
        }"#;
        let instance = Instance::from_json_str(text).unwrap();
        assert!(matches!(
            instance.point_set(),
            Err(RecoveryError::InsufficientPoints {
                needed: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn json_form_round_trips() {
        let instance = Instance::new(2, points![(3, 100), (1, 255), (2, 0)])
            .with_declared_count(3);
        let value = instance.to_json_value(16).unwrap();
        assert_eq!(value["keys"]["k"], 2);
        assert_eq!(value["keys"]["n"], 3);
        assert_eq!(value["1"]["value"], "ff");
        assert_eq!(value["1"]["base"], "16");

        let parsed = Instance::from_value(value).unwrap();
        assert_eq!(parsed, instance);
    }

    #[test]
    fn negative_values_cannot_be_written() {
        let instance = Instance::new(1, points![(1, -4)]);
        assert!(instance.to_json_value(10).is_err());
        assert!(Instance::new(1, points![(1, 4)]).to_json_value(1).is_err());
    }
}
