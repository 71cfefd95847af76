//! Body measurements, one fixed struct per garment.
//!
//! A measurement record is where values come from: a user typing numbers
//! (`ManualEntry`) or a row of a size table (`sizes::SizeRow`). Each garment
//! struct pulls exactly its own fields out of a record, so a draft can never
//! start with a field silently absent.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DraftError, Result};

/// One named measurement and the question asked to obtain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub prompt: &'static str,
}

impl Field {
    const fn new(name: &'static str, prompt: &'static str) -> Self {
        Self { name, prompt }
    }
}

/// Anything that can answer "what is the value of this field?".
///
/// ## Rust Lesson #12: Traits
///
/// A trait is an interface. `PantsMeasurements::from_record` takes any
/// `impl MeasurementRecord`, so manual entry and size tables share one code
/// path for validation.
pub trait MeasurementRecord {
    fn value(&self, field: &'static str) -> Result<f64>;
}

/// Parse one user-supplied value.
///
/// Values must be finite and not negative; `lower_center` and friends may
/// legitimately be zero.
pub fn parse_measurement(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DraftError::invalid(field, "empty value"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| DraftError::invalid(field, format!("'{}' is not a number", trimmed)))?;
    if !value.is_finite() {
        return Err(DraftError::invalid(field, "value must be finite"));
    }
    if value < 0.0 {
        return Err(DraftError::invalid(field, format!("{} is negative", value)));
    }
    Ok(value)
}

/// Measurements typed in by hand, kept as text until a garment asks for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualEntry {
    values: BTreeMap<String, String>,
}

impl ManualEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, text: impl Into<String>) {
        self.values.insert(field.into(), text.into());
    }

    /// Build an entry from `field=value` strings.
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entry = Self::new();
        entry.assign_all(assignments)?;
        Ok(entry)
    }

    /// Apply `field=value` strings, replacing earlier values of a field.
    pub fn assign_all<I, S>(&mut self, assignments: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for assignment in assignments {
            let assignment = assignment.as_ref();
            let Some((field, value)) = assignment.split_once('=') else {
                return Err(DraftError::invalid(
                    assignment.trim(),
                    "expected field=value",
                ));
            };
            self.insert(field.trim(), value.trim());
        }
        Ok(())
    }
}

impl MeasurementRecord for ManualEntry {
    fn value(&self, field: &'static str) -> Result<f64> {
        match self.values.get(field) {
            Some(text) => parse_measurement(field, text),
            None => Err(DraftError::MissingMeasurement(field.to_string())),
        }
    }
}

/// Whether values are raw body measurements or already pattern-ready.
///
/// Size tables hold pattern-ready rows: they are scaled to drawing units but
/// never fitted. Body measurements get the fitting margins first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    Body,
    Drafted,
}

/// Pants vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PantsMeasurements {
    pub length_of_pants: f64,
    pub crotch_line: f64,
    pub thigh_scope: f64,
    pub waist_scope: f64,
    pub ankle_scope: f64,
    pub lower_center: f64,
}

impl PantsMeasurements {
    pub const FIELDS: &'static [Field] = &[
        Field::new("length_of_pants", "Enter the length of the pants"),
        Field::new("crotch_line", "Enter the distance of the crotch line from the navel"),
        Field::new("thigh_scope", "Enter thigh scope"),
        Field::new("waist_scope", "Enter waist scope"),
        Field::new("ankle_scope", "Enter ankle scope"),
        Field::new(
            "lower_center",
            "Enter by how much would you like to lower the center of the pant relative to the side of the waist",
        ),
    ];

    pub fn from_record(record: &impl MeasurementRecord) -> Result<Self> {
        Ok(Self {
            length_of_pants: record.value("length_of_pants")?,
            crotch_line: record.value("crotch_line")?,
            thigh_scope: record.value("thigh_scope")?,
            waist_scope: record.value("waist_scope")?,
            ankle_scope: record.value("ankle_scope")?,
            lower_center: record.value("lower_center")?,
        })
    }

    /// Apply `f` to every field.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            length_of_pants: f(self.length_of_pants),
            crotch_line: f(self.crotch_line),
            thigh_scope: f(self.thigh_scope),
            waist_scope: f(self.waist_scope),
            ankle_scope: f(self.ankle_scope),
            lower_center: f(self.lower_center),
        }
    }
}

/// T-shirt vocabulary: body panel first, then sleeve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TShirtMeasurements {
    pub length_of_shirt: f64,
    pub armpit_height: f64,
    pub stomach_scope: f64,
    pub neck_key: f64,
    pub distance_neck_to_shoulder: f64,
    pub neck_depth: f64,
    pub lower_shoulder_line: f64,
    pub sleeve_length: f64,
    pub distance_shoulder_to_armpit: f64,
    pub arm_scope: f64,
    pub wrist_scope: f64,
    pub expand_at_shoulder: f64,
}

impl TShirtMeasurements {
    pub const FIELDS: &'static [Field] = &[
        Field::new("length_of_shirt", "Enter the length of the shirt"),
        Field::new("armpit_height", "Enter the armpit height"),
        Field::new("stomach_scope", "Enter the stomach scope"),
        Field::new("neck_key", "Enter the neck key"),
        Field::new(
            "distance_neck_to_shoulder",
            "Enter the distance from the neck to the shoulder",
        ),
        Field::new("neck_depth", "Enter the neck depth"),
        Field::new("lower_shoulder_line", "Enter how much you want to lower the shoulder line"),
        Field::new("sleeve_length", "Enter the sleeve length"),
        Field::new(
            "distance_shoulder_to_armpit",
            "Enter the distance from the shoulder to the armpit",
        ),
        Field::new("arm_scope", "Enter the arm scope"),
        Field::new("wrist_scope", "Enter the wrist scope"),
        Field::new(
            "expand_at_shoulder",
            "Enter how much you want to expand the sleeve at the shoulder",
        ),
    ];

    pub fn from_record(record: &impl MeasurementRecord) -> Result<Self> {
        Ok(Self {
            length_of_shirt: record.value("length_of_shirt")?,
            armpit_height: record.value("armpit_height")?,
            stomach_scope: record.value("stomach_scope")?,
            neck_key: record.value("neck_key")?,
            distance_neck_to_shoulder: record.value("distance_neck_to_shoulder")?,
            neck_depth: record.value("neck_depth")?,
            lower_shoulder_line: record.value("lower_shoulder_line")?,
            sleeve_length: record.value("sleeve_length")?,
            distance_shoulder_to_armpit: record.value("distance_shoulder_to_armpit")?,
            arm_scope: record.value("arm_scope")?,
            wrist_scope: record.value("wrist_scope")?,
            expand_at_shoulder: record.value("expand_at_shoulder")?,
        })
    }

    /// Apply `f` to every field.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            length_of_shirt: f(self.length_of_shirt),
            armpit_height: f(self.armpit_height),
            stomach_scope: f(self.stomach_scope),
            neck_key: f(self.neck_key),
            distance_neck_to_shoulder: f(self.distance_neck_to_shoulder),
            neck_depth: f(self.neck_depth),
            lower_shoulder_line: f(self.lower_shoulder_line),
            sleeve_length: f(self.sleeve_length),
            distance_shoulder_to_armpit: f(self.distance_shoulder_to_armpit),
            arm_scope: f(self.arm_scope),
            wrist_scope: f(self.wrist_scope),
            expand_at_shoulder: f(self.expand_at_shoulder),
        }
    }
}

/// The measurements of one drafting session, tagged with their garment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "garment", rename_all = "snake_case")]
pub enum MeasurementSet {
    Pants(PantsMeasurements),
    TShirt(TShirtMeasurements),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pants_entry() -> ManualEntry {
        ManualEntry::from_assignments([
            "length_of_pants=1.0",
            "crotch_line=0.4",
            "thigh_scope=0.6",
            "waist_scope=0.3",
            "ankle_scope=0.2",
            "lower_center=0.05",
        ])
        .unwrap()
    }

    #[test]
    fn reads_all_pants_fields() {
        let pants = PantsMeasurements::from_record(&pants_entry()).unwrap();
        assert_eq!(pants.length_of_pants, 1.0);
        assert_eq!(pants.lower_center, 0.05);
    }

    #[test]
    fn missing_field_is_named() {
        let mut entry = ManualEntry::new();
        for field in PantsMeasurements::FIELDS {
            if field.name != "ankle_scope" {
                entry.insert(field.name, "1");
            }
        }
        let err = PantsMeasurements::from_record(&entry).unwrap_err();
        assert_eq!(err, DraftError::MissingMeasurement("ankle_scope".into()));
    }

    #[test]
    fn unparseable_value_is_invalid() {
        let mut entry = pants_entry();
        entry.insert("waist_scope", "thirty");
        let err = PantsMeasurements::from_record(&entry).unwrap_err();
        match err {
            DraftError::InvalidMeasurement { field, .. } => assert_eq!(field, "waist_scope"),
            other => panic!("expected InvalidMeasurement, got {:?}", other),
        }
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        assert!(parse_measurement("x", "-1").is_err());
        assert!(parse_measurement("x", "NaN").is_err());
        assert!(parse_measurement("x", "inf").is_err());
        assert!(parse_measurement("x", "  ").is_err());
        assert_eq!(parse_measurement("x", " 0 ").unwrap(), 0.0);
    }

    #[test]
    fn assignment_without_equals_fails() {
        let err = ManualEntry::from_assignments(["thigh_scope 0.6"]).unwrap_err();
        assert!(matches!(err, DraftError::InvalidMeasurement { .. }));
    }

    #[test]
    fn field_lists_match_struct_sizes() {
        assert_eq!(PantsMeasurements::FIELDS.len(), 6);
        assert_eq!(TShirtMeasurements::FIELDS.len(), 12);
    }

    #[test]
    fn map_touches_every_field() {
        let pants = PantsMeasurements::from_record(&pants_entry()).unwrap();
        let doubled = pants.map(|v| v * 2.0);
        assert_eq!(doubled.crotch_line, 0.8);
        assert_eq!(doubled.thigh_scope, 1.2);
        assert_eq!(doubled.lower_center, 0.1);
    }
}
