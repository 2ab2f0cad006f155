use std::ops::RangeInclusive;

/// Advisory chest range in inches.
pub const CHEST_RANGE: RangeInclusive<f64> = 30.0..=50.0;
/// Advisory length range in inches.
pub const LENGTH_RANGE: RangeInclusive<f64> = 25.0..=35.0;
/// Advisory sleeve range in inches.
pub const SLEEVE_RANGE: RangeInclusive<f64> = 7.0..=12.0;
/// Input granularity in inches.
pub const MEASUREMENT_STEP: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Body measurements in inches, entered by the user.
pub struct UserMeasurements {
    /// Chest circumference.
    pub chest: f64,
    /// Torso length.
    pub length: f64,
    /// Sleeve length.
    pub sleeve: f64,
    /// Waist circumference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Hip circumference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
}

impl Default for UserMeasurements {
    fn default() -> Self {
        Self {
            chest: 38.0,
            length: 29.0,
            sleeve: 8.5,
            waist: None,
            hips: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which measurement an advisory refers to.
pub enum MeasurementField {
    /// `chest`
    Chest,
    /// `length`
    Length,
    /// `sleeve`
    Sleeve,
}

#[derive(Clone, Debug, PartialEq)]
/// A non-blocking hint that a value sits outside the usual input range or step.
pub struct Advisory {
    /// Field concerned.
    pub field: MeasurementField,
    /// Entered value.
    pub value: f64,
    /// Human-readable hint.
    pub message: String,
}

impl UserMeasurements {
    /// Hints for values outside the advisory ranges or off the 0.5 inch grid.
    ///
    /// Advisories never block a session transition.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();
        for (field, name, value, range) in [
            (MeasurementField::Chest, "chest", self.chest, CHEST_RANGE),
            (MeasurementField::Length, "length", self.length, LENGTH_RANGE),
            (MeasurementField::Sleeve, "sleeve", self.sleeve, SLEEVE_RANGE),
        ] {
            if !range.contains(&value) {
                out.push(Advisory {
                    field,
                    value,
                    message: format!(
                        "{name} {value} is outside the usual {}-{} inch range",
                        range.start(),
                        range.end()
                    ),
                });
            } else if (value / MEASUREMENT_STEP).fract() != 0.0 {
                out.push(Advisory {
                    field,
                    value,
                    message: format!("{name} {value} is not a multiple of {MEASUREMENT_STEP}"),
                });
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/measurements.rs"]
mod tests;
