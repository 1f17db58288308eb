use crate::core::error::{JumpError, JumpResult};
use crate::core::trajectory::LaunchParameters;

pub const DEFAULT_SPEED: &str = "25";
pub const DEFAULT_ANGLE: &str = "22.8";
pub const DEFAULT_SLOPE_MAGNITUDE: &str = "1";
pub const DEFAULT_HEIGHT: &str = "20";

/// Raw text of the four input fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchForm {
    pub speed: String,
    pub angle: String,
    pub slope_magnitude: String,
    pub height: String,
}

impl Default for LaunchForm {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED.to_string(),
            angle: DEFAULT_ANGLE.to_string(),
            slope_magnitude: DEFAULT_SLOPE_MAGNITUDE.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
        }
    }
}

fn parse_f64(value: &str, field: &'static str) -> JumpResult<f64> {
    value.trim().parse::<f64>().map_err(|_| JumpError::Parse {
        field,
        value: value.to_string(),
    })
}

impl LaunchForm {
    /// Parses every field; the slope magnitude is negated so a positive entry
    /// describes a descending ramp.
    pub fn parse(&self) -> JumpResult<LaunchParameters> {
        Ok(LaunchParameters {
            initial_speed_mps: parse_f64(&self.speed, "speed")?,
            launch_angle_deg: parse_f64(&self.angle, "angle")?,
            slope: -parse_f64(&self.slope_magnitude, "slope")?,
            start_height_m: parse_f64(&self.height, "height")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_to_reference_jump() {
        let params = LaunchForm::default().parse().expect("defaults are numeric");
        assert_eq!(params.initial_speed_mps, 25.0);
        assert_eq!(params.launch_angle_deg, 22.8);
        assert_eq!(params.slope, -1.0);
        assert_eq!(params.start_height_m, 20.0);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let form = LaunchForm {
            speed: " 30 ".to_string(),
            ..LaunchForm::default()
        };
        assert_eq!(form.parse().unwrap().initial_speed_mps, 30.0);
    }

    #[test]
    fn non_numeric_field_reports_which_one() {
        let form = LaunchForm {
            height: "twenty".to_string(),
            ..LaunchForm::default()
        };
        let err = form.parse().expect_err("height is not a number");
        assert_eq!(
            err,
            JumpError::Parse {
                field: "height",
                value: "twenty".to_string()
            }
        );
    }

    #[test]
    fn empty_field_is_a_parse_error() {
        let form = LaunchForm {
            angle: String::new(),
            ..LaunchForm::default()
        };
        assert!(matches!(
            form.parse(),
            Err(JumpError::Parse { field: "angle", .. })
        ));
    }
}
