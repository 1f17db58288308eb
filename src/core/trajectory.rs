use crate::core::error::{JumpError, JumpResult};

pub const GRAVITY_MPS2: f64 = 9.81;
pub const DEFAULT_TRAJECTORY_SAMPLES: usize = 300;

pub const DEFAULT_SWEEP_MIN_DEG: f64 = 1.0;
pub const DEFAULT_SWEEP_MAX_DEG: f64 = 80.0;
pub const DEFAULT_SWEEP_CANDIDATES: usize = 200;

/// Launch conditions for one jump.
///
/// `slope` is the signed gradient of the landing ramp; a descending ramp has
/// `slope < 0`. The ramp line passes through the launch point
/// `(0, start_height_m)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub initial_speed_mps: f64,
    pub launch_angle_deg: f64,
    pub slope: f64,
    pub start_height_m: f64,
}

impl LaunchParameters {
    fn validate(&self) -> JumpResult<()> {
        ensure_finite(self.initial_speed_mps, "speed")?;
        ensure_finite(self.launch_angle_deg, "angle")?;
        ensure_finite(self.slope, "slope")?;
        ensure_finite(self.start_height_m, "height")?;

        if self.initial_speed_mps <= 0.0 {
            return Err(JumpError::InvalidParameter(format!(
                "speed must be positive (got {})",
                self.initial_speed_mps
            )));
        }
        if self.start_height_m < 0.0 {
            return Err(JumpError::InvalidParameter(format!(
                "height cannot be negative (got {})",
                self.start_height_m
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub landing_time_s: f64,
    pub sample_times: Vec<f64>,
    pub positions: Vec<(f64, f64)>,
    pub landing_point: (f64, f64),
}

impl Trajectory {
    /// Horizontal distance from the launch point to the landing point.
    pub fn landing_distance_m(&self) -> f64 {
        self.landing_point.0
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn min_y(&self) -> f64 {
        self.positions
            .iter()
            .fold(f64::INFINITY, |acc, &(_, y)| acc.min(y))
    }

    pub fn max_y(&self) -> f64 {
        self.positions
            .iter()
            .fold(f64::NEG_INFINITY, |acc, &(_, y)| acc.max(y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimalAngleResult {
    pub best_angle_deg: f64,
    pub best_distance_m: f64,
}

/// Candidate launch angles scanned by [`find_optimal_angle_in`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSweep {
    pub min_deg: f64,
    pub max_deg: f64,
    pub candidates: usize,
}

impl Default for AngleSweep {
    fn default() -> Self {
        Self {
            min_deg: DEFAULT_SWEEP_MIN_DEG,
            max_deg: DEFAULT_SWEEP_MAX_DEG,
            candidates: DEFAULT_SWEEP_CANDIDATES,
        }
    }
}

impl AngleSweep {
    /// Angles in ascending scan order, endpoints included.
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        let count = self.candidates;
        (0..count).map(move |i| {
            if count == 1 {
                self.min_deg
            } else {
                self.min_deg + (self.max_deg - self.min_deg) * i as f64 / (count - 1) as f64
            }
        })
    }
}

fn ensure_finite(value: f64, label: &'static str) -> JumpResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(JumpError::NonFinite(label))
    }
}

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (speed_mps * theta.cos(), speed_mps * theta.sin())
}

pub fn position_at_time(params: &LaunchParameters, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params.initial_speed_mps, params.launch_angle_deg);
    let x = vx * time_s;
    let y = params.start_height_m + (vy * time_s) - (0.5 * GRAVITY_MPS2 * time_s * time_s);
    (x, y)
}

pub fn ramp_height_at(start_height_m: f64, slope: f64, x: f64) -> f64 {
    start_height_m + slope * x
}

/// Time at which the jumper meets the ramp again.
///
/// Solving `h + vy t - g t²/2 = h + slope vx t` for `t > 0` gives
/// `t = 2 (vy - slope vx) / g`. Only valid because the ramp is anchored at the
/// launch point.
pub fn landing_time(vx: f64, vy: f64, slope: f64) -> f64 {
    2.0 * (vy - slope * vx) / GRAVITY_MPS2
}

pub fn compute_trajectory(params: &LaunchParameters) -> JumpResult<Trajectory> {
    compute_trajectory_with_samples(params, DEFAULT_TRAJECTORY_SAMPLES)
}

pub fn compute_trajectory_with_samples(
    params: &LaunchParameters,
    samples: usize,
) -> JumpResult<Trajectory> {
    params.validate()?;

    let (vx, vy) = velocity_components(params.initial_speed_mps, params.launch_angle_deg);
    let t_land = landing_time(vx, vy, params.slope);
    if !t_land.is_finite() {
        return Err(JumpError::NonFinite("landing time"));
    }
    if t_land <= 0.0 {
        return Err(JumpError::NoIntersection {
            landing_time_s: t_land,
        });
    }

    let sample_count = samples.max(2);
    let sample_times: Vec<f64> = (0..sample_count)
        .map(|i| t_land * i as f64 / (sample_count - 1) as f64)
        .collect();
    let positions: Vec<(f64, f64)> = sample_times
        .iter()
        .map(|&t| position_at_time(params, t))
        .collect();

    if positions.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(JumpError::NonFinite("trajectory"));
    }

    let landing_point = match positions.last() {
        Some(&point) => point,
        None => return Err(JumpError::InvalidParameter("no samples".to_string())),
    };

    Ok(Trajectory {
        landing_time_s: t_land,
        sample_times,
        positions,
        landing_point,
    })
}

pub fn find_optimal_angle(
    speed_mps: f64,
    slope: f64,
    start_height_m: f64,
) -> JumpResult<OptimalAngleResult> {
    find_optimal_angle_in(speed_mps, slope, start_height_m, AngleSweep::default())
}

/// Brute-force scan for the angle with the longest landing distance.
///
/// Ties keep the first angle in ascending scan order.
pub fn find_optimal_angle_in(
    speed_mps: f64,
    slope: f64,
    start_height_m: f64,
    sweep: AngleSweep,
) -> JumpResult<OptimalAngleResult> {
    ensure_finite(speed_mps, "speed")?;
    ensure_finite(slope, "slope")?;
    ensure_finite(start_height_m, "height")?;
    ensure_finite(sweep.min_deg, "sweep start")?;
    ensure_finite(sweep.max_deg, "sweep end")?;

    let mut landings = Vec::with_capacity(sweep.candidates);
    for angle_deg in sweep.angles() {
        let (vx, vy) = velocity_components(speed_mps, angle_deg);
        let t_land = landing_time(vx, vy, slope);
        if t_land.is_nan() || t_land <= 0.0 {
            continue;
        }
        let distance = vx * t_land;
        if !distance.is_finite() {
            return Err(JumpError::NonFinite("distance"));
        }
        landings.push((angle_deg, distance));
    }

    farthest_landing(landings).ok_or(JumpError::NoIntersection {
        landing_time_s: 0.0,
    })
}

/// Keeps the strictly longest `(angle, distance)` pair; equal distances keep
/// the earlier pair. Distances that are not positive never win.
fn farthest_landing(
    landings: impl IntoIterator<Item = (f64, f64)>,
) -> Option<OptimalAngleResult> {
    let mut best: Option<OptimalAngleResult> = None;
    for (angle_deg, distance) in landings {
        let current = best.map_or(0.0, |b| b.best_distance_m);
        if distance > current {
            best = Some(OptimalAngleResult {
                best_angle_deg: angle_deg,
                best_distance_m: distance,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn default_jump() -> LaunchParameters {
        LaunchParameters {
            initial_speed_mps: 25.0,
            launch_angle_deg: 22.8,
            slope: -1.0,
            start_height_m: 20.0,
        }
    }

    #[test]
    fn landing_time_matches_closed_form() {
        let trajectory = compute_trajectory(&default_jump()).expect("jump should land");
        let (vx, vy) = velocity_components(25.0, 22.8);
        assert_close(trajectory.landing_time_s, 2.0 * (vy + vx) / 9.81, 1e-12);
    }

    #[test]
    fn landing_point_sits_on_the_ramp() {
        let params = default_jump();
        let trajectory = compute_trajectory(&params).expect("jump should land");
        let (x, y) = trajectory.landing_point;
        assert_close(y, ramp_height_at(params.start_height_m, params.slope, x), 1e-9);
        assert!(x > 0.0);
    }

    #[test]
    fn samples_span_zero_to_landing_time() {
        let trajectory = compute_trajectory(&default_jump()).expect("jump should land");
        assert_eq!(trajectory.len(), DEFAULT_TRAJECTORY_SAMPLES);
        assert_eq!(trajectory.sample_times[0], 0.0);
        assert_close(
            *trajectory.sample_times.last().unwrap(),
            trajectory.landing_time_s,
            1e-12,
        );
        assert!(trajectory.sample_times.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(trajectory.positions[0], (0.0, 20.0));
    }

    #[test]
    fn sample_count_has_a_floor_of_two() {
        let trajectory =
            compute_trajectory_with_samples(&default_jump(), 0).expect("jump should land");
        assert_eq!(trajectory.len(), 2);
    }

    #[test]
    fn straight_up_on_flat_ramp_lands_at_origin() {
        let trajectory = compute_trajectory(&LaunchParameters {
            initial_speed_mps: 10.0,
            launch_angle_deg: 90.0,
            slope: 0.0,
            start_height_m: 5.0,
        })
        .expect("vertical jump should come back down");
        assert_close(trajectory.landing_point.0, 0.0, 1e-9);
        assert_close(trajectory.landing_point.1, 5.0, 1e-9);
    }

    #[test]
    fn horizontal_launch_on_flat_ground_has_no_intersection() {
        let err = compute_trajectory(&LaunchParameters {
            initial_speed_mps: 10.0,
            launch_angle_deg: 0.0,
            slope: 0.0,
            start_height_m: 0.0,
        })
        .expect_err("zero landing time must be rejected");
        assert!(matches!(err, JumpError::NoIntersection { .. }));
    }

    #[test]
    fn diving_below_an_uphill_ramp_has_no_intersection() {
        let err = compute_trajectory(&LaunchParameters {
            initial_speed_mps: 20.0,
            launch_angle_deg: -30.0,
            slope: 0.5,
            start_height_m: 10.0,
        })
        .expect_err("trajectory diverges from the ramp");
        assert!(matches!(
            err,
            JumpError::NoIntersection { landing_time_s } if landing_time_s < 0.0
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let mut params = default_jump();
        params.initial_speed_mps = f64::NAN;
        assert_eq!(
            compute_trajectory(&params),
            Err(JumpError::NonFinite("speed"))
        );
        assert_eq!(
            find_optimal_angle(25.0, f64::INFINITY, 20.0),
            Err(JumpError::NonFinite("slope"))
        );
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let mut params = default_jump();
        params.initial_speed_mps = 0.0;
        assert!(matches!(
            compute_trajectory(&params),
            Err(JumpError::InvalidParameter(_))
        ));
    }

    #[test]
    fn sweep_includes_both_endpoints() {
        let angles: Vec<f64> = AngleSweep::default().angles().collect();
        assert_eq!(angles.len(), 200);
        assert_eq!(angles[0], 1.0);
        assert_close(angles[199], 80.0, 1e-12);
    }

    #[test]
    fn optimal_angle_on_flat_ground_is_near_45() {
        let best = find_optimal_angle(20.0, 0.0, 0.0).expect("flat ground has landings");
        // Grid spacing is 79/199 deg.
        assert_close(best.best_angle_deg, 45.0, 0.4);
        assert_close(best.best_distance_m, 20.0 * 20.0 / 9.81, 0.01);
    }

    #[test]
    fn optimal_angle_on_descending_ramp_is_closed_form_optimum() {
        // For a ramp of inclination a below horizontal, the best angle is 45 - a/2.
        let best = find_optimal_angle(25.0, -1.0, 20.0).expect("ramp has landings");
        assert_close(best.best_angle_deg, 22.5, 0.4);
    }

    #[test]
    fn equal_distances_keep_the_earlier_angle() {
        let best = farthest_landing([(30.0, 10.0), (60.0, 10.0)]).expect("both land");
        assert_eq!(best.best_angle_deg, 30.0);
        assert_eq!(best.best_distance_m, 10.0);
    }

    #[test]
    fn strictly_longer_later_landing_wins() {
        let best = farthest_landing([(30.0, 10.0), (45.0, 12.5), (60.0, 12.5)])
            .expect("all land");
        assert_eq!(best.best_angle_deg, 45.0);
    }

    #[test]
    fn zero_distance_landings_are_not_an_optimum() {
        assert!(farthest_landing([(90.0, 0.0)]).is_none());
        assert!(farthest_landing(std::iter::empty()).is_none());
    }

    #[test]
    fn overflowing_positions_are_reported_as_non_finite() {
        let params = LaunchParameters {
            initial_speed_mps: 1e200,
            ..default_jump()
        };
        assert_eq!(
            compute_trajectory(&params),
            Err(JumpError::NonFinite("trajectory"))
        );
    }

    #[test]
    fn overflowing_sweep_distance_is_reported_as_non_finite() {
        assert_eq!(
            find_optimal_angle(1e200, -1.0, 20.0),
            Err(JumpError::NonFinite("distance"))
        );
    }

    #[test]
    fn sweep_without_landings_reports_no_intersection() {
        let sweep = AngleSweep {
            min_deg: -80.0,
            max_deg: -1.0,
            candidates: 50,
        };
        let err = find_optimal_angle_in(20.0, 0.0, 10.0, sweep).expect_err("all angles dive");
        assert!(matches!(err, JumpError::NoIntersection { .. }));
    }
}
