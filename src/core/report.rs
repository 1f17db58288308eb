use crate::core::trajectory::{AngleSweep, OptimalAngleResult, Trajectory};

pub fn distance_line(trajectory: &Trajectory) -> String {
    format!("Distance: {:.2} m", trajectory.landing_distance_m())
}

pub fn best_angle_line(optimum: Option<&OptimalAngleResult>, sweep: &AngleSweep) -> String {
    match optimum {
        Some(best) => format!(
            "Best angle: {:.2}° (reaches {:.2} m)",
            best.best_angle_deg, best.best_distance_m
        ),
        None => format!(
            "Best angle: no landing between {:.0}° and {:.0}°",
            sweep.min_deg, sweep.max_deg
        ),
    }
}

/// Two-line summary shown once a jump has been computed.
pub fn summary(
    trajectory: &Trajectory,
    optimum: Option<&OptimalAngleResult>,
    sweep: &AngleSweep,
) -> String {
    format!(
        "{}\n{}",
        distance_line(trajectory),
        best_angle_line(optimum, sweep)
    )
}
