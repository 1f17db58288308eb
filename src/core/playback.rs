use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::core::error::{JumpError, JumpResult};
use crate::core::form::LaunchForm;
use crate::core::report::summary;
use crate::core::trajectory::{
    AngleSweep, DEFAULT_TRAJECTORY_SAMPLES, LaunchParameters, OptimalAngleResult, Trajectory,
    compute_trajectory_with_samples, find_optimal_angle_in,
};
use crate::core::window::{AxisWindow, RampProfile, jump_axis_window};

/// Minimum time per sample. The clock also advances at most one sample per
/// display frame, so at 60 Hz the default 300 samples take about five seconds.
pub const DEFAULT_FRAME_INTERVAL_S: f32 = 0.010;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Playing,
    Finished,
    Cancelled,
}

/// Position of the playback within the sampled trajectory.
///
/// Frames are handed out one at a time in increasing order. The last frame
/// moves the state to `Finished`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    next_index: usize,
    presented: Option<usize>,
    total_frames: usize,
    phase: PlaybackPhase,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            next_index: 0,
            presented: None,
            total_frames: 0,
            phase: PlaybackPhase::Idle,
        }
    }

    pub fn start(&mut self, total_frames: usize) {
        self.next_index = 0;
        self.presented = None;
        self.total_frames = total_frames;
        self.phase = if total_frames == 0 {
            PlaybackPhase::Finished
        } else {
            PlaybackPhase::Playing
        };
    }

    /// Hands out the next frame index, or `None` when not playing.
    pub fn advance(&mut self) -> Option<usize> {
        if self.phase != PlaybackPhase::Playing {
            return None;
        }
        let index = self.next_index;
        self.presented = Some(index);
        if index + 1 >= self.total_frames {
            self.phase = PlaybackPhase::Finished;
        } else {
            self.next_index += 1;
        }
        Some(index)
    }

    pub fn cancel(&mut self) -> bool {
        if self.phase == PlaybackPhase::Playing {
            self.phase = PlaybackPhase::Cancelled;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// True once the last sample has been presented.
    pub fn is_terminal(&self) -> bool {
        self.phase == PlaybackPhase::Finished
            && self.presented.is_some_and(|i| i + 1 == self.total_frames)
    }

    pub fn presented_frame(&self) -> Option<usize> {
        self.presented
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }
}

/// What the draw surface shows for one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderCommand<'a> {
    pub frame_index: usize,
    pub trail: &'a [(f64, f64)],
    pub marker: (f64, f64),
    pub is_last: bool,
}

pub fn frame_command(trajectory: &Trajectory, frame_index: usize) -> Option<RenderCommand<'_>> {
    let marker = *trajectory.positions.get(frame_index)?;
    Some(RenderCommand {
        frame_index,
        trail: &trajectory.positions[..=frame_index],
        marker,
        is_last: frame_index + 1 == trajectory.positions.len(),
    })
}

/// Paces frame advances against wall-clock frame time.
///
/// At most one advance per tick: a slow display frame delays the playback
/// instead of skipping samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    interval_s: f32,
    accumulated_s: f32,
}

impl FrameClock {
    pub fn new(interval_s: f32) -> Self {
        let interval_s = interval_s.max(0.0);
        Self {
            interval_s,
            accumulated_s: interval_s,
        }
    }

    /// Primes the clock so the first tick after a launch presents frame 0.
    pub fn reset(&mut self) {
        self.accumulated_s = self.interval_s;
    }

    pub fn tick(&mut self, dt_s: f32) -> bool {
        self.accumulated_s += dt_s.max(0.0);
        if self.accumulated_s >= self.interval_s {
            self.accumulated_s = 0.0;
            true
        } else {
            false
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL_S)
    }
}

/// Everything derived from one press of the launch control.
#[derive(Clone, Debug)]
pub struct JumpRun {
    pub params: LaunchParameters,
    pub trajectory: Trajectory,
    pub optimum: Option<OptimalAngleResult>,
    pub window: AxisWindow,
    pub ramp: RampProfile,
    pub launched_at: DateTime<Local>,
}

impl JumpRun {
    pub fn compute(
        params: LaunchParameters,
        samples: usize,
        sweep: AngleSweep,
    ) -> JumpResult<Self> {
        let trajectory = compute_trajectory_with_samples(&params, samples)?;
        let optimum = match find_optimal_angle_in(
            params.initial_speed_mps,
            params.slope,
            params.start_height_m,
            sweep,
        ) {
            Ok(best) => Some(best),
            Err(JumpError::NoIntersection { .. }) => None,
            Err(err) => return Err(err),
        };

        let window = jump_axis_window(&trajectory, optimum.as_ref(), params.start_height_m);
        let ramp = RampProfile::build(params.start_height_m, params.slope, &window);
        debug!("axis window {window:?}, optimum {optimum:?}");

        Ok(Self {
            params,
            trajectory,
            optimum,
            window,
            ramp,
            launched_at: Local::now(),
        })
    }
}

/// State the shell keeps between launches.
///
/// Holds the current run and its playback. A new launch replaces the run and
/// restarts the playback; a failed launch leaves both untouched.
#[derive(Debug)]
pub struct SimulationSession {
    run: Option<JumpRun>,
    animation: AnimationState,
    clock: FrameClock,
    status: String,
    samples: usize,
    sweep: AngleSweep,
    generation: u64,
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new(DEFAULT_TRAJECTORY_SAMPLES, AngleSweep::default(), FrameClock::default())
    }
}

impl SimulationSession {
    pub fn new(samples: usize, sweep: AngleSweep, clock: FrameClock) -> Self {
        Self {
            run: None,
            animation: AnimationState::new(),
            clock,
            status: String::new(),
            samples,
            sweep,
            generation: 0,
        }
    }

    pub fn launch(&mut self, form: &LaunchForm) -> JumpResult<()> {
        if self.animation.is_playing() {
            warn!("launch ignored: a jump is already in progress");
            return Err(JumpError::Busy);
        }

        let prepared = form
            .parse()
            .and_then(|params| JumpRun::compute(params, self.samples, self.sweep));
        let run = match prepared {
            Ok(run) => run,
            Err(err) => {
                warn!("launch rejected: {err:?}");
                self.status = err.to_string();
                return Err(err);
            }
        };

        info!(
            "jump launched: v0={} m/s, angle={} deg, slope={}, h={} m, lands at {:.2} m after {:.2} s",
            run.params.initial_speed_mps,
            run.params.launch_angle_deg,
            run.params.slope,
            run.params.start_height_m,
            run.trajectory.landing_distance_m(),
            run.trajectory.landing_time_s
        );

        self.status = summary(&run.trajectory, run.optimum.as_ref(), &self.sweep);
        self.animation.start(run.trajectory.len());
        self.clock.reset();
        self.run = Some(run);
        self.generation += 1;
        Ok(())
    }

    /// Advances the playback by at most one frame.
    pub fn tick(&mut self, dt_s: f32) -> Option<RenderCommand<'_>> {
        if !self.animation.is_playing() || !self.clock.tick(dt_s) {
            return None;
        }
        let index = self.animation.advance()?;
        if self.animation.is_terminal() {
            info!("jump finished after {} frames", index + 1);
        }
        let run = self.run.as_ref()?;
        frame_command(&run.trajectory, index)
    }

    pub fn cancel(&mut self) -> bool {
        let cancelled = self.animation.cancel();
        if cancelled {
            info!(
                "jump cancelled at frame {:?}",
                self.animation.presented_frame()
            );
        }
        cancelled
    }

    /// The frame currently on screen, which stays visible after playback ends.
    pub fn current_command(&self) -> Option<RenderCommand<'_>> {
        let run = self.run.as_ref()?;
        frame_command(&run.trajectory, self.animation.presented_frame()?)
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.animation.is_playing()
    }

    pub fn run(&self) -> Option<&JumpRun> {
        self.run.as_ref()
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Bumped on every successful launch; lets the shell rebuild cached layers.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
