use log::debug;

use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.cancel {
        state.session.cancel();
    }

    if actions.jump {
        if let Err(err) = state.session.launch(&state.form) {
            if err.aborts_launch() {
                debug!("launch aborted, showing '{}'", state.session.status());
            }
        }
    }
}

/// Moves the playback forward by at most one sample per display frame.
pub(crate) fn step_playback(state: &mut AppRuntime, frame_dt: f32) {
    if let Some(command) = state.session.tick(frame_dt) {
        if command.is_last {
            debug!("landing frame {} presented", command.frame_index);
        }
    }
}
