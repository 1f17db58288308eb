use log::{error, info};
use macroquad::prelude::Texture2D;
use ski_jump::core::form::LaunchForm;
use ski_jump::core::playback::SimulationSession;

use crate::assets::Assets;
use crate::chart::{ChartSize, chart_texture};

/// Cached static chart for one session generation at one pixel size.
pub(crate) struct ChartLayer {
    pub(crate) generation: u64,
    pub(crate) size: ChartSize,
    pub(crate) texture: Option<Texture2D>,
}

pub(crate) struct AppRuntime {
    pub(crate) form: LaunchForm,
    pub(crate) session: SimulationSession,
    pub(crate) assets: Assets,
    pub(crate) chart: Option<ChartLayer>,
}

impl AppRuntime {
    pub(crate) fn new(assets: Assets) -> Self {
        Self {
            form: LaunchForm::default(),
            session: SimulationSession::default(),
            assets,
            chart: None,
        }
    }

    /// Re-renders the static chart after a launch or a window resize.
    pub(crate) fn refresh_chart(&mut self, size: ChartSize) {
        let Some(run) = self.session.run() else {
            return;
        };
        let generation = self.session.generation();
        let fresh = self
            .chart
            .as_ref()
            .is_some_and(|layer| layer.generation == generation && layer.size == size);
        if fresh {
            return;
        }

        let texture = match chart_texture(run, size) {
            Ok(texture) => {
                info!(
                    "rendered chart for jump #{generation} at {}x{}",
                    size.width, size.height
                );
                Some(texture)
            }
            Err(err) => {
                error!("chart render failed: {err}");
                None
            }
        };
        self.chart = Some(ChartLayer {
            generation,
            size,
            texture,
        });
    }

    pub(crate) fn chart_texture(&self) -> Option<&Texture2D> {
        self.chart.as_ref().and_then(|layer| layer.texture.as_ref())
    }
}
