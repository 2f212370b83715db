use crate::domain::{ParticleStore, SimParams};

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::SimulationCore;

pub(super) fn create_simulation_core(params: SimParams) -> SimulationCore {
    SimulationCore {
        particles: ParticleStore::new(),
        params,
        frame: 0,

        render: RenderBuffers {
            // Grown on demand by `sync_render_buffers`
            positions: Vec::with_capacity(3 * 256),
            colors: Vec::with_capacity(256),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
