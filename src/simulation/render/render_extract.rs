use super::SimulationCore;

/// Pack every particle (inert ones too, so slot == buffer index) into the
/// render buffers. Positions are `[x, y, radius]` triples.
pub(super) fn sync_render_buffers(sim: &mut SimulationCore) -> usize {
    let count = sim.particles.len();
    let render = &mut sim.render;

    render.positions.clear();
    render.colors.clear();
    render.positions.reserve(count * 3);
    render.colors.reserve(count);

    for p in sim.particles.iter() {
        render.positions.push(p.position.x);
        render.positions.push(p.position.y);
        render.positions.push(p.radius);
        render.colors.push(p.color);
    }

    count
}
