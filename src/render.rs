use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::StarrowResult;

pub(crate) mod cpu;
pub(crate) mod plan;
pub(crate) mod scene;
pub(crate) mod surface;

/// Samples `scene` at its current time and rasterizes it onto `canvas`.
pub fn render_scene(
    scene: &scene::Scene,
    canvas: Canvas,
    background: Rgba8,
) -> StarrowResult<cpu::FrameRGBA> {
    let plan = plan::compile_frame(&scene.snapshot(), canvas, background);
    cpu::CpuRenderer::new().render(&plan)
}
