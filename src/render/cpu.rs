use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::{StarrowError, StarrowResult};
use crate::render::plan::{DrawOp, RenderPlan};

/// Rendered frame pixels: RGBA8, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Rasterizes a [`RenderPlan`] on the CPU.
#[derive(Debug, Default)]
pub struct CpuRenderer;

impl CpuRenderer {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(skip_all, fields(ops = plan.ops.len()))]
    pub fn render(&mut self, plan: &RenderPlan) -> StarrowResult<FrameRGBA> {
        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| StarrowError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| StarrowError::render("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        clear_pixmap(&mut pixmap, plan.background.to_premul());

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        if !plan.background.is_transparent() {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_to_cpu(plan.background));
            ctx.fill_rect(&rect_to_cpu(plan.canvas.bounds()));
        }
        let mut depth = 0usize;
        for op in &plan.ops {
            draw_op(&mut ctx, op, &mut depth)?;
        }
        if depth != 0 {
            return Err(StarrowError::render(format!(
                "unbalanced clip stack: {depth} layer(s) left open"
            )));
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn draw_op(
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    depth: &mut usize,
) -> StarrowResult<()> {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match op {
        DrawOp::FillPath {
            path,
            transform,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(path));
        }
        DrawOp::FillRect {
            rect,
            transform,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_rect(&rect_to_cpu(*rect));
        }
        DrawOp::StrokePath {
            path,
            transform,
            color,
            width,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(*width).with_join(vello_cpu::kurbo::Join::Round),
            );
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
        DrawOp::PushClip { path, transform } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.push_clip_layer(&bezpath_to_cpu(path));
            *depth += 1;
        }
        DrawOp::PopClip => {
            if *depth == 0 {
                return Err(StarrowError::render("pop without matching clip"));
            }
            ctx.pop_layer();
            *depth -= 1;
        }
    }
    Ok(())
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
