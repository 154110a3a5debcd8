// File: crates/chart-render-skia/src/lib.rs
// Summary: Paint a chart-core Scene onto a Skia CPU raster surface; export RGBA8 or PNG.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use chart_core::curve::PathCommand;
use chart_core::scene::{Group, MarkerStyles, Node, TextAnchor};
use chart_core::{Color, Rect, Scene};
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use skia_safe as skia;
use tracing::debug;

/// Stroke width of selected markers, matching the `.selected` css rule.
const SELECTED_STROKE: f32 = 3.0;

/// Straight RGBA8 pixels of one rendered frame.
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub row_bytes: usize,
}

#[derive(Clone, Debug)]
pub struct SkiaRenderer {
    /// Skip text nodes (tick labels); fonts differ between machines.
    pub draw_labels: bool,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

impl SkiaRenderer {
    pub fn new() -> Self { Self::default() }

    pub fn without_labels() -> Self { Self { draw_labels: false } }

    /// Render into an RGBA8 buffer sized to the scene.
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<RgbaFrame> {
        let (w, h) = frame_size(scene)?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), scene);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("read_pixels failed"));
        }
        Ok(RgbaFrame { pixels, width: w as u32, height: h as u32, row_bytes })
    }

    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let frame = self.render_to_rgba8(scene)?;
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&frame.pixels, frame.width, frame.height, image::ExtendedColorType::Rgba8)
            .map_err(|e| anyhow!("PNG encode: {e}"))?;
        debug!(width = frame.width, height = frame.height, bytes = png.len(), "encoded png");
        Ok(png)
    }

    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Paint the scene onto any canvas, e.g. a window surface.
    pub fn paint(&self, canvas: &skia::Canvas, scene: &Scene) {
        canvas.clear(to_skia(scene.background));
        let mut clips = HashMap::new();
        collect_clips(&scene.root, &mut clips);
        let ctx = PaintCtx { clips, styles: scene.marker_styles, draw_labels: self.draw_labels };
        ctx.group(canvas, &scene.root);
    }
}

fn frame_size(scene: &Scene) -> Result<(i32, i32)> {
    let (w, h) = (scene.width.round(), scene.height.round());
    if !(w >= 1.0 && h >= 1.0) {
        return Err(anyhow!("scene has no drawable area ({}x{})", scene.width, scene.height));
    }
    Ok((w as i32, h as i32))
}

struct PaintCtx {
    clips: HashMap<String, Rect>,
    styles: MarkerStyles,
    draw_labels: bool,
}

impl PaintCtx {
    fn group(&self, canvas: &skia::Canvas, g: &Group) {
        canvas.save();
        if let Some(t) = g.translate {
            canvas.translate((t.x as f32, t.y as f32));
        }
        if let Some(rect) = g.clip_path.as_ref().and_then(|id| self.clips.get(id)) {
            canvas.clip_rect(to_skia_rect(rect), None, Some(true));
        }
        for child in &g.children {
            self.node(canvas, child);
        }
        canvas.restore();
    }

    fn node(&self, canvas: &skia::Canvas, node: &Node) {
        match node {
            Node::Group(g) => self.group(canvas, g),
            Node::Path(p) => {
                let path = to_skia_path(&p.commands);
                if let Some(fill) = p.fill {
                    canvas.draw_path(&path, &fill_paint(fill));
                }
                canvas.draw_path(&path, &stroke_paint(p.stroke, p.stroke_width as f32));
            }
            Node::Marker(m) => {
                let center = (m.center.x as f32, m.center.y as f32);
                canvas.draw_circle(center, m.radius as f32, &fill_paint(m.effective_fill(&self.styles)));
                if m.selected {
                    canvas.draw_circle(center, m.radius as f32, &stroke_paint(self.styles.selected, SELECTED_STROKE));
                }
            }
            Node::Line(l) => {
                let paint = stroke_paint(l.stroke, 1.0);
                canvas.draw_line((l.from.x as f32, l.from.y as f32), (l.to.x as f32, l.to.y as f32), &paint);
            }
            Node::Text(t) if self.draw_labels => {
                let mut font = skia::Font::default();
                font.set_size(t.font_size as f32);
                let paint = fill_paint(t.fill);
                let (width, _) = font.measure_str(&t.text, Some(&paint));
                let x = match t.anchor {
                    TextAnchor::Start => t.at.x as f32,
                    TextAnchor::Middle => t.at.x as f32 - width / 2.0,
                    TextAnchor::End => t.at.x as f32 - width,
                };
                let y = (t.at.y + t.dy_em * t.font_size) as f32;
                canvas.draw_str(&t.text, (x, y), &font, &paint);
            }
            Node::Text(_) => {}
            Node::Rect(r) => {
                let rect = to_skia_rect(&r.rect);
                canvas.draw_rect(rect, &fill_paint(r.fill));
                if let Some(stroke) = r.stroke {
                    canvas.draw_rect(rect, &stroke_paint(stroke, 1.0));
                }
            }
            // consumed up front by collect_clips
            Node::ClipPath(_) => {}
        }
    }
}

fn collect_clips(g: &Group, out: &mut HashMap<String, Rect>) {
    for child in &g.children {
        match child {
            Node::ClipPath(c) => {
                out.insert(c.id.clone(), c.rect);
            }
            Node::Group(inner) => collect_clips(inner, out),
            _ => {}
        }
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_rect(r: &Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn to_skia_path(commands: &[PathCommand]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => {
                path.move_to((p.x as f32, p.y as f32));
            }
            PathCommand::LineTo(p) => {
                path.line_to((p.x as f32, p.y as f32));
            }
            PathCommand::CubicTo { c1, c2, to } => {
                path.cubic_to((c1.x as f32, c1.y as f32), (c2.x as f32, c2.y as f32), (to.x as f32, to.y as f32));
            }
            PathCommand::Close => {
                path.close();
            }
        }
    }
    path
}

fn fill_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(c));
    paint
}

fn stroke_paint(c: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(to_skia(c));
    paint
}
