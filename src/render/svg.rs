use std::fmt::Write as _;

use crate::eval::annotations::PassOutcome;
use crate::eval::snapshot::{EntityView, SceneSnapshot};
use crate::foundation::core::Point;
use crate::foundation::error::{SnaplineError, SnaplineResult};
use crate::play::model::Side;
use crate::render::sink::{SceneSink, SinkConfig};

/// Field length including both end zones, in yards.
pub const FIELD_LENGTH: f64 = 120.0;
/// Field width, in yards.
pub const FIELD_WIDTH: f64 = 53.3;

const OFFENSE: &str = "#4ECDC4";
const DEFENSE: &str = "#FF6B6B";
const POST_THROW: &str = "#f39c12";
const BALL: &str = "#8B4513";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgRenderOpts {
    pub width: u32,
    pub height: u32,
    /// Blank border around the field, in pixels.
    pub margin: f64,
}

impl Default for SvgRenderOpts {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 560,
            margin: 12.0,
        }
    }
}

/// Draws a [`SceneSnapshot`] as a standalone SVG document.
///
/// Field coordinates map to pixels with a uniform scale, x along the long edge.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    opts: SvgRenderOpts,
    scale: f64,
    origin: Point,
}

impl SvgRenderer {
    pub fn new(opts: SvgRenderOpts) -> SnaplineResult<Self> {
        let w = f64::from(opts.width) - 2.0 * opts.margin;
        let h = f64::from(opts.height) - 2.0 * opts.margin;
        if !opts.margin.is_finite() || opts.margin < 0.0 || w <= 0.0 || h <= 0.0 {
            return Err(SnaplineError::render(format!(
                "svg canvas {}x{} leaves no room inside margin {}",
                opts.width, opts.height, opts.margin
            )));
        }
        let scale = (w / FIELD_LENGTH).min(h / FIELD_WIDTH);
        let origin = Point::new(
            (f64::from(opts.width) - FIELD_LENGTH * scale) / 2.0,
            (f64::from(opts.height) - FIELD_WIDTH * scale) / 2.0,
        );
        Ok(Self {
            opts,
            scale,
            origin,
        })
    }

    pub fn opts(&self) -> SvgRenderOpts {
        self.opts
    }

    /// Field yards to canvas pixels.
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + p.x * self.scale,
            self.origin.y + p.y * self.scale,
        )
    }

    pub fn render(&self, snap: &SceneSnapshot) -> String {
        let mut out = String::with_capacity(16 * 1024);
        let SvgRenderOpts { width, height, .. } = self.opts;
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        let _ = writeln!(
            out,
            r##"<rect width="{width}" height="{height}" fill="#1b1e26"/>"##
        );
        self.draw_field(&mut out);
        if let Some(los) = snap.line_of_scrimmage {
            self.line(&mut out, Point::new(los, 0.0), Point::new(los, FIELD_WIDTH), "#00FF00", 3.0, Some("10,5"));
        }
        self.draw_trails(&mut out, snap);
        for view in snap.entities.values() {
            self.draw_entity(&mut out, view);
        }
        self.draw_ball(&mut out, snap);
        self.draw_annotations(&mut out, snap);
        self.draw_captions(&mut out, snap);
        out.push_str("</svg>\n");
        out
    }

    fn draw_field(&self, out: &mut String) {
        let tl = self.to_screen(Point::new(0.0, 0.0));
        let br = self.to_screen(Point::new(FIELD_LENGTH, FIELD_WIDTH));
        let _ = writeln!(
            out,
            r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="#90EE90"/>"##,
            tl.x,
            tl.y,
            br.x - tl.x,
            br.y - tl.y
        );
        for (x0, x1) in [(0.0, 10.0), (110.0, FIELD_LENGTH)] {
            let a = self.to_screen(Point::new(x0, 0.0));
            let b = self.to_screen(Point::new(x1, FIELD_WIDTH));
            let _ = writeln!(
                out,
                r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="#2E7D32"/>"##,
                a.x,
                a.y,
                b.x - a.x,
                b.y - a.y
            );
        }
        for yard in (10..=110).step_by(5) {
            let x = f64::from(yard);
            let width = if yard == 10 || yard == 110 { 3.0 } else { 1.0 };
            self.line(out, Point::new(x, 0.0), Point::new(x, FIELD_WIDTH), "white", width, None);
        }
    }

    fn draw_trails(&self, out: &mut String, snap: &SceneSnapshot) {
        for (id, trail) in &snap.trails {
            let color = match snap.entities.get(id).and_then(|v| v.side) {
                Some(Side::Defense) => DEFENSE,
                Some(Side::Offense) => OFFENSE,
                None => POST_THROW,
            };
            self.polyline(out, &trail.primary, color, 2.0, None);
            self.polyline(out, &trail.continuation, POST_THROW, 2.0, Some("4,2"));
        }
        self.polyline(out, &snap.ball_trajectory, BALL, 3.0, Some("5,3"));
    }

    fn draw_entity(&self, out: &mut String, view: &EntityView) {
        let p = self.to_screen(view.resolved.pos);
        let r = 0.9 * self.scale;
        let fill = if view.resolved.provenance.is_continuation() || view.side.is_none() {
            POST_THROW
        } else if view.side == Some(Side::Defense) {
            DEFENSE
        } else {
            OFFENSE
        };
        let opacity = if view.resolved.provenance.is_frozen() { 0.6 } else { 0.9 };
        let _ = writeln!(
            out,
            r##"<circle cx="{:.2}" cy="{:.2}" r="{r:.2}" fill="{fill}" stroke="#333" stroke-width="1.5" opacity="{opacity}"/>"##,
            p.x, p.y
        );

        if view.resolved.has_heading() {
            // Tracking heading: 0 deg points along +y, clockwise.
            let rad = view.resolved.dir.to_radians();
            let tip = Point::new(
                view.resolved.pos.x + rad.sin() * 1.8,
                view.resolved.pos.y + rad.cos() * 1.8,
            );
            self.line(out, view.resolved.pos, tip, "#333", 1.5, None);
        }

        if let Some(label) = &view.label {
            let _ = writeln!(
                out,
                r##"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="11" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                p.x,
                p.y - r - 3.0,
                escape(label)
            );
        }
    }

    fn draw_ball(&self, out: &mut String, snap: &SceneSnapshot) {
        if !snap.ball.visible {
            return;
        }
        let p = self.to_screen(snap.ball.pos);
        let _ = writeln!(
            out,
            r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{BALL}" stroke="#654321" stroke-width="2" opacity="0.9"/>"##,
            p.x,
            p.y,
            0.6 * self.scale
        );
    }

    fn draw_annotations(&self, out: &mut String, snap: &SceneSnapshot) {
        let caption_anchor = self.to_screen(Point::new(FIELD_LENGTH / 2.0, 0.0));
        for arrow in &snap.coverage_arrows {
            let to = self.to_screen(arrow.target);
            let _ = writeln!(
                out,
                r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#FFD700" stroke-width="1.5" opacity="0.7"/>"##,
                caption_anchor.x, caption_anchor.y, to.x, to.y
            );
        }
        if let Some(marker) = snap.pass_marker {
            let p = self.to_screen(marker.anchor);
            let (glyph, color) = match marker.outcome {
                PassOutcome::Complete => ("\u{2713}", "#2ecc71"),
                PassOutcome::Incomplete => ("\u{2717}", "#e74c3c"),
            };
            let _ = writeln!(
                out,
                r##"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="24" font-weight="bold" text-anchor="middle" fill="{color}">{glyph}</text>"##,
                p.x,
                p.y - 1.5 * self.scale
            );
        }
    }

    fn draw_captions(&self, out: &mut String, snap: &SceneSnapshot) {
        let mut lines = vec![snap.captions.frame.clone(), snap.captions.time_to_throw.clone()];
        lines.extend(snap.captions.coverage.clone());
        for (i, text) in lines.iter().enumerate() {
            let _ = writeln!(
                out,
                r##"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="12" fill="white">{}</text>"##,
                self.opts.margin + 4.0,
                self.opts.margin + 14.0 * (i as f64 + 1.0),
                escape(text)
            );
        }
    }

    fn line(&self, out: &mut String, a: Point, b: Point, color: &str, width: f64, dash: Option<&str>) {
        let a = self.to_screen(a);
        let b = self.to_screen(b);
        let _ = write!(
            out,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{color}" stroke-width="{width}""#,
            a.x, a.y, b.x, b.y
        );
        if let Some(d) = dash {
            let _ = write!(out, r#" stroke-dasharray="{d}""#);
        }
        out.push_str("/>\n");
    }

    fn polyline(&self, out: &mut String, pts: &[Point], color: &str, width: f64, dash: Option<&str>) {
        if pts.len() < 2 {
            return;
        }
        let mut points = String::new();
        for p in pts {
            let s = self.to_screen(*p);
            let _ = write!(points, "{:.2},{:.2} ", s.x, s.y);
        }
        let _ = write!(
            out,
            r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="{width}" opacity="0.6""#,
            points.trim_end()
        );
        if let Some(d) = dash {
            let _ = write!(out, r#" stroke-dasharray="{d}""#);
        }
        out.push_str("/>\n");
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// [`SceneSink`] that keeps the SVG document of the most recent frame.
#[derive(Debug)]
pub struct SvgSink {
    renderer: SvgRenderer,
    cfg: Option<SinkConfig>,
    latest: Option<String>,
    presented: u64,
}

impl SvgSink {
    pub fn new(renderer: SvgRenderer) -> Self {
        Self {
            renderer,
            cfg: None,
            latest: None,
            presented: 0,
        }
    }

    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames rendered since the last `begin`.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl SceneSink for SvgSink {
    fn begin(&mut self, cfg: SinkConfig) -> SnaplineResult<()> {
        tracing::debug!(play_id = cfg.play_id, total = cfg.total_frames.0, "svg sink begin");
        self.cfg = Some(cfg);
        self.latest = None;
        self.presented = 0;
        Ok(())
    }

    fn present(&mut self, snapshot: &SceneSnapshot) -> SnaplineResult<()> {
        self.latest = Some(self.renderer.render(snapshot));
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
