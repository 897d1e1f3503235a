//! Hexagram figure geometry.
//!
//! Everything here is plain `f64` math with no browser types, so the per-frame
//! construction can be unit-tested natively. The render loop feeds the
//! resulting [`Beam`]s to the 2D context.
//!
//! The figure is built from a fixed table of edges on a hexagon whose corners
//! sit at multiples of 60°. Two interlocking triangles give the classic
//! hexagram; unicursal mode collapses the vertical separation between them
//! and adds two tie edges so the outline reads as one continuous star.

use std::f64::consts::PI;

use crate::params::ParameterSet;

/// π / 3 (60°) — angular step between hexagon corners.
pub const DEG_60: f64 = PI / 3.0;
/// π / 2 (90°) — perpendicular offset for beam edges.
pub const DEG_90: f64 = PI / 2.0;
/// Full circle, for the rounded end caps.
pub const DEG_360: f64 = PI * 2.0;

/// Hue band width per color index, in degrees.
pub const COLOR_RANGE: u16 = 60;

const ZOOM_FACTOR: f64 = 10.0;
const RATIO_RADIUS: f64 = 16.0;
const RATIO_THICKNESS: f64 = 160.0;
const RATIO_ASPECT: f64 = 25.0;
const RATIO_SEPARATION: f64 = 320.0;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One fixed edge of the figure.
///
/// `from` and `to` are hexagon corner indices (0..6, 60° apart). `offset_sign`
/// pushes the edge's triangle up or down when the layers are separated.
/// `category` drives the unicursal filter: 0 always renders, 1 only in
/// unicursal mode.
#[derive(Debug, Clone, Copy)]
pub struct VertexSpec {
    pub color: u16,
    pub from: u8,
    pub to: u8,
    pub offset_sign: f64,
    pub category: u8,
}

impl VertexSpec {
    /// Whether this edge renders under the given mode.
    #[must_use]
    pub fn visible(&self, unicursal: bool) -> bool {
        self.category <= u8::from(unicursal)
    }
}

/// The fixed hexagram topology: two interlocking triangles plus the two tie
/// edges that close the unicursal star path.
pub const VERTICES: [VertexSpec; 8] = [
    // upward triangle
    VertexSpec { color: 0, from: 0, to: 2, offset_sign: -1.0, category: 0 },
    VertexSpec { color: 2, from: 2, to: 4, offset_sign: -1.0, category: 0 },
    VertexSpec { color: 4, from: 4, to: 0, offset_sign: -1.0, category: 0 },
    // downward triangle
    VertexSpec { color: 1, from: 1, to: 3, offset_sign: 1.0, category: 0 },
    VertexSpec { color: 3, from: 3, to: 5, offset_sign: 1.0, category: 0 },
    VertexSpec { color: 5, from: 5, to: 1, offset_sign: 1.0, category: 0 },
    // unicursal tie edges
    VertexSpec { color: 1, from: 1, to: 4, offset_sign: 0.0, category: 1 },
    VertexSpec { color: 5, from: 5, to: 2, offset_sign: 0.0, category: 1 },
];

/// Frame quantities derived from the raw slider inputs.
#[derive(Debug, Clone, Copy)]
pub struct Scaled {
    pub zoom: f64,
    pub radius: f64,
    pub thickness: f64,
    pub aspect: f64,
    pub separation: f64,
}

impl Scaled {
    #[must_use]
    pub fn from_params(p: &ParameterSet) -> Self {
        let zoom = f64::from(p.zoom) * ZOOM_FACTOR;
        Self {
            zoom,
            radius: zoom * RATIO_RADIUS,
            thickness: f64::from(p.thickness).powi(2) / RATIO_THICKNESS * zoom / RATIO_THICKNESS,
            aspect: f64::from(p.aspect) / RATIO_ASPECT,
            separation: (f64::from(p.separation) - 50.0) / RATIO_SEPARATION,
        }
    }
}

/// Base color angle, advanced once per rendered frame.
///
/// Owned by the loop driver rather than living in a global, so the geometry
/// stays testable headlessly.
#[derive(Debug, Clone, Copy, Default)]
pub struct HueCycle(u16);

impl HueCycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current base hue in degrees, always in [0, 360).
    #[must_use]
    pub fn degrees(&self) -> u16 {
        self.0
    }

    /// Step the color wheel by one degree, wrapping at 360.
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % 360;
    }
}

/// One gradient-filled quadrilateral plus its rounded end caps.
#[derive(Debug, Clone, Copy)]
pub struct Beam {
    pub start: Point,
    pub end: Point,
    /// Corners in draw order: `start+t`, `end+t`, `end-t`, `start-t`.
    pub quad: [Point; 4],
    pub cap_radius: f64,
    /// Gradient stop hues in degrees (not wrapped; CSS accepts angles > 360).
    pub hue_start: u16,
    pub hue_end: u16,
}

/// Build the beam for one edge of the figure.
///
/// A zero-length edge is not special-cased: `atan2(0, 0)` is 0, which just
/// produces a degenerate quad.
#[must_use]
pub fn beam(
    spec: &VertexSpec,
    scaled: &Scaled,
    unicursal: bool,
    hue: u16,
    center: Point,
) -> Beam {
    let offset_y = if unicursal {
        0.0
    } else {
        scaled.radius * scaled.separation * spec.offset_sign
    };
    let start = corner(spec.from, scaled, center, offset_y);
    let end = corner(spec.to, scaled, center, offset_y);

    let theta = (end.x - start.x).atan2(end.y - start.y);
    let tx = (theta + DEG_90).sin() * scaled.thickness;
    let ty = (theta + DEG_90).cos() * scaled.thickness;

    let hue_start = hue + spec.color * COLOR_RANGE;
    Beam {
        start,
        end,
        quad: [
            Point::new(start.x + tx, start.y + ty),
            Point::new(end.x + tx, end.y + ty),
            Point::new(end.x - tx, end.y - ty),
            Point::new(start.x - tx, start.y - ty),
        ],
        cap_radius: scaled.thickness,
        hue_start,
        hue_end: hue_start + COLOR_RANGE,
    }
}

/// All beams visible under the current parameters, ready to draw.
#[must_use]
pub fn beams(p: &ParameterSet, hue: &HueCycle, center: Point) -> Vec<Beam> {
    let scaled = Scaled::from_params(p);
    VERTICES
        .iter()
        .filter(|v| v.visible(p.unicursal))
        .map(|v| beam(v, &scaled, p.unicursal, hue.degrees(), center))
        .collect()
}

/// CSS color for a gradient stop at the given hue angle.
#[must_use]
pub fn hsla(hue: u16) -> String {
    format!("hsla({hue}, 100%, 50%, 1)")
}

fn corner(index: u8, scaled: &Scaled, center: Point, offset_y: f64) -> Point {
    let angle = DEG_60 * f64::from(index);
    Point::new(
        center.x + angle.sin() * scaled.zoom * scaled.aspect,
        center.y + angle.cos() * scaled.zoom + offset_y,
    )
}
