#![cfg(not(target_arch = "wasm32"))]

use hexviz_wasm::figure::{
    beam, beams, hsla, HueCycle, Point, Scaled, VertexSpec, COLOR_RANGE, VERTICES,
};
use hexviz_wasm::layout::{canvas_layout, overlay_layout, CANVAS_BUFFER_SPACE};
use hexviz_wasm::params::ParameterSet;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn dist(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

// --- Hue ---

#[test]
fn hue_cycles_back_to_zero_after_360_frames() {
    let mut hue = HueCycle::new();
    assert_eq!(hue.degrees(), 0);
    for _ in 0..360 {
        hue.advance();
        assert!(hue.degrees() < 360);
    }
    assert_eq!(hue.degrees(), 0);
}

#[test]
fn hue_advances_by_one_degree() {
    let mut hue = HueCycle::new();
    hue.advance();
    assert_eq!(hue.degrees(), 1);
}

// --- Scaled quantities ---

#[test]
fn scaled_from_defaults() {
    let s = Scaled::from_params(&ParameterSet::default());
    assert!(approx_eq(s.zoom, 250.0));
    assert!(approx_eq(s.radius, 4000.0));
    assert!(approx_eq(s.thickness, 25.0 * 25.0 / 160.0 * 250.0 / 160.0));
    assert!(approx_eq(s.aspect, 1.0));
    assert!(approx_eq(s.separation, 5.0 / 320.0));
}

#[test]
fn separation_input_50_is_neutral() {
    let p = ParameterSet {
        separation: 50,
        ..ParameterSet::default()
    };
    let s = Scaled::from_params(&p);
    assert!(approx_eq(s.separation, 0.0));
}

// --- Beam geometry ---

fn spec(offset_sign: f64) -> VertexSpec {
    VertexSpec {
        color: 0,
        from: 0,
        to: 2,
        offset_sign,
        category: 0,
    }
}

#[test]
fn mirrored_offset_signs_produce_opposite_y_offsets() {
    let scaled = Scaled::from_params(&ParameterSet::default());
    let center = Point::new(0.0, 0.0);
    let up = beam(&spec(-1.0), &scaled, false, 0, center);
    let down = beam(&spec(1.0), &scaled, false, 0, center);
    let expected = scaled.radius * scaled.separation;

    assert!(approx_eq(up.start.y + expected, down.start.y - expected));
    assert!(approx_eq(down.start.y - up.start.y, 2.0 * expected));
    assert!(approx_eq(up.start.x, down.start.x));
}

#[test]
fn unicursal_mode_zeroes_the_vertical_offset() {
    let scaled = Scaled::from_params(&ParameterSet::default());
    let center = Point::new(0.0, 0.0);
    let separated = beam(&spec(1.0), &scaled, false, 0, center);
    let collapsed = beam(&spec(1.0), &scaled, true, 0, center);
    assert!(approx_eq(
        separated.start.y - collapsed.start.y,
        scaled.radius * scaled.separation
    ));
}

#[test]
fn corner_zero_sits_below_center() {
    // sin(0) = 0, cos(0) = 1: corner 0 is straight down the y axis.
    let scaled = Scaled::from_params(&ParameterSet {
        separation: 50,
        ..ParameterSet::default()
    });
    let b = beam(&spec(1.0), &scaled, false, 0, Point::new(100.0, 200.0));
    assert!(approx_eq(b.start.x, 100.0));
    assert!(approx_eq(b.start.y, 200.0 + scaled.zoom));
}

#[test]
fn quad_width_is_twice_the_thickness() {
    let scaled = Scaled::from_params(&ParameterSet::default());
    let b = beam(&spec(1.0), &scaled, false, 0, Point::new(0.0, 0.0));
    assert!(approx_eq(dist(b.quad[0], b.quad[3]), 2.0 * scaled.thickness));
    assert!(approx_eq(dist(b.quad[1], b.quad[2]), 2.0 * scaled.thickness));
}

#[test]
fn quad_sides_straddle_the_endpoints() {
    let scaled = Scaled::from_params(&ParameterSet::default());
    let b = beam(&spec(1.0), &scaled, false, 0, Point::new(0.0, 0.0));
    assert!(approx_eq(dist(b.quad[0], b.start), scaled.thickness));
    assert!(approx_eq(dist(b.quad[3], b.start), scaled.thickness));
    assert!(approx_eq(dist(b.quad[1], b.end), scaled.thickness));
    assert!(approx_eq(dist(b.quad[2], b.end), scaled.thickness));
}

#[test]
fn caps_sit_on_the_endpoints_with_thickness_radius() {
    let scaled = Scaled::from_params(&ParameterSet::default());
    let b = beam(&spec(-1.0), &scaled, false, 0, Point::new(50.0, 50.0));
    assert!(approx_eq(b.cap_radius, scaled.thickness));
    // each quad side is centered on its endpoint
    let mid_start = Point::new(
        (b.quad[0].x + b.quad[3].x) / 2.0,
        (b.quad[0].y + b.quad[3].y) / 2.0,
    );
    let mid_end = Point::new(
        (b.quad[1].x + b.quad[2].x) / 2.0,
        (b.quad[1].y + b.quad[2].y) / 2.0,
    );
    assert!(approx_eq(dist(mid_start, b.start), 0.0));
    assert!(approx_eq(dist(mid_end, b.end), 0.0));
}

#[test]
fn zero_length_edge_does_not_panic() {
    let degenerate = VertexSpec {
        color: 0,
        from: 0,
        to: 0,
        offset_sign: 0.0,
        category: 0,
    };
    let scaled = Scaled::from_params(&ParameterSet::default());
    let b = beam(&degenerate, &scaled, false, 0, Point::new(0.0, 0.0));
    assert_eq!(b.start, b.end);
}

// --- Topology and the unicursal filter ---

#[test]
fn six_edges_render_when_unicursal_is_off() {
    let visible = VERTICES.iter().filter(|v| v.visible(false)).count();
    assert_eq!(visible, 6);
    assert!(VERTICES
        .iter()
        .filter(|v| v.visible(false))
        .all(|v| v.category == 0));
}

#[test]
fn all_eight_edges_render_in_unicursal_mode() {
    assert_eq!(VERTICES.iter().filter(|v| v.visible(true)).count(), 8);
}

#[test]
fn beams_honour_the_unicursal_filter() {
    let hue = HueCycle::new();
    let center = Point::new(0.0, 0.0);
    let p = ParameterSet::default();
    assert_eq!(beams(&p, &hue, center).len(), 6);

    let p = ParameterSet {
        unicursal: true,
        ..p
    };
    assert_eq!(beams(&p, &hue, center).len(), 8);
}

#[test]
fn triangles_carry_opposite_offset_signs() {
    let up: Vec<_> = VERTICES.iter().filter(|v| v.offset_sign < 0.0).collect();
    let down: Vec<_> = VERTICES.iter().filter(|v| v.offset_sign > 0.0).collect();
    assert_eq!(up.len(), 3);
    assert_eq!(down.len(), 3);
}

#[test]
fn color_indices_cover_the_wheel() {
    let mut colors: Vec<u16> = VERTICES
        .iter()
        .filter(|v| v.category == 0)
        .map(|v| v.color)
        .collect();
    colors.sort_unstable();
    assert_eq!(colors, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn gradient_stops_are_one_band_apart() {
    let scaled = Scaled::from_params(&ParameterSet::default());
    for v in &VERTICES {
        let b = beam(v, &scaled, true, 120, Point::new(0.0, 0.0));
        assert_eq!(b.hue_start, 120 + v.color * COLOR_RANGE);
        assert_eq!(b.hue_end - b.hue_start, COLOR_RANGE);
    }
}

#[test]
fn hsla_formats_css_color() {
    assert_eq!(hsla(420), "hsla(420, 100%, 50%, 1)");
}

// --- Layout ---

#[test]
fn canvas_is_oversized_by_the_buffer() {
    let fit = canvas_layout(1920.0, 1080.0);
    assert!(approx_eq(fit.width, 1920.0 + 2.0 * CANVAS_BUFFER_SPACE));
    assert!(approx_eq(fit.height, 1080.0 + 2.0 * CANVAS_BUFFER_SPACE));
    assert!(approx_eq(fit.left, -CANVAS_BUFFER_SPACE));
    assert!(approx_eq(fit.top, -CANVAS_BUFFER_SPACE));
}

#[test]
fn overlay_scales_with_radius_and_text_size() {
    let overlay = overlay_layout(4000.0, 25, 640.0, 1920.0, 1080.0);
    assert!(approx_eq(overlay.height, 4000.0 * 25.0 / 1000.0));
    assert!(approx_eq(overlay.top, (1080.0 - overlay.height) / 2.0));
    assert!(approx_eq(overlay.left, (1920.0 - 640.0 * 0.99) / 2.0));
}
