//! Marching squares iso-contour extraction.
//!
//! Extracts polylines tracing the iso-lines of a 2D scalar field. Each 2x2
//! cell is classified against the iso-value, crossing points are linearly
//! interpolated along cell edges, and the resulting segments are connected
//! into polylines.

use glam::Vec2;

/// Tolerance for matching segment endpoints while connecting polylines.
const CONNECT_EPSILON: f32 = 1e-3;

/// One extracted iso-line.
#[derive(Debug, Clone, Default)]
pub struct Contour {
    /// Polyline vertices in grid-index space.
    pub points: Vec<Vec2>,
    /// The iso-value this contour traces.
    pub value: f32,
    /// Whether the polyline forms a closed loop.
    pub closed: bool,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    start: Vec2,
    end: Vec2,
}

/// Generates `n` evenly spaced iso-values covering `[range_start, range_end]`.
///
/// A single value sits at `range_start`; two or more include both endpoints.
#[must_use]
pub fn generate_values(n: u32, range_start: f32, range_end: f32) -> Vec<f32> {
    let incr = if n > 1 {
        (range_end - range_start) / (n - 1) as f32
    } else {
        0.0
    };
    (0..n).map(|i| range_start + i as f32 * incr).collect()
}

/// Extracts the iso-lines of a 2D scalar field at one iso-value.
///
/// # Arguments
/// * `field` - Scalar values in row-major order: the value for grid point
///   (x, y) is stored at index `y * nx + x`.
/// * `isoval` - The iso-value defining the contour.
/// * `nx`, `ny` - Grid dimensions.
///
/// Returns polylines with vertices in grid-index space; the caller maps them
/// to world space using the raster's spacing and origin. Grids narrower than
/// 2 in either direction contain no cells and yield no contours. Cells
/// touching a NaN value are skipped.
///
/// # Panics
/// Panics if `field.len() != nx * ny`.
#[must_use]
pub fn extract_contours(field: &[f32], isoval: f32, nx: u32, ny: u32) -> Vec<Contour> {
    assert!(
        field.len() == (nx as usize) * (ny as usize),
        "Field size {} does not match dimensions {}x{} = {}",
        field.len(),
        nx,
        ny,
        (nx as usize) * (ny as usize)
    );
    if nx < 2 || ny < 2 {
        return Vec::new();
    }

    let w = nx as usize;
    let mut segments = Vec::new();

    for y in 0..(ny as usize - 1) {
        for x in 0..(w - 1) {
            let tl = field[y * w + x];
            let tr = field[y * w + x + 1];
            let bl = field[(y + 1) * w + x];
            let br = field[(y + 1) * w + x + 1];

            if tl.is_nan() || tr.is_nan() || bl.is_nan() || br.is_nan() {
                continue;
            }

            let mut config = 0_u8;
            if tl >= isoval {
                config |= 1;
            }
            if tr >= isoval {
                config |= 2;
            }
            if br >= isoval {
                config |= 4;
            }
            if bl >= isoval {
                config |= 8;
            }

            emit_cell_segments(
                &mut segments,
                config,
                x as f32,
                y as f32,
                tl,
                tr,
                br,
                bl,
                isoval,
            );
        }
    }

    let mut contours = connect_segments(&segments);
    for contour in &mut contours {
        contour.value = isoval;
    }
    contours
}

/// Appends the segments crossing one cell, per the 16-case lookup.
///
/// Cases 5 and 10 are the saddle configurations and emit two segments.
#[allow(clippy::too_many_arguments)]
fn emit_cell_segments(
    segments: &mut Vec<Segment>,
    config: u8,
    x: f32,
    y: f32,
    tl: f32,
    tr: f32,
    br: f32,
    bl: f32,
    isoval: f32,
) {
    let top = edge_point(x, y, x + 1.0, y, tl, tr, isoval);
    let right = edge_point(x + 1.0, y, x + 1.0, y + 1.0, tr, br, isoval);
    let bottom = edge_point(x, y + 1.0, x + 1.0, y + 1.0, bl, br, isoval);
    let left = edge_point(x, y, x, y + 1.0, tl, bl, isoval);

    match config {
        0 | 15 => {}
        1 | 14 => segments.push(Segment { start: left, end: top }),
        2 | 13 => segments.push(Segment { start: top, end: right }),
        3 | 12 => segments.push(Segment { start: left, end: right }),
        4 | 11 => segments.push(Segment { start: right, end: bottom }),
        5 => {
            segments.push(Segment { start: left, end: top });
            segments.push(Segment { start: right, end: bottom });
        }
        6 | 9 => segments.push(Segment { start: top, end: bottom }),
        7 | 8 => segments.push(Segment { start: left, end: bottom }),
        10 => {
            segments.push(Segment { start: top, end: right });
            segments.push(Segment { start: left, end: bottom });
        }
        _ => unreachable!("cell configuration is 4 bits"),
    }
}

/// Interpolates the iso-crossing along one cell edge.
fn edge_point(x1: f32, y1: f32, x2: f32, y2: f32, val1: f32, val2: f32, isoval: f32) -> Vec2 {
    if (val2 - val1).abs() < 1e-6 {
        // Degenerate edge, fall back to the midpoint
        return Vec2::new((x1 + x2) / 2.0, (y1 + y2) / 2.0);
    }
    let t = ((isoval - val1) / (val2 - val1)).clamp(0.0, 1.0);
    Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1))
}

/// Greedily chains segments whose endpoints coincide into polylines.
fn connect_segments(segments: &[Segment]) -> Vec<Contour> {
    let mut contours = Vec::new();
    let mut used = vec![false; segments.len()];

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }

        let mut points = vec![segments[start_idx].start, segments[start_idx].end];
        used[start_idx] = true;

        let mut changed = true;
        while changed {
            changed = false;
            let current_end = *points.last().unwrap();

            for (i, seg) in segments.iter().enumerate() {
                if used[i] {
                    continue;
                }
                if seg.start.distance(current_end) < CONNECT_EPSILON {
                    points.push(seg.end);
                    used[i] = true;
                    changed = true;
                    break;
                }
                if seg.end.distance(current_end) < CONNECT_EPSILON {
                    points.push(seg.start);
                    used[i] = true;
                    changed = true;
                    break;
                }
            }
        }

        let closed = points[0].distance(*points.last().unwrap()) < CONNECT_EPSILON;
        contours.push(Contour {
            points,
            value: 0.0,
            closed,
        });
    }

    contours
}
