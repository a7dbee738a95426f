//! Hover blob geometry.
//!
//! Maps (blob time, marker index, [`HoverTarget`]) to a target position and
//! scale. All layouts are continuous in time; the rounded-rectangle edge path
//! is closed so its wrap point is seamless.

use crate::constants::*;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlobShape {
    #[default]
    Pill,
    Rectangle,
}

impl BlobShape {
    /// Shape from a `data-blob-shape` style tag; anything unknown is a pill.
    pub fn from_attr(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("rectangle") => BlobShape::Rectangle,
            _ => BlobShape::Pill,
        }
    }

    #[inline]
    pub fn padding(self) -> Vec2 {
        match self {
            BlobShape::Pill => Vec2::from_array(PILL_PADDING),
            BlobShape::Rectangle => Vec2::from_array(RECT_PADDING),
        }
    }
}

/// Element bounding box in the same coordinate space as pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTarget {
    pub center: Vec2,
    /// Element size plus the shape's padding.
    pub size: Vec2,
    pub shape: BlobShape,
}

impl HoverTarget {
    pub fn from_bounds(bounds: Bounds, shape: BlobShape) -> Self {
        let raw = Vec2::new(bounds.width.max(0.0), bounds.height.max(0.0));
        Self {
            center: bounds.center(),
            size: raw + shape.padding(),
            shape,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Target placement of one marker inside the blob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobPlacement {
    pub position: Vec2,
    pub scale: Vec2,
}

/// Number of interior ("core") markers for `shape` in a chain of `amount`.
#[inline]
pub fn core_count(shape: BlobShape, amount: usize) -> usize {
    let fraction = match shape {
        BlobShape::Pill => PILL_CORE_FRACTION,
        BlobShape::Rectangle => RECT_CORE_FRACTION,
    };
    (amount as f32 * fraction).floor() as usize
}

pub fn blob_placement(
    target: &HoverTarget,
    index: usize,
    amount: usize,
    time: f32,
    marker_width: f32,
) -> BlobPlacement {
    match target.shape {
        BlobShape::Pill => pill_placement(target, index, amount, time, marker_width),
        BlobShape::Rectangle => rect_placement(target, index, amount, time, marker_width),
    }
}

fn pill_placement(
    t: &HoverTarget,
    i: usize,
    amount: usize,
    time: f32,
    marker_width: f32,
) -> BlobPlacement {
    let fi = i as f32;
    let half = t.half_extents();
    let size_scale = t.size / marker_width;
    let base_angle = fi / amount as f32 * TAU;
    let orbit_end = (amount as f32 * PILL_ORBIT_FRACTION).floor() as usize;

    if i < core_count(BlobShape::Pill, amount) {
        let wobble = Vec2::new(
            (time * 2.0 + fi * 0.8).sin(),
            (time * 2.3 + fi * 0.9).cos(),
        ) * PILL_CORE_WOBBLE;
        let core = 0.85 + (time * 1.5 + fi).sin() * 0.1;
        BlobPlacement {
            position: t.center + wobble,
            scale: size_scale * core,
        }
    } else if i < orbit_end {
        let angle = base_angle + time * 0.3;
        let radius_noise = (time * 2.5 + base_angle * 2.0).sin() * 0.3;
        let radius = 0.4 + radius_noise * 0.2;
        let offset = Vec2::new(angle.cos(), angle.sin()) * half * radius;
        let wobble =
            Vec2::new((time * 2.5 + fi).sin(), (time * 2.2 + fi).cos()) * PILL_ORBIT_WOBBLE;
        let blob = 0.5 + (time * 2.0 + base_angle).sin() * 0.2;
        BlobPlacement {
            position: t.center + offset + wobble,
            scale: size_scale * blob * 0.6,
        }
    } else {
        let angle = base_angle + (time * 0.4 + fi).sin() * 0.2;
        let extension = 0.6 + (time * 1.8 + fi * 2.0).sin() * 0.3;
        let splatter = 0.25 + (time * 2.5 + fi).sin() * 0.15;
        BlobPlacement {
            position: t.center + Vec2::new(angle.cos(), angle.sin()) * half * extension,
            scale: size_scale * splatter * 0.4,
        }
    }
}

fn rect_placement(
    t: &HoverTarget,
    i: usize,
    amount: usize,
    time: f32,
    marker_width: f32,
) -> BlobPlacement {
    let fi = i as f32;
    let core_n = core_count(BlobShape::Rectangle, amount);

    if i < core_n {
        let rows = core_n.div_ceil(RECT_CORE_COLUMNS);
        let col = (i % RECT_CORE_COLUMNS) as f32;
        let row = (i / RECT_CORE_COLUMNS) as f32;
        let grid_x = col / (RECT_CORE_COLUMNS - 1) as f32 - 0.5;
        let grid_y = if rows > 1 {
            row / (rows - 1) as f32 - 0.5
        } else {
            0.0
        };
        let inner = (t.size - Vec2::splat(RECT_CORNER_RADIUS)).max(Vec2::ZERO);
        let wobble = Vec2::new(
            (time * 2.0 + fi * 0.8).sin(),
            (time * 2.3 + fi * 0.9).cos(),
        ) * RECT_CORE_WOBBLE;
        let core = 0.9 + (time * 1.5 + fi).sin() * 0.08;
        let size_scale = t.size / marker_width;
        return BlobPlacement {
            position: t.center + Vec2::new(grid_x * inner.x * 0.8, grid_y * inner.y * 0.6) + wobble,
            scale: Vec2::new(size_scale.x * core * 0.5, size_scale.y * core * 0.8),
        };
    }

    let edge_index = (i - core_n) as f32;
    let edge_total = (amount - core_n) as f32;
    let half = t.half_extents();
    let radius = RECT_CORNER_RADIUS.min(half.x).min(half.y);
    let perimeter = rounded_rect_perimeter(half, radius);
    let s = if perimeter > 0.0 {
        (edge_index / edge_total * perimeter + time * RECT_EDGE_SPEED).rem_euclid(perimeter)
    } else {
        0.0
    };
    let (point, normal) = rounded_rect_point(half, radius, s);
    let wobble = (time * 3.0 + edge_index).sin() * RECT_EDGE_WOBBLE;
    let edge_scale = 0.35 + (time * 2.0 + edge_index * 0.5).sin() * 0.1;
    BlobPlacement {
        position: t.center + point + normal * wobble,
        scale: Vec2::splat(edge_scale),
    }
}

#[inline]
pub fn rounded_rect_perimeter(half: Vec2, radius: f32) -> f32 {
    4.0 * (half.x - radius) + 4.0 * (half.y - radius) + TAU * radius
}

/// Point and outward unit normal at arc length `s` along a rounded rectangle
/// centered on the origin, starting at the left end of the top edge and
/// running clockwise on screen (y down).
pub fn rounded_rect_point(half: Vec2, radius: f32, s: f32) -> (Vec2, Vec2) {
    let straight_w = 2.0 * (half.x - radius);
    let straight_h = 2.0 * (half.y - radius);
    let arc = FRAC_PI_2 * radius;
    let (hw, hh, r) = (half.x, half.y, radius);

    let mut d = s.max(0.0);

    if d < straight_w {
        return (Vec2::new(-hw + r + d, -hh), Vec2::NEG_Y);
    }
    d -= straight_w;
    if d < arc {
        let a = d / r;
        let n = Vec2::new(a.sin(), -a.cos());
        return (Vec2::new(hw - r, -hh + r) + n * r, n);
    }
    d -= arc;
    if d < straight_h {
        return (Vec2::new(hw, -hh + r + d), Vec2::X);
    }
    d -= straight_h;
    if d < arc {
        let a = d / r;
        let n = Vec2::new(a.cos(), a.sin());
        return (Vec2::new(hw - r, hh - r) + n * r, n);
    }
    d -= arc;
    if d < straight_w {
        return (Vec2::new(hw - r - d, hh), Vec2::Y);
    }
    d -= straight_w;
    if d < arc {
        let a = d / r;
        let n = Vec2::new(-a.sin(), a.cos());
        return (Vec2::new(-hw + r, hh - r) + n * r, n);
    }
    d -= arc;
    if d < straight_h {
        return (Vec2::new(-hw, hh - r - d), Vec2::NEG_X);
    }
    d -= straight_h;
    if arc > 0.0 {
        let a = (d / r).min(FRAC_PI_2);
        let n = Vec2::new(-a.cos(), -a.sin());
        return (Vec2::new(-hw + r, -hh + r) + n * r, n);
    }
    (Vec2::new(-hw + r, -hh), Vec2::NEG_Y)
}
