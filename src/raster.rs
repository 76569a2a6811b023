//! Distance-Field Rasterizer
//!
//! Anti-aliased discs and capsule segments. Coverage comes from the signed
//! distance between each candidate pixel and the shape edge: negative means
//! inside (opaque), distances inside the interpolation band blend with
//! linearly fading opacity, anything further is untouched. All working
//! regions are clipped to the canvas before iteration.

use crate::display::PixelBuffer;
use crate::math2d::Vec2;

/// Width in pixels of the anti-aliasing band outside a shape's exact edge
pub const INTERP_RADIUS: f64 = 1.0;

/// Fill an anti-aliased disc centered at `center`.
pub fn fill_circle_aa(buffer: &mut PixelBuffer, center: Vec2, radius: f64, r: u8, g: u8, b: u8) {
    let w = buffer.width() as f64;
    let h = buffer.height() as f64;

    let sx = (center.x - radius - INTERP_RADIUS).max(0.0).floor() as i32;
    let ex = (center.x + radius + INTERP_RADIUS).min(w - 1.0).floor() as i32;
    let sy = (center.y - radius - INTERP_RADIUS).max(0.0).floor() as i32;
    let ey = (center.y + radius + INTERP_RADIUS).min(h - 1.0).floor() as i32;

    for iy in sy..=ey {
        for ix in sx..=ex {
            let d = Vec2::new(ix as f64, iy as f64).distance(&center);
            let diff = d - radius;
            if diff < 0.0 {
                buffer.set_pixel(ix, iy, r, g, b);
            } else if diff < INTERP_RADIUS {
                buffer.blend_pixel(ix, iy, r, g, b, 1.0 - diff / INTERP_RADIUS);
            }
        }
    }
}

/// Distance from `p` to the segment `p0`-`p1`, projection clamped to the
/// segment
fn segment_distance(p0: Vec2, p1: Vec2, p: Vec2) -> f64 {
    let pa = p - p0;
    let ba = p1 - p0;
    let h = (pa.dot(&ba) / ba.dot(&ba)).clamp(0.0, 1.0);
    (pa - ba * h).length()
}

/// Draw an anti-aliased capsule segment with rounded end caps.
///
/// `opacity` scales the whole line; the interpolation band fades on top of
/// it. Segments with less than one pixel of horizontal or vertical extent
/// draw nothing - the degenerate-extent policy, not an oversight.
pub fn line_aa(
    buffer: &mut PixelBuffer,
    p0: Vec2,
    p1: Vec2,
    radius: f64,
    opacity: f64,
    r: u8,
    g: u8,
    b: u8,
) {
    let delta = p1 - p0;
    if delta.x.abs() < 1.0 || delta.y.abs() < 1.0 {
        return;
    }

    let step_x = if delta.x >= 0.0 { 1.0 } else { -1.0 };
    let step_y = if delta.y >= 0.0 { 1.0 } else { -1.0 };
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;

    // Walk a pixel grid from p0 toward p1, padded by the capsule radius and
    // the interpolation band on every side
    let reach = radius + INTERP_RADIUS;
    let mut j = -reach;
    while j <= delta.x.abs() + reach {
        let ix = (p0.x + j * step_x).floor() as i32;
        if ix >= 0 && ix < w {
            let mut i = -reach;
            while i <= delta.y.abs() + reach {
                let iy = (p0.y + i * step_y).floor() as i32;
                if iy >= 0 && iy < h {
                    let p = Vec2::new(ix as f64, iy as f64);
                    // The endpoint-distance minimum keeps the caps rounded
                    let d = segment_distance(p0, p1, p)
                        .min(p.distance(&p0))
                        .min(p.distance(&p1));
                    let diff = d - radius;
                    if diff < 0.0 {
                        buffer.blend_pixel(ix, iy, r, g, b, opacity);
                    } else if diff < INTERP_RADIUS {
                        let band = opacity * (1.0 - diff / INTERP_RADIUS);
                        buffer.blend_pixel(ix, iy, r, g, b, band);
                    }
                }
                i += 1.0;
            }
        }
        j += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BG: (u8, u8, u8) = (54, 47, 41);

    fn cleared(width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::with_size(width, height);
        buffer.clear(BG.0, BG.1, BG.2);
        buffer
    }

    #[test]
    fn test_circle_center_opaque_white_for_any_radius() {
        for radius in [0.0, 1.0, 3.0, 10.0, 50.0] {
            let mut buffer = cleared(128, 128);
            fill_circle_aa(&mut buffer, Vec2::new(64.0, 64.0), radius, 255, 255, 255);
            assert_eq!(
                buffer.get_pixel(64, 64),
                Some((255, 255, 255)),
                "center not white at radius {}",
                radius
            );
        }
    }

    #[test]
    fn test_circle_interior_and_exterior() {
        let mut buffer = cleared(128, 128);
        fill_circle_aa(&mut buffer, Vec2::new(64.0, 64.0), 3.0, 255, 255, 255);

        // Strictly inside
        assert_eq!(buffer.get_pixel(66, 64), Some((255, 255, 255)));
        // Beyond the band (distance 5 > radius + INTERP_RADIUS)
        assert_eq!(buffer.get_pixel(69, 64), Some(BG));
    }

    #[test]
    fn test_circle_edge_band_blends() {
        // Off-center so the band pixel sits at a fractional distance
        let mut buffer = cleared(128, 128);
        fill_circle_aa(&mut buffer, Vec2::new(64.5, 64.0), 3.0, 255, 255, 255);

        // Pixel (68, 64): distance 3.5, half a pixel into the band
        let (r, g, b) = buffer.get_pixel(68, 64).unwrap();
        assert!(r > BG.0 && r < 255, "r = {}", r);
        assert!(g > BG.1 && g < 255);
        assert!(b > BG.2 && b < 255);
    }

    #[test]
    fn test_offscreen_circle_leaves_buffer_untouched() {
        let mut buffer = cleared(64, 48);
        let before = buffer.as_bytes().to_vec();

        fill_circle_aa(&mut buffer, Vec2::new(-50.0, -50.0), 10.0, 255, 255, 255);
        fill_circle_aa(&mut buffer, Vec2::new(500.0, 20.0), 10.0, 255, 255, 255);
        fill_circle_aa(&mut buffer, Vec2::new(20.0, 500.0), 10.0, 255, 255, 255);

        assert_eq!(buffer.as_bytes(), &before[..]);
    }

    #[test]
    fn test_line_body_fully_opaque_at_opacity_one() {
        let mut buffer = cleared(128, 128);
        let p0 = Vec2::new(30.0, 30.0);
        let p1 = Vec2::new(50.0, 50.0);
        line_aa(&mut buffer, p0, p1, 1.0, 1.0, 255, 255, 255);

        // Pixels along the diagonal lie on the segment itself
        for k in 30..=50 {
            assert_eq!(
                buffer.get_pixel(k, k),
                Some((255, 255, 255)),
                "pixel ({}, {}) not opaque",
                k,
                k
            );
        }
        // Far from the capsule
        assert_eq!(buffer.get_pixel(30, 50), Some(BG));
    }

    #[test]
    fn test_line_opacity_scales_the_band() {
        let mut buffer = cleared(128, 128);
        line_aa(
            &mut buffer,
            Vec2::new(30.0, 30.0),
            Vec2::new(50.0, 50.0),
            1.0,
            0.5,
            255,
            255,
            255,
        );

        // On-segment pixel blended at half opacity over the background:
        // floor(54 * 0.5 + 255 * 0.5) = 154 on the red channel
        assert_eq!(buffer.get_pixel(40, 40), Some((154, 151, 148)));
    }

    #[test]
    fn test_degenerate_horizontal_segment_skipped() {
        let mut buffer = cleared(128, 128);
        let before = buffer.as_bytes().to_vec();
        line_aa(
            &mut buffer,
            Vec2::new(20.0, 64.0),
            Vec2::new(100.0, 64.5),
            1.0,
            1.0,
            255,
            255,
            255,
        );
        assert_eq!(buffer.as_bytes(), &before[..]);
    }

    #[test]
    fn test_degenerate_vertical_segment_skipped() {
        let mut buffer = cleared(128, 128);
        let before = buffer.as_bytes().to_vec();
        line_aa(
            &mut buffer,
            Vec2::new(64.0, 20.0),
            Vec2::new(64.9, 100.0),
            1.0,
            1.0,
            255,
            255,
            255,
        );
        assert_eq!(buffer.as_bytes(), &before[..]);
    }

    #[test]
    fn test_line_clips_to_canvas() {
        // Endpoints far outside: only the in-bounds stretch is written, and
        // nothing panics
        let mut buffer = cleared(64, 48);
        line_aa(
            &mut buffer,
            Vec2::new(-100.0, -100.0),
            Vec2::new(200.0, 200.0),
            1.0,
            1.0,
            255,
            255,
            255,
        );
        assert_eq!(buffer.get_pixel(20, 20), Some((255, 255, 255)));
    }

    proptest! {
        // Arbitrary draws never panic and never break the opaque-alpha
        // invariant of the backing store
        #[test]
        fn prop_draws_keep_alpha_opaque(
            cx in -200.0..300.0f64,
            cy in -200.0..300.0f64,
            radius in 0.0..40.0f64,
            lx in -200.0..300.0f64,
            ly in -200.0..300.0f64,
            opacity in -2.0..3.0f64,
        ) {
            let mut buffer = PixelBuffer::with_size(64, 48);
            fill_circle_aa(&mut buffer, Vec2::new(cx, cy), radius, 255, 255, 255);
            line_aa(
                &mut buffer,
                Vec2::new(cx, cy),
                Vec2::new(lx, ly),
                1.0,
                opacity,
                255,
                255,
                255,
            );
            for px in buffer.as_bytes().chunks_exact(4) {
                prop_assert_eq!(px[3], 255);
            }
        }
    }
}
