use raylib::prelude::*;

use crate::scene::{Background, Rgb};

/// Gradient position (0 = start colour, 1 = end colour) of each corner of a
/// `width` x `height` box, in the order top-left, bottom-left, top-right,
/// bottom-right. Follows the CSS `linear-gradient(<angle>, ...)` geometry.
pub fn corner_positions(angle_deg: f32, width: f32, height: f32) -> [f32; 4] {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let line_length = (width * sin).abs() + (height * cos).abs();
    let at = |dx: f32, dy: f32| {
        if line_length == 0.0 {
            return 0.5;
        }
        (0.5 + (dx * sin - dy * cos) / line_length).clamp(0.0, 1.0)
    };

    let (hw, hh) = (width * 0.5, height * 0.5);
    [at(-hw, -hh), at(-hw, hh), at(hw, -hh), at(hw, hh)]
}

pub fn mix(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgb(channel(from.0, to.0), channel(from.1, to.1), channel(from.2, to.2))
}

pub fn with_alpha(rgb: Rgb, alpha: f32) -> Color {
    Color::new(rgb.0, rgb.1, rgb.2, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

pub fn draw_background(d: &mut RaylibDrawHandle, background: &Background, rect: Rectangle, alpha: f32) {
    match *background {
        Background::LinearGradient { angle_deg, from, to } => {
            let [tl, bl, tr, br] = corner_positions(angle_deg, rect.width, rect.height)
                .map(|t| with_alpha(mix(from, to, t), alpha));
            d.draw_rectangle_gradient_ex(rect, tl, bl, tr, br);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn diagonal_runs_top_left_to_bottom_right() {
        let [tl, bl, tr, br] = corner_positions(135.0, 1920.0, 1080.0);
        assert!(tl.abs() < 1e-4);
        assert!((br - 1.0).abs() < 1e-4);
        assert!((bl - tr).abs() > 0.1, "off-diagonal corners differ on a wide box");
    }

    #[test]
    fn square_diagonal_has_equal_off_corners() {
        assert!(close(corner_positions(135.0, 100.0, 100.0), [0.0, 0.5, 0.5, 1.0]));
    }

    #[test]
    fn vertical_and_horizontal() {
        assert!(close(corner_positions(180.0, 100.0, 50.0), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(corner_positions(90.0, 100.0, 50.0), [0.0, 0.0, 1.0, 1.0]));
    }

    #[test]
    fn mix_endpoints_and_midpoint() {
        let a = Rgb(0, 100, 200);
        let b = Rgb(200, 100, 0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Rgb(100, 100, 100));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(with_alpha(Rgb(1, 2, 3), 2.0).a, 255);
        assert_eq!(with_alpha(Rgb(1, 2, 3), -1.0).a, 0);
    }
}
