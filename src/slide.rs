use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::constants::*;
use crate::scene::AnimationKind;
use crate::sequencer::View;
use crate::story;
use crate::text::{self, Glyphs};

/// Identity of the content block. A new key restarts the entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKey {
    Intro,
    Scene(u32),
}

impl ContentKey {
    pub fn of(view: &View) -> Self {
        if view.show_intro {
            ContentKey::Intro
        } else {
            ContentKey::Scene(view.scene.id)
        }
    }
}

/// Opacity, scale and vertical offset of the content block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub scale: f32,
    pub offset_y: f32,
}

impl Pose {
    pub const REST: Pose = Pose { opacity: 1.0, scale: 1.0, offset_y: 0.0 };
}

/// Start and end pose of an entrance.
pub fn entrance(key: ContentKey, animation: AnimationKind) -> (Pose, Pose) {
    let hidden = Pose { opacity: 0.0, ..Pose::REST };
    match (key, animation) {
        (ContentKey::Intro, _) => (Pose { scale: 0.9, ..hidden }, Pose::REST),
        (ContentKey::Scene(_), AnimationKind::FadeIn) => (hidden, Pose::REST),
        (ContentKey::Scene(_), AnimationKind::ZoomIn) => (Pose { scale: 0.8, ..hidden }, Pose { scale: 1.05, ..Pose::REST }),
        (ContentKey::Scene(_), AnimationKind::SlideUp) => (Pose { offset_y: SLIDE_UP_OFFSET, ..hidden }, Pose::REST),
    }
}

pub struct Slide {
    pub key: ContentKey,
    pose: Pose,

    tween_opacity: ease::Tween,
    tween_scale: ease::Tween,
    tween_offset: ease::Tween,
}

impl Slide {
    pub fn new(key: ContentKey, animation: AnimationKind) -> Self {
        let (from, to) = entrance(key, animation);
        Self {
            key,
            pose: from,
            tween_opacity: ease::Tween::new(ease::linear_none, from.opacity, to.opacity, ENTRANCE_DURATION),
            tween_scale: ease::Tween::new(ease::cubic_out, from.scale, to.scale, ENTRANCE_DURATION),
            tween_offset: ease::Tween::new(ease::cubic_out, from.offset_y, to.offset_y, ENTRANCE_DURATION),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pose = Pose {
            opacity: self.tween_opacity.apply(dt),
            scale: self.tween_scale.apply(dt),
            offset_y: self.tween_offset.apply(dt),
        };
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, view: &View) {
        match self.key {
            ContentKey::Intro => self.draw_intro(d),
            ContentKey::Scene(_) => self.draw_scene_text(d, view.scene.text),
        }
    }

    fn draw_intro(&self, d: &mut RaylibDrawHandle) {
        let pose = self.pose();
        let center_y = RENDER_HEIGHT as f32 / 2.0 + pose.offset_y;

        draw_centered(d, story::TITLE, center_y - 150.0, scaled(TITLE_FONT_SIZE, pose.scale), pose.opacity);
        draw_centered(
            d,
            story::TAGLINE,
            center_y - 10.0,
            scaled(TAGLINE_FONT_SIZE, pose.scale),
            pose.opacity * 0.9,
        );
        draw_button(d, start_button(), story::START_LABEL, pose.opacity, pose.scale);
    }

    fn draw_scene_text(&self, d: &mut RaylibDrawHandle, copy: &str) {
        let pose = self.pose();
        let center_y = RENDER_HEIGHT as f32 / 2.0 + pose.offset_y;
        let size = scaled(SCENE_FONT_SIZE, pose.scale);

        match text::prepare(copy) {
            Glyphs::Heart => draw_heart(d, RENDER_WIDTH as f32 / 2.0, center_y, size as f32 * 1.6, pose.opacity),
            Glyphs::Text(copy) => {
                let lines = text::wrap(&copy, |line| measure_text(line, size) <= CONTENT_WIDTH);
                let line_height = size as f32 * 1.2;
                let top = center_y - line_height * lines.len() as f32 / 2.0;
                for (i, line) in lines.iter().enumerate() {
                    let y = top + line_height * (i as f32 + 0.5);
                    draw_centered(d, line, y, size, pose.opacity);
                }
            }
        }
    }
}

fn scaled(size: i32, scale: f32) -> i32 {
    (size as f32 * scale).round() as i32
}

pub fn white(alpha: f32) -> Color {
    Color::new(255, 255, 255, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Draw one line of text centred horizontally, vertically centred on `center_y`.
pub fn draw_centered(d: &mut RaylibDrawHandle, copy: &str, center_y: f32, size: i32, opacity: f32) {
    let copy = text::to_ascii(copy);
    let width = measure_text(&copy, size);
    let x = (RENDER_WIDTH - width) / 2;
    let y = (center_y - size as f32 / 2.0).round() as i32;

    // Soft drop shadow
    d.draw_text(&copy, x + 3, y + 4, size, Color::new(0, 0, 0, (opacity.clamp(0.0, 1.0) * 90.0) as u8));
    d.draw_text(&copy, x, y, size, white(opacity));
}

pub fn draw_heart(d: &mut RaylibDrawHandle, cx: f32, cy: f32, size: f32, opacity: f32) {
    let r = size * 0.3;
    let color = white(opacity);
    d.draw_circle_v(Vector2::new(cx - r * 0.95, cy - r * 0.3), r, color);
    d.draw_circle_v(Vector2::new(cx + r * 0.95, cy - r * 0.3), r, color);
    // Counter-clockwise on screen
    d.draw_triangle(
        Vector2::new(cx - r * 1.9, cy - r * 0.1),
        Vector2::new(cx, cy + r * 1.9),
        Vector2::new(cx + r * 1.9, cy - r * 0.1),
        color,
    );
}

pub fn start_button() -> Rectangle {
    button_at(RENDER_HEIGHT as f32 / 2.0 + 140.0, 360.0, 90.0)
}

pub fn restart_button() -> Rectangle {
    button_at(RENDER_HEIGHT as f32 / 2.0 + 200.0, 320.0, 80.0)
}

fn button_at(center_y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle::new(RENDER_WIDTH as f32 / 2.0 - width / 2.0, center_y - height / 2.0, width, height)
}

pub fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, opacity: f32, scale: f32) {
    let w = rect.width * scale;
    let h = rect.height * scale;
    let cx = rect.x + rect.width / 2.0;
    let cy = rect.y + rect.height / 2.0;
    let body = Rectangle::new(cx - w / 2.0, cy - h / 2.0, w, h);

    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    d.draw_rectangle_rounded(body, 1.0, 16, white(opacity));

    let size = scaled(BUTTON_FONT_SIZE, scale);
    let width = measure_text(label, size);
    // tailwind purple-600
    d.draw_text(
        label,
        (cx - width as f32 / 2.0).round() as i32,
        (cy - size as f32 / 2.0).round() as i32,
        size,
        Color::new(0x93, 0x33, 0xea, alpha),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrances_end_at_rest_except_zoom() {
        for kind in [AnimationKind::FadeIn, AnimationKind::SlideUp] {
            let (from, to) = entrance(ContentKey::Scene(1), kind);
            assert_eq!(from.opacity, 0.0);
            assert_eq!(to, Pose::REST);
        }
        let (from, to) = entrance(ContentKey::Scene(3), AnimationKind::ZoomIn);
        assert_eq!(from.scale, 0.8);
        assert_eq!(to.scale, 1.05);
    }

    #[test]
    fn slide_up_starts_below() {
        let (from, _) = entrance(ContentKey::Scene(1), AnimationKind::SlideUp);
        assert_eq!(from.offset_y, SLIDE_UP_OFFSET);
    }

    #[test]
    fn intro_ignores_scene_animation() {
        let (from, to) = entrance(ContentKey::Intro, AnimationKind::ZoomIn);
        assert_eq!(from.scale, 0.9);
        assert_eq!(to, Pose::REST);
    }

    #[test]
    fn slide_reaches_final_pose() {
        let mut slide = Slide::new(ContentKey::Scene(3), AnimationKind::ZoomIn);
        assert_eq!(slide.pose().opacity, 0.0);
        for _ in 0..60 {
            slide.update(1.0 / 60.0);
        }
        let pose = slide.pose();
        assert!((pose.opacity - 1.0).abs() < 1e-3);
        assert!((pose.scale - 1.05).abs() < 1e-3);
    }

    #[test]
    fn buttons_are_centred() {
        for rect in [start_button(), restart_button()] {
            let center = rect.x + rect.width / 2.0;
            assert_eq!(center, RENDER_WIDTH as f32 / 2.0);
        }
    }
}
