use raylib::prelude::*;

use crate::constants::*;
use crate::sequencer::View;
use crate::stage::active_button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    Restart,
}

/// Input gathered for one frame. `click` is in render-texture coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Input {
    pub confirm: bool,
    pub restart: bool,
    pub click: Option<Vector2>,
}

impl Input {
    pub fn read(rl: &RaylibHandle) -> Self {
        let click = rl
            .is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
            .then(|| to_render_space(rl.get_mouse_position(), rl.get_screen_width(), rl.get_screen_height()));

        Self {
            confirm: rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_SPACE),
            restart: rl.is_key_pressed(KeyboardKey::KEY_R),
            click,
        }
    }
}

/// The framebuffer is stretched over the whole window.
pub fn to_render_space(point: Vector2, screen_width: i32, screen_height: i32) -> Vector2 {
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width.max(1) as f32,
        point.y * RENDER_HEIGHT as f32 / screen_height.max(1) as f32,
    )
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x <= rect.x + rect.width && point.y >= rect.y && point.y <= rect.y + rect.height
}

pub fn resolve(input: &Input, view: &View) -> Option<Trigger> {
    if input.restart {
        return Some(Trigger::Restart);
    }

    let pressed = input.confirm
        || match (input.click, active_button(view)) {
            (Some(point), Some(button)) => contains(button, point),
            _ => false,
        };
    if !pressed {
        return None;
    }

    if view.show_intro {
        Some(Trigger::Start)
    } else if view.show_end {
        Some(Trigger::Restart)
    } else {
        None
    }
}
