use raylib::prelude::*;

use crate::constants::*;
use crate::gradient::draw_background;
use crate::scene::Background;
use crate::sequencer::View;
use crate::slide::{self, ContentKey, Slide, draw_button, draw_centered, restart_button, white};
use crate::story;

/// Everything drawn for a frame. Holds only animation state; what to show
/// always comes from the sequencer's view.
pub struct Stage {
    background_key: u32,
    background: Background,
    previous_background: Option<Background>,
    tween_background: ease::Tween,
    background_alpha: f32,

    slide: Slide,

    end_timer: f32,
}

impl Stage {
    pub fn new(view: &View) -> Self {
        Self {
            background_key: view.scene.id,
            background: view.scene.background,
            previous_background: None,
            tween_background: ease::Tween::new(ease::linear_none, 0.0, 1.0, ENTRANCE_DURATION),
            background_alpha: 0.0,
            slide: Slide::new(ContentKey::of(view), view.scene.animation),
            end_timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, view: &View) {
        if view.scene.id != self.background_key {
            self.previous_background = Some(self.background);
            self.background_key = view.scene.id;
            self.background = view.scene.background;
            self.tween_background = ease::Tween::new(ease::linear_none, 0.0, 1.0, ENTRANCE_DURATION);
        }
        self.background_alpha = self.tween_background.apply(dt);
        if self.background_alpha >= 1.0 {
            self.previous_background = None;
        }

        let key = ContentKey::of(view);
        if key != self.slide.key {
            self.slide = Slide::new(key, view.scene.animation);
        }
        self.slide.update(dt);

        if view.show_end {
            self.end_timer += dt;
        } else {
            self.end_timer = 0.0;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, view: &View) {
        let screen = Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32);

        d.clear_background(Color::BLACK);
        if let Some(previous) = &self.previous_background {
            draw_background(d, previous, screen, 1.0);
        }
        draw_background(d, &self.background, screen, self.background_alpha);
        d.draw_rectangle_rec(screen, Color::new(0, 0, 0, (OVERLAY_ALPHA * 255.0) as u8));

        self.slide.draw(d, view);

        if view.show_end {
            let (opacity, rise) = end_button_pose(self.end_timer);
            let mut rect = restart_button();
            rect.y += rise;
            draw_button(d, rect, story::RESTART_LABEL, opacity, 1.0);
        }

        if view.is_playing {
            draw_progress_bar(d, view.progress);
            draw_centered(
                d,
                story::AUDIO_HINT,
                (RENDER_HEIGHT - 32 - HINT_FONT_SIZE / 2) as f32,
                HINT_FONT_SIZE,
                0.6,
            );
        }
    }
}

/// Opacity and downward offset of the restart button `elapsed` seconds after
/// the end screen appeared.
pub fn end_button_pose(elapsed: f32) -> (f32, f32) {
    let t = ((elapsed - END_BUTTON_DELAY) / END_BUTTON_DURATION).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    (eased, END_BUTTON_RISE * (1.0 - eased))
}

fn draw_progress_bar(d: &mut RaylibDrawHandle, progress: f32) {
    let y = RENDER_HEIGHT - PROGRESS_BAR_HEIGHT;
    let fill = (RENDER_WIDTH as f32 * progress.clamp(0.0, 100.0) / 100.0).round() as i32;
    d.draw_rectangle(0, y, RENDER_WIDTH, PROGRESS_BAR_HEIGHT, white(0.2));
    d.draw_rectangle(0, y, fill, PROGRESS_BAR_HEIGHT, Color::WHITE);
}

/// Button currently accepting clicks, in render-texture coordinates.
pub fn active_button(view: &View) -> Option<Rectangle> {
    if view.show_intro {
        Some(slide::start_button())
    } else if view.show_end {
        Some(restart_button())
    } else {
        None
    }
}
