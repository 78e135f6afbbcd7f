pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Default frames per second

pub const ENTRANCE_DURATION: f32 = 0.8;       // Scene text and background entrance (seconds)
pub const END_BUTTON_DELAY: f32 = 1.0;        // Wait before the restart button appears (seconds)
pub const END_BUTTON_DURATION: f32 = 0.4;     // Restart button entrance (seconds)
pub const RECORD_END_HOLD: f32 = 2.0;         // End screen kept in a recording (seconds)

pub const OVERLAY_ALPHA: f32 = 0.2;           // Black veil over the background
pub const SLIDE_UP_OFFSET: f32 = 50.0;        // Starting offset of SlideUp text (pixels)
pub const END_BUTTON_RISE: f32 = 20.0;        // Starting offset of the restart button (pixels)

pub const CONTENT_WIDTH: i32 = 1400;          // Wrap width for scene text
pub const SCENE_FONT_SIZE: i32 = 84;
pub const TITLE_FONT_SIZE: i32 = 110;
pub const TAGLINE_FONT_SIZE: i32 = 40;
pub const BUTTON_FONT_SIZE: i32 = 36;
pub const HINT_FONT_SIZE: i32 = 24;
pub const PROGRESS_BAR_HEIGHT: i32 = 4;
