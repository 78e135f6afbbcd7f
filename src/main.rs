use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod clock;
mod constants;
mod controls;
mod error;
mod ffmpeg;
mod gradient;
mod scene;
mod sequencer;
mod slide;
mod stage;
mod state;
mod story;
mod text;
mod timer;

use crate::cli::Args;
use crate::clock::{Clock, ManualClock, SystemClock};
use crate::constants::*;
use crate::controls::{Input, Trigger};
use crate::ffmpeg::Ffmpeg;
use crate::scene::SceneList;
use crate::sequencer::Sequencer;
use crate::stage::Stage;
use crate::state::Phase;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let scenes = SceneList::new(story::SCENES).context("story table is malformed")?;
    let sample_interval = Duration::from_millis(args.sample_interval_ms);
    info!("{} scenes, {:?} total", scenes.len(), scenes.total_duration());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(story::TITLE)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if args.fullscreen {
        rl.toggle_fullscreen();
    }
    info!("window {}x{} at {} fps", args.width, args.height, args.fps);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    let mut player = Player { rl: &mut rl, thread: &thread, framebuffer: &mut framebuffer };

    match &args.record {
        Some(output) => {
            // Offline rendering: time advances one frame per rendered frame.
            let recorder = Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, args.fps, output)
                .with_context(|| format!("cannot record to {}", output.display()))?;
            let sequencer = Sequencer::new(scenes, ManualClock::new()).with_sample_interval(sample_interval);
            player.run(sequencer, Some(recorder), true, args.fps)
        }
        None => {
            let sequencer = Sequencer::new(scenes, SystemClock::new()).with_sample_interval(sample_interval);
            player.run(sequencer, None, args.autostart, args.fps)
        }
    }
}

struct Player<'a> {
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
    framebuffer: &'a mut RenderTexture2D,
}

impl Player<'_> {
    fn run<C: Clock>(
        &mut self,
        mut sequencer: Sequencer<C>,
        mut recorder: Option<Ffmpeg>,
        autostart: bool,
        fps: u32,
    ) -> Result<()> {
        let frame_time = 1.0 / fps.max(1) as f32;
        let mut stage = Stage::new(&sequencer.view());
        let mut end_hold = 0.0;

        if autostart {
            sequencer.start();
        }

        // --- Main Loop ---
        while !self.rl.window_should_close() {
            let dt = if recorder.is_some() { frame_time } else { self.rl.get_frame_time() };

            sequencer.clock().on_frame(Duration::from_secs_f32(dt));
            sequencer.pump();

            if recorder.is_none() {
                match controls::resolve(&Input::read(self.rl), &sequencer.view()) {
                    Some(Trigger::Start) => sequencer.start(),
                    Some(Trigger::Restart) => sequencer.restart(),
                    None => {}
                }
            }

            let view = sequencer.view();
            stage.update(dt, &view);

            // --- Render into the fixed size framebuffer ---
            let thread = self.thread;
            self.rl.draw_texture_mode(thread, &mut *self.framebuffer, |mut tmd| {
                let mut d = tmd.begin_drawing(thread);
                stage.draw(&mut d, &view);
            });

            // Render textures are stored upside down, flip while scaling to the window
            {
                let mut d = self.rl.begin_drawing(thread);
                let sw = d.get_screen_width() as f32;
                let sh = d.get_screen_height() as f32;
                d.clear_background(Color::BLACK);
                d.draw_texture_pro(
                    &*self.framebuffer,
                    Rectangle::new(0.0, 0.0, self.framebuffer.width() as f32, -(self.framebuffer.height() as f32)),
                    Rectangle::new(0.0, 0.0, sw, sh),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }

            if let Some(ffmpeg) = recorder.as_mut() {
                let image = self
                    .framebuffer
                    .load_image()
                    .map_err(|e| anyhow!("failed to read back frame: {e}"))?;
                ffmpeg.write(&image)?;

                if sequencer.phase() == Phase::Ended {
                    end_hold += dt;
                    if end_hold >= RECORD_END_HOLD {
                        break;
                    }
                }
            }
        }

        if let Some(ffmpeg) = recorder {
            ffmpeg.finish()?;
        }
        Ok(())
    }
}
