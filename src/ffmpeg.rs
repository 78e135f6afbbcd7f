use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use raylib::prelude::*;
use tracing::{debug, info};

use crate::error::RecordError;

/// Encodes frames piped as raw RGBA into an mp4.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg, RecordError> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .map_err(RecordError::Spawn)?;
        let stdin = process.stdin.take().ok_or(RecordError::NoStdin)?;

        info!("recording to {}", output.display());
        Ok(Ffmpeg { process, stdin: Some(stdin), frames: 0 })
    }

    pub fn write(&mut self, image: &Image) -> Result<(), RecordError> {
        let stdin = self.stdin.as_mut().ok_or(RecordError::NoStdin)?;
        let row_len = (image.width() * 4) as usize; // RGBA
        let height = image.height() as usize;

        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, row_len * height) };

        // raylib hands back render textures bottom-up; ffmpeg wants top-down.
        for row in pixels.chunks_exact(row_len).rev() {
            stdin.write_all(row).map_err(RecordError::Write)?;
        }

        self.frames += 1;
        Ok(())
    }

    /// Close the pipe and wait for the encoder to flush.
    pub fn finish(mut self) -> Result<u64, RecordError> {
        self.stdin = None;
        let status = self.process.wait().map_err(RecordError::Write)?;
        if !status.success() {
            return Err(RecordError::Exit(status));
        }
        info!("recorded {} frames", self.frames);
        Ok(self.frames)
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        if self.stdin.take().is_some() {
            debug!("ffmpeg dropped before finish, waiting for it to exit");
            let _ = self.process.wait();
        }
    }
}
