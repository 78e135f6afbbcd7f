use std::path::PathBuf;

use clap::Parser;

use crate::constants::{FPS, RENDER_HEIGHT, RENDER_WIDTH};

#[derive(Parser, Debug)]
#[command(version, about = "Plays a short timed story of full-screen scenes")]
pub struct Args {
    /// Window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    #[arg(long)]
    pub fullscreen: bool,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Skip the intro screen and start playing immediately
    #[arg(long)]
    pub autostart: bool,

    /// How often the progress bar is refreshed, in milliseconds
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    pub sample_interval_ms: u64,

    /// Render the story offline into a video file instead of playing it live
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["birth-story"]);
        assert_eq!((args.width, args.height), (960, 540));
        assert_eq!(args.fps, 60);
        assert_eq!(args.sample_interval_ms, 50);
        assert!(!args.autostart && !args.fullscreen);
        assert!(args.record.is_none());
    }

    #[test]
    fn record_flag() {
        let args = Args::parse_from(["birth-story", "--record", "story.mp4", "--fps", "30"]);
        assert_eq!(args.record, Some(PathBuf::from("story.mp4")));
        assert_eq!(args.fps, 30);
    }

    #[test]
    fn zero_sample_interval_is_rejected() {
        assert!(Args::try_parse_from(["birth-story", "--sample-interval-ms", "0"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
