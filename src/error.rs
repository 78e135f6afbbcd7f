use thiserror::Error;

/// Problems with a scene table. The shipped story is checked once at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene list is empty")]
    Empty,

    #[error("scene {id} has a zero duration")]
    ZeroDuration { id: u32 },

    #[error("scene id {id} is used more than once")]
    DuplicateId { id: u32 },
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to start ffmpeg: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("ffmpeg stdin is not available")]
    NoStdin,

    #[error("failed to write frame to ffmpeg: {0}")]
    Write(#[source] std::io::Error),

    #[error("ffmpeg exited with {0}")]
    Exit(std::process::ExitStatus),
}
