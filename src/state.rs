#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub progress: f32, // percent of the current scene's duration, 0..=100
}

impl PlaybackState {
    pub const IDLE: PlaybackState = PlaybackState { current_index: 0, is_playing: false, progress: 0.0 };

    pub fn phase(&self, last_index: usize) -> Phase {
        if self.is_playing {
            Phase::Playing(self.current_index)
        } else if self.current_index == last_index && self.progress >= 100.0 {
            Phase::Ended
        } else {
            Phase::Intro
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::IDLE
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Intro,          // Waiting for the first start
    Playing(usize), // Showing the scene at this index
    Ended,          // Last scene finished, waiting for a restart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_is_intro() {
        assert_eq!(PlaybackState::default().phase(6), Phase::Intro);
    }

    #[test]
    fn playing_reports_index() {
        let state = PlaybackState { current_index: 3, is_playing: true, progress: 40.0 };
        assert_eq!(state.phase(6), Phase::Playing(3));
    }

    #[test]
    fn completed_last_scene_is_ended() {
        let state = PlaybackState { current_index: 6, is_playing: false, progress: 100.0 };
        assert_eq!(state.phase(6), Phase::Ended);
    }

    #[test]
    fn single_scene_intro_and_end_differ_by_progress() {
        let intro = PlaybackState::IDLE;
        let ended = PlaybackState { progress: 100.0, ..PlaybackState::IDLE };
        assert_eq!(intro.phase(0), Phase::Intro);
        assert_eq!(ended.phase(0), Phase::Ended);
    }
}
