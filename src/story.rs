use crate::scene::{AnimationKind, Background, Rgb, Scene};

pub const TITLE: &str = "A Birth Story";
pub const TAGLINE: &str = "A journey of hope, strength, and love";
pub const START_LABEL: &str = "Watch Story";
pub const RESTART_LABEL: &str = "Watch Again";
pub const AUDIO_HINT: &str = "🎵 Add your favorite lullaby music for the full experience";

const fn gradient(from: u32, to: u32) -> Background {
    Background::LinearGradient {
        angle_deg: 135.0,
        from: Rgb::hex(from),
        to: Rgb::hex(to),
    }
}

pub const SCENES: [Scene; 7] = [
    Scene {
        id: 1,
        duration_ms: 2000,
        text: "Every journey is different…",
        background: gradient(0x667eea, 0x764ba2),
        animation: AnimationKind::FadeIn,
    },
    Scene {
        id: 2,
        duration_ms: 2000,
        text: "But some journeys test every bit of your strength.",
        background: gradient(0xf093fb, 0xf5576c),
        animation: AnimationKind::FadeIn,
    },
    Scene {
        id: 3,
        duration_ms: 3000,
        text: "Sleepless nights. Fear. Prayers.",
        background: gradient(0x4facfe, 0x00f2fe),
        animation: AnimationKind::ZoomIn,
    },
    Scene {
        id: 4,
        duration_ms: 2000,
        text: "Yet… they never gave up.",
        background: gradient(0x43e97b, 0x38f9d7),
        animation: AnimationKind::FadeIn,
    },
    Scene {
        id: 5,
        duration_ms: 3000,
        text: "Because this little life is their whole world.",
        background: gradient(0xfa709a, 0xfee140),
        animation: AnimationKind::ZoomIn,
    },
    Scene {
        id: 6,
        duration_ms: 3000,
        text: "Strong parents raise strong miracles.",
        background: gradient(0x30cfd0, 0x330867),
        animation: AnimationKind::FadeIn,
    },
    Scene {
        id: 7,
        duration_ms: 2000,
        text: "❤️",
        background: gradient(0xa8edea, 0xfed6e3),
        animation: AnimationKind::FadeIn,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneList;
    use std::time::Duration;

    #[test]
    fn shipped_story_is_valid() {
        let list = SceneList::new(SCENES).unwrap();
        assert_eq!(list.len(), 7);
        assert_eq!(list.total_duration(), Duration::from_millis(17_000));
    }

    #[test]
    fn shipped_durations() {
        let durations: Vec<u32> = SCENES.iter().map(|s| s.duration_ms).collect();
        assert_eq!(durations, [2000, 2000, 3000, 2000, 3000, 3000, 2000]);
    }
}
