use std::collections::HashSet;
use std::ops::Index;
use std::time::Duration;

use crate::error::SceneError;

/// Entrance animation played when a scene's text appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    FadeIn,
    ZoomIn,
    SlideUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `0x667eea` style literal.
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

/// Scene backdrop. The sequencer never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// CSS convention: 0deg points up, 90deg points right.
    LinearGradient { angle_deg: f32, from: Rgb, to: Rgb },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub id: u32,
    pub duration_ms: u32,
    pub text: &'static str,
    pub background: Background,
    pub animation: AnimationKind,
}

impl Scene {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }
}

/// Ordered, non-empty scene table with unique ids and positive durations.
#[derive(Debug, Clone)]
pub struct SceneList {
    scenes: Vec<Scene>,
}

impl SceneList {
    pub fn new(scenes: impl Into<Vec<Scene>>) -> Result<Self, SceneError> {
        let scenes = scenes.into();
        if scenes.is_empty() {
            return Err(SceneError::Empty);
        }

        let mut seen = HashSet::new();
        for scene in &scenes {
            if scene.duration_ms == 0 {
                return Err(SceneError::ZeroDuration { id: scene.id });
            }
            if !seen.insert(scene.id) {
                return Err(SceneError::DuplicateId { id: scene.id });
            }
        }

        Ok(Self { scenes })
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn last_index(&self) -> usize {
        self.scenes.len() - 1
    }

    pub fn total_duration(&self) -> Duration {
        self.scenes.iter().map(Scene::duration).sum()
    }
}

impl Index<usize> for SceneList {
    type Output = Scene;

    fn index(&self, index: usize) -> &Scene {
        &self.scenes[index]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn synthetic(durations: &[u32]) -> SceneList {
        let scenes: Vec<Scene> = durations
            .iter()
            .enumerate()
            .map(|(i, &duration_ms)| Scene {
                id: i as u32 + 1,
                duration_ms,
                text: "",
                background: Background::LinearGradient {
                    angle_deg: 135.0,
                    from: Rgb::hex(0x000000),
                    to: Rgb::hex(0xffffff),
                },
                animation: AnimationKind::FadeIn,
            })
            .collect();
        SceneList::new(scenes).expect("synthetic scene list is valid")
    }

    #[test]
    fn hex_splits_channels() {
        assert_eq!(Rgb::hex(0x667eea), Rgb(0x66, 0x7e, 0xea));
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(SceneList::new(Vec::<Scene>::new()).unwrap_err(), SceneError::Empty);
    }

    #[test]
    fn rejects_zero_duration() {
        let mut scene = synthetic(&[1000])[0];
        scene.duration_ms = 0;
        scene.id = 9;
        assert_eq!(
            SceneList::new(vec![scene]).unwrap_err(),
            SceneError::ZeroDuration { id: 9 }
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let scene = synthetic(&[1000])[0];
        assert_eq!(
            SceneList::new(vec![scene, scene]).unwrap_err(),
            SceneError::DuplicateId { id: scene.id }
        );
    }

    #[test]
    fn total_duration_sums_scenes() {
        let list = synthetic(&[2000, 3000, 500]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.last_index(), 2);
        assert_eq!(list.total_duration(), Duration::from_millis(5500));
    }
}
