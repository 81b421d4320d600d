//! Shared fixtures for the cross-crate tests.

/// A self-contained demo that can be launched by name.
pub trait Experience {
    /// Returns the experience's display name.
    fn name(&self) -> &str;

    /// Advances the experience by one frame and describes what it did.
    fn tick(&mut self) -> String;
}

/// Streams frames from a camera at a fixed resolution.
#[derive(Debug)]
pub struct CameraStream {
    width: u32,
    height: u32,
    frames: u64,
}

impl Experience for CameraStream {
    fn name(&self) -> &str {
        "camera"
    }

    fn tick(&mut self) -> String {
        self.frames += 1;
        format!("frame {} at {}x{}", self.frames, self.width, self.height)
    }
}

/// Mirrors a tracked pose onto an avatar with a smoothing factor.
#[derive(Debug)]
pub struct AvatarMirror {
    smoothing: f64,
    pose: f64,
}

impl AvatarMirror {
    /// Creates a mirror at the rest pose.
    ///
    /// `smoothing` is the share of the previous pose kept on each update.
    #[must_use]
    pub fn new(smoothing: f64) -> Self {
        Self {
            smoothing,
            pose: 0.0,
        }
    }

    /// Returns the current smoothed pose.
    #[must_use]
    pub fn pose(&self) -> f64 {
        self.pose
    }

    /// Blends `target` into the current pose.
    pub fn track(&mut self, target: f64) -> f64 {
        self.pose += (target - self.pose) * (1.0 - self.smoothing);
        self.pose
    }
}

impl Experience for AvatarMirror {
    fn name(&self) -> &str {
        "mirror"
    }

    fn tick(&mut self) -> String {
        format!("pose {:.2}", self.track(1.0))
    }
}

/// Builds a camera experience.
#[must_use]
pub fn camera_stream(width: u32, height: u32) -> Box<dyn Experience> {
    Box::new(CameraStream {
        width,
        height,
        frames: 0,
    })
}

/// Builds an avatar mirror experience.
#[must_use]
pub fn avatar_mirror(smoothing: f64) -> Box<dyn Experience> {
    Box::new(AvatarMirror::new(smoothing))
}

/// Collects events raised by tracking subsystems.
#[derive(Debug, Default)]
pub struct Hud {
    pub events: Vec<(&'static str, u32)>,
}

impl Hud {
    /// Records an event from `subsystem` and returns how many were seen.
    pub fn on_event(&mut self, subsystem: &'static str, code: u32) -> usize {
        self.events.push((subsystem, code));
        self.events.len()
    }

    /// Reports whether `code` would be shown, without recording it.
    #[must_use]
    pub fn would_show(&self, subsystem: &'static str, code: u32) -> usize {
        usize::from(!subsystem.is_empty() && code > 0)
    }
}
