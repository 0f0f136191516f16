use crate::input::{self, InputState};

/// Events emitted by the Canvas logic to the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicEvent {
    /// The frame loop was frozen by the user.
    Paused,
    /// The frame loop was resumed by the user.
    Resumed,
    /// The configured frame limit was passed; the loop is stopped for good.
    FrameLimitReached {
        /// Frames drawn in total.
        frames: u64,
    },
}

/// Where the frame loop currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Drawing a new frame on every update.
    Running,
    /// Frozen by the user; the host keeps showing the last frame.
    Paused,
    /// Stopped by the frame limit. Toggling no longer resumes.
    Finished,
}

/// Frame-loop bookkeeping.
#[derive(Clone, Debug)]
pub struct Playback {
    pub mode: PlaybackMode,
    /// Frames drawn so far.
    pub frame_count: u64,
    /// Stop once `frame_count` goes past this.
    pub frame_limit: Option<u64>,
}

impl Playback {
    pub fn new(frame_limit: Option<u64>) -> Self {
        Self {
            mode: PlaybackMode::Running,
            frame_count: 0,
            frame_limit,
        }
    }

    pub fn is_running(&self) -> bool {
        self.mode == PlaybackMode::Running
    }

    /// Counts a drawn frame and stops the loop once the limit is passed.
    pub fn advance(&mut self, events: &mut Vec<LogicEvent>) {
        if !self.is_running() {
            return;
        }

        self.frame_count += 1;

        if let Some(limit) = self.frame_limit {
            if self.frame_count > limit {
                self.mode = PlaybackMode::Finished;
                tracing::info!(frames = self.frame_count, limit, "Frame limit reached");
                events.push(LogicEvent::FrameLimitReached {
                    frames: self.frame_count,
                });
            }
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Applies this frame's key presses to the playback state.
///
/// Pausing is purely a scheduling decision: the scene is untouched and nothing
/// has to be released.
pub fn handle_interactions(playback: &mut Playback, input: &InputState, events: &mut Vec<LogicEvent>) {
    for key in &input.pressed_keys {
        match key {
            input::Key::TogglePause => match playback.mode {
                PlaybackMode::Running => {
                    playback.mode = PlaybackMode::Paused;
                    tracing::info!(frame = playback.frame_count, "Sketch paused");
                    events.push(LogicEvent::Paused);
                }
                PlaybackMode::Paused => {
                    playback.mode = PlaybackMode::Running;
                    tracing::info!(frame = playback.frame_count, "Sketch resumed");
                    events.push(LogicEvent::Resumed);
                }
                PlaybackMode::Finished => {
                    tracing::debug!("Ignoring pause toggle, frame loop finished");
                }
            },
        }
    }
}
