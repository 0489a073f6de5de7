//! Display sink seam
//!
//! The core emits draw primitives and a redraw request; everything past
//! that (window creation, rasterization, bitmap fonts, letterboxing) is the
//! host's job behind this trait.

use thiserror::Error;

use crate::scene::Frame;

/// Errors a sink may report on present; the event loop logs them and keeps
/// running
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display surface lost")]
    SurfaceLost,
    #[error("display backend error: {0}")]
    Backend(String),
}

pub trait DisplaySink {
    /// Accept the primitives for the next redraw
    fn submit(&mut self, frame: &Frame);

    /// Request the redraw
    fn present(&mut self) -> Result<(), DisplayError>;

    /// Host window resized. The core forwards this untouched; viewport and
    /// letterboxing math happen on the sink side.
    fn resize(&mut self, width: u32, height: u32);
}

/// Sink that discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn submit(&mut self, _frame: &Frame) {}

    fn present(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Sink that keeps the last frame and counts presents, for tests and the
/// headless demo
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub last_frame: Option<Frame>,
    pub presented: u64,
    pub size: Option<(u32, u32)>,
}

impl DisplaySink for RecordingDisplay {
    fn submit(&mut self, frame: &Frame) {
        self.last_frame = Some(frame.clone());
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.presented += 1;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::build_frame;
    use crate::sim::GameWorld;

    #[test]
    fn test_recording_display_captures_frames() {
        let mut display = RecordingDisplay::default();
        let frame = build_frame(&GameWorld::new());

        display.submit(&frame);
        display.present().unwrap();
        display.resize(1024, 768);

        assert_eq!(display.last_frame.as_ref(), Some(&frame));
        assert_eq!(display.presented, 1);
        assert_eq!(display.size, Some((1024, 768)));
    }
}
