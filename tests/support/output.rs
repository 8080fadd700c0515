use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
};

use natya_tracker::audio::{AudioError, TrackOutput, decode_track};

/// Output double that decodes tracks like the real player but never opens a device.
#[derive(Clone, Default)]
pub struct RecordingOutput {
    started: Rc<RefCell<Vec<PathBuf>>>,
    active: Rc<RefCell<Option<PathBuf>>>,
}

impl RecordingOutput {
    pub fn started(&self) -> Vec<PathBuf> {
        self.started.borrow().clone()
    }

    pub fn active(&self) -> Option<PathBuf> {
        self.active.borrow().clone()
    }

    pub fn boxed(&self) -> Box<dyn TrackOutput> {
        Box::new(self.clone())
    }
}

impl TrackOutput for RecordingOutput {
    fn start(&mut self, track: &Path) -> Result<(), AudioError> {
        self.stop();
        decode_track(track)?;
        self.started.borrow_mut().push(track.to_path_buf());
        *self.active.borrow_mut() = Some(track.to_path_buf());
        Ok(())
    }

    fn stop(&mut self) {
        self.active.borrow_mut().take();
    }
}
