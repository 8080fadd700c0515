use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info};

use super::{AudioError, TrackOutput};

/// Plays one track at a time on the default output device.
pub struct AudioPlayer {
    stream: OutputStream,
    sink: Option<Sink>,
}

impl AudioPlayer {
    /// Open the default output device.
    pub fn new() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|source| AudioError::OutputUnavailable { source })?;
        stream.log_on_drop(false);
        Ok(Self { stream, sink: None })
    }

    /// True while queued audio remains in the active sink.
    pub fn is_playing(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| !sink.empty())
    }
}

impl TrackOutput for AudioPlayer {
    fn start(&mut self, track: &Path) -> Result<(), AudioError> {
        self.stop();
        let source = decode_track(track)?;
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        info!("Playing {}", track.display());
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
            debug!("Playback stopped");
        }
    }
}

/// Open and probe `path` so format errors surface before playback starts.
pub fn decode_track(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
