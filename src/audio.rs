//! Background music playback using `rodio`.
//!
//! A single looping track starts when the guest opens the letter. Playback
//! failure (no output device, missing file, undecodable audio) is not
//! user-visible; the caller logs it and moves on.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

pub struct MusicPlayer {
    _stream: OutputStream,
    sink: Sink,
}

impl MusicPlayer {
    /// Open the default output device and start the track, looping forever.
    pub fn start_looped(path: &Path) -> Result<Self> {
        let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;

        let reader = BufReader::new(
            File::open(path).with_context(|| format!("Opening music file {}", path.display()))?,
        );
        let source = Decoder::new(reader).context("Decoding music file")?;
        sink.append(source.repeat_infinite());
        sink.play();

        info!(path = %path.display(), "Started background music");
        Ok(Self { _stream, sink })
    }

    pub fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    pub fn set_paused(&self, paused: bool) {
        if paused {
            self.sink.pause();
        } else {
            self.sink.play();
        }
    }
}
