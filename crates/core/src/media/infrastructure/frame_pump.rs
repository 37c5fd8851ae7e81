use crate::error::ExtractError;

use super::decoder_session::DecoderSession;
use super::media_source::MediaSource;

type RawFrame = ffmpeg_next::util::frame::video::Video;

/// Pulls packets from the container and turns them into decoded frames.
///
/// Packets belonging to other streams are dropped as they are read. A
/// packet fed to the decoder may or may not complete a frame (codecs
/// buffer across packets), so the pump keeps consuming until the decoder
/// emits a frame or the container is exhausted. Each packet's backing
/// memory is freed as the `Packet` value goes out of scope, on both the
/// foreign-stream and the fed-to-decoder branch.
pub struct FramePump {
    flushing: bool,
    done: bool,
}

impl FramePump {
    pub fn new() -> Self {
        Self {
            flushing: false,
            done: false,
        }
    }

    /// Produces the next fully decoded frame in its native pixel format,
    /// or `Ok(None)` at end of stream once the decoder has been drained.
    pub fn next_frame(
        &mut self,
        source: &mut MediaSource,
        session: &mut DecoderSession,
    ) -> Result<Option<RawFrame>, ExtractError> {
        if self.done {
            return Ok(None);
        }

        if let Some(frame) = receive(session)? {
            return Ok(Some(frame));
        }

        if self.flushing {
            self.done = true;
            return Ok(None);
        }

        loop {
            let Some((stream, packet)) = source.input_mut().packets().next() else {
                // Container exhausted: flush the decoder and drain
                // whatever it still buffers.
                let _ = session.decoder_mut().send_eof();
                self.flushing = true;
                let frame = receive(session)?;
                if frame.is_none() {
                    self.done = true;
                }
                return Ok(frame);
            };

            if stream.index() != session.stream_index() {
                continue;
            }

            match session.decoder_mut().send_packet(&packet) {
                Ok(()) => {}
                // Input queue full; drain below before sending more.
                Err(ffmpeg_next::Error::Other { .. }) => {}
                Err(e) => return Err(ExtractError::Decode(e)),
            }

            if let Some(frame) = receive(session)? {
                return Ok(Some(frame));
            }
        }
    }
}

impl Default for FramePump {
    fn default() -> Self {
        Self::new()
    }
}

fn receive(session: &mut DecoderSession) -> Result<Option<RawFrame>, ExtractError> {
    let mut frame = RawFrame::empty();
    match session.decoder_mut().receive_frame(&mut frame) {
        Ok(()) => Ok(Some(frame)),
        Err(ffmpeg_next::Error::Eof) => Ok(None),
        // AVERROR(EAGAIN): the decoder needs more packets first.
        Err(ffmpeg_next::Error::Other { .. }) => Ok(None),
        Err(e) => Err(ExtractError::Decode(e)),
    }
}
