use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample};
use log::{debug, error, info};

use crate::audio::{RingCadence, Ringer, RingtoneConfig};
use crate::error::AudioError;

/// Rings through the default cpal output device
#[derive(Debug, Clone)]
pub struct CpalRinger {
    config: RingtoneConfig,
}

impl CpalRinger {
    pub fn new(config: RingtoneConfig) -> Self {
        Self { config }
    }
}

impl Ringer for CpalRinger {
    type Guard = RingtonePlayback;

    fn start(&self) -> Result<RingtonePlayback, AudioError> {
        RingtonePlayback::start(&self.config)
    }
}

/// A ringtone that is currently playing.
///
/// The cpal stream lives on its own thread since streams are not `Send`.
/// Dropping this handle signals that thread to close the stream and returns
/// straight away; the thread is left to finish on its own.
pub struct RingtonePlayback {
    shutdown: Option<mpsc::Sender<()>>,
}

impl RingtonePlayback {
    /// Open the output device and start looping the ring from position 0.
    ///
    /// Blocks until the playback thread reports whether the stream started,
    /// so call it off the async executor.
    pub fn start(config: &RingtoneConfig) -> Result<Self, AudioError> {
        if !config.enabled {
            return Err(AudioError::Disabled);
        }

        let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), AudioError>>(1);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let config = config.clone();

        let thread = thread::Builder::new()
            .name("ringtone".to_string())
            .spawn(move || {
                let stream = match open_stream(&config) {
                    Ok(stream) => stream,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));

                // Wait for shutdown signal (sender dropped counts too)
                let _ = shutdown_rx.recv();
                drop(stream);
                debug!("🔕 Ringtone stream closed");
            })
            .map_err(|e| AudioError::Stream(format!("failed to spawn ringtone thread: {}", e)))?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                shutdown: Some(shutdown_tx),
            }),
            Ok(Err(e)) => {
                let _ = thread.join();
                Err(e)
            }
            Err(_) => {
                let _ = thread.join();
                Err(AudioError::ThreadExited)
            }
        }
    }
}

impl Drop for RingtonePlayback {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

fn open_stream(config: &RingtoneConfig) -> Result<cpal::Stream, AudioError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(AudioError::NoOutputDevice)?;
    let device_name = device.name().unwrap_or_else(|_| "<unknown>".to_string());

    let supported = device
        .default_output_config()
        .map_err(|e| AudioError::Config(e.to_string()))?;
    let sample_format = supported.sample_format();
    let stream_config = supported.config();
    let cadence = RingCadence::new(config, stream_config.sample_rate.0);

    let stream = match sample_format {
        SampleFormat::F32 => build_stream::<f32>(&device, &stream_config, cadence),
        SampleFormat::I16 => build_stream::<i16>(&device, &stream_config, cadence),
        SampleFormat::U16 => build_stream::<u16>(&device, &stream_config, cadence),
        other => return Err(AudioError::UnsupportedSampleFormat(format!("{:?}", other))),
    }
    .map_err(|e| AudioError::Stream(format!("{:#}", e)))?;

    info!(
        "🔔 Ringtone playing on {} ({} Hz, {} ch)",
        device_name, stream_config.sample_rate.0, stream_config.channels
    );
    Ok(stream)
}

fn build_stream<T>(
    device: &cpal::Device,
    stream_config: &cpal::StreamConfig,
    mut cadence: RingCadence,
) -> anyhow::Result<cpal::Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = usize::from(stream_config.channels.max(1));

    let stream = device
        .build_output_stream(
            stream_config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                // Same sample on every channel of the frame
                for frame in data.chunks_mut(channels) {
                    frame.fill(T::from_sample(cadence.next_sample()));
                }
            },
            |err| {
                error!("Ringtone playback error: {}", err);
            },
            None,
        )
        .context("failed to build output stream")?;

    stream.play().context("failed to start output stream")?;
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_ringtone_never_opens_a_device() {
        let ringer = CpalRinger::new(RingtoneConfig::default().with_enabled(false));
        assert!(matches!(ringer.start(), Err(AudioError::Disabled)));
    }
}
