/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines progress reporting messages, sinks, and helper functions for long-running rasters.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Progress reporting primitives for long-running interpolations.

use std::fmt::Debug;
use std::sync::{Arc, mpsc};
use std::thread;

/// Progress events emitted during an interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMsg {
    /// Event indicating that a column kernel table was built.
    ColumnKernelBuilt { samples: usize },

    /// Event indicating that particle data was read and validated.
    ParticlesGathered { num_particles: usize },

    /// Event indicating the fraction of raster rows or line samples completed.
    RasterProgress { stage: String, progress: f64 },

    /// Arbitrary informational message.
    Message { message: String },
}

/// Sink that consumes progress messages.
pub trait ProgressSink: Send + Sync + Debug {
    fn emit(&self, msg: ProgressMsg);
}

impl ProgressMsg {
    /// Milestones that a listener must see: every event except an
    /// intermediate raster row count.
    pub fn is_milestone(&self) -> bool {
        match self {
            ProgressMsg::RasterProgress { progress, .. } => *progress >= 1.0,
            _ => true,
        }
    }
}

/// Progress sink that forwards messages to a listener thread over a bounded channel.
///
/// Intermediate raster updates are dropped while the channel is full, so
/// worker threads never wait on a slow listener. Milestones wait for room.
#[derive(Debug)]
pub struct ChannelSink {
    tx: mpsc::SyncSender<ProgressMsg>,
}

impl ProgressSink for ChannelSink {
    #[inline]
    fn emit(&self, msg: ProgressMsg) {
        if msg.is_milestone() {
            let _ = self.tx.send(msg);
        } else {
            let _ = self.tx.try_send(msg);
        }
    }
}

/// Runs `handler` on a listener thread for each emitted progress message.
///
/// `buffer` bounds the number of queued messages. The thread exits once
/// every clone of the returned sink has been dropped, so join the handle
/// after the interpolator holding the sink has gone.
pub fn closure_sink<F>(
    buffer: usize,
    mut handler: F,
) -> (Arc<dyn ProgressSink>, thread::JoinHandle<()>)
where
    F: FnMut(ProgressMsg) + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel::<ProgressMsg>(buffer.max(1));
    let sink: Arc<dyn ProgressSink> = Arc::new(ChannelSink { tx });

    let handle = thread::spawn(move || {
        for msg in rx {
            handler(msg);
        }
    });

    (sink, handle)
}

/// Number of completed rows between raster progress events.
#[inline]
pub(crate) fn report_interval(num_rows: usize) -> usize {
    (num_rows / 20).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct Recorder {
        messages: Mutex<Vec<ProgressMsg>>,
    }

    impl ProgressSink for Recorder {
        fn emit(&self, msg: ProgressMsg) {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push(msg);
            }
        }
    }

    #[test]
    fn closure_sink_forwards_messages_in_order() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_by_handler = Arc::clone(&received);

        let (sink, handle) = closure_sink(16, move |msg| {
            received_by_handler.lock().unwrap().push(msg);
        });

        sink.emit(ProgressMsg::ParticlesGathered { num_particles: 3 });
        sink.emit(ProgressMsg::Message {
            message: String::from("done"),
        });

        drop(sink);
        handle.join().unwrap();

        assert_eq!(
            *received.lock().unwrap(),
            vec![
                ProgressMsg::ParticlesGathered { num_particles: 3 },
                ProgressMsg::Message {
                    message: String::from("done")
                },
            ]
        );
    }

    #[test]
    fn slow_listeners_still_receive_milestones() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_by_handler = Arc::clone(&received);

        let (sink, handle) = closure_sink(1, move |msg| {
            thread::sleep(Duration::from_millis(2));
            received_by_handler.lock().unwrap().push(msg);
        });

        for row in 1..50 {
            sink.emit(ProgressMsg::RasterProgress {
                stage: String::from("2D grid"),
                progress: row as f64 / 50.0,
            });
        }
        sink.emit(ProgressMsg::RasterProgress {
            stage: String::from("2D grid"),
            progress: 1.0,
        });
        sink.emit(ProgressMsg::Message {
            message: String::from("done"),
        });

        drop(sink);
        handle.join().unwrap();

        let received = received.lock().unwrap();
        let n = received.len();
        assert!(n >= 2 && n <= 51);
        assert_eq!(
            received[n - 2],
            ProgressMsg::RasterProgress {
                stage: String::from("2D grid"),
                progress: 1.0
            }
        );
        assert_eq!(
            received[n - 1],
            ProgressMsg::Message {
                message: String::from("done")
            }
        );
    }

    #[test]
    fn only_intermediate_rows_are_droppable() {
        let row = |progress| ProgressMsg::RasterProgress {
            stage: String::from("3D slice"),
            progress,
        };
        assert!(!row(0.5).is_milestone());
        assert!(row(1.0).is_milestone());
        assert!(ProgressMsg::ParticlesGathered { num_particles: 1 }.is_milestone());
    }

    #[test]
    fn custom_sinks_can_record_messages() {
        let recorder = Recorder::default();
        recorder.emit(ProgressMsg::ColumnKernelBuilt { samples: 1000 });
        assert_eq!(recorder.messages.lock().unwrap().len(), 1);
    }

    #[test]
    fn report_interval_is_never_zero() {
        assert_eq!(report_interval(0), 1);
        assert_eq!(report_interval(7), 1);
        assert_eq!(report_interval(400), 20);
    }
}
