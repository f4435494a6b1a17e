//! Request/response transport over the adapter's serial link

use crate::config::SerialConfig;
use psx_serial_protocol::{FRAME_LEN, POLL_REQUEST};
use serialport::{ClearBuffer, SerialPort};
use std::io;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace};

/// Poll could not produce a full frame.
///
/// The sampler treats every variant the same way: the tick is skipped.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Serial link closed")]
    Closed,

    #[error("Failed to write poll request: {0}")]
    Write(#[source] io::Error),

    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: serialport::Error,
    },
}

/// Byte-level operations the poll exchange needs from a serial link.
pub trait SerialLink {
    /// Drop whatever the link has buffered but not yet read.
    fn discard_input(&mut self) -> io::Result<()>;

    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Bound how long the next [`SerialLink::read`] may block.
    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()>;

    /// Read up to `buf.len()` bytes, blocking no longer than the link's
    /// timeout. A timeout is reported as [`io::ErrorKind::TimedOut`].
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl SerialLink for Box<dyn SerialPort> {
    fn discard_input(&mut self) -> io::Result<()> {
        (**self).clear(ClearBuffer::Input).map_err(io::Error::from)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        io::Write::write_all(self, data)?;
        io::Write::flush(self)
    }

    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()> {
        (**self).set_timeout(timeout).map_err(io::Error::from)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(self, buf)
    }
}

/// Anything that yields one raw frame per call.
pub trait FrameSource {
    fn poll(&mut self) -> Result<Vec<u8>, TransportError>;
}

/// Time one poll may spend waiting for its response.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// One poll exchange per call: discard stale input, send the request byte,
/// read a fixed-length response.
#[derive(Debug)]
pub struct PollTransport<L> {
    link: L,
    frame_len: usize,
    timeout: Duration,
}

impl<L: SerialLink> PollTransport<L> {
    pub fn new(link: L) -> Self {
        Self::with_frame_len(link, FRAME_LEN)
    }

    pub fn with_frame_len(link: L, frame_len: usize) -> Self {
        Self {
            link,
            frame_len,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }

    /// Bound the whole response read, across however many reads it takes.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn into_inner(self) -> L {
        self.link
    }

    /// Run one exchange and return exactly `frame_len` bytes.
    ///
    /// # Errors
    ///
    /// [`TransportError::Closed`] when the link has gone away,
    /// [`TransportError::Write`] when the request cannot be sent and
    /// [`TransportError::ShortRead`] when the response does not arrive in
    /// full within the poll timeout. The timeout covers the whole frame,
    /// not each read.
    pub fn poll(&mut self) -> Result<Vec<u8>, TransportError> {
        self.link.discard_input().map_err(|e| classify(e, TransportError::Io))?;
        self.link
            .write_all(&[POLL_REQUEST])
            .map_err(|e| classify(e, TransportError::Write))?;

        let deadline = Instant::now() + self.timeout;
        let mut frame = vec![0u8; self.frame_len];
        let mut filled = 0;
        while filled < self.frame_len {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            self.link
                .set_read_timeout(remaining)
                .map_err(|e| classify(e, TransportError::Io))?;
            let Some(window) = frame.get_mut(filled..) else {
                break;
            };
            match self.link.read(window) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
                Err(e) => return Err(classify(e, TransportError::Io)),
            }
        }

        if filled < self.frame_len {
            return Err(TransportError::ShortRead {
                expected: self.frame_len,
                actual: filled,
            });
        }

        trace!(bytes = filled, "Frame received");
        Ok(frame)
    }
}

impl<L: SerialLink> FrameSource for PollTransport<L> {
    fn poll(&mut self) -> Result<Vec<u8>, TransportError> {
        PollTransport::poll(self)
    }
}

fn classify(err: io::Error, other: fn(io::Error) -> TransportError) -> TransportError {
    match err.kind() {
        io::ErrorKind::BrokenPipe | io::ErrorKind::NotConnected | io::ErrorKind::UnexpectedEof => {
            TransportError::Closed
        }
        _ => other(err),
    }
}

/// Open the adapter's serial port as configured.
///
/// # Errors
///
/// Returns [`TransportError::Open`] if the port cannot be opened.
pub fn open_serial(
    config: &SerialConfig,
) -> Result<PollTransport<Box<dyn SerialPort>>, TransportError> {
    debug!(
        path = %config.device_path,
        baud = config.baud_rate,
        timeout_ms = config.timeout_ms,
        "Opening serial port"
    );
    let port = serialport::new(config.device_path.as_str(), config.baud_rate)
        .timeout(Duration::from_millis(config.timeout_ms))
        .open()
        .map_err(|source| TransportError::Open {
            path: config.device_path.clone(),
            source,
        })?;
    Ok(PollTransport::new(port).with_timeout(Duration::from_millis(config.timeout_ms)))
}

pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// In-memory stand-in for the adapter.
    ///
    /// Each write moves the next queued response into the input buffer, so
    /// a poll sees exactly the frame queued for it. Clones share state,
    /// letting a test keep a handle after moving the link into a plugin.
    #[derive(Debug, Clone, Default)]
    pub struct MockSerialLink {
        responses: Arc<Mutex<VecDeque<Vec<u8>>>>,
        input: Arc<Mutex<VecDeque<u8>>>,
        write_history: Arc<Mutex<Vec<Vec<u8>>>>,
        discards: Arc<Mutex<usize>>,
        read_timeouts: Arc<Mutex<Vec<Duration>>>,
        disconnected: Arc<Mutex<bool>>,
    }

    impl MockSerialLink {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the reply to the next poll request.
        pub fn queue_response(&self, data: Vec<u8>) {
            let mut responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
            responses.push_back(data);
        }

        /// Put bytes straight into the input buffer, as if left over from an
        /// earlier exchange.
        pub fn inject_stale(&self, data: &[u8]) {
            let mut input = self.input.lock().unwrap_or_else(|e| e.into_inner());
            input.extend(data.iter().copied());
        }

        pub fn get_write_history(&self) -> Vec<Vec<u8>> {
            let history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.clone()
        }

        pub fn discard_count(&self) -> usize {
            *self.discards.lock().unwrap_or_else(|e| e.into_inner())
        }

        /// Every read timeout the transport has set, oldest first.
        pub fn read_timeouts(&self) -> Vec<Duration> {
            self.read_timeouts
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone()
        }

        pub fn disconnect(&self) {
            let mut disconnected = self.disconnected.lock().unwrap_or_else(|e| e.into_inner());
            *disconnected = true;
        }

        pub fn reconnect(&self) {
            let mut disconnected = self.disconnected.lock().unwrap_or_else(|e| e.into_inner());
            *disconnected = false;
        }

        fn check_connected(&self) -> io::Result<()> {
            if *self.disconnected.lock().unwrap_or_else(|e| e.into_inner()) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock link closed"));
            }
            Ok(())
        }
    }

    impl SerialLink for MockSerialLink {
        fn discard_input(&mut self) -> io::Result<()> {
            self.check_connected()?;
            self.input.lock().unwrap_or_else(|e| e.into_inner()).clear();
            *self.discards.lock().unwrap_or_else(|e| e.into_inner()) += 1;
            Ok(())
        }

        fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
            self.check_connected()?;
            self.write_history
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(data.to_vec());

            let next = self
                .responses
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front();
            if let Some(response) = next {
                self.input
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .extend(response);
            }
            Ok(())
        }

        fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()> {
            self.check_connected()?;
            self.read_timeouts
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(timeout);
            Ok(())
        }

        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.check_connected()?;
            let mut input = self.input.lock().unwrap_or_else(|e| e.into_inner());
            if input.is_empty() {
                return Err(io::Error::new(io::ErrorKind::TimedOut, "no data available"));
            }
            let count = buf.len().min(input.len());
            for (slot, byte) in buf.iter_mut().zip(input.drain(..count)) {
                *slot = byte;
            }
            Ok(count)
        }
    }
}
