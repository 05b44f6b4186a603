use crate::error::{OperationError, Result};

/// Mean of the most recent samples over a fixed-capacity circular buffer.
///
/// Once the buffer is full, each new sample overwrites the oldest one.
/// Single-owner: the type is not synchronized, and callers sharing one
/// across threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct RunningAverage {
    buffer: Vec<f64>,
    count: usize,
    next: usize,
}

impl RunningAverage {
    /// Creates a running average over the last `frames` samples.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `frames` is zero.
    pub fn new(frames: usize) -> Result<Self> {
        if frames == 0 {
            return Err(
                OperationError::InvalidInput("running average capacity must be nonzero".into())
                    .into(),
            );
        }
        Ok(Self {
            buffer: vec![0.0; frames],
            count: 0,
            next: 0,
        })
    }

    /// Records a sample, evicting the oldest one once the window is full.
    pub fn add(&mut self, value: f64) {
        self.buffer[self.next] = value;
        self.count = (self.count + 1).min(self.buffer.len());
        self.next = (self.next + 1) % self.buffer.len();
    }

    /// Returns the mean of the retained samples, or `0.0` before the first
    /// sample arrives.
    #[must_use]
    pub fn get(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.count as f64;
        self.buffer[..self.count].iter().sum::<f64>() / count
    }
}
