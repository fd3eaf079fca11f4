use alloc::vec::Vec;

/// One recorded drag sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Sample {
    pub offset: f64,
    pub timestamp: f64,
}

/// Recent drag samples used to measure release velocity.
///
/// This is a recency window rather than a ring buffer: once more than `limit` samples are held,
/// everything except the newest `retain` is dropped in one go.
#[derive(Clone, Debug, Default)]
pub(crate) struct PositionHistory {
    samples: Vec<Sample>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn newest(&self) -> Option<Sample> {
        self.samples.last().copied()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn push(&mut self, offset: f64, timestamp: f64, limit: usize, retain: usize) {
        self.samples.push(Sample { offset, timestamp });
        if self.samples.len() > limit {
            let drop = self.samples.len().saturating_sub(retain);
            self.samples.drain(..drop);
        }
    }

    /// Finds the oldest sample that is still inside the lookback window ending at
    /// `window_end`.
    ///
    /// Walks backwards from the newest sample and stops at the first one recorded at or before
    /// `window_end - lookback_ms`. Returns `None` if the only candidate is the newest sample,
    /// in which case no movement can be measured.
    pub fn window_start(&self, window_end: f64, lookback_ms: f64) -> Option<Sample> {
        let cutoff = window_end - lookback_ms;
        let newest = self.samples.len().checked_sub(1)?;

        let mut start = newest;
        for (i, sample) in self.samples.iter().enumerate().rev() {
            if sample.timestamp <= cutoff {
                break;
            }
            start = i;
        }

        (start != newest).then(|| self.samples[start])
    }
}
