//! Semiperiod buffer
//!
//! Append-only, fixed capacity. Only the recorded prefix is ever visible, so
//! a run aborted early can never leak unwritten slots into the statistics.

use heapless::Vec;

use crate::config::SEMIPERIOD_CAPACITY;

/// Returned when pushing into a full buffer; carries the rejected sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufferFull(pub u32);

/// Semiperiods of the current run in milliseconds
#[derive(Debug, Default, Clone)]
pub struct SemiperiodBuffer {
    samples: Vec<u32, SEMIPERIOD_CAPACITY>,
}

impl SemiperiodBuffer {
    pub const CAPACITY: usize = SEMIPERIOD_CAPACITY;

    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Appends a semiperiod; the write cursor never passes capacity
    pub fn push(&mut self, semiperiod_ms: u32) -> Result<(), BufferFull> {
        self.samples.push(semiperiod_ms).map_err(BufferFull)
    }

    /// Write cursor, i.e. number of recorded semiperiods
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    /// Drops all samples and resets the cursor to zero
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// The recorded prefix, in crossing order
    pub fn as_slice(&self) -> &[u32] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_to_capacity_then_rejects() {
        let mut buffer = SemiperiodBuffer::new();
        for i in 0..SemiperiodBuffer::CAPACITY {
            assert!(!buffer.is_full());
            buffer.push(500 + i as u32).unwrap();
        }
        assert!(buffer.is_full());
        assert_eq!(buffer.len(), SemiperiodBuffer::CAPACITY);
        assert_eq!(buffer.push(1), Err(BufferFull(1)));
        assert_eq!(buffer.len(), SemiperiodBuffer::CAPACITY);
    }

    #[test]
    fn exposes_only_recorded_prefix() {
        let mut buffer = SemiperiodBuffer::new();
        buffer.push(500).unwrap();
        buffer.push(520).unwrap();
        assert_eq!(buffer.as_slice(), &[500, 520]);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut buffer = SemiperiodBuffer::new();
        buffer.push(500).unwrap();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_slice(), &[] as &[u32]);
    }
}
