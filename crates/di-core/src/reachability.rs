//! Reachability decision rule.
//!
//! The probe itself lives behind [`crate::ports::ReachabilityProbePort`]; this
//! module only turns its counters into a [`DeviceStatus`].

use crate::device::DeviceStatus;

/// Default share of echo replies a device must answer to count as `Active`.
pub const DEFAULT_SUCCESS_THRESHOLD: f64 = 0.33;

/// Counters produced by one probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeStats {
    pub packets_sent: u32,
    pub packets_received: u32,
}

impl ProbeStats {
    pub fn new(packets_sent: u32, packets_received: u32) -> Self {
        Self {
            packets_sent,
            packets_received,
        }
    }

    /// Received/sent ratio, `0.0` when nothing was sent.
    pub fn success_rate(&self) -> f64 {
        if self.packets_sent == 0 {
            return 0.0;
        }
        f64::from(self.packets_received) / f64::from(self.packets_sent)
    }

    /// Active strictly above `threshold`, Inactive otherwise.
    pub fn classify(&self, threshold: f64) -> DeviceStatus {
        if self.success_rate() > threshold {
            DeviceStatus::Active
        } else {
            DeviceStatus::Inactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_replies_is_active() {
        let stats = ProbeStats::new(5, 5);
        assert_eq!(stats.classify(DEFAULT_SUCCESS_THRESHOLD), DeviceStatus::Active);
    }

    #[test]
    fn two_of_five_is_active() {
        // 0.4 > 0.33
        let stats = ProbeStats::new(5, 2);
        assert_eq!(stats.classify(DEFAULT_SUCCESS_THRESHOLD), DeviceStatus::Active);
    }

    #[test]
    fn one_of_five_is_inactive() {
        let stats = ProbeStats::new(5, 1);
        assert_eq!(
            stats.classify(DEFAULT_SUCCESS_THRESHOLD),
            DeviceStatus::Inactive
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        let stats = ProbeStats::new(3, 1);
        assert_eq!(stats.classify(1.0 / 3.0), DeviceStatus::Inactive);
    }

    #[test]
    fn nothing_sent_is_inactive() {
        let stats = ProbeStats::default();
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(
            stats.classify(DEFAULT_SUCCESS_THRESHOLD),
            DeviceStatus::Inactive
        );
    }
}
