use std::sync::Arc;

use di_core::device::DeviceStatus;
use di_core::ports::ReachabilityProbePort;
use tracing::{info, warn};

/// Turns a probe run into an `Active`/`Inactive` verdict.
///
/// Infallible by signature: any probe failure (unresolvable address, socket
/// permissions, transport error) classifies the device as `Inactive`, so
/// classification never blocks registration.
pub struct ClassifyReachability {
    probe: Arc<dyn ReachabilityProbePort>,
    threshold: f64,
}

impl ClassifyReachability {
    pub fn from_port(probe: Arc<dyn ReachabilityProbePort>, threshold: f64) -> Self {
        Self { probe, threshold }
    }

    #[tracing::instrument(name = "usecase.classify_reachability.execute", skip(self))]
    pub async fn execute(&self, address: &str) -> DeviceStatus {
        match self.probe.probe(address).await {
            Ok(stats) => {
                let status = stats.classify(self.threshold);
                info!(
                    sent = stats.packets_sent,
                    received = stats.packets_received,
                    success_rate = stats.success_rate(),
                    %status,
                    "Reachability classified"
                );
                status
            }
            Err(e) => {
                warn!(error = %e, "Reachability probe failed, classifying as inactive");
                DeviceStatus::Inactive
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::mocks::MockProbe;
    use di_core::ports::ReachabilityError;
    use di_core::ProbeStats;

    fn classifier(probe: MockProbe) -> ClassifyReachability {
        ClassifyReachability::from_port(Arc::new(probe), 0.33)
    }

    #[tokio::test]
    async fn test_mostly_answering_device_is_active() {
        let mut probe = MockProbe::new();
        probe
            .expect_probe()
            .withf(|address| address == "10.0.0.5")
            .times(1)
            .returning(|_| Ok(ProbeStats::new(5, 4)));

        assert_eq!(classifier(probe).execute("10.0.0.5").await, DeviceStatus::Active);
    }

    #[tokio::test]
    async fn test_silent_device_is_inactive() {
        let mut probe = MockProbe::new();
        probe
            .expect_probe()
            .returning(|_| Ok(ProbeStats::new(5, 0)));

        assert_eq!(classifier(probe).execute("10.0.0.6").await, DeviceStatus::Inactive);
    }

    #[tokio::test]
    async fn test_probe_failure_is_absorbed_as_inactive() {
        let mut probe = MockProbe::new();
        probe.expect_probe().returning(|address| {
            Err(ReachabilityError::Resolve {
                address: address.to_string(),
                reason: "no such host".to_string(),
            })
        });

        assert_eq!(
            classifier(probe).execute("nowhere.invalid").await,
            DeviceStatus::Inactive
        );
    }

    #[tokio::test]
    async fn test_socket_failure_is_absorbed_as_inactive() {
        let mut probe = MockProbe::new();
        probe
            .expect_probe()
            .returning(|_| Err(ReachabilityError::Socket("permission denied".to_string())));

        assert_eq!(classifier(probe).execute("10.0.0.5").await, DeviceStatus::Inactive);
    }
}
