use async_trait::async_trait;

use crate::ports::errors::ReachabilityError;
use crate::reachability::ProbeStats;

#[async_trait]
pub trait ReachabilityProbePort: Send + Sync {
    /// Send one bounded burst of echo requests to `address`.
    ///
    /// Error semantics:
    /// - Resolve : `address` is neither an IP literal nor a resolvable host
    /// - Socket  : the ICMP socket could not be opened (privileges)
    /// - Probe   : transport failure other than a missing reply
    ///
    /// Missing replies are not errors; they show up in the counters.
    async fn probe(&self, address: &str) -> Result<ProbeStats, ReachabilityError>;
}
