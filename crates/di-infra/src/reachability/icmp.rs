use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError, ICMP};
use tracing::debug;

use di_core::config::ProbeConfig;
use di_core::ports::{ReachabilityError, ReachabilityProbePort};
use di_core::ProbeStats;

const PAYLOAD: [u8; 56] = [0; 56];

/// Turns a device address into the IP that gets pinged.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, address: &str) -> Result<IpAddr, ReachabilityError>;
}

/// Resolver backed by the system lookup, see [`resolve_address`].
pub struct SystemResolver;

#[async_trait]
impl AddressResolver for SystemResolver {
    async fn resolve(&self, address: &str) -> Result<IpAddr, ReachabilityError> {
        resolve_address(address).await
    }
}

/// ICMP echo prober backed by `surge-ping`.
///
/// Sends `count` sequential echo requests. Each waits at most
/// `timeout / count`. The run as a whole, address resolution included, is
/// cut off at `timeout`.
pub struct IcmpReachabilityProbe {
    count: u32,
    timeout: Duration,
    privileged: bool,
    resolver: Arc<dyn AddressResolver>,
}

impl IcmpReachabilityProbe {
    pub fn new(count: u32, timeout: Duration, privileged: bool) -> Self {
        Self {
            count,
            timeout,
            privileged,
            resolver: Arc::new(SystemResolver),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn AddressResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(
            config.count,
            Duration::from_secs(config.timeout_secs),
            config.privileged,
        )
    }

    fn per_probe_timeout(&self) -> Duration {
        self.timeout / self.count.max(1)
    }

    fn client_for(&self, ip: IpAddr) -> Result<Client, ReachabilityError> {
        let mut builder = Config::builder();
        if ip.is_ipv6() {
            builder = builder.kind(ICMP::V6);
        }
        if self.privileged {
            builder = builder.sock_type_hint(socket2::Type::RAW);
        }
        Client::new(&builder.build()).map_err(|e| ReachabilityError::Socket(e.to_string()))
    }
}

/// Parse an IP literal, or resolve a host name and take its first address.
pub async fn resolve_address(address: &str) -> Result<IpAddr, ReachabilityError> {
    if let Ok(ip) = address.parse::<IpAddr>() {
        return Ok(ip);
    }

    let resolve_err = |reason: String| ReachabilityError::Resolve {
        address: address.to_string(),
        reason,
    };

    let mut addrs = tokio::net::lookup_host((address, 0))
        .await
        .map_err(|e| resolve_err(e.to_string()))?;
    addrs
        .next()
        .map(|addr| addr.ip())
        .ok_or_else(|| resolve_err("no addresses returned".to_string()))
}

#[async_trait]
impl ReachabilityProbePort for IcmpReachabilityProbe {
    async fn probe(&self, address: &str) -> Result<ProbeStats, ReachabilityError> {
        let mut stats = ProbeStats::default();
        let mut resolved: Option<IpAddr> = None;

        let run = async {
            let ip = self.resolver.resolve(address).await?;
            resolved = Some(ip);
            let client = self.client_for(ip)?;

            let mut pinger = client.pinger(ip, PingIdentifier(rand::random())).await;
            pinger.timeout(self.per_probe_timeout());

            for seq in 0..self.count {
                stats.packets_sent += 1;
                match pinger.ping(PingSequence(seq as u16), &PAYLOAD).await {
                    Ok((_, rtt)) => {
                        stats.packets_received += 1;
                        debug!(%ip, seq, ?rtt, "echo reply");
                    }
                    Err(SurgeError::Timeout { .. }) => {
                        debug!(%ip, seq, "echo timed out");
                    }
                    Err(e) => return Err(ReachabilityError::Probe(e.to_string())),
                }
            }
            Ok::<(), ReachabilityError>(())
        };

        let outcome = tokio::time::timeout(self.timeout, run).await;
        match outcome {
            Ok(result) => result?,
            Err(_) => match resolved {
                Some(ip) => debug!(%ip, "probe run hit its overall timeout"),
                None => {
                    return Err(ReachabilityError::Resolve {
                        address: address.to_string(),
                        reason: format!("timed out after {:?}", self.timeout),
                    })
                }
            },
        }

        Ok(stats)
    }
}
