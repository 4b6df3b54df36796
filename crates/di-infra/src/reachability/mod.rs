mod icmp;

pub use icmp::{resolve_address, AddressResolver, IcmpReachabilityProbe, SystemResolver};
