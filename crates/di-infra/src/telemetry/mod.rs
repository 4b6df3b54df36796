mod random;

pub use random::RandomTelemetrySampler;
