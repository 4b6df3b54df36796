pub mod device_mapper;

pub use device_mapper::DeviceRowMapper;
