pub mod ports;
pub mod mirror_use_case;
