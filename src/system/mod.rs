pub(crate) mod config;
pub(crate) mod i2c;
