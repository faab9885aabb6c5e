pub mod config;
pub mod logging;

pub mod checksum;
pub mod distributor;
pub mod extract;
pub mod report;
pub mod verify;
