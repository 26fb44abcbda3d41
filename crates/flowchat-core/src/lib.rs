pub mod ports;
pub mod client;
pub mod controller;
pub mod event_bus;
