//! Snapshots concretos por tipo de dispositivo.

pub mod gamepad;
pub mod keyboard;
pub mod mouse;
