use std::path::PathBuf;

use serial2::SerialPort;

use crate::capture::Camera;
use crate::command::CommandTable;

pub mod capture;
pub mod command;
pub mod cube;
pub mod error;
pub mod orientation;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Device-facing state of the panel: the one camera handle plus the control
/// dispatch table. Owned by the application context for its whole lifetime.
#[derive(Default)]
pub struct Turret {
    pub camera: Camera,
    pub commands: CommandTable,
}

/// Serial devices that could carry the IMU orientation feed. Enumeration
/// only; no protocol is spoken here.
pub fn list_devices() -> Result<Vec<PathBuf>> {
    Ok(SerialPort::available_ports()?)
}
