use super::reading::Reading;
use clap::ValueEnum;
use serde::Serialize;

/// The two devices monitored during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Device {
    /// Wireless acquisition device
    Wad,
    /// Light Source
    #[value(name = "ls", alias = "light-source")]
    LightSource,
}

impl Device {
    pub const ALL: [Device; 2] = [Device::Wad, Device::LightSource];

    pub fn code(&self) -> &'static str {
        match self {
            Device::Wad => "wad",
            Device::LightSource => "ls",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Device::Wad => "WAD",
            Device::LightSource => "Light Source",
        }
    }

    pub fn battery(&self, r: &Reading) -> f64 {
        match self {
            Device::Wad => r.wad_battery,
            Device::LightSource => r.ls_battery,
        }
    }

    pub fn duration_estimate(&self, r: &Reading) -> f64 {
        match self {
            Device::Wad => r.wad_duration,
            Device::LightSource => r.ls_duration,
        }
    }

    /// Field whose trailing `-1` block marks the device shutdown.
    ///
    /// The Light Source may keep reporting battery while switched off, so its
    /// intensity is the authoritative power-state signal.
    pub fn power_signal(&self, r: &Reading) -> f64 {
        match self {
            Device::Wad => r.wad_battery,
            Device::LightSource => r.ls_intensity,
        }
    }
}
