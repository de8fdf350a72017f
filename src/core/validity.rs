//! Per-device "powered on" range detection.

use crate::models::device::Device;
use crate::models::reading::{Reading, is_off};

/// End index (exclusive) of the rows a device is considered on.
///
/// Only the final contiguous block of `-1` values is cut; isolated `-1`
/// rows before it stay in range. Returns `0` when every row is `-1` and
/// `rows.len()` when the last row is a genuine reading.
pub fn resolve_valid_range<F>(rows: &[Reading], signal: F) -> usize
where
    F: Fn(&Reading) -> f64,
{
    rows.iter()
        .rposition(|r| !is_off(signal(r)))
        .map_or(0, |last| last + 1)
}

/// End index for a device, using its power-state signal.
pub fn device_range_end(rows: &[Reading], device: Device) -> usize {
    resolve_valid_range(rows, |r| device.power_signal(r))
}

/// The rows of a session a device is considered on: `rows[..end]`.
pub fn device_rows(rows: &[Reading], device: Device) -> &[Reading] {
    let end = device_range_end(rows, device);
    log::debug!(
        "{} valid range: {} of {} rows",
        device.label(),
        end,
        rows.len()
    );
    &rows[..end]
}

pub fn wad_rows(rows: &[Reading]) -> &[Reading] {
    device_rows(rows, Device::Wad)
}

pub fn light_source_rows(rows: &[Reading]) -> &[Reading] {
    device_rows(rows, Device::LightSource)
}
