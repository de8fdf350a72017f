use crate::core::calculator::accuracy::{self, AccuracyPoint};
use crate::core::calculator::statistics::{self, SessionStats};
use crate::models::device::Device;
use crate::models::session::Session;

/// Everything the single-session view shows, computed in one go.
///
/// Accuracy is `None` for a device whose range starts or ends on an
/// unparseable timestamp; statistics are always available.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub stats: SessionStats,
    pub wad_accuracy: Option<Vec<AccuracyPoint>>,
    pub ls_accuracy: Option<Vec<AccuracyPoint>>,
}

impl SessionReport {
    pub fn accuracy(&self, device: Device) -> Option<&[AccuracyPoint]> {
        match device {
            Device::Wad => self.wad_accuracy.as_deref(),
            Device::LightSource => self.ls_accuracy.as_deref(),
        }
    }
}

pub struct Core;

impl Core {
    pub fn build_session_report(session: &Session) -> SessionReport {
        if session.rows.is_empty() {
            log::warn!("session {} has no rows", session.id);
        }

        SessionReport {
            stats: statistics::compute_statistics(&session.rows),
            wad_accuracy: Self::accuracy_or_warn(session, Device::Wad),
            ls_accuracy: Self::accuracy_or_warn(session, Device::LightSource),
        }
    }

    /// Accuracy for one device; a bad timestamp only costs this series.
    pub fn accuracy_or_warn(session: &Session, device: Device) -> Option<Vec<AccuracyPoint>> {
        match accuracy::device_accuracy(&session.rows, device) {
            Ok(points) => Some(points),
            Err(e) => {
                log::warn!(
                    "session {}: {} accuracy unavailable: {}",
                    session.id,
                    device.label(),
                    e
                );
                None
            }
        }
    }
}
