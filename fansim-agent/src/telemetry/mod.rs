//! Synthetic fan readings
//!
//! Fabricates the per-run telemetry snapshot:
//! - one uniform rpm draw per fan around the profile baseline (inclusive bounds)
//! - a single capture timestamp shared by every reading in the snapshot

use anyhow::{Context, Result};
use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::device::DeviceProfile;
use crate::lineproto::{self, LineProtoError};

/// Measurement name on every emitted line.
pub const MEASUREMENT: &str = "fan_speed";

/// One fan's reading within a snapshot.
#[derive(Debug, Clone)]
pub struct FanReading {
    pub fan_id: &'static str,
    pub rpm: i64,
}

/// All readings captured in a single run.
#[derive(Debug)]
pub struct FanSnapshot {
    pub readings: Vec<FanReading>,
    /// Nanosecond epoch timestamp, captured once per run.
    pub timestamp_ns: i64,
}

impl FanSnapshot {
    /// Capture one snapshot for the given device profile.
    pub fn collect(profile: &DeviceProfile) -> Result<Self> {
        let timestamp_ns = Utc::now()
            .timestamp_nanos_opt()
            .context("Capture time is outside the nanosecond timestamp range")?;

        let mut rng = rand::rng();
        let readings = profile
            .fans
            .iter()
            .map(|&fan_id| FanReading {
                fan_id,
                rpm: profile.rpm_baseline
                    + rng.random_range(-profile.rpm_jitter..=profile.rpm_jitter),
            })
            .collect::<Vec<_>>();

        debug!("Collected {} fan readings", readings.len());

        Ok(FanSnapshot {
            readings,
            timestamp_ns,
        })
    }

    /// Encode every reading as one line-protocol line into `out`, in
    /// roster order, all sharing the snapshot timestamp.
    pub fn encode_lines(
        &self,
        profile: &DeviceProfile,
        out: &mut String,
    ) -> Result<(), LineProtoError> {
        for reading in &self.readings {
            lineproto::encode_point(
                MEASUREMENT,
                &[("device", profile.device), ("fan", reading.fan_id)],
                &[("rpm", reading.rpm)],
                self.timestamp_ns,
                out,
            )?;
        }
        Ok(())
    }
}
