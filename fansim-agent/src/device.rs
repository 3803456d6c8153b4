//! Fixed identity for the simulated device
//!
//! The emitter impersonates exactly one network device:
//! - device name reported in the `device` tag of every line
//! - ordered fan roster (one metric line per entry)
//! - baseline rotational speed and jitter bounds for fabricated readings

/// Device name reported in the `device` tag.
pub const DEVICE: &str = "junos-1";

/// Fan identifiers, in emission order.
pub const FANS: [&str; 3] = ["FAN1", "FAN2", "FAN3"];

/// Baseline rotational speed in rpm.
pub const RPM_BASELINE: i64 = 7800;

/// Largest offset drawn above or below the baseline (inclusive).
pub const RPM_JITTER: i64 = 250;

/// Identity and tuning of the simulated device.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    pub device: &'static str,
    pub fans: &'static [&'static str],
    pub rpm_baseline: i64,
    pub rpm_jitter: i64,
}

impl DeviceProfile {
    /// The fixed profile this build emits for.
    pub fn fixed() -> Self {
        Self {
            device: DEVICE,
            fans: &FANS,
            rpm_baseline: RPM_BASELINE,
            rpm_jitter: RPM_JITTER,
        }
    }

    /// Lowest rpm the profile can produce.
    pub fn rpm_floor(&self) -> i64 {
        self.rpm_baseline - self.rpm_jitter
    }

    /// Highest rpm the profile can produce.
    pub fn rpm_ceiling(&self) -> i64 {
        self.rpm_baseline + self.rpm_jitter
    }
}
