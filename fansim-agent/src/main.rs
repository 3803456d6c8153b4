//! FanSim Agent - synthetic fan-speed telemetry emitter
//!
//! One-shot agent meant to sit behind a collector's exec-style input:
//! - fabricates one rpm reading per fan of a fixed device profile
//! - prints line protocol to stdout, one line per fan, then exits
//! - keeps all diagnostics on stderr so stdout stays a clean metric stream

mod device;
mod lineproto;
mod telemetry;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::device::DeviceProfile;
use crate::telemetry::FanSnapshot;

/// Emit one snapshot for `profile` into `out`.
fn run(profile: &DeviceProfile, out: &mut impl Write) -> Result<()> {
    let snapshot = FanSnapshot::collect(profile)?;

    let mut lines = String::new();
    snapshot
        .encode_lines(profile, &mut lines)
        .context("Failed to encode fan readings")?;

    out.write_all(lines.as_bytes())
        .context("Failed to write metric lines")?;
    out.flush().context("Failed to flush metric output")?;

    debug!("Emitted {} metric lines", snapshot.readings.len());
    Ok(())
}

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG only changes stderr diagnostics, never the
    // metric output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let profile = DeviceProfile::fixed();
    let stdout = io::stdout();
    run(&profile, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_lines() -> Vec<String> {
        let profile = DeviceProfile::fixed();
        let mut out = Vec::new();
        run(&profile, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_one_line_per_fan_in_order() {
        let lines = emit_lines();
        assert_eq!(lines.len(), 3);
        for (line, fan) in lines.iter().zip(["FAN1", "FAN2", "FAN3"]) {
            assert!(
                line.starts_with(&format!("fan_speed,device=junos-1,fan={fan} rpm=")),
                "unexpected line: {line}"
            );
        }
    }

    #[test]
    fn test_line_grammar_and_rpm_bounds() {
        for line in emit_lines() {
            let parts: Vec<_> = line.split(' ').collect();
            assert_eq!(parts.len(), 3, "unexpected line: {line}");

            let rpm: i64 = parts[1]
                .strip_prefix("rpm=")
                .and_then(|v| v.parse().ok())
                .unwrap();
            assert!((7550..=8050).contains(&rpm), "rpm out of range: {rpm}");

            let _: i64 = parts[2].parse().unwrap();
        }
    }

    #[test]
    fn test_shared_timestamp_within_run() {
        let lines = emit_lines();
        let timestamps: Vec<&str> = lines
            .iter()
            .map(|l| l.rsplit(' ').next().unwrap())
            .collect();
        assert!(timestamps.windows(2).all(|w| w[0] == w[1]));
    }
}
