//! Dry-run host loop
//!
//! Drives a plugin at the configured tick rate the way the host would and
//! prints each batch in wire form instead of writing it to a device node.

use anyhow::Result;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use vjoy_plugin_abi::{RawEvent, VirtualJoystickPlugin};
use vjoy_plugins::{CirclePlugin, PluginConfig, PsxPadOptions, PsxPadPlugin, open_serial};

use crate::commands::PluginKind;
use crate::error::CliError;
use crate::output::{self, RunSummary};

pub fn execute(config: &PluginConfig, plugin: PluginKind, ticks: Option<u64>, json: bool) -> Result<()> {
    let period = tick_period(config.host.tick_rate_hz);
    info!(plugin = ?plugin, period_us = period.as_micros() as u64, "Starting dry run");

    let summary = match plugin {
        PluginKind::Psx => {
            let transport = open_serial(&config.serial).map_err(CliError::from)?;
            let mut pad = PsxPadPlugin::new(transport, PsxPadOptions::from_config(config))
                .map_err(CliError::from)?;
            let mut summary = drive(&mut pad, period, ticks, json);
            summary.sampler = Some(pad.stats());
            summary
        }
        PluginKind::Circle => {
            let mut circle = CirclePlugin::new().map_err(CliError::from)?;
            drive(&mut circle, period, ticks, json)
        }
    };

    output::print_run_summary(&summary, json);
    Ok(())
}

/// Interval between ticks for a rate already validated to 1..=1000 Hz.
fn tick_period(tick_rate_hz: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(tick_rate_hz.max(1)))
}

fn drive<P: VirtualJoystickPlugin>(
    plugin: &mut P,
    period: Duration,
    ticks: Option<u64>,
    json: bool,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut deadline = Instant::now();

    while ticks.is_none_or(|max| summary.ticks < max) {
        summary.ticks += 1;
        let events = plugin.think();
        let raw = RawEvent::batch(&events);
        if raw.is_empty() {
            debug!(tick = summary.ticks, "Empty batch");
        } else {
            summary.batches += 1;
            summary.events += events.len() as u64;
            output::print_batch(summary.ticks, &events, &raw, json);
        }

        deadline += period;
        if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
            thread::sleep(wait);
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_period() {
        assert_eq!(tick_period(60), Duration::from_micros(16_666));
        assert_eq!(tick_period(1000), Duration::from_millis(1));
        assert_eq!(tick_period(0), Duration::from_secs(1));
    }

    #[test]
    fn test_drive_counts_batches() -> Result<(), Box<dyn std::error::Error>> {
        let mut circle = CirclePlugin::new()?;
        let summary = drive(&mut circle, Duration::ZERO, Some(5), true);
        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.batches, 5);
        assert_eq!(summary.events, 10);
        Ok(())
    }
}
