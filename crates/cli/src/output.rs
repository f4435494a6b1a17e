//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use crate::error::CliError;
use psx_serial_protocol::DecodedSample;
use serde::Serialize;
use serde_json::json;
use vjoy_plugin_abi::{AxisId, CapabilityDescriptor, Event, RawEvent};
use vjoy_plugins::{ButtonMap, PluginConfig, SamplerStats};

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    print_json(&error_json);
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print success message
pub fn print_success(message: &str, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "message": message
        }));
    } else {
        println!("{} {}", "✓".green(), message);
    }
}

/// Print warning message
pub fn print_warning(message: &str, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "warning": message
        }));
    } else {
        println!("{} {}", "⚠".yellow(), message);
    }
}

/// Print a capability descriptor, with the adapter bit of each button when
/// the plugin reads a button mask.
pub fn print_capabilities(caps: &CapabilityDescriptor, bits: Option<&ButtonMap>, json: bool) {
    if json {
        let buttons: Vec<_> = caps
            .buttons()
            .iter()
            .enumerate()
            .map(|(index, button)| {
                json!({
                    "index": index,
                    "button": button,
                    "code": button.code(),
                    "bit": bits.and_then(|map| map.bit(*button)),
                })
            })
            .collect();
        print_json(&json!({
            "success": true,
            "capabilities": caps,
            "button_map": buttons,
        }));
        return;
    }

    let name = if caps.name().is_empty() {
        "(unnamed)".dimmed().to_string()
    } else {
        caps.name().bold().to_string()
    };
    println!("{} {}", "Device:".bold(), name);

    let axes: Vec<_> = caps
        .absolute_axes()
        .iter()
        .map(|axis| format!("{axis:?}"))
        .collect();
    println!("  Absolute axes: {}", join_or_none(&axes));

    let rel: Vec<_> = caps
        .relative_axes()
        .iter()
        .map(|axis| format!("{axis:?}"))
        .collect();
    println!("  Relative axes: {}", join_or_none(&rel));

    let feedback: Vec<_> = caps
        .feedback()
        .kinds()
        .iter()
        .map(|kind| format!("{kind:?}"))
        .collect();
    println!(
        "  Force feedback: {} ({} effect slots)",
        join_or_none(&feedback),
        caps.max_effects()
    );

    if caps.buttons().is_empty() {
        println!("  Buttons: {}", "None".dimmed());
        return;
    }
    println!("  Buttons:");
    for (index, button) in caps.buttons().iter().enumerate() {
        match bits.and_then(|map| map.bit(*button)) {
            Some(bit) => println!(
                "    {index:>2}  {:<10} 0x{:03x}  bit {bit}",
                format!("{button:?}"),
                button.code()
            ),
            None => println!(
                "    {index:>2}  {:<10} 0x{:03x}",
                format!("{button:?}"),
                button.code()
            ),
        }
    }
}

#[derive(Serialize)]
struct AxisReading {
    axis: AxisId,
    raw: u16,
    value: i16,
}

/// Print one probed frame: raw fields, remapped axes and held buttons.
pub fn print_probe(sample: &DecodedSample, events: &[Event], json: bool) {
    let raw_of = |axis: AxisId| match axis {
        AxisId::Rx => sample.right_x,
        AxisId::Ry => sample.right_y,
        AxisId::X => sample.left_x,
        _ => sample.left_y,
    };
    let axes: Vec<AxisReading> = events
        .iter()
        .filter_map(|event| match *event {
            Event::Axis { axis, value } => Some(AxisReading {
                axis,
                raw: raw_of(axis),
                value,
            }),
            Event::Button { .. } => None,
        })
        .collect();
    let pressed: Vec<_> = events
        .iter()
        .filter_map(|event| match *event {
            Event::Button {
                button,
                pressed: true,
            } => Some(button),
            _ => None,
        })
        .collect();

    if json {
        print_json(&json!({
            "success": true,
            "sample": sample,
            "axes": axes,
            "pressed": pressed,
        }));
        return;
    }

    println!("{}", "Adapter frame".bold());
    println!("  Button mask: 0x{:04x}", sample.button_mask);
    for reading in &axes {
        println!(
            "  {:<3} raw {:>5} -> {:>6}",
            format!("{:?}", reading.axis),
            reading.raw,
            reading.value
        );
    }
    let names: Vec<_> = pressed.iter().map(|b| format!("{b:?}")).collect();
    println!("  Pressed: {}", join_or_none(&names));
}

/// Print one tick's batch in wire form.
pub fn print_batch(tick: u64, events: &[Event], raw: &[RawEvent], json: bool) {
    if json {
        match serde_json::to_string(&json!({ "tick": tick, "events": raw })) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format batch as JSON: {}", e),
        }
        return;
    }

    let rendered: Vec<_> = events
        .iter()
        .map(|event| match *event {
            Event::Axis { axis, value } => format!("{axis:?}={value}"),
            Event::Button { button, pressed } => format!("{button:?}={}", u8::from(pressed)),
        })
        .collect();
    println!("{} {}", format!("tick {tick:>5}").dimmed(), rendered.join(" "));
}

/// Summary of a dry run.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub batches: u64,
    pub events: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler: Option<SamplerStats>,
}

pub fn print_run_summary(summary: &RunSummary, json: bool) {
    if json {
        match serde_json::to_string(&json!({ "success": true, "summary": summary })) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format summary as JSON: {}", e),
        }
        return;
    }

    println!(
        "{} {} ticks, {} batches, {} events",
        "Done:".bold(),
        summary.ticks,
        summary.batches,
        summary.events
    );
    if let Some(stats) = &summary.sampler {
        println!(
            "  Frames: {}  Transport failures: {}  Malformed frames: {}",
            stats.frames, stats.transport_failures, stats.format_failures
        );
    }
}

pub fn print_config(config: &PluginConfig, path: &str, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "path": path,
            "config": config,
        }));
        return;
    }

    println!("{} {}", "Config:".bold(), path.dimmed());
    println!("  Schema: {}", config.schema_version);
    println!(
        "  Serial: {} @ {} baud, {} ms timeout",
        config.serial.device_path, config.serial.baud_rate, config.serial.timeout_ms
    );
    println!(
        "  Calibration: center {}, scale {}",
        config.calibration.center, config.calibration.scale
    );
    match &config.buttons {
        Some(bindings) => println!("  Buttons: {} custom bindings", bindings.len()),
        None => println!("  Buttons: {}", "DualShock default".dimmed()),
    }
    println!("  Host tick rate: {} Hz", config.host.tick_rate_hz);
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format output as JSON: {}", e),
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Get error type name for JSON output
fn error_type_name(error: &Error) -> &'static str {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .map_or("Error", CliError::kind)
}
