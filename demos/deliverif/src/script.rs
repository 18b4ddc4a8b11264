//! Editor scripts: one operator action per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! warehouse
//! click 45.7505 4.8570
//! add
//! click 45.7540 4.8574
//! click 45.7498 4.8757
//! pickup-duration 180
//! delivery-duration 240
//! confirm
//! ```
//!
//! | Command                | Action                                  |
//! |------------------------|-----------------------------------------|
//! | `locate`               | start setting the user location         |
//! | `warehouse`            | start setting the warehouse             |
//! | `add`                  | start adding a pickup/delivery pair     |
//! | `collect` / `stop`     | enter / leave bulk-collect mode         |
//! | `click LAT LNG`        | map click                               |
//! | `pickup-duration S`    | fill the pickup duration (`-` clears)   |
//! | `delivery-duration S`  | fill the delivery duration (`-` clears) |
//! | `confirm` / `cancel`   | confirm / abandon the current flow      |
//! | `remove-delivery I`    | delete delivery `I` of the request      |
//! | `remove-staged I`      | delete staged pair `I`                  |
//! | `clear-collected`      | empty the collected-node buffer         |

use anyhow::{anyhow, bail, Context, Result};

use dv_core::GeoPoint;
use dv_editor::EditorEvent;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScriptCommand {
    Event(EditorEvent),
    RemoveDelivery(usize),
    RemoveStaged(usize),
    ClearCollected,
}

/// One parsed line, with its 1-based line number for messages.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScriptLine {
    pub line:    usize,
    pub command: ScriptCommand,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let command = parse_command(line)
            .with_context(|| format!("script line {}: {raw:?}", i + 1))?;
        out.push(ScriptLine { line: i + 1, command });
    }
    Ok(out)
}

fn parse_command(line: &str) -> Result<ScriptCommand> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let expect = |n: usize| -> Result<()> {
        if args.len() == n {
            Ok(())
        } else {
            Err(anyhow!("`{verb}` takes {n} argument(s), got {}", args.len()))
        }
    };

    if let Some(cmd) = bare_command(verb) {
        expect(0)?;
        return Ok(cmd);
    }

    let cmd = match verb {
        "click" => {
            expect(2)?;
            let lat = coordinate(args[0])?;
            let lon = coordinate(args[1])?;
            ScriptCommand::Event(EditorEvent::MapClick(GeoPoint::new(lat, lon)))
        }
        "pickup-duration" => {
            expect(1)?;
            ScriptCommand::Event(EditorEvent::SetPickupDuration(duration(args[0])?))
        }
        "delivery-duration" => {
            expect(1)?;
            ScriptCommand::Event(EditorEvent::SetDeliveryDuration(duration(args[0])?))
        }
        "remove-delivery" => {
            expect(1)?;
            ScriptCommand::RemoveDelivery(index(args[0])?)
        }
        "remove-staged" => {
            expect(1)?;
            ScriptCommand::RemoveStaged(index(args[0])?)
        }
        other => bail!("unknown command `{other}`"),
    };
    Ok(cmd)
}

/// Commands that take no argument.
fn bare_command(verb: &str) -> Option<ScriptCommand> {
    let event = match verb {
        "locate" => EditorEvent::StartLocateUser,
        "warehouse" => EditorEvent::StartSetWarehouse,
        "add" => EditorEvent::StartAddDelivery,
        "collect" => EditorEvent::StartCollect,
        "stop" => EditorEvent::StopCollect,
        "confirm" => EditorEvent::ConfirmAdd,
        "cancel" => EditorEvent::Cancel,
        "clear-collected" => return Some(ScriptCommand::ClearCollected),
        _ => return None,
    };
    Some(ScriptCommand::Event(event))
}

fn coordinate(s: &str) -> Result<f64> {
    let v = s.parse::<f64>().with_context(|| format!("{s:?} is not a number"))?;
    if !v.is_finite() {
        bail!("{s:?} is not a finite coordinate");
    }
    Ok(v)
}

/// Seconds, or `-` for an empty field.
fn duration(s: &str) -> Result<Option<u32>> {
    if s == "-" {
        return Ok(None);
    }
    let v = s
        .parse::<u32>()
        .with_context(|| format!("{s:?} is not a whole number of seconds"))?;
    Ok(Some(v))
}

fn index(s: &str) -> Result<usize> {
    s.parse::<usize>().with_context(|| format!("{s:?} is not an index"))
}
