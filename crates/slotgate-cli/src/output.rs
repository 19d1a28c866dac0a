//! Rendering of inspection results.
//!
//! Every result is a flat record rendered either as one JSON object per line
//! or as `key=value` pairs separated by spaces.

use std::io::Write;

use serde::Serialize;
use slotgate_core::{CommandInfo, Disposition, OpFlags, RouteDecision, SlotCount, hash_slot_in, hash_tag};

use crate::cli::OutputFormat;
use crate::errors::AppError;

/// Routing decision as shown to operators.
#[derive(Debug, Serialize)]
pub(crate) struct DecisionRecord<'a> {
    name: &'a str,
    flags: OpFlags,
    read_only: bool,
    not_allowed: bool,
    disposition: Disposition,
    key_index: usize,
    slot: Option<u32>,
}

impl<'a> From<&'a RouteDecision> for DecisionRecord<'a> {
    fn from(decision: &'a RouteDecision) -> Self {
        Self {
            name: decision.name(),
            flags: decision.flags(),
            read_only: decision.flags().is_read_only(),
            not_allowed: decision.flags().is_not_allowed(),
            disposition: decision.disposition(),
            key_index: decision.key_index(),
            slot: decision.slot(),
        }
    }
}

impl DecisionRecord<'_> {
    fn human(&self) -> String {
        let disposition = match self.disposition {
            Disposition::Reject => "reject",
            Disposition::Forward => "forward",
        };
        let slot = self
            .slot
            .map_or_else(|| String::from("-"), |slot| slot.to_string());
        format!(
            "name={} flags={} read_only={} not_allowed={} disposition={} key_index={} slot={}",
            self.name,
            self.flags,
            self.read_only,
            self.not_allowed,
            disposition,
            self.key_index,
            slot
        )
    }
}

/// Hash tag and slot of a single key.
#[derive(Debug, Serialize)]
pub(crate) struct SlotRecord<'a> {
    key: &'a str,
    hash_tag: String,
    slot: u32,
}

impl<'a> SlotRecord<'a> {
    pub(crate) fn new(key: &'a str, slots: SlotCount) -> Self {
        let bytes = key.as_bytes();
        Self {
            key,
            hash_tag: String::from_utf8_lossy(hash_tag(bytes)).into_owned(),
            slot: hash_slot_in(bytes, slots),
        }
    }

    fn human(&self) -> String {
        format!("key={} hash_tag={} slot={}", self.key, self.hash_tag, self.slot)
    }
}

pub(crate) fn write_decision<W: Write>(
    out: &mut W,
    format: OutputFormat,
    decision: &RouteDecision,
) -> Result<(), AppError> {
    let record = DecisionRecord::from(decision);
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&record)?)?,
        OutputFormat::Human => writeln!(out, "{}", record.human())?,
    }
    Ok(())
}

pub(crate) fn write_slot<W: Write>(
    out: &mut W,
    format: OutputFormat,
    record: &SlotRecord<'_>,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
        OutputFormat::Human => writeln!(out, "{}", record.human())?,
    }
    Ok(())
}

pub(crate) fn write_command<W: Write>(
    out: &mut W,
    format: OutputFormat,
    info: &CommandInfo,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(info)?)?,
        OutputFormat::Human => writeln!(out, "{}\t{}", info.name(), info.flags())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use slotgate_core::Router;

    use super::*;

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), AppError>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("render");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn renders_decision_as_json() {
        let decision = Router::default().route(&["get", "foo"]).expect("valid");
        let output = render(|out| write_decision(out, OutputFormat::Json, &decision));
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "GET",
                "flags": "none",
                "read_only": true,
                "not_allowed": false,
                "disposition": "forward",
                "key_index": 1,
                "slot": 289,
            })
        );
    }

    #[test]
    fn renders_rejection_for_humans() {
        let decision = Router::default().route(&["keys", "*"]).expect("valid");
        let output = render(|out| write_decision(out, OutputFormat::Human, &decision));
        assert_eq!(
            output,
            "name=KEYS flags=not_allowed read_only=true not_allowed=true \
             disposition=reject key_index=1 slot=-\n"
        );
    }

    #[test]
    fn renders_slot_record() {
        let record = SlotRecord::new("{user1000}.following", SlotCount::DEFAULT);
        let output = render(|out| write_slot(out, OutputFormat::Human, &record));
        assert_eq!(output, "key={user1000}.following hash_tag=user1000 slot=870\n");
    }

    #[test]
    fn renders_command_listing_line() {
        let info = slotgate_core::lookup("BITOP").expect("present");
        let output = render(|out| write_command(out, OutputFormat::Human, info));
        assert_eq!(output, "BITOP\twrite|not_allowed\n");
    }
}
