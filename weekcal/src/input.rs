//! Annotation input files: one entry per line, comma-separated.
//!
//! Formats
//! - birthdays: `yyyy-mm-dd,name`, year `0000` when unknown;
//! - namedays: `i,mm-dd,name` with `i` 1 to include the row, 0 to skip;
//! - events / moons / holidays: `yyyy-mm-dd,label`;
//! - months: exactly twelve names, one per line, January first.
//!
//! Blank lines are skipped everywhere.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use wcal_planner::{Birthday, Event, MonthNames, Nameday};

pub fn read_birthdays(path: &Path) -> Result<Vec<Birthday>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read birthday file: {}", path.display()))?;
    parse_birthdays(&text)
        .with_context(|| format!("in birthday file: {}", path.display()))
}

pub fn read_namedays(path: &Path) -> Result<Vec<Nameday>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read nameday file: {}", path.display()))?;
    parse_namedays(&text)
        .with_context(|| format!("in nameday file: {}", path.display()))
}

pub fn read_events(path: &Path, kind: &str) -> Result<Vec<Event>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {kind} file: {}", path.display()))?;
    parse_events(&text)
        .with_context(|| format!("in {kind} file: {}", path.display()))
}

pub fn read_month_names(path: &Path) -> Result<MonthNames> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read month file: {}", path.display()))?;
    parse_month_names(&text)
        .with_context(|| format!("in month file: {}", path.display()))
}

fn entry_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_birthdays(text: &str) -> Result<Vec<Birthday>> {
    let mut birthdays = Vec::new();
    for (number, line) in entry_lines(text) {
        let (datestr, name) = split_entry(line).with_context(|| format!("line {number}"))?;
        let birthday =
            Birthday::parse(datestr, name).with_context(|| format!("line {number}"))?;
        birthdays.push(birthday);
    }
    Ok(birthdays)
}

fn parse_namedays(text: &str) -> Result<Vec<Nameday>> {
    let mut namedays = Vec::new();
    for (number, line) in entry_lines(text) {
        let (flag, rest) = line
            .split_once(',')
            .with_context(|| format!("line {number}: expected \"{{0|1}},mm-dd,name\""))?;
        let include = match flag.trim() {
            "1" => true,
            "0" => false,
            other => bail!("line {number}: inclusion flag must be 0 or 1, got {other:?}"),
        };
        if !include {
            continue;
        }
        let (datestr, name) = split_entry(rest).with_context(|| format!("line {number}"))?;
        namedays.push(Nameday::parse(datestr, name).with_context(|| format!("line {number}"))?);
    }
    Ok(namedays)
}

fn parse_events(text: &str) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for (number, line) in entry_lines(text) {
        let (datestr, name) = split_entry(line).with_context(|| format!("line {number}"))?;
        events.push(Event::parse(datestr, name).with_context(|| format!("line {number}"))?);
    }
    Ok(events)
}

fn parse_month_names(text: &str) -> Result<MonthNames> {
    let names: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    Ok(MonthNames::new(names)?)
}

/// Split `date,name`, trimming the name.
fn split_entry(line: &str) -> Result<(&str, &str)> {
    let (datestr, name) = line
        .split_once(',')
        .with_context(|| format!("expected \"date,name\", got {line:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        bail!("missing name after date {datestr:?}");
    }
    Ok((datestr.trim(), name))
}
