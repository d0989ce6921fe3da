//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every `render_*` function
//! returns a `String` so output can be tested without a terminal; the
//! handlers in `commands.rs` do the printing.

use colored::{ColoredString, Colorize};
use satman::api::{CmdMessage, MessageLevel};
use satman::model::Candidate;
use satman::stats::{RankInfo, Summary};
use serde_json::{json, Map, Value};
use unicode_width::UnicodeWidthStr;

const NO_DATA: &str = "no data";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn status(passed: bool) -> ColoredString {
    if passed {
        "PASS".green()
    } else {
        "FAIL".red()
    }
}

/// Left-aligns `s` in a column `width` terminal cells wide.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|c| c.width()).chain([header.width()]).max().unwrap_or(0)
}

pub fn render_table(candidates: &[Candidate]) -> String {
    let name_w = column_width("NAME", candidates.iter().map(|c| c.name.as_str()));
    let city_w = column_width("CITY", candidates.iter().map(|c| c.city.as_str()));
    let country_w = column_width("COUNTRY", candidates.iter().map(|c| c.country.as_str()));

    let mut out = format!(
        "{}  {:>5}  {}  {}  {}  {}\n",
        pad("NAME", name_w),
        "SCORE",
        "STATUS",
        pad("CITY", city_w),
        pad("COUNTRY", country_w),
        "PINCODE"
    )
    .bold()
    .to_string();

    for c in candidates {
        out.push_str(&format!(
            "{}  {:>5}  {}    {}  {}  {}\n",
            pad(&c.name, name_w),
            c.sat_score,
            status(c.passed),
            pad(&c.city, city_w),
            pad(&c.country, country_w),
            c.pincode
        ));
    }
    out
}

pub fn render_candidate(c: &Candidate) -> String {
    format!(
        "{}\n  Address: {}\n  City:    {}\n  Country: {}\n  Pincode: {}\n  Score:   {}\n  Status:  {}\n",
        c.name.bold(),
        c.address,
        c.city,
        c.country,
        c.pincode,
        c.sat_score,
        status(c.passed)
    )
}

pub fn render_rank(info: &RankInfo) -> String {
    format!(
        "{}\n  Score:      {}\n  Rank:       {} out of {}\n  Percentile: {:.1}%\n  Status:     {}\n",
        format!("Ranking for {}", info.name).bold(),
        info.sat_score,
        info.rank,
        info.total,
        info.percentile,
        status(info.passed)
    )
}

fn or_no_data(value: Option<f64>, fmt: impl Fn(f64) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| NO_DATA.to_string())
}

pub fn render_summary(s: &Summary) -> String {
    let overall = match (s.average_all, s.average_share()) {
        (Some(avg), Some(share)) => format!("{:.2} / {} ({:.1}%)", avg, s.max_score, share),
        _ => NO_DATA.to_string(),
    };
    let pass_rate = or_no_data(s.pass_rate, |rate| {
        format!("{:.1}% ({} passed, {} failed)", rate, s.passed, s.failed)
    });

    let mut out = format!("{}\n", format!("Statistics ({} candidates)", s.total).bold());
    out.push_str(&format!("  Overall average:   {}\n", overall));
    out.push_str(&format!("  Pass rate:         {}\n", pass_rate));
    out.push_str(&format!("  Passing threshold: {:.1}\n", s.threshold));
    out.push_str(&format!(
        "  Average (passed):  {}\n",
        or_no_data(s.average_passed, |v| format!("{:.2}", v))
    ));
    out.push_str(&format!(
        "  Average (failed):  {}\n",
        or_no_data(s.average_failed, |v| format!("{:.2}", v))
    ));
    out
}

/// The full store as JSON, with a candidate count beside the records.
pub fn render_store_json(max_score: f64, candidates: &[Candidate]) -> serde_json::Result<String> {
    let mut records = Map::new();
    for c in candidates {
        records.insert(c.name.clone(), serde_json::to_value(c)?);
    }
    serde_json::to_string_pretty(&json!({
        "max_score": max_score,
        "total_candidates": candidates.len(),
        "records": Value::Object(records),
    }))
}

pub fn render_records_json(candidates: &[Candidate]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(candidates)
}
