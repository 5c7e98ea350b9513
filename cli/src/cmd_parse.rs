// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::Write as _;
use std::io::{self, Read};

use calprop_ical::{DateProperty, ParseContext, SystemTimezones, TemporalValue, Zone, unfold};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::tz::TimeZone;

use crate::config::Config;
use crate::report::eprint_error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdParse {
    pub lines: Vec<String>,
    pub timestamp: bool,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Parse DTSTART / DTEND content lines and show how they resolve")
            .arg(arg!([LINE] ... "Content lines to parse, read from stdin if omitted"))
            .arg(arg!(-t --timestamp "Also print the absolute instant of each value"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            lines: matches
                .get_many::<String>("LINE")
                .map(|lines| lines.cloned().collect())
                .unwrap_or_default(),
            timestamp: matches.get_flag("timestamp"),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing content lines...");
        let lines = if self.lines.is_empty() {
            read_stdin_lines()?
        } else {
            self.lines.clone()
        };

        let floating = config.floating_timezone()?;
        let ctx = ParseContext::new(&SystemTimezones).with_options(config.parse);

        let mut failed = 0;
        for line in &lines {
            match DateProperty::from_content_line(line, &ctx) {
                Ok(prop) => print!("{}", self.render(&prop, config, &floating)?),
                Err(e) => {
                    failed += 1;
                    eprint_error(line, &e);
                }
            }
        }

        match failed {
            0 => Ok(()),
            n => Err(format!("{n} of {} lines could not be parsed", lines.len()).into()),
        }
    }

    fn render(
        &self,
        prop: &DateProperty,
        config: &Config,
        floating: &TimeZone,
    ) -> Result<String, Box<dyn Error>> {
        let formatted = config.format.write_to_string(prop)?;
        let value = prop.value();

        let mut out = String::new();
        writeln!(out, "{}", formatted.trim_end().bold())?;
        writeln!(out, "  {:<10}{}", "name:".dimmed(), prop.name())?;
        writeln!(out, "  {:<10}{}", "kind:".dimmed(), value.kind())?;
        writeln!(out, "  {:<10}{}", "zone:".dimmed(), zone_label(value))?;
        if self.timestamp {
            writeln!(out, "  {:<10}{}", "instant:".dimmed(), value.timestamp(floating)?)?;
        }
        Ok(out)
    }
}

pub fn zone_label(value: &TemporalValue) -> &str {
    match value.zone() {
        None => "-",
        Some(Zone::Floating) => "floating",
        Some(Zone::Utc) => "UTC",
        Some(Zone::Named(tz)) => tz.id(),
    }
}

/// Read stdin, joining folded lines and skipping blank ones.
fn read_stdin_lines() -> Result<Vec<String>, Box<dyn Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(unfold(&input)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToOwned::to_owned)
        .collect())
}
