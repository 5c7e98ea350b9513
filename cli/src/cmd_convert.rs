// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calprop_ical::{
    ContentLineError, DateProperty, ParseContext, SystemTimezones, ValueKind,
};
use clap::{ArgMatches, Command, arg, builder::PossibleValuesParser};

use crate::config::Config;
use crate::report::eprint_error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdConvert {
    pub line: String,
    pub to: ValueKind,
}

impl CmdConvert {
    pub const NAME: &str = "convert";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Switch a property between DATE and DATE-TIME")
            .long_about(
                "\
Switch a property between DATE and DATE-TIME. The conversion is lossy: a date-time \
loses its time of day and zone, a date becomes floating midnight.",
            )
            .arg(arg!(<LINE> "Content line to convert"))
            .arg(
                arg!(--to <KIND> "Target value type")
                    .value_parser(PossibleValuesParser::new(["date", "date-time"]))
                    .ignore_case(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let line = match matches.get_one::<String>("LINE") {
            Some(line) => line.clone(),
            None => unreachable!(),
        };
        let to = match matches.get_one::<String>("to") {
            Some(kind) => kind.parse()?,
            None => unreachable!(),
        };
        Ok(Self { line, to })
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting property...");
        let prop = match self.convert(config) {
            Ok(prop) => prop,
            Err(e) => {
                eprint_error(&self.line, &e);
                return Err("conversion failed".into());
            }
        };

        print!("{}", config.format.write_to_string(&prop)?);
        Ok(())
    }

    fn convert(&self, config: &Config) -> Result<DateProperty, ContentLineError> {
        let ctx = ParseContext::new(&SystemTimezones).with_options(config.parse);
        let mut prop = DateProperty::from_content_line(&self.line, &ctx)?;
        prop.set_kind(self.to);
        Ok(prop)
    }
}
