// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calprop_ical::{
    DateProperty, PropertyName, SystemTimezones, TemporalValue, Timezone, TimezoneRegistry,
    ValueKind,
};
use clap::{ArgMatches, Command, arg};

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdNow {
    pub end: bool,
    pub tz: Option<String>,
    pub utc: bool,
    pub date: bool,
}

impl CmdNow {
    pub const NAME: &str = "now";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a property for the current moment")
            .arg(arg!(--end "Print DTEND instead of DTSTART"))
            .arg(arg!(--tz <TZID> "Anchor the value to a timezone").conflicts_with("utc"))
            .arg(arg!(--utc "Write the value in UTC"))
            .arg(arg!(--date "Write today's date without time of day"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            end: matches.get_flag("end"),
            tz: matches.get_one::<String>("tz").cloned(),
            utc: matches.get_flag("utc"),
            date: matches.get_flag("date"),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "building property for now...");
        let prop = self.property(&SystemTimezones)?;
        print!("{}", config.format.write_to_string(&prop)?);
        Ok(())
    }

    fn property(&self, registry: &dyn TimezoneRegistry) -> Result<DateProperty, Box<dyn Error>> {
        let name = if self.end {
            PropertyName::End
        } else {
            PropertyName::Start
        };

        let mut prop = if let Some(tzid) = &self.tz {
            DateProperty::now_in(name, Timezone::resolve(tzid, registry)?)
        } else if self.utc {
            let now = jiff::Timestamp::now().to_zoned(jiff::tz::TimeZone::UTC);
            DateProperty::from_value(name, TemporalValue::from_date_time(now.datetime(), true)?)
        } else {
            DateProperty::new(name)
        };

        if self.date {
            prop.set_kind(ValueKind::Date);
        }
        Ok(prop)
    }
}

#[cfg(test)]
mod tests {
    use calprop_ical::{TimezoneMap, Zone};
    use jiff::tz::{TimeZone, offset};

    use super::*;

    fn parse(args: &[&str]) -> Result<CmdNow, clap::Error> {
        let cmd = Command::new("test").subcommand(CmdNow::command());
        let matches = cmd.try_get_matches_from(args)?;
        Ok(CmdNow::from(matches.subcommand_matches("now").unwrap()))
    }

    #[test]
    fn parses_flags() {
        let cmd = parse(&["test", "now"]).unwrap();
        assert_eq!(
            cmd,
            CmdNow {
                end: false,
                tz: None,
                utc: false,
                date: false
            }
        );

        let cmd = parse(&["test", "now", "--end", "--tz", "Asia/Tokyo", "--date"]).unwrap();
        assert!(cmd.end);
        assert_eq!(cmd.tz.as_deref(), Some("Asia/Tokyo"));
        assert!(cmd.date);

        assert!(parse(&["test", "now", "--tz", "Asia/Tokyo", "--utc"]).is_err());
    }

    #[test]
    fn builds_properties() {
        let registry = TimezoneMap::new().with("Test/Plus9", TimeZone::fixed(offset(9)));
        let base = CmdNow {
            end: false,
            tz: None,
            utc: false,
            date: false,
        };

        let prop = base.property(&registry).unwrap();
        assert_eq!(prop.name(), PropertyName::Start);
        assert!(prop.value().is_floating());

        let cmd = CmdNow {
            end: true,
            utc: true,
            ..base.clone()
        };
        let prop = cmd.property(&registry).unwrap();
        assert_eq!(prop.name(), PropertyName::End);
        assert!(prop.value().is_utc());

        let cmd = CmdNow {
            tz: Some("Test/Plus9".to_string()),
            ..base.clone()
        };
        let prop = cmd.property(&registry).unwrap();
        assert!(matches!(prop.value().zone(), Some(Zone::Named(_))));
        assert_eq!(prop.parameters().get("TZID"), Some("Test/Plus9"));

        let cmd = CmdNow {
            tz: Some("Test/Plus9".to_string()),
            date: true,
            ..base.clone()
        };
        let prop = cmd.property(&registry).unwrap();
        assert!(prop.value().is_date());
        assert_eq!(prop.parameters().get("VALUE"), Some("DATE"));

        let cmd = CmdNow {
            tz: Some("Test/Nowhere".to_string()),
            ..base
        };
        assert!(cmd.property(&registry).is_err());
    }
}
