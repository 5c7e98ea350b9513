// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::cli::{APP_NAME, Cli};

/// Shells supported by `generate-completion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a completion script for calprop")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "Shell to generate the script for")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Shell>("shell") {
            Some(shell) => Self { shell: *shell },
            None => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.generate(&mut io::stdout().lock());
        Ok(())
    }

    pub fn generate(self, buf: &mut dyn io::Write) {
        use clap_complete::Shell as Builtin;

        match self.shell {
            Shell::Bash => write_script(Builtin::Bash, buf),
            Shell::Elvish => write_script(Builtin::Elvish, buf),
            Shell::Fish => write_script(Builtin::Fish, buf),
            Shell::PowerShell => write_script(Builtin::PowerShell, buf),
            Shell::Zsh => write_script(Builtin::Zsh, buf),
            Shell::Nushell => write_script(clap_complete_nushell::Nushell, buf),
        }
    }
}

fn write_script(generator: impl Generator, buf: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    generate(generator, &mut cmd, APP_NAME, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CmdGenerateCompletion {
        let matches = Cli::command()
            .try_get_matches_from(args)
            .unwrap_or_else(|e| panic!("Failed to parse {args:?}: {e}"));
        CmdGenerateCompletion::from(matches.subcommand_matches(CmdGenerateCompletion::NAME).unwrap())
    }

    #[test]
    fn parses_shells() {
        let cases = [
            ("bash", Shell::Bash),
            ("elvish", Shell::Elvish),
            ("fish", Shell::Fish),
            ("nushell", Shell::Nushell),
            ("powershell", Shell::PowerShell),
            ("zsh", Shell::Zsh),
        ];
        for (name, expected) in cases {
            let cmd = parse(&["calprop", "generate-completion", name]);
            assert_eq!(cmd.shell, expected, "Wrong shell for {name}");
        }

        let result = Cli::command().try_get_matches_from(["calprop", "generate-completion", "tcsh"]);
        assert!(result.is_err());
    }

    #[test]
    fn scripts_mention_subcommands() {
        for shell in [Shell::Bash, Shell::Fish, Shell::Nushell] {
            let mut output = Vec::new();
            CmdGenerateCompletion { shell }.generate(&mut output);

            let script = String::from_utf8(output).unwrap();
            assert!(script.contains(APP_NAME), "{shell:?} script lacks the binary name");
            assert!(script.contains("convert"), "{shell:?} script lacks subcommands");
        }
    }
}
