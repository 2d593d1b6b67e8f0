// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::Cli;

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the completion script of a shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<Shell>("shell")
                .copied()
                .expect("shell is required"),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(shell = ?self.shell, "generating shell completion...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        match self.shell {
            Shell::Bash => write_completion(ClapShell::Bash, buf),
            Shell::Elvish => write_completion(ClapShell::Elvish, buf),
            Shell::Fish => write_completion(ClapShell::Fish, buf),
            Shell::PowerShell => write_completion(ClapShell::PowerShell, buf),
            Shell::Zsh => write_completion(ClapShell::Zsh, buf),
            Shell::Nushell => write_completion(clap_complete_nushell::Nushell {}, buf),
        }
    }
}

fn write_completion(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator, &mut cmd, name, buf);
}

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
