// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line-oriented session driving the view controller.
//!
//! Each input line is one command:
//!
//! | Command             | Event                          |
//! |---------------------|--------------------------------|
//! | `type <query>`      | search input now holds `query` |
//! | `toggle`            | language toggle                |
//! | `search`            | search box open/close          |
//! | `click 0/3/1`       | click at a timeline node path  |
//! | `show`              | print the document             |
//! | `state`             | print a JSON state summary     |
//! | `quit`              | end the session                |
//!
//! The document is printed after every command that changed it.

use crate::controller::{Event, LoadState, ViewController};
use crate::i18n::Lang;
use crate::render::cards::{CASE_CARD_CLASS, TIMELINE_CARD_CLASS};
use crate::render::page::OPEN_CLASS;
use crate::render::{Element, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Show,
    State,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("invalid click path {0:?}, expected indices like 0/3/1")]
    BadPath(String),
    #[error("{0} takes no argument")]
    UnexpectedArgument(&'static str),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (name, arg) = match line.trim_start().split_once(' ') {
        Some((name, arg)) => (name, Some(arg)),
        None => (line.trim_start(), None),
    };

    let no_arg = |cmd: &'static str, command: Command| match arg.map(str::trim) {
        None | Some("") => Ok(command),
        Some(_) => Err(CommandError::UnexpectedArgument(cmd)),
    };

    match name {
        // The query is taken verbatim, surrounding spaces included.
        "type" => Ok(Command::Event(Event::Input(arg.unwrap_or("").to_string()))),
        "toggle" => no_arg("toggle", Command::Event(Event::ToggleLanguage)),
        "search" => no_arg("search", Command::Event(Event::ToggleSearch)),
        "click" => parse_path(arg.unwrap_or("")).map(|path| Command::Event(Event::Click(path))),
        "show" => no_arg("show", Command::Show),
        "state" => no_arg("state", Command::State),
        "quit" | "exit" => no_arg("quit", Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_path(raw: &str) -> Result<Vec<usize>, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::BadPath(raw.to_string()));
    }
    raw.split('/')
        .map(|part| part.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| CommandError::BadPath(raw.to_string()))
}

/// Snapshot printed by the `state` command
#[derive(Debug, Serialize)]
pub struct StateSummary<'a> {
    pub lang: Lang,
    pub query: &'a str,
    pub load: &'a LoadState,
    pub timeline_cards: usize,
    pub case_cards: usize,
    pub search_open: bool,
}

impl<'a> StateSummary<'a> {
    pub fn of(ctl: &'a ViewController) -> Self {
        let doc = ctl.document();
        let cards = |el: Option<&Element>, class: &str| {
            el.map(|el| el.all_by_class(class).len()).unwrap_or(0)
        };
        Self {
            lang: ctl.state().lang(),
            query: ctl.state().query(),
            load: ctl.state().load_state(),
            timeline_cards: cards(doc.timeline_container(), TIMELINE_CARD_CLASS),
            case_cards: cards(doc.cases_container(), CASE_CARD_CLASS),
            search_open: doc
                .search_box()
                .map(|el| el.has_class(OPEN_CLASS))
                .unwrap_or(false),
        }
    }
}

/// Read commands from `input` until EOF or `quit`.
pub fn run<R: BufRead, W: Write>(
    ctl: &mut ViewController,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {e}")?;
                continue;
            }
        };
        debug!(?command, "session command");

        match command {
            Command::Quit => break,
            Command::Show => writeln!(output, "{}", format.serialize(ctl.document())?)?,
            Command::State => {
                let summary = serde_json::to_string(&StateSummary::of(ctl))?;
                writeln!(output, "{summary}")?;
            }
            Command::Event(event) => {
                if ctl.handle(event) {
                    writeln!(output, "{}", format.serialize(ctl.document())?)?;
                }
            }
        }
        output.flush()?;
    }
    Ok(())
}
