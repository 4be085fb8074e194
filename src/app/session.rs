use std::io::{BufRead, Write};

use tracing::info;

use crate::app::common::is_yes;
use crate::core::naming::{self, ExtractedInfo, Field};
use crate::core::store::OverrideStore;
use crate::utils::Result;

const NOT_FOUND: &str = "Not Found";

enum Round {
    Continue,
    Stop,
}

/// Interactive loop: raw title in, corrected override title out to the store.
pub struct Session<R, W> {
    input: R,
    output: W,
    store: OverrideStore,
    group_tag: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, store: OverrideStore, group_tag: impl Into<String>) -> Self {
        Self {
            input,
            output,
            store,
            group_tag: group_tag.into(),
        }
    }

    /// Run rounds until the user declines to continue or the input is closed.
    pub fn run(&mut self) -> Result<()> {
        while let Round::Continue = self.round()? {}
        Ok(())
    }

    fn round(&mut self) -> Result<Round> {
        let Some(raw_title) = self.prompt("Enter raw title: ")? else {
            return Ok(Round::Stop);
        };
        let mut info = naming::extract_info(&raw_title);

        for field in Field::CORRECTABLE {
            let current = info.get(field).unwrap_or(NOT_FOUND).to_string();
            let Some(reply) = self.ask(&format!("{}: ({}) ", field.label(), current))? else {
                return Ok(Round::Stop);
            };
            if !reply.is_empty() {
                info.set(field, reply);
            }
        }

        if !self.ask_flags(&mut info)? {
            return Ok(Round::Stop);
        }

        let title = naming::format_title(&info, &self.group_tag);
        writeln!(self.output, "Formatted Title: {}", title)?;

        let Some(key) = self.ask("Enter nyaa key: ")? else {
            return Ok(Round::Stop);
        };
        self.store.upsert(&key, &title)?;
        info!("Saved '{}' to '{}'", key, self.store.path().display());

        match self.prompt("Do you want to continue? (y/n): ")? {
            Some(reply) if is_yes(&reply) => Ok(Round::Continue),
            _ => Ok(Round::Stop),
        }
    }

    /// Episode range, Hi10 and dual audio. Returns false if the input closed.
    fn ask_flags(&mut self, info: &mut ExtractedInfo) -> Result<bool> {
        let Some(range) = self.ask("Episode Range (e.g., 1-25): ")? else {
            return Ok(false);
        };
        if !range.is_empty() {
            info.set_episode_range(&range);
        }

        let Some(hi10) = self.prompt("Hi10 (y/n): ")? else {
            return Ok(false);
        };
        info.set_hi10(is_yes(&hi10));

        let Some(dual_audio) = self.prompt("Dual Audio (y/n): ")? else {
            return Ok(false);
        };
        info.set_dual_audio(is_yes(&dual_audio));

        Ok(true)
    }

    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self.prompt(label)?.map(|reply| reply.trim().to_string()))
    }

    /// Print `label` and read one line without its terminator. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
