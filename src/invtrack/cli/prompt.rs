use console::Term;
use invtrack::error::{InvError, Result};
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

/// Line-based prompts on stdout.
///
/// On a terminal answers are read through `console`; when stdin is piped the
/// answers are read line by line, and end of input falls back to the default
/// (or fails if there is none).
pub struct Prompter {
    term: Term,
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn read_answer(&self) -> Result<Option<String>> {
        if self.term.is_term() {
            return Ok(Some(self.term.read_line()?));
        }
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            self.term.write_line("")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn text(&self, label: &str, default: Option<&str>) -> Result<String> {
        loop {
            match default {
                Some(d) if !d.is_empty() => self.term.write_str(&format!("{} [{}]: ", label, d))?,
                _ => self.term.write_str(&format!("{}: ", label))?,
            }

            let Some(answer) = self.read_answer()? else {
                return default
                    .map(str::to_string)
                    .ok_or_else(|| InvError::Api(format!("No input provided for {}", label)));
            };
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            if let Some(d) = default {
                return Ok(d.to_string());
            }
        }
    }

    pub fn parse<T>(&self, label: &str, default: Option<T>, kind: &str) -> Result<T>
    where
        T: FromStr + Display,
    {
        let default_text = default.map(|d| d.to_string());
        loop {
            let answer = self.text(label, default_text.as_deref())?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self
                    .term
                    .write_line(&format!("Error: '{}' is not a valid {}.", answer, kind))?,
            }
        }
    }

    /// Yes/no question, defaulting to no.
    pub fn confirm(&self, label: &str) -> Result<bool> {
        self.term.write_str(&format!("{} [y/N]: ", label))?;
        let answer = self.read_answer()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}
