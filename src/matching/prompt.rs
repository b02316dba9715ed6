use std::io::{self, BufRead, Write};

use super::engine::MatchCandidate;

/// Interactive collaborator used to break ties between release groups.
pub trait Disambiguator {
    /// Show the numbered candidate descriptions.
    fn present(&mut self, lines: &[String]) -> io::Result<()>;
    /// Ask for an answer. `None` means the input ended.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
    /// Tell the user an answer was not accepted before asking again.
    fn reject(&mut self, answer: &str, reason: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput {
    /// Zero-based index into the presented list.
    Index(usize),
    Cancel,
    Invalid,
}

/// Interpret a 1-based answer against a list of `count` entries.
pub fn parse_selection(answer: &str, count: usize) -> SelectionInput {
    let answer = answer.trim();
    if answer.is_empty() || matches!(answer.to_ascii_lowercase().as_str(), "c" | "cancel" | "q") {
        return SelectionInput::Cancel;
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => SelectionInput::Index(n - 1),
        _ => SelectionInput::Invalid,
    }
}

/// One-line summary of a tied candidate, numbered from 1.
pub fn describe_candidate(number: usize, candidate: &MatchCandidate) -> String {
    let group = match &candidate.release_group {
        Some(g) => match &g.primary_type {
            Some(kind) => format!("{} [{}] ({kind})", g.title, g.id),
            None => format!("{} [{}]", g.title, g.id),
        },
        None => "(no release group)".to_string(),
    };
    let release = &candidate.best_release;
    format!(
        "{number}) Release group: {group} | {} - {} [{}] | {} tracks",
        release.artist_display(),
        release.title,
        release.id,
        release.total_track_count()
    )
}

/// Line-oriented prompt over any reader/writer pair; stdin/stdout in the binary.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line; `None` once the input is exhausted.
    pub fn read_answer(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

impl<R: BufRead, W: Write> Disambiguator for TerminalPrompt<R, W> {
    fn present(&mut self, lines: &[String]) -> io::Result<()> {
        writeln!(self.output, "Several release groups match equally well:")?;
        for line in lines {
            writeln!(self.output, "  {line}")?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.read_answer(prompt)
    }

    fn reject(&mut self, answer: &str, reason: &str) -> io::Result<()> {
        writeln!(self.output, "Invalid selection '{}': {reason}", answer.trim())
    }
}
