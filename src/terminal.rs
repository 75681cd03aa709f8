use crate::{
    error::ReaderError,
    model::{StoryGraph, StoryNode},
};
use std::io::{BufRead, Write};

const RULE: &str = "---------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Stop,
    /// 1-based index into the current arc's options.
    Option(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Stop,
    Moved(String),
}

/// Parses one line of input against an arc with `count` options. Anything
/// but `0..=count` is an error; there is no second chance.
pub fn parse_choice(line: &str, count: usize) -> Result<Choice, ReaderError> {
    let trimmed = line.trim();
    let choice: usize = trimmed
        .parse()
        .map_err(|_| ReaderError::InvalidChoice(trimmed.to_owned()))?;
    match choice {
        0 => Ok(Choice::Stop),
        n if n <= count => Ok(Choice::Option(n)),
        n => Err(ReaderError::OutOfRange { choice: n, count }),
    }
}

pub fn write_arc(out: &mut impl Write, node: &StoryNode) -> std::io::Result<()> {
    writeln!(out, "{}", node.title)?;
    write!(out, "{RULE}\n\n")?;
    for paragraph in node.story.iter() {
        writeln!(out, "{paragraph}\n")?;
    }
    writeln!(out, "{RULE}")?;
    for (i, option) in node.options.iter().enumerate() {
        writeln!(out, "{} - {}\n", i + 1, option.text)?;
    }
    writeln!(out, "0 - Stop reading")?;
    writeln!(out, "\nChoose your own path, type the number to choose where to go: ")?;
    out.flush()
}

/// Terminal navigator. Holds the arc being read and moves along options as
/// numbers come in.
pub struct Reader<'a, R, W> {
    story: &'a StoryGraph,
    current: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Reader<'a, R, W> {
    pub fn new(story: &'a StoryGraph, intro: impl Into<String>, input: R, output: W) -> Self {
        Self {
            story,
            current: intro.into(),
            input,
            output,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn display(&mut self) -> Result<(), ReaderError> {
        if !self.story.contains(&self.current) {
            tracing::warn!(arc = %self.current, "unknown arc, showing a blank page");
        }
        write_arc(&mut self.output, self.story.arc(&self.current))?;
        Ok(())
    }

    /// Reads one choice and applies it.
    pub fn choose(&mut self) -> Result<Step, ReaderError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ReaderError::EndOfInput);
        }
        let node = self.story.arc(&self.current);
        match parse_choice(&line, node.options.len())? {
            Choice::Stop => Ok(Step::Stop),
            Choice::Option(n) => {
                let next = node.options[n - 1].arc.clone();
                tracing::debug!(from = %self.current, to = %next, "arc chosen");
                self.current = next.clone();
                Ok(Step::Moved(next))
            }
        }
    }

    pub fn run(&mut self) -> Result<(), ReaderError> {
        loop {
            self.display()?;
            if self.choose()? == Step::Stop {
                return Ok(());
            }
        }
    }
}
