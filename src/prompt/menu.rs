//! Indexed menu selection.
//!
//! Options are addressed by their 1-based position in the menu, never by
//! value equality, so two options may carry the same value.

use std::io::{BufRead, Write};
use thiserror::Error;

use super::{Console, INVALID_NUMBER, PromptError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu '{0}' has no options")]
    Empty(String),
}

/// One selectable entry: what the user sees and what the caller gets back.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> MenuOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Value returned on an empty answer, with the label used in the notice.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDefault<T> {
    pub label: String,
    pub value: T,
}

impl<T> MenuDefault<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A titled, non-empty list of options.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu<T> {
    title: String,
    options: Vec<MenuOption<T>>,
}

impl<T: Clone> Menu<T> {
    pub fn new(title: impl Into<String>, options: Vec<MenuOption<T>>) -> Result<Self, MenuError> {
        let title = title.into();
        if options.is_empty() {
            return Err(MenuError::Empty(title));
        }
        Ok(Self { title, options })
    }

    /// Build from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(
        title: impl Into<String>,
        pairs: impl IntoIterator<Item = (L, T)>,
    ) -> Result<Self, MenuError> {
        Self::new(
            title,
            pairs
                .into_iter()
                .map(|(label, value)| MenuOption::new(label, value))
                .collect(),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[MenuOption<T>] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Value at a 1-based position.
    pub fn pick(&self, choice: usize) -> Option<&T> {
        choice
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(|o| &o.value)
    }

    /// The `"<title>"` line followed by `"<n>. <label>"` lines.
    pub fn render(&self) -> Vec<String> {
        std::iter::once(self.title.clone())
            .chain(
                self.options
                    .iter()
                    .enumerate()
                    .map(|(i, o)| format!("{}. {}", i + 1, o.label)),
            )
            .collect()
    }
}

/// Outcome of interpreting one answer against a range of `1..=len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Empty,
    NotANumber,
    OutOfRange,
    Index(usize),
}

fn classify(raw: &str, len: usize) -> Answer {
    let raw = raw.trim();
    if raw.is_empty() {
        return Answer::Empty;
    }
    match raw.parse::<i64>() {
        Err(_) => Answer::NotANumber,
        Ok(n) if n >= 1 && (n as u64) <= len as u64 => Answer::Index(n as usize),
        Ok(_) => Answer::OutOfRange,
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Show the menu, then read a choice (see [`Console::choose`]).
    pub fn select<T: Clone>(
        &mut self,
        menu: &Menu<T>,
        prompt: &str,
        default: Option<&MenuDefault<T>>,
    ) -> Result<T, PromptError> {
        self.say("")?;
        for line in menu.render() {
            self.say(line)?;
        }
        self.choose(menu, prompt, default)
    }

    /// Read a choice for an already displayed menu.
    ///
    /// Loops until the answer is a valid 1-based index, or empty with a
    /// default configured.
    pub fn choose<T: Clone>(
        &mut self,
        menu: &Menu<T>,
        prompt: &str,
        default: Option<&MenuDefault<T>>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            match classify(&answer, menu.len()) {
                Answer::Index(i) => {
                    if let Some(value) = menu.pick(i) {
                        return Ok(value.clone());
                    }
                }
                Answer::Empty => match default {
                    Some(d) => {
                        self.say(format_args!("Using default: {}", d.label))?;
                        return Ok(d.value.clone());
                    }
                    None => self.say("Please enter a choice.")?,
                },
                Answer::NotANumber => self.say(INVALID_NUMBER)?,
                Answer::OutOfRange => self.out_of_range(menu.len())?,
            }
        }
    }

    /// Read a 1-based index in `1..=len`, re-prompting on anything else.
    pub fn read_index(&mut self, prompt: &str, len: usize) -> Result<usize, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            match classify(&answer, len) {
                Answer::Index(i) => return Ok(i),
                Answer::Empty | Answer::NotANumber => self.say(INVALID_NUMBER)?,
                Answer::OutOfRange => self.out_of_range(len)?,
            }
        }
    }

    fn out_of_range(&mut self, len: usize) -> Result<(), PromptError> {
        self.say(format_args!(
            "Error! Please enter a number between 1 and {len}."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_menu_is_rejected() {
        let m = Menu::<u8>::new("Nothing", Vec::new());
        assert_eq!(m.unwrap_err(), MenuError::Empty("Nothing".into()));
    }

    #[test]
    fn pick_is_one_based() {
        let m = Menu::from_pairs("M", [("a", 'a'), ("b", 'b')]).unwrap();
        assert_eq!(m.pick(0), None);
        assert_eq!(m.pick(1), Some(&'a'));
        assert_eq!(m.pick(2), Some(&'b'));
        assert_eq!(m.pick(3), None);
    }

    #[test]
    fn classify_answers() {
        assert_eq!(classify("", 3), Answer::Empty);
        assert_eq!(classify("  ", 3), Answer::Empty);
        assert_eq!(classify("x", 3), Answer::NotANumber);
        assert_eq!(classify("1.0", 3), Answer::NotANumber);
        assert_eq!(classify("0", 3), Answer::OutOfRange);
        assert_eq!(classify("-1", 3), Answer::OutOfRange);
        assert_eq!(classify("4", 3), Answer::OutOfRange);
        assert_eq!(classify(" 3 ", 3), Answer::Index(3));
    }

    #[test]
    fn render_numbers_options() {
        let m = Menu::from_pairs("Marker Options:", [("Circle", 1), ("Square", 2)]).unwrap();
        assert_eq!(m.render(), vec!["Marker Options:", "1. Circle", "2. Square"]);
    }
}
