//! Confirmation providers used by the edit engine.
//!
//! The engine never reads stdin directly: every yes/no, free-text or
//! closed-choice answer goes through a [`Prompter`].

use crate::ui::messages::warning;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Yes/no question. Anything but an explicit yes is a no.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Free-text answer; `None` when nothing usable was entered.
    fn text(&mut self, prompt: &str) -> Option<String>;

    /// Index into `options`; `None` when the answer matches no option.
    fn choose(&mut self, prompt: &str, options: &[&str]) -> Option<usize>;
}

/// Match an answer against a closed list, by 1-based number or by name.
pub fn match_choice(answer: &str, options: &[&str]) -> Option<usize> {
    let a = answer.trim();
    if let Ok(n) = a.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }
    options.iter().position(|o| o.eq_ignore_ascii_case(a))
}

/// Interactive prompter on stdin/stdout.
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(&self) -> Option<String> {
        let _ = io::stdout().flush();
        let mut s = String::new();
        match io::stdin().lock().read_line(&mut s) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(s.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, prompt: &str) -> bool {
        warning(prompt);
        print!("Confirm [y/N]: ");
        self.read_line()
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn text(&mut self, prompt: &str) -> Option<String> {
        print!("{}: ", prompt);
        self.read_line().filter(|s| !s.trim().is_empty())
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> Option<usize> {
        println!("{}", prompt);
        for (i, o) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, o);
        }
        print!("Choice: ");
        self.read_line().and_then(|s| match_choice(&s, options))
    }
}

/// Non-interactive prompter behind `--yes`: confirms every gate, offers no
/// free text and picks nothing from closed lists.
pub struct AutoConfirm;

impl Prompter for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }

    fn text(&mut self, _prompt: &str) -> Option<String> {
        None
    }

    fn choose(&mut self, _prompt: &str, _options: &[&str]) -> Option<usize> {
        None
    }
}

/// Answers fed from a queue, in order. An exhausted queue declines.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<S: Into<String>>(answers: Vec<S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts seen so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    fn next(&mut self, prompt: &str) -> Option<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.next(prompt)
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn text(&mut self, prompt: &str) -> Option<String> {
        self.next(prompt).filter(|s| !s.trim().is_empty())
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> Option<usize> {
        self.next(prompt).and_then(|s| match_choice(&s, options))
    }
}
