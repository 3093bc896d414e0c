#![allow(dead_code)]

use helm_scaffold::error::{Error, Result};
use helm_scaffold::prompt::{Choice, Prompter};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

/// A scripted answer for the next prompt.
#[derive(Debug, Clone)]
pub enum Reply {
    Answer(&'static str),
    Pick(usize),
    Choose(Choice),
    Fail,
}

/// Prompter double that replays scripted replies and records every call.
#[derive(Default)]
pub struct ScriptedPrompter {
    replies: RefCell<VecDeque<Reply>>,
    pub asked: RefCell<Vec<String>>,
    pub offered: RefCell<Vec<Vec<String>>>,
    pub announcements: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self { replies: RefCell::new(replies.into()), ..Default::default() }
    }

    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }

    fn next(&self) -> Reply {
        self.replies.borrow_mut().pop_front().expect("unexpected prompt")
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, label: &str) -> Result<String> {
        self.asked.borrow_mut().push(label.to_string());
        match self.next() {
            Reply::Answer(value) => Ok(value.to_string()),
            Reply::Fail => Err(Error::PromptError("interrupted".to_string())),
            other => panic!("expected an answer for '{label}', got {other:?}"),
        }
    }

    fn choose_one(&self, _label: &str, items: &[String]) -> Result<usize> {
        self.offered.borrow_mut().push(items.to_vec());
        match self.next() {
            Reply::Pick(index) => Ok(index),
            Reply::Fail => Err(Error::PromptError("interrupted".to_string())),
            other => panic!("expected a pick, got {other:?}"),
        }
    }

    fn choose_or_create(&self, _label: &str, items: &[String]) -> Result<Choice> {
        self.offered.borrow_mut().push(items.to_vec());
        match self.next() {
            Reply::Choose(choice) => Ok(choice),
            Reply::Fail => Err(Error::PromptError("interrupted".to_string())),
            other => panic!("expected a choice, got {other:?}"),
        }
    }

    fn announce(&self, message: &str) {
        self.announcements.borrow_mut().push(message.to_string());
    }
}

pub fn write_file<P: AsRef<Path>>(path: P, content: &str) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Creates a minimal chart named `name` in `dir`.
pub fn create_chart<P: AsRef<Path>>(dir: P, name: &str) {
    write_file(
        dir.as_ref().join("Chart.yaml"),
        &format!("apiVersion: v2\nname: {name}\nversion: 0.1.0\n"),
    );
}
