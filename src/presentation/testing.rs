use crate::presentation::console::Console;
use crate::presentation::style::StyleHint;
use anyhow::Result;
use std::collections::VecDeque;

/// Console fed from a fixed list of answers; behaves like closed stdin once
/// they run out.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub lines: Vec<(String, StyleHint)>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn contains(&self, text: &str, style: StyleHint) -> bool {
        self.lines
            .iter()
            .any(|(line, hint)| *hint == style && line.contains(text))
    }
}

impl Console for ScriptedConsole {
    fn prompt_line(&mut self, message: &str) -> Result<Option<String>> {
        self.prompts.push(message.to_string());
        Ok(self.inputs.pop_front())
    }

    fn emit_line(&mut self, text: &str, style: StyleHint) {
        self.lines.push((text.to_string(), style));
    }
}
