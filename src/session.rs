//! Playground session state
//!
//! One session object owns everything that used to be ambient: the
//! active language, the compiled grammar registry, the overlay and
//! gutter, the queued stdin lines and the current script name. The
//! tokenizer stays a pure function of the text and language; the
//! session just wires the collaborators around it.

use std::collections::VecDeque;

use crate::backend::{classify_outcome, ExecutionBackend, OutputKind};
use crate::error::Result;
use crate::gutter::Gutter;
use crate::highlight::{Fragment, GrammarRegistry, LanguageId};
use crate::overlay::Overlay;
use crate::render::html;

/// A playground editing session
pub struct Session {
    language: LanguageId,
    registry: GrammarRegistry,
    overlay: Overlay,
    gutter: Gutter,
    stdin_queue: VecDeque<String>,
    script_name: Option<String>,
}

impl Session {
    /// Create a session, compiling all grammars once
    pub fn new(language: LanguageId) -> Result<Self> {
        Ok(Self {
            language,
            registry: GrammarRegistry::new()?,
            overlay: Overlay::new(),
            gutter: Gutter::new(),
            stdin_queue: VecDeque::new(),
            script_name: None,
        })
    }

    /// Active language
    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Switch language. The current script name belongs to the old
    /// language, so it is dropped.
    pub fn set_language(&mut self, language: LanguageId) {
        if language != self.language {
            self.language = language;
            self.script_name = None;
        }
    }

    /// Switch to the next language in the cycle and return it
    pub fn cycle_language(&mut self) -> LanguageId {
        self.set_language(self.language.cycle());
        self.language
    }

    /// Tokenize text with the active grammar, without touching the
    /// overlay or gutter. Used by alternate renderers.
    pub fn tokenize(&self, text: &str) -> Vec<Fragment> {
        self.registry.get(self.language).tokenize(text)
    }

    /// Highlight source text and refresh the overlay and gutter.
    ///
    /// Returns the overlay markup. The alignment invariant is checked
    /// on every pass in debug builds.
    pub fn highlight(&mut self, text: &str) -> &str {
        let grammar = self.registry.get(self.language);
        let markup = html::render(text, &grammar.tokenize(text));

        self.gutter.update(text);
        self.overlay.set_content(markup);
        debug_assert!(self.overlay.aligned_with(text));
        self.overlay.content()
    }

    /// Overlay layer state
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Line-number gutter state
    pub fn gutter(&self) -> &Gutter {
        &self.gutter
    }

    /// Mirror the edit surface's scroll offsets onto the overlay
    pub fn sync_scroll(&mut self, top: usize, left: usize) {
        self.overlay.sync_scroll(top, left);
    }

    /// Current script name, if the buffer is named
    pub fn script_name(&self) -> Option<&str> {
        self.script_name.as_deref()
    }

    /// Name the current script, appending the language extension when
    /// missing. Empty names clear the script name.
    pub fn set_script_name(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.script_name = None;
            return;
        }

        let ext = self.language.extension();
        self.script_name = Some(if name.ends_with(ext) {
            name.to_string()
        } else {
            format!("{}{}", name, ext)
        });
    }

    /// Display name for the current script
    pub fn display_name(&self) -> String {
        match &self.script_name {
            Some(name) => name.clone(),
            None => format!("untitled{}", self.language.extension()),
        }
    }

    /// Queue stdin lines for the next run. Returns how many lines
    /// were queued.
    pub fn queue_stdin(&mut self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let mut queued = 0;
        for line in text.split('\n') {
            self.stdin_queue
                .push_back(line.strip_suffix('\r').unwrap_or(line).to_string());
            queued += 1;
        }
        queued
    }

    /// Take the next queued stdin line
    pub fn next_stdin_line(&mut self) -> Option<String> {
        self.stdin_queue.pop_front()
    }

    /// Number of queued stdin lines
    pub fn stdin_pending(&self) -> usize {
        self.stdin_queue.len()
    }

    /// Run source text on a backend, draining the stdin queue into
    /// the call, and classify the outcome into console entries.
    pub fn run(
        &mut self,
        backend: &mut dyn ExecutionBackend,
        source: &str,
    ) -> Result<Vec<(OutputKind, String)>> {
        let stdin: Vec<String> = self.stdin_queue.drain(..).collect();
        let outcome = backend.run(source, &stdin)?;
        Ok(classify_outcome(&outcome))
    }
}
