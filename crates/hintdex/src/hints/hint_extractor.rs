//! # Hint Extractor
//!
//! A single left-to-right scan over a regex source, collecting the runs of
//! literal characters which every match of the regex must contain.
//!
//! The scan is conservative: anything it cannot prove mandatory (groups,
//! classes, escapes, quantified characters) is opaque and splits runs. A
//! top-level `|` abandons the scan entirely.
//!
//! Literals are held back by one character (the `pending` slot) so that a
//! following `?`, `*` or `{` can drop the character it quantifies.

use core::{mem, ops::ControlFlow};

/// Extract the literal hints of a regex source.
///
/// Every returned hint occurs verbatim in every string the regex matches.
/// Hints are returned in pattern order; empty runs are dropped.
///
/// ## Arguments
/// * `pattern` - The regex source.
///
/// ## Returns
/// The (possibly empty) list of hints.
pub fn extract_hints(pattern: &str) -> Vec<String> {
    let mut scanner = HintScanner::default();
    for c in pattern.chars() {
        if scanner.step(c).is_break() {
            return Vec::new();
        }
    }
    scanner.finish()
}

/// Opaque consumption after a `\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeState {
    /// Just saw the backslash; the next char names the escape.
    Start,

    /// The escape takes an argument; a `{` or `<` here opens a delimited one,
    /// otherwise this many chars are consumed.
    ArgStart(usize),

    /// This many argument chars remain.
    Fixed(usize),

    /// Consume until the closing delimiter.
    Delimited(char),
}

impl EscapeState {
    /// Consume one char; `None` when the escape is complete.
    fn advance(
        self,
        c: char,
    ) -> Option<Self> {
        match self {
            Self::Start => match c {
                'x' => Some(Self::ArgStart(2)),
                'u' => Some(Self::ArgStart(4)),
                'U' => Some(Self::ArgStart(8)),
                'p' | 'P' | 'k' | 'g' => Some(Self::ArgStart(1)),
                _ => None,
            },
            Self::ArgStart(n) => match c {
                '{' => Some(Self::Delimited('}')),
                '<' => Some(Self::Delimited('>')),
                _ => Self::Fixed(n).advance(c),
            },
            Self::Fixed(n) if n > 1 => Some(Self::Fixed(n - 1)),
            Self::Fixed(_) => None,
            Self::Delimited(close) if c == close => None,
            Self::Delimited(_) => Some(self),
        }
    }
}

/// Bracket class nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClassState {
    depth: usize,

    /// Just after `[` or `[^`, where `]` is a literal member.
    at_start: bool,

    /// Just after `[`, where `^` negates the class.
    negatable: bool,
}

/// Inline flag scanning after a group's `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagState {
    /// Just saw `(`.
    Open,

    /// Inside `(?...`, reading flag letters.
    Flags { negated: bool },
}

/// What to do with the held-back literal when a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// The literal is mandatory; append it to the run.
    Keep,

    /// The literal is quantified by what follows; drop it.
    Drop,
}

#[derive(Debug, Default)]
struct HintScanner {
    hints: Vec<String>,
    current: String,
    pending: Option<char>,

    escape: Option<EscapeState>,
    class: Option<ClassState>,
    group_depth: usize,
    flags: Option<FlagState>,
    in_braces: bool,
}

impl HintScanner {
    fn step(
        &mut self,
        c: char,
    ) -> ControlFlow<()> {
        if let Some(escape) = self.escape {
            self.escape = escape.advance(c);
            if let Some(class) = &mut self.class {
                class.at_start = false;
                class.negatable = false;
            }
        } else if let Some(class) = self.class {
            self.step_class(class, c);
        } else if self.group_depth > 0 {
            self.step_group(c)?;
        } else if self.in_braces {
            if c == '}' {
                self.in_braces = false;
            }
        } else {
            self.step_top_level(c)?;
        }
        ControlFlow::Continue(())
    }

    fn step_class(
        &mut self,
        mut class: ClassState,
        c: char,
    ) {
        let at_start = mem::replace(&mut class.at_start, false);
        let negatable = mem::replace(&mut class.negatable, false);
        match c {
            '^' if negatable => class.at_start = true,
            ']' if at_start => {}
            ']' if class.depth == 1 => {
                self.class = None;
                return;
            }
            ']' => class.depth -= 1,
            '[' => {
                class.depth += 1;
                class.at_start = true;
                class.negatable = true;
            }
            '\\' => self.escape = Some(EscapeState::Start),
            _ => {}
        }
        self.class = Some(class);
    }

    fn step_group(
        &mut self,
        c: char,
    ) -> ControlFlow<()> {
        self.flags = match (self.flags.take(), c) {
            (Some(FlagState::Open), '?') => Some(FlagState::Flags { negated: false }),
            (Some(FlagState::Flags { .. }), '-') => Some(FlagState::Flags { negated: true }),
            (Some(FlagState::Flags { negated: false }), 'x') => {
                log::trace!("verbose flag set; no hints");
                return ControlFlow::Break(());
            }
            (Some(FlagState::Flags { negated }), c) if c.is_ascii_alphabetic() => {
                Some(FlagState::Flags { negated })
            }
            _ => None,
        };

        match c {
            '(' => self.open_group(),
            ')' => self.group_depth -= 1,
            '[' => self.open_class(),
            '\\' => self.escape = Some(EscapeState::Start),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn step_top_level(
        &mut self,
        c: char,
    ) -> ControlFlow<()> {
        match c {
            '?' | '*' => self.end_hint(Pending::Drop),
            '+' | '.' | '^' | '$' => self.end_hint(Pending::Keep),
            '(' => {
                self.end_hint(Pending::Keep);
                self.open_group();
            }
            '[' => {
                self.end_hint(Pending::Keep);
                self.open_class();
            }
            '{' => {
                // The char before `{` is the one being repeated.
                self.end_hint(Pending::Drop);
                self.in_braces = true;
            }
            '\\' => {
                self.end_hint(Pending::Keep);
                self.escape = Some(EscapeState::Start);
            }
            '|' => return ControlFlow::Break(()),
            _ => {
                if let Some(prev) = self.pending.replace(c) {
                    self.current.push(prev);
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn open_group(&mut self) {
        self.group_depth += 1;
        self.flags = Some(FlagState::Open);
    }

    fn open_class(&mut self) {
        self.class = Some(ClassState {
            depth: 1,
            at_start: true,
            negatable: true,
        });
    }

    fn end_hint(
        &mut self,
        pending: Pending,
    ) {
        if let Some(c) = self.pending.take()
            && pending == Pending::Keep
        {
            self.current.push(c);
        }
        if !self.current.is_empty() {
            self.hints.push(mem::take(&mut self.current));
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.end_hint(Pending::Keep);
        self.hints
    }
}
