//! Structural report over a generated bot program.
//!
//! [`inspect_program`] walks the logical lines of the token stream and
//! picks out:
//! - module-level string constants (`TOKEN`, `BOT_NAME`, ...),
//! - every handler, decorated with `@<bot>.message_handler(...)` or bound
//!   by a top-level `<bot>.register_message_handler(...)` call, with its
//!   trigger, docstring and decoded replies,
//! - the order handlers are registered in, which is the order telebot
//!   tries them,
//! - top-level function names defined more than once,
//! - whether the `__main__` entry point is present.

use std::collections::BTreeMap;

use crate::lexer::{tokenize, LexError};
use crate::token::{Token, TokenKind};

/// What makes a handler fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// `commands=["start", ...]`
    Commands(Vec<String>),
    /// `func=lambda m: ... "<needle>" in m.text.lower()`
    Contains(String),
    /// `func=lambda m: True`
    CatchAll,
    /// Anything else.
    Other,
}

impl Trigger {
    /// Whether an incoming text message fires this trigger.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Trigger::Commands(commands) => {
                command_of(text).is_some_and(|cmd| commands.iter().any(|c| c == cmd))
            }
            Trigger::Contains(needle) => text.to_lowercase().contains(needle.as_str()),
            Trigger::CatchAll => true,
            Trigger::Other => false,
        }
    }
}

/// `/start@shop_bot extra` → `start`.
fn command_of(text: &str) -> Option<&str> {
    let word = text.split_whitespace().next()?.strip_prefix('/')?;
    word.split('@').next()
}

/// What a `reply_to` call sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A string literal, directly or through a local variable.
    Literal(String),
    /// `message.text`
    MessageText,
    /// An expression that is not a known literal, as source tokens.
    Unresolved(String),
}

/// A registered message handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub name: String,
    /// Line of the `def`.
    pub line: u32,
    pub trigger: Trigger,
    pub docstring: Option<String>,
    pub replies: Vec<Reply>,
}

impl Handler {
    /// The first literal reply, if any.
    pub fn reply_text(&self) -> Option<&str> {
        self.replies.iter().find_map(|r| match r {
            Reply::Literal(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Everything [`inspect_program`] found.
#[derive(Debug, Clone, Default)]
pub struct ProgramReport {
    /// Handlers in the source order of their `def`.
    pub handlers: Vec<Handler>,
    /// Handler names in registration order.
    pub registration_order: Vec<String>,
    /// Module-level `NAME = "literal"` assignments.
    pub constants: BTreeMap<String, String>,
    /// Top-level function names defined more than once, sorted.
    pub duplicates: Vec<String>,
    pub has_entry_point: bool,
    /// Literals that could not be decoded.
    pub errors: Vec<LexError>,
}

impl ProgramReport {
    /// No duplicate definitions and no bad literals.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.errors.is_empty()
    }

    pub fn handler(&self, name: &str) -> Option<&Handler> {
        self.handlers.iter().find(|h| h.name == name)
    }

    /// Handlers bound to `/command`.
    pub fn command_handlers(&self, command: &str) -> Vec<&Handler> {
        self.handlers
            .iter()
            .filter(|h| matches!(&h.trigger, Trigger::Commands(c) if c.iter().any(|c| c == command)))
            .collect()
    }

    /// The handler telebot would run for `text`: the first registered one
    /// whose trigger matches.
    pub fn dispatch(&self, text: &str) -> Option<&Handler> {
        self.registration_order
            .iter()
            .filter_map(|name| self.handler(name))
            .find(|h| h.trigger.matches(text))
    }

    pub fn catch_all_handlers(&self) -> Vec<&Handler> {
        self.handlers
            .iter()
            .filter(|h| h.trigger == Trigger::CatchAll)
            .collect()
    }
}

/// Inspect a program's source text.
pub fn inspect_program(source: &str) -> ProgramReport {
    let lexed = tokenize(source);
    let mut report = ProgramReport {
        errors: lexed.errors,
        ..ProgramReport::default()
    };

    let mut defined: BTreeMap<String, usize> = BTreeMap::new();
    let mut functions: Vec<Body> = Vec::new();
    let mut registrations: Vec<(String, Trigger)> = Vec::new();
    let mut pending: Option<Trigger> = None;
    let mut current: Option<Body> = None;

    for line in logical_lines(&lexed.tokens) {
        let first = &line[0];

        if first.col > 1 {
            if let Some(body) = current.as_mut() {
                body.take_line(line);
            }
            continue;
        }

        functions.extend(current.take());

        if first.is_op("@") {
            pending = parse_decorator(line);
            continue;
        }

        let trigger = pending.take();
        if first.is_name("def") {
            if let Some(name) = line.get(1).and_then(Token::as_name) {
                *defined.entry(name.to_string()).or_default() += 1;
                if let Some(trigger) = &trigger {
                    registrations.push((name.to_string(), trigger.clone()));
                }
                current = Some(Body::new(name, first.line, trigger));
            }
        } else if first.is_name("if") && is_main_guard(line) {
            report.has_entry_point = true;
        } else if let Some(registration) = parse_registration(line) {
            registrations.push(registration);
        } else if let [name, eq, value] = line {
            if let (Some(name), true, Some(value)) = (name.as_name(), eq.is_op("="), value.as_str())
            {
                report.constants.insert(name.to_string(), value.to_string());
            }
        }
    }
    functions.extend(current.take());

    for (name, trigger) in &registrations {
        if let Some(body) = functions
            .iter_mut()
            .find(|f| f.handler.name == *name && f.trigger.is_none())
        {
            body.trigger = Some(trigger.clone());
        }
    }
    report.handlers = functions.into_iter().filter_map(Body::finish).collect();
    report.registration_order = registrations
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| report.handlers.iter().any(|h| h.name == *name))
        .collect();

    report.duplicates = defined
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();
    report
}

/// A handler whose body is still being read.
struct Body {
    handler: Handler,
    /// `None` until a decorator or registration call binds the function.
    trigger: Option<Trigger>,
    locals: BTreeMap<String, String>,
    first_line: bool,
}

impl Body {
    fn new(name: &str, line: u32, trigger: Option<Trigger>) -> Self {
        Self {
            handler: Handler {
                name: name.to_string(),
                line,
                trigger: Trigger::Other,
                docstring: None,
                replies: Vec::new(),
            },
            trigger,
            locals: BTreeMap::new(),
            first_line: true,
        }
    }

    fn take_line(&mut self, line: &[Token]) {
        let first_line = std::mem::replace(&mut self.first_line, false);
        match line {
            [doc] if first_line => {
                if let Some(text) = doc.as_str() {
                    self.handler.docstring = Some(text.to_string());
                }
            }
            [name, eq, value] if eq.is_op("=") => {
                if let (Some(name), Some(value)) = (name.as_name(), value.as_str()) {
                    self.locals.insert(name.to_string(), value.to_string());
                }
            }
            _ => {
                if let Some(args) = call_args(line, "reply_to") {
                    if let Some(arg) = args.get(1) {
                        let reply = self.resolve(arg);
                        self.handler.replies.push(reply);
                    }
                }
            }
        }
    }

    fn resolve(&self, arg: &[Token]) -> Reply {
        match arg {
            [tok] => match &tok.kind {
                TokenKind::Str(text) => Reply::Literal(text.clone()),
                TokenKind::Name(name) => match self.locals.get(name) {
                    Some(text) => Reply::Literal(text.clone()),
                    None => Reply::Unresolved(name.clone()),
                },
                other => Reply::Unresolved(other.to_string()),
            },
            [obj, dot, attr] if dot.is_op(".") && attr.is_name("text") && obj.is_name("message") => {
                Reply::MessageText
            }
            _ => Reply::Unresolved(render(arg)),
        }
    }

    /// The finished handler, or `None` for a plain function.
    fn finish(self) -> Option<Handler> {
        let trigger = self.trigger?;
        Some(Handler {
            trigger,
            ..self.handler
        })
    }
}

/// Split the token stream into logical lines, dropping the terminators.
fn logical_lines(tokens: &[Token]) -> impl Iterator<Item = &[Token]> {
    tokens
        .split(|t| matches!(t.kind, TokenKind::Newline | TokenKind::Eof))
        .filter(|line| !line.is_empty())
}

/// `@<obj>.message_handler(<args>)` → its trigger. Other decorators yield
/// `None`.
fn parse_decorator(line: &[Token]) -> Option<Trigger> {
    let args = call_args(line, "message_handler")?;
    Some(filter_trigger(&args))
}

/// `<obj>.register_message_handler(<name>, <args>)` → the bound function
/// and its trigger.
fn parse_registration(line: &[Token]) -> Option<(String, Trigger)> {
    let args = call_args(line, "register_message_handler")?;
    let (callback, filters) = args.split_first()?;
    match callback {
        [name] => Some((name.as_name()?.to_string(), filter_trigger(filters))),
        _ => None,
    }
}

fn filter_trigger(args: &[&[Token]]) -> Trigger {
    for arg in args {
        match arg {
            [key, eq, rest @ ..] if key.is_name("commands") && eq.is_op("=") => {
                let commands = rest
                    .iter()
                    .filter_map(Token::as_str)
                    .map(str::to_string)
                    .collect();
                return Trigger::Commands(commands);
            }
            [key, eq, rest @ ..] if key.is_name("func") && eq.is_op("=") => {
                return predicate_trigger(rest);
            }
            _ => {}
        }
    }
    Trigger::Other
}

fn predicate_trigger(lambda: &[Token]) -> Trigger {
    let body = match lambda.iter().position(|t| t.is_op(":")) {
        Some(colon) => &lambda[colon + 1..],
        None => return Trigger::Other,
    };
    if let [only] = body {
        if only.is_name("True") {
            return Trigger::CatchAll;
        }
    }
    body.windows(2)
        .find_map(|pair| match pair {
            [needle, kw] if kw.is_name("in") => needle.as_str().map(str::to_string),
            _ => None,
        })
        .map_or(Trigger::Other, Trigger::Contains)
}

/// Arguments of the first call to `.name(...)` or `name(...)` on the line,
/// split on top-level commas.
fn call_args<'a>(line: &'a [Token], name: &str) -> Option<Vec<&'a [Token]>> {
    let callee = line.iter().position(|t| t.is_name(name))?;
    if !line.get(callee + 1)?.is_op("(") {
        return None;
    }
    let start = callee + 2;
    let mut depth = 0u32;
    let mut args = Vec::new();
    let mut arg_start = start;
    for (i, tok) in line.iter().enumerate().skip(start) {
        match &tok.kind {
            TokenKind::Op(op) if matches!(op.as_str(), "(" | "[" | "{") => depth += 1,
            TokenKind::Op(op) if matches!(op.as_str(), ")" | "]" | "}") => {
                if depth == 0 {
                    if i > arg_start {
                        args.push(&line[arg_start..i]);
                    }
                    return Some(args);
                }
                depth -= 1;
            }
            TokenKind::Op(op) if op == "," && depth == 0 => {
                args.push(&line[arg_start..i]);
                arg_start = i + 1;
            }
            _ => {}
        }
    }
    None
}

fn is_main_guard(line: &[Token]) -> bool {
    line.iter().any(|t| t.is_name("__name__")) && line.iter().any(|t| t.as_str() == Some("__main__"))
}

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.kind.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
