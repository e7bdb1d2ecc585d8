//! Minimal math markup for diagram labels.
//!
//! Block labels are usually transfer-function names such as `G_{c1}` or
//! `D_{21}`. Text between `$` delimiters is treated as math: it is set in
//! italics, `_` starts a subscript and `^` a superscript. A script is either
//! a single character or a `{...}` group. Everything outside the delimiters
//! is plain text. `\$` produces a literal dollar sign.
//!
//! ```
//! # use blockwire_core::draw::{BaselineShift, TextRun, parse_markup};
//! let runs = parse_markup("$G_{c1}$");
//! assert_eq!(runs, vec![
//!     TextRun::new("G", true, BaselineShift::None),
//!     TextRun::new("c1", true, BaselineShift::Sub),
//! ]);
//! ```

use winnow::{
    Parser as _,
    combinator::{alt, delimited, repeat},
    error::{ContextError, ModalResult},
    token::{none_of, one_of},
};

type Input<'a> = &'a str;
type IResult<O> = ModalResult<O, ContextError>;

/// Vertical offset of a text run relative to the baseline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BaselineShift {
    #[default]
    None,
    Sub,
    Super,
}

impl BaselineShift {
    /// Returns the SVG `baseline-shift` value, or `None` on the baseline.
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Sub => Some("sub"),
            Self::Super => Some("super"),
        }
    }
}

/// A maximal piece of label text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    text: String,
    italic: bool,
    shift: BaselineShift,
}

impl TextRun {
    pub fn new(text: impl Into<String>, italic: bool, shift: BaselineShift) -> Self {
        Self {
            text: text.into(),
            italic,
            shift,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn shift(&self) -> BaselineShift {
        self.shift
    }
}

/// Accumulates runs, merging neighbours with equal style.
#[derive(Default)]
struct RunBuilder {
    runs: Vec<TextRun>,
}

impl RunBuilder {
    fn push(&mut self, run: TextRun) {
        if run.text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.italic == run.italic && last.shift == run.shift => {
                last.text.push_str(&run.text)
            }
            _ => self.runs.push(run),
        }
    }

    fn with_runs(mut self, runs: Vec<TextRun>) -> Self {
        for run in runs {
            self.push(run);
        }
        self
    }
}

/// Splits label text into styled runs.
///
/// An unterminated `$` is kept as literal text.
pub fn parse_markup(source: &str) -> Vec<TextRun> {
    markup
        .parse(source)
        .map(|builder| builder.runs)
        // Every character matches some branch
        .unwrap_or_else(|_| vec![TextRun::new(source, false, BaselineShift::None)])
}

/// Parse a whole label: math spans and plain characters
fn markup(input: &mut Input<'_>) -> IResult<RunBuilder> {
    repeat(0.., alt((math_span, plain_char)))
        .fold(RunBuilder::default, RunBuilder::with_runs)
        .parse_next(input)
}

/// Parse `\$` as a literal dollar sign
fn escaped_dollar(input: &mut Input<'_>) -> IResult<char> {
    "\\$".value('$').parse_next(input)
}

/// Parse one character of text that does not end a math span
fn text_char(input: &mut Input<'_>) -> IResult<char> {
    alt((escaped_dollar, none_of('$'))).parse_next(input)
}

/// Parse a character outside math, including a stray `$`
fn plain_char(input: &mut Input<'_>) -> IResult<Vec<TextRun>> {
    alt((text_char, '$'))
        .map(|ch: char| vec![TextRun::new(ch.to_string(), false, BaselineShift::None)])
        .parse_next(input)
}

/// Parse a math span: `$...$`
fn math_span(input: &mut Input<'_>) -> IResult<Vec<TextRun>> {
    delimited('$', repeat(0.., alt((script, math_char))), '$').parse_next(input)
}

/// Parse an italic character inside math
fn math_char(input: &mut Input<'_>) -> IResult<TextRun> {
    text_char
        .map(|ch| TextRun::new(ch.to_string(), true, BaselineShift::None))
        .parse_next(input)
}

/// Parse a subscript or superscript: `_x`, `^x`, `_{...}` or `^{...}`
///
/// A marker without a body backtracks and is then read as a plain math character.
fn script(input: &mut Input<'_>) -> IResult<TextRun> {
    let shift = one_of(['_', '^'])
        .map(|marker| {
            if marker == '_' {
                BaselineShift::Sub
            } else {
                BaselineShift::Super
            }
        })
        .parse_next(input)?;
    let text = alt((brace_group, text_char.map(String::from))).parse_next(input)?;
    Ok(TextRun::new(text, true, shift))
}

/// Parse `{...}` and return its content; nested groups keep their braces
fn brace_group(input: &mut Input<'_>) -> IResult<String> {
    delimited('{', group_body, '}').parse_next(input)
}

fn group_body(input: &mut Input<'_>) -> IResult<String> {
    repeat(
        0..,
        alt((
            brace_group.map(|inner| format!("{{{inner}}}")),
            alt((escaped_dollar, none_of(['{', '}', '$']))).map(String::from),
        )),
    )
    .fold(String::new, |mut acc, part: String| {
        acc.push_str(&part);
        acc
    })
    .parse_next(input)
}

/// Returns the label text with markup removed, as it reads on screen.
///
/// ```
/// # use blockwire_core::draw::markup_to_plain;
/// assert_eq!(markup_to_plain("$D_{21}$"), "D21");
/// assert_eq!(markup_to_plain("Dopamine"), "Dopamine");
/// ```
pub fn markup_to_plain(source: &str) -> String {
    parse_markup(source)
        .iter()
        .map(|run| run.text())
        .collect()
}
