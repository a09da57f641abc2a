//! Character-level parser for the Voltaic schematic language.
//!
//! The grammar is small and line oriented, so parsing runs directly on the
//! source characters with winnow combinators instead of a separate token
//! stream. Parsing stops at the first error; committed branches use
//! `cut_err` with an [`Expectation`] context so the reported diagnostic
//! carries a precise code, span and help text.

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, eof, not, opt, preceded, repeat, separated, terminated},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{one_of, take_till, take_while},
};

use voltaic_core::{
    statement::{
        ComponentDescriptor, ConnectionStatement, ConnectionStep, Definition, Delimiter,
        DesignatorSpec, NodeDescriptor, PortDescriptor, PortKind, Settings, Statement,
    },
    value::Value,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Diagnostic information attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Expectation {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

impl Expectation {
    fn new(code: ErrorCode, message: &'static str, start: usize) -> Self {
        Self {
            code,
            message,
            help: None,
            start,
        }
    }

    fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<Expectation>>;

/// A trailing attribute inside a component body.
enum Attribute {
    Symbol(String),
    Description(String),
}

/// Fail with a committed error carrying `expectation`.
fn fail<O>(input: &Input<'_>, expectation: Expectation) -> IResult<O> {
    Err(ErrMode::Cut(ContextError::new().add_context(
        input,
        &input.checkpoint(),
        expectation,
    )))
}

/// Horizontal whitespace only; newlines terminate statements.
fn spaces(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., [' ', '\t', '\r']).void().parse_next(input)
}

fn spaces1(input: &mut Input<'_>) -> IResult<()> {
    take_while(1.., [' ', '\t', '\r']).void().parse_next(input)
}

/// `#` up to (not including) the end of the line.
fn comment(input: &mut Input<'_>) -> IResult<()> {
    ('#', take_till(0.., '\n')).void().parse_next(input)
}

/// Whitespace, empty statements and comments between statements.
fn blank(input: &mut Input<'_>) -> IResult<()> {
    repeat(
        0..,
        alt((
            take_while(1.., [' ', '\t', '\r', '\n', ';']).void(),
            comment,
        )),
    )
    .parse_next(input)
}

fn identifier<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Terminal names also allow `+` for polarized pins.
fn terminal_name(input: &mut Input<'_>) -> IResult<String> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '+')
        .map(str::to_string)
        .parse_next(input)
}

/// A double-quoted description on a single line.
fn string_literal(input: &mut Input<'_>) -> IResult<String> {
    let start = input.current_token_start();
    '"'.parse_next(input)?;
    cut_err(terminated(take_till(0.., ['"', '\n']), '"'))
        .context(
            Expectation::new(ErrorCode::E001, "unterminated string literal", start)
                .with_help("add closing `\"` before the end of the line"),
        )
        .map(str::to_string)
        .parse_next(input)
}

/// Type letters with an optional index, e.g. `R`, `R1`, `IC12`.
fn designator_spec(input: &mut Input<'_>) -> IResult<DesignatorSpec> {
    let start = input.current_token_start();
    let (letter, digits) = terminated(
        (
            take_while(1.., |c: char| c.is_ascii_uppercase()),
            take_while(0.., |c: char| c.is_ascii_digit()),
        ),
        not(one_of(|c: char| c.is_alphanumeric() || c == '.' || c == '_')),
    )
    .parse_next(input)?;

    let index = if digits.is_empty() {
        None
    } else {
        // Indices must fit the compiler's signed designator index.
        match digits.parse::<u32>() {
            Ok(index) if index > 0 && i32::try_from(index).is_ok() => Some(index),
            _ => {
                return fail(
                    input,
                    Expectation::new(ErrorCode::E104, "invalid designator index", start)
                        .with_help("designator indices run from 1 to 2147483647"),
                );
            }
        }
    };

    Ok(DesignatorSpec {
        letter: letter.to_string(),
        index,
    })
}

fn value_token(input: &mut Input<'_>) -> IResult<Value> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | '/' | 'µ' | 'Ω')
    })
    .map(Value::parse)
    .parse_next(input)
}

fn attribute(input: &mut Input<'_>) -> IResult<Attribute> {
    alt((
        preceded('@', identifier).map(|name: &str| Attribute::Symbol(name.to_string())),
        string_literal.map(Attribute::Description),
    ))
    .parse_next(input)
}

/// The inside of a component: `[designator] [[:] value] (@SYMBOL | "description")*`.
fn definition(input: &mut Input<'_>) -> IResult<Definition> {
    spaces(input)?;
    let designator = opt(designator_spec).parse_next(input)?;
    let value = opt(preceded((spaces, opt(':'), spaces), value_token)).parse_next(input)?;

    let mut definition = Definition {
        designator,
        value,
        ..Definition::default()
    };

    let attributes: Vec<Attribute> = repeat(0.., preceded(spaces, attribute)).parse_next(input)?;
    for attribute in attributes {
        match attribute {
            Attribute::Symbol(symbol) => definition.symbol = Some(symbol),
            Attribute::Description(description) => definition.description = Some(description),
        }
    }

    Ok(definition)
}

fn component(input: &mut Input<'_>) -> IResult<ComponentDescriptor> {
    let start = input.current_token_start();
    let delimiter = one_of(['[', '{', '<'])
        .map(|c| match c {
            '[' => Delimiter::Square,
            '{' => Delimiter::Curly,
            _ => Delimiter::Angle,
        })
        .parse_next(input)?;
    let (_, close) = delimiter.chars();

    let definition = cut_err(terminated(definition, (spaces, close)))
        .context(
            Expectation::new(ErrorCode::E102, "unclosed component", start)
                .with_help("close the component with the delimiter matching its opening one"),
        )
        .parse_next(input)?;

    Ok(ComponentDescriptor {
        delimiter,
        definition,
    })
}

/// A port keyword with optional `:specifier` and `@SYMBOL`.
fn port(input: &mut Input<'_>) -> IResult<PortDescriptor> {
    let kind = terminated(
        take_while(1.., |c: char| c.is_ascii_lowercase()).verify_map(PortKind::from_keyword),
        not(one_of(|c: char| c.is_ascii_alphanumeric() || c == '_')),
    )
    .parse_next(input)?;
    let specifier = opt(preceded(':', identifier))
        .map(|specifier| specifier.map(str::to_string))
        .parse_next(input)?;
    let symbol = opt(preceded((spaces, '@'), identifier))
        .map(|symbol| symbol.map(str::to_string))
        .parse_next(input)?;

    Ok(PortDescriptor {
        kind,
        specifier,
        symbol,
    })
}

fn node(input: &mut Input<'_>) -> IResult<NodeDescriptor> {
    alt((
        component.map(NodeDescriptor::Component),
        port.map(NodeDescriptor::Port),
    ))
    .parse_next(input)
}

/// A wire target, optionally prefixed with its terminal: `2.[R1]`.
fn target(input: &mut Input<'_>) -> IResult<(Option<String>, NodeDescriptor)> {
    alt((
        (terminated(terminal_name, '.'), node).map(|(terminal, node)| (Some(terminal), node)),
        node.map(|node| (None, node)),
    ))
    .parse_next(input)
}

/// A terminal suffix naming the source side of the next wire: `[R1].2`.
fn source_terminal(input: &mut Input<'_>) -> IResult<String> {
    preceded('.', terminal_name).parse_next(input)
}

/// A node followed by any number of `- target` wires.
fn chain(input: &mut Input<'_>) -> IResult<Statement> {
    let source = node.parse_next(input)?;
    let mut pending = opt(source_terminal).parse_next(input)?;
    let mut steps = Vec::new();

    loop {
        let wire_start = input.current_token_start();
        if opt((spaces, '-')).parse_next(input)?.is_none() {
            break;
        }
        let (target_terminal, target) = cut_err(preceded(spaces, target))
            .context(
                Expectation::new(ErrorCode::E101, "expected a node after `-`", wire_start)
                    .with_help("a wire connects two nodes, e.g. `[R1] - gnd`"),
            )
            .parse_next(input)?;
        steps.push(ConnectionStep {
            source_terminal: pending.take(),
            target_terminal,
            target,
        });
        pending = opt(source_terminal).parse_next(input)?;
    }

    if pending.is_some() {
        let start = input.current_token_start();
        return fail(
            input,
            Expectation::new(ErrorCode::E101, "terminal is not followed by a wire", start)
                .with_help("add `- <node>` after the terminal name"),
        );
    }

    Ok(match (source, steps.is_empty()) {
        (NodeDescriptor::Component(component), true) => Statement::Definition(component),
        (source, _) => Statement::Connection(ConnectionStatement { source, steps }),
    })
}

/// `key=value` inside a `set` statement.
fn setting(input: &mut Input<'_>) -> IResult<(String, String)> {
    let key = take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
    })
    .parse_next(input)?;
    let start = input.current_token_start();
    let value = preceded(
        cut_err('=').context(
            Expectation::new(ErrorCode::E103, "invalid setting", start)
                .with_help("settings are written as `key=value`"),
        ),
        cut_err(take_till(1.., [' ', '\t', '\r', '\n', ';', '#'])).context(
            Expectation::new(ErrorCode::E103, "missing setting value", start)
                .with_help("settings are written as `key=value`"),
        ),
    )
    .parse_next(input)?;
    Ok((key.to_string(), value.to_string()))
}

fn settings(input: &mut Input<'_>) -> IResult<Statement> {
    let start = input.current_token_start();
    preceded(
        ("set", spaces1),
        cut_err(separated(1.., setting, spaces1)).context(
            Expectation::new(ErrorCode::E103, "expected `key=value` after `set`", start)
                .with_help("e.g. `set layout.direction=DOWN`"),
        ),
    )
    .map(|entries| Statement::Settings(Settings { entries }))
    .parse_next(input)
}

fn statement(input: &mut Input<'_>) -> IResult<Statement> {
    alt((settings, chain)).parse_next(input)
}

/// Trailing whitespace, an optional comment and a statement separator.
fn line_end(input: &mut Input<'_>) -> IResult<()> {
    (
        spaces,
        opt(comment),
        alt((one_of(['\n', ';']).void(), eof.void())),
    )
        .void()
        .parse_next(input)
}

fn statements(input: &mut Input<'_>) -> IResult<Vec<Statement>> {
    let mut statements = Vec::new();
    loop {
        blank(input)?;
        if input.eof_offset() == 0 {
            return Ok(statements);
        }

        let start = input.current_token_start();
        let statement = cut_err(statement)
            .context(
                Expectation::new(ErrorCode::E100, "expected a node or `set` statement", start)
                    .with_help("statements start with a component like `[R1]` or a port like `gnd`"),
            )
            .parse_next(input)?;

        let end = input.current_token_start();
        cut_err(line_end)
            .context(
                Expectation::new(ErrorCode::E100, "unexpected content after statement", end)
                    .with_help("connect nodes with `-` or start a new line"),
            )
            .parse_next(input)?;

        statements.push(statement);
    }
}

/// Convert a winnow error at `error_pos` into a [`Diagnostic`].
///
/// Uses the innermost [`Expectation`] context. Falls back to E002
/// (unexpected character) if no context is found.
fn convert_err_mode(
    err: ErrMode<ContextError<Expectation>>,
    error_pos: usize,
    source_len: usize,
) -> Diagnostic {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    if let Some(Expectation {
        code,
        message,
        help,
        start,
    }) = context_error.context().next()
    {
        let start = (*start).min(error_pos);
        let end = error_pos.max(start + 1).min(source_len);
        let span = Span::new(start.min(end)..end);

        let mut diag = Diagnostic::error(*message)
            .with_code(*code)
            .with_label(span, code.description());
        if let Some(help) = help {
            diag = diag.with_help(*help);
        }
        return diag;
    }

    let end = error_pos.saturating_add(1).min(source_len);
    Diagnostic::error("unexpected character")
        .with_code(ErrorCode::E002)
        .with_label(
            Span::new(error_pos.min(end)..end),
            ErrorCode::E002.description(),
        )
}

/// Parse source text into statements.
pub fn parse_statements(source: &str) -> Result<Vec<Statement>, Diagnostic> {
    let mut input = LocatingSlice::new(source);
    statements(&mut input).map_err(|err| {
        let error_pos = input.current_token_start();
        convert_err_mode(err, error_pos, source.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with<O>(
        parser: impl FnMut(&mut Input<'_>) -> IResult<O>,
        source: &str,
    ) -> Option<O> {
        let mut parser = parser;
        let mut input = LocatingSlice::new(source);
        parser(&mut input).ok()
    }

    #[test]
    fn test_designator_spec() {
        let spec = parse_with(designator_spec, "R12").unwrap();
        assert_eq!(spec.letter, "R");
        assert_eq!(spec.index, Some(12));

        let spec = parse_with(designator_spec, "IC").unwrap();
        assert_eq!(spec.letter, "IC");
        assert_eq!(spec.index, None);
    }

    #[test]
    fn test_designator_spec_rejects_lowercase_tail() {
        assert!(parse_with(designator_spec, "Rx").is_none());
        assert!(parse_with(designator_spec, "22k").is_none());
    }

    #[test]
    fn test_designator_zero_index_is_cut() {
        let mut input = LocatingSlice::new("R0]");
        let err = designator_spec(&mut input).unwrap_err();
        assert!(matches!(err, ErrMode::Cut(_)));
    }

    #[test]
    fn test_port_keywords() {
        let descriptor = parse_with(port, "in:audio").unwrap();
        assert_eq!(descriptor.kind, PortKind::In);
        assert_eq!(descriptor.specifier.as_deref(), Some("audio"));

        let descriptor = parse_with(port, "gnd @CHASSIS").unwrap();
        assert_eq!(descriptor.kind, PortKind::Gnd);
        assert_eq!(descriptor.symbol.as_deref(), Some("CHASSIS"));

        assert!(parse_with(port, "ground").is_none());
        assert!(parse_with(port, "input").is_none());
    }

    #[test]
    fn test_target_with_terminal() {
        let (terminal, node) = parse_with(target, "2.<D1>").unwrap();
        assert_eq!(terminal.as_deref(), Some("2"));
        assert!(matches!(node, NodeDescriptor::Component(_)));

        let (terminal, node) = parse_with(target, "gnd").unwrap();
        assert_eq!(terminal, None);
        assert!(matches!(node, NodeDescriptor::Port(_)));
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(
            parse_with(string_literal, "\"input stage\"").as_deref(),
            Some("input stage")
        );
        assert!(parse_with(string_literal, "\"open").is_none());
    }

    #[test]
    fn test_blank_skips_comments_and_separators() {
        let mut input = LocatingSlice::new("  # note\n;;\n[R1]");
        blank(&mut input).unwrap();
        assert_eq!(*input, "[R1]");
    }
}
