use std::io::Write;

use cmdchain_core::{
    CmdResult, Keyword, Tokenizer,
    controller::{
        CommandHandler, DispatchOutcome, HandlerRegistry,
        handlers::{BasicCommandHandler, DatabaseCommandHandler},
    },
};
use pretty_assertions::assert_eq;

fn dispatch(registry: &mut HandlerRegistry, tokens: &Tokenizer) -> (DispatchOutcome, String) {
    let mut out: Vec<u8> = Vec::new();
    let outcome = registry.dispatch(tokens, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn sequences() -> Vec<Tokenizer> {
    let mut all = vec![Tokenizer::new()];

    for first in Keyword::ALL {
        all.push(Tokenizer::from(vec![first]));

        for second in Keyword::ALL {
            all.push(Tokenizer::from(vec![first, second]));
        }
    }

    all
}

#[test]
fn matches_iff_some_handler_accepts() {
    let basic = BasicCommandHandler::new();
    let database = DatabaseCommandHandler::new();

    for tokens in sequences() {
        let mut registry = HandlerRegistry::with_default_handlers();
        let expected = basic.can_handle(&tokens) || database.can_handle(&tokens);

        let (outcome, output) = dispatch(&mut registry, &tokens);

        assert_eq!(outcome.is_matched(), expected, "input {:?}", tokens.keywords());
        assert_eq!(output.is_empty(), !expected, "input {:?}", tokens.keywords());
    }
}

#[test]
fn empty_registry_never_matches() {
    let mut registry = HandlerRegistry::new();

    for tokens in sequences() {
        let (outcome, output) = dispatch(&mut registry, &tokens);
        assert_eq!(outcome, DispatchOutcome::EmptyRegistry);
        assert!(output.is_empty());
    }
}

#[test]
fn help_then_create_database_then_drop() {
    let mut registry = HandlerRegistry::new();
    registry.register::<BasicCommandHandler>();
    registry.register::<DatabaseCommandHandler>();

    let (outcome, output) = dispatch(&mut registry, &Tokenizer::parse("help").unwrap());
    assert_eq!(outcome.handler(), Some("basic"));
    assert_eq!(output, "Basic command!\n");

    let (outcome, output) = dispatch(&mut registry, &Tokenizer::parse("create database").unwrap());
    assert_eq!(outcome.handler(), Some("database"));
    assert_eq!(output, "Database command!\n");

    let (outcome, output) = dispatch(&mut registry, &Tokenizer::parse("drop").unwrap());
    assert_eq!(outcome, DispatchOutcome::NoMatch);
    assert_eq!(output, "");
}

#[test]
fn advancing_the_cursor_changes_which_handler_accepts() {
    let mut registry = HandlerRegistry::with_default_handlers();
    let mut tokens = Tokenizer::parse("drop table database").unwrap();

    let (outcome, _) = dispatch(&mut registry, &tokens);
    assert_eq!(outcome, DispatchOutcome::NoMatch);

    assert!(tokens.advance());
    let (outcome, _) = dispatch(&mut registry, &tokens);
    assert_eq!(outcome.handler(), Some("database"));
}

/// Handler that inspects the sequence it is given when performing.
#[derive(Default)]
struct EchoHandler;

impl CommandHandler for EchoHandler {
    fn can_handle(&self, tokens: &Tokenizer) -> bool {
        tokens.current().is_ok_and(|kw| kw == Keyword::Insert)
    }

    fn perform(&mut self, tokens: &Tokenizer, out: &mut dyn Write) -> CmdResult<bool> {
        let words: Vec<String> = tokens.keywords().iter().map(Keyword::to_string).collect();
        writeln!(out, "{}", words.join(" "))?;
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}

#[test]
fn custom_handler_receives_the_sequence() {
    let mut registry = HandlerRegistry::with_default_handlers();
    registry.register_handler(Box::new(EchoHandler));

    let (outcome, output) = dispatch(&mut registry, &Tokenizer::parse("insert row").unwrap());
    assert_eq!(
        outcome,
        DispatchOutcome::Matched {
            handler: "echo",
            succeeded: true
        }
    );
    assert_eq!(output, "insert row\n");
    assert_eq!(registry.handler_names(), vec!["basic", "database", "echo"]);
}
