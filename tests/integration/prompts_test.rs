// Tests for the console prompts, driven by scripted input

use std::collections::VecDeque;
use std::io;
use toolbelt::platform::ConsoleInput;
use toolbelt::ui::prompts::{input_multiline, picker, y_to_continue, DEFAULT_CONTINUE_PROMPT};
use toolbelt::ToolbeltError;

#[derive(Default)]
struct ScriptedInput {
    keys: VecDeque<char>,
    lines: VecDeque<String>,
    rest: String,
    reads: usize,
}

impl ScriptedInput {
    fn keys(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
            ..Default::default()
        }
    }

    fn lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    fn until_eof(text: &str) -> Self {
        Self {
            rest: text.to_string(),
            ..Default::default()
        }
    }
}

impl ConsoleInput for ScriptedInput {
    fn read_key(&mut self) -> io::Result<char> {
        self.reads += 1;
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.reads += 1;
        Ok(self.lines.pop_front().unwrap_or_default())
    }

    fn read_to_end(&mut self) -> io::Result<String> {
        self.reads += 1;
        Ok(std::mem::take(&mut self.rest))
    }
}

#[test]
fn test_y_to_continue_with_enter() {
    let mut input = ScriptedInput::lines(&["y"]);
    let mut out = Vec::new();

    assert!(y_to_continue(&mut input, &mut out, DEFAULT_CONTINUE_PROMPT, true).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), "Enter y to continue: ");
}

#[test]
fn test_y_to_continue_single_key() {
    let mut input = ScriptedInput::keys("n");
    let mut out = Vec::new();
    assert!(!y_to_continue(&mut input, &mut out, "Proceed?", false).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), "Proceed? \n");

    let mut input = ScriptedInput::keys("Y");
    assert!(y_to_continue(&mut input, &mut Vec::new(), "Proceed?", false).unwrap());
}

#[test]
fn test_y_to_continue_rejects_yes_word_without_enter_mode() {
    let mut input = ScriptedInput::lines(&["yes"]);
    assert!(!y_to_continue(&mut input, &mut Vec::new(), "Go?", true).unwrap());
}

#[test]
fn test_y_to_continue_line_must_be_exactly_y() {
    let answers = [("y", true), ("Y", true), (" y ", false), ("y ", false), ("", false)];
    for (line, expected) in answers {
        let mut input = ScriptedInput::lines(&[line]);
        let confirmed = y_to_continue(&mut input, &mut Vec::new(), "Go?", true).unwrap();
        assert_eq!(confirmed, expected, "answer {:?}", line);
    }
}

#[test]
fn test_y_to_continue_propagates_read_error() {
    let mut input = ScriptedInput::default();
    let err = y_to_continue(&mut input, &mut Vec::new(), "Go?", false).unwrap_err();
    assert!(matches!(err, ToolbeltError::Io(_)));
}

#[test]
fn test_input_multiline_trims() {
    let mut input = ScriptedInput::until_eof("text\n\nmore text ");
    let text = input_multiline(&mut input, &mut Vec::new(), None, "").unwrap();
    assert_eq!(text, "text\n\nmore text");
}

#[test]
fn test_input_multiline_default_on_empty() {
    let mut input = ScriptedInput::until_eof("\n");
    let mut out = Vec::new();
    let text = input_multiline(&mut input, &mut out, Some("Nothing typed"), "default").unwrap();
    assert_eq!(text, "default");
    assert_eq!(out, b"\n");
}

#[test]
fn test_picker_returns_selected_item() {
    let items = [1, 2, 3, 4];
    let mut input = ScriptedInput::lines(&["2"]);
    let mut out = Vec::new();

    assert_eq!(*picker(&mut input, &mut out, &items).unwrap(), 2);

    let menu = String::from_utf8_lossy(&out);
    for n in 1..=4 {
        assert!(menu.contains(&format!("{}.", n)), "menu missing {}: {}", n, menu);
    }
    assert!(menu.contains("Select an option: "));
}

#[test]
fn test_picker_empty_list() {
    let items: [u32; 0] = [];
    let mut input = ScriptedInput::lines(&["2"]);
    let err = picker(&mut input, &mut Vec::new(), &items).unwrap_err();
    assert!(matches!(err, ToolbeltError::EmptyChoice));
    assert_eq!(input.reads, 0);
}

#[test]
fn test_picker_single_item_does_not_prompt() {
    let items = ["only"];
    let mut input = ScriptedInput::default();
    let mut out = Vec::new();

    assert_eq!(*picker(&mut input, &mut out, &items).unwrap(), "only");
    assert_eq!(input.reads, 0);
    assert!(out.is_empty());
}

#[test]
fn test_picker_out_of_range() {
    let items = [1, 2];
    let mut input = ScriptedInput::lines(&["4"]);
    let err = picker(&mut input, &mut Vec::new(), &items).unwrap_err();
    assert!(matches!(
        err,
        ToolbeltError::InvalidSelection { ref input, max: 2 } if input == "4"
    ));
}

#[test]
fn test_picker_non_numeric() {
    let items = [1, 2];
    let mut input = ScriptedInput::lines(&["a"]);
    let err = picker(&mut input, &mut Vec::new(), &items).unwrap_err();
    assert!(matches!(err, ToolbeltError::InvalidSelection { .. }));
}
