use crate::validation::{is_non_negative_integer, is_valid_name};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{stdin, stdout, Write};

pub fn clear_screen() {
    let mut stdout = stdout();
    let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0));
}

pub fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = stdout().flush();
    let mut input = String::new();
    let _ = stdin().read_line(&mut input);
    input.trim().to_string()
}

/// Re-prompts until the input is a valid name.
pub fn prompt_name(prompt: &str) -> String {
    loop {
        let input = read_line(prompt);
        if is_valid_name(&input) {
            return input;
        }
        println!("invalid name: letters, spaces and hyphens only, at least one letter");
    }
}

/// Re-prompts until the input is a non-negative whole number.
pub fn prompt_count(prompt: &str) -> u32 {
    loop {
        let input = read_line(prompt);
        if is_non_negative_integer(&input) {
            return input.parse().unwrap_or(0);
        }
        println!("invalid input: please enter a non-negative whole number");
    }
}

/// Empty input keeps the current value; anything else must be a valid
/// name.
pub fn prompt_optional_name(prompt: &str) -> Option<String> {
    loop {
        let input = read_line(prompt);
        if input.is_empty() {
            return None;
        }
        if is_valid_name(&input) {
            return Some(input);
        }
        println!("invalid name: letters, spaces and hyphens only, at least one letter");
    }
}

/// Empty input keeps the current value; anything else must be a
/// non-negative whole number.
pub fn prompt_optional_count(prompt: &str) -> Option<u32> {
    loop {
        let input = read_line(prompt);
        if input.is_empty() {
            return None;
        }
        if is_non_negative_integer(&input) {
            return input.parse().ok();
        }
        println!("invalid input: please enter a non-negative whole number");
    }
}
