//! Key tokens accepted by the `calc` command.

use super::engine::{Calculator, Operator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Percent,
    ToggleSign,
    Clear,
}

impl Key {
    /// Parse a single token. Returns `None` for anything not on the keypad.
    pub fn parse(token: &str) -> Option<Self> {
        let t = token.trim();

        if t.len() == 1
            && let Some(d) = t.chars().next().and_then(|c| c.to_digit(10))
        {
            return Some(Key::Digit(d as u8));
        }

        match t.to_lowercase().as_str() {
            "." | "," => Some(Key::Decimal),
            "+" => Some(Key::Operator(Operator::Add)),
            "-" | "−" => Some(Key::Operator(Operator::Subtract)),
            "*" | "x" | "×" => Some(Key::Operator(Operator::Multiply)),
            "/" | "÷" => Some(Key::Operator(Operator::Divide)),
            "mod" => Some(Key::Operator(Operator::Modulo)),
            "=" => Some(Key::Equals),
            "%" => Some(Key::Percent),
            "+/-" | "±" | "neg" => Some(Key::ToggleSign),
            "c" | "ac" | "clear" => Some(Key::Clear),
            _ => None,
        }
    }

    /// Split a token into keys: `"12.5"` becomes `1`, `2`, `.`, `5`.
    /// Operators and named keys must be given as whole tokens.
    pub fn parse_many(token: &str) -> Option<Vec<Self>> {
        if let Some(k) = Key::parse(token) {
            return Some(vec![k]);
        }

        let t = token.trim();
        if !t.is_empty() && t.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return t
                .chars()
                .map(|c| Key::parse(&c.to_string()))
                .collect::<Option<Vec<_>>>();
        }

        None
    }

    /// Dispatch the key to the matching calculator entry operation.
    pub fn press(&self, calc: &mut Calculator) {
        match *self {
            Key::Digit(d) => calc.input_digit(d),
            Key::Decimal => calc.input_decimal(),
            Key::Operator(op) => calc.choose_operator(op),
            Key::Equals => calc.equals(),
            Key::Percent => calc.percent(),
            Key::ToggleSign => calc.toggle_sign(),
            Key::Clear => calc.clear(),
        }
    }
}
