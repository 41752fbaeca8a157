//! Four-function till calculator.
//!
//! A deterministic state machine: every entry operation mutates the state in
//! place and none of them can fail. Evaluation is strictly left to right,
//! there is no operator precedence.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Modulo => "mod",
        }
    }

    /// Apply the operator. A zero right-hand side for ÷ and mod yields 0.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
            Operator::Modulo => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs % rhs
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculator {
    display: String,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    waiting_for_second_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            operator: None,
            waiting_for_second_operand: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    /// Digits above 9 are ignored.
    pub fn input_digit(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        let digit = char::from(b'0' + d);

        if self.waiting_for_second_operand {
            self.display = digit.to_string();
            self.waiting_for_second_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    pub fn input_decimal(&mut self) {
        if self.waiting_for_second_operand {
            self.display = "0.".to_string();
            self.waiting_for_second_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Record `op` as the pending operation. When an operation is already
    /// pending it is evaluated first, so `5 + 3 +` shows `8`.
    pub fn choose_operator(&mut self, op: Operator) {
        let input = self.display_value();

        match (self.first_operand, self.operator) {
            (None, _) => self.first_operand = Some(input),
            (Some(lhs), Some(pending)) => {
                let result = pending.apply(lhs, input);
                self.display = format_number(result);
                self.first_operand = Some(result);
            }
            (Some(_), None) => {}
        }

        self.waiting_for_second_operand = true;
        self.operator = Some(op);
    }

    pub fn equals(&mut self) {
        let (Some(lhs), Some(op)) = (self.first_operand, self.operator) else {
            return;
        };

        let result = op.apply(lhs, self.display_value());
        self.display = format_number(result);
        self.first_operand = Some(result);
        self.operator = None;
        self.waiting_for_second_operand = true;
    }

    pub fn percent(&mut self) {
        self.display = format_number(self.display_value() / 100.0);
    }

    pub fn toggle_sign(&mut self) {
        self.display = format_number(-self.display_value());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Numeric value of the display; an unparseable display reads as NaN.
    fn display_value(&self) -> f64 {
        self.display.parse::<f64>().unwrap_or(f64::NAN)
    }
}

/// Render a result the way the till shows it: shortest round-trip digits, no
/// rounding, `-0` shown as `0`. Magnitudes from 1e21 up and below 1e-6 use
/// exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            format!("{}e+{}", mantissa, power)
        }
        _ => exp,
    }
}
