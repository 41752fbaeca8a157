use crate::core::calculator::{Calculator, Key};
use crate::errors::{AppError, AppResult};

/// High-level logic for the `calc` command.
pub struct CalcLogic;

impl CalcLogic {
    /// Parse every token up front so a typo fails before any key is pressed.
    pub fn parse_keys(tokens: &[String]) -> AppResult<Vec<Key>> {
        let mut keys = Vec::new();
        for t in tokens {
            let parsed = Key::parse_many(t).ok_or_else(|| AppError::InvalidKey(t.clone()))?;
            keys.extend(parsed);
        }
        Ok(keys)
    }

    /// Press `tokens` on a fresh calculator and return the final display.
    /// With `trace`, the display is printed after every key.
    pub fn run(tokens: &[String], trace: bool) -> AppResult<String> {
        let keys = Self::parse_keys(tokens)?;
        let mut calc = Calculator::new();

        for key in &keys {
            key.press(&mut calc);
            if trace {
                println!("{:<12} {}", format!("{:?}", key), calc.display());
            }
        }

        Ok(calc.display().to_string())
    }
}
