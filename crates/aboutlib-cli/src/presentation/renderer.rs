use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

use super::views::{Text, TextView};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn render<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + TextView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(data)?);
            return Ok(());
        }

        print!("{}", Text::new(data, self.color));
        Ok(())
    }
}
