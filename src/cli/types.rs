//! Types command — lists the conventional commit types.

use anyhow::Result;
use clap::Parser;

use crate::data::CommitType;

/// Types command options.
#[derive(Parser)]
pub struct TypesCommand {
    /// Text printed between types [default: newline].
    #[arg(
        short,
        long,
        default_value = "\n",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub separator: String,
}

impl Default for TypesCommand {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
        }
    }
}

impl TypesCommand {
    /// Executes the types command.
    pub fn execute(self) -> Result<i32> {
        println!("{}", self.render());
        Ok(0)
    }

    /// The type list joined by the separator.
    pub fn render(&self) -> String {
        CommitType::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}
