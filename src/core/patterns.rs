use crate::core::comments::strip_comments;
use crate::domain::model::{Action, Field};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use regex::Regex;

/// Compiled matchers for one marker set.
///
/// The declaration shape is `(struct|class) Name : [public] <action>` and a
/// field line is `Type name; <marker>();`, where `Type` may carry `::`
/// scoping and a trailing `*`.
#[derive(Debug, Clone)]
pub struct ActionPatterns {
    declaration: Regex,
    input: Regex,
    output: Regex,
}

impl ActionPatterns {
    pub fn new(action_marker: &str, input_marker: &str, output_marker: &str) -> Result<Self> {
        let declaration = Regex::new(&format!(
            r"(?:struct|class)\s+(\w+)\s*:\s*(?:public\s+)?{}",
            regex::escape(action_marker)
        ))?;

        Ok(Self {
            declaration,
            input: Self::field_pattern(input_marker)?,
            output: Self::field_pattern(output_marker)?,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.action_marker(),
            config.input_marker(),
            config.output_marker(),
        )
    }

    fn field_pattern(marker: &str) -> Result<Regex> {
        Ok(Regex::new(&format!(
            r"(\w+(?:::\w+)*(?:\s*\*)?)\s+(\w+);\s*{}\(\);",
            regex::escape(marker)
        ))?)
    }

    /// Name of the first action declaration in `text`, if any.
    pub fn find_action_name<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.declaration
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn inputs(&self, text: &str) -> Vec<Field> {
        Self::collect_fields(&self.input, text)
    }

    pub fn outputs(&self, text: &str) -> Vec<Field> {
        Self::collect_fields(&self.output, text)
    }

    fn collect_fields(pattern: &Regex, text: &str) -> Vec<Field> {
        pattern
            .captures_iter(text)
            .map(|caps| Field::new(caps[2].trim(), caps[1].trim()))
            .collect()
    }

    /// Runs the full per-file pipeline on raw header text. Returns `None`
    /// when the text holds no action declaration.
    pub fn parse_source(&self, content: &str) -> Option<Action> {
        let cleaned = strip_comments(content);
        let name = self.find_action_name(&cleaned)?;

        Some(Action {
            name: name.to_string(),
            inputs: self.inputs(&cleaned),
            outputs: self.outputs(&cleaned),
        })
    }
}

impl Default for ActionPatterns {
    fn default() -> Self {
        Self::new("IAction", "IN", "OUT").expect("default markers are valid identifiers")
    }
}
