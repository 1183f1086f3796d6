use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SEPARATOR: char = '/';
pub const DEFAULT_VARIABLE_PATTERN: &str = r"^\{([a-zA-Z_0-9]+)\}$";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterOptions {
    pub separator: char,
    /// Recognizes a variable directory; capture group 1 is the variable name.
    pub variable_pattern: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            variable_pattern: DEFAULT_VARIABLE_PATTERN.to_string(),
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        self.variable_regex().map(|_| ())
    }

    /// Compiles the variable recognizer, checking it can capture a name.
    pub fn variable_regex(&self) -> Result<Regex, RouterOptionsError> {
        if self.variable_pattern.trim().is_empty() {
            return Err(RouterOptionsError::EmptyVariablePattern);
        }
        let regex = Regex::new(&self.variable_pattern).map_err(|err| {
            RouterOptionsError::InvalidVariablePattern {
                pattern: self.variable_pattern.clone(),
                reason: err.to_string(),
            }
        })?;
        if regex.captures_len() < 2 {
            return Err(RouterOptionsError::MissingVariableCapture {
                pattern: self.variable_pattern.clone(),
            });
        }
        if regex.is_match(&self.separator.to_string()) {
            return Err(RouterOptionsError::SeparatorIsVariable {
                separator: self.separator,
                pattern: self.variable_pattern.clone(),
            });
        }
        Ok(regex)
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn separator(mut self, value: char) -> Self {
        self.options.separator = value;
        self
    }

    pub fn variable_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.options.variable_pattern = pattern.into();
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("variable pattern must not be empty")]
    EmptyVariablePattern,
    #[error("variable pattern '{pattern}' does not compile: {reason}")]
    InvalidVariablePattern { pattern: String, reason: String },
    #[error("variable pattern '{pattern}' has no capture group for the variable name")]
    MissingVariableCapture { pattern: String },
    #[error("variable pattern '{pattern}' matches the separator '{separator}'")]
    SeparatorIsVariable { separator: char, pattern: String },
}
