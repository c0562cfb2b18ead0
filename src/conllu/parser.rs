use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const TOKEN_LINE_COLUMNS: usize = 10;
pub const FORM_COLUMN: usize = 1;
pub const MISC_COLUMN: usize = 9;

pub const CORRECT_FORM_KEY: &str = "CorrectForm";

pub const TEXT_COMMENT_PREFIX: &str = "# text = ";

// "# text = ..."
static REGEX_TEXT_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^# text = (.*)$").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "content")]
pub enum ConlluLine {
    Blank,
    TextComment { text: String },
    Comment(String),
    Token(TokenLine),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TokenLine {
    pub columns: Vec<String>,
}

// Line classification, total over arbitrary input
pub fn parse_line(line: &str) -> ConlluLine {
    if line.trim().is_empty() {
        return ConlluLine::Blank;
    }

    if let Some(captures) = REGEX_TEXT_COMMENT.captures(line) {
        return ConlluLine::TextComment {
            text: captures[1].to_string(),
        };
    }

    if line.starts_with('#') {
        return ConlluLine::Comment(line.to_string());
    }

    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() < TOKEN_LINE_COLUMNS {
        return ConlluLine::Other(line.to_string());
    }

    ConlluLine::Token(TokenLine {
        columns: columns.into_iter().map(|c| c.to_string()).collect(),
    })
}

impl TokenLine {
    pub fn form(&self) -> &str {
        &self.columns[FORM_COLUMN]
    }

    pub fn annotations(&self) -> &str {
        &self.columns[MISC_COLUMN]
    }

    // Only well-formed "key=value" segments are considered; when a key
    // repeats, the last occurrence wins.
    pub fn annotation_value(&self, key: &str) -> Option<&str> {
        let mut value = None;
        for segment in self.annotations().split(';') {
            if let Some((k, v)) = segment.split_once('=') {
                if k == key {
                    value = Some(v);
                }
            }
        }
        value
    }

    pub fn correct_form(&self) -> Option<&str> {
        match self.annotation_value(CORRECT_FORM_KEY) {
            Some("") => None,
            value => value,
        }
    }

    pub fn final_form(&self) -> &str {
        match self.correct_form() {
            Some(form) => form,
            None => self.form(),
        }
    }

    pub fn line_with_form(&self, form: &str) -> String {
        let mut columns: Vec<&str> = self.columns.iter().map(|c| c.as_str()).collect();
        columns[FORM_COLUMN] = form;
        columns.join("\t")
    }
}
