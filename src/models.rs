use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// Client request format for POST /generate
#[derive(Deserialize, Clone, Debug)]
pub struct GenerateRequest {
    pub topic: Topic,
    // kept raw so an unknown value is a 400 from the handler, not a schema error
    pub card_type: String,
    #[serde(default)]
    pub count: Count,
    #[serde(default)]
    pub language: Language,
}

// Client response format
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenerateResponse {
    pub result: Value,
}

/// Subject the cards are generated about. Must contain something other than
/// whitespace; the text itself is kept exactly as sent.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct Topic(String);

impl Topic {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Topic {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err("topic must not be empty".to_string());
        }
        Ok(Topic(value))
    }
}

/// Number of items to ask for, 1 through 10.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "i64")]
pub struct Count(u8);

impl Count {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Count(Self::DEFAULT)
    }
}

impl TryFrom<i64> for Count {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(format!(
                "count must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ));
        }
        Ok(Count(value as u8))
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Tr => f.write_str("tr"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardType {
    Flashcard,
    Quiz,
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flashcard" => Ok(CardType::Flashcard),
            "quiz" => Ok(CardType::Quiz),
            _ => Err(Error::InvalidCardType),
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Flashcard => f.write_str("flashcard"),
            CardType::Quiz => f.write_str("quiz"),
        }
    }
}

// Item shapes the prompts ask the model for
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    pub const OPTION_COUNT: usize = 4;
}

/// How closely a parsed model reply follows the requested item shape.
/// Only used for reporting; the reply is returned to the caller untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeReport {
    pub is_array: bool,
    pub items: usize,
    pub well_formed: usize,
}

impl ShapeReport {
    pub fn mismatched(&self) -> usize {
        if self.is_array { self.items - self.well_formed } else { 1 }
    }
}

pub fn inspect_items(card_type: CardType, result: &Value) -> ShapeReport {
    let Some(items) = result.as_array() else {
        return ShapeReport::default();
    };

    let well_formed = items
        .iter()
        .filter(|item| match card_type {
            CardType::Flashcard => Flashcard::deserialize(*item).is_ok(),
            CardType::Quiz => QuizQuestion::deserialize(*item)
                .map(|q| q.options.len() == QuizQuestion::OPTION_COUNT)
                .unwrap_or(false),
        })
        .count();

    ShapeReport {
        is_array: true,
        items: items.len(),
        well_formed,
    }
}
