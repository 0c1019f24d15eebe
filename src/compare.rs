//! Multi-key record ordering.
//!
//! A [`Comparator`] is built from one to three [`SortField`]s applied in
//! priority order: the first field that tells two records apart decides, and
//! tiers that were not configured never discriminate.
//!
//! Field selections usually come from outside the crate, either as string
//! tags, as a serialized [`ComparatorConfig`], or as the numeric menu syntax
//! understood by [`ComparatorConfig::from_menu_selection`].

use crate::core::Record;
use crate::error::{ConfigError, MAX_SORT_FIELDS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A record field a comparator tier can order by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SortField {
    Identifier,
    Model,
    Mileage,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Identifier => "identifier",
            SortField::Model => "model",
            SortField::Mileage => "mileage",
        }
    }

    /// Maps the menu digits `1`, `2`, `3` onto identifier, model and mileage.
    fn from_menu_digit(token: &str) -> Result<Self, ConfigError> {
        match token {
            "1" => Ok(SortField::Identifier),
            "2" => Ok(SortField::Model),
            "3" => Ok(SortField::Mileage),
            other => Err(ConfigError::UnknownField(other.to_string())),
        }
    }
}

impl FromStr for SortField {
    type Err = ConfigError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_lowercase().as_str() {
            "identifier" | "id" | "number" => Ok(SortField::Identifier),
            "model" => Ok(SortField::Model),
            "mileage" => Ok(SortField::Mileage),
            _ => Err(ConfigError::UnknownField(tag.to_string())),
        }
    }
}

impl TryFrom<String> for SortField {
    type Error = ConfigError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A total order over records driven by up to three field tiers.
///
/// # Examples
///
/// ```
/// use bussort::prelude::*;
/// use std::cmp::Ordering;
///
/// let comparator = Comparator::from_tags(["model", "mileage"]).unwrap();
///
/// let a = Record::new("A1", "PAZ", 100);
/// let b = Record::new("B2", "PAZ", 90);
/// assert_eq!(comparator.compare(&a, &b), Ordering::Greater);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparator {
    tiers: Vec<SortField>,
    case_sensitive: bool,
}

impl Comparator {
    /// Builds a case-sensitive comparator from `fields`, highest priority first.
    ///
    /// Fails when `fields` is empty or holds more than three entries. Repeated
    /// fields are accepted.
    pub fn new(fields: &[SortField]) -> Result<Self, ConfigError> {
        if fields.is_empty() {
            return Err(ConfigError::EmptySelection);
        }
        if fields.len() > MAX_SORT_FIELDS {
            return Err(ConfigError::TooManyFields { got: fields.len() });
        }

        Ok(Self {
            tiers: fields.to_vec(),
            case_sensitive: true,
        })
    }

    /// Builds a comparator from string tags such as `"identifier"` or `"mileage"`.
    ///
    /// Any unrecognized tag fails with [`ConfigError::UnknownField`].
    pub fn from_tags<I, S>(tags: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = tags
            .into_iter()
            .map(|tag| tag.as_ref().parse())
            .collect::<Result<Vec<SortField>, _>>()?;
        Self::new(&fields)
    }

    /// Compares string fields without regard to letter case.
    pub fn case_insensitive(self) -> Self {
        self.with_case_sensitivity(false)
    }

    pub fn with_case_sensitivity(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn fields(&self) -> &[SortField] {
        &self.tiers
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Orders `a` against `b`, tier by tier.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.tiers
            .iter()
            .map(|&field| self.compare_field(field, a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn compare_field(&self, field: SortField, a: &Record, b: &Record) -> Ordering {
        match field {
            SortField::Identifier => self.compare_str(a.identifier(), b.identifier()),
            SortField::Model => self.compare_str(a.model(), b.model()),
            SortField::Mileage => a.mileage().cmp(&b.mileage()),
        }
    }

    #[inline]
    fn compare_str(&self, a: &str, b: &str) -> Ordering {
        if self.case_sensitive {
            a.cmp(b)
        } else {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        }
    }
}

fn default_case_sensitive() -> bool {
    true
}

/// Serializable comparator setup.
///
/// ```
/// use bussort::compare::{Comparator, ComparatorConfig, SortField};
///
/// let config = ComparatorConfig::from_menu_selection("3 1").unwrap();
/// assert_eq!(config.fields, vec![SortField::Mileage, SortField::Identifier]);
///
/// let comparator = Comparator::try_from(config).unwrap();
/// assert!(comparator.is_case_sensitive());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    pub fields: Vec<SortField>,
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

impl ComparatorConfig {
    pub fn new(fields: Vec<SortField>) -> Self {
        Self {
            fields,
            case_sensitive: true,
        }
    }

    /// Parses a whitespace-separated list of menu digits.
    ///
    /// `1` selects the identifier, `2` the model and `3` the mileage. Blank
    /// input, more than three digits, or any other token is rejected.
    pub fn from_menu_selection(selection: &str) -> Result<Self, ConfigError> {
        let tokens: Vec<&str> = selection.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(ConfigError::EmptySelection);
        }
        if tokens.len() > MAX_SORT_FIELDS {
            return Err(ConfigError::TooManyFields { got: tokens.len() });
        }

        let fields = tokens
            .into_iter()
            .map(SortField::from_menu_digit)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(fields))
    }
}

impl TryFrom<ComparatorConfig> for Comparator {
    type Error = ConfigError;

    fn try_from(config: ComparatorConfig) -> Result<Self, Self::Error> {
        Ok(Comparator::new(&config.fields)?.with_case_sensitivity(config.case_sensitive))
    }
}

impl From<&Comparator> for ComparatorConfig {
    fn from(comparator: &Comparator) -> Self {
        Self {
            fields: comparator.tiers.clone(),
            case_sensitive: comparator.case_sensitive,
        }
    }
}
