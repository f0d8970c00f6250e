//! Locale date grammars such as `DD.MM.YYYY` or `YYYY-MM-DD`

use crate::error::ConfigError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Day { width: usize },
    Month { width: usize },
    Year { width: usize },
    Literal(char),
}

impl Token {
    /// Most digits the token may consume
    fn max_digits(&self) -> usize {
        match self {
            Token::Day { .. } | Token::Month { .. } => 2,
            Token::Year { width } => *width,
            Token::Literal(_) => 0,
        }
    }
}

/// Compiled date pattern.
///
/// Numeric tokens accept between one digit and their maximum width, so a
/// plain grammar match lets `4.7.2019` through for `DD.MM.YYYY`. Callers
/// reject such shorthand with [`DatePattern::accepts`], which also requires
/// the input to be at least as long as the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    /// Compile a pattern built from `D`/`DD`, `M`/`MM`, `YY`/`YYYY` and
    /// literal separators. Each of day, month and year must appear once.
    pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::new();
        let (mut days, mut months, mut years) = (0, 0, 0);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let run = chars[i..].iter().take_while(|&&next| next == c).count();
            match c {
                'D' | 'M' if run <= 2 => {
                    if c == 'D' {
                        days += 1;
                        tokens.push(Token::Day { width: run });
                    } else {
                        months += 1;
                        tokens.push(Token::Month { width: run });
                    }
                    i += run;
                }
                'Y' if run == 2 || run == 4 => {
                    years += 1;
                    tokens.push(Token::Year { width: run });
                    i += run;
                }
                'D' | 'M' | 'Y' => {
                    return Err(ConfigError::invalid_pattern(
                        pattern,
                        format!("unsupported token width {} for '{}'", run, c),
                    ));
                }
                c if c.is_alphabetic() => {
                    return Err(ConfigError::invalid_pattern(
                        pattern,
                        format!("unknown token '{}'", c),
                    ));
                }
                c => {
                    tokens.push(Token::Literal(c));
                    i += 1;
                }
            }
        }

        if (days, months, years) != (1, 1, 1) {
            return Err(ConfigError::invalid_pattern(
                pattern,
                "day, month and year must each appear exactly once",
            ));
        }

        Ok(Self {
            source: pattern.to_string(),
            tokens,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Pattern length in characters; the minimum accepted input length
    pub fn len(&self) -> usize {
        self.source.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Grammar match: separators in place, digit runs within their widths,
    /// nothing trailing, and a real calendar day
    pub fn matches(&self, input: &str) -> Option<NaiveDate> {
        let chars: Vec<char> = input.chars().collect();
        let mut pos = 0;
        let (mut day, mut month, mut year) = (0u32, 0u32, 0i32);

        for token in &self.tokens {
            match token {
                Token::Literal(expected) => {
                    if chars.get(pos) != Some(expected) {
                        return None;
                    }
                    pos += 1;
                }
                numeric => {
                    let digits = chars[pos..]
                        .iter()
                        .take(numeric.max_digits())
                        .take_while(|c| c.is_ascii_digit())
                        .count();
                    if digits == 0 {
                        return None;
                    }
                    let number: u32 = chars[pos..pos + digits]
                        .iter()
                        .collect::<String>()
                        .parse()
                        .ok()?;
                    pos += digits;

                    match numeric {
                        Token::Day { .. } => day = number,
                        Token::Month { .. } => month = number,
                        Token::Year { width: 2 } => {
                            // two-digit years pivot at 70
                            year = number as i32 + if number < 70 { 2000 } else { 1900 };
                        }
                        _ => year = number as i32,
                    }
                }
            }
        }

        if pos != chars.len() || year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Grammar match that also rejects truncated input (two-digit years,
    /// unpadded days or months)
    pub fn accepts(&self, input: &str) -> Option<NaiveDate> {
        if input.chars().count() < self.len() {
            return None;
        }
        self.matches(input)
    }

    /// Render a date in this pattern
    pub fn format(&self, date: NaiveDate) -> String {
        self.tokens
            .iter()
            .map(|token| match token {
                Token::Day { width: 2 } => format!("{:02}", date.day()),
                Token::Day { .. } => date.day().to_string(),
                Token::Month { width: 2 } => format!("{:02}", date.month()),
                Token::Month { .. } => date.month().to_string(),
                Token::Year { width: 2 } => format!("{:02}", date.year().rem_euclid(100)),
                Token::Year { .. } => format!("{:04}", date.year()),
                Token::Literal(c) => c.to_string(),
            })
            .collect()
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
