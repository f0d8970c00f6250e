//! Email address syntax check

use regex::Regex;
use std::sync::OnceLock;

/// Syntax checker for email addresses
#[derive(Debug, Clone)]
pub struct EmailValidator {
    /// Allow international domain names
    pub allow_unicode: bool,
    /// Require a top-level domain (e.g. `.com`, `.de`)
    pub require_tld: bool,
    pattern: Regex,
}

impl EmailValidator {
    /// ASCII addresses with a mandatory TLD
    pub fn new() -> Self {
        Self::build(false, true)
    }

    /// Allow unicode characters in both parts
    pub fn allow_unicode(self, allow: bool) -> Self {
        Self::build(allow, self.require_tld)
    }

    /// Require top-level domain (e.g. `.com`, `.org`)
    pub fn require_tld(self, require: bool) -> Self {
        Self::build(self.allow_unicode, require)
    }

    fn build(allow_unicode: bool, require_tld: bool) -> Self {
        let pattern = match (allow_unicode, require_tld) {
            (true, true) => r"^[^\s@.,]+[^\s@,]*@[^\s@.,]+[^\s@,]*\.[^\s@.,]+$",
            (true, false) => r"^[^\s@.,]+[^\s@,]*@[^\s@.,]+[^\s@,]*$",
            // no consecutive dots, no leading or trailing separators
            (false, true) => {
                r"^[a-zA-Z0-9]([a-zA-Z0-9._%+-]*[a-zA-Z0-9])?@[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?\.[a-zA-Z]{2,}$"
            }
            (false, false) => {
                r"^[a-zA-Z0-9]([a-zA-Z0-9._%+-]*[a-zA-Z0-9])?@[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?$"
            }
        };

        Self {
            allow_unicode,
            require_tld,
            pattern: Regex::new(pattern).expect("built-in email pattern compiles"),
        }
    }

    /// Check an address
    pub fn is_valid(&self, email: &str) -> bool {
        if email.is_empty() {
            return false;
        }

        let Some((local_part, domain_part)) = email.split_once('@') else {
            return false;
        };
        if domain_part.contains('@') || local_part.is_empty() || domain_part.is_empty() {
            return false;
        }

        // RFC 5321 limits
        if local_part.len() > 64 || domain_part.len() > 255 {
            return false;
        }
        if local_part.contains("..") || domain_part.contains("..") {
            return false;
        }

        self.pattern.is_match(email)
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_VALIDATOR: OnceLock<EmailValidator> = OnceLock::new();

/// Check an address with the default settings
pub fn is_email(email: &str) -> bool {
    DEFAULT_VALIDATOR
        .get_or_init(EmailValidator::default)
        .is_valid(email)
}
