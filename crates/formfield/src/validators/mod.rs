//! Pure input checks used by the field kinds

pub mod date;
pub mod email;
pub mod iban;
pub mod numeric;
pub mod phone;
pub mod time;

pub use date::DatePattern;
pub use email::{is_email, EmailValidator};
pub use numeric::{is_fixed_length_int, is_int};
pub use phone::{has_valid_prefix, PhoneRule};
pub use time::{is_time, parse_time};
