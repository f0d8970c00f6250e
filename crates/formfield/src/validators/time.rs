//! Wall-clock time check (`hh:mm`)

use chrono::NaiveTime;

/// Parse a zero-padded 24-hour `hh:mm` string
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let bytes = input.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let hours = two_digits(&bytes[0..2])?;
    let minutes = two_digits(&bytes[3..5])?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

pub fn is_time(input: &str) -> bool {
    parse_time(input).is_some()
}

fn two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}
