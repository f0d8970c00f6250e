//! International Bank Account Numbers (ISO 13616)

/// Uppercase `input` and drop everything outside `[0-9A-Z]`
pub fn electronic_format(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        .collect()
}

/// Electronic format split into groups of four separated by single spaces
pub fn print_format(input: &str) -> String {
    let compact: Vec<char> = electronic_format(input).chars().collect();
    compact
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Registered country, per-country BBAN structure and Mod 97-10 check
/// digits. Spacing and case are ignored.
pub fn is_valid(input: &str) -> bool {
    let iban = electronic_format(input);
    let bytes = iban.as_bytes();
    if bytes.len() < 5 {
        return false;
    }
    if !bytes[0].is_ascii_uppercase() || !bytes[1].is_ascii_uppercase() {
        return false;
    }
    if !bytes[2].is_ascii_digit() || !bytes[3].is_ascii_digit() {
        return false;
    }
    match bban_structure(&iban[0..2]) {
        Some(structure) if bban_matches(structure, &bytes[4..]) => {}
        _ => return false,
    }

    mod97(&iban) == 1
}

/// Remainder of the rearranged IBAN (letters as 10..=35) divided by 97
fn mod97(iban: &str) -> u32 {
    let rearranged = iban[4..].chars().chain(iban[..4].chars());
    let mut remainder = 0u32;
    for c in rearranged {
        let value = match c.to_digit(36) {
            Some(value) => value,
            None => return 0,
        };
        remainder = if value >= 10 {
            (remainder * 100 + value) % 97
        } else {
            (remainder * 10 + value) % 97
        };
    }
    remainder
}

/// Walk `bban` through the segments of `structure`. Each segment is a
/// class letter and a two-digit width: `F` digits, `U` uppercase letters,
/// `A` digits or uppercase letters. The BBAN must be consumed exactly.
fn bban_matches(structure: &str, bban: &[u8]) -> bool {
    let mut rest = bban;
    for segment in structure.as_bytes().chunks(3) {
        let [class, tens, ones] = segment else {
            return false;
        };
        let width = usize::from(tens - b'0') * 10 + usize::from(ones - b'0');
        if rest.len() < width {
            return false;
        }
        let (head, tail) = rest.split_at(width);
        let accepted = head.iter().all(|b| match *class {
            b'F' => b.is_ascii_digit(),
            b'U' => b.is_ascii_uppercase(),
            _ => b.is_ascii_digit() || b.is_ascii_uppercase(),
        });
        if !accepted {
            return false;
        }
        rest = tail;
    }
    rest.is_empty()
}

/// BBAN structure per country code, following the ISO 13616 registry
fn bban_structure(country: &str) -> Option<&'static str> {
    let structure = match country {
        "AD" => "F04F04A12",
        "AE" => "F03F16",
        "AL" => "F08A16",
        "AT" => "F05F11",
        "AZ" => "U04A20",
        "BA" => "F03F03F08F02",
        "BE" => "F03F07F02",
        "BG" => "U04F04F02A08",
        "BH" => "U04A14",
        "BI" => "F05F05F11F02",
        "BR" => "F08F05F10U01A01",
        "BY" => "A04F04A16",
        "CH" => "F05A12",
        "CR" => "F04F14",
        "CY" => "F03F05A16",
        "CZ" => "F04F06F10",
        "DE" => "F08F10",
        "DJ" => "F05F05F11F02",
        "DK" => "F04F09F01",
        "DO" => "A04F20",
        "EE" => "F02F02F11F01",
        "EG" => "F04F04F17",
        "ES" => "F04F04F01F01F10",
        "FI" => "F06F07F01",
        "FK" => "U02F12",
        "FO" => "F04F09F01",
        "FR" => "F05F05A11F02",
        "GB" => "U04F06F08",
        "GE" => "U02F16",
        "GI" => "U04A15",
        "GL" => "F04F09F01",
        "GR" => "F03F04A16",
        "GT" => "A04A20",
        "HR" => "F07F10",
        "HU" => "F03F04F01F15F01",
        "IE" => "U04F06F08",
        "IL" => "F03F03F13",
        "IQ" => "U04F03F12",
        "IS" => "F04F02F06F10",
        "IT" => "U01F05F05A12",
        "JO" => "U04F04A18",
        "KW" => "U04A22",
        "KZ" => "F03A13",
        "LB" => "F04A20",
        "LC" => "U04A24",
        "LI" => "F05A12",
        "LT" => "F05F11",
        "LU" => "F03A13",
        "LV" => "U04A13",
        "LY" => "F03F03F15",
        "MC" => "F05F05A11F02",
        "MD" => "A02A18",
        "ME" => "F03F13F02",
        "MK" => "F03A10F02",
        "MN" => "F04F12",
        "MR" => "F05F05F11F02",
        "MT" => "U04F05A18",
        "MU" => "U04F02F02F12F03U03",
        "NI" => "U04F20",
        "NL" => "U04F10",
        "NO" => "F04F06F01",
        "OM" => "F03A16",
        "PK" => "U04A16",
        "PL" => "F08F16",
        "PS" => "U04A21",
        "PT" => "F04F04F11F02",
        "QA" => "U04A21",
        "RO" => "U04A16",
        "RS" => "F03F13F02",
        "RU" => "F09F05A15",
        "SA" => "F02A18",
        "SC" => "U04F02F02F16U03",
        "SD" => "F02F12",
        "SE" => "F03F16F01",
        "SI" => "F05F08F02",
        "SK" => "F04F06F10",
        "SM" => "U01F05F05A12",
        "SO" => "F04F03F12",
        "ST" => "F08F11F02",
        "SV" => "U04F20",
        "TL" => "F03F14F02",
        "TN" => "F02F03F13F02",
        "TR" => "F05F01A16",
        "UA" => "F06A19",
        "VA" => "F03F15",
        "VG" => "U04F16",
        "XK" => "F04F10F02",
        _ => return None,
    };
    Some(structure)
}
