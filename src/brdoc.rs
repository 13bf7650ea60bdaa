//! CPF and CNPJ generation, validation and masking.
//!
//! Both documents use the same mod-11 check-digit scheme: a weighted digit
//! sum where remainder < 2 maps to 0 and anything else to 11 - remainder.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::Serialize;

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;

const CPF_WEIGHTS_FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_WEIGHTS_SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("static pattern"));

/// Outcome of generating or validating a document number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentResult {
    /// Digits only.
    pub raw: String,
    /// With the display mask applied; empty when the length is wrong.
    pub formatted: String,
    pub valid: bool,
}

/// Strip everything that is not an ASCII digit.
pub fn only_digits(input: &str) -> String {
    NON_DIGITS.replace_all(input, "").into_owned()
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

fn digit_values(raw: &str) -> Vec<u32> {
    raw.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn digits_to_string(digits: &[u32]) -> String {
    digits.iter().map(|d| char::from(b'0' + *d as u8)).collect()
}

/// CPFs with all digits equal pass the check-digit arithmetic but are
/// reserved as invalid; same rule applies to CNPJs.
fn all_digits_equal(raw: &str) -> bool {
    let mut chars = raw.chars();
    match chars.next() {
        None => false,
        Some(first) => chars.all(|c| c == first),
    }
}

fn format_cpf(raw: &str) -> String {
    if raw.len() != CPF_LEN {
        return raw.to_string();
    }
    format!("{}.{}.{}-{}", &raw[0..3], &raw[3..6], &raw[6..9], &raw[9..11])
}

fn format_cnpj(raw: &str) -> String {
    if raw.len() != CNPJ_LEN {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &raw[0..2],
        &raw[2..5],
        &raw[5..8],
        &raw[8..12],
        &raw[12..14]
    )
}

pub fn generate_cpf() -> DocumentResult {
    let mut rng = rand::thread_rng();
    let mut digits: Vec<u32> = (0..9).map(|_| rng.gen_range(0..10)).collect();
    let d1 = check_digit(&digits, &CPF_WEIGHTS_FIRST);
    digits.push(d1);
    let d2 = check_digit(&digits, &CPF_WEIGHTS_SECOND);
    digits.push(d2);

    let raw = digits_to_string(&digits);
    DocumentResult {
        formatted: format_cpf(&raw),
        raw,
        valid: true,
    }
}

pub fn validate_cpf(input: &str) -> DocumentResult {
    let raw = only_digits(input);
    if raw.len() != CPF_LEN {
        return DocumentResult {
            raw,
            formatted: String::new(),
            valid: false,
        };
    }
    let formatted = format_cpf(&raw);
    if all_digits_equal(&raw) {
        return DocumentResult {
            raw,
            formatted,
            valid: false,
        };
    }

    let digits = digit_values(&raw);
    let valid = check_digit(&digits[..9], &CPF_WEIGHTS_FIRST) == digits[9]
        && check_digit(&digits[..10], &CPF_WEIGHTS_SECOND) == digits[10];
    DocumentResult {
        raw,
        formatted,
        valid,
    }
}

pub fn generate_cnpj() -> DocumentResult {
    let mut rng = rand::thread_rng();
    let mut digits: Vec<u32> = (0..8).map(|_| rng.gen_range(0..10)).collect();
    // Branch number, conventionally 0001 for the head office.
    digits.extend([0, 0, 0, 1]);
    let d1 = check_digit(&digits, &CNPJ_WEIGHTS_FIRST);
    digits.push(d1);
    let d2 = check_digit(&digits, &CNPJ_WEIGHTS_SECOND);
    digits.push(d2);

    let raw = digits_to_string(&digits);
    DocumentResult {
        formatted: format_cnpj(&raw),
        raw,
        valid: true,
    }
}

pub fn validate_cnpj(input: &str) -> DocumentResult {
    let raw = only_digits(input);
    if raw.len() != CNPJ_LEN {
        return DocumentResult {
            raw,
            formatted: String::new(),
            valid: false,
        };
    }
    let formatted = format_cnpj(&raw);
    if all_digits_equal(&raw) {
        return DocumentResult {
            raw,
            formatted,
            valid: false,
        };
    }

    let digits = digit_values(&raw);
    let valid = check_digit(&digits[..12], &CNPJ_WEIGHTS_FIRST) == digits[12]
        && check_digit(&digits[..13], &CNPJ_WEIGHTS_SECOND) == digits[13];
    DocumentResult {
        raw,
        formatted,
        valid,
    }
}

/// Apply the CPF mask when the input has exactly 11 digits; otherwise the
/// input comes back unchanged.
pub fn mask_cpf(input: &str) -> String {
    let clean = only_digits(input);
    if clean.len() != CPF_LEN {
        return input.to_string();
    }
    format_cpf(&clean)
}

/// Apply the CNPJ mask when the input has exactly 14 digits; otherwise the
/// input comes back unchanged.
pub fn mask_cnpj(input: &str) -> String {
    let clean = only_digits(input);
    if clean.len() != CNPJ_LEN {
        return input.to_string();
    }
    format_cnpj(&clean)
}
