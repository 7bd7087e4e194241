//! CPF / CNPJ check-digit validation.

use crate::mask::{CPF_DIGITS, TAX_ID_MAX_DIGITS, digits};

/// Which Brazilian tax id a digit string is shaped like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdKind {
    /// Individual taxpayer registry, 11 digits.
    Cpf,
    /// Company registry, 14 digits.
    Cnpj,
}

/// Classify a (possibly masked) tax id by its digit count.
pub fn tax_id_kind(masked: &str) -> Option<TaxIdKind> {
    match digits(masked).len() {
        CPF_DIGITS => Some(TaxIdKind::Cpf),
        TAX_ID_MAX_DIGITS => Some(TaxIdKind::Cnpj),
        _ => None,
    }
}

/// Check a (possibly masked) CPF or CNPJ against its two check digits.
///
/// Any digit count other than 11 or 14 is invalid, as is any string made of
/// one repeated digit.
pub fn is_valid_tax_id(masked: &str) -> bool {
    let values: Vec<u32> = digits(masked)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    match values.len() {
        CPF_DIGITS => is_valid_cpf(&values),
        TAX_ID_MAX_DIGITS => is_valid_cnpj(&values),
        _ => false,
    }
}

fn all_same(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

fn is_valid_cpf(values: &[u32]) -> bool {
    if all_same(values) {
        return false;
    }
    cpf_check_digit(&values[..9]) == values[9] && cpf_check_digit(&values[..10]) == values[10]
}

/// Weighted sum with weights `len + 1` down to 2; a remainder of 10 maps to 0.
fn cpf_check_digit(base: &[u32]) -> u32 {
    let top = base.len() as u32 + 1;
    let sum: u32 = base
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

fn is_valid_cnpj(values: &[u32]) -> bool {
    if all_same(values) {
        return false;
    }
    cnpj_check_digit(&values[..12]) == values[12] && cnpj_check_digit(&values[..13]) == values[13]
}

/// Weights cycle 2..=9 from the rightmost digit leftwards.
fn cnpj_check_digit(base: &[u32]) -> u32 {
    let sum: u32 = base
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
