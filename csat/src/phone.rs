//! Brazilian phone number plausibility checks.

use crate::mask::{LANDLINE_DIGITS, PHONE_MAX_DIGITS, digits};

/// Shortest run of one repeated digit that marks a number as made up.
const REPEATED_RUN: usize = 5;

/// Area codes (DDD) in service, sorted.
pub const AREA_CODES: &[u8] = &[
    11, 12, 13, 14, 15, 16, 17, 18, 19, // SP
    21, 22, 24, // RJ
    27, 28, // ES
    31, 32, 33, 34, 35, 37, 38, // MG
    41, 42, 43, 44, 45, 46, // PR
    47, 48, 49, // SC
    51, 53, 54, 55, // RS
    61, // DF
    62, 63, 64, // GO, TO
    65, 66, 67, // MT, MS
    68, 69, // AC, RO
    71, 73, 74, 75, 77, // BA
    79, // SE
    81, 82, 83, 84, 85, 86, 87, 88, 89, // PE, AL, PB, RN, CE, PI
    91, 92, 93, 94, 95, 96, 97, // PA, AM, RR, AP
    98, 99, // MA
];

/// Why a phone number was rejected. The `Display` text is shown to the respondent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    #[error("Telefone incompleto: informe DDD e número (10 ou 11 dígitos).")]
    TooShort(usize),

    #[error("Telefone com dígitos demais: informe 10 ou 11 dígitos.")]
    TooLong(usize),

    #[error("Número inválido: sequência de números repetidos detectada.")]
    RepeatedDigits,

    #[error("DDD {0} inválido.")]
    InvalidAreaCode(u8),

    #[error("Celular com 11 dígitos deve começar com 9 após o DDD.")]
    MobileWithoutNine,

    #[error("Parece um celular sem o dígito 9: use DDD + 9 + número.")]
    MissingMobileDigit,

    #[error("Telefone fixo deve começar com 2, 3, 4 ou 5 após o DDD.")]
    InvalidLandlinePrefix(u8),
}

/// Check a (possibly masked) phone number.
///
/// Rules run in order and the first failure is reported: digit count,
/// repeated digits, area code, then the leading digit of the subscriber
/// number (9 for mobiles, 2 to 5 for landlines).
///
/// "Repeated digits" covers a number made of one digit and also any run of
/// five or more identical digits anywhere in it, so `(11) 99999-1234` and
/// `(11) 2222-2345` are rejected along with `(69) 99999-9999`. A run of
/// four, as in `(11) 3333-4444`, is accepted.
pub fn validate_phone(masked: &str) -> Result<(), PhoneError> {
    let values: Vec<u8> = digits(masked).bytes().map(|b| b - b'0').collect();

    match values.len() {
        n if n < LANDLINE_DIGITS => return Err(PhoneError::TooShort(n)),
        n if n > PHONE_MAX_DIGITS => return Err(PhoneError::TooLong(n)),
        _ => {}
    }

    if values.windows(2).all(|w| w[0] == w[1])
        || values
            .windows(REPEATED_RUN)
            .any(|w| w.iter().all(|d| *d == w[0]))
    {
        return Err(PhoneError::RepeatedDigits);
    }

    let area_code = values[0] * 10 + values[1];
    if AREA_CODES.binary_search(&area_code).is_err() {
        return Err(PhoneError::InvalidAreaCode(area_code));
    }

    let leading = values[2];
    if values.len() == PHONE_MAX_DIGITS {
        if leading != 9 {
            return Err(PhoneError::MobileWithoutNine);
        }
    } else if leading == 9 {
        return Err(PhoneError::MissingMobileDigit);
    } else if !(2..=5).contains(&leading) {
        return Err(PhoneError::InvalidLandlinePrefix(leading));
    }

    Ok(())
}

/// Check if a (possibly masked) phone number passes [`validate_phone`].
pub fn is_valid_phone(masked: &str) -> bool {
    validate_phone(masked).is_ok()
}
