//! As-you-type input normalization.
//!
//! Every function here is pure and total: malformed input degrades to a
//! shorter rendering instead of failing, and masking a masked string again
//! yields the same string.

/// Maximum number of digits in a tax id (CNPJ).
pub const TAX_ID_MAX_DIGITS: usize = 14;

/// Number of digits in a CPF. Longer inputs are rendered as CNPJ.
pub const CPF_DIGITS: usize = 11;

/// Maximum number of digits in a phone number (mobile, area code included).
pub const PHONE_MAX_DIGITS: usize = 11;

/// Phone numbers longer than this are rendered with the mobile layout.
pub const LANDLINE_DIGITS: usize = 10;

/// Maximum length, in characters, of a free-text "best/worst thing" answer.
pub const FREE_TEXT_MAX_CHARS: usize = 20;

/// CPF layout `ddd.ddd.ddd-dd`: group sizes and the separator before each group.
const CPF_LAYOUT: &[(&str, usize)] = &[("", 3), (".", 3), (".", 3), ("-", 2)];

/// CNPJ layout `dd.ddd.ddd/dddd-dd`.
const CNPJ_LAYOUT: &[(&str, usize)] = &[("", 2), (".", 3), (".", 3), ("/", 4), ("-", 2)];

/// Strip every non-digit character.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Render a CPF or CNPJ as far as the typed digits allow.
///
/// Up to 11 digits use the CPF layout; 12 to 14 switch to the CNPJ layout.
/// Digits past the 14th are dropped.
pub fn mask_tax_id(raw: &str) -> String {
    let mut digits = digits(raw);
    digits.truncate(TAX_ID_MAX_DIGITS);

    if digits.len() > CPF_DIGITS {
        apply_layout(&digits, CNPJ_LAYOUT)
    } else {
        apply_layout(&digits, CPF_LAYOUT)
    }
}

/// Render a phone number as far as the typed digits allow.
///
/// The area code is wrapped in parentheses once a third digit follows it.
/// Eleven digits use the mobile layout `(dd) ddddd-dddd`, fewer use the
/// landline layout `(dd) dddd-dddd`. Digits past the 11th are dropped.
pub fn mask_phone(raw: &str) -> String {
    let mut digits = digits(raw);
    digits.truncate(PHONE_MAX_DIGITS);

    if digits.len() <= 2 {
        return digits;
    }

    let (area, subscriber) = digits.split_at(2);
    let prefix_len = if digits.len() > LANDLINE_DIGITS { 5 } else { 4 };

    let mut out = format!("({area}) ");
    if subscriber.len() > prefix_len {
        let (prefix, line) = subscriber.split_at(prefix_len);
        out.push_str(prefix);
        out.push('-');
        out.push_str(line);
    } else {
        out.push_str(subscriber);
    }
    out
}

/// Keep only letters (accented ones included) and whitespace.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect()
}

/// Cut a free-text answer down to [`FREE_TEXT_MAX_CHARS`] characters.
pub fn limit_free_text(raw: &str) -> String {
    raw.chars().take(FREE_TEXT_MAX_CHARS).collect()
}

/// Lay ASCII digits out in groups, writing a group's separator only once a
/// digit of that group has been typed.
fn apply_layout(digits: &str, layout: &[(&str, usize)]) -> String {
    let mut out = String::with_capacity(digits.len() + layout.len());
    let mut rest = digits;

    for (separator, size) in layout {
        if rest.is_empty() {
            break;
        }
        let take = (*size).min(rest.len());
        out.push_str(separator);
        out.push_str(&rest[..take]);
        rest = &rest[take..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_full() {
        assert_eq!(mask_tax_id("11144477735"), "111.444.777-35");
    }

    #[test]
    fn cnpj_full() {
        assert_eq!(mask_tax_id("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn cpf_progressive() {
        assert_eq!(mask_tax_id(""), "");
        assert_eq!(mask_tax_id("1"), "1");
        assert_eq!(mask_tax_id("123"), "123");
        assert_eq!(mask_tax_id("1234"), "123.4");
        assert_eq!(mask_tax_id("123456"), "123.456");
        assert_eq!(mask_tax_id("1234567"), "123.456.7");
        assert_eq!(mask_tax_id("123456789"), "123.456.789");
        assert_eq!(mask_tax_id("1234567890"), "123.456.789-0");
    }

    #[test]
    fn switches_to_cnpj_on_twelfth_digit() {
        assert_eq!(mask_tax_id("112223330001"), "11.222.333/0001");
        assert_eq!(mask_tax_id("1122233300018"), "11.222.333/0001-8");
    }

    #[test]
    fn tax_id_drops_extra_digits_and_noise() {
        assert_eq!(mask_tax_id("11.222.333/0001-81999"), "11.222.333/0001-81");
        assert_eq!(mask_tax_id("abc111def444"), "111.444");
    }

    #[test]
    fn tax_id_remask_is_stable() {
        let once = mask_tax_id("11144477735");
        assert_eq!(mask_tax_id(&once), once);
    }

    #[test]
    fn phone_mobile() {
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn phone_landline() {
        assert_eq!(mask_phone("1133334444"), "(11) 3333-4444");
    }

    #[test]
    fn phone_progressive() {
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("1"), "1");
        assert_eq!(mask_phone("11"), "11");
        assert_eq!(mask_phone("119"), "(11) 9");
        assert_eq!(mask_phone("119876"), "(11) 9876");
        assert_eq!(mask_phone("1198765"), "(11) 9876-5");
        assert_eq!(mask_phone("119876543"), "(11) 9876-543");
    }

    #[test]
    fn phone_drops_extra_digits() {
        assert_eq!(mask_phone("(11) 98765-43210"), "(11) 98765-4321");
    }

    #[test]
    fn name_keeps_letters_and_spaces() {
        assert_eq!(sanitize_name("José da Silva 3!"), "José da Silva ");
        assert_eq!(sanitize_name("Ana-Lúcia"), "AnaLúcia");
        assert_eq!(sanitize_name("123"), "");
    }

    #[test]
    fn free_text_limit_counts_characters() {
        assert_eq!(limit_free_text("Preço"), "Preço");
        let long = "ç".repeat(30);
        assert_eq!(limit_free_text(&long).chars().count(), FREE_TEXT_MAX_CHARS);
    }
}
