//! Spelled-out pt-BR cardinal numbers ("por extenso")
//!
//! Technical quotation reports state the final amount both as a figure and
//! written out in words. This module renders non-negative integers in
//! Brazilian Portuguese: irregular teens, compound tens joined with "e",
//! `cem`/`cento` for hundreds, a bare `mil` for 1000-1999 and pluralized
//! scale words from `milhão` upward. Only the integer part of a monetary
//! amount is spelled out; centavos are intentionally left off.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const UNIDADES: [&str; 20] = [
    "",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const DEZENAS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const CENTENAS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Scale words for each base-1000 chunk above the thousands, as
/// (singular, plural) pairs
const ESCALAS: [(&str, &str); 5] = [
    ("milhão", "milhões"),
    ("bilhão", "bilhões"),
    ("trilhão", "trilhões"),
    ("quatrilhão", "quatrilhões"),
    ("quintilhão", "quintilhões"),
];

/// Spell out a non-negative integer in Brazilian Portuguese.
///
/// The value is processed in base-1000 chunks; nonzero chunks are rendered
/// most-significant-first and joined with `" e "`, so
/// `por_extenso(1_234_567)` is
/// `"um milhão e duzentos e trinta e quatro mil e quinhentos e sessenta e
/// sete"`. Zero maps to `"zero"`.
pub fn por_extenso(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;
    let mut scale = 0usize;

    while rest > 0 {
        let chunk = rest % 1000;
        if chunk > 0 {
            parts.push(chunk_words(chunk, scale));
        }
        rest /= 1000;
        scale += 1;
    }

    parts.reverse();
    parts.join(" e ")
}

/// Spell out the integer part of a monetary amount with the currency word.
///
/// `1` becomes `"um real"`, `250` becomes `"duzentos e cinquenta reais"`
/// and an exact number of millions gains the partitive: `1_000_000` is
/// `"um milhão de reais"`. The fractional part is discarded, never spelled.
pub fn valor_por_extenso(value: Decimal) -> String {
    let inteiro = value.trunc().to_u64().unwrap_or(0);

    if inteiro == 1 {
        return "um real".to_string();
    }

    // "um milhão de reais", not "um milhão reais"
    if inteiro >= 1_000_000 && inteiro % 1_000_000 == 0 {
        return format!("{} de reais", por_extenso(inteiro));
    }

    format!("{} reais", por_extenso(inteiro))
}

/// Render one base-1000 chunk with its scale word. `chunk` is 1..=999.
fn chunk_words(chunk: u64, scale: usize) -> String {
    match scale {
        0 => trio(chunk),
        // "mil", never "um mil"
        1 if chunk == 1 => "mil".to_string(),
        1 => format!("{} mil", trio(chunk)),
        _ => {
            let (singular, plural) = ESCALAS[scale - 2];
            if chunk == 1 {
                format!("um {}", singular)
            } else {
                format!("{} {}", trio(chunk), plural)
            }
        }
    }
}

/// Render a value in 1..=999
fn trio(n: u64) -> String {
    debug_assert!((1..=999).contains(&n));

    // an exact hundred is "cem"; 101..=199 use "cento e ..."
    if n == 100 {
        return "cem".to_string();
    }

    let mut words = String::new();
    let hundreds = (n / 100) as usize;
    let remainder = n % 100;

    if hundreds > 0 {
        words.push_str(CENTENAS[hundreds]);
    }

    if remainder > 0 {
        if !words.is_empty() {
            words.push_str(" e ");
        }
        if remainder < 20 {
            words.push_str(UNIDADES[remainder as usize]);
        } else {
            words.push_str(DEZENAS[(remainder / 10) as usize]);
            let unit = remainder % 10;
            if unit > 0 {
                words.push_str(" e ");
                words.push_str(UNIDADES[unit as usize]);
            }
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(por_extenso(0), "zero");
    }

    #[test]
    fn test_units_and_teens() {
        assert_eq!(por_extenso(1), "um");
        assert_eq!(por_extenso(9), "nove");
        assert_eq!(por_extenso(10), "dez");
        assert_eq!(por_extenso(15), "quinze");
        assert_eq!(por_extenso(19), "dezenove");
    }

    #[test]
    fn test_compound_tens() {
        assert_eq!(por_extenso(20), "vinte");
        assert_eq!(por_extenso(42), "quarenta e dois");
        assert_eq!(por_extenso(99), "noventa e nove");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(por_extenso(100), "cem");
        assert_eq!(por_extenso(101), "cento e um");
        assert_eq!(por_extenso(250), "duzentos e cinquenta");
        assert_eq!(por_extenso(999), "novecentos e noventa e nove");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(por_extenso(1000), "mil");
        assert_eq!(por_extenso(1001), "mil e um");
        assert_eq!(por_extenso(2000), "dois mil");
        assert_eq!(por_extenso(2345), "dois mil e trezentos e quarenta e cinco");
        assert_eq!(por_extenso(100_000), "cem mil");
    }
}
