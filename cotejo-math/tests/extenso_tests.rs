//! Integration tests for the pt-BR number-to-words conversion
//!
//! Locks the spelled forms interpolated into technical report conclusions,
//! including scale words and the currency suffix.

use cotejo_math::{por_extenso, valor_por_extenso};
use rust_decimal_macros::dec;

#[test]
fn test_single_segment_has_no_stray_conjunction() {
    assert_eq!(por_extenso(1_000_000), "um milhão");
    assert_eq!(por_extenso(3_000), "três mil");
    assert!(!por_extenso(700).starts_with(" e "));
    assert!(!por_extenso(700).ends_with(" e "));
}

#[test]
fn test_scale_words_pluralize() {
    assert_eq!(por_extenso(2_000_000), "dois milhões");
    assert_eq!(por_extenso(1_000_000_000), "um bilhão");
    assert_eq!(por_extenso(5_000_000_000), "cinco bilhões");
    assert_eq!(por_extenso(1_000_000_000_000), "um trilhão");
}

#[test]
fn test_chunks_join_most_significant_first() {
    assert_eq!(
        por_extenso(1_234_567),
        "um milhão e duzentos e trinta e quatro mil e quinhentos e sessenta e sete"
    );
    assert_eq!(por_extenso(1_000_250), "um milhão e duzentos e cinquenta");
}

#[test]
fn test_skips_zero_chunks() {
    assert_eq!(por_extenso(2_000_005), "dois milhões e cinco");
    assert_eq!(por_extenso(1_000_001), "um milhão e um");
}

#[test]
fn test_currency_singular_and_plural() {
    assert_eq!(valor_por_extenso(dec!(1)), "um real");
    assert_eq!(valor_por_extenso(dec!(2)), "dois reais");
    assert_eq!(valor_por_extenso(dec!(250)), "duzentos e cinquenta reais");
}

#[test]
fn test_currency_exact_millions_take_partitive() {
    assert_eq!(valor_por_extenso(dec!(1000000)), "um milhão de reais");
    assert_eq!(valor_por_extenso(dec!(2000000)), "dois milhões de reais");
    assert_eq!(
        valor_por_extenso(dec!(1000250)),
        "um milhão e duzentos e cinquenta reais"
    );
}

#[test]
fn test_currency_ignores_centavos() {
    assert_eq!(valor_por_extenso(dec!(250.99)), "duzentos e cinquenta reais");
    assert_eq!(valor_por_extenso(dec!(0.75)), "zero reais");
}
