//! Tests for color parsing and formatting
//!
//! Tests cover:
//! - Picker hex input
//! - CSS functional notation
//! - Alpha derivation and formatting
//! - Rejected inputs

use signal_monitor::color::{ColorError, Rgba};

// ============================================
// Parsing Tests
// ============================================

#[test]
fn test_hex_is_case_insensitive() {
    let upper: Rgba = "#DB7F26".parse().unwrap();
    let lower: Rgba = "#db7f26".parse().unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, Rgba::rgb(219, 127, 38));
}

#[test]
fn test_hex_tolerates_surrounding_whitespace() {
    let c: Rgba = "  #000000 ".parse().unwrap();
    assert_eq!(c, Rgba::rgb(0, 0, 0));
}

#[test]
fn test_functional_notation_with_spaces() {
    let c: Rgba = "rgba( 0 , 255 , 192 , 0.8 )".parse().unwrap();
    assert_eq!(c, Rgba::new(0, 255, 192, 0.8));
}

#[test]
fn test_named_colors_are_rejected() {
    assert!(matches!(
        "teal".parse::<Rgba>(),
        Err(ColorError::Unrecognized(_))
    ));
}

#[test]
fn test_hex_without_digits_is_rejected() {
    assert!(matches!("#".parse::<Rgba>(), Err(ColorError::InvalidHex(_))));
}

// ============================================
// Formatting Tests
// ============================================

#[test]
fn test_fill_derivation_keeps_channels() {
    let border: Rgba = "#112233".parse().unwrap();
    let fill = border.with_alpha(0.2);
    assert_eq!(fill.to_string(), "rgba(17,34,51,0.2)");
    assert_eq!(border.to_string(), "rgba(17,34,51,1)");
}

#[test]
fn test_with_alpha_clamps() {
    let c = Rgba::rgb(1, 2, 3);
    assert_eq!(c.with_alpha(2.0).a, 1.0);
    assert_eq!(c.with_alpha(-1.0).a, 0.0);
}

#[test]
fn test_to_hex_drops_alpha() {
    let c = Rgba::new(0, 255, 192, 0.8);
    assert_eq!(c.to_hex(), "#00FFC0");
    assert_eq!(c.rgb_array(), [0, 255, 192]);
}

#[test]
fn test_to_color32_is_unmultiplied() {
    let c = Rgba::new(219, 127, 38, 0.8).to_color32();
    assert_eq!(c.a(), 204);
}
