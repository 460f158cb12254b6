use fanlog::color::{Color, colorize, dim};

#[test]
fn from_hex_parses_valid_colors() {
    let color = Color::from_hex("#ff00aa");
    assert_eq!(color, Color::new(255, 0, 170));

    let color = Color::from_hex("01a2ff");
    assert_eq!(color, Color::new(1, 162, 255));
}

#[test]
fn from_hex_invalid_length_defaults_white() {
    let color = Color::from_hex("#fff");
    assert_eq!(color, Color::white());
}

#[test]
fn from_hex_invalid_component_defaults_to_255() {
    let color = Color::from_hex("zz00aa");
    assert_eq!(color, Color::new(255, 0, 170));
}

#[test]
fn named_lookup_is_case_insensitive() {
    assert_eq!(Color::named("magenta"), Some(Color::magenta()));
    assert_eq!(Color::named("GREEN"), Some(Color::green()));
    assert_eq!(Color::named("mauve"), None);
}

#[test]
fn resolve_handles_hex_names_and_unknowns() {
    assert_eq!(Color::resolve("#102030"), Color::new(16, 32, 48));
    assert_eq!(Color::resolve("red"), Color::red());
    assert_eq!(Color::resolve("not-a-color"), Color::white());
}

#[test]
fn ansi_sequence_matches_rgb() {
    let color = Color::new(10, 20, 30);
    assert_eq!(color.fg_ansi(), "\x1b[38;2;10;20;30m");
}

#[test]
fn colorize_wraps_with_reset() {
    let wrapped = colorize("hi", Color::new(1, 2, 3));
    assert_eq!(wrapped, "\x1b[38;2;1;2;3mhi\x1b[0m");
}

#[test]
fn dim_wraps_with_reset() {
    assert_eq!(dim("[ts]"), "\x1b[2m[ts]\x1b[0m");
}

#[test]
fn display_renders_lowercase_hex() {
    assert_eq!(Color::new(255, 0, 170).to_string(), "#ff00aa");
}
