use super::*;

#[test]
fn test_palette_has_eight_distinct_entries() {
    assert_eq!(PALETTE.len(), 8);
    for (i, a) in PALETTE.iter().enumerate() {
        for b in &PALETTE[i + 1..] {
            assert_ne!(a.background, b.background);
        }
    }
}

#[test]
fn test_color_cycles() {
    for i in 0..20 {
        assert_eq!(color_for(i), PALETTE[i % 8]);
    }
    assert_eq!(color_for(8), color_for(0));
}

#[test]
fn test_assign_colors() {
    let colors = assign_colors(10);
    assert_eq!(colors.len(), 10);
    assert_eq!(colors[9], PALETTE[1]);
    assert!(assign_colors(0).is_empty());
}

#[test]
fn test_colors_are_hex() {
    for c in PALETTE {
        for value in [c.background, c.border, c.text] {
            assert!(value.starts_with('#') && value.len() == 7, "{value}");
        }
    }
}
