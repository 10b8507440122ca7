use super::*;
use crate::convert::*;

#[test]
fn test_affricate_context() {
    let opts = campbell();
    assert_eq!(poj_ascii_to_unicode("chiah", &opts), "chiah");
    assert_eq!(poj_ascii_to_unicode("cha", &opts), "tsa");
    assert_eq!(poj_ascii_to_unicode("tsit8", &opts), "chi\u{30d}t");
    assert_eq!(poj_ascii_to_unicode("chhe", &opts), "chhe");
    // Modern POJ writes `ch` everywhere.
    assert_eq!(poj_ascii_to_unicode("cha", &modern()), "cha");
}

#[test]
fn test_glide_needs_initial() {
    assert_eq!(poj_ascii_to_unicode("oa5", &campbell()), "oâ");
    assert_eq!(poj_ascii_to_unicode("oa5", &modern()), "ôa");
    assert_eq!(poj_ascii_to_unicode("hoa5", &campbell()), "hôa");
}

#[test]
fn test_ainnh_marked_on_i() {
    assert_eq!(poj_ascii_to_unicode("ainnh8", &campbell()), "ai\u{30d}hⁿ");
    assert_eq!(poj_ascii_to_unicode("ainnh8", &modern()), "a\u{30d}iⁿh");
}

#[test]
fn test_nasal_o_spelling() {
    let opts = campbell();
    assert_eq!(poj_ascii_to_unicode("onn2", &opts), "ó\u{358}ⁿ");
    assert_eq!(poj_ascii_to_unicode("monn5", &opts), "mô\u{358}");
    assert_eq!(poj_ascii_to_unicode("noo5", &opts), "nô\u{358}ⁿ");
}

#[test]
fn test_campbell_unicode_to_ascii() {
    let opts = campbell();
    assert_eq!(poj_unicode_to_ascii("ai\u{30d}hⁿ", &opts), "ainnh8");
    assert_eq!(poj_unicode_to_ascii("ó\u{358}ⁿ", &opts), "onn2");
    assert_eq!(poj_unicode_to_ascii("nô\u{358}ⁿ", &opts), "noo5");
    assert_eq!(poj_unicode_to_ascii("mô\u{358}", &opts), "moo5");
}

#[test]
fn test_campbell_round_trip() {
    let opts = campbell();
    for ascii in ["onn2", "ainnh8", "hoann5", "chiah", "tsa1", "noo5", "mng5"] {
        let unicode = poj_ascii_to_unicode(ascii, &opts);
        let back = poj_unicode_to_ascii(&unicode, &opts);
        assert_eq!(poj_ascii_to_unicode(&back, &opts), unicode, "{ascii}");
    }
}

#[test]
fn test_spelling_switched_off() {
    let opts = ConvertOptions {
        campbell_spelling: false,
        ..campbell()
    };
    assert_eq!(poj_ascii_to_unicode("cha", &opts), "cha");
    assert_eq!(poj_ascii_to_unicode("onn2", &opts), "óⁿ");
    // Placement and the `hⁿ` order are not spelling.
    assert_eq!(poj_ascii_to_unicode("oa5", &opts), "oâ");
    assert_eq!(poj_ascii_to_unicode("ainnh8", &opts), "ai\u{30d}hⁿ");
}

#[test]
fn test_campbell_cross_ascii() {
    let opts = campbell();
    assert_eq!(tailo_ascii_to_poj_ascii("tsa1", &opts), "tsa1");
    assert_eq!(tailo_ascii_to_poj_ascii("tsiah", &opts), "chiah");
    assert_eq!(tailo_ascii_to_poj_ascii("tshe", &opts), "chhe");
    assert_eq!(tailo_ascii_to_poj_ascii("tsa1", &modern()), "cha1");
}

#[test]
fn test_campbell_cross_unicode() {
    let opts = campbell();
    assert_eq!(tailo_unicode_to_poj_unicode("tsa", &opts), "tsa");
    assert_eq!(tailo_unicode_to_poj_unicode("tsia̍h", &opts), "chia\u{30d}h");
    assert_eq!(tailo_unicode_to_poj_unicode("uâ", &opts), "oâ");
    assert_eq!(tailo_unicode_to_poj_unicode("hónn", &opts), "hó\u{358}ⁿ");
    assert_eq!(poj_unicode_to_tailo_unicode("hó\u{358}ⁿ", &opts), "hónn");
}

#[test]
fn test_spelling_off_keeps_tailo_affricates() {
    let opts = ConvertOptions {
        campbell_spelling: false,
        ..campbell()
    };
    assert_eq!(tailo_ascii_to_poj_ascii("tsa1", &opts), "cha1");
    assert_eq!(tailo_unicode_to_poj_unicode("tsa", &opts), "cha");
}

#[test]
fn test_nasal_o_read_back_with_spelling_off() {
    let opts = ConvertOptions {
        campbell_spelling: false,
        ..campbell()
    };
    assert_eq!(poj_unicode_to_ascii("ó\u{358}ⁿ", &opts), "onn2");
    assert_eq!(poj_unicode_to_ascii("nô\u{358}ⁿ", &opts), "noo5");
    assert_eq!(poj_unicode_to_ascii("óⁿ", &opts), "onn2");
    // Modern POJ has no nasal-o spelling to undo.
    assert_eq!(poj_unicode_to_ascii("ó\u{358}ⁿ", &modern()), "oonn2");
}
