use super::*;
use crate::convert::*;
use crate::normalize::decompose;
use crate::options::ConfigError;
use crate::orthography::Orthography;
use crate::placement::relocate;
use crate::standard::Standard;
use crate::tone::{digits_to_accents, POJ, TAILO};

// ---------------------------------------------------------------------------
// Tâi-lô
// ---------------------------------------------------------------------------

#[test]
fn test_tailo_ascii_to_unicode() {
    let opts = modern();
    assert_eq!(tailo_ascii_to_unicode("Tai5-lo5", &opts), "Tâi-lô");
    assert_eq!(tailo_ascii_to_unicode("guan5", &opts), "guân");
    assert_eq!(tailo_ascii_to_unicode("kai5", &opts), "kâi");
    assert_eq!(tailo_ascii_to_unicode("ting5", &opts), "tîng");
    assert_eq!(tailo_ascii_to_unicode("hue5", &opts), "huê");
    assert_eq!(tailo_ascii_to_unicode("koo2", &opts), "kóo");
    assert_eq!(tailo_ascii_to_unicode("pak4", &opts), "pak");
    assert_eq!(tailo_ascii_to_unicode("o9", &opts), "ő");
}

#[test]
fn test_tailo_syllabic_nasals() {
    let opts = modern();
    assert_eq!(tailo_ascii_to_unicode("ng5", &opts), "n\u{302}g");
    assert_eq!(tailo_ascii_to_unicode("m7", &opts), "m\u{304}");
    assert_eq!(tailo_ascii_to_unicode("tsiah8", &opts), "tsia\u{30d}h");
}

#[test]
fn test_tailo_passthrough() {
    let opts = modern();
    assert_eq!(tailo_ascii_to_unicode("", &opts), "");
    assert_eq!(tailo_ascii_to_unicode("123 -- ?!", &opts), "123 -- ?!");
    // A tone with no vowel or syllabic nasal to sit on stays a digit.
    assert_eq!(tailo_ascii_to_unicode("st5", &opts), "st5");
    assert_eq!(tailo_ascii_to_unicode("臺灣 Tai5", &opts), "臺灣 Tâi");
}

#[test]
fn test_tailo_foreign_letters() {
    let opts = ConvertOptions {
        foreign_letters: true,
        ..modern()
    };
    assert_eq!(tailo_ascii_to_unicode("Chheng1-hoa5", &opts), "Tshing-huâ");
    assert_eq!(tailo_ascii_to_unicode("Chheng1-hoa5", &modern()), "Chheng-hoâ");
}

#[test]
fn test_tailo_unicode_to_ascii() {
    let opts = modern();
    assert_eq!(tailo_unicode_to_ascii("Guá sī!", &opts), "Gua2 si7!");
    assert_eq!(tailo_unicode_to_ascii("Tâi-lô", &opts), "Tai5-lo5");
    assert_eq!(tailo_unicode_to_ascii("pak", &opts), "pak4");
    assert_eq!(tailo_unicode_to_ascii("tsia̍h pn̄g", &opts), "tsiah8 png7");
}

#[test]
fn test_default_tone_not_added_before_digit() {
    assert_eq!(tailo_unicode_to_ascii("abc5", &modern()), "abc5");
    assert_eq!(poj_unicode_to_ascii("abc5", &modern()), "abc5");
}

// ---------------------------------------------------------------------------
// POJ
// ---------------------------------------------------------------------------

#[test]
fn test_poj_ascii_to_unicode() {
    let opts = modern();
    assert_eq!(poj_ascii_to_unicode("Pe8h-oe7-ji7", &opts), "Pe\u{30d}h-\u{14d}e-j\u{12b}");
    // The tone digit also goes after the whole syllable.
    assert_eq!(poj_ascii_to_unicode("Peh8-oe7-ji7", &opts), "Pe\u{30d}h-\u{14d}e-j\u{12b}");
    assert_eq!(poj_ascii_to_unicode("koa5", &opts), "kôa");
    assert_eq!(poj_ascii_to_unicode("koan5", &opts), "koân");
    assert_eq!(poj_ascii_to_unicode("hoann5", &opts), "hôaⁿ");
    assert_eq!(poj_ascii_to_unicode("oa5", &opts), "ôa");
    assert_eq!(poj_ascii_to_unicode("nng7", &opts), "nn\u{304}g");
}

#[test]
fn test_poj_special_letters() {
    let opts = modern();
    assert_eq!(poj_ascii_to_unicode("onn2", &opts), "óⁿ");
    assert_eq!(poj_ascii_to_unicode("oo5", &opts), "ô\u{358}");
    assert_eq!(poj_ascii_to_unicode("SANN", &opts), "SAᴺ");
    assert_eq!(poj_ascii_to_unicode("hou7", &opts), "hō\u{358}");
    assert_eq!(poj_ascii_to_unicode("ainnh8", &opts), "a\u{30d}iⁿh");
}

#[test]
fn test_poj_uppercase_n() {
    let opts = ConvertOptions {
        uppercase_n_nasal: true,
        ..modern()
    };
    assert_eq!(poj_ascii_to_unicode("saN", &opts), "saⁿ");
    assert_eq!(poj_ascii_to_unicode("SANN", &opts), "SAᴺ");
    assert_eq!(poj_ascii_to_unicode("saN", &modern()), "saN");
}

#[test]
fn test_poj_foreign_letters() {
    let opts = ConvertOptions {
        foreign_letters: true,
        ..modern()
    };
    assert_eq!(poj_ascii_to_unicode("tsua7", &opts), "chōa");
    assert_eq!(poj_ascii_to_unicode("tsua7", &modern()), "tsuā");
}

#[test]
fn test_poj_unicode_to_ascii() {
    let opts = modern();
    assert_eq!(poj_unicode_to_ascii("Pe̍h-ōe-jī", &opts), "Peh8-oe7-ji7");
    assert_eq!(poj_unicode_to_ascii("hōaⁿ", &opts), "hoann7");
    assert_eq!(poj_unicode_to_ascii("Lo\u{358}", &opts), "Loo1");
}

#[test]
fn test_poj_long_o_upper_case_is_lossy() {
    // `O͘` may have been typed `OO` or `Oo`; it always comes back as `OO`.
    let opts = modern();
    assert_eq!(poj_unicode_to_ascii("O\u{358}", &opts), "OO1");
    assert_eq!(poj_unicode_to_ascii("Ó\u{358}ᴺ", &opts), "OONN2");
    assert_eq!(poj_ascii_to_unicode("Oo", &opts), "O\u{358}");
    assert_eq!(poj_unicode_to_ascii(&poj_ascii_to_unicode("Oo", &opts), &opts), "OO1");
}

#[test]
fn test_nasal_round_trip_in_both_forms() {
    for opts in [modern(), nfd(modern())] {
        let unicode = poj_ascii_to_unicode("onn2", &opts);
        assert_eq!(poj_unicode_to_ascii(&unicode, &opts), "onn2");
    }
    assert_eq!(poj_ascii_to_unicode("onn2", &nfd(modern())), "o\u{301}ⁿ");
}

// ---------------------------------------------------------------------------
// Across orthographies
// ---------------------------------------------------------------------------

#[test]
fn test_cross_ascii() {
    let opts = modern();
    assert_eq!(poj_ascii_to_tailo_ascii("Pe8h-oe7-ji7", &opts), "Pe8h-ue7-ji7");
    assert_eq!(poj_ascii_to_tailo_ascii("chheng1", &opts), "tshing1");
    assert_eq!(poj_ascii_to_tailo_ascii("sek", &opts), "sik");
    assert_eq!(tailo_ascii_to_poj_ascii("kuan5", &opts), "koan5");
    assert_eq!(tailo_ascii_to_poj_ascii("tsa1", &opts), "cha1");
}

#[test]
fn test_cross_unicode() {
    let opts = modern();
    assert_eq!(poj_unicode_to_tailo_unicode("Pe̍h-ōe-jī", &opts), "Pe̍h-uē-jī");
    assert_eq!(tailo_unicode_to_poj_unicode("Pe̍h-uē-jī", &opts), "Pe̍h-ōe-jī");
    assert_eq!(tailo_unicode_to_poj_unicode("Tâi-uân", &opts), "Tâi-oân");
    assert_eq!(poj_unicode_to_tailo_unicode("Tâi-oân", &opts), "Tâi-uân");
    assert_eq!(tailo_unicode_to_poj_unicode("ő", &opts), "ŏ");
    assert_eq!(poj_unicode_to_tailo_unicode("ŏ", &opts), "ő");
}

#[test]
fn test_cross_unicode_special_letters() {
    let opts = modern();
    assert_eq!(poj_unicode_to_tailo_unicode("hōaⁿ", &opts), "huānn");
    assert_eq!(poj_unicode_to_tailo_unicode("ô\u{358}", &opts), "ôo");
    assert_eq!(tailo_unicode_to_poj_unicode("kiânn", &opts), "kiâⁿ");
    assert_eq!(tailo_unicode_to_poj_unicode("hóo", &opts), "hó\u{358}");
}

#[test]
fn test_relocate_matches_rendering() {
    let opts = nfd(modern());
    for s in ["kai5", "guan5", "koo2", "hue5", "ng5", "tsiah8", "m7"] {
        let relocated = relocate(s, Orthography::Tailo, Standard::Modern);
        assert_eq!(
            digits_to_accents(&relocated, &TAILO),
            decompose(&tailo_ascii_to_unicode(s, &opts)),
            "{s}"
        );
    }
    for (standard, opts) in [
        (Standard::Modern, nfd(modern())),
        (Standard::Campbell, nfd(campbell())),
    ] {
        for s in ["hoa5", "oa5", "koan5", "kio3", "sui2", "pe7", "poe3"] {
            let relocated = relocate(s, Orthography::Poj, standard);
            assert_eq!(
                digits_to_accents(&relocated, &POJ),
                poj_ascii_to_unicode(s, &opts),
                "{s} under {standard}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

#[test]
fn test_mode_names_round_trip() {
    for mode in Mode::ALL {
        assert_eq!(mode.name().parse::<Mode>(), Ok(mode));
        assert_eq!(mode.to_string(), mode.name());
    }
}

#[test]
fn test_unknown_mode() {
    assert_eq!(
        "poj2tl".parse::<Mode>(),
        Err(ConfigError::UnknownMode("poj2tl".into()))
    );
}

#[test]
fn test_convert_dispatch() {
    let opts = modern();
    assert_eq!(convert(Mode::TailoAsciiToUnicode, "Tai5-lo5", &opts), "Tâi-lô");
    assert_eq!(convert("poj_u2a".parse().unwrap(), "Pe̍h-ōe-jī", &opts), "Peh8-oe7-ji7");
    assert_eq!(
        convert(Mode::TailoUnicodeToPojUnicodeCascade, "Tâi-uân", &opts),
        "Tâi-oân"
    );
}
