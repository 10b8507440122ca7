//! Where the tone marker goes inside a syllable.
//!
//! Every function here takes the plain ASCII letters of one syllable and
//! returns the byte index the marker is inserted at (right after the
//! letter that carries the tone). An index of `letters.len()` means the
//! syllable has no anchor and the marker stays at the end.

use crate::normalize::decompose;
use crate::orthography::Orthography;
use crate::standard::Standard;
use crate::tone::Tone;

fn lower_at(letters: &[u8], i: usize) -> Option<u8> {
    letters.get(i).map(u8::to_ascii_lowercase)
}

fn is_vowel(b: u8) -> bool {
    matches!(b.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u')
}

/// `r? m? n* h? g? p? t? k?`, case-insensitive.
fn is_coda(rest: &[u8]) -> bool {
    let mut i = 0;
    for (letter, repeat) in [
        (b'r', false),
        (b'm', false),
        (b'n', true),
        (b'h', false),
        (b'g', false),
        (b'p', false),
        (b't', false),
        (b'k', false),
    ] {
        while lower_at(rest, i) == Some(letter) {
            i += 1;
            if !repeat {
                break;
            }
        }
    }
    i == rest.len()
}

/// Syllabic `ng`/`ngh` takes the tone on the `n`, else syllabic `m`/`mh`
/// on the `m`.
fn place_syllabic_nasal(letters: &[u8]) -> usize {
    let rest_is = |from: usize, options: &[&[u8]]| {
        options.iter().any(|o| letters[from..].eq_ignore_ascii_case(o))
    };
    if let Some(n) = (0..letters.len())
        .find(|&i| letters[i].eq_ignore_ascii_case(&b'n') && rest_is(i + 1, &[b"g", b"gh"]))
    {
        return n + 1;
    }
    if let Some(m) = (0..letters.len())
        .find(|&i| letters[i].eq_ignore_ascii_case(&b'm') && rest_is(i + 1, &[b"", b"h"]))
    {
        return m + 1;
    }
    letters.len()
}

/// Tâi-lô: after the first vowel followed only by coda letters, moved
/// back onto the first vowel of `[aeo][iueo]` (`kai` → `kâi`, `koo` → `kóo`).
pub fn place_tailo(letters: &str) -> usize {
    let bytes = letters.as_bytes();
    if !bytes.iter().copied().any(is_vowel) {
        return place_syllabic_nasal(bytes);
    }
    let mut at = (0..bytes.len())
        .find(|&i| is_vowel(bytes[i]) && is_coda(&bytes[i + 1..]))
        .map_or(bytes.len(), |v| v + 1);
    if at >= 2
        && matches!(lower_at(bytes, at - 2), Some(b'a' | b'e' | b'o'))
        && matches!(lower_at(bytes, at - 1), Some(b'i' | b'u' | b'e' | b'o'))
    {
        at -= 1;
    }
    at
}

/// POJ: after the first `a`/`e`, else `o`, else `u`, else `i`.
///
/// `oa`/`oe` followed by nothing or `nn` moves the tone onto the `o`. The
/// Campbell standard requires an initial before that `o` and marks tone 8
/// `ainnh` on the `i`.
pub fn place_poj(letters: &str, tone: Option<Tone>, standard: Standard) -> usize {
    let bytes = letters.as_bytes();
    let policy = standard.policy();
    let first = |targets: &[u8]| {
        bytes
            .iter()
            .position(|b| targets.contains(&b.to_ascii_lowercase()))
    };
    let Some(anchor) = first(b"ae")
        .or_else(|| first(b"o"))
        .or_else(|| first(b"u"))
        .or_else(|| first(b"i"))
    else {
        return place_syllabic_nasal(bytes);
    };
    let mut at = anchor + 1;

    let rest = &bytes[at..];
    let open_or_nasal = rest.is_empty() || rest.eq_ignore_ascii_case(b"nn");
    let min_at = if policy.glide_needs_initial { 3 } else { 2 };
    if at >= min_at
        && open_or_nasal
        && matches!(lower_at(bytes, at - 1), Some(b'a' | b'e'))
        && lower_at(bytes, at - 2) == Some(b'o')
    {
        at -= 1;
    }

    if policy.ainnh_on_i
        && tone.map(Tone::number) == Some(8)
        && lower_at(bytes, at - 1) == Some(b'a')
        && lower_at(bytes, at) == Some(b'i')
        && bytes
            .get(at + 1..at + 4)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(b"nnh"))
    {
        at += 1;
    }
    at
}

/// Insertion index for `letters` in the given orthography.
pub fn place(letters: &str, tone: Option<Tone>, orthography: Orthography, standard: Standard) -> usize {
    match orthography {
        Orthography::Tailo => place_tailo(letters),
        Orthography::Poj => place_poj(letters, tone, standard),
    }
}

/// Move a marker written at the end of a syllable (`kai5`, `kai\u{302}`)
/// to where it belongs. Anything that is not ASCII letters plus one
/// trailing digit or tone mark is returned unchanged.
pub fn relocate(syllable: &str, orthography: Orthography, standard: Standard) -> String {
    let syllable = decompose(syllable);
    let Some(marker) = syllable.chars().last() else {
        return syllable;
    };
    let tone = Tone::from_digit(marker).or_else(|| orthography.table().tone_of(marker));
    let letters = &syllable[..syllable.len() - marker.len_utf8()];
    if tone.is_none() || letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
        return syllable;
    }
    let at = place(letters, tone, orthography, standard);
    let mut out = String::with_capacity(syllable.len());
    out.push_str(&letters[..at]);
    out.push(marker);
    out.push_str(&letters[at..]);
    out
}
