//! Match engine - pure compatibility scoring and ship-name blending
//!
//! Deterministic given its random source; all randomness is injected so
//! callers and tests control the outcome.

use rand::Rng;

use crate::value_objects::UserId;

/// Compatibility percentage between two users.
///
/// A user shipped with themselves is always a perfect 100; otherwise the
/// result is a uniform pick in `0..=100` from the provided source.
pub fn compatibility<R: Rng + ?Sized>(a: &UserId, b: &UserId, rng: &mut R) -> u8 {
    if a == b {
        100
    } else {
        rng.gen_range(0..=100)
    }
}

/// Blend two display names into a ship name.
///
/// Takes the first `floor(len/2)` characters of `a` and the characters of `b`
/// from index `floor(len/2)` onward. For an odd-length `b` the suffix is one
/// character longer than the prefix taken from `a`; this asymmetry is part of
/// the observable behavior and must not be "fixed".
pub fn blend_name(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let prefix = &a_chars[..a_chars.len() / 2];
    let suffix = &b_chars[b_chars.len() / 2..];

    prefix.iter().chain(suffix.iter()).collect()
}

/// Fixed comment for a compatibility percentage.
///
/// Five contiguous bands covering `0..=100`.
pub fn comment_for(percentage: u8) -> &'static str {
    if percentage <= 20 {
        "👋 time to say goodbye..."
    } else if percentage <= 40 {
        "😬 just stay friends bro!"
    } else if percentage <= 60 {
        "🤝 bff, nothing else!"
    } else if percentage <= 80 {
        "✨ yall got a chance!"
    } else {
        "perfect soulmates! go to the motel tonight or i will find u."
    }
}
