//! Random base color sampling

use rand::Rng;

use super::convert::hsl_to_hex;

/// Sample a random base color.
///
/// Saturation and lightness draw from restricted ranges so the result never
/// lands near white, black, or gray. The only non-deterministic operation in
/// the crate's core.
pub(crate) fn generate_random_color() -> String {
    let mut rng = rand::rng();
    let h = rng.random_range(0..360);
    let s = rng.random_range(50..90);
    let l = rng.random_range(40..70);
    hsl_to_hex(f64::from(h), f64::from(s), f64::from(l))
}
