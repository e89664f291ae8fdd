//! Stateless seeded noise.
//!
//! A single mulberry32 mixing step: the same input always yields the same
//! value in [0, 1). Brains derive inputs from their seed plus a time bucket,
//! so identical seeds replay identical jitter and trigger rolls.

/// Hash `seed` to a value in [0, 1).
pub fn noise(seed: u32) -> f64 {
    let mut t = seed.wrapping_add(0x6D2B_79F5);
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    f64::from(t ^ (t >> 14)) / 4_294_967_296.0
}

/// Seed for the `hz`-per-second bucket containing `time`.
pub fn bucket_seed(seed: u32, time: f64, hz: f64) -> u32 {
    let bucket = (time.max(0.0) * hz).floor();
    // Saturating float cast, then wrap into the seed space.
    seed.wrapping_add(bucket as u64 as u32)
}

/// Noise for the bucket containing `time`.
pub fn noise_at(seed: u32, time: f64, hz: f64) -> f64 {
    noise(bucket_seed(seed, time, hz))
}

/// Noise remapped to [-1, 1).
pub fn signed_noise_at(seed: u32, time: f64, hz: f64) -> f64 {
    (noise_at(seed, time, hz) - 0.5) * 2.0
}
