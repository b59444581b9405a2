//! Benchmark profiles for the lifegrid simulation engine.
//!
//! - [`reference_profile`]: 128x128 grid (16K cells), 35% random soup
//! - [`stress_profile`]: 512x512 grid (~262K cells), 35% random soup

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_engine::WorldConfig;
use lifegrid_test_utils::random_soup;

/// Soup density used by the profiles, in percent.
pub const SOUP_DENSITY: u32 = 35;

/// 128x128 torus seeded with a deterministic soup.
pub fn reference_profile(seed: u64, iterations: u64) -> WorldConfig {
    soup_profile(128, 128, seed, iterations)
}

/// 512x512 torus seeded with a deterministic soup.
pub fn stress_profile(seed: u64, iterations: u64) -> WorldConfig {
    soup_profile(512, 512, seed, iterations)
}

fn soup_profile(rows: u32, cols: u32, seed: u64, iterations: u64) -> WorldConfig {
    WorldConfig {
        rows,
        cols,
        alive: random_soup(rows, cols, SOUP_DENSITY, seed),
        iterations,
    }
}
