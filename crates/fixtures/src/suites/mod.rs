//! Registry of fixture suites, one per testbench interface

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::Suite;

pub mod aes_ctr;
pub mod aes_tot;
pub mod cmac;
pub mod snow_v;
pub mod zuc256;

/// Suite constructor
pub type SuiteFn = fn() -> Suite;

/// Emission order of the registered suites
pub const SUITE_ORDER: [&str; 5] = ["aes_tot", "cmac", "aes_ctr", "snow_v", "zuc256"];

/// Global registry of suite constructors
pub static REGISTRY: Lazy<HashMap<&'static str, SuiteFn>> = Lazy::new(|| {
    let mut m = HashMap::<&'static str, SuiteFn>::new();

    aes_tot::register(&mut m);
    cmac::register(&mut m);
    aes_ctr::register(&mut m);
    snow_v::register(&mut m);
    zuc256::register(&mut m);
    m
});

/// Helper function for registering suites
pub fn insert(map: &mut HashMap<&'static str, SuiteFn>, name: &'static str, suite: SuiteFn) {
    map.insert(name, suite);
}

/// Build a suite by name
pub fn suite(name: &str) -> Option<Suite> {
    REGISTRY.get(name).map(|f| f())
}

/// Build every registered suite, in emission order
pub fn all_suites() -> Vec<Suite> {
    SUITE_ORDER.iter().filter_map(|name| suite(name)).collect()
}
