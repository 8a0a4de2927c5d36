use std::fs;
use std::process;

use harf_core::{Config, Transliterator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn config_export() {
    print!("{}", Config::default_json());
}

pub fn config_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(Config::from_json_str(&content), "Error: {}");
    let engine = die!(Transliterator::compile(&config), "Error: {}");
    println!(
        "OK: {} rules compiled, enabled={}, applyRulesInOrder={}",
        engine.rule_count(),
        config.enabled,
        config.apply_rules_in_order
    );
}
