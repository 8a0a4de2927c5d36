use std::fs;
use std::io::{self, Read};
use std::process;

use harf_core::{Config, Transliterator};
use serde::Serialize;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Load a configuration from `path`, or fall back to the embedded default.
fn load_config(path: Option<&str>) -> Config {
    match path {
        Some(p) => {
            let content = die!(fs::read_to_string(p), "Error reading {p}: {}");
            die!(Config::from_json_str(&content), "Error parsing {p}: {}")
        }
        None => Config::default(),
    }
}

#[derive(Serialize)]
struct ConvertReport<'a> {
    input: &'a str,
    output: String,
}

pub fn convert_cmd(text: &str, config_path: Option<&str>, json: bool) {
    let config = load_config(config_path);
    let engine = die!(Transliterator::compile(&config), "Error compiling rules: {}");

    let input = if text == "-" {
        let mut buf = String::new();
        die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
        buf
    } else {
        text.to_string()
    };

    let output = engine.transliterate_text(&input);
    if json {
        let report = ConvertReport {
            input: &input,
            output,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        println!("{output}");
    }
}

pub fn word_cmd(word: &str, config_path: Option<&str>) {
    let config = load_config(config_path);
    let engine = die!(Transliterator::compile(&config), "Error compiling rules: {}");
    println!("{}", engine.transliterate_word(word));
}
