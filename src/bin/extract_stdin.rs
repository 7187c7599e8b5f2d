//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Runs generic extraction only; no network access. The page URL, used for
//! site-specific rules, is the optional first argument.

use rs_readable::{extract_from_html, Options};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    tag: Option<String>,
    text: String,
    html: String,
}

fn main() {
    let url = std::env::args().nth(1).unwrap_or_default();

    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let extracted = extract_from_html(&url, &html, &Options::default());

    let output = match extracted.fragment() {
        Some(fragment) => Output {
            tag: fragment.tag_name(),
            text: fragment.text(),
            html: fragment.html(),
        },
        None => Output {
            tag: None,
            text: String::new(),
            html: extracted.html(),
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
