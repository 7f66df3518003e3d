#![cfg(test)]
use std::fs;
use std::path::PathBuf;

use scoper_common::network::address::parse_address;
use scoper_common::network::parser::parse_range;
use scoper_core::filter::{Highlighter, LineFilter, Mode};
use scoper_core::{input, loader};

/// Writes `contents` to a fresh file under the system temp dir.
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scoper-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

struct Marks;

impl Highlighter for Marks {
    fn in_scope(&self, text: &str) -> String {
        format!("<{text}>")
    }

    fn out_of_scope(&self, text: &str) -> String {
        format!("!{text}!")
    }
}

/// CLI ranges and file ranges end up in one scope, CLI first.
#[test]
fn scope_from_cli_and_file() {
    let ranges_path = temp_file("ranges.txt", "192.168.1-2,5.0-255\n\nfe80::1:2:3:4/64\n");
    let cli = vec![parse_range("10.0.0.1_10.0.0.9").unwrap()];

    let scope = loader::load_scope(cli, Some(&ranges_path)).unwrap();
    assert_eq!(scope.len(), 3);
    assert_eq!(scope.ranges()[0].to_string(), "10.0.0.1_10.0.0.9");

    for hit in ["10.0.0.5", "192.168.5.0", "fe80::ffff:ffff:ffff:ffff"] {
        assert!(scope.contains(parse_address(hit).unwrap()), "{hit} should be in scope");
    }
    for miss in ["10.0.0.10", "192.168.3.0", "fe81::1"] {
        assert!(!scope.contains(parse_address(miss).unwrap()), "{miss} should be out of scope");
    }
}

#[test]
fn invalid_line_in_range_file_aborts() {
    let ranges_path = temp_file("bad-ranges.txt", "10.0.0.0/8\nfe80::1::2\n");
    let err = loader::load_scope(Vec::new(), Some(&ranges_path)).unwrap_err();
    assert_eq!(err.to_string(), "invalid IP range: \"fe80::1::2\"");
}

#[test]
fn empty_range_file_is_empty_scope() {
    let ranges_path = temp_file("empty-ranges.txt", "\n\n");
    let err = loader::load_scope(Vec::new(), Some(&ranges_path)).unwrap_err();
    assert_eq!(err.to_string(), "empty scope");
}

#[test]
fn filters_log_files_in_order() {
    let first = temp_file(
        "first.log",
        "accepted from 10.0.0.3\nrejected from 8.8.8.8\nv6 peer fe80::1:2:3:4\n",
    );
    let second = temp_file("second.log", "no address\n10.0.0.9 again\n");

    let scope = loader::load_scope(
        vec![parse_range("10.0.0.1_10.0.0.9").unwrap(), parse_range("fe80::1:2:3:1,2,4-a").unwrap()],
        None,
    )
    .unwrap();
    let inputs = input::open_inputs(&[first, second], false).unwrap();

    let filter = LineFilter::new(&scope, Mode::Match, 2);
    let mut out = Vec::new();
    let stats = filter.run_inputs(inputs, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "accepted from 10.0.0.3\nv6 peer fe80::1:2:3:4\n10.0.0.9 again\n"
    );
    assert_eq!(stats.lines, 5);
    assert_eq!(stats.emitted, 3);
}

#[test]
fn highlight_prints_every_line() {
    let log = temp_file("highlight.log", "10.0.0.1 -> 8.8.8.8\nquiet line\n");
    let scope = loader::load_scope(vec![parse_range("10.0.0.0/8").unwrap()], None).unwrap();
    let inputs = input::open_inputs(&[log], false).unwrap();

    let filter = LineFilter::new(&scope, Mode::Highlight(&Marks), 16);
    let mut out = Vec::new();
    filter.run_inputs(inputs, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "<10.0.0.1> -> !8.8.8.8!\nquiet line\n");
}

#[test]
fn missing_input_file() {
    let err = input::open_inputs(&[PathBuf::from("/no/such/input.log")], false).unwrap_err();
    assert_eq!(err.to_string(), "no such file: \"/no/such/input.log\"");
}
