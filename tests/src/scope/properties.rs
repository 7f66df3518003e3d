#![cfg(test)]
use scoper_common::network::address::{Address, Family, parse_address};
use scoper_common::network::parser::parse_range;
use scoper_common::network::range::Range;

fn ip(s: &str) -> Address {
    parse_address(s).unwrap()
}

fn bounds(range: &Range) -> (Address, Address) {
    match range {
        Range::Bound(b) => (b.low(), b.high()),
        Range::Segmented(_) => panic!("expected a bound range, got {range}"),
    }
}

/// Edges are inside, their neighbours outside.
#[test]
fn bound_edges_and_neighbours() {
    for input in [
        "10.0.0.0/8",
        "192.168.1.0/22",
        "192.168.2.254_192.168.1.0",
        "172.16.5.10",
        "fe80::1:2:3:4/64",
        "fe80::1:2:3:4_fe80::1:2:3:50",
        "0.0.0.0/0",
        "::/0",
    ] {
        let range = parse_range(input).unwrap();
        let (low, high) = bounds(&range);

        assert!(range.matches(low), "{input}: low");
        assert!(range.matches(high), "{input}: high");
        if let Some(below) = low.checked_sub(1) {
            assert!(!range.matches(below), "{input}: below low");
        }
        if let Some(above) = high.checked_add(1) {
            assert!(!range.matches(above), "{input}: above high");
        }
    }
}

/// A prefix of `p` bits matches exactly the addresses sharing those top bits.
#[test]
fn cidr_matches_top_bits() {
    let base = ip("172.16.200.77");
    for prefix in 0..=32u32 {
        let range = parse_range(&format!("{base}/{prefix}")).unwrap();
        let mask = if prefix == 0 { 0 } else { u32::MAX << (32 - prefix) };

        for probe in ["172.16.200.77", "172.16.200.76", "172.16.0.1", "172.17.0.0", "10.0.0.1", "255.255.255.255", "0.0.0.0"] {
            let addr = ip(probe);
            let same_top = (addr.value() as u32 & mask) == (base.value() as u32 & mask);
            assert_eq!(range.matches(addr), same_top, "{base}/{prefix} vs {probe}");
        }
    }
}

#[test]
fn cidr_v6_extremes() {
    let everything = parse_range("fe80::/0").unwrap();
    assert!(everything.matches(ip("::")));
    assert!(everything.matches(ip("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff")));

    let one = parse_range("fe80::1/128").unwrap();
    assert!(one.matches(ip("fe80::1")));
    assert!(!one.matches(ip("fe80::")));
}

#[test]
fn families_never_cross() {
    let v4 = ["0.0.0.0/0", "0.0.0.1", "0-255.0.0.1"];
    let v6 = ["::/0", "::1", "::0-ff"];

    for input in v4 {
        let range = parse_range(input).unwrap();
        assert_eq!(range.family(), Family::V4);
        assert!(!range.matches(ip("::1")), "{input}");
    }
    for input in v6 {
        let range = parse_range(input).unwrap();
        assert_eq!(range.family(), Family::V6);
        assert!(!range.matches(ip("0.0.0.1")), "{input}");
    }
}

#[test]
fn malformed_inputs_fail() {
    for input in ["999.1.1.1", "fe80::1::2", "192.168.1.0/33", "10.0.0.1_fe80::1", "1.2.3.4.5", "10.0.0.1-", "gg::1"] {
        assert!(parse_range(input).is_err(), "{input} should fail");
    }
}
