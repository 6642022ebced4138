#![cfg(test)]
use ipv4mix_common::error::AddrError;
use ipv4mix_common::network::notation;
use ipv4mix_common::network::octets::Octets;
use ipv4mix_common::render::table;
use std::net::Ipv4Addr;

fn convert(input: &str) -> anyhow::Result<(Vec<AddrError>, Vec<String>)> {
    let mut advisories = Vec::new();
    let octets = notation::parse_with_advisory(input, |e| advisories.push(e))?;
    Ok((advisories, table::lines(&octets).collect()))
}

/// Every shorthand spelling of 8.8.8.8 yields the identical output block.
#[test]
fn shorthand_spellings_agree() {
    let (_, reference) = convert("8.8.8.8").unwrap();

    for spelling in [
        "134744072",
        "8.526344",
        "8.8.2056",
        "010.010.010.010",
        "010.526344",
        "010.010.2056",
        "8.010.8.010",
    ] {
        let (_, lines) = convert(spelling).unwrap();
        assert_eq!(lines, reference, "spelling {spelling} differs");
    }
}

#[test]
fn strict_dotted_input_has_no_advisory() {
    for input in ["0.0.0.0", "8.8.8.8", "192.168.1.254", "255.255.255.255"] {
        let (advisories, lines) = convert(input).unwrap();
        assert!(advisories.is_empty(), "unexpected advisory for {input}");
        assert_eq!(lines[0], input);
    }
}

#[test]
fn whole_value_resplits_to_the_octets() {
    for addr in [
        Ipv4Addr::new(10, 0, 0, 1),
        Ipv4Addr::new(172, 16, 254, 3),
        Ipv4Addr::new(255, 0, 255, 0),
    ] {
        let (_, lines) = convert(&addr.to_string()).unwrap();
        let whole: u32 = lines[16].parse().unwrap();
        assert_eq!(Ipv4Addr::from(whole), addr);

        let octets = notation::parse(&whole.to_string()).unwrap();
        assert_eq!(Ipv4Addr::try_from(octets), Ok(addr));
    }
}

#[test]
fn two_part_input_splits_the_tail_over_three_octets() {
    let octets = notation::parse("012.65793").unwrap();
    assert_eq!(octets, Octets::new([10, 1, 1, 1]));
}

#[test]
fn out_of_range_input_is_advised_then_processed() {
    let (advisories, lines) = convert("999.1.1.1").unwrap();
    assert_eq!(advisories, vec![AddrError::NotStrict("999.1.1.1".to_string())]);
    assert_eq!(lines[0], "999.1.1.1");
    assert_eq!(lines[1], "0x3E7.0x1.0x1.0x1");
}

#[test]
fn malformed_input_produces_no_lines() {
    assert!(convert("8.8.8.x").is_err());
    assert!(convert("1.2.3.4.5").is_err());
    assert!(convert("").is_err());

    let err = convert("8.8.8.x").unwrap_err();
    assert!(err.to_string().contains("\"x\""), "error: {err}");
}
