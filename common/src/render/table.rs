//! # Representation Table
//!
//! Every line `ipv4mix` prints, in print order, as plain data.
//!
//! A line is a dot-joined list of components. Each component reads either a
//! single field or a big-endian pack of the trailing fields, and writes it in
//! one [`Radix`]. Rendering never validates: out-of-range fields are written
//! as they are.

use crate::network::octets::Octets;
use crate::render::numeral::Radix;

/// Where a component takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// One field, `0..4`.
    Octet(usize),
    /// Fields from the given index to the end, packed big-endian.
    Packed(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub source: Source,
    pub radix: Radix,
}

impl Component {
    pub fn render(&self, octets: &Octets) -> String {
        let value = match self.source {
            Source::Octet(idx) => octets.get(idx),
            Source::Packed(from) => octets.packed(from),
        };
        self.radix.render(value)
    }
}

/// Families of lines, in the order they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Four fields, one radix throughout.
    Dotted,
    /// Four fields, radices mixed.
    Mixed,
    /// The whole address as one number.
    Whole,
    /// `a.b.N` where N packs the last two fields.
    LastTwoCombined,
    /// `a.N` where N packs the last three fields.
    LastThreeCombined,
    /// Octal `a.b`, then the last two fields packed.
    OctalLastTwoCombined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Representation {
    pub group: Group,
    pub components: &'static [Component],
}

impl Representation {
    pub fn render(&self, octets: &Octets) -> String {
        self.components
            .iter()
            .map(|component| component.render(octets))
            .collect::<Vec<String>>()
            .join(".")
    }
}

const fn dec(idx: usize) -> Component {
    Component { source: Source::Octet(idx), radix: Radix::Decimal }
}

const fn hex(idx: usize) -> Component {
    Component { source: Source::Octet(idx), radix: Radix::Hex }
}

const fn oct(idx: usize) -> Component {
    Component { source: Source::Octet(idx), radix: Radix::Octal }
}

const fn packed(from: usize, radix: Radix) -> Component {
    Component { source: Source::Packed(from), radix }
}

/// All representations in print order.
pub static REPRESENTATIONS: &[Representation] = &[
    Representation { group: Group::Dotted, components: &[dec(0), dec(1), dec(2), dec(3)] },
    Representation { group: Group::Dotted, components: &[hex(0), hex(1), hex(2), hex(3)] },
    Representation { group: Group::Dotted, components: &[oct(0), oct(1), oct(2), oct(3)] },
    Representation { group: Group::Mixed, components: &[dec(0), hex(1), dec(2), dec(3)] },
    Representation { group: Group::Mixed, components: &[dec(0), dec(1), hex(2), dec(3)] },
    Representation { group: Group::Mixed, components: &[dec(0), dec(1), dec(2), hex(3)] },
    Representation { group: Group::Mixed, components: &[dec(0), oct(1), dec(2), dec(3)] },
    Representation { group: Group::Mixed, components: &[dec(0), dec(1), oct(2), dec(3)] },
    Representation { group: Group::Mixed, components: &[dec(0), dec(1), dec(2), oct(3)] },
    Representation { group: Group::Mixed, components: &[hex(0), dec(1), dec(2), dec(3)] },
    Representation { group: Group::Mixed, components: &[hex(0), hex(1), dec(2), dec(3)] },
    Representation { group: Group::Mixed, components: &[hex(0), dec(1), hex(2), dec(3)] },
    Representation { group: Group::Mixed, components: &[hex(0), dec(1), dec(2), hex(3)] },
    Representation { group: Group::Mixed, components: &[oct(0), oct(1), dec(2), dec(3)] },
    Representation { group: Group::Mixed, components: &[dec(0), hex(1), dec(2), hex(3)] },
    Representation { group: Group::Mixed, components: &[dec(0), hex(1), hex(2), dec(3)] },
    Representation { group: Group::Whole, components: &[packed(0, Radix::Decimal)] },
    Representation { group: Group::Whole, components: &[packed(0, Radix::Hex)] },
    Representation { group: Group::Whole, components: &[packed(0, Radix::Octal)] },
    Representation { group: Group::LastTwoCombined, components: &[dec(0), dec(1), packed(2, Radix::Decimal)] },
    Representation { group: Group::LastTwoCombined, components: &[dec(0), hex(1), packed(2, Radix::Decimal)] },
    Representation { group: Group::LastTwoCombined, components: &[dec(0), oct(1), packed(2, Radix::Decimal)] },
    Representation { group: Group::LastThreeCombined, components: &[dec(0), packed(1, Radix::Decimal)] },
    Representation { group: Group::LastThreeCombined, components: &[hex(0), packed(1, Radix::Decimal)] },
    Representation { group: Group::LastThreeCombined, components: &[oct(0), packed(1, Radix::Decimal)] },
    Representation { group: Group::OctalLastTwoCombined, components: &[oct(0), oct(1), packed(2, Radix::Decimal)] },
    Representation { group: Group::OctalLastTwoCombined, components: &[oct(0), oct(1), packed(2, Radix::Hex)] },
    Representation { group: Group::OctalLastTwoCombined, components: &[oct(0), oct(1), packed(2, Radix::Octal)] },
];

/// Renders every representation of `octets`, in print order.
pub fn lines(octets: &Octets) -> impl Iterator<Item = String> + '_ {
    REPRESENTATIONS.iter().map(move |repr| repr.render(octets))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const EIGHTS: [&str; 28] = [
        "8.8.8.8",
        "0x8.0x8.0x8.0x8",
        "010.010.010.010",
        "8.0x8.8.8",
        "8.8.0x8.8",
        "8.8.8.0x8",
        "8.010.8.8",
        "8.8.010.8",
        "8.8.8.010",
        "0x8.8.8.8",
        "0x8.0x8.8.8",
        "0x8.8.0x8.8",
        "0x8.8.8.0x8",
        "010.010.8.8",
        "8.0x8.8.0x8",
        "8.0x8.0x8.8",
        "134744072",
        "0x8080808",
        "01002004010",
        "8.8.2056",
        "8.0x8.2056",
        "8.010.2056",
        "8.526344",
        "0x8.526344",
        "010.526344",
        "010.010.2056",
        "010.010.0x808",
        "010.010.04010",
    ];

    #[test]
    fn test_eights_line_by_line() {
        let rendered: Vec<String> = lines(&Octets::new([8, 8, 8, 8])).collect();
        assert_eq!(rendered.len(), EIGHTS.len());
        for (idx, (got, want)) in rendered.iter().zip(EIGHTS).enumerate() {
            assert_eq!(got, want, "line {idx} differs");
        }
    }

    #[test]
    fn test_group_order_and_sizes() {
        let groups: Vec<Group> = REPRESENTATIONS.iter().map(|r| r.group).collect();
        let count = |g: Group| groups.iter().filter(|x| **x == g).count();

        assert_eq!(count(Group::Dotted), 3);
        assert_eq!(count(Group::Mixed), 13);
        assert_eq!(count(Group::Whole), 3);
        assert_eq!(count(Group::LastTwoCombined), 3);
        assert_eq!(count(Group::LastThreeCombined), 3);
        assert_eq!(count(Group::OctalLastTwoCombined), 3);

        // groups are contiguous and in print order
        let mut order = groups.clone();
        order.dedup();
        assert_eq!(
            order,
            vec![
                Group::Dotted,
                Group::Mixed,
                Group::Whole,
                Group::LastTwoCombined,
                Group::LastThreeCombined,
                Group::OctalLastTwoCombined,
            ]
        );
    }

    #[test]
    fn test_first_line_is_dotted_decimal() {
        for fields in [[0, 0, 0, 0], [192, 168, 1, 254], [255, 255, 255, 255]] {
            let octets = Octets::new(fields);
            assert_eq!(lines(&octets).next(), Some(octets.to_string()));
        }
    }

    #[test]
    fn test_unmasked_fields_render_as_is() {
        let rendered: Vec<String> = lines(&Octets::new([300, 1, 0, 1])).collect();
        assert_eq!(rendered[0], "300.1.0.1");
        assert_eq!(rendered[1], "0x12C.0x1.0x0.0x1");
        assert_eq!(rendered[2], "0454.01.00.01");
        assert_eq!(rendered[16], ((300u64 << 24) | (1 << 16) | 1).to_string());
    }
}
