//! Chinese cheque-text rendering with ten-thousand (4-digit) grouping.
//!
//! Traditional and Simplified scripts share the algorithm and differ only in
//! their lexicon tables.

use crate::Amount;

/// Glyph tables for one Chinese script.
///
/// Read-only data; the rendering logic lives once in this module.
pub(crate) struct ChineseLexicon {
    /// Banker's anti-fraud digits 零..玖.
    digits: [&'static str; 10],
    /// Positional units within a 4-digit group: 拾, 佰, 仟.
    units: [&'static str; 3],
    /// Scale markers between groups: ten-thousand, hundred-million.
    group_units: [&'static str; 2],
    /// Major unit 元.
    dollar: &'static str,
    /// Tenth of a dollar, 角.
    dime: &'static str,
    /// Hundredth of a dollar, 分.
    cent: &'static str,
    /// Appended when there are no cents: 正 or 整.
    terminator: &'static str,
}

pub(crate) const TRADITIONAL: ChineseLexicon = ChineseLexicon {
    digits: ["零", "壹", "貳", "參", "肆", "伍", "陸", "柒", "捌", "玖"],
    units: ["拾", "佰", "仟"],
    group_units: ["萬", "億"],
    dollar: "元",
    dime: "角",
    cent: "分",
    terminator: "正",
};

pub(crate) const SIMPLIFIED: ChineseLexicon = ChineseLexicon {
    digits: ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"],
    units: ["拾", "佰", "仟"],
    group_units: ["万", "亿"],
    dollar: "元",
    dime: "角",
    cent: "分",
    terminator: "整",
};

/// Render a validated amount in the given script.
pub(crate) fn render(amount: Amount, lex: &ChineseLexicon) -> String {
    // Fixed zero literal, never routed through the grouping code.
    if amount.is_zero() {
        return [lex.digits[0], lex.dollar, lex.terminator].concat();
    }

    let mut out = String::new();

    if amount.whole() > 0 {
        whole_number(&mut out, amount.whole(), lex);
    } else {
        out.push_str(lex.digits[0]);
    }
    out.push_str(lex.dollar);

    if amount.cents() > 0 {
        cents(&mut out, amount.cents(), lex);
    } else {
        out.push_str(lex.terminator);
    }

    out
}

/// Render a nonzero whole number (up to 99,999,999,999) in 4-digit groups.
fn whole_number(out: &mut String, mut n: u64, lex: &ChineseLexicon) {
    // Three groups cover the full range; groups[0] is the lowest order.
    let mut groups = [0u16; 3];
    let mut count = 0;
    while n > 0 {
        groups[count] = (n % 10_000) as u16;
        n /= 10_000;
        count += 1;
    }

    let mut gap = false;
    for i in (0..count).rev() {
        let group = groups[i];
        if group == 0 {
            // A fully zero group never renders; it widens the gap instead.
            gap = true;
            continue;
        }
        // One zero glyph bridges a gap across a group boundary, whether it
        // came from a skipped group or from leading zeros in this one.
        if !out.is_empty() && (gap || group < 1000) {
            out.push_str(lex.digits[0]);
        }
        gap = false;
        four_digits(out, group, lex);
        if i > 0 {
            out.push_str(lex.group_units[i - 1]);
        }
    }
}

/// Render one nonzero 4-digit group with positional units.
fn four_digits(out: &mut String, group: u16, lex: &ChineseLexicon) {
    let start = out.len();
    let mut pending_zero = false;
    for pos in (0..4u32).rev() {
        let digit = (group / 10u16.pow(pos)) % 10;
        if digit == 0 {
            pending_zero = true;
            continue;
        }
        // Consecutive zeros collapse to one glyph; a leading zero emits
        // nothing here (the caller owns the group-boundary gap).
        if pending_zero && out.len() > start {
            out.push_str(lex.digits[0]);
        }
        pending_zero = false;
        out.push_str(lex.digits[digit as usize]);
        if pos > 0 {
            out.push_str(lex.units[pos as usize - 1]);
        }
    }
    // A trailing zero run emits no glyph.
}

/// Render nonzero cents as 角/分 text.
fn cents(out: &mut String, cents: u8, lex: &ChineseLexicon) {
    let tens = cents / 10;
    let ones = cents % 10;

    if tens > 0 {
        out.push_str(lex.digits[tens as usize]);
        out.push_str(lex.dime);
    }
    if ones > 0 {
        if tens == 0 {
            out.push_str(lex.digits[0]);
            out.push_str(lex.dime);
        }
        out.push_str(lex.digits[ones as usize]);
        out.push_str(lex.cent);
    }
}
