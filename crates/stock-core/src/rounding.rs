//! Fixed-precision rounding for quantities and money.

/// Decimal places shown for quantities.
pub const QUANTITY_PLACES: u32 = 3;

/// Decimal places used for prices and order totals.
pub const MONEY_PLACES: u32 = 2;

/// Round `value` to `places` decimals, halves away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid rendering "-0.000" for tiny negative residues.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn round_quantity(value: f64) -> f64 {
    round_to(value, QUANTITY_PLACES)
}

pub fn round_money(value: f64) -> f64 {
    round_to(value, MONEY_PLACES)
}

/// Format a quantity with three decimals ("12.000").
pub fn format_quantity(value: f64) -> String {
    format!("{:.*}", QUANTITY_PLACES as usize, round_quantity(value))
}

/// Format a price or total with two decimals ("10.00").
pub fn format_money(value: f64) -> String {
    format!("{:.*}", MONEY_PLACES as usize, round_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(2.5 * 4.0), 10.0);
        assert_eq!(round_money(4.14159), 4.14);
        assert_eq!(round_money(2.675_000_1), 2.68);
    }

    #[test]
    fn test_round_quantity() {
        assert_eq!(round_quantity(0.1 + 0.2), 0.3);
        assert_eq!(round_quantity(12.000_4), 12.0);
        assert_eq!(round_quantity(-1.2346), -1.235);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        assert_eq!(format_quantity(-0.000_01), "0.000");
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_quantity(15.0), "15.000");
        assert_eq!(format_money(10.0), "10.00");
        assert_eq!(format_money(7.499), "7.50");
    }
}
