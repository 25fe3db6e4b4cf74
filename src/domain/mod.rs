pub mod estimate;
pub mod normalize;
pub mod recommend;
pub mod stats;

/// "GH₵4,500" style formatting used in reasons, reports and templates.
pub fn format_cedis(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("GH₵{sign}{}", group_thousands(amount.unsigned_abs()))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}


#[cfg(test)]
mod tests {
    use super::format_cedis;

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_cedis(0), "GH₵0");
        assert_eq!(format_cedis(950), "GH₵950");
        assert_eq!(format_cedis(4500), "GH₵4,500");
        assert_eq!(format_cedis(1234567), "GH₵1,234,567");
        assert_eq!(format_cedis(-2500), "GH₵-2,500");
    }
}
