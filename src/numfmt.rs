//! 메시지용 숫자 서식.

/// 천 단위 구분 기호(,)를 넣어 숫자를 표시한다. 소수부는 최대 3자리까지 남긴다.
///
/// `24000.0` → `"24,000"`, `1234.5` → `"1,234.5"`
pub fn thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_digits = (abs.trunc() as u64).to_string();

    let mut out = String::with_capacity(int_digits.len() + 8);
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let frac = abs - abs.trunc();
    if frac > 0.0 {
        let frac_text = format!("{frac:.3}");
        let frac_text = frac_text.trim_start_matches('0').trim_end_matches('0');
        if frac_text != "." {
            out.push_str(frac_text);
        }
    }

    if negative {
        format!("-{out}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::thousands;

    #[test]
    fn groups_integer_digits() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(950.0), "950");
        assert_eq!(thousands(1400.0), "1,400");
        assert_eq!(thousands(500_000.0), "500,000");
        assert_eq!(thousands(-3000.0), "-3,000");
    }

    #[test]
    fn keeps_short_fraction() {
        assert_eq!(thousands(1234.5), "1,234.5");
    }
}
