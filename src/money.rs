//! 금액/비율 표시용 포맷터. 통화는 달러 하나만 다룬다.

use crate::investment::growth::round_half_up;

pub const CURRENCY_SYMBOL: &str = "$";

/// 입력값 그대로 표시한다. (8500 → "$8500", 8500.5 → "$8500.5")
pub fn plain(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value}")
}

/// 정수 단위로 반올림 후 천 단위 구분 기호를 넣는다. (107143.85 → "$107,144")
pub fn grouped(value: f64) -> String {
    let rounded = round_half_up(value);
    if !rounded.is_finite() {
        return format!("{CURRENCY_SYMBOL}{rounded}");
    }
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        format!("-{CURRENCY_SYMBOL}{out}")
    } else {
        format!("{CURRENCY_SYMBOL}{out}")
    }
}

/// 소수 둘째 자리까지 표시하는 비율.
pub fn percent(value: f64) -> String {
    format!("{}%", fixed2(value))
}

/// 소수 둘째 자리 고정 표기. 정확히 절반인 값(x.xx5)은 0에서 먼 쪽으로 올린다.
///
/// `{:.2}`는 이 경우 짝수 쪽으로 내린다(0.125 → "0.12").
pub fn fixed2(value: f64) -> String {
    let scaled = value * 100.0;
    // 이진수로 정확히 x.xx5가 되는 값은 1/8의 홀수배뿐이다.
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        let away = scaled + 0.5_f64.copysign(scaled);
        return format!("{:.2}", away / 100.0);
    }
    format!("{value:.2}")
}
