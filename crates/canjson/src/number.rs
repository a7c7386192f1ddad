use crate::error::{Error, Result};
use crate::value::UnsupportedKind;

/// Format a finite f64 as the shortest JSON number that round-trips.
/// - integral values carry no fraction (`1`, not `1.0`)
/// - -0 normalized to 0
/// - magnitudes below 1e-6 or at/above 1e21 use exponent form (`1e+21`, `1e-7`)
/// - NaN and infinities are rejected
pub(crate) fn format_canonical_f64(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(Error::unsupported(UnsupportedKind::NonFinite));
    }
    if value == 0.0 {
        return Ok(String::from("0"));
    }

    let magnitude = value.abs();
    let mut buf = ryu::Buffer::new();
    let (digits, point) = decompose(buf.format_finite(magnitude));

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }
    if !(1e-6..1e21).contains(&magnitude) {
        push_exponent(&mut out, &digits, point);
    } else {
        push_fixed(&mut out, &digits, point);
    }
    Ok(out)
}

/// Widen an f32 to the f64 closest to its shortest decimal text, so `0.1f32`
/// formats as `0.1` instead of its exact binary expansion.
pub(crate) fn widen_f32(value: f32) -> f64 {
    if !value.is_finite() {
        return f64::from(value);
    }
    let mut buf = ryu::Buffer::new();
    buf.format_finite(value).parse::<f64>().unwrap_or(f64::from(value))
}

/// Split ryu output into significant digits and the decimal point position.
/// The value equals `0.<digits> * 10^point`.
fn decompose(raw: &str) -> (Vec<u8>, i32) {
    let (mantissa, exp) = match raw.find(['e', 'E']) {
        Some(idx) => (&raw[..idx], raw[idx + 1..].parse::<i32>().unwrap_or(0)),
        None => (raw, 0),
    };
    let int_len = mantissa.find('.').unwrap_or(mantissa.len()) as i32;
    let mut digits: Vec<u8> = mantissa.bytes().filter(|b| *b != b'.').collect();

    let leading = digits.iter().take_while(|d| **d == b'0').count();
    digits.drain(..leading);
    while digits.last() == Some(&b'0') {
        digits.pop();
    }
    (digits, int_len + exp - leading as i32)
}

fn push_fixed(out: &mut String, digits: &[u8], point: i32) {
    let len = digits.len() as i32;
    if point <= 0 {
        out.push_str("0.");
        out.extend(core::iter::repeat_n('0', (-point) as usize));
        out.extend(digits.iter().map(|d| *d as char));
    } else if point >= len {
        out.extend(digits.iter().map(|d| *d as char));
        out.extend(core::iter::repeat_n('0', (point - len) as usize));
    } else {
        let split = point as usize;
        out.extend(digits[..split].iter().map(|d| *d as char));
        out.push('.');
        out.extend(digits[split..].iter().map(|d| *d as char));
    }
}

fn push_exponent(out: &mut String, digits: &[u8], point: i32) {
    out.push(digits[0] as char);
    if digits.len() > 1 {
        out.push('.');
        out.extend(digits[1..].iter().map(|d| *d as char));
    }
    let exp = point - 1;
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&exp.unsigned_abs().to_string());
}
