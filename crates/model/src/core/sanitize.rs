//! Value normalization applied before statement assembly.

/// Normalizes a decimal written with `,`/`.` separators into an `f64`.
///
/// Every comma becomes a period first. If the result still contains more
/// than one period, all but the last are treated as thousands separators
/// and removed. A trailing non-numeric suffix (currency markers and the
/// like) is dropped before parsing. Unparsable input yields `0.0` instead
/// of an error, so a stray non-numeric cell never aborts an import on its
/// own.
pub fn sanitize_decimal(raw: &str) -> f64 {
    let normalized = raw.replace(',', ".");

    let cleaned = match normalized.rfind('.') {
        Some(last) => {
            let mut out = String::with_capacity(normalized.len());
            for (idx, ch) in normalized.char_indices() {
                if ch == '.' && idx != last {
                    continue;
                }
                out.push(ch);
            }
            out
        }
        None => normalized,
    };

    numeric_prefix(cleaned.trim()).parse::<f64>().unwrap_or(0.0)
}

/// Longest prefix that still reads as a signed decimal number. Trailing
/// text such as a currency marker is ignored rather than poisoning the
/// whole value.
fn numeric_prefix(s: &str) -> &str {
    let mut dot_seen = false;
    let mut len = 0;
    for (idx, ch) in s.char_indices() {
        let numeric = match ch {
            '0'..='9' => true,
            '+' | '-' => idx == 0,
            '.' if !dot_seen => {
                dot_seen = true;
                true
            }
            _ => false,
        };
        if !numeric {
            break;
        }
        len = idx + ch.len_utf8();
    }
    &s[..len]
}
