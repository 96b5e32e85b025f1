// src/core/sanitize.rs

/// Column headers are compared trimmed and lowercased.
pub fn normalize_header(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lenient numeric cell: trims, accepts a leading '+', rejects NaN/inf.
/// Empty or unparseable → None.
pub fn parse_num(cell: &str) -> Option<f64> {
    let t = cell.trim();
    let t = t.strip_prefix('+').unwrap_or(t);
    if t.is_empty() { return None; }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest round-trip text; `-120.0` → "-120", `20.5` → "20.5". None → "".
pub fn fmt_num(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{}", x),
        None => s!(),
    }
}

/// Display-only rounding to one decimal.
pub fn fmt_1dp(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.1}", x),
        None => s!(),
    }
}

/// Fold a player name for matching against the provider's index:
/// strips diacritics from Latin letters, lowercases, collapses whitespace.
/// "Nikola Jokić" and "nikola  jokic" fold to the same key.
pub fn fold_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in normalize_ws(name).chars() {
        match fold_char(ch) {
            Some(s) => out.push_str(s),
            None if ch.is_ascii() => out.push(ch.to_ascii_lowercase()),
            // Anything else without an ASCII form is dropped.
            None => {}
        }
    }
    out
}

fn fold_char(ch: char) -> Option<&'static str> {
    let s = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą'
        | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "a",
        'ç' | 'ć' | 'č' | 'Ç' | 'Ć' | 'Č' => "c",
        'ď' | 'đ' | 'Ď' | 'Đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě'
        | 'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => "e",
        'ğ' | 'Ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' | 'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' | 'İ' => "i",
        'ķ' | 'Ķ' => "k",
        'ĺ' | 'ľ' | 'ł' | 'ļ' | 'Ĺ' | 'Ľ' | 'Ł' | 'Ļ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' | 'Ñ' | 'Ń' | 'Ň' | 'Ņ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő'
        | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => "o",
        'ŕ' | 'ř' | 'Ŕ' | 'Ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' | 'Ś' | 'Š' | 'Ş' | 'Ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' | 'Ť' | 'Ţ' | 'Ț' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų'
        | 'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' | 'Ų' => "u",
        'ý' | 'ÿ' | 'Ý' | 'Ÿ' => "y",
        'ź' | 'ż' | 'ž' | 'Ź' | 'Ż' | 'Ž' => "z",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        _ => return None,
    };
    Some(s)
}
