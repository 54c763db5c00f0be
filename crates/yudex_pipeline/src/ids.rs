//! Id derivation and filename sanitization helpers.

/// Prefix of every yudex id, e.g. `Y0001`.
pub const ID_PREFIX: &str = "Y";

/// Generation tag stamped on every entry this batch produces.
pub const WORLD_GEN: &str = "Y";

/// Derive a yudex id from a source filename, e.g.
/// `0001-妙蛙种子.json` -> `Y0001`. Returns `None` unless the first four
/// characters are all ASCII decimal digits.
pub fn id_from_filename(file_name: &str) -> Option<String> {
    let digits: String = file_name.chars().take(4).collect();
    if digits.chars().count() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(format!("{}{}", ID_PREFIX, digits))
    } else {
        None
    }
}

/// Format a running counter as a yudex id (`1` -> `Y0001`).
pub fn format_yudex_id(index: u32) -> String {
    format!("{}{:04}", ID_PREFIX, index)
}

/// Sanitize a type name into a filename stem: every character that is not
/// alphanumeric, `-`, or `_` becomes `_`. Alphanumeric is Unicode-aware,
/// so CJK type names pass through unchanged.
pub fn sanitize_type_name(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_filename() {
        assert_eq!(id_from_filename("0001-妙蛙种子.json"), Some("Y0001".to_string()));
        assert_eq!(id_from_filename("0151.json"), Some("Y0151".to_string()));
        // Dash lands inside the first four characters
        assert_eq!(id_from_filename("001-x.json"), None);
        assert_eq!(id_from_filename("starter.json"), None);
        assert_eq!(id_from_filename("01.json"), None);
        // Fullwidth digits are not decimal digits
        assert_eq!(id_from_filename("００１２.json"), None);
    }

    #[test]
    fn test_format_yudex_id() {
        assert_eq!(format_yudex_id(1), "Y0001");
        assert_eq!(format_yudex_id(123), "Y0123");
        assert_eq!(format_yudex_id(10000), "Y10000"); // width grows past 9999
    }

    #[test]
    fn test_sanitize_type_name() {
        assert_eq!(sanitize_type_name("Normal"), "Normal");
        assert_eq!(sanitize_type_name("Flying/Normal"), "Flying_Normal");
        assert_eq!(sanitize_type_name("一般"), "一般");
        assert_eq!(sanitize_type_name("Fairy Dust!"), "Fairy_Dust_");
        assert_eq!(sanitize_type_name("ice-cold_2"), "ice-cold_2");
    }
}
