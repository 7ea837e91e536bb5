//! Single-line record tokenizer

/// Splits one CSV line into trimmed field values.
///
/// A double quote toggles quoted mode and is dropped; a comma separates
/// fields only outside quoted mode. The last field is emitted at end of line
/// even when a quote was left open. Doubled quotes are not treated as an
/// escaped quote: `"a ""b"""` yields `a b`.
///
/// # Examples
///
/// ```
/// use leadbook::core::csv::split_record;
///
/// assert_eq!(split_record(r#"Jane,"Doe, Jr.", jane@example.com"#),
///            vec!["Jane", "Doe, Jr.", "jane@example.com"]);
/// assert_eq!(split_record(""), vec![""]);
/// ```
pub fn split_record(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    values.push(current.trim().to_string());

    values
}
