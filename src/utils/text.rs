/// Capitalize the first letter of each whitespace-separated word and lowercase
/// the rest, preserving the original spacing.
///
/// # Examples
/// ```
/// use ghcn_geojson::utils::title_case;
///
/// assert_eq!(title_case("SHARJAH INTER. AIRP"), "Sharjah Inter. Airp");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_station_names() {
        assert_eq!(title_case("SHARJAH INTER. AIRP"), "Sharjah Inter. Airp");
        assert_eq!(title_case("ST JOHNS"), "St Johns");
        assert_eq!(title_case("KWEKWE"), "Kwekwe");
    }

    #[test]
    fn test_title_case_preserves_spacing() {
        assert_eq!(title_case("NEW  YORK"), "New  York");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_lowercase_input() {
        assert_eq!(title_case("mt washington"), "Mt Washington");
    }
}
