use crate::error::ScrapeError;
use crate::parsers::keyword::KeywordMatcher;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let matcher = KeywordMatcher::new("php").unwrap();
        assert!(matcher.is_match("Senior PHP Developer"));
        assert!(matcher.is_match("/jobs/php-dev"));
        assert!(matcher.is_match("pHp"));
        assert!(!matcher.is_match("Python developer"));
        assert!(!matcher.is_match(""));
    }

    #[test]
    fn test_keyword_is_literal() {
        let matcher = KeywordMatcher::new("C++").unwrap();
        assert!(matcher.is_match("Modern c++ engineer"));
        assert!(!matcher.is_match("C developer"));

        let matcher = KeywordMatcher::new(".net").unwrap();
        assert!(matcher.is_match("ASP.NET Core"));
        assert!(!matcher.is_match("asp-net"));
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let matcher = KeywordMatcher::new("  php ").unwrap();
        assert_eq!(matcher.keyword(), "php");
        assert!(matcher.is_match("PHP8"));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert!(matches!(
            KeywordMatcher::new(""),
            Err(ScrapeError::Configuration(_))
        ));
        assert!(matches!(
            KeywordMatcher::new("   "),
            Err(ScrapeError::Configuration(_))
        ));
    }
}
