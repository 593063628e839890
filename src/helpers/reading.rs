//! Reading time estimates

/// Average reading speed used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Minutes needed to read `content`, rounded up.
/// A rate of zero falls back to the default.
pub fn reading_time_minutes(content: &str, words_per_minute: u32) -> u64 {
    let rate = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let words = content.split_whitespace().count() as u64;
    words.div_ceil(u64::from(rate))
}

/// Reading time at the default rate, like "3 min read"
pub fn reading_time(content: &str) -> String {
    reading_time_with_rate(content, DEFAULT_WORDS_PER_MINUTE)
}

/// Reading time at a custom rate. Blank content reads "0 min read".
pub fn reading_time_with_rate(content: &str, words_per_minute: u32) -> String {
    format!(
        "{} min read",
        reading_time_minutes(content, words_per_minute)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(reading_time(""), "0 min read");
        assert_eq!(reading_time("  \n\t "), "0 min read");
    }

    #[test]
    fn test_ceiling() {
        assert_eq!(reading_time("one"), "1 min read");
        assert_eq!(reading_time_with_rate(&words(200), 200), "1 min read");
        assert_eq!(reading_time_with_rate(&words(201), 200), "2 min read");
        assert_eq!(reading_time_with_rate(&words(201), 100), "3 min read");
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(reading_time_minutes("a  b\n\nc\td", 2), 2);
    }

    #[test]
    fn test_zero_rate_uses_default() {
        assert_eq!(reading_time_with_rate(&words(400), 0), "2 min read");
    }
}
