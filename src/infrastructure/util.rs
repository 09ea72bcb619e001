use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str, separator: &str) -> String {
        let slug = slugify(input);
        if separator == "-" {
            slug
        } else {
            slug.replace('-', separator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_punctuation() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello,  World!", "-"), "hello-world");
        assert_eq!(slugger.slugify("  --Rust & Tokio--  ", "-"), "rust-tokio");
    }

    #[test]
    fn transliterates_to_ascii() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Caf\u{e9} cr\u{e8}me", "-"), "cafe-creme");
    }

    #[test]
    fn honours_custom_separator() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("One Two Three", "_"), "one_two_three");
    }

    #[test]
    fn output_is_url_safe() {
        let slugger = DefaultSlugGenerator;
        let slug = slugger.slugify("\u{1f600} Emoji / Slashes ? and #hash", "-");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    }
}
