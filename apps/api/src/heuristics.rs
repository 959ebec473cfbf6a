//! Local heuristic checks over email text. Pure, deterministic, no model calls.
//!
//! Word lists are matched case-insensitively on word boundaries, so "hi" does
//! not fire on "this" and "best" does not fire on "bestseller".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Texts shorter than this (after trimming) are flagged by the format check.
pub const MIN_EMAIL_CHARS: usize = 50;

const GREETINGS: &[&str] = &["dear", "hello", "hi", "greetings"];
const CLOSINGS: &[&str] = &["sincerely", "best regards", "regards", "best", "thank you"];

pub const MISSING_SUBJECT: &str = "Missing subject line";
pub const MISSING_GREETING: &str = "Missing proper greeting";
pub const MISSING_CLOSING: &str = "Missing professional closing";
pub const TOO_SHORT: &str = "Email content seems too short";

static GREETING_RE: Lazy<Regex> = Lazy::new(|| word_set_regex(GREETINGS));
static CLOSING_RE: Lazy<Regex> = Lazy::new(|| word_set_regex(CLOSINGS));
static SUBJECT_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*subject:").expect("static regex"));
static PLACEHOLDER_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\[[^\]\n]+\][ \t]*$").expect("static regex"));
static NAME_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z'-]+ [A-Z][a-zA-Z'-]+$").expect("static regex"));
static BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").expect("static regex"));

fn word_set_regex(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("word list regex")
}

/// Structural features of an email, reported by the generator routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFeatures {
    pub has_subject: bool,
    pub has_greeting: bool,
    pub has_closing: bool,
    pub has_signature: bool,
    pub word_count: usize,
    pub character_count: usize,
    pub paragraph_count: usize,
}

/// Substring match for "subject:" anywhere in the text.
pub fn mentions_subject(text: &str) -> bool {
    text.to_lowercase().contains("subject:")
}

/// A line that starts with "subject:".
pub fn has_subject_line(text: &str) -> bool {
    SUBJECT_LINE_RE.is_match(text)
}

pub fn has_greeting(text: &str) -> bool {
    GREETING_RE.is_match(text)
}

pub fn has_closing(text: &str) -> bool {
    CLOSING_RE.is_match(text)
}

/// A bracketed placeholder line such as `[Your Name]`, or a last non-blank
/// line made of two capitalized words such as `Alex Morgan`.
pub fn has_signature(text: &str) -> bool {
    if PLACEHOLDER_LINE_RE.is_match(text) {
        return true;
    }
    text.lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|line| NAME_LINE_RE.is_match(line))
}

/// Whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length in Unicode scalar values, whitespace included.
pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Non-blank blocks separated by one or more blank lines.
pub fn paragraph_count(text: &str) -> usize {
    BLANK_LINE_RE
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .count()
}

/// Rule violations reported by the format check, in a fixed order.
pub fn basic_issues(text: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if !mentions_subject(text) {
        issues.push(MISSING_SUBJECT.to_string());
    }
    if !has_greeting(text) {
        issues.push(MISSING_GREETING.to_string());
    }
    if !has_closing(text) {
        issues.push(MISSING_CLOSING.to_string());
    }
    if text.trim().chars().count() < MIN_EMAIL_CHARS {
        issues.push(TOO_SHORT.to_string());
    }

    issues
}

pub fn extract_features(text: &str) -> EmailFeatures {
    EmailFeatures {
        has_subject: has_subject_line(text),
        has_greeting: has_greeting(text),
        has_closing: has_closing(text),
        has_signature: has_signature(text),
        word_count: word_count(text),
        character_count: character_count(text),
        paragraph_count: paragraph_count(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAL_EMAIL: &str = "Subject: Request for Leave on October 17\n\n\
        Dear Ms. Patel,\n\n\
        I am writing to request a day of leave tomorrow, October 17, for a personal matter. \
        My current tasks are on track and I will hand over anything urgent before I leave.\n\n\
        Thank you for considering my request.\n\n\
        Sincerely,\n\
        Alex Morgan";

    #[test]
    fn test_greeting_detected_in_any_case() {
        assert!(has_greeting("Dear team"));
        assert!(has_greeting("DEAR TEAM"));
        assert!(has_greeting("oh dear"));
        assert!(has_greeting("Hi Sam,"));
        assert!(has_greeting("greetings from Lisbon"));
    }

    #[test]
    fn test_greeting_requires_whole_word() {
        assert!(!has_greeting("this is the thing"));
        assert!(!has_greeting("Shelloween party"));
        assert!(!has_greeting("Meeting notes attached"));
    }

    #[test]
    fn test_closing_words() {
        assert!(has_closing("Best regards,\nSam"));
        assert!(has_closing("Kind regards"));
        assert!(has_closing("thank you"));
        assert!(has_closing("Thank\tyou"));
        assert!(has_closing("All the best"));
        assert!(!has_closing("the bestseller list"));
        assert!(!has_closing("see attached"));
    }

    #[test]
    fn test_subject_substring_vs_line() {
        let inline = "Re the subject: budget";
        assert!(mentions_subject(inline));
        assert!(!has_subject_line(inline));

        assert!(has_subject_line("SUBJECT: Budget\n\nDear all"));
        assert!(has_subject_line("Dear all\nSubject: Budget"));
        assert!(has_subject_line("  Subject: indented"));
        assert!(!has_subject_line("No subject here"));
    }

    #[test]
    fn test_signature_placeholder_line() {
        assert!(has_signature("Sincerely,\n[Your Name]\n[Your Position]"));
        assert!(has_signature("Regards,\n  [Name]  \n"));
        assert!(!has_signature("Please see [attached] notes here."));
    }

    #[test]
    fn test_signature_trailing_name_line() {
        assert!(has_signature("Sincerely,\nAlex Morgan\n\n"));
        assert!(!has_signature("Sincerely,\nalex"));
        assert!(!has_signature("Alex Morgan\nthanks again"));
        assert!(!has_signature(""));
    }

    #[test]
    fn test_word_and_character_counts() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(character_count("one two three"), "one two three".len());
        assert_eq!(word_count("  spaced \n\t out  "), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(character_count("café"), 4);
    }

    #[test]
    fn test_paragraph_count() {
        assert_eq!(paragraph_count(""), 0);
        assert_eq!(paragraph_count("single line"), 1);
        assert_eq!(paragraph_count("line one\nline two"), 1);
        assert_eq!(paragraph_count("one\n\ntwo\n \n\nthree"), 3);
        assert_eq!(paragraph_count("\n\nleading and trailing\n\n"), 1);
        assert_eq!(paragraph_count("windows\r\n\r\nstyle"), 2);
    }

    #[test]
    fn test_short_text_is_flagged() {
        let issues = basic_issues("Hi, see you soon. Regards");
        assert!(issues.contains(&TOO_SHORT.to_string()));
        assert!(!issues.contains(&MISSING_GREETING.to_string()));
        assert!(!issues.contains(&MISSING_CLOSING.to_string()));
    }

    #[test]
    fn test_padding_does_not_avoid_length_check() {
        let padded = format!("{}short{}", " ".repeat(40), "\n".repeat(40));
        assert!(basic_issues(&padded).contains(&TOO_SHORT.to_string()));
    }

    #[test]
    fn test_complete_email_has_no_issues() {
        assert!(basic_issues(FORMAL_EMAIL).is_empty());
    }

    #[test]
    fn test_empty_text_reports_everything_in_order() {
        assert_eq!(
            basic_issues(""),
            vec![MISSING_SUBJECT, MISSING_GREETING, MISSING_CLOSING, TOO_SHORT]
        );
    }

    #[test]
    fn test_extract_features_from_formal_email() {
        let features = extract_features(FORMAL_EMAIL);
        assert!(features.has_subject);
        assert!(features.has_greeting);
        assert!(features.has_closing);
        assert!(features.has_signature);
        assert_eq!(features.paragraph_count, 5);
        assert_eq!(features.character_count, FORMAL_EMAIL.chars().count());
        assert_eq!(features.word_count, FORMAL_EMAIL.split_whitespace().count());
    }

    #[test]
    fn test_extract_features_from_casual_note() {
        let features = extract_features("need tomorrow off");
        assert_eq!(
            features,
            EmailFeatures {
                has_subject: false,
                has_greeting: false,
                has_closing: false,
                has_signature: false,
                word_count: 3,
                character_count: 17,
                paragraph_count: 1,
            }
        );
    }
}
