//! Exact substring matching using Boyer-Moore with the bad-character rule.
//!
//! The matcher operates on bytes and is case-sensitive; callers that want
//! case-insensitive behavior lowercase both sides before calling. It must
//! agree with `str::contains` on every input — the skip table is purely a
//! performance device, never a change in match semantics.

/// Returns `true` if `haystack` contains `needle` as an exact byte substring.
///
/// An empty needle matches any haystack. A needle longer than the haystack
/// never matches.
pub fn contains(haystack: &str, needle: &str) -> bool {
    let text = haystack.as_bytes();
    let pattern = needle.as_bytes();

    if pattern.is_empty() {
        return true;
    }
    if text.len() < pattern.len() {
        return false;
    }

    // Bad-character table: distance from the last occurrence of each byte
    // to the end of the pattern. Bytes absent from the pattern stay None.
    let mut table: [Option<usize>; 256] = [None; 256];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = Some(pattern.len() - i - 1);
    }

    let mut i = pattern.len() - 1;
    while i < text.len() {
        let mut j = pattern.len() - 1;

        // Compare backward from the end of the window.
        while text[i] == pattern[j] {
            if j == 0 {
                return true;
            }
            i -= 1;
            j -= 1;
        }

        // Mismatch on text[i] against pattern[j]. Shift by the bad-character
        // distance, but never less than the single-position window advance
        // `len - j`; an absent byte skips the whole pattern length.
        i += match table[text[i] as usize] {
            Some(shift) => shift.max(pattern.len() - j),
            None => pattern.len(),
        };
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(haystack: &str, needle: &str) {
        assert_eq!(
            contains(haystack, needle),
            haystack.contains(needle),
            "disagreement with str::contains for haystack={haystack:?} needle={needle:?}"
        );
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(contains("", ""));
        assert!(contains("abc", ""));
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        assert!(!contains("ab", "abc"));
        assert!(!contains("", "a"));
    }

    #[test]
    fn test_basic_matches() {
        assert!(contains("interface", "face"));
        assert!(contains("interface", "interface"));
        assert!(contains("<name>router-interface</name>", "interface"));
        assert!(!contains("interface", "interfaces"));
        assert!(!contains("leaf mtu { type uint16; }", "interface"));
    }

    #[test]
    fn test_repeated_and_overlapping_patterns() {
        assert!(contains("aaaaa", "aaa"));
        assert!(contains("ababab", "abab"));
        assert!(contains("aabaabaab", "baab"));
        assert!(!contains("ababab", "abba"));
    }

    #[test]
    fn test_match_at_boundaries() {
        assert!(contains("pattern in the middle", "pattern"));
        assert!(contains("ends with pattern", "pattern"));
        assert!(contains("x", "x"));
    }

    #[test]
    fn test_agrees_with_str_contains() {
        // Exhaustive over a small alphabet: every haystack of length <= 6
        // and needle of length <= 3 over {a, b}.
        fn strings(len: usize) -> Vec<String> {
            if len == 0 {
                return vec![String::new()];
            }
            strings(len - 1)
                .into_iter()
                .flat_map(|s| ["a", "b"].into_iter().map(move |c| format!("{s}{c}")))
                .collect()
        }

        let haystacks: Vec<String> = (0..=6).flat_map(strings).collect();
        let needles: Vec<String> = (0..=3).flat_map(strings).collect();
        for h in &haystacks {
            for n in &needles {
                check(h, n);
            }
        }
    }

    #[test]
    fn test_agrees_on_realistic_lines() {
        let lines = [
            "<config xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\">",
            "leaf interface-name { type string; }",
            "    container interfaces {",
            "description \"The MTU of the interface.\";",
            "",
        ];
        let terms = ["interface", "leaf", "mtu", "xmlns", "zzz", "e", "ce</"];
        for h in &lines {
            for n in &terms {
                check(h, n);
            }
        }
    }

    #[test]
    fn test_multibyte_input_as_bytes() {
        // Non-ASCII text is compared byte-wise; agreement with str::contains
        // still holds because UTF-8 substring matches are byte matches.
        check("üñíçôdé interface", "interface");
        check("üñíçôdé", "ñí");
        check("üñíçôdé", "x");
    }
}
