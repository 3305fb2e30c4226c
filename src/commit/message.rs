// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and line splitting.

/// One line of a commit message, with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Zero-based index in the message. Index 0 is the title.
    pub index: usize,
    /// The raw text of the line, without the `\n` separator.
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// The 1-based line number shown to users.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Whether this line is the title.
    pub fn is_title(&self) -> bool {
        self.index == 0
    }

    /// The line without one trailing carriage return.
    pub fn visible(&self) -> &'a str {
        self.text.strip_suffix('\r').unwrap_or(self.text)
    }

    /// Number of visible characters, excluding the line terminator.
    pub fn visible_len(&self) -> usize {
        self.visible().chars().count()
    }

    /// Whether the line has nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A commit message split on `\n` into an ordered sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineSequence<'a> {
    /// Split a message into lines.
    ///
    /// Returns `None` for an empty or whitespace-only message, which is a
    /// distinct condition from a message with zero content lines.
    pub fn split(text: &'a str) -> Option<Self> {
        if is_empty_message(text) {
            return None;
        }
        Some(Self {
            lines: text.split('\n').collect(),
        })
    }

    /// Number of lines, including the title.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; empty messages never produce a sequence.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The title line.
    pub fn title(&self) -> Line<'a> {
        Line {
            index: 0,
            text: self.lines[0],
        }
    }

    /// The line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Line<'a>> {
        self.lines.get(index).map(|&text| Line { index, text })
    }

    /// Whether the message is a title with no body.
    pub fn is_title_only(&self) -> bool {
        self.lines.len() == 1
    }

    /// Iterate over all lines in order.
    pub fn iter(&self) -> impl Iterator<Item = Line<'a>> + '_ {
        self.lines
            .iter()
            .copied()
            .enumerate()
            .map(|(index, text)| Line { index, text })
    }
}

/// Whether a message counts as empty: nothing but whitespace.
pub fn is_empty_message(text: &str) -> bool {
    text.trim().is_empty()
}

/// Prepare text read from a file, stdin or git for validation.
///
/// Drops `#` comment lines when asked, then removes trailing line
/// terminators so a final newline does not count as an extra empty line.
pub fn clean_message(text: &str, strip_comments: bool) -> String {
    let mut cleaned = if strip_comments {
        text.split('\n')
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        text.to_string()
    };

    let kept = cleaned.trim_end_matches(&['\n', '\r'][..]).len();
    cleaned.truncate(kept);
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        let lines = LineSequence::split("Title\n\nBody").unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.title().text, "Title");
        assert!(lines.get(1).unwrap().is_blank());
        assert_eq!(lines.get(2).unwrap().number(), 3);
        assert!(lines.get(3).is_none());
    }

    #[test]
    fn test_empty_message_has_no_sequence() {
        assert!(LineSequence::split("").is_none());
        assert!(LineSequence::split("  \n\t ").is_none());
        assert!(LineSequence::split("0").is_some());
    }

    #[test]
    fn test_title_only() {
        let lines = LineSequence::split("Fix bug").unwrap();
        assert!(lines.is_title_only());
        assert!(lines.title().is_title());
    }

    #[test]
    fn test_visible_len_ignores_carriage_return() {
        let line = Line {
            index: 0,
            text: "abc\r",
        };
        assert_eq!(line.visible_len(), 3);
        assert_eq!(line.visible(), "abc");

        let line = Line {
            index: 0,
            text: "abc",
        };
        assert_eq!(line.visible_len(), 3);
    }

    #[test]
    fn test_visible_len_counts_chars() {
        let line = Line {
            index: 1,
            text: "åäö",
        };
        assert_eq!(line.visible_len(), 3);
    }

    #[test]
    fn test_clean_message() {
        assert_eq!(clean_message("Fix bug\n", false), "Fix bug");
        assert_eq!(clean_message("Title\r\n\r\nBody\r\n\n", false), "Title\r\n\r\nBody");
        assert_eq!(
            clean_message("Title\n\nBody\n# Please enter the message\n", true),
            "Title\n\nBody"
        );
        assert_eq!(clean_message("# only\n", true), "");
        assert_eq!(clean_message("#hashtag title", false), "#hashtag title");
    }
}
