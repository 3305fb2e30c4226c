// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example configuration written by `cmc init`.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cmc Configuration File

# Rule configuration
[rules]
max_title_length = 70
max_body_length = 70
strict = false

# Titles starting with these prefixes are not checked
excluded_subjects = [
    "Merge ",
    "Revert ",
    "DO NOT MERGE",
    "DO NOT SUBMIT",
    "DON'T SUBMIT",
]

# Input handling
[input]
strip_comments = true

# UI configuration
[ui]
color = true
"#
}
