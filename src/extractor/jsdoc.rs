//! JSDoc Comment Parsing
//!
//! Minimal JSDoc reader for the pieces the table renderer needs: the free-text
//! description and block tags (`@fires`, `@event`, ...). Anything that is not
//! a `/** ... */` comment is rejected up front.

/// A single `@name value` block tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsDocTag {
    pub name: String,
    pub value: String,
}

/// Parsed JSDoc comment: description text plus block tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsDoc {
    pub description: String,
    pub tags: Vec<JsDocTag>,
}

impl JsDoc {
    /// Parse a raw comment. Returns `None` for line comments and plain
    /// `/* ... */` blocks.
    pub fn parse(comment: &str) -> Option<Self> {
        let inner = comment.trim().strip_prefix("/**")?.strip_suffix("*/")?;

        let mut description_lines: Vec<&str> = Vec::new();
        let mut tags: Vec<JsDocTag> = Vec::new();

        for raw_line in inner.lines() {
            let line = Self::strip_frame(raw_line);

            if let Some(rest) = line.trim_start().strip_prefix('@') {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                tags.push(JsDocTag {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            } else if let Some(tag) = tags.last_mut() {
                // Continuation of the previous tag's value
                let continuation = line.trim();
                if !continuation.is_empty() {
                    if !tag.value.is_empty() {
                        tag.value.push('\n');
                    }
                    tag.value.push_str(continuation);
                }
            } else {
                description_lines.push(line);
            }
        }

        Some(Self {
            description: description_lines.join("\n").trim().to_string(),
            tags,
        })
    }

    /// A member counts as documented only when the description has text;
    /// tags alone do not qualify.
    pub fn is_documented(&self) -> bool {
        !self.description.is_empty()
    }

    /// Values of all event tags (`@fires` and `@event`), in source order
    pub fn events(&self) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|t| t.name == "fires" || t.name == "event")
            .map(|t| t.value.as_str())
            .collect()
    }

    /// Remove the leading ` * ` frame of a comment line
    fn strip_frame(line: &str) -> &str {
        let line = line.trim_start();
        let line = line.strip_prefix('*').unwrap_or(line);
        line.strip_prefix(' ').unwrap_or(line)
    }
}
