//! Streaming normalization of serialized Markdown.
//!
//! Single line-by-line pass that collapses runs of blank lines, strips
//! HTML comments, and guarantees a blank line before headings and code
//! fences. Content inside code fences passes through verbatim.

/// Semantic classification of a markdown line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineType {
    Blank,
    Heading,
    CodeFence,
    HtmlComment,
    Other,
}

impl LineType {
    fn classify(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Self::Blank;
        }

        if trimmed.starts_with("<!--") {
            return Self::HtmlComment;
        }

        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            return Self::CodeFence;
        }

        // Heading: 1-6 hashes followed by a space or end of line
        if trimmed.starts_with('#') {
            let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
            if hash_count <= 6 {
                let rest = &trimmed[hash_count..];
                if rest.is_empty() || rest.starts_with(' ') {
                    return Self::Heading;
                }
            }
        }

        Self::Other
    }

    const fn needs_blank_before(self) -> bool {
        matches!(self, Self::Heading | Self::CodeFence)
    }
}

/// Stateful streaming normalizer - single pass, pre-allocated buffer.
struct Normalizer {
    output: String,
    prev_type: LineType,
    consecutive_blanks: u8,
    in_code_fence: bool,
}

pub fn normalize_markdown(input: &str) -> String {
    let mut normalizer = Normalizer {
        output: String::with_capacity(input.len()),
        prev_type: LineType::Blank,
        consecutive_blanks: 0,
        in_code_fence: false,
    };

    for line in input.lines() {
        normalizer.emit(line);
    }

    normalizer.output
}

impl Normalizer {
    fn emit(&mut self, line: &str) {
        // Inside a fence: pass through verbatim until it closes
        if self.in_code_fence {
            if line.trim_start().starts_with("```") || line.trim_start().starts_with("~~~") {
                self.in_code_fence = false;
            }
            self.write_line(line);
            return;
        }

        let line_type = LineType::classify(line);

        if line_type == LineType::CodeFence {
            self.in_code_fence = true;
        }

        if line_type == LineType::HtmlComment {
            return;
        }

        // At most one blank line between blocks
        if line_type == LineType::Blank {
            self.consecutive_blanks += 1;
            if self.consecutive_blanks <= 1 {
                self.write_line(line);
            }
            self.prev_type = line_type;
            return;
        }

        if line_type.needs_blank_before() && self.prev_type != LineType::Blank {
            self.write_line("");
        }

        self.consecutive_blanks = 0;
        self.prev_type = line_type;
        self.write_line(line);
    }

    #[inline]
    fn write_line(&mut self, line: &str) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(line);
    }
}
