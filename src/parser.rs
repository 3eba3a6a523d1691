use crate::options::ParseOptions;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "ini.pest"]
pub struct IniParser;

/// Classification of a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming
    Blank,

    /// Comment line, kept verbatim (trimmed)
    Comment(&'a str),

    /// Section header: `[name]`, name already trimmed (may be empty)
    Header(&'a str),

    /// Header opened with `[` but not closed at end of line
    MalformedHeader,

    /// Key-value pair split on the first `=`, both sides trimmed
    Pair { key: &'a str, value: &'a str },

    /// Non-empty line that is none of the above
    Text,
}

impl IniParser {
    /// Classify one raw line of INI text.
    ///
    /// The line is trimmed first. Comments are recognised according to
    /// `options`; everything else goes through the grammar.
    pub fn classify<'a>(raw: &'a str, options: &ParseOptions) -> Line<'a> {
        let line = raw.trim();
        if line.is_empty() {
            return Line::Blank;
        }
        if options.is_comment(line) {
            return Line::Comment(line);
        }

        // `text` accepts any input, so this only fails on grammar bugs
        let Ok(pairs) = IniParser::parse(Rule::line, line) else {
            return Line::Text;
        };

        for pair in pairs {
            if pair.as_rule() != Rule::line {
                continue;
            }
            for inner in pair.into_inner() {
                match inner.as_rule() {
                    Rule::header => {
                        let name = inner.into_inner().next().map_or("", |p| p.as_str());
                        return Line::Header(name.trim());
                    }
                    Rule::malformed_header => return Line::MalformedHeader,
                    Rule::pair => {
                        let mut parts = inner.into_inner();
                        let key = parts.next().map_or("", |p| p.as_str());
                        let value = parts.next().map_or("", |p| p.as_str());
                        return Line::Pair {
                            key: key.trim(),
                            value: value.trim(),
                        };
                    }
                    _ => {}
                }
            }
        }

        Line::Text
    }
}
