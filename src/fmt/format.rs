//! Line templates. The default layout is
//! `{timestamp}.{msecs} | {level:<8} | {name}:{func}:{line} | {msg}`, and callers can
//! swap in their own column order without touching the sinks.

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Msecs,
    Level,
    Name,
    Func,
    File,
    Line,
    Msg,
}

impl Placeholder {
    /// Name used inside the braces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Msecs => "msecs",
            Self::Level => "level",
            Self::Name => "name",
            Self::Func => "func",
            Self::File => "file",
            Self::Line => "line",
            Self::Msg => "msg",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Msecs,
        Self::Level,
        Self::Name,
        Self::Func,
        Self::File,
        Self::Line,
        Self::Msg,
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

/// Where a value sits inside its padded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// `{level:<8}`, also the default for a bare width such as `{level:8}`.
    #[default]
    Left,
    /// `{line:>5}`.
    Right,
    /// `{level:^8}`.
    Center,
}

/// Parsed once at configure time, rendered for every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators, whitespace, and unknown `{names}`.
    Literal(String),
    /// A known token, padded to `width` columns when `width` is non-zero.
    Placeholder {
        placeholder: Placeholder,
        width: usize,
        alignment: Alignment,
    },
}

/// Pre-parsed template.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Turns `"{level:<8} {msg}"` into a segment list.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut i = 0;
        let chars: Vec<char> = template.chars().collect();

        while i < chars.len() {
            if chars[i] == '{'
                && let Some(end) = chars[i..].iter().position(|&c| c == '}')
            {
                let end = i + end;
                let inner: String = chars[i + 1..end].iter().collect();

                if !current.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                }

                segments.push(Self::parse_field(&inner).unwrap_or_else(|| {
                    FormatSegment::Literal(format!("{{{inner}}}"))
                }));

                i = end + 1;
                continue;
            }

            current.push(chars[i]);
            i += 1;
        }

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    /// `name` or `name:<spec>`, where spec is an optional `<`, `>` or `^` followed by a width.
    fn parse_field(inner: &str) -> Option<FormatSegment> {
        let (name, spec) = match inner.split_once(':') {
            Some((name, spec)) => (name, Some(spec)),
            None => (inner, None),
        };
        let placeholder = Placeholder::from_name(name)?;

        let (width, alignment) = match spec {
            None => (0, Alignment::Left),
            Some(spec) => {
                let (alignment, digits) = match spec.chars().next() {
                    Some('<') => (Alignment::Left, &spec[1..]),
                    Some('>') => (Alignment::Right, &spec[1..]),
                    Some('^') => (Alignment::Center, &spec[1..]),
                    _ => (Alignment::Left, spec),
                };
                (digits.parse::<usize>().ok()?, alignment)
            }
        };

        Some(FormatSegment::Placeholder {
            placeholder,
            width,
            alignment,
        })
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes values into the pre-parsed segments.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder {
                    placeholder,
                    width,
                    alignment,
                } => {
                    let value = match placeholder {
                        Placeholder::Timestamp => &values.timestamp,
                        Placeholder::Msecs => &values.msecs,
                        Placeholder::Level => &values.level,
                        Placeholder::Name => &values.name,
                        Placeholder::Func => &values.func,
                        Placeholder::File => &values.file,
                        Placeholder::Line => &values.line,
                        Placeholder::Msg => &values.msg,
                    };
                    push_padded(&mut result, value, *width, *alignment);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(super::DEFAULT_MESSAGE_FORMAT)
    }
}

/// Pads by character count; values longer than `width` are never truncated.
fn push_padded(out: &mut String, value: &str, width: usize, alignment: Alignment) {
    let len = value.chars().count();
    if len >= width {
        out.push_str(value);
        return;
    }

    let pad = width - len;
    let (left, right) = match alignment {
        Alignment::Left => (0, pad),
        Alignment::Right => (pad, 0),
        Alignment::Center => (pad / 2, pad - pad / 2),
    };
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(value);
    out.extend(std::iter::repeat_n(' ', right));
}

/// One string per placeholder, so a template can never reference a value that isn't there.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub timestamp: String,
    pub msecs: String,
    pub level: String,
    pub name: String,
    pub func: String,
    pub file: String,
    pub line: String,
    pub msg: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp already rendered with the configured strftime template.
    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Milliseconds within the second, zero-padded to three digits.
    #[must_use]
    pub fn msecs(mut self, millis: u32) -> Self {
        self.msecs = format!("{millis:03}");
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Logger name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Originating function.
    #[must_use]
    pub fn func(mut self, func: impl Into<String>) -> Self {
        self.func = func.into();
        self
    }

    /// Originating source file.
    #[must_use]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Originating line number.
    #[must_use]
    pub fn line(mut self, line: u32) -> Self {
        self.line = line.to_string();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }
}
