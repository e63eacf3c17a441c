use std::fmt;

/// An uploaded file, held only for the duration of one extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub filename: String,
    pub format_tag: FormatTag,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Pdf,
    Docx,
    Txt,
    Unknown,
}

impl FormatTag {
    pub const SUPPORTED: [FormatTag; 3] = [Self::Pdf, Self::Docx, Self::Txt];

    /// Case-insensitive; anything outside `pdf`, `docx`, `txt` maps to `Unknown`.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "txt" => Self::Txt,
            _ => Self::Unknown,
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        extension_of(filename).map_or(Self::Unknown, Self::parse)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the text after the last `.` of the filename, if there is one.
pub fn extension_of(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

impl SourceDocument {
    pub fn new(filename: String, data: Vec<u8>) -> Self {
        let format_tag = FormatTag::from_filename(&filename);
        Self {
            filename,
            format_tag,
            data,
        }
    }

    pub fn with_format(filename: String, format_tag: FormatTag, data: Vec<u8>) -> Self {
        Self {
            filename,
            format_tag,
            data,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
