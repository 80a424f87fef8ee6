use serde::Serialize;
use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// What kind of definition matched.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Function,
    Struct,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Function => "function",
            Kind::Struct => "struct",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first definition found under a search root.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    #[serde(rename = "filepath")]
    pub file_path: PathBuf,
    pub source: String,
    #[serde(rename = "type")]
    pub kind: Kind,
}

/// Write `result` as a pretty-printed JSON object followed by a newline.
pub fn write_json(result: &ExtractionResult, out: &mut dyn Write) -> io::Result<()> {
    let mut buf = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut buf, result)?;
    buf.write_all(b"\n")?;
    buf.flush()
}
