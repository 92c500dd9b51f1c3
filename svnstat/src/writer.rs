//! Output sinks for rendered table blocks.
//!
//! The table goes either to the console or to a file. Both receive the same
//! `\n`-joined blocks from the library; only the console styles the header.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use console::{Style, Term};

/// Destination for header and row blocks.
pub trait RowWriter {
    /// Write the header block. Defaults to a plain block.
    fn write_header(&mut self, header: &str) -> io::Result<()> {
        self.write_block(header)
    }

    /// Write one block followed by a newline.
    fn write_block(&mut self, block: &str) -> io::Result<()>;

    /// Flush anything buffered.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes to stdout, with a bold header when the terminal supports it.
pub struct ConsoleRowWriter {
    term: Term,
    header_style: Style,
}

impl ConsoleRowWriter {
    pub fn new() -> Self {
        ConsoleRowWriter {
            term: Term::stdout(),
            header_style: Style::new().bold(),
        }
    }
}

impl Default for ConsoleRowWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RowWriter for ConsoleRowWriter {
    fn write_header(&mut self, header: &str) -> io::Result<()> {
        for line in header.split('\n') {
            self.term
                .write_line(&self.header_style.apply_to(line).to_string())?;
        }
        Ok(())
    }

    fn write_block(&mut self, block: &str) -> io::Result<()> {
        self.term.write_line(block)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.term.flush()
    }
}

/// Writes plain text to any `Write`, normally a buffered file.
pub struct FileRowWriter<W: Write> {
    out: W,
}

impl FileRowWriter<BufWriter<File>> {
    /// Create (or truncate) `path` for writing.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(FileRowWriter::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> FileRowWriter<W> {
    pub fn new(out: W) -> Self {
        FileRowWriter { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RowWriter for FileRowWriter<W> {
    fn write_block(&mut self, block: &str) -> io::Result<()> {
        writeln!(self.out, "{}", block)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_writer_appends_newlines() {
        let mut writer = FileRowWriter::new(Vec::new());
        writer.write_header("|a|\n|b|").unwrap();
        writer.write_block("===").unwrap();
        writer.finish().unwrap();
        assert_eq!(
            String::from_utf8(writer.into_inner()).unwrap(),
            "|a|\n|b|\n===\n"
        );
    }

    #[test]
    fn test_file_writer_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut writer = FileRowWriter::create(&path).unwrap();
        writer.write_block("row").unwrap();
        writer.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "row\n");
    }
}
