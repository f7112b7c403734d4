// crates/infra/src/output.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use bard_lines_domain::options::OutputFormat;
use bard_lines_ports::report::{ReportLine, ReportSink};
use bard_lines_shared_kernel::Result;

use crate::persistence::FileWriter;

/// `[<unit>] <count> is the number of lines in <title>` per line.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn emit(&mut self, line: &ReportLine) -> Result<()> {
        writeln!(self.out, "[{}] {}", line.unit, line.record)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per report line.
pub struct JsonlSink<W: Write> {
    out: W,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonlSink<W> {
    fn emit(&mut self, line: &ReportLine) -> Result<()> {
        serde_json::to_writer(&mut self.out, line)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Build the sink for `format` on top of `out`.
pub fn sink_for<W: Write + 'static>(format: OutputFormat, out: W) -> Box<dyn ReportSink> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(out)),
        OutputFormat::Jsonl => Box::new(JsonlSink::new(out)),
    }
}

/// Buffered stdout, or a file when an output path is given.
pub enum OutputWriter {
    Stdout(BufWriter<io::Stdout>),
    File(BufWriter<File>),
}

impl OutputWriter {
    pub fn create(path: Option<&Path>) -> io::Result<Self> {
        Ok(match path {
            Some(path) => Self::File(FileWriter::create(path)?),
            None => Self::Stdout(BufWriter::new(io::stdout())),
        })
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
