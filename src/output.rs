//// Destinations for formatted logs. Every formatted log is handed to all the
//// registered streams in the order they were added.

use crate::clipboard::Clipboard;
use anyhow::Context as _;
use std::io::Write;

pub trait OutputStream {
    fn write_log(&mut self, text: &str) -> anyhow::Result<()>;
}

pub struct OutputSink {
    outputs: Vec<Box<dyn OutputStream>>,
}

impl OutputSink {
    pub fn new() -> OutputSink {
        OutputSink { outputs: vec![] }
    }

    pub fn add_output(&mut self, out: impl OutputStream + 'static) {
        self.outputs.push(Box::new(out));
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStream for OutputSink {
    fn write_log(&mut self, text: &str) -> anyhow::Result<()> {
        for output in self.outputs.iter_mut() {
            output.write_log(text)?;
        }
        Ok(())
    }
}

pub struct StdoutStream;

impl OutputStream for StdoutStream {
    fn write_log(&mut self, text: &str) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }
}

pub struct FileStream {
    path: std::path::PathBuf,
    file: std::io::BufWriter<std::fs::File>,
}

impl FileStream {
    pub fn create(path: &std::path::Path) -> anyhow::Result<FileStream> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating output file `{}`", path.display()))?;
        Ok(FileStream {
            path: path.to_path_buf(),
            file: std::io::BufWriter::new(file),
        })
    }
}

impl OutputStream for FileStream {
    fn write_log(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.file, "{text}")
            .and_then(|()| self.file.flush())
            .with_context(|| format!("writing to `{}`", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "wrote formatted log");
        Ok(())
    }
}

pub struct ClipboardStream<C: Clipboard> {
    clipboard: C,
}

impl<C: Clipboard> ClipboardStream<C> {
    pub fn new(clipboard: C) -> ClipboardStream<C> {
        ClipboardStream { clipboard }
    }
}

impl<C: Clipboard> OutputStream for ClipboardStream<C> {
    fn write_log(&mut self, text: &str) -> anyhow::Result<()> {
        self.clipboard
            .set_text(text)
            .context("copying formatted log")?;
        tracing::debug!(bytes = text.len(), "copied formatted log");
        Ok(())
    }
}
