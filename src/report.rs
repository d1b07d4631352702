use std::io::{self, Write};

/// Totals of a generation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub total_bytes: u64,
    pub failures: usize,
}

/// Prints progress lines for every file written and a closing summary.
pub struct ConsoleReporter<W: Write> {
    out: W,
    summary: Summary,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            summary: Summary::default(),
        }
    }

    pub fn section(&mut self, heading: &str) -> io::Result<()> {
        writeln!(self.out, "\n{heading}")
    }

    pub fn file_written(&mut self, name: &str, bytes: u64) -> io::Result<()> {
        self.summary.files += 1;
        self.summary.total_bytes += bytes;
        writeln!(self.out, "  ✓ {name} ({} bytes)", group_thousands(bytes))
    }

    pub fn failed(&mut self, name: &str, err: &anyhow::Error) -> io::Result<()> {
        self.summary.failures += 1;
        writeln!(self.out, "  ✗ {name}: {err:#}")
    }

    pub fn note(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "  {message}")
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Print the totals and return them.
    pub fn finish(&mut self) -> io::Result<Summary> {
        let Summary {
            files,
            total_bytes,
            failures,
        } = self.summary;

        if failures == 0 {
            writeln!(self.out, "\n✅ Generation complete!")?;
        } else {
            writeln!(self.out, "\n⚠️  Generation finished with {failures} failure(s)")?;
        }
        writeln!(self.out, "   Files created: {files}")?;
        writeln!(
            self.out,
            "   Total size: {} bytes ({:.2} MB)",
            group_thousands(total_bytes),
            total_bytes as f64 / 1024.0 / 1024.0
        )?;
        self.out.flush()?;

        Ok(self.summary)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
