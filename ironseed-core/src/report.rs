//! Console output of a seeding run
//!
//! stdout: one line per inserted record, then one summary line.
//! stderr: a single error line when the run fails.

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

use crate::error::Result;
use crate::seed::InsertedRecord;

pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        ConsoleReporter::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        ConsoleReporter { out, err }
    }

    pub fn inserted(&mut self, record: &InsertedRecord) -> Result<()> {
        writeln!(
            self.out,
            "✅ Added product: {} with ID: {}",
            record.name, record.id
        )?;
        Ok(())
    }

    pub fn finished(&mut self) -> Result<()> {
        writeln!(self.out, "🎉 Sample data added successfully")?;
        self.out.flush()?;
        Ok(())
    }

    /// Best effort: a broken stderr must not mask the original failure
    pub fn failed(&mut self, error: &dyn Display) {
        let _ = writeln!(self.err, "❌ Error adding sample data: {}", error);
        let _ = self.err.flush();
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentId;

    #[test]
    fn test_line_formats() {
        let mut reporter = ConsoleReporter::new(Vec::new(), Vec::new());
        reporter
            .inserted(&InsertedRecord {
                product_id: "P0004".to_string(),
                name: "JoyCon NS【含清修的】".to_string(),
                id: DocumentId::new("abc123"),
            })
            .unwrap();
        reporter.finished().unwrap();
        reporter.failed(&"boom");

        let (out, err) = reporter.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "✅ Added product: JoyCon NS【含清修的】 with ID: abc123\n🎉 Sample data added successfully\n"
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "❌ Error adding sample data: boom\n"
        );
    }
}
