use std::io::{self, Write};

use anyhow::Context;
use chrono::Local;

use crate::{RecencyBucket, RecencyBuckets, Repository, RepositoryReporter, StdResult};

const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Reports repositories as plain text on the standard output.
#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Creates a new `TextReporter` instance.
    pub fn new() -> Self {
        Self
    }

    /// Renders the buckets in report order to the given writer.
    pub fn render<W: Write>(&self, buckets: &RecencyBuckets, writer: &mut W) -> io::Result<()> {
        for bucket in RecencyBucket::REPORT_ORDER {
            writeln!(writer, "{bucket}")?;
            for (index, repository) in buckets.bucket(bucket).iter().enumerate() {
                self.render_repository(index + 1, repository, writer)?;
            }
        }

        Ok(())
    }

    fn render_repository<W: Write>(
        &self,
        position: usize,
        repository: &Repository,
        writer: &mut W,
    ) -> io::Result<()> {
        let updated_at = repository
            .updated_at
            .with_timezone(&Local)
            .format(LOCAL_TIME_FORMAT);
        writeln!(
            writer,
            "\t#{position:>2} {:<10} {:<30} {updated_at}",
            *repository.id,
            repository.name.as_str()
        )?;
        writeln!(writer, "\t\tURL: {}", repository.url)
    }
}

impl RepositoryReporter for TextReporter {
    fn report(&self, buckets: &RecencyBuckets) -> StdResult<()> {
        let mut stdout = io::stdout().lock();
        self.render(buckets, &mut stdout)
            .and_then(|_| stdout.flush())
            .with_context(|| "Failed to write the report to the standard output")
    }
}
