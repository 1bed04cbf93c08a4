use crate::document::{normalize, read_document, sanitize, write_document, SanitizeStats};
use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct Sanitize {
    /// Input OpenAPI spec path
    #[arg(
        long = "in",
        value_name = "PATH",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub input: String,

    /// Output spec path (defaults to input path)
    #[arg(long = "out", value_name = "PATH")]
    pub output: Option<String>,
}

impl Sanitize {
    pub fn run(self) -> Result<SanitizeStats> {
        let output = self.output.as_deref().unwrap_or(&self.input);

        let doc = read_document(&self.input)?;
        let doc = normalize(doc);
        let mut stats = SanitizeStats::default();
        let doc = sanitize(doc, &mut stats);
        write_document(output, &doc)?;

        for location in &stats.locations {
            debug!(location = %location, "Removed boolean format");
        }

        info!(
            "Removed {} invalid boolean format declarations",
            stats.removed
        );
        Ok(stats)
    }
}
