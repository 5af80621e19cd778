//! Output format resolution and rendering of fetch results
//!
//! Every format writes to the given sink only; `Quiet` writes nothing.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::FetchResult;

/// Concrete rendering mode after resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Human-readable summary lines
    #[default]
    Table,
    /// Indented JSON
    Json,
    /// YAML document
    Yaml,
    /// No output
    Quiet,
}

impl OutputFormat {
    /// All accepted names, in help order.
    pub const NAMES: [&'static str; 4] = ["table", "json", "yaml", "quiet"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Quiet => "quiet",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "quiet" => Ok(OutputFormat::Quiet),
            _ => Err(ApplicationError::UnknownOutputFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Output selection as given on the command line, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Value of `--output`, if given
    pub output: Option<String>,
    pub json: bool,
    pub yaml: bool,
    pub quiet: bool,
}

impl OutputOptions {
    /// Resolve flags into a single format.
    ///
    /// Falls back to `default` when nothing was requested. Requesting two
    /// different formats is an error; repeating the same one is not.
    pub fn resolve(&self, default: &str) -> ApplicationResult<OutputFormat> {
        let mut requested: Vec<OutputFormat> = Vec::new();
        if let Some(value) = &self.output {
            requested.push(value.parse()?);
        }
        for (set, format) in [
            (self.json, OutputFormat::Json),
            (self.yaml, OutputFormat::Yaml),
            (self.quiet, OutputFormat::Quiet),
        ] {
            if set {
                requested.push(format);
            }
        }

        let mut distinct: Vec<OutputFormat> = Vec::new();
        for format in requested {
            if !distinct.contains(&format) {
                distinct.push(format);
            }
        }

        let format: OutputFormat = match distinct.as_slice() {
            [] => default.parse()?,
            [only] => *only,
            many => {
                return Err(ApplicationError::ConflictingOutputFormats {
                    formats: many.iter().map(|f| f.to_string()).collect(),
                })
            }
        };
        debug!("resolve: format={}", format);
        Ok(format)
    }
}

/// Write `result` to `out` in the given format.
pub fn render(
    result: &FetchResult,
    format: OutputFormat,
    out: &mut dyn Write,
) -> ApplicationResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result).map_err(|e| {
                if e.is_io() {
                    ApplicationError::io("write json", e.into())
                } else {
                    ApplicationError::Render {
                        context: "encode json".into(),
                        source: Box::new(e),
                    }
                }
            })?;
            writeln!(out).map_err(|e| ApplicationError::io("write json", e))?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, result).map_err(|e| ApplicationError::Render {
                context: "encode yaml".into(),
                source: Box::new(e),
            })?;
        }
        OutputFormat::Quiet => {}
        OutputFormat::Table => {
            write_table(result, out).map_err(|e| ApplicationError::io("write table", e))?;
        }
    }
    out.flush().map_err(|e| ApplicationError::io("flush output", e))
}

fn write_table(result: &FetchResult, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        out,
        "blog fetch (stub) -> out_dir={} analyze={}",
        result.out_dir, result.analyze
    )?;
    if !result.url.is_empty() {
        writeln!(out, "  URL: {}", result.url)?;
    }
    if !result.playlist.is_empty() {
        writeln!(out, "  Playlist: {}", result.playlist)?;
    }
    Ok(())
}
