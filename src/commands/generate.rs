//! Generate static files

use anyhow::Result;

use crate::generator::{BuildReport, Generator};
use crate::Blog;

/// Generate the static site
pub fn run(blog: &Blog) -> Result<BuildReport> {
    let start = std::time::Instant::now();

    let generator = Generator::new(blog)?;
    let report = generator.generate()?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}
