pub mod dates;
mod error;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod surface;
pub mod templates;

pub use error::Error;
pub use model::{IdentBlock, RenderRequest, RenderedDocument, SkinId};

use std::path::Path;
use std::time::Instant;

/// Lay out an entry and export it as PDF bytes.
pub fn generate_pdf(req: &RenderRequest) -> Vec<u8> {
    let t0 = Instant::now();

    let doc = layout::render(req);
    let t_layout = t0.elapsed();

    let bytes = pdf::render(&doc);
    let t_total = t0.elapsed();

    log::info!(
        "Timing: layout={:.1}ms, pdf={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_layout.as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        doc.page_count(),
        bytes.len(),
    );

    bytes
}

/// Lay out an entry and write the PDF to `output`.
pub fn generate_pdf_to_file(req: &RenderRequest, output: &Path) -> Result<(), Error> {
    let bytes = generate_pdf(req);
    std::fs::write(output, &bytes).map_err(Error::Io)?;
    Ok(())
}
