//! Serialize a finished canvas to a vector document

use std::path::Path;

use crate::canvas::Canvas;
use crate::error::ExportError;

/// Write the canvas to `path` as a vector document, tightly cropped to the
/// content bounds.
///
/// The extension picks the format: `.svg` writes the SVG text, anything
/// else is converted to PDF. The write is all-or-nothing: on failure no
/// usable output exists and the error names the offending path.
pub fn export(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    let svg = canvas.to_svg();
    let bytes = match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => svg.into_bytes(),
        _ => svg_to_pdf(&svg)?,
    };
    std::fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "diagram exported");
    Ok(())
}

fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, ExportError> {
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();

    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt)
        .map_err(|err| ExportError::Pdf(err.to_string()))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| ExportError::Pdf("could not convert the SVG page".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lane, Step};
    use crate::renderer::{build, Config};

    fn small_canvas() -> Canvas {
        let lanes = vec![
            Lane::new("client", "Client", 0.2),
            Lane::new("server", "Server", 0.8),
        ];
        let steps = vec![Step::arrow("client", "server", "GET /resource")];
        build(Config::default(), &lanes, &steps).unwrap()
    }

    #[test]
    fn exports_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.svg");
        export(&small_canvas(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<svg"));
        assert!(written.contains("GET /resource"));
    }

    #[test]
    fn exports_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.pdf");
        export(&small_canvas(), &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"%PDF"));
    }

    #[test]
    fn write_failure_surfaces_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("flow.svg");
        let err = export(&small_canvas(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains("flow.svg"));
        assert!(!path.exists());
    }
}
