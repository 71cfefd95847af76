//! Rendering drafts to images.
//!
//! A draft is first written out as an SVG document (one element per
//! primitive). PNG output parses that SVG with usvg and paints it onto a
//! tiny-skia pixmap with resvg. Labels are set in a bundled font, so a PNG
//! comes out the same on every host.
//!
//! ## Rust Lesson #17: String Building
//!
//! `String` is growable like a JS string builder. `push_str` appends in
//! place and `format!` returns a new `String`. All numbers are written with a
//! fixed precision so the same draft always produces the same bytes.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use resvg::usvg;
use serde::{Deserialize, Serialize};
use tiny_skia::{Pixmap, Transform};
use tracing::{debug, info};

use crate::error::{DraftError, Result};
use crate::garment::Draft;
use crate::geometry::{Point, Rect};
use crate::primitive::{Primitive, Stroke, arc_sweep, point_on_ellipse};

/// Font size of labels, in pixels.
const LABEL_FONT_SIZE: f64 = 12.0;

/// Bundled label font (Tuffy, public domain). PNG output never depends on
/// the fonts installed on the host.
static LABEL_FONT: &[u8] = include_bytes!("../fonts/Tuffy.ttf");
const LABEL_FONT_FAMILY: &str = "Tuffy";

/// Colors and stroke widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub color: String,
    pub background: String,
    pub structural_width: f64,
    pub guide_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            color: "blue".to_string(),
            background: "white".to_string(),
            structural_width: 5.0,
            guide_width: 1.0,
        }
    }
}

impl RenderStyle {
    /// Both colors must parse as SVG colors and both widths must be finite
    /// and positive.
    pub fn validate(&self) -> Result<()> {
        for (key, color) in [("color", &self.color), ("background", &self.background)] {
            svgtypes::Color::from_str(color).map_err(|e| {
                DraftError::render(format!("style {} {:?} is not a color: {}", key, color, e))
            })?;
        }
        for (key, width) in [
            ("structural_width", self.structural_width),
            ("guide_width", self.guide_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(DraftError::render(format!(
                    "style {} must be a positive number, got {}",
                    key, width
                )));
            }
        }
        Ok(())
    }

    fn width_of(&self, stroke: Stroke) -> f64 {
        match stroke {
            Stroke::Structural => self.structural_width,
            Stroke::Guide => self.guide_width,
        }
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.trim().to_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "svg" => Some(OutputFormat::Svg),
            _ => None,
        }
    }
}

/// Write the draft as a standalone SVG document.
pub fn to_svg(draft: &Draft, style: &RenderStyle) -> String {
    let width = draft.canvas.width;
    let height = draft.canvas.height;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<title>{title}</title>
<rect width="100%" height="100%" fill="{bg}"/>
<g stroke="{color}" fill="none">
"#,
        w = width,
        h = height,
        title = escape_xml(&draft.name),
        bg = escape_xml(&style.background),
        color = escape_xml(&style.color),
    ));

    for primitive in &draft.primitives {
        svg.push_str(&primitive_to_svg(primitive, style));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn primitive_to_svg(primitive: &Primitive, style: &RenderStyle) -> String {
    match primitive {
        Primitive::Line { start, end, stroke } => format!(
            "  <line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke-width=\"{}\"/>\n",
            start.x,
            start.y,
            end.x,
            end.y,
            style.width_of(*stroke)
        ),
        Primitive::Arc { bounds, start_deg, end_deg, stroke } => format!(
            "  <path d=\"{}\" stroke-width=\"{}\"/>\n",
            arc_path(bounds, *start_deg, *end_deg),
            style.width_of(*stroke)
        ),
        Primitive::ReferenceSquare { bounds } => {
            let rect = bounds.normalized();
            format!(
                "  <rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\" fill=\"{}\" stroke-width=\"1\"/>\n",
                rect.top_left.x,
                rect.top_left.y,
                rect.width(),
                rect.height(),
                escape_xml(&style.color)
            )
        }
        Primitive::Label { position, text } => label_to_svg(*position, text, style),
    }
}

/// SVG path data for an elliptical arc inscribed in `bounds`.
///
/// A full turn is split in two half arcs, since an SVG arc whose start and
/// end coincide draws nothing.
fn arc_path(bounds: &Rect, start_deg: f64, end_deg: f64) -> String {
    let rect = bounds.normalized();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let sweep = arc_sweep(start_deg, end_deg);

    let start = point_on_ellipse(&rect, start_deg);
    let mut d = format!("M{:.3},{:.3}", start.x, start.y);

    let mut segments = vec![(start_deg + sweep, sweep)];
    if sweep >= 360.0 {
        segments = vec![(start_deg + 180.0, 180.0), (start_deg + 360.0, 180.0)];
    }
    for (to_deg, span) in segments {
        let end = point_on_ellipse(&rect, to_deg);
        let large_arc = if span > 180.0 { 1 } else { 0 };
        // sweep-flag 1 = clockwise on screen (y down)
        d.push_str(&format!(
            " A{:.3},{:.3} 0 {},1 {:.3},{:.3}",
            rx, ry, large_arc, end.x, end.y
        ));
    }
    d
}

fn label_to_svg(position: Point, text: &str, style: &RenderStyle) -> String {
    let mut out = format!(
        "  <text font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\" stroke=\"none\">",
        LABEL_FONT_SIZE,
        escape_xml(&style.color)
    );
    for (i, line) in text.lines().enumerate() {
        // y is the baseline, so the first line sits one font size down
        let baseline = position.y + LABEL_FONT_SIZE * (i + 1) as f64;
        out.push_str(&format!(
            "<tspan x=\"{:.3}\" y=\"{:.3}\">{}</tspan>",
            position.x,
            baseline,
            escape_xml(line)
        ));
    }
    out.push_str("</text>\n");
    out
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Paint the draft onto a pixmap of the draft's canvas size.
pub fn rasterize(draft: &Draft, style: &RenderStyle) -> Result<Pixmap> {
    style.validate()?;
    let svg = to_svg(draft, style);

    let mut usvg_options = usvg::Options::default();
    let fontdb = usvg_options.fontdb_mut();
    fontdb.load_font_data(LABEL_FONT.to_vec());
    fontdb.set_sans_serif_family(LABEL_FONT_FAMILY);
    let tree = usvg::Tree::from_str(&svg, &usvg_options).map_err(DraftError::render)?;

    let canvas = draft.canvas;
    let mut pixmap = Pixmap::new(canvas.width, canvas.height).ok_or_else(|| {
        DraftError::render(format!("cannot allocate a {}x{} canvas", canvas.width, canvas.height))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    debug!(width = canvas.width, height = canvas.height, "rasterized draft");
    Ok(pixmap)
}

/// Encode the draft in the requested format.
pub fn encode(draft: &Draft, format: OutputFormat, style: &RenderStyle) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Svg => {
            style.validate()?;
            Ok(to_svg(draft, style).into_bytes())
        }
        OutputFormat::Png => rasterize(draft, style)?
            .encode_png()
            .map_err(DraftError::render),
    }
}

/// Path the draft is saved to: `<dir>/<name>.<ext>`.
pub fn output_path(draft: &Draft, dir: &Path, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", draft.name, format.extension()))
}

/// Hidden sibling the image is written to before the rename. The process id
/// keeps concurrent runs on the same pattern name apart.
fn temp_path(draft: &Draft, dir: &Path, format: OutputFormat) -> PathBuf {
    dir.join(format!(
        ".{}.{}.{}.tmp",
        draft.name,
        std::process::id(),
        format.extension()
    ))
}

/// Render and write the draft to `<dir>/<name>.<ext>`, replacing any
/// existing file.
///
/// The image is encoded in memory, written to a hidden sibling file and then
/// renamed over the destination, so a failure never leaves a partial image
/// under the final name.
pub fn save(draft: &Draft, dir: &Path, format: OutputFormat, style: &RenderStyle) -> Result<PathBuf> {
    let bytes = encode(draft, format, style)?;

    let path = output_path(draft, dir, format);
    let tmp = temp_path(draft, dir, format);

    let written = fs::write(&tmp, &bytes).and_then(|_| fs::rename(&tmp, &path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(DraftError::render(format!("{}: {}", path.display(), e)));
    }

    info!(
        path = %path.display(),
        width = draft.canvas.width,
        height = draft.canvas.height,
        bytes = bytes.len(),
        "wrote pattern"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment::{Canvas, Garment};

    fn sample_draft() -> Draft {
        Draft {
            name: "sample".to_string(),
            garment: Garment::Pants,
            canvas: Canvas { width: 200, height: 120 },
            primitives: vec![
                Primitive::line(0.0, 0.0, 150.0, 0.0),
                Primitive::guide(10.0, 10.0, 60.0, 60.0),
                Primitive::arc(Rect::from_coords(20.0, 20.0, 80.0, 80.0), 270.0, 0.0),
                Primitive::ReferenceSquare {
                    bounds: Rect::from_coords(150.0, 70.0, 190.0, 110.0),
                },
                Primitive::label(Point::new(150.0, 40.0), "cm\nSquare"),
            ],
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tailor-render-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn svg_has_one_element_per_primitive() {
        let svg = to_svg(&sample_draft(), &RenderStyle::default());
        assert!(svg.contains(r#"width="200" height="120""#));
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("<path").count(), 1);
        assert_eq!(svg.matches("<tspan").count(), 2);
        assert!(svg.contains(r#"stroke-width="5""#));
        assert!(svg.contains(r#"stroke-width="1""#));
        assert!(svg.contains(r#"stroke="blue""#));
    }

    #[test]
    fn quarter_arc_path() {
        // 270 -> 0 on a 60x60 box centred at (50, 50): top to right
        let d = arc_path(&Rect::from_coords(20.0, 20.0, 80.0, 80.0), 270.0, 0.0);
        assert_eq!(d, "M50.000,20.000 A30.000,30.000 0 0,1 80.000,50.000");
    }

    #[test]
    fn full_turn_is_two_halves() {
        let d = arc_path(&Rect::from_coords(0.0, 0.0, 10.0, 10.0), 0.0, 0.0);
        assert_eq!(d.matches(" A").count(), 2);
    }

    #[test]
    fn xml_is_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn png_is_deterministic() {
        let draft = sample_draft();
        let style = RenderStyle::default();
        let first = encode(&draft, OutputFormat::Png, &style).unwrap();
        let second = encode(&draft, OutputFormat::Png, &style).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn raster_has_white_background_and_blue_strokes() {
        let pixmap = rasterize(&sample_draft(), &RenderStyle::default()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (200, 120));

        let corner = pixmap.pixel(5, 115).unwrap();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (255, 255, 255));

        // inside the reference square
        let square = pixmap.pixel(170, 90).unwrap();
        assert_eq!((square.red(), square.green(), square.blue()), (0, 0, 255));
    }

    #[test]
    fn save_writes_named_file_and_overwrites() {
        let dir = scratch_dir("save");
        let draft = sample_draft();
        let style = RenderStyle::default();

        let path = save(&draft, &dir, OutputFormat::Png, &style).unwrap();
        assert_eq!(path, dir.join("sample.png"));
        let again = save(&draft, &dir, OutputFormat::Png, &style).unwrap();
        assert_eq!(path, again);

        let (w, h) = image::image_dimensions(&path).unwrap();
        assert_eq!((w, h), (200, 120));
        assert!(!temp_path(&draft, &dir, OutputFormat::Png).exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_svg_uses_svg_extension() {
        let dir = scratch_dir("svg");
        let path = save(&sample_draft(), &dir, OutputFormat::Svg, &RenderStyle::default()).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("svg"));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<?xml"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_destination_is_a_render_failure() {
        let missing = std::env::temp_dir().join(format!("tailor-missing-{}", std::process::id())).join("nope");
        let err = save(&sample_draft(), &missing, OutputFormat::Png, &RenderStyle::default()).unwrap_err();
        assert!(matches!(err, DraftError::RenderFailure(_)));
        assert!(!missing.join("sample.png").exists());
    }

    #[test]
    fn png_paints_labels_with_bundled_font() {
        let with_label = sample_draft();
        let mut without_label = sample_draft();
        without_label
            .primitives
            .retain(|p| !matches!(p, Primitive::Label { .. }));

        let style = RenderStyle::default();
        let a = encode(&with_label, OutputFormat::Png, &style).unwrap();
        let b = encode(&without_label, OutputFormat::Png, &style).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unparseable_color_is_rejected() {
        let style = RenderStyle {
            color: "notacolor".to_string(),
            ..RenderStyle::default()
        };
        let err = rasterize(&sample_draft(), &style).unwrap_err();
        assert!(matches!(err, DraftError::RenderFailure(ref msg) if msg.contains("color")));

        let style = RenderStyle {
            background: "???".to_string(),
            ..RenderStyle::default()
        };
        assert!(encode(&sample_draft(), OutputFormat::Svg, &style).is_err());
    }

    #[test]
    fn hex_and_named_colors_are_accepted() {
        let style = RenderStyle {
            color: "#1d3557".to_string(),
            background: "ivory".to_string(),
            ..RenderStyle::default()
        };
        assert!(style.validate().is_ok());
    }

    #[test]
    fn non_positive_widths_are_rejected() {
        for width in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let structural = RenderStyle {
                structural_width: width,
                ..RenderStyle::default()
            };
            assert!(structural.validate().is_err(), "structural_width {}", width);

            let guide = RenderStyle {
                guide_width: width,
                ..RenderStyle::default()
            };
            assert!(guide.validate().is_err(), "guide_width {}", width);
        }
    }

    #[test]
    fn invalid_style_writes_no_file() {
        let dir = scratch_dir("bad-style");
        let style = RenderStyle {
            structural_width: -5.0,
            ..RenderStyle::default()
        };
        assert!(save(&sample_draft(), &dir, OutputFormat::Png, &style).is_err());
        assert!(!dir.join("sample.png").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn temp_file_name_carries_process_id() {
        let draft = sample_draft();
        let tmp = temp_path(&draft, Path::new("out"), OutputFormat::Png);
        let name = tmp.file_name().and_then(|n| n.to_str()).unwrap();
        assert_eq!(name, format!(".sample.{}.png.tmp", std::process::id()));
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::from_name("PNG"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_name("svg"), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_name("gif"), None);
    }
}
