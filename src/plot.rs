use plotters::prelude::*;
use serde::Deserialize;

use crate::locale::{self, Locale, Message};
use crate::{Polynomial, RootError};

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 360;
/// Internal rendering resolution multiplier for sub-pixel precision.
/// Plotters maps to integer coordinates, so we render at a higher resolution
/// and scale down via SVG viewBox to get smooth curves.
const RESOLUTION_SCALE: u32 = 10;
/// Largest accepted width or height, in display pixels.
pub const MAX_IMAGE_SIZE: u32 = 10_000;
pub const NUM_SAMPLES: usize = 500;

/// Curve color (blue) and root marker color (red).
const CURVE_COLOR: (u8, u8, u8) = (0x5E, 0x81, 0xB5);
const ROOT_COLOR: (u8, u8, u8) = (0xD9, 0x51, 0x19);

/// Sampling domain and image size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
  pub x_min: f64,
  pub x_max: f64,
  pub samples: usize,
  pub width: u32,
  pub height: u32,
}

impl Default for PlotSettings {
  fn default() -> Self {
    Self {
      x_min: -10.0,
      x_max: 10.0,
      samples: NUM_SAMPLES,
      width: DEFAULT_WIDTH,
      height: DEFAULT_HEIGHT,
    }
  }
}

/// Text drawn on the chart.
#[derive(Debug, Clone)]
pub struct PlotLabels {
  pub title: String,
  pub curve: String,
  pub roots: String,
}

impl PlotLabels {
  pub fn localized(locale: Locale) -> Self {
    Self {
      title: locale::text(locale, Message::PlotTitle).to_string(),
      curve: locale::text(locale, Message::CurveLabel).to_string(),
      roots: locale::text(locale, Message::RootsLabel).to_string(),
    }
  }
}

fn plot_err(e: impl std::fmt::Display) -> RootError {
  RootError::PlotError(e.to_string())
}

/// Evenly spaced samples of `poly` over the configured domain.
pub fn sample_polynomial(
  poly: &Polynomial,
  settings: &PlotSettings,
) -> Vec<(f64, f64)> {
  let step = (settings.x_max - settings.x_min) / (settings.samples - 1) as f64;
  (0..settings.samples)
    .map(|i| {
      let x = settings.x_min + i as f64 * step;
      (x, poly.evaluate(x))
    })
    .collect()
}

/// Split points into contiguous finite segments, breaking at NaN/Infinity
fn split_into_segments(
  points: &[(f64, f64)],
) -> Vec<Vec<(f64, f64)>> {
  let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
  let mut current: Vec<(f64, f64)> = Vec::new();

  for &(x, y) in points {
    if y.is_finite() {
      current.push((x, y));
    } else if current.len() > 1 {
      segments.push(std::mem::take(&mut current));
    } else {
      current.clear();
    }
  }
  if current.len() > 1 {
    segments.push(current);
  }
  segments
}

/// Compute a "nice" major tick step given the axis range and desired label count.
fn nice_step(range: f64, target_labels: usize) -> f64 {
  let raw = range / target_labels as f64;
  let mag = 10_f64.powf(raw.abs().log10().floor());
  let norm = raw / mag;
  let nice = if norm <= 1.0 {
    1.0
  } else if norm <= 2.0 {
    2.0
  } else if norm <= 5.0 {
    5.0
  } else {
    10.0
  };
  nice * mag
}

fn is_major_tick(v: f64, step: f64) -> bool {
  if step == 0.0 {
    return true;
  }
  let remainder = (v / step).round() * step - v;
  remainder.abs() < step * 1e-9
}

/// Format a tick value, dropping the trailing ".0" for integers.
fn format_tick(v: f64) -> String {
  if (v - v.round()).abs() < 1e-9 {
    format!("{}", v.round() as i64)
  } else {
    format!("{v:.1}")
  }
}

/// Y range covering the finite samples and the x axis, with 4% padding.
fn y_range(points: &[(f64, f64)]) -> (f64, f64) {
  let (lo, hi) = points
    .iter()
    .map(|&(_, y)| y)
    .filter(|y| y.is_finite())
    .fold((0.0_f64, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
  let span = hi - lo;
  let padding = if span.abs() < f64::EPSILON {
    1.0
  } else {
    span * 0.04
  };
  (lo - padding, hi + padding)
}

/// Render `poly` over the configured domain as an SVG document, with a
/// marker on the x axis at every root inside the domain.
pub fn plot_polynomial(
  poly: &Polynomial,
  roots: &[f64],
  settings: &PlotSettings,
  labels: &PlotLabels,
) -> Result<String, RootError> {
  if !(settings.x_min < settings.x_max) || settings.samples < 2 {
    return Err(plot_err(format!(
      "invalid domain [{}, {}] with {} samples",
      settings.x_min, settings.x_max, settings.samples
    )));
  }
  if settings.width == 0 || settings.height == 0 {
    return Err(plot_err("image size must be positive"));
  }
  if settings.width > MAX_IMAGE_SIZE || settings.height > MAX_IMAGE_SIZE {
    return Err(plot_err(format!(
      "image size too large: {}x{} exceeds {MAX_IMAGE_SIZE}",
      settings.width, settings.height
    )));
  }

  let points = sample_polynomial(poly, settings);
  let (x_min, x_max) = (settings.x_min, settings.x_max);
  let (y_min, y_max) = y_range(&points);
  let visible_roots: Vec<f64> = roots
    .iter()
    .copied()
    .filter(|r| (x_min..=x_max).contains(r))
    .collect();

  let svg_width = settings.width;
  let svg_height = settings.height;
  let render_width = svg_width * RESOLUTION_SCALE;
  let render_height = svg_height * RESOLUTION_SCALE;
  let sf = RESOLUTION_SCALE as f64;
  let s = RESOLUTION_SCALE as i32;

  let top_margin = 25 * s;
  let x_label_area = 25 * RESOLUTION_SCALE + 16 * RESOLUTION_SCALE;
  let y_label_area = 40 * RESOLUTION_SCALE + 18 * RESOLUTION_SCALE;

  let mut buf = String::new();
  {
    let root = SVGBackend::with_string(&mut buf, (render_width, render_height))
      .into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let tick = 4 * s;
    let dark_gray = RGBColor(0x66, 0x66, 0x66);
    let light_gray = RGBColor(0xCC, 0xCC, 0xCC);

    let mut chart = ChartBuilder::on(&root)
      .margin_top(top_margin as u32)
      .margin_right(10 * s as u32)
      .margin_bottom(10 * s as u32)
      .margin_left(10 * s as u32)
      .x_label_area_size(x_label_area)
      .y_label_area_size(y_label_area)
      .build_cartesian_2d(x_min..x_max, y_min..y_max)
      .map_err(plot_err)?;

    // ~5 labelled major ticks with 5 minor subdivisions each
    let x_major = nice_step(x_max - x_min, 5);
    let y_major = nice_step(y_max - y_min, 5);
    let x_tick_count = ((x_max - x_min) / (x_major / 5.0)).round() as usize + 1;
    let y_tick_count = ((y_max - y_min) / (y_major / 5.0)).round() as usize + 1;

    chart
      .configure_mesh()
      .disable_mesh()
      .x_labels(x_tick_count)
      .y_labels(y_tick_count)
      .x_label_formatter(&move |v: &f64| {
        if is_major_tick(*v, x_major) {
          format_tick(*v)
        } else {
          String::new()
        }
      })
      .y_label_formatter(&move |v: &f64| {
        if is_major_tick(*v, y_major) {
          format_tick(*v)
        } else {
          String::new()
        }
      })
      .axis_style(dark_gray.stroke_width(RESOLUTION_SCALE))
      .label_style(
        ("sans-serif", RESOLUTION_SCALE as f64 * 11.0)
          .into_font()
          .color(&dark_gray),
      )
      .set_tick_mark_size(LabelAreaPosition::Left, tick)
      .set_tick_mark_size(LabelAreaPosition::Bottom, tick)
      .draw()
      .map_err(plot_err)?;

    if x_min < 0.0 && x_max > 0.0 {
      chart
        .draw_series(std::iter::once(PathElement::new(
          vec![(0.0, y_min), (0.0, y_max)],
          light_gray.stroke_width(RESOLUTION_SCALE),
        )))
        .map_err(plot_err)?;
    }
    // y = 0 reference line, always inside the y range
    chart
      .draw_series(std::iter::once(PathElement::new(
        vec![(x_min, 0.0), (x_max, 0.0)],
        BLACK.stroke_width(8),
      )))
      .map_err(plot_err)?;

    let (r, g, b) = CURVE_COLOR;
    for segment in split_into_segments(&points) {
      chart
        .draw_series(std::iter::once(PathElement::new(
          segment,
          RGBColor(r, g, b).stroke_width(15), // 1.5px at display size
        )))
        .map_err(plot_err)?;
    }

    let (r, g, b) = ROOT_COLOR;
    let marker_size = 4 * RESOLUTION_SCALE;
    chart
      .draw_series(visible_roots.iter().map(|&x| {
        Circle::new((x, 0.0), marker_size, RGBColor(r, g, b).filled())
      }))
      .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
  }

  rewrite_svg_header(
    &mut buf,
    svg_width,
    svg_height,
    render_width,
    render_height,
  );

  let margin_left = 10.0 * sf;
  let margin_top = top_margin as f64;
  let plot_x0 = margin_left + y_label_area as f64;
  let plot_w =
    render_width as f64 - margin_left - 10.0 * sf - y_label_area as f64;
  let plot_h =
    render_height as f64 - margin_top - 10.0 * sf - x_label_area as f64;
  let axis_y = margin_top + plot_h;
  let font_size = sf * 11.0;
  let title_font_size = sf * 13.0;

  if let Some(insert_pos) = buf.rfind("</svg>") {
    let mut labels_svg = String::new();

    let cx = plot_x0 + plot_w / 2.0;
    let ty = margin_top - title_font_size * 0.5;
    labels_svg.push_str(&format!(
      "<text x=\"{cx:.1}\" y=\"{ty:.1}\" text-anchor=\"middle\" \
       font-family=\"sans-serif\" font-size=\"{title_font_size:.0}\" \
       fill=\"#333\">{}</text>\n",
      html_escape(&labels.title)
    ));

    let base_y = axis_y + font_size * 2.8;
    labels_svg.push_str(&format!(
      "<text x=\"{cx:.1}\" y=\"{base_y:.1}\" text-anchor=\"middle\" \
       font-family=\"sans-serif\" font-size=\"{font_size:.0}\" \
       fill=\"#666\">x</text>\n"
    ));
    let cy = margin_top + plot_h / 2.0;
    let lx = margin_left + font_size * 0.8;
    labels_svg.push_str(&format!(
      "<text x=\"{lx:.1}\" y=\"{cy:.1}\" text-anchor=\"middle\" \
       font-family=\"sans-serif\" font-size=\"{font_size:.0}\" \
       fill=\"#666\" transform=\"rotate(-90,{lx:.1},{cy:.1})\">y</text>\n"
    ));

    labels_svg.push_str(&legend_svg(
      plot_x0 + plot_w - 120.0 * sf,
      margin_top + 6.0 * sf,
      font_size,
      labels,
      !visible_roots.is_empty(),
    ));

    buf.insert_str(insert_pos, &labels_svg);
  }

  Ok(buf)
}

/// Legend box in the top-right corner: a line swatch for the curve and,
/// when any root is drawn, a dot swatch for the markers.
fn legend_svg(
  x: f64,
  y: f64,
  font_size: f64,
  labels: &PlotLabels,
  with_roots: bool,
) -> String {
  let row_h = font_size * 1.5;
  let rows = if with_roots { 2.0 } else { 1.0 };
  let width = font_size * 10.0;
  let swatch = font_size * 2.0;
  let mut out = format!(
    "<rect class=\"legend\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{width:.1}\" \
     height=\"{:.1}\" fill=\"white\" fill-opacity=\"0.8\" stroke=\"#999\"/>\n",
    rows * row_h + font_size * 0.5
  );

  let (r, g, b) = CURVE_COLOR;
  let ly = y + row_h * 0.5 + font_size * 0.25;
  out.push_str(&format!(
    "<line x1=\"{:.1}\" y1=\"{ly:.1}\" x2=\"{:.1}\" y2=\"{ly:.1}\" \
     stroke=\"rgb({r},{g},{b})\" stroke-width=\"15\"/>\n",
    x + font_size * 0.5,
    x + font_size * 0.5 + swatch
  ));
  out.push_str(&format!(
    "<text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" \
     font-size=\"{font_size:.0}\" fill=\"#333\">{}</text>\n",
    x + swatch + font_size,
    ly + font_size * 0.35,
    html_escape(&labels.curve)
  ));

  if with_roots {
    let (r, g, b) = ROOT_COLOR;
    let ly = ly + row_h;
    out.push_str(&format!(
      "<circle class=\"legend\" cx=\"{:.1}\" cy=\"{ly:.1}\" r=\"{:.1}\" \
       fill=\"rgb({r},{g},{b})\"/>\n",
      x + font_size * 0.5 + swatch / 2.0,
      font_size * 0.35
    ));
    out.push_str(&format!(
      "<text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" \
       font-size=\"{font_size:.0}\" fill=\"#333\">{}</text>\n",
      x + swatch + font_size,
      ly + font_size * 0.35,
      html_escape(&labels.roots)
    ));
  }
  out
}

/// Escape special characters for SVG text content.
fn html_escape(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

/// Rewrite the SVG header to use viewBox for display scaling.
fn rewrite_svg_header(
  buf: &mut String,
  svg_width: u32,
  svg_height: u32,
  render_width: u32,
  render_height: u32,
) {
  if let Some(pos) = buf.find('>') {
    let new_header = format!(
      "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"xMidYMid meet\" xmlns=\"http://www.w3.org/2000/svg\"",
      svg_width, svg_height, render_width, render_height,
    );
    buf.replace_range(..pos, &new_header);
  }
}
