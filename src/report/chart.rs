//! The stacked bar chart written by `gbstat report`.
//!
//! Each genome gets one bar made of two stacked segments: hypothetical
//! proteins at the bottom and non-hypothetical genes on top. Bars with at
//! least one classified product carry the share of each segment as a rotated
//! percentage label.

use std::io;
use std::io::Write;
use std::path::Path;

use crate::errors::BuildError;
use crate::report::collect::ReportTable;
use crate::utils::artifact::write_atomically;
use crate::utils::display::escape_xml;
use crate::utils::display::PercentageFormat;

/// Title of the chart.
pub const TITLE: &str = "Hypothetical vs. Non-Hypothetical Proteins per Genome";

/// Label of the x axis.
pub const X_LABEL: &str = "Genome";

/// Label of the y axis.
pub const Y_LABEL: &str = "Number of Proteins";

/// Legend entry for the bottom segment.
pub const HYPOTHETICAL_LEGEND: &str = "Hypothetical Protein Count";

/// Legend entry for the top segment.
pub const NON_HYPOTHETICAL_LEGEND: &str = "Non-Hypothetical Gene Count";

const HYPOTHETICAL_COLOR: &str = "#e07a5f";
const NON_HYPOTHETICAL_COLOR: &str = "#3d85c6";

const LEFT: f64 = 80.0;
const RIGHT: f64 = 240.0;
const TOP: f64 = 50.0;
const BOTTOM: f64 = 140.0;
const PLOT_H: f64 = 320.0;
const MIN_PLOT_W: f64 = 240.0;
const BAR_SLOT: f64 = 60.0;
const BAR_W: f64 = 36.0;
const Y_TICKS: usize = 6;

/// Approximate advance of one character of an x axis label (font-size 11).
const LABEL_CHAR_W: f64 = 6.6;

/// A single stacked bar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bar {
    /// The genome the bar belongs to. Used as the x axis category.
    pub genome_name: String,

    /// Height of the bottom segment.
    pub hypothetical: u64,

    /// Height of the top segment.
    pub non_hypothetical: u64,
}

impl Bar {
    /// Combined height of both segments.
    pub fn total(&self) -> u64 {
        self.hypothetical + self.non_hypothetical
    }

    /// The percentage labels for the bottom and top segments, or `None` if
    /// the bar is empty.
    pub fn labels(&self) -> Option<(String, String)> {
        let total = self.total();
        if total == 0 {
            return None;
        }

        Some((
            PercentageFormat(self.hypothetical, total).to_string(),
            PercentageFormat(self.non_hypothetical, total).to_string(),
        ))
    }
}

/// Everything needed to draw the chart, derived from a [`ReportTable`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChartSpec {
    bars: Vec<Bar>,
}

impl From<&ReportTable> for ChartSpec {
    fn from(table: &ReportTable) -> Self {
        let bars = table
            .rows()
            .iter()
            .map(|row| Bar {
                genome_name: row.genome_name.clone(),
                hypothetical: row.record.hypothetical_protein_count,
                non_hypothetical: row.record.non_hypothetical_gene_count,
            })
            .collect();

        ChartSpec { bars }
    }
}

impl ChartSpec {
    /// The bars of the chart, in table order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Height of the tallest bar.
    pub fn max_total(&self) -> u64 {
        self.bars.iter().map(Bar::total).max().unwrap_or(0)
    }

    /// The left and bottom margins, grown so that the longest genome name
    /// fits once rotated under its bar.
    pub fn margins(&self) -> (f64, f64) {
        let longest = self
            .bars
            .iter()
            .map(|bar| bar.genome_name.chars().count())
            .max()
            .unwrap_or(0);

        // Labels are rotated by 45 degrees, so they reach down and to the
        // left by the same amount.
        let extent = longest as f64 * LABEL_CHAR_W * std::f64::consts::FRAC_1_SQRT_2;
        let left = LEFT.max(extent - BAR_SLOT / 2.0 + 4.0);
        let bottom = BOTTOM.max(12.0 + extent + 40.0);
        (left, bottom)
    }

    /// Renders the chart as an SVG document.
    pub fn render<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        let (left, bottom) = self.margins();
        let plot_w = (self.bars.len() as f64 * BAR_SLOT).max(MIN_PLOT_W);
        let w = left + plot_w + RIGHT;
        let h = TOP + PLOT_H + bottom;
        let (step, count) = y_ticks(self.max_total(), Y_TICKS);
        let y_max = step * (count - 1) as f64;

        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\" font-family=\"sans-serif\">",
            w, h, w, h
        )?;
        writeln!(
            out,
            "<rect x=\"0\" y=\"0\" width=\"{:.0}\" height=\"{:.0}\" fill=\"#fff\"/>",
            w, h
        )?;
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"28\" font-size=\"16\" font-weight=\"bold\" fill=\"#222\" text-anchor=\"middle\">{}</text>",
            left + plot_w / 2.0,
            TITLE
        )?;
        writeln!(
            out,
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"#fff\" stroke=\"#ddd\"/>",
            left, TOP, plot_w, PLOT_H
        )?;

        for i in 0..count {
            let v = step * i as f64;
            let y = TOP + PLOT_H - v / y_max * PLOT_H;
            writeln!(
                out,
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#eee\"/>",
                left,
                y,
                left + plot_w,
                y
            )?;
            writeln!(
                out,
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"#666\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>",
                left - 6.0,
                y,
                v as u64
            )?;
        }

        for (i, bar) in self.bars.iter().enumerate() {
            let x = left + i as f64 * BAR_SLOT + (BAR_SLOT - BAR_W) / 2.0;
            let cx = x + BAR_W / 2.0;
            let hyp_h = bar.hypothetical as f64 / y_max * PLOT_H;
            let hyp_y = TOP + PLOT_H - hyp_h;
            let non_h = bar.non_hypothetical as f64 / y_max * PLOT_H;
            let non_y = hyp_y - non_h;

            writeln!(
                out,
                "<rect class=\"segment hypothetical\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>",
                x, hyp_y, BAR_W, hyp_h, HYPOTHETICAL_COLOR
            )?;
            writeln!(
                out,
                "<rect class=\"segment non-hypothetical\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>",
                x, non_y, BAR_W, non_h, NON_HYPOTHETICAL_COLOR
            )?;

            if let Some((hyp_label, non_label)) = bar.labels() {
                draw_segment_label(out, cx, hyp_y + hyp_h / 2.0, &hyp_label)?;
                draw_segment_label(out, cx, non_y + non_h / 2.0, &non_label)?;
            }

            let ty = TOP + PLOT_H + 12.0;
            writeln!(
                out,
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"#444\" text-anchor=\"end\" transform=\"rotate(-45 {:.1} {:.1})\">{}</text>",
                cx,
                ty,
                cx,
                ty,
                escape_xml(&bar.genome_name)
            )?;
        }

        draw_axis_labels(out, left, plot_w, h)?;
        draw_legend(out, left + plot_w + 20.0, TOP + 10.0)?;

        writeln!(out, "</svg>")?;
        Ok(())
    }
}

fn draw_segment_label<W>(out: &mut W, x: f64, y: f64, label: &str) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(
        out,
        "<text class=\"label\" x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"#fff\" text-anchor=\"middle\" dominant-baseline=\"middle\" transform=\"rotate(-90 {:.1} {:.1})\">{}</text>",
        x, y, x, y, label
    )
}

fn draw_axis_labels<W>(out: &mut W, left: f64, plot_w: f64, h: f64) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" fill=\"#444\" text-anchor=\"middle\">{}</text>",
        left + plot_w / 2.0,
        h - 12.0,
        X_LABEL
    )?;

    let yx = 24.0;
    let yy = TOP + PLOT_H / 2.0;
    writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" fill=\"#444\" text-anchor=\"middle\" transform=\"rotate(-90 {:.1} {:.1})\">{}</text>",
        yx, yy, yx, yy, Y_LABEL
    )
}

fn draw_legend<W>(out: &mut W, x: f64, y: f64) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let entries = [
        (NON_HYPOTHETICAL_COLOR, NON_HYPOTHETICAL_LEGEND),
        (HYPOTHETICAL_COLOR, HYPOTHETICAL_LEGEND),
    ];

    for (i, (color, name)) in entries.iter().enumerate() {
        let ey = y + i as f64 * 22.0;
        writeln!(
            out,
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"14\" height=\"14\" fill=\"{}\"/>",
            x, ey, color
        )?;
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"#444\" dominant-baseline=\"middle\">{}</text>",
            x + 20.0,
            ey + 7.0,
            name
        )?;
    }

    Ok(())
}

/// Picks a step of 1, 2, or 5 times a power of ten (never below 1) so that
/// roughly `ticks` gridlines cover `0..=max`. Returns the step and the
/// number of gridlines, the last of which is at or above `max`.
fn y_ticks(max: u64, ticks: usize) -> (f64, usize) {
    let max = max.max(1) as f64;
    let rough = max / (ticks as f64 - 1.0);
    let mag = 10f64.powf(rough.log10().floor());
    let norm = rough / mag;
    let step = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    } * mag;
    let step = step.max(1.0);
    let count = (max / step).ceil() as usize + 1;
    (step, count)
}

/// Writes the chart for `spec` as SVG to the file at `path`.
pub fn write<P>(spec: &ChartSpec, path: P) -> Result<(), BuildError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    write_atomically(path, |w| spec.render(w)).map_err(|source| BuildError::ChartWrite {
        path: path.to_path_buf(),
        source,
    })
}
