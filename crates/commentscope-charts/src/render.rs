//! PNG chart rendering via plotters

use crate::aggregate::Aggregates;
use crate::error::ChartsError;
use commentscope_domain::{Category, Frame};
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (960, 540);

fn category_color(category: Category) -> RGBColor {
    match category {
        Category::Justified => RGBColor(0x2e, 0xcc, 0x71),
        Category::Excessive => RGBColor(0xe7, 0x4c, 0x3c),
        Category::Neutral => RGBColor(0x95, 0xa5, 0xa6),
        Category::Error => RGBColor(0x7f, 0x8c, 0x8d),
    }
}

fn frame_color(frame: Frame) -> RGBColor {
    match frame {
        Frame::Morality => RGBColor(0x9b, 0x59, 0xb6),
        Frame::Conflict => RGBColor(0xe6, 0x7e, 0x22),
        Frame::Legality => RGBColor(0x34, 0x98, 0xdb),
        Frame::Error => RGBColor(0x7f, 0x8c, 0x8d),
    }
}

fn render_err(e: impl std::fmt::Display) -> ChartsError {
    ChartsError::Render(e.to_string())
}

/// Category counts per channel bias, as grouped bars
pub fn sentiment_by_bias(aggregates: &Aggregates, path: &Path) -> Result<(), ChartsError> {
    let groups: Vec<String> = aggregates.biases.iter().map(|b| b.to_string()).collect();
    let series: Vec<(String, RGBColor, Vec<u32>)> = Category::substantive()
        .into_iter()
        .map(|category| {
            (
                category.to_string(),
                category_color(category),
                aggregates
                    .biases
                    .iter()
                    .map(|bias| aggregates.category_count(*bias, category) as u32)
                    .collect(),
            )
        })
        .collect();

    grouped_bars(
        path,
        "Sentiment Distribution by Channel Bias",
        "Number of Comments",
        &groups,
        &series,
        aggregates.max_category_count() as u32,
    )
}

/// Frame counts per channel bias, as grouped bars
pub fn framing_analysis(aggregates: &Aggregates, path: &Path) -> Result<(), ChartsError> {
    let groups: Vec<String> = aggregates.biases.iter().map(|b| b.to_string()).collect();
    let series: Vec<(String, RGBColor, Vec<u32>)> = Frame::substantive()
        .into_iter()
        .map(|frame| {
            (
                frame.to_string(),
                frame_color(frame),
                aggregates
                    .biases
                    .iter()
                    .map(|bias| aggregates.frame_count(*bias, frame) as u32)
                    .collect(),
            )
        })
        .collect();

    grouped_bars(
        path,
        "Framing Distribution by Channel Bias",
        "Number of Comments",
        &groups,
        &series,
        aggregates.max_frame_count() as u32,
    )
}

/// Category x frame counts as a colored grid with count labels
pub fn sentiment_frame_heatmap(aggregates: &Aggregates, path: &Path) -> Result<(), ChartsError> {
    let root = BitMapBackend::new(path, (760, 560)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sentiment vs Framing Relationship", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d((0i32..3i32).into_segmented(), (0i32..3i32).into_segmented())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(3)
        .y_labels(3)
        .x_label_formatter(&|value| segment_label(value, &Frame::substantive()))
        .y_label_formatter(&|value| segment_label(value, &Category::substantive()))
        .x_desc("Frame")
        .y_desc("Category")
        .draw()
        .map_err(render_err)?;

    let max = aggregates.grid_max().max(1);

    chart
        .draw_series((0..3).flat_map(|cat| (0..3).map(move |frame| (cat, frame))).map(
            |(cat, frame)| {
                let count = aggregates.grid_count(cat, frame);
                Rectangle::new(
                    [
                        (SegmentValue::Exact(frame as i32), SegmentValue::Exact(cat as i32)),
                        (
                            SegmentValue::Exact(frame as i32 + 1),
                            SegmentValue::Exact(cat as i32 + 1),
                        ),
                    ],
                    heat_color(count, max).filled(),
                )
            },
        ))
        .map_err(render_err)?;

    chart
        .draw_series((0..3).flat_map(|cat| (0..3).map(move |frame| (cat, frame))).map(
            |(cat, frame)| {
                let count = aggregates.grid_count(cat, frame);
                Text::new(
                    count.to_string(),
                    (
                        SegmentValue::CenterOf(frame as i32),
                        SegmentValue::CenterOf(cat as i32),
                    ),
                    ("sans-serif", 20).into_font().color(&BLACK),
                )
            },
        ))
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

/// Shared grouped-bar layout: one slot per (group, series) pair plus a
/// spacer slot between groups
fn grouped_bars(
    path: &Path,
    title: &str,
    y_desc: &str,
    groups: &[String],
    series: &[(String, RGBColor, Vec<u32>)],
    max_count: u32,
) -> Result<(), ChartsError> {
    let stride = series.len() + 1;
    let slots = (groups.len() * stride) as i32;
    let y_max = max_count.max(1) + 1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0i32..slots).into_segmented(), 0u32..y_max)
        .map_err(render_err)?;

    let stride_i32 = stride as i32;
    let label_offset = (series.len() / 2) as i32;
    let group_names: Vec<String> = groups.to_vec();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots as usize)
        .x_label_formatter(&move |value| {
            let slot = match value {
                SegmentValue::Exact(v) | SegmentValue::CenterOf(v) => *v,
                SegmentValue::Last => return String::new(),
            };
            let group = (slot / stride_i32) as usize;
            if slot % stride_i32 == label_offset && group < group_names.len() {
                group_names[group].clone()
            } else {
                String::new()
            }
        })
        .y_desc(y_desc)
        .draw()
        .map_err(render_err)?;

    for (series_index, (label, color, values)) in series.iter().enumerate() {
        let color = *color;
        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(color.filled())
                    .margin(2)
                    .data(values.iter().enumerate().map(move |(group, &value)| {
                        ((group * stride + series_index) as i32, value)
                    })),
            )
            .map_err(render_err)?
            .label(label.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

fn segment_label<T: std::fmt::Display>(value: &SegmentValue<i32>, labels: &[T]) -> String {
    match value {
        SegmentValue::Exact(v) | SegmentValue::CenterOf(v) => labels
            .get(*v as usize)
            .map(|label| label.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

/// Light-to-dark heat ramp (YlOrRd-like)
fn heat_color(count: usize, max: usize) -> RGBColor {
    let t = count as f64 / max as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(0xff, 0xbd), lerp(0xff, 0x00), lerp(0xcc, 0x26))
}
