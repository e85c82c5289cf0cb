//! The six benchmark charts, rendered as SVG with plotters.
use std::path::{Path, PathBuf};

use itertools_num::linspace;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::error::{ClassifierError, Result};
use crate::evaluation::Evaluation;
use crate::report::palette::{self, hex, is_light};

pub const CHART_FILES: [&str; 6] = [
    "01_model_performance_dashboard.svg",
    "02_confusion_matrices.svg",
    "03_roc_curves.svg",
    "04_feature_importance_decision_tree.svg",
    "05_feature_correlation_heatmap.svg",
    "06_class_distribution.svg",
];

/// Charts drawn from the decision tree's feature importances.
const IMPORTANCE_CHARTS: [&str; 2] = [CHART_FILES[3], CHART_FILES[4]];

const FONT: &str = "sans-serif";
const TOP_IMPORTANCES: usize = 15;
const TOP_CORRELATED: usize = 10;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ClassifierError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ClassifierError::Plot(err.to_string())
    }
}

fn title_font(size: u32) -> TextStyle<'static> {
    (FONT, size).into_font().style(FontStyle::Bold).into()
}

fn centred(size: u32, color: RGBColor) -> TextStyle<'static> {
    (FONT, size)
        .into_font()
        .color(&color)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

/// Tick label for a category axis whose categories sit at integer positions.
fn category_label(names: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

/// A labelled matrix drawn as coloured cells with centred annotations.
/// Row 0 is drawn at the top; `None` cells are left blank.
struct Heatmap<'a> {
    title: &'a str,
    values: Vec<Vec<Option<f64>>>,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    x_desc: &'a str,
    y_desc: &'a str,
    color: &'a dyn Fn(f64) -> RGBColor,
    annotate: &'a dyn Fn(f64) -> String,
    label_area: u32,
    rotate_x_labels: bool,
}

fn draw_heatmap(area: &Area<'_>, map: &Heatmap<'_>) -> Result<()> {
    let n_rows = map.row_labels.len();
    let n_cols = map.col_labels.len();
    let mut chart = ChartBuilder::on(area)
        .caption(map.title, title_font(18))
        .margin(15)
        .x_label_area_size(if map.rotate_x_labels { map.label_area } else { 50 })
        .y_label_area_size(map.label_area)
        .build_cartesian_2d(-0.5f64..(n_cols as f64 - 0.5), -0.5f64..(n_rows as f64 - 0.5))?;

    let col_labels = map.col_labels.clone();
    let x_fmt = move |v: &f64| category_label(&col_labels, *v);
    // Row 0 sits at the top of the chart
    let row_labels: Vec<String> = map.row_labels.iter().rev().cloned().collect();
    let y_fmt = move |v: &f64| category_label(&row_labels, *v);

    let x_label_style = if map.rotate_x_labels {
        (FONT, 12).into_font().transform(FontTransform::Rotate90).into()
    } else {
        TextStyle::from((FONT, 13).into_font())
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n_cols + 1)
        .y_labels(n_rows + 1)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .x_label_style(x_label_style)
        .y_label_style((FONT, 13))
        .x_desc(map.x_desc)
        .y_desc(map.y_desc)
        .draw()?;

    for (r, row) in map.values.iter().enumerate() {
        let y = (n_rows - 1 - r) as f64;
        for (c, cell) in row.iter().enumerate() {
            let Some(value) = cell else { continue };
            let x = c as f64;
            let fill = (map.color)(*value);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                fill.filled(),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                RGBColor(128, 128, 128).stroke_width(1),
            )))?;
            let text_color = if is_light(fill) { BLACK } else { WHITE };
            chart.draw_series(std::iter::once(Text::new(
                (map.annotate)(*value),
                (x, y),
                centred(14, text_color),
            )))?;
        }
    }
    Ok(())
}

/// Accuracy/F1, cross-validation, ROC AUC and a metrics heatmap in a 2x2 grid.
pub fn plot_performance_dashboard(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (1400, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Model Performance Dashboard", title_font(28))?;
    let panels = root.split_evenly((2, 2));

    let names: Vec<String> = evaluation.models.iter().map(|m| m.name.clone()).collect();
    let n = names.len() as f64;
    let (lo, hi) = (0.85, 1.0);
    let n_folds = evaluation.models.first().map_or(0, |m| m.cv.scores.len());

    // Accuracy & F1
    {
        let mut chart = ChartBuilder::on(&panels[0])
            .caption("Accuracy & F1 Score Comparison", title_font(18))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..(n - 0.5), lo..hi)?;
        let labels = names.clone();
        let fmt = move |v: &f64| category_label(&labels, *v);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(names.len() + 1)
            .x_label_formatter(&fmt)
            .y_desc("Score")
            .light_line_style(WHITE)
            .bold_line_style(BLACK.mix(0.1))
            .draw()?;

        let series = [
            ("Accuracy", hex("#3498db"), -0.35),
            ("F1 Score", hex("#e74c3c"), 0.0),
        ];
        for (label, color, offset) in series {
            chart
                .draw_series(evaluation.models.iter().enumerate().map(|(i, m)| {
                    let value = if label == "Accuracy" { m.metrics.accuracy } else { m.metrics.f1 };
                    let x0 = i as f64 + offset;
                    Rectangle::new([(x0, lo), (x0 + 0.35, value.clamp(lo, hi))], color.filled())
                }))?
                .label(label)
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
        }
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    // Cross-validation with error bars
    {
        let mut chart = ChartBuilder::on(&panels[1])
            .caption(
                format!("Cross-Validation Scores ({}-Fold)", n_folds),
                title_font(18),
            )
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..(n - 0.5), lo..hi)?;
        let labels = names.clone();
        let fmt = move |v: &f64| category_label(&labels, *v);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(names.len() + 1)
            .x_label_formatter(&fmt)
            .y_desc("Mean Accuracy")
            .light_line_style(WHITE)
            .bold_line_style(BLACK.mix(0.1))
            .draw()?;

        let green = hex("#2ecc71");
        for (i, m) in evaluation.models.iter().enumerate() {
            let x = i as f64;
            let top = m.cv.mean.clamp(lo, hi);
            chart.draw_series([
                Rectangle::new([(x - 0.3, lo), (x + 0.3, top)], green.mix(0.7).filled()),
                Rectangle::new([(x - 0.3, lo), (x + 0.3, top)], BLACK.stroke_width(1)),
            ])?;
            let y_min = (m.cv.mean - m.cv.std).clamp(lo, hi);
            let y_max = (m.cv.mean + m.cv.std).clamp(lo, hi);
            chart.draw_series([
                PathElement::new(vec![(x, y_min), (x, y_max)], BLACK.stroke_width(2)),
                PathElement::new(vec![(x - 0.06, y_min), (x + 0.06, y_min)], BLACK.stroke_width(2)),
                PathElement::new(vec![(x - 0.06, y_max), (x + 0.06, y_max)], BLACK.stroke_width(2)),
            ])?;
        }
    }

    // ROC AUC, horizontal bars
    {
        let mut chart = ChartBuilder::on(&panels[2])
            .caption("ROC AUC Score Comparison", title_font(18))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(150)
            .build_cartesian_2d(lo..hi, -0.5f64..(n - 0.5))?;
        let labels = names.clone();
        let fmt = move |v: &f64| category_label(&labels, *v);
        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(names.len() + 1)
            .y_label_formatter(&fmt)
            .x_desc("ROC AUC Score")
            .light_line_style(WHITE)
            .bold_line_style(BLACK.mix(0.1))
            .draw()?;

        let colors = [hex("#9b59b6"), hex("#f39c12"), hex("#1abc9c")];
        for (i, m) in evaluation.models.iter().enumerate() {
            let y = i as f64;
            let value = m.metrics.roc_auc.clamp(lo, hi);
            let color = colors[i % colors.len()];
            chart.draw_series([
                Rectangle::new([(lo, y - 0.4), (value, y + 0.4)], color.filled()),
                Rectangle::new([(lo, y - 0.4), (value, y + 0.4)], BLACK.stroke_width(1)),
            ])?;
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.4}", m.metrics.roc_auc),
                (value - 0.003, y),
                title_font(14)
                    .color(&WHITE)
                    .pos(Pos::new(HPos::Right, VPos::Center)),
            )))?;
        }
    }

    // Metrics heatmap
    let metric_rows = ["Accuracy", "F1 Score", "ROC AUC"];
    let values: Vec<Vec<Option<f64>>> = metric_rows
        .iter()
        .map(|metric| {
            evaluation
                .models
                .iter()
                .map(|m| {
                    Some(match *metric {
                        "Accuracy" => m.metrics.accuracy,
                        "F1 Score" => m.metrics.f1,
                        _ => m.metrics.roc_auc,
                    })
                })
                .collect()
        })
        .collect();
    let flat: Vec<f64> = values.iter().flatten().flatten().copied().collect();
    let min = flat.iter().copied().fold(f64::INFINITY, f64::min);
    let max = flat.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let color = move |v: f64| palette::sample_range(palette::YLGNBU, v, min, max);
    let annotate = |v: f64| format!("{:.4}", v);
    draw_heatmap(
        &panels[3],
        &Heatmap {
            title: "Performance Metrics Heatmap",
            values,
            row_labels: metric_rows.iter().map(|s| s.to_string()).collect(),
            col_labels: names,
            x_desc: "Models",
            y_desc: "Metrics",
            color: &color,
            annotate: &annotate,
            label_area: 90,
            rotate_x_labels: false,
        },
    )?;

    root.present()?;
    Ok(())
}

/// One annotated confusion matrix per model, side by side.
pub fn plot_confusion_matrices(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let width = 500 * evaluation.models.len().max(1) as u32;
    let root = SVGBackend::new(path, (width, 450)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Confusion Matrices for All Models", title_font(26))?;
    let panels = root.split_evenly((1, evaluation.models.len().max(1)));
    let classes = &evaluation.dataset.target_names;

    for (panel, m) in panels.iter().zip(&evaluation.models) {
        let cm = m.confusion.as_array();
        let max = cm.iter().flatten().copied().max().unwrap_or(1).max(1) as f64;
        let color = move |v: f64| palette::sample_range(palette::BLUES, v, 0.0, max);
        let annotate = |v: f64| format!("{}", v.round() as usize);
        let values = cm
            .iter()
            .map(|row| row.iter().map(|&v| Some(v as f64)).collect())
            .collect();
        draw_heatmap(
            panel,
            &Heatmap {
                title: &m.name,
                values,
                row_labels: classes.clone(),
                col_labels: classes.clone(),
                x_desc: "Predicted",
                y_desc: "Actual",
                color: &color,
                annotate: &annotate,
                label_area: 90,
                rotate_x_labels: false,
            },
        )?;

        let (w, _) = panel.dim_in_pixel();
        let note = (FONT, 13).into_font().color(&BLACK);
        panel.draw(&Rectangle::new(
            [(w as i32 - 150, 40), (w as i32 - 15, 82)],
            hex("#f5deb3").mix(0.8).filled(),
        ))?;
        panel.draw(&Text::new(
            format!("Precision: {:.3}", m.confusion.precision()),
            (w as i32 - 142, 46),
            note.clone(),
        ))?;
        panel.draw(&Text::new(
            format!("Recall: {:.3}", m.confusion.recall()),
            (w as i32 - 142, 64),
            note,
        ))?;
    }

    root.present()?;
    Ok(())
}

/// ROC curve of every model against the chance diagonal.
pub fn plot_roc_curves(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("ROC Curves - Model Comparison", title_font(22))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0f64..1.0, 0.0f64..1.05)?;
    chart
        .configure_mesh()
        .x_desc("False Positive Rate")
        .y_desc("True Positive Rate")
        .axis_desc_style(title_font(16))
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.1))
        .draw()?;

    let colors = [hex("#e74c3c"), hex("#3498db"), hex("#2ecc71")];
    for (i, m) in evaluation.models.iter().enumerate() {
        let color = colors[i % colors.len()];
        let points: Vec<(f64, f64)> = m
            .roc
            .fpr
            .iter()
            .copied()
            .zip(m.roc.tpr.iter().copied())
            .collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(3)))?
            .label(format!("{} (AUC = {:.4})", m.name, m.metrics.roc_auc))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    // Dashed chance diagonal
    let dashes = 40;
    chart
        .draw_series((0..dashes).map(|k| {
            let a = k as f64 / dashes as f64;
            let b = a + 0.6 / dashes as f64;
            PathElement::new(vec![(a, a), (b, b)], BLACK.stroke_width(2))
        }))?
        .label("Random Classifier (AUC = 0.5000)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 8, y)], BLACK.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .label_font((FONT, 14))
        .background_style(WHITE.mix(0.9))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Top decision-tree importances, most important at the top.
pub fn plot_feature_importance(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let top = evaluation.top_features(TOP_IMPORTANCES)?;
    let model_name = evaluation
        .feature_importances()
        .map(|(name, _)| name.to_string())
        .unwrap_or_default();
    let names = &evaluation.dataset.feature_names;
    let k = top.len();

    let root = SVGBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let max = top.iter().map(|(_, v)| *v).fold(0.0f64, f64::max).max(1e-6);
    let title = format!("Top {} Feature Importances - {} Classifier", k, model_name);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, title_font(22))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(200)
        .build_cartesian_2d(0.0f64..max * 1.1, -0.5f64..(k as f64 - 0.5))?;

    // Bars are drawn bottom-up, so rank 0 goes to the highest position
    let labels: Vec<String> = top.iter().rev().map(|(i, _)| names[*i].clone()).collect();
    let fmt = move |v: &f64| category_label(&labels, *v);
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(k + 1)
        .y_label_formatter(&fmt)
        .y_label_style((FONT, 13))
        .x_desc("Importance Score")
        .axis_desc_style(title_font(16))
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.1))
        .draw()?;

    let gradient: Vec<f64> = linspace(0.3, 0.9, k).collect();
    chart.draw_series(top.iter().enumerate().flat_map(|(rank, (_, value))| {
        let y = (k - 1 - rank) as f64;
        let color = palette::sample(palette::VIRIDIS, gradient[rank]);
        [
            Rectangle::new([(0.0, y - 0.4), (*value, y + 0.4)], color.filled()),
            Rectangle::new([(0.0, y - 0.4), (*value, y + 0.4)], BLACK.stroke_width(1)),
        ]
    }))?;

    root.present()?;
    Ok(())
}

/// Lower-triangle correlation heatmap of the most important features.
pub fn plot_feature_correlation(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let (columns, corr) = evaluation.feature_correlations(TOP_CORRELATED)?;
    let names: Vec<String> = columns
        .iter()
        .map(|&c| evaluation.dataset.feature_names[c].clone())
        .collect();
    let k = columns.len();

    let values = (0..k)
        .map(|r| {
            (0..k)
                .map(|c| {
                    let v = corr[[r, c]];
                    (c <= r && v.is_finite()).then_some(v)
                })
                .collect()
        })
        .collect();

    let root = SVGBackend::new(path, (1000, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let color = |v: f64| palette::sample_range(palette::COOLWARM, v, -1.0, 1.0);
    let annotate = |v: f64| format!("{:.2}", v);
    let title = format!("Feature Correlation Heatmap (Top {} Important Features)", k);
    draw_heatmap(
        &root,
        &Heatmap {
            title: &title,
            values,
            row_labels: names.clone(),
            col_labels: names,
            x_desc: "",
            y_desc: "",
            color: &color,
            annotate: &annotate,
            label_area: 190,
            rotate_x_labels: true,
        },
    )?;

    root.present()?;
    Ok(())
}

fn draw_pie(area: &Area<'_>, counts: &[usize], labels: &[String]) -> Result<()> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Ok(());
    }
    let (w, h) = area.dim_in_pixel();
    let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0 + 15.0);
    let radius = (w.min(h) as f64) * 0.33;
    let colors = [hex("#3498db"), hex("#e74c3c")];

    area.draw(&Text::new(
        "Overall Distribution",
        (w as i32 / 2, 25),
        title_font(18).pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;

    // Counter-clockwise from 12 o'clock
    let point = |angle: f64, r: f64| -> (i32, i32) {
        (
            (cx + r * angle.cos()).round() as i32,
            (cy - r * angle.sin()).round() as i32,
        )
    };
    let mut start = std::f64::consts::FRAC_PI_2;
    for (i, &count) in counts.iter().enumerate() {
        let share = count as f64 / total as f64;
        let sweep = share * std::f64::consts::TAU;
        let steps = ((sweep / 0.02).ceil() as usize).max(2);
        let mut wedge = vec![point(0.0, 0.0)];
        wedge.extend((0..=steps).map(|s| point(start + sweep * s as f64 / steps as f64, radius)));
        let color = colors[i % colors.len()];
        area.draw(&Polygon::new(wedge, color.filled()))?;

        let mid = start + sweep / 2.0;
        area.draw(&Text::new(
            format!("{:.1}%", share * 100.0),
            point(mid, radius * 0.6),
            title_font(16)
                .color(&WHITE)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))?;
        area.draw(&Text::new(
            labels.get(i).cloned().unwrap_or_default(),
            point(mid, radius * 1.15),
            centred(15, BLACK),
        ))?;
        start += sweep;
    }
    Ok(())
}

/// Class shares overall, and per partition of the train/test split.
pub fn plot_class_distribution(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let dataset = &evaluation.dataset;
    let n_classes = dataset.target_names.len();
    let overall = dataset.class_counts();
    let train = crate::dataset::class_counts(&evaluation.split.y_train.to_vec(), n_classes);
    let test = crate::dataset::class_counts(&evaluation.split.y_test.to_vec(), n_classes);

    let root = SVGBackend::new(path, (1200, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Dataset Class Distribution", title_font(26))?;
    let (left, right) = root.split_horizontally(600);

    draw_pie(&left, &overall, &dataset.target_names)?;

    let max = train.iter().chain(&test).copied().max().unwrap_or(1) as f64;
    let mut chart = ChartBuilder::on(&right)
        .caption("Train/Test Split Distribution", title_font(18))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(n_classes as f64 - 0.5), 0.0f64..max * 1.15)?;
    let labels = dataset.target_names.clone();
    let fmt = move |v: &f64| category_label(&labels, *v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n_classes + 1)
        .x_label_formatter(&fmt)
        .x_desc("Class")
        .y_desc("Count")
        .axis_desc_style(title_font(14))
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.1))
        .draw()?;

    let width = 0.35;
    let groups = [
        ("Train", hex("#2ecc71"), &train, -width),
        ("Test", hex("#f39c12"), &test, 0.0),
    ];
    for (label, color, counts, offset) in groups {
        chart
            .draw_series(counts.iter().enumerate().flat_map(|(i, &c)| {
                let x0 = i as f64 + offset;
                [
                    Rectangle::new([(x0, 0.0), (x0 + width, c as f64)], color.filled()),
                    Rectangle::new([(x0, 0.0), (x0 + width, c as f64)], BLACK.stroke_width(1)),
                ]
            }))?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
        chart.draw_series(counts.iter().enumerate().map(|(i, &c)| {
            Text::new(
                c.to_string(),
                (i as f64 + offset + width / 2.0, c as f64),
                title_font(13).pos(Pos::new(HPos::Center, VPos::Bottom)),
            )
        }))?;
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render the charts into `dir` and return their paths in order.
///
/// The feature importance and correlation charts are skipped with a warning
/// when no configured model exposes feature importances.
pub fn render_all_charts(evaluation: &Evaluation, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let renderers: [fn(&Evaluation, &Path) -> Result<()>; 6] = [
        plot_performance_dashboard,
        plot_confusion_matrices,
        plot_roc_curves,
        plot_feature_importance,
        plot_feature_correlation,
        plot_class_distribution,
    ];
    let has_importances = evaluation.feature_importances().is_some();

    let mut written = Vec::with_capacity(CHART_FILES.len());
    for (file, render) in CHART_FILES.iter().zip(renderers) {
        if !has_importances && IMPORTANCE_CHARTS.contains(file) {
            log::warn!("Skipping {}: no configured model exposes feature importances", file);
            continue;
        }
        let path = dir.join(file);
        render(evaluation, &path)?;
        log::debug!("Wrote chart {}", path.display());
        written.push(path);
    }
    Ok(written)
}
