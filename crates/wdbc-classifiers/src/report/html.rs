//! Self-contained HTML summary of a benchmark run.
use std::fs;
use std::path::Path;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::common::{DashType, Line, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot, Scatter};

use crate::error::Result;
use crate::evaluation::{Evaluation, ModelMetrics};

/// Default file name of the HTML report.
pub const HTML_REPORT: &str = "wdbc_report.html";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// A titled block of markup and interactive plots.
pub struct ReportSection {
    title: String,
    content: Vec<Markup>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        ReportSection {
            title: title.to_string(),
            content: Vec::new(),
        }
    }

    pub fn add_content(&mut self, markup: Markup) {
        self.content.push(markup);
    }

    /// Embed a plotly chart; the plotly runtime is loaded once by the page.
    pub fn add_plot(&mut self, plot: Plot) {
        let div_id = format!("plot-{}-{}", slug(&self.title), self.content.len());
        self.content
            .push(PreEscaped(plot.to_inline_html(Some(div_id.as_str()))));
    }

    fn render(&self) -> Markup {
        html! {
            section id=(slug(&self.title)) {
                h2 { (self.title) }
                @for block in &self.content {
                    div class="block" { (block) }
                }
            }
        }
    }
}

/// An HTML page made of sections.
pub struct Report {
    title: String,
    version: String,
    generated: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str, version: &str) -> Self {
        Report {
            title: title.to_string(),
            version: version.to_string(),
            generated: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    header {
                        h1 { (self.title) }
                        p class="meta" { "Version " (self.version) " | generated " (self.generated) }
                        nav {
                            @for section in &self.sections {
                                a href=(format!("#{}", slug(&section.title))) { (section.title) }
                            }
                        }
                    }
                    @for section in &self.sections {
                        (section.render())
                    }
                }
            }
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render().into_string())?;
        log::debug!("Wrote HTML report to {}", path.display());
        Ok(())
    }
}

const STYLE: &str = "
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 0 20px; color: #222; }
header { border-bottom: 2px solid #3498db; margin-bottom: 20px; }
nav a { margin-right: 15px; }
.meta { color: #777; }
table { border-collapse: collapse; margin: 10px 0; }
th, td { padding: 6px 12px; border-bottom: 1px solid #ddd; text-align: right; }
th:first-child, td:first-child { text-align: left; }
pre { background-color: #f5f5f5; padding: 10px; border-radius: 5px; overflow-x: auto; }
";

fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

fn results_table(evaluation: &Evaluation) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Model" }
                    @for column in ModelMetrics::COLUMNS {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for (name, metrics) in evaluation.results_table() {
                    tr {
                        td { (name) }
                        @for value in metrics.values() {
                            td { (format!("{:.4}", value)) }
                        }
                    }
                }
            }
        }
    }
}

/// Interactive version of the ROC comparison chart.
pub fn plot_roc_curves(evaluation: &Evaluation) -> Plot {
    let mut plot = Plot::new();
    for model in &evaluation.models {
        let trace = Scatter::new(model.roc.fpr.clone(), model.roc.tpr.clone())
            .mode(Mode::Lines)
            .name(format!("{} (AUC = {:.4})", model.name, model.metrics.roc_auc));
        plot.add_trace(trace);
    }
    let chance = Scatter::new(vec![0.0, 1.0], vec![0.0, 1.0])
        .mode(Mode::Lines)
        .line(Line::new().dash(DashType::Dash).color("black"))
        .name("Random Classifier (AUC = 0.5000)");
    plot.add_trace(chance);

    let layout = Layout::new()
        .title("ROC Curves - Model Comparison")
        .x_axis(Axis::new().title("False Positive Rate").range(vec![0.0, 1.0]))
        .y_axis(Axis::new().title("True Positive Rate").range(vec![0.0, 1.05]));
    plot.set_layout(layout);
    plot
}

/// Cross-validation mean accuracy per model.
pub fn plot_cv_scores(evaluation: &Evaluation) -> Plot {
    let names: Vec<String> = evaluation.models.iter().map(|m| m.name.clone()).collect();
    let means: Vec<f64> = evaluation.models.iter().map(|m| m.cv.mean).collect();
    let trace = Bar::new(names, means).name("CV Mean");

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title("Cross-Validation Scores")
            .y_axis(Axis::new().title("Mean Accuracy").range(vec![0.85, 1.0])),
    );
    plot
}

/// Assemble the report: results, per-model reports and the run configuration.
pub fn build_report(evaluation: &Evaluation, config_json: &str) -> Report {
    let mut report = Report::new(
        "Breast Cancer Classification Report",
        env!("CARGO_PKG_VERSION"),
    );

    let dataset = &evaluation.dataset;
    let counts = dataset.class_counts();
    let mut overview = ReportSection::new("Overview");
    overview.add_content(html! {
        p {
            "Wisconsin diagnostic breast cancer data: " (dataset.n_samples()) " samples, "
            (dataset.n_features()) " features. Train/test split: "
            (evaluation.split.y_train.len()) " / " (evaluation.split.y_test.len()) " samples."
        }
        ul {
            @for (name, count) in dataset.target_names.iter().zip(&counts) {
                li { (name) ": " (count) }
            }
        }
    });
    report.add_section(overview);

    let mut results = ReportSection::new("Results");
    results.add_content(results_table(evaluation));
    results.add_plot(plot_roc_curves(evaluation));
    results.add_plot(plot_cv_scores(evaluation));
    report.add_section(results);

    let mut reports = ReportSection::new("Classification Reports");
    for model in &evaluation.models {
        reports.add_content(html! {
            h3 { (model.name) }
            pre { (model.report) }
        });
    }
    report.add_section(reports);

    let mut config_section = ReportSection::new("Configuration");
    config_section.add_content(html! {
        pre { code { (config_json) } }
    });
    report.add_section(config_section);

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_render_in_order() {
        let mut report = Report::new("Title", "0.1.0");
        let mut first = ReportSection::new("First Part");
        first.add_content(html! { p { "alpha <b>" } });
        report.add_section(first);
        report.add_section(ReportSection::new("Second"));

        let page = report.render().into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("alpha &lt;b&gt;"));
        assert!(page.contains("href=\"#first-part\""));
        let first = page.find("<h2>First Part</h2>").unwrap();
        let second = page.find("<h2>Second</h2>").unwrap();
        assert!(first < second);
    }
}
