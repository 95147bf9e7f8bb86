//! # Reporting
//!
//! The launcher reports through the `Reporter` trait: once before the first
//! epoch, once per epoch, and once with the final result. Reporters never
//! influence the search.
//!
//! `ConsoleReporter` prints progress lines, every final candidate (optionally
//! with its board), and an ASCII chart of the mean fitness history.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::candidate::Candidate;
//! use nqueens_ga::report::render_board;
//!
//! let board = render_board(&Candidate::from_genes(vec![1, 3, 0, 2]).unwrap());
//! assert_eq!(board, ". Q . . \n. . . Q \nQ . . . \n. . Q . \n");
//! ```

use std::io::Write;

use crate::candidate::Candidate;
use crate::error::{Result, ResultExt};
use crate::evolution::{Challenge, EvolutionOptions, EvolutionResult, QueensChallenge};

/// Receives progress and results from the launcher.
pub trait Reporter {
    /// Called once before the first epoch.
    fn on_start(&mut self, _options: &EvolutionOptions) -> Result<()> {
        Ok(())
    }

    /// Called after every epoch with its zero-based index and mean fitness.
    fn on_epoch(&mut self, _epoch: usize, _metric: f64, _population: &[Candidate]) -> Result<()> {
        Ok(())
    }

    /// Called once with the final population and the full history.
    fn on_finish(&mut self, _result: &EvolutionResult) -> Result<()> {
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {}

/// Writes a human readable report.
///
/// Final candidates are scored with the reporter's challenge, which defaults
/// to `QueensChallenge`. Use `with_challenge` when the launcher scores with
/// something else.
pub struct ConsoleReporter<W: Write, C: Challenge = QueensChallenge> {
    out: W,
    challenge: C,
    show_progress: bool,
    show_configuration: bool,
    show_history: bool,
    chart_width: usize,
    chart_height: usize,
    num_generations: usize,
    population_size: usize,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self::with_challenge(out, QueensChallenge)
    }
}

impl<W: Write, C: Challenge> ConsoleReporter<W, C> {
    /// A reporter that prints final fitness as scored by `challenge`.
    pub fn with_challenge(out: W, challenge: C) -> Self {
        Self {
            out,
            challenge,
            show_progress: true,
            show_configuration: false,
            show_history: true,
            chart_width: 60,
            chart_height: 15,
            num_generations: 0,
            population_size: 0,
        }
    }

    /// Toggles the per-epoch `iteration=[..], metric=..` lines.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Toggles printing each final candidate's board.
    pub fn with_configuration(mut self, show: bool) -> Self {
        self.show_configuration = show;
        self
    }

    /// Toggles the mean fitness chart.
    pub fn with_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }

    pub fn with_chart_size(mut self, width: usize, height: usize) -> Self {
        self.chart_width = width.max(1);
        self.chart_height = height.max(2);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn show_solutions(&mut self, population: &[Candidate]) -> Result<()> {
        for (i, candidate) in population.iter().enumerate() {
            writeln!(
                self.out,
                "number=[{}/{}], solution={}, fitness={}",
                i + 1,
                self.population_size,
                candidate,
                self.challenge.score(candidate)
            )
            .context("Failed to write solution")?;
            if self.show_configuration {
                write!(self.out, "{}", render_board(candidate)).context("Failed to write board")?;
            }
        }
        Ok(())
    }
}

impl<W: Write, C: Challenge> Reporter for ConsoleReporter<W, C> {
    fn on_start(&mut self, options: &EvolutionOptions) -> Result<()> {
        self.num_generations = options.get_num_generations();
        self.population_size = options.get_population_size();
        Ok(())
    }

    fn on_epoch(&mut self, epoch: usize, metric: f64, _population: &[Candidate]) -> Result<()> {
        if self.show_progress {
            writeln!(
                self.out,
                "iteration=[{}/{}], metric={}",
                epoch + 1,
                self.num_generations,
                metric
            )
            .context("Failed to write progress")?;
        }
        Ok(())
    }

    fn on_finish(&mut self, result: &EvolutionResult) -> Result<()> {
        self.show_solutions(&result.population)?;
        if self.show_history && !result.history.is_empty() {
            let chart = render_history(&result.history, self.chart_width, self.chart_height);
            write!(self.out, "{}", chart).context("Failed to write history")?;
        }
        self.out.flush().context("Failed to flush report")?;
        Ok(())
    }
}

/// Renders a board with `Q` on each row's queen and `.` elsewhere.
///
/// Cells are followed by a single space; every row ends with a newline.
pub fn render_board(candidate: &Candidate) -> String {
    let n = candidate.len();
    let mut board = String::with_capacity(n * (2 * n + 1));
    for &column in candidate.genes() {
        for cell in 0..n {
            board.push(if cell == column { 'Q' } else { '.' });
            board.push(' ');
        }
        board.push('\n');
    }
    board
}

/// Renders the mean fitness history as an ASCII line chart.
///
/// The x axis spans the epochs and is bucketed into at most `width` columns,
/// each showing the mean of its bucket. The y axis spans the observed range
/// over `height` rows.
pub fn render_history(history: &[f64], width: usize, height: usize) -> String {
    let mut chart = String::from("Metric (Average Fitness)\n");
    if history.is_empty() {
        chart.push_str("(no epochs)\n");
        return chart;
    }

    let width = width.max(1).min(history.len());
    let height = height.max(2);

    let columns: Vec<f64> = (0..width)
        .map(|col| {
            let start = col * history.len() / width;
            let end = ((col + 1) * history.len() / width).max(start + 1);
            let bucket = &history[start..end];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect();

    let min = columns.iter().copied().fold(f64::INFINITY, f64::min);
    let max = columns.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let rows: Vec<usize> = columns
        .iter()
        .map(|&value| {
            if span > 0.0 {
                (((value - min) / span) * (height - 1) as f64).round() as usize
            } else {
                0
            }
        })
        .collect();

    for level in (0..height).rev() {
        let label = min + span * level as f64 / (height - 1) as f64;
        chart.push_str(&format!("{:>10.3} |", label));
        for &row in &rows {
            chart.push(if row == level { '*' } else { ' ' });
        }
        chart.push('\n');
    }

    chart.push_str(&format!("{:>10} +{}\n", "", "-".repeat(width)));
    chart.push_str(&format!(
        "{:>10}  1{:>pad$}\n",
        "",
        history.len(),
        pad = width.saturating_sub(1)
    ));
    chart.push_str(&format!("{:>10}  Epoch (Generation)\n", ""));
    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(population: Vec<Candidate>, history: Vec<f64>) -> EvolutionResult {
        EvolutionResult {
            population,
            history,
        }
    }

    #[test]
    fn test_render_board() {
        let board = render_board(&Candidate::identity(3));
        assert_eq!(board, "Q . . \n. Q . \n. . Q \n");
    }

    #[test]
    fn test_render_empty_board() {
        assert_eq!(render_board(&Candidate::identity(0)), "");
    }

    #[test]
    fn test_render_history_shape() {
        let history: Vec<f64> = (0..100).map(|i| -10.0 + i as f64 * 0.1).collect();
        let chart = render_history(&history, 20, 5);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Metric (Average Fitness)");
        // title + plot rows + axis + tick labels + x label
        assert_eq!(lines.len(), 1 + 5 + 3);
        assert!(lines.last().unwrap().contains("Epoch (Generation)"));
        // One point per column.
        let points: usize = lines[1..6].iter().map(|l| l.matches('*').count()).sum();
        assert_eq!(points, 20);
        // Rising history: the last column is on the top row.
        assert!(lines[1].ends_with('*'));
    }

    #[test]
    fn test_render_history_flat_and_short() {
        let chart = render_history(&[-3.0, -3.0], 60, 4);
        let points: usize = chart.matches('*').count();
        assert_eq!(points, 2);
    }

    #[test]
    fn test_render_history_empty() {
        assert!(render_history(&[], 10, 5).contains("no epochs"));
    }

    #[test]
    fn test_console_reporter_output() {
        let options = EvolutionOptions::new(4, 2, 0.8, 2);
        let population = vec![
            Candidate::from_genes(vec![1, 3, 0, 2]).unwrap(),
            Candidate::identity(4),
        ];

        let mut reporter = ConsoleReporter::new(Vec::new())
            .with_configuration(true)
            .with_history(false);
        reporter.on_start(&options).unwrap();
        reporter.on_epoch(0, -6.0, &population).unwrap();
        reporter.on_epoch(1, -6.0, &population).unwrap();
        reporter
            .on_finish(&result(population, vec![-6.0, -6.0]))
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let expected = "\
iteration=[1/2], metric=-6
iteration=[2/2], metric=-6
number=[1/2], solution=[1, 3, 0, 2], fitness=0
. Q . . \n. . . Q \nQ . . . \n. . Q . \n\
number=[2/2], solution=[0, 1, 2, 3], fitness=-12
Q . . . \n. Q . . \n. . Q . \n. . . Q \n";
        assert_eq!(output, expected);
    }

    /// Scores every board by its first column.
    struct FirstColumn;

    impl Challenge for FirstColumn {
        fn score(&self, candidate: &Candidate) -> i64 {
            candidate.genes().first().map_or(0, |&column| column as i64)
        }
    }

    #[test]
    fn test_console_reporter_uses_its_challenge() {
        let mut reporter =
            ConsoleReporter::with_challenge(Vec::new(), FirstColumn).with_history(false);
        reporter.on_start(&EvolutionOptions::new(4, 2, 0.8, 1)).unwrap();
        reporter
            .on_finish(&result(
                vec![
                    Candidate::from_genes(vec![2, 0, 3, 1]).unwrap(),
                    Candidate::from_genes(vec![3, 1, 2, 0]).unwrap(),
                ],
                vec![-4.0],
            ))
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "number=[1/2], solution=[2, 0, 3, 1], fitness=2\n\
             number=[2/2], solution=[3, 1, 2, 0], fitness=3\n"
        );
    }

    #[test]
    fn test_console_reporter_quiet_progress() {
        let mut reporter = ConsoleReporter::new(Vec::new()).with_progress(false);
        reporter.on_start(&EvolutionOptions::default()).unwrap();
        reporter.on_epoch(0, -1.0, &[]).unwrap();
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn test_console_reporter_includes_chart() {
        let mut reporter = ConsoleReporter::new(Vec::new()).with_chart_size(10, 3);
        reporter.on_start(&EvolutionOptions::new(4, 1, 0.8, 3)).unwrap();
        reporter
            .on_finish(&result(vec![Candidate::identity(4)], vec![-12.0, -8.0, -4.0]))
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("Metric (Average Fitness)"));
        assert!(output.contains("Epoch (Generation)"));
    }
}
