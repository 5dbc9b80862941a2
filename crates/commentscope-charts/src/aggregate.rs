//! Label count aggregation over the analyzed rows

use commentscope_domain::{AnalyzedComment, Bias, Category, Frame};
use std::collections::HashMap;

/// Counts over the substantive (non-sentinel) analyzed rows
#[derive(Debug, Clone)]
pub struct Aggregates {
    /// Rows that survived the sentinel filter
    pub total: usize,

    /// Biases present in the data, in display order
    pub biases: Vec<Bias>,

    category_by_bias: HashMap<(Bias, Category), usize>,
    frame_by_bias: HashMap<(Bias, Frame), usize>,
    category_totals: HashMap<Category, usize>,
    frame_totals: HashMap<Frame, usize>,
    bias_totals: HashMap<Bias, usize>,

    /// Count grid indexed by [category][frame] in substantive order
    grid: [[usize; 3]; 3],
}

impl Aggregates {
    /// Aggregate analyzed rows, dropping every row with a sentinel label
    pub fn from_rows(rows: &[AnalyzedComment]) -> Self {
        let mut category_by_bias = HashMap::new();
        let mut frame_by_bias = HashMap::new();
        let mut category_totals = HashMap::new();
        let mut frame_totals = HashMap::new();
        let mut bias_totals = HashMap::new();
        let mut grid = [[0usize; 3]; 3];
        let mut total = 0;

        for row in rows.iter().filter(|r| r.is_substantive()) {
            total += 1;
            *category_by_bias.entry((row.bias, row.category)).or_insert(0) += 1;
            *frame_by_bias.entry((row.bias, row.frame)).or_insert(0) += 1;
            *category_totals.entry(row.category).or_insert(0) += 1;
            *frame_totals.entry(row.frame).or_insert(0) += 1;
            *bias_totals.entry(row.bias).or_insert(0) += 1;

            let cat_index = Category::substantive()
                .iter()
                .position(|c| *c == row.category);
            let frame_index = Frame::substantive().iter().position(|f| *f == row.frame);
            if let (Some(c), Some(f)) = (cat_index, frame_index) {
                grid[c][f] += 1;
            }
        }

        let biases = Bias::all()
            .into_iter()
            .filter(|b| bias_totals.contains_key(b))
            .collect();

        Self {
            total,
            biases,
            category_by_bias,
            frame_by_bias,
            category_totals,
            frame_totals,
            bias_totals,
            grid,
        }
    }

    /// Count of rows with the given bias and category
    pub fn category_count(&self, bias: Bias, category: Category) -> usize {
        self.category_by_bias
            .get(&(bias, category))
            .copied()
            .unwrap_or(0)
    }

    /// Count of rows with the given bias and frame
    pub fn frame_count(&self, bias: Bias, frame: Frame) -> usize {
        self.frame_by_bias.get(&(bias, frame)).copied().unwrap_or(0)
    }

    /// Total rows carrying the given category
    pub fn category_total(&self, category: Category) -> usize {
        self.category_totals.get(&category).copied().unwrap_or(0)
    }

    /// Total rows carrying the given frame
    pub fn frame_total(&self, frame: Frame) -> usize {
        self.frame_totals.get(&frame).copied().unwrap_or(0)
    }

    /// Total rows collected under the given bias
    pub fn bias_total(&self, bias: Bias) -> usize {
        self.bias_totals.get(&bias).copied().unwrap_or(0)
    }

    /// Category x frame count, both in substantive display order
    pub fn grid_count(&self, category_index: usize, frame_index: usize) -> usize {
        self.grid[category_index][frame_index]
    }

    /// Largest count anywhere in the category x frame grid
    pub fn grid_max(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Most frequent category within a bias group
    pub fn dominant_category(&self, bias: Bias) -> Option<Category> {
        Category::substantive()
            .into_iter()
            .max_by_key(|c| self.category_count(bias, *c))
            .filter(|c| self.category_count(bias, *c) > 0)
    }

    /// Most frequent frame within a bias group
    pub fn dominant_frame(&self, bias: Bias) -> Option<Frame> {
        Frame::substantive()
            .into_iter()
            .max_by_key(|f| self.frame_count(bias, *f))
            .filter(|f| self.frame_count(bias, *f) > 0)
    }

    /// Tallest bar across every (bias, category) pair
    pub fn max_category_count(&self) -> usize {
        self.category_by_bias.values().copied().max().unwrap_or(0)
    }

    /// Tallest bar across every (bias, frame) pair
    pub fn max_frame_count(&self) -> usize {
        self.frame_by_bias.values().copied().max().unwrap_or(0)
    }
}
