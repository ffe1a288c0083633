/// Titled run of lines. Every section starts on a fresh page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// Page geometry. Vertical positions are fractions of the page height,
/// measured from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub page_width: f32,
    pub page_height: f32,
    pub left_margin: f32,
    pub title_top: f32,
    pub body_top: f32,
    pub line_step: f32,
    pub body_bottom: f32,
    pub footer_bottom: f32,
    pub title_size: f32,
    pub body_size: f32,
    pub footer_size: f32,
}

impl Default for Layout {
    /// US Letter portrait.
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            left_margin: 0.06,
            title_top: 0.96,
            body_top: 0.92,
            line_step: 0.018,
            body_bottom: 0.08,
            footer_bottom: 0.04,
            title_size: 14.0,
            body_size: 10.0,
            footer_size: 8.0,
        }
    }
}

impl Layout {
    /// Lines that fit between the body top and the break threshold.
    pub fn lines_per_page(&self) -> usize {
        let span = self.body_top - self.body_bottom;
        if span < 0.0 || self.line_step <= 0.0 {
            return 1;
        }
        // A line is placed while its cursor is still at or above the threshold.
        ((span / self.line_step) + 1e-4).floor() as usize + 1
    }

    /// Baseline of body line `index` on a page, in points from the bottom.
    pub fn line_baseline(&self, index: usize) -> f32 {
        let top = (self.body_top - self.line_step * index as f32) * self.page_height;
        top - self.body_size * 0.8
    }

    pub fn title_baseline(&self) -> f32 {
        self.title_top * self.page_height - self.title_size * 0.8
    }

    pub fn footer_baseline(&self) -> f32 {
        self.footer_bottom * self.page_height
    }

    pub fn left(&self) -> f32 {
        self.left_margin * self.page_width
    }
}

/// Split lines into pages. An empty document still yields one blank page so
/// the title and footer are printed.
pub fn paginate(lines: &[String], layout: &Layout) -> Vec<Vec<String>> {
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines
        .chunks(layout.lines_per_page())
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("line {index}")).collect()
    }

    #[test]
    fn letter_page_holds_forty_seven_lines() {
        assert_eq!(Layout::default().lines_per_page(), 47);
    }

    #[test]
    fn overflow_starts_a_new_page() {
        let layout = Layout::default();
        assert_eq!(paginate(&lines(47), &layout).len(), 1);
        let pages = paginate(&lines(48), &layout);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], vec!["line 47".to_string()]);
    }

    #[test]
    fn empty_input_yields_one_page() {
        let pages = paginate(&[], &Layout::default());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn baselines_descend() {
        let layout = Layout::default();
        assert!(layout.title_baseline() > layout.line_baseline(0));
        assert!(layout.line_baseline(0) > layout.line_baseline(46));
        assert!(layout.line_baseline(46) > layout.footer_baseline());
    }
}
