//! Worksheet session
//!
//! The session owns the worksheet (the ordered page list) together with the
//! current operator, problem count, and worksheet settings. Every mutation
//! generates the complete replacement first and only then swaps it in, so a
//! failed regeneration leaves the previous state untouched.

use crate::{
    generate, ModelError, OperandRange, Operator, Page, RandomSource, Result, WorksheetSettings,
    DEFAULT_PROBLEM_COUNT,
};

/// Top-level worksheet state
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetSession {
    operator: Operator,
    problem_count: usize,
    settings: WorksheetSettings,
    pages: Vec<Page>,
    current_page: usize,
}

impl WorksheetSession {
    /// Create a session holding a single freshly generated page
    pub fn new<S>(
        operator: Operator,
        problem_count: usize,
        settings: WorksheetSettings,
        rng: &mut S,
    ) -> Result<Self>
    where
        S: RandomSource + ?Sized,
    {
        settings.validate()?;
        let problems = generate(operator, problem_count, settings.operands, rng)?;

        Ok(Self {
            operator,
            problem_count,
            settings,
            pages: vec![Page::new(problems, 1)],
            current_page: 0,
        })
    }

    /// Session with default operator, count, and settings
    pub fn with_defaults<S>(rng: &mut S) -> Result<Self>
    where
        S: RandomSource + ?Sized,
    {
        Self::new(
            Operator::default(),
            DEFAULT_PROBLEM_COUNT,
            WorksheetSettings::default(),
            rng,
        )
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn problem_count(&self) -> usize {
        self.problem_count
    }

    pub fn settings(&self) -> &WorksheetSettings {
        &self.settings
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Heading shown on every page
    pub fn title(&self) -> String {
        self.operator.title()
    }

    /// Select the page shown in the preview
    pub fn set_current_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(ModelError::Configuration(format!(
                "Page index {} out of range for {} pages",
                index,
                self.pages.len()
            )));
        }
        self.current_page = index;
        Ok(())
    }

    /// Switch operator and regenerate every page
    pub fn set_operator<S>(&mut self, operator: Operator, rng: &mut S) -> Result<()>
    where
        S: RandomSource + ?Sized,
    {
        let pages = self.regenerated_pages(operator, self.problem_count, self.settings.operands, rng)?;
        self.operator = operator;
        self.pages = pages;
        Ok(())
    }

    /// Change the per-page problem count and regenerate every page
    pub fn set_problem_count<S>(&mut self, count: usize, rng: &mut S) -> Result<()>
    where
        S: RandomSource + ?Sized,
    {
        let pages = self.regenerated_pages(self.operator, count, self.settings.operands, rng)?;
        self.problem_count = count;
        self.pages = pages;
        Ok(())
    }

    /// Change the operand range and regenerate every page
    pub fn set_operand_range<S>(&mut self, range: OperandRange, rng: &mut S) -> Result<()>
    where
        S: RandomSource + ?Sized,
    {
        let pages = self.regenerated_pages(self.operator, self.problem_count, range, rng)?;
        self.settings.operands = range;
        self.pages = pages;
        Ok(())
    }

    /// Replace the worksheet settings.
    ///
    /// Grid changes only affect layout; problems are regenerated when the
    /// operand range differs from the current one.
    pub fn update_settings<S>(&mut self, settings: WorksheetSettings, rng: &mut S) -> Result<()>
    where
        S: RandomSource + ?Sized,
    {
        settings.validate()?;

        if settings.operands != self.settings.operands {
            let pages =
                self.regenerated_pages(self.operator, self.problem_count, settings.operands, rng)?;
            self.pages = pages;
        }
        self.settings = settings;
        Ok(())
    }

    /// Regenerate the problems of every page with the current settings
    pub fn regenerate<S>(&mut self, rng: &mut S) -> Result<()>
    where
        S: RandomSource + ?Sized,
    {
        self.pages = self.regenerated_pages(
            self.operator,
            self.problem_count,
            self.settings.operands,
            rng,
        )?;
        Ok(())
    }

    /// Regenerate the problems of a single page
    pub fn regenerate_page<S>(&mut self, index: usize, rng: &mut S) -> Result<()>
    where
        S: RandomSource + ?Sized,
    {
        if index >= self.pages.len() {
            return Err(ModelError::Configuration(format!(
                "Page index {} out of range for {} pages",
                index,
                self.pages.len()
            )));
        }
        let problems = generate(self.operator, self.problem_count, self.settings.operands, rng)?;
        self.pages[index].problems = problems;
        Ok(())
    }

    /// Append a freshly generated page and make it current
    pub fn add_page<S>(&mut self, rng: &mut S) -> Result<&Page>
    where
        S: RandomSource + ?Sized,
    {
        let problems = generate(self.operator, self.problem_count, self.settings.operands, rng)?;
        let page_number = self.pages.len() as u32 + 1;
        self.pages.push(Page::new(problems, page_number));
        self.current_page = self.pages.len() - 1;

        tracing::debug!("Added worksheet page {}", page_number);
        Ok(&self.pages[self.current_page])
    }

    /// Build the replacement page list without touching `self`
    fn regenerated_pages<S>(
        &self,
        operator: Operator,
        count: usize,
        range: OperandRange,
        rng: &mut S,
    ) -> Result<Vec<Page>>
    where
        S: RandomSource + ?Sized,
    {
        self.pages
            .iter()
            .map(|page| {
                generate(operator, count, range, rng).map(|problems| Page {
                    problems,
                    page_number: page.page_number,
                })
            })
            .collect()
    }
}
