use super::report::{ReportId, ReportSummary};
use crate::config::Config;

/// Sidebar state: how many summaries are shown and which report is open.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportList {
    visible_count: usize,
    active: Option<ReportId>,
}

impl Default for ReportList {
    fn default() -> Self {
        Self {
            visible_count: Config::VISIBLE_REPORTS,
            active: None,
        }
    }
}

impl ReportList {
    pub fn active(&self) -> Option<ReportId> {
        self.active
    }

    pub fn is_active(&self, id: ReportId) -> bool {
        self.active == Some(id)
    }

    pub fn visible<'a>(&self, summaries: &'a [ReportSummary]) -> &'a [ReportSummary] {
        &summaries[..self.visible_count.min(summaries.len())]
    }

    /// Whether the "See More" control should be shown.
    pub fn has_more(&self, summaries: &[ReportSummary]) -> bool {
        self.visible_count < summaries.len()
    }

    /// Reveals every summary; `total` is the length of the fetched list.
    pub fn see_more(&mut self, total: usize) {
        self.visible_count = self.visible_count.max(total);
    }

    pub fn select(&mut self, id: ReportId) {
        self.active = Some(id);
    }

    /// Clears the selection only if the deleted report is the one on screen.
    pub fn report_deleted(&mut self, id: ReportId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn report_created(&mut self) {
        self.visible_count = Config::VISIBLE_REPORTS;
    }
}
