use serde::{Deserialize, Serialize};

/// The analytics counters document (`stats.json`). One instance per site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub visitors: u64,
    pub cv_views: u64,
    pub cv_downloads: u64,
    pub message_count: u64,
    /// January..December visitor counts for the dashboard chart.
    #[serde(default)]
    pub monthly_visitors: [u64; 12],
}

/// Public counters the site can bump. Path segments of
/// `POST /api/stats/{metric}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Visitor,
    CvView,
    CvDownload,
}

impl Metric {
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "visitor" => Some(Metric::Visitor),
            "cv-view" => Some(Metric::CvView),
            "cv-download" => Some(Metric::CvDownload),
            _ => None,
        }
    }
}

impl Stats {
    /// Apply a metric bump; `month_index` is 0-based (January = 0).
    pub fn apply(&mut self, metric: Metric, month_index: usize) {
        match metric {
            Metric::Visitor => {
                self.visitors += 1;
                if let Some(slot) = self.monthly_visitors.get_mut(month_index) {
                    *slot += 1;
                }
            }
            Metric::CvView => self.cv_views += 1,
            Metric::CvDownload => self.cv_downloads += 1,
        }
    }
}
