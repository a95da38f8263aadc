use super::error::{AppError, ValidationError};
use serde::{Deserialize, Serialize};

/// Number of years offered after the current one in the year picker.
pub const YEAR_SPAN: i32 = 100;

/// Years selectable for an automatic report: the current year through `YEAR_SPAN` years ahead.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year..=current_year + YEAR_SPAN).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// The backend fetches the comparison data for a year itself.
    #[default]
    Automatic,
    /// Both CSV files are uploaded.
    Manual,
}

/// Case attributes the backend can compare between the two sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompareAttribute {
    #[serde(rename = "CaseID")]
    CaseId,
    EventCode,
    EventName,
    #[serde(rename = "MMWRYear")]
    MmwrYear,
    #[serde(rename = "MMWRWeek")]
    MmwrWeek,
}

impl CompareAttribute {
    /// Returns the column name the backend expects.
    pub fn name(&self) -> &'static str {
        match self {
            CompareAttribute::CaseId => "CaseID",
            CompareAttribute::EventCode => "EventCode",
            CompareAttribute::EventName => "EventName",
            CompareAttribute::MmwrYear => "MMWRYear",
            CompareAttribute::MmwrWeek => "MMWRWeek",
        }
    }

    /// All attributes, in canonical order.
    pub fn all() -> &'static [CompareAttribute] {
        &[
            CompareAttribute::CaseId,
            CompareAttribute::EventCode,
            CompareAttribute::EventName,
            CompareAttribute::MmwrYear,
            CompareAttribute::MmwrWeek,
        ]
    }
}

impl std::fmt::Display for CompareAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CompareAttribute {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompareAttribute::all()
            .iter()
            .copied()
            .find(|attribute| attribute.name() == s)
            .ok_or_else(|| AppError::DataError(format!("Unknown attribute: {s}")))
    }
}

/// A CSV file read into memory, ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Raw state of the create-report form. `F` is whatever handle the UI holds
/// for a chosen file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportForm<F> {
    pub mode: ReportMode,
    pub cdc_file: Option<F>,
    pub state_file: Option<F>,
    pub year: Option<i32>,
    pub cdc_filter: bool,
    pub attributes: Vec<CompareAttribute>,
}

impl<F> Default for ReportForm<F> {
    fn default() -> Self {
        Self {
            mode: ReportMode::default(),
            cdc_file: None,
            state_file: None,
            year: None,
            cdc_filter: true,
            attributes: CompareAttribute::all().to_vec(),
        }
    }
}

impl<F: Clone> ReportForm<F> {
    /// Checks the form against its mode and produces the request to send.
    /// Nothing is sent when this fails.
    pub fn validate(&self, current_year: i32) -> Result<ReportSubmission<F>, ValidationError> {
        match self.mode {
            ReportMode::Automatic => {
                let cdc_file = self.cdc_file.clone().ok_or(ValidationError::MissingCdcFile)?;
                let year = self.year.ok_or(ValidationError::MissingYear)?;
                if !(current_year..=current_year + YEAR_SPAN).contains(&year) {
                    return Err(ValidationError::YearOutOfRange(year));
                }

                let mut attributes = self.attributes.clone();
                attributes.sort_unstable();
                attributes.dedup();

                Ok(ReportSubmission::Automatic {
                    year,
                    cdc_file,
                    cdc_filter: self.cdc_filter,
                    attributes,
                })
            }
            ReportMode::Manual => {
                let state_file = self
                    .state_file
                    .clone()
                    .ok_or(ValidationError::MissingStateFile)?;
                let cdc_file = self.cdc_file.clone().ok_or(ValidationError::MissingCdcFile)?;

                Ok(ReportSubmission::Manual {
                    state_file,
                    cdc_file,
                    cdc_filter: self.cdc_filter,
                })
            }
        }
    }
}

/// A validated create-report request: one POST with query parameters and a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportSubmission<F> {
    Automatic {
        year: i32,
        cdc_file: F,
        cdc_filter: bool,
        attributes: Vec<CompareAttribute>,
    },
    Manual {
        state_file: F,
        cdc_file: F,
        cdc_filter: bool,
    },
}

impl<F> ReportSubmission<F> {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ReportSubmission::Automatic { .. } => "/automatic_report",
            ReportSubmission::Manual { .. } => "/manual_report",
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            ReportSubmission::Automatic {
                year, cdc_filter, ..
            } => vec![
                ("year", year.to_string()),
                ("isCDCFilter", cdc_filter.to_string()),
            ],
            ReportSubmission::Manual { cdc_filter, .. } => {
                vec![("isCDCFilter", cdc_filter.to_string())]
            }
        }
    }

    /// Non-file multipart fields.
    pub fn text_fields(&self) -> Result<Vec<(&'static str, String)>, AppError> {
        match self {
            ReportSubmission::Automatic {
                cdc_filter,
                attributes,
                ..
            } => {
                let attributes = serde_json::to_string(attributes)
                    .map_err(|e| AppError::DataError(format!("Failed to encode attributes: {e}")))?;
                Ok(vec![
                    ("isCDCFilter", cdc_filter.to_string()),
                    ("attributes", attributes),
                ])
            }
            ReportSubmission::Manual { cdc_filter, .. } => {
                Ok(vec![("isCDCFilter", cdc_filter.to_string())])
            }
        }
    }

    /// File multipart fields, consuming the submission.
    pub fn into_files(self) -> Vec<(&'static str, F)> {
        match self {
            ReportSubmission::Automatic { cdc_file, .. } => vec![("cdc_file", cdc_file)],
            ReportSubmission::Manual {
                state_file,
                cdc_file,
                ..
            } => vec![("state_file", state_file), ("cdc_file", cdc_file)],
        }
    }
}
