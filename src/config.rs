//! Report configuration: defaults, optional YAML file, environment overrides.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_INPUT_PATH: &str = "Doc/ต้นทุนต้นไม้ปี2568.xlsx";
pub const DEFAULT_OUTPUT_PATH: &str = "Doc/ต้นทุนต้นไม้ปี2568_summary.md";
pub const DEFAULT_TITLE: &str = "สรุปข้อมูลต้นทุนต้นไม้ปี 2568";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

pub const ENV_INPUT: &str = "WORKBOOK_REPORT_INPUT";
pub const ENV_OUTPUT: &str = "WORKBOOK_REPORT_OUTPUT";
pub const ENV_PREVIEW_ROWS: &str = "WORKBOOK_REPORT_PREVIEW_ROWS";
pub const ENV_LANG: &str = "WORKBOOK_REPORT_LANG";

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read config file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config YAML: {err}"),
            Self::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "th" | "thai" => Some(Self::Thai),
            "en" | "english" => Some(Self::English),
            _ => None,
        }
    }

    pub fn labels(self) -> ReportLabels {
        match self {
            Self::Thai => ReportLabels::thai(),
            Self::English => ReportLabels::english(),
        }
    }
}

/// Every fixed string that appears in the report or on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub default_title: &'static str,
    pub source_file: &'static str,
    pub sheet_count: &'static str,
    pub sheet_unit: &'static str,
    pub sheet_list_heading: &'static str,
    pub sheets_heading: &'static str,
    pub row_count: &'static str,
    pub column_count: &'static str,
    pub columns: &'static str,
    /// `{n}` is replaced by the preview row count.
    pub preview: &'static str,
    pub no_data: &'static str,
    pub error: &'static str,
    pub read_failure: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

impl ReportLabels {
    pub fn thai() -> Self {
        Self {
            default_title: DEFAULT_TITLE,
            source_file: "ไฟล์ต้นฉบับ",
            sheet_count: "จำนวนชีต",
            sheet_unit: "ชีต",
            sheet_list_heading: "รายชื่อชีตในไฟล์",
            sheets_heading: "สรุปข้อมูลแต่ละชีต",
            row_count: "จำนวนแถว",
            column_count: "จำนวนคอลัมน์",
            columns: "คอลัมน์",
            preview: "ตัวอย่างข้อมูล ({n} แถวแรก):",
            no_data: "ไม่มีข้อมูลในชีตนี้",
            error: "ข้อผิดพลาด",
            read_failure: "ไม่สามารถอ่านข้อมูลได้",
            success: "สร้างไฟล์สรุปสำเร็จ",
            failure: "เกิดข้อผิดพลาด",
        }
    }

    pub fn english() -> Self {
        Self {
            default_title: "Workbook summary",
            source_file: "Source file",
            sheet_count: "Sheet count",
            sheet_unit: "sheets",
            sheet_list_heading: "Sheets in file",
            sheets_heading: "Sheet summaries",
            row_count: "Rows",
            column_count: "Column count",
            columns: "Columns",
            preview: "Sample data (first {n} rows):",
            no_data: "No data in this sheet",
            error: "Error",
            read_failure: "unable to read data",
            success: "Report written",
            failure: "Error",
        }
    }

    pub fn preview_heading(&self, rows: usize) -> String {
        self.preview.replace("{n}", &rows.to_string())
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::thai()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub title: Option<String>,
    pub preview_rows: usize,
    pub language: Language,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            title: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            language: Language::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    input: Option<PathBuf>,
    #[serde(default)]
    output: Option<PathBuf>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    preview_rows: Option<usize>,
    #[serde(default)]
    language: Option<Language>,
}

impl ReportConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn labels(&self) -> ReportLabels {
        self.language.labels()
    }

    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.labels().default_title.to_string())
    }

    /// Overlay fields set in a YAML config file.
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let raw = fs::read_to_string(path).map_err(ConfigError::Read)?;
        let file: ConfigFile = serde_yaml::from_str(&raw).map_err(ConfigError::Parse)?;
        if let Some(input) = file.input {
            self.input_path = input;
        }
        if let Some(output) = file.output {
            self.output_path = output;
        }
        if let Some(title) = file.title {
            self.title = Some(title);
        }
        if let Some(rows) = file.preview_rows {
            self.preview_rows = rows;
        }
        if let Some(language) = file.language {
            self.language = language;
        }
        Ok(())
    }

    pub fn merge_env(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Overlay environment values read through `lookup`. Unparseable values are
    /// reported on stderr and ignored.
    pub fn merge_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(input) = lookup(ENV_INPUT).filter(|v| !v.is_empty()) {
            self.input_path = PathBuf::from(input);
        }
        if let Some(output) = lookup(ENV_OUTPUT).filter(|v| !v.is_empty()) {
            self.output_path = PathBuf::from(output);
        }
        if let Some(raw) = lookup(ENV_PREVIEW_ROWS) {
            match raw.trim().parse::<usize>() {
                Ok(rows) => self.preview_rows = rows,
                Err(_) => eprintln!(
                    "invalid {ENV_PREVIEW_ROWS} '{raw}', keeping {}",
                    self.preview_rows
                ),
            }
        }
        if let Some(raw) = lookup(ENV_LANG) {
            match Language::parse(&raw) {
                Some(language) => self.language = language,
                None => eprintln!("invalid {ENV_LANG} '{raw}', expected 'th' or 'en'"),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview_rows == 0 {
            return Err(ConfigError::Invalid(
                "preview_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
