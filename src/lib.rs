use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

pub mod figure;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// CSV header names the loader requires.
pub mod columns {
    pub const LAUNCH_SITE: &str = "Launch Site";
    pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
    pub const CLASS: &str = "class";
    pub const BOOSTER_CATEGORY: &str = "Booster Version Category";

    pub const REQUIRED: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_CATEGORY];
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    /// 1 for a successful landing, 0 for a failure.
    pub outcome_class: u8,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome_class == 1
    }
}

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    outcome_class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// Fatal errors raised while loading the launch table.
#[derive(Debug)]
pub enum DatasetError {
    Csv(csv::Error),
    MissingColumn(&'static str),
    InvalidOutcome { line: u64, value: i64 },
    InvalidPayload { line: u64, value: f64 },
    Empty,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Csv(e) => write!(f, "Failed to read launch data: {}", e),
            DatasetError::MissingColumn(name) => {
                write!(f, "Launch data is missing required column '{}'", name)
            }
            DatasetError::InvalidOutcome { line, value } => write!(
                f,
                "Invalid class value {} on line {} (expected 0 or 1)",
                value, line
            ),
            DatasetError::InvalidPayload { line, value } => write!(
                f,
                "Invalid payload mass {} on line {} (expected a non-negative number)",
                value, line
            ),
            DatasetError::Empty => write!(f, "Launch data contains no records"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for DatasetError {
    fn from(e: csv::Error) -> Self {
        DatasetError::Csv(e)
    }
}

/// Immutable launch table plus the payload bounds computed at load time.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    /// Builds a dataset from already-validated records.
    ///
    /// Fails with [`DatasetError::Empty`] when there are no records, since the
    /// payload bounds are undefined for an empty table.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        let mut bounds: Option<(f64, f64)> = None;
        for r in &records {
            let m = r.payload_mass_kg;
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(m), hi.max(m)),
                None => (m, m),
            });
        }
        let (min_payload, max_payload) = bounds.ok_or(DatasetError::Empty)?;
        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `(min_payload, max_payload)`.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.min_payload, self.max_payload)
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.launch_site.as_str()) {
                out.push(&r.launch_site);
            }
        }
        out
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }
}

/// Parse the launch table from CSV text.
///
/// The header row must name every column in [`columns::REQUIRED`]; other
/// columns are ignored. Any malformed row aborts the whole load.
pub fn read_launches_from_csv_str(csv_content: &str) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let headers = reader.headers()?.clone();
    for name in columns::REQUIRED {
        if !headers.iter().any(|h| h == name) {
            return Err(DatasetError::MissingColumn(name));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawLaunchRow>() {
        let row = row?;
        let line = records.len() as u64 + 2; // header is line 1

        let outcome_class = match row.outcome_class {
            0 | 1 => row.outcome_class as u8,
            value => return Err(DatasetError::InvalidOutcome { line, value }),
        };
        if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                line,
                value: row.payload_mass_kg,
            });
        }

        records.push(LaunchRecord {
            launch_site: row.launch_site,
            payload_mass_kg: row.payload_mass_kg,
            outcome_class,
            booster_version_category: row.booster_version_category,
        });
    }

    let dataset = Dataset::from_records(records)?;
    let (min, max) = dataset.payload_bounds();
    info!(
        "Loaded {} launch records from CSV content (payload {}..={} kg)",
        dataset.len(),
        min,
        max
    );
    Ok(dataset)
}

/// Which launch site(s) a chart is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Map a dropdown value onto a selection. Only the exact `ALL` value
    /// selects every site; anything else is taken verbatim as a site code.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(code) => code,
        }
    }

    fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(code) => record.launch_site == *code,
        }
    }
}

/// Inclusive payload interval. `low > high` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

/// One labelled value of a proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: usize,
}

/// Data behind the pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeSeries {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl OutcomeSeries {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayloadPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
}

/// Data behind the scatter chart, one point per surviving record.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadSeries {
    pub title: String,
    pub points: Vec<PayloadPoint>,
}

/// Success counts for the pie chart.
///
/// For `All`, yields one slice per site (first-appearance order) whose value
/// is that site's success count; sites without successes keep a zero slice.
/// For a single site, yields one slice per outcome class present at that
/// site, ordered by descending count and then by class. An unknown site
/// produces no slices.
pub fn outcome_series(dataset: &Dataset, selection: &SiteSelection) -> OutcomeSeries {
    match selection {
        SiteSelection::All => {
            let slices = dataset
                .sites()
                .into_iter()
                .map(|site| Slice {
                    label: site.to_string(),
                    value: dataset
                        .records()
                        .iter()
                        .filter(|r| r.launch_site == site && r.is_success())
                        .count(),
                })
                .collect();
            OutcomeSeries {
                title: "Total Success Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(code) => {
            let mut counts: HashMap<u8, usize> = HashMap::new();
            for r in dataset.records().iter().filter(|r| selection.matches(r)) {
                *counts.entry(r.outcome_class).or_insert(0) += 1;
            }
            let mut groups: Vec<(u8, usize)> = counts.into_iter().collect();
            groups.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            debug!("Outcome groups for site '{}': {:?}", code, groups);

            OutcomeSeries {
                title: format!("Total Success Launches for site {}", code),
                slices: groups
                    .into_iter()
                    .map(|(class, count)| Slice {
                        label: class.to_string(),
                        value: count,
                    })
                    .collect(),
            }
        }
    }
}

/// Payload/outcome points for the scatter chart.
///
/// A stable filter: points keep the dataset's row order.
pub fn payload_series(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> PayloadSeries {
    let points = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selection.matches(r))
        .map(|r| PayloadPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome_class: r.outcome_class,
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect();

    let title = match selection {
        SiteSelection::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteSelection::Site(code) => format!("Correlation between Payload and Success for {}", code),
    };

    PayloadSeries { title, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_CSV: &str = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
KSC LC-39A,5000,1,v1.1
KSC LC-39A,3000,0,v1.1
VAFB SLC-4E,7000,1,B4
";

    fn scenario() -> Dataset {
        read_launches_from_csv_str(SCENARIO_CSV).unwrap()
    }

    fn bundled() -> Dataset {
        read_launches_from_csv_str(include_str!("spacex_launch_dash.csv")).unwrap()
    }

    fn slice(label: &str, value: usize) -> Slice {
        Slice {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn loads_bundled_dataset_with_bounds() {
        let ds = bundled();
        assert_eq!(ds.len(), 56);
        assert_eq!(ds.payload_bounds(), (0.0, 9600.0));
        assert_eq!(
            ds.sites(),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
    }

    #[test]
    fn ignores_extra_columns() {
        let csv = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                   0,1,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0\n";
        let ds = read_launches_from_csv_str(csv).unwrap();
        assert_eq!(
            ds.records()[0],
            LaunchRecord {
                launch_site: "CCAFS LC-40".to_string(),
                payload_mass_kg: 525.0,
                outcome_class: 0,
                booster_version_category: "v1.0".to_string(),
            }
        );
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "Launch Site,class,Booster Version Category\nKSC LC-39A,1,FT\n";
        match read_launches_from_csv_str(csv) {
            Err(DatasetError::MissingColumn(name)) => assert_eq!(name, columns::PAYLOAD_MASS),
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn invalid_class_is_fatal() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,100,1,FT\n\
                   KSC LC-39A,100,2,FT\n";
        match read_launches_from_csv_str(csv) {
            Err(DatasetError::InvalidOutcome { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, 2);
            }
            other => panic!("expected invalid outcome, got {:?}", other),
        }
    }

    #[test]
    fn negative_payload_is_fatal() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,-5,1,FT\n";
        assert!(matches!(
            read_launches_from_csv_str(csv),
            Err(DatasetError::InvalidPayload { line: 2, .. })
        ));
    }

    #[test]
    fn unparsable_row_is_fatal() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,heavy,1,FT\n";
        let err = read_launches_from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn header_only_is_fatal() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        assert!(matches!(
            read_launches_from_csv_str(csv),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn site_selection_from_dropdown_value() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value(""),
            SiteSelection::Site(String::new())
        );
        assert_eq!(
            SiteSelection::from_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        assert_eq!(SiteSelection::Site("X".to_string()).value(), "X");
    }

    #[test]
    fn scenario_outcomes_for_all_sites() {
        let series = outcome_series(&scenario(), &SiteSelection::All);
        assert_eq!(series.title, "Total Success Launches by Site");
        assert_eq!(
            series.slices,
            vec![slice("KSC LC-39A", 1), slice("VAFB SLC-4E", 1)]
        );
    }

    #[test]
    fn scenario_outcomes_for_one_site() {
        let series = outcome_series(&scenario(), &SiteSelection::from_value("KSC LC-39A"));
        assert_eq!(series.title, "Total Success Launches for site KSC LC-39A");
        assert_eq!(series.slices, vec![slice("0", 1), slice("1", 1)]);
    }

    #[test]
    fn site_without_failures_has_single_slice() {
        let series = outcome_series(&scenario(), &SiteSelection::from_value("VAFB SLC-4E"));
        assert_eq!(series.slices, vec![slice("1", 1)]);
    }

    #[test]
    fn outcome_slices_ordered_by_count() {
        // CCAFS SLC-40 has four failures and three successes
        let series = outcome_series(&bundled(), &SiteSelection::from_value("CCAFS SLC-40"));
        assert_eq!(series.slices, vec![slice("0", 4), slice("1", 3)]);
    }

    #[test]
    fn all_sites_total_equals_success_count() {
        let ds = bundled();
        let series = outcome_series(&ds, &SiteSelection::All);
        assert_eq!(series.total(), ds.success_count());
        assert_eq!(series.slices.len(), ds.sites().len());
    }

    #[test]
    fn per_site_total_equals_site_rows() {
        let ds = bundled();
        for site in ds.sites() {
            let series = outcome_series(&ds, &SiteSelection::from_value(site));
            let rows = ds.records().iter().filter(|r| r.launch_site == site).count();
            assert_eq!(series.total(), rows, "site {}", site);
        }
    }

    #[test]
    fn unknown_site_yields_empty_series() {
        let ds = scenario();
        let series = outcome_series(&ds, &SiteSelection::from_value("CCAFS LC-40"));
        assert!(series.slices.is_empty());
        let points = payload_series(
            &ds,
            &SiteSelection::from_value("CCAFS LC-40"),
            PayloadRange::new(0.0, 10_000.0),
        );
        assert!(points.points.is_empty());
    }

    #[test]
    fn cleared_or_padded_site_value_matches_nothing() {
        let ds = bundled();
        let all_range = PayloadRange::new(0.0, 10_000.0);
        for value in ["", " KSC LC-39A ", "ksc lc-39a"] {
            let site = SiteSelection::from_value(value);
            assert_ne!(site, SiteSelection::All, "value {:?}", value);
            let outcomes = outcome_series(&ds, &site);
            assert!(outcomes.slices.is_empty(), "value {:?}", value);
            assert_eq!(
                outcomes.title,
                format!("Total Success Launches for site {}", value)
            );
            assert!(payload_series(&ds, &site, all_range).points.is_empty());
        }
    }

    #[test]
    fn scenario_payload_points() {
        let series = payload_series(
            &scenario(),
            &SiteSelection::All,
            PayloadRange::new(4000.0, 8000.0),
        );
        assert_eq!(
            series.title,
            "Correlation between Payload and Success for All Sites"
        );
        let got: Vec<(f64, u8, &str)> = series
            .points
            .iter()
            .map(|p| {
                (
                    p.payload_mass_kg,
                    p.outcome_class,
                    p.booster_version_category.as_str(),
                )
            })
            .collect();
        assert_eq!(got, vec![(5000.0, 1, "v1.1"), (7000.0, 1, "B4")]);
    }

    #[test]
    fn payload_range_is_inclusive() {
        let series = payload_series(
            &scenario(),
            &SiteSelection::from_value("KSC LC-39A"),
            PayloadRange::new(3000.0, 5000.0),
        );
        assert_eq!(
            series.title,
            "Correlation between Payload and Success for KSC LC-39A"
        );
        assert_eq!(series.points.len(), 2);
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let ds = bundled();
        let range = PayloadRange::new(8000.0, 2000.0);
        assert!(range.is_inverted());
        assert!(payload_series(&ds, &SiteSelection::All, range).points.is_empty());
    }

    #[test]
    fn dataset_bounds_return_every_record_in_order() {
        let ds = bundled();
        let (min, max) = ds.payload_bounds();
        let series = payload_series(&ds, &SiteSelection::All, PayloadRange::new(min, max));
        assert_eq!(series.points.len(), ds.len());
        for (point, record) in series.points.iter().zip(ds.records()) {
            assert_eq!(point.payload_mass_kg, record.payload_mass_kg);
            assert_eq!(point.booster_version_category, record.booster_version_category);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let ds = bundled();
        let site = SiteSelection::from_value("KSC LC-39A");
        let range = PayloadRange::new(2000.0, 6000.0);
        assert_eq!(outcome_series(&ds, &site), outcome_series(&ds, &site));
        assert_eq!(
            payload_series(&ds, &site, range),
            payload_series(&ds, &site, range)
        );
    }
}
