//! Enlistment: the ordered records of one document plus its settings

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use scalgo_units::Unit;
use tracing::{debug, trace};

use crate::error::{Result, ScalgoError};
use crate::parser::{classify, Line};
use crate::record::Record;
use crate::settings::{Directive, Settings};

/// Order of two base values: ascending, or descending when `reversed`.
///
/// Sorting and the unsorted reference scan both go through this function.
/// `-0.0` and `0.0` are equal; NaN falls back to the total order.
pub fn compare_base_values(a: f64, b: f64, reversed: bool) -> Ordering {
    let ordering = a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b));
    if reversed {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Index of the record ordered last by [`compare_base_values`]; the first
/// one found wins ties
fn extreme_index(records: &[Record], reversed: bool) -> usize {
    let mut best = 0;
    for (i, record) in records.iter().enumerate().skip(1) {
        let current = records[best].base_value();
        if compare_base_values(record.base_value(), current, reversed) == Ordering::Greater {
            best = i;
        }
    }
    best
}

/// Accumulates records and settings while a document is read
#[derive(Debug, Clone, Default)]
pub struct EnlistmentBuilder {
    records: Vec<Record>,
    settings: Settings,
}

impl EnlistmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn apply(&mut self, directive: Directive) {
        debug!(?directive, "applying setting");
        self.settings = self.settings.apply(directive);
    }

    /// Consume one raw line of the document
    pub fn read_line(&mut self, line: &str) -> Result<()> {
        match classify(line) {
            Line::Blank => trace!("skipping blank line"),
            Line::Comment(_) => trace!("skipping comment"),
            Line::Setting(setting) => self.apply(Directive::parse(setting)?),
            Line::Data(data) => self.push(Record::from_line(data)?),
        }
        Ok(())
    }

    /// Sort if configured, pick the reference record and default the scale
    pub fn finish(self) -> Result<Enlistment> {
        let EnlistmentBuilder { mut records, mut settings } = self;

        if records.is_empty() {
            return Err(ScalgoError::NoRecords);
        }

        let reference = if settings.sorted {
            records.sort_by(|a, b| {
                compare_base_values(a.base_value(), b.base_value(), settings.reversed)
            });
            0
        } else {
            extreme_index(&records, settings.reversed)
        };

        if settings.scale_unit.is_none() {
            settings.scale_unit = records[reference].unit();
        }

        debug!(
            records = records.len(),
            reference = records[reference].label(),
            sorted = settings.sorted,
            reversed = settings.reversed,
            "enlistment finalized"
        );

        Ok(Enlistment { records, reference, settings })
    }
}

/// A fully read document.
///
/// Always holds at least one record, and the reference record is always one
/// of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enlistment {
    records: Vec<Record>,
    reference: usize,
    #[serde(flatten)]
    settings: Settings,
}

impl Enlistment {
    /// Read a whole document from a line source
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut builder = EnlistmentBuilder::new();
        for line in reader.lines() {
            builder.read_line(&line?)?;
        }
        builder.finish()
    }

    /// Open and read a document file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScalgoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading enlistment");
        Self::from_reader(BufReader::new(file))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true for a successfully read document
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most extreme record under the current ordering
    pub fn reference(&self) -> &Record {
        &self.records[self.reference]
    }

    pub fn reference_index(&self) -> usize {
        self.reference
    }

    /// Unit values are presented in. `None` only when the reference record
    /// is unitless and no `@scale` was given.
    pub fn scale_unit(&self) -> Option<Unit> {
        self.settings.scale_unit
    }

    pub fn is_sorted(&self) -> bool {
        self.settings.sorted
    }

    pub fn is_reversed(&self) -> bool {
        self.settings.reversed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Stable sort by base value in the configured direction.
    ///
    /// The reference record keeps its identity and follows its record.
    pub fn sort_records(&mut self) {
        let reversed = self.settings.reversed;
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by(|&a, &b| {
            compare_base_values(
                self.records[a].base_value(),
                self.records[b].base_value(),
                reversed,
            )
        });

        if let Some(position) = order.iter().position(|&i| i == self.reference) {
            self.reference = position;
        }

        let mut slots: Vec<Option<Record>> =
            std::mem::take(&mut self.records).into_iter().map(Some).collect();
        self.records = order.iter().filter_map(|&i| slots[i].take()).collect();
        self.settings.sorted = true;
    }

    /// Re-run the sort step if the enlistment is configured as sorted.
    ///
    /// The reference record is already chosen and is kept.
    pub fn finalize(&mut self) {
        if self.settings.sorted {
            self.sort_records();
        }
    }

    /// Every record's value in the scale unit, or its base value when there
    /// is no scale unit
    pub fn scaled_values(&self) -> Result<Vec<f64>> {
        self.records
            .iter()
            .map(|record| match self.settings.scale_unit {
                Some(unit) => record.value_in(&unit),
                None => Ok(record.base_value()),
            })
            .collect()
    }
}

impl FromStr for Enlistment {
    type Err = ScalgoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl<'a> IntoIterator for &'a Enlistment {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalgo_units::TimeUnit;

    const SAMPLE: &str = "Label 1: 3.14 years\nLabel 2: 42 days\nLabel 3: 1.5 hours";

    fn labels(enlistment: &Enlistment) -> Vec<&str> {
        enlistment.iter().map(Record::label).collect()
    }

    #[test]
    fn test_compare_base_values() {
        assert_eq!(compare_base_values(1.0, 2.0, false), Ordering::Less);
        assert_eq!(compare_base_values(1.0, 2.0, true), Ordering::Greater);
        assert_eq!(compare_base_values(2.0, 2.0, true), Ordering::Equal);
    }

    #[test]
    fn test_signed_zeros_are_equal() {
        assert_eq!(compare_base_values(-0.0, 0.0, false), Ordering::Equal);
        assert_eq!(compare_base_values(0.0, -0.0, true), Ordering::Equal);
    }

    #[test]
    fn test_signed_zero_tie_keeps_input_order() {
        let enlistment: Enlistment = "a: 0\nb: -0".parse().unwrap();
        assert_eq!(labels(&enlistment), ["a", "b"]);

        let enlistment: Enlistment = "a: 0\nb: -0\n@reverse true".parse().unwrap();
        assert_eq!(labels(&enlistment), ["a", "b"]);
    }

    #[test]
    fn test_signed_zero_tie_does_not_displace_reference() {
        let enlistment: Enlistment = "a: -0 hours\nb: 0 seconds\n@sorted false".parse().unwrap();
        assert_eq!(enlistment.reference().label(), "a");

        let doc = "a: -0 hours\nb: 0 seconds\n@sorted false\n@reverse true";
        let enlistment: Enlistment = doc.parse().unwrap();
        assert_eq!(enlistment.reference().label(), "a");
    }

    #[test]
    fn test_extreme_index_first_occurrence_wins() {
        let records = vec![
            Record::new("a", 1.0, "").unwrap(),
            Record::new("b", 5.0, "").unwrap(),
            Record::new("c", 5.0, "").unwrap(),
            Record::new("d", 1.0, "").unwrap(),
        ];
        assert_eq!(extreme_index(&records, false), 1);
        assert_eq!(extreme_index(&records, true), 0);
    }

    #[test]
    fn test_default_sorted_ascending() {
        let enlistment: Enlistment = SAMPLE.parse().unwrap();
        assert_eq!(labels(&enlistment), ["Label 3", "Label 2", "Label 1"]);
        assert_eq!(enlistment.reference_index(), 0);
        assert_eq!(enlistment.reference().label(), "Label 3");
        assert_eq!(enlistment.scale_unit(), Some(Unit::Time(TimeUnit::Hour)));
        assert!(enlistment.is_sorted());
        assert!(!enlistment.is_reversed());
    }

    #[test]
    fn test_sorted_reversed() {
        let doc = format!("@reverse true\n{}", SAMPLE);
        let enlistment: Enlistment = doc.parse().unwrap();
        assert_eq!(labels(&enlistment), ["Label 1", "Label 2", "Label 3"]);
        assert_eq!(enlistment.reference().label(), "Label 1");
        assert_eq!(enlistment.scale_unit(), Some(Unit::Time(TimeUnit::Year)));
    }

    #[test]
    fn test_unsorted_keeps_order_and_scans_for_max() {
        let doc = format!("{}\n@sorted false", SAMPLE);
        let enlistment: Enlistment = doc.parse().unwrap();
        assert_eq!(labels(&enlistment), ["Label 1", "Label 2", "Label 3"]);
        assert_eq!(enlistment.reference().label(), "Label 1");
        assert!(!enlistment.is_sorted());
    }

    #[test]
    fn test_unsorted_reversed_scans_for_min() {
        let doc = format!("@sorted false\n@reverse true\n{}", SAMPLE);
        let enlistment: Enlistment = doc.parse().unwrap();
        assert_eq!(labels(&enlistment), ["Label 1", "Label 2", "Label 3"]);
        assert_eq!(enlistment.reference().label(), "Label 3");
    }

    #[test]
    fn test_scan_matches_last_sorted_position() {
        // distinct values: the scan lands on what a sort puts last
        let doc = "a: 3 days\nb: 1 week\nc: 2 hours\nd: 40 minutes\n@sorted false";
        for reversed in [false, true] {
            let mut enlistment: Enlistment =
                format!("{}\n@reverse {}", doc, reversed).parse().unwrap();
            let scanned = enlistment.reference().label().to_string();
            enlistment.sort_records();
            let last = enlistment.records().last().map(Record::label);
            assert_eq!(last, Some(scanned.as_str()));
        }
    }

    #[test]
    fn test_sorted_fast_path_agrees_with_scan_on_presorted_input() {
        let presorted = "a: 5 days\nb: 3 days\nc: 1 day";
        let sorted: Enlistment = format!("@reverse true\n{}", presorted).parse().unwrap();
        let scanned: Enlistment = format!("@sorted false\n{}", presorted).parse().unwrap();
        assert_eq!(sorted.records(), scanned.records());
        assert_eq!(sorted.reference(), scanned.reference());
    }

    #[test]
    fn test_scale_directive_wins() {
        let doc = format!("@scale day\n{}", SAMPLE);
        let enlistment: Enlistment = doc.parse().unwrap();
        assert_eq!(enlistment.scale_unit(), Some(Unit::Time(TimeUnit::Day)));
        assert_eq!(enlistment.reference().unit(), Some(Unit::Time(TimeUnit::Hour)));
    }

    #[test]
    fn test_stable_sort() {
        let doc = "first: 60 seconds\nsecond: 1 minute\nsmall: 1 second";
        let enlistment: Enlistment = doc.parse().unwrap();
        assert_eq!(labels(&enlistment), ["small", "first", "second"]);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut enlistment: Enlistment = SAMPLE.parse().unwrap();
        let before = enlistment.clone();
        enlistment.finalize();
        assert_eq!(enlistment, before);
    }

    #[test]
    fn test_sort_records_keeps_reference_identity() {
        let doc = format!("{}\n@sorted false", SAMPLE);
        let mut enlistment: Enlistment = doc.parse().unwrap();
        let reference = enlistment.reference().clone();
        enlistment.sort_records();
        assert!(enlistment.is_sorted());
        assert_eq!(enlistment.reference(), &reference);
        assert_eq!(enlistment.reference_index(), 2);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let doc = "# header\n\nLabel: 1 hour\n   \n# trailing\n";
        let enlistment: Enlistment = doc.parse().unwrap();
        assert_eq!(enlistment.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let err = "# only comments\n".parse::<Enlistment>().unwrap_err();
        assert!(matches!(err, ScalgoError::NoRecords));
        assert_eq!(err.to_string(), "No records found");

        assert!(matches!("".parse::<Enlistment>(), Err(ScalgoError::NoRecords)));
    }

    #[test]
    fn test_unknown_setting() {
        let err = "a: 1 h\n@unknown_setting".parse::<Enlistment>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown setting @unknown_setting");
    }

    #[test]
    fn test_invalid_line_aborts() {
        let doc = "Label 1: 3.14 years\nInvalid line\nLabel 3: 1.5 hours";
        let err = doc.parse::<Enlistment>().unwrap_err();
        assert_eq!(err.to_string(), "No colon found in input string");
    }

    #[test]
    fn test_unitless_reference_leaves_scale_unset() {
        let enlistment: Enlistment = "a: 3\nb: 1".parse().unwrap();
        assert_eq!(enlistment.scale_unit(), None);
        assert_eq!(enlistment.scaled_values().unwrap(), [1.0, 3.0]);
    }

    #[test]
    fn test_scaled_values() {
        let doc = "@scale minutes\nlunch: 1 hour\nbreak: 900 seconds";
        let enlistment: Enlistment = doc.parse().unwrap();
        assert_eq!(enlistment.scaled_values().unwrap(), [15.0, 60.0]);
    }

    #[test]
    fn test_scaled_values_mixed_unitless_fails() {
        let enlistment: Enlistment = "a: 1 hour\nb: 5".parse().unwrap();
        assert!(enlistment.scaled_values().is_err());
    }

    #[test]
    fn test_builder_state() {
        let mut builder = EnlistmentBuilder::new();
        builder.read_line("@sorted false").unwrap();
        builder.read_line("x: 2 days").unwrap();
        assert!(!builder.settings().sorted);
        assert_eq!(builder.records().len(), 1);
        let enlistment = builder.finish().unwrap();
        assert_eq!(enlistment.reference().label(), "x");
    }

    #[test]
    fn test_serialize() {
        let enlistment: Enlistment = "a: 2 hours".parse().unwrap();
        let json = serde_json::to_value(&enlistment).unwrap();
        assert_eq!(json["reference"], 0);
        assert_eq!(json["sorted"], true);
        assert_eq!(json["reversed"], false);
        assert_eq!(json["records"][0]["label"], "a");
        assert_eq!(json["records"][0]["base_value"], 7200.0);
        assert_eq!(json["scale_unit"]["unit"], "hour");
    }
}
