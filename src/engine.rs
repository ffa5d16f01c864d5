use crate::catalog::FuelFilter;
use crate::errors::StatementError;
use crate::record::{Month, RefuelRecord};
use crate::stats::{compute_extremes, Extremes, Highlight};
use serde::Serialize;
use tracing::debug;

/// Accumulates the refuelings of one calendar month.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyBucket {
    label: String,
    total_price: f64,
    total_amount: f64,
    month: Month,
}

impl MonthlyBucket {
    fn empty(label: &str, month: Month) -> Self {
        Self {
            label: label.to_string(),
            total_price: 0.0,
            total_amount: 0.0,
            month,
        }
    }

    fn merge(&mut self, record: &RefuelRecord) {
        self.total_price += record.unit_price();
        self.total_amount += record.amount();
    }

    /// The fuel type, or "all" for the combined selection.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Sum of the unit prices of all merged records.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Sum of the amounts of all merged records.
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// The value reported for this month.
    ///
    /// Note: this multiplies the accumulated sums, it is not the sum of the
    /// per-record costs. With more than one refueling in a month the two
    /// differ; the behavior is kept as observed in existing reports.
    pub fn value(&self) -> f64 {
        self.total_price * self.total_amount
    }
}

/// One line of a report statement.
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportRow {
    pub month: &'static str,

    /// The monthly value with three decimals.
    pub value: String,
    pub highlight: Highlight,
}

/// Twelve monthly buckets for one fuel type selection, January first, along
/// with the extremes of their values.
#[derive(Clone, Debug)]
pub struct Report {
    selection: FuelFilter,
    buckets: [MonthlyBucket; 12],
    extremes: Extremes,
}

impl Report {
    pub fn selection(&self) -> &FuelFilter {
        &self.selection
    }

    pub fn buckets(&self) -> &[MonthlyBucket; 12] {
        &self.buckets
    }

    pub fn extremes(&self) -> Extremes {
        self.extremes
    }

    /// The monthly values, index 0 being January.
    pub fn values(&self) -> [f64; 12] {
        values_of(&self.buckets)
    }

    /// The monthly values paired with their month.
    pub fn series(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        self.buckets
            .iter()
            .map(|bucket| (bucket.month(), bucket.value()))
    }

    pub fn highlight(&self, month: Month) -> Highlight {
        self.extremes.classify(self.buckets[month.index()].value())
    }

    pub fn rows(&self) -> impl Iterator<Item = ReportRow> + '_ {
        self.series().map(move |(month, value)| ReportRow {
            month: month.abbreviation(),
            value: format!("{:.3}", value),
            highlight: self.extremes.classify(value),
        })
    }

    /// Attempts to render the report as a CSV statement with one row per
    /// month.
    pub fn to_csv(&self) -> Result<String, StatementError> {
        let mut buf = Vec::new();
        {
            let mut wtr = csv::Writer::from_writer(&mut buf);

            for row in self.rows() {
                wtr.serialize(row)?;
            }

            wtr.flush().map_err(csv::Error::from)?;
        }

        Ok(String::from_utf8(buf)?)
    }
}

/// Aggregates the records matching `selection` into twelve monthly buckets.
///
/// Every month is present in the result. Months without matching records
/// keep zero totals.
pub fn build_report(records: &[RefuelRecord], selection: &FuelFilter) -> Report {
    let mut buckets: [MonthlyBucket; 12] = std::array::from_fn(|index| {
        MonthlyBucket::empty(selection.label(), Month::from_index(index))
    });

    let mut matched = 0usize;
    for record in records.iter().filter(|record| selection.matches(record)) {
        buckets[record.month().index()].merge(record);
        matched += 1;
    }

    let extremes = compute_extremes(&values_of(&buckets));
    debug!(
        selection = %selection,
        matched,
        max = extremes.max,
        min = extremes.min,
        "built monthly report"
    );

    Report {
        selection: selection.clone(),
        buckets,
        extremes,
    }
}

fn values_of(buckets: &[MonthlyBucket; 12]) -> [f64; 12] {
    let mut values = [0.0; 12];
    for (value, bucket) in values.iter_mut().zip(buckets) {
        *value = bucket.value();
    }
    values
}
