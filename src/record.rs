use crate::errors::{Malformation, NumericField, ParseError};
use csv::StringRecord;
use std::fmt;
use std::fmt::Formatter;
use tracing::{debug, warn};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, always within 1..=12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    /// Iterates over January through December.
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 12);
        Month(index as u8 + 1)
    }

    /// The month number, 1 for January.
    pub fn number(self) -> u32 {
        u32::from(self.0)
    }

    /// The zero-based position of this month in a twelve bucket series.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// English three letter name, e.g. "Mar". Callers that need localized
    /// names should map [`Month::number`] themselves.
    pub fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[self.index()]
    }
}

impl TryFrom<u32> for Month {
    type Error = u32;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        match number {
            1..=12 => Ok(Month(number as u8)),
            _ => Err(number),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// A single validated refueling.
#[derive(Clone, Debug, PartialEq)]
pub struct RefuelRecord {
    fuel_type: String,
    unit_price: f64,
    amount: f64,
    month: Month,
}

impl RefuelRecord {
    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Builds a record from the four pipe separated fields of one input
    /// record. `record` is the 1-based position used in error reports.
    fn from_fields(record: usize, fields: &StringRecord) -> Result<Self, Malformation> {
        if fields.len() != 4 {
            return Err(Malformation::FieldCount {
                record,
                found: fields.len(),
            });
        }

        let name = &fields[0];
        if name.is_empty() {
            return Err(Malformation::EmptyName { record });
        }

        let unit_price = parse_decimal(record, NumericField::Price, &fields[1])?;
        let amount = parse_decimal(record, NumericField::Amount, &fields[2])?;
        let month = parse_month(record, &fields[3])?;

        Ok(Self {
            fuel_type: name.to_string(),
            unit_price,
            amount,
            month,
        })
    }
}

/// Parses the full text of a refueling file.
///
/// Records are separated by whitespace and each record has the form
/// `name|price|amount|date`, where price and amount use a decimal comma and
/// the date is `day.month.year`. Only the month of the date is kept.
///
/// Parsing is all or nothing: the first invalid record rejects the whole
/// input and no partial list is returned. Input without any record is
/// rejected as well.
pub fn parse(text: &str) -> Result<Vec<RefuelRecord>, ParseError> {
    let result = parse_records(text);

    match &result {
        Ok(records) => debug!(records = records.len(), "parsed refueling input"),
        Err(err) => warn!(reason = %err.malformation(), "rejected refueling input"),
    }

    result
}

fn parse_records(text: &str) -> Result<Vec<RefuelRecord>, ParseError> {
    // One record per line so the csv reader only has to deal with the pipe
    // delimited fields.
    let lines = text.split_whitespace().collect::<Vec<_>>().join("\n");
    if lines.is_empty() {
        return Err(Malformation::Empty.into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(lines.as_bytes());

    let mut records = Vec::new();
    for (index, fields) in reader.records().enumerate() {
        let record = index + 1;
        let fields = fields.map_err(|err| Malformation::Unreadable {
            record,
            message: err.to_string(),
        })?;

        records.push(RefuelRecord::from_fields(record, &fields)?);
    }

    Ok(records)
}

fn parse_decimal(record: usize, field: NumericField, raw: &str) -> Result<f64, Malformation> {
    let invalid = || Malformation::InvalidNumber {
        record,
        field,
        value: raw.to_string(),
    };

    let value: f64 = raw.replace(',', ".").parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    if value < 0.0 {
        return Err(Malformation::Negative {
            record,
            field,
            value,
        });
    }

    Ok(value)
}

fn parse_month(record: usize, raw: &str) -> Result<Month, Malformation> {
    let number: u32 = raw
        .split('.')
        .nth(1)
        .and_then(|month| month.parse().ok())
        .ok_or_else(|| Malformation::InvalidDate {
            record,
            value: raw.to_string(),
        })?;

    Month::try_from(number).map_err(|month| Malformation::MonthOutOfRange { record, month })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformation(text: &str) -> Malformation {
        parse(text).unwrap_err().malformation().clone()
    }

    #[test]
    fn should_parse_records_with_decimal_commas() {
        let records = parse("Diesel|1,50|40,00|15.03.2021\nDiesel|1,60|42,00|20.04.2021").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fuel_type(), "Diesel");
        assert!((records[0].unit_price() - 1.5).abs() < 1e-9);
        assert!((records[0].amount() - 40.0).abs() < 1e-9);
        assert_eq!(records[0].month().number(), 3);
        assert_eq!(records[1].month().number(), 4);
    }

    #[test]
    fn should_split_records_on_any_whitespace() {
        let text = "  Super95|1,40|30|01.01.2021\t\tLPG|0,70|25,5|02.02.2021 \r\n\nDiesel|1,5|10|03.12.2020 ";
        let records = parse(text).unwrap();

        let types: Vec<&str> = records.iter().map(|r| r.fuel_type()).collect();
        assert_eq!(types, vec!["Super95", "LPG", "Diesel"]);
        assert!((records[1].amount() - 25.5).abs() < 1e-9);
        assert_eq!(records[2].month(), Month::try_from(12u32).unwrap());
    }

    #[test]
    fn should_reject_negative_price() {
        let text = "Diesel|1,50|40,00|15.03.2021 Diesel|-1,00|42,00|20.04.2021";

        assert_eq!(
            malformation(text),
            Malformation::Negative {
                record: 2,
                field: NumericField::Price,
                value: -1.0
            }
        );
    }

    #[test]
    fn should_reject_negative_amount() {
        assert_eq!(
            malformation("Diesel|1,50|-0,5|15.03.2021"),
            Malformation::Negative {
                record: 1,
                field: NumericField::Amount,
                value: -0.5
            }
        );
    }

    #[test]
    fn should_reject_non_numeric_fields() {
        assert_eq!(
            malformation("Diesel|abc|40,00|15.03.2021"),
            Malformation::InvalidNumber {
                record: 1,
                field: NumericField::Price,
                value: "abc".to_string()
            }
        );
        assert_eq!(
            malformation("Diesel|1,50|NaN|15.03.2021"),
            Malformation::InvalidNumber {
                record: 1,
                field: NumericField::Amount,
                value: "NaN".to_string()
            }
        );
    }

    #[test]
    fn should_reject_wrong_field_count() {
        assert_eq!(
            malformation("Diesel|1,50|40,00"),
            Malformation::FieldCount {
                record: 1,
                found: 3
            }
        );
        assert_eq!(
            malformation("Diesel|1,50|40,00|15.03.2021|extra"),
            Malformation::FieldCount {
                record: 1,
                found: 5
            }
        );
    }

    #[test]
    fn should_reject_empty_fuel_type() {
        assert_eq!(
            malformation("|1,50|40,00|15.03.2021"),
            Malformation::EmptyName { record: 1 }
        );
    }

    #[test]
    fn should_reject_bad_dates() {
        assert_eq!(
            malformation("Diesel|1,50|40,00|2021"),
            Malformation::InvalidDate {
                record: 1,
                value: "2021".to_string()
            }
        );
        assert_eq!(
            malformation("Diesel|1,50|40,00|15.March.2021"),
            Malformation::InvalidDate {
                record: 1,
                value: "15.March.2021".to_string()
            }
        );
        assert_eq!(
            malformation("Diesel|1,50|40,00|15.13.2021"),
            Malformation::MonthOutOfRange {
                record: 1,
                month: 13
            }
        );
        assert_eq!(
            malformation("Diesel|1,50|40,00|15.00.2021"),
            Malformation::MonthOutOfRange {
                record: 1,
                month: 0
            }
        );
    }

    #[test]
    fn should_reject_empty_input() {
        assert_eq!(malformation(""), Malformation::Empty);
        assert_eq!(malformation(" \n\t "), Malformation::Empty);
    }

    #[test]
    fn should_fail_whole_input_on_single_bad_record() {
        let text = "Diesel|1,50|40,00|15.03.2021 LPG|0,70|20|01.05.2021 LPG|0,70|x|01.06.2021";

        assert!(matches!(
            parse(text),
            Err(ParseError::MalformedInput(Malformation::InvalidNumber { record: 3, .. }))
        ));
    }

    #[test]
    fn should_treat_quotes_as_plain_text() {
        let records = parse("\"Diesel\"|1,50|40,00|15.03.2021").unwrap();
        assert_eq!(records[0].fuel_type(), "\"Diesel\"");
    }

    #[test]
    fn should_name_months() {
        let names: Vec<&str> = Month::all().map(Month::abbreviation).collect();
        assert_eq!(names.first(), Some(&"Jan"));
        assert_eq!(names.last(), Some(&"Dec"));
        assert_eq!(names.len(), 12);
        assert_eq!(Month::try_from(0u32), Err(0));
    }
}
