//! UTC time of day, calendar dates and local zones.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1, one_of},
    combinator::{opt, recognize, verify},
    error::ParseError,
    number::complete::double,
    sequence::separated_pair,
};

use super::{number::print_fixed, separator, within_field};
use crate::{EncodeError, FieldParse, FieldPrint, FieldWriter, IResult};

/// UTC time of day, `hhmmss[.ss]` on the wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Utc {
    pub hour: u8,
    pub minute: u8,
    /// Seconds including the fraction; a leap second may reach 60.
    pub second: f64,
}

impl Utc {
    pub fn new(hour: u8, minute: u8, second: f64) -> Self {
        Utc {
            hour,
            minute,
            second,
        }
    }

    /// Seconds since midnight.
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second
    }
}

/// Exactly two decimal digits.
fn two_digits<'a, E>(i: &'a str) -> nom::IResult<&'a str, u8, E>
where
    E: ParseError<&'a str>,
{
    take_while_m_n(2, 2, |c: char| c.is_ascii_digit())
        .and_then(nom::character::complete::u8)
        .parse(i)
}

/// `ss[.s...]`: two whole digits and an optional fraction.
fn seconds<'a, E>(i: &'a str) -> nom::IResult<&'a str, f64, E>
where
    E: ParseError<&'a str>,
{
    recognize((two_digits, opt((char('.'), digit1))))
        .and_then(double)
        .parse(i)
}

impl<'a, E> FieldParse<&'a str, E> for Utc
where
    E: ParseError<&'a str>,
{
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        within_field(
            (
                verify(two_digits, |hour: &u8| *hour <= 23),
                verify(two_digits, |minute: &u8| *minute <= 59),
                verify(seconds, |second: &f64| *second < 61.0),
            )
                .map(|(hour, minute, second)| Utc::new(hour, minute, second)),
        )
        .parse(i)
    }
}

impl FieldPrint for Utc {
    /// Hour and minute are reduced modulo 24 and 60, so any value prints as a
    /// legal wall-clock time. Seconds are range checked after rounding to the
    /// writer's precision.
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        let precision = w.precision();
        let scale = 10f64.powi(precision as i32);
        let second = (self.second * scale).round() / scale;
        if !(0.0..61.0).contains(&self.second) || second >= 61.0 {
            return Err(EncodeError::InvalidParameter("seconds out of range"));
        }

        write!(w, "{:02}{:02}", self.hour % 24, self.minute % 60)?;
        let width = if precision == 0 { 2 } else { precision + 3 };
        print_fixed(second, precision, width, w)
    }
}

/// Calendar date, `ddmmyy` on the wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    /// Four-digit year.
    pub year: u16,
}

impl<'a, E> FieldParse<&'a str, E> for Date
where
    E: ParseError<&'a str>,
{
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        within_field(
            (
                verify(two_digits, |day: &u8| (1..=31).contains(day)),
                verify(two_digits, |month: &u8| (1..=12).contains(month)),
                two_digits,
            )
                .map(|(day, month, yy)| {
                    let yy = u16::from(yy);
                    let year = if yy >= 83 { 1900 + yy } else { 2000 + yy };
                    Date { day, month, year }
                }),
        )
        .parse(i)
    }
}

impl FieldPrint for Date {
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        if !(1..=31).contains(&self.day) || !(1..=12).contains(&self.month) {
            return Err(EncodeError::InvalidParameter("date out of range"));
        }
        write!(w, "{:02}{:02}{:02}", self.day, self.month, self.year % 100)
    }
}

/// Local zone offset from UTC, `±hh,mm` on the wire.
///
/// Both components carry the sign of the zone.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalZone {
    pub hours: i8,
    pub minutes: i8,
}

impl LocalZone {
    pub fn from_minutes(total: i16) -> Option<Self> {
        if total.unsigned_abs() > 13 * 60 + 59 {
            return None;
        }
        Some(LocalZone {
            hours: (total / 60) as i8,
            minutes: (total % 60) as i8,
        })
    }

    pub fn total_minutes(&self) -> i16 {
        i16::from(self.hours) * 60 + i16::from(self.minutes)
    }
}

impl<'a, E> FieldParse<&'a str, E> for LocalZone
where
    E: ParseError<&'a str>,
{
    const SUBFIELDS: usize = 2;

    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        let hours = (
            opt(one_of("+-")),
            verify(
                take_while_m_n(1, 2, |c: char| c.is_ascii_digit())
                    .and_then(nom::character::complete::i8),
                |hours: &i8| *hours <= 13,
            ),
        );
        let minutes = verify(two_digits, |minutes: &u8| *minutes <= 59);

        separated_pair(within_field(hours), separator, within_field(minutes))
            .map(|((sign, hours), minutes)| {
                let minutes = minutes as i8;
                match sign {
                    Some('-') => LocalZone {
                        hours: -hours,
                        minutes: -minutes,
                    },
                    _ => LocalZone { hours, minutes },
                }
            })
            .parse(i)
    }
}

impl FieldPrint for LocalZone {
    const SUBFIELDS: usize = 2;

    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        let negative = self.hours < 0 || self.minutes < 0;
        if (self.hours > 0 && self.minutes < 0)
            || (self.hours < 0 && self.minutes > 0)
            || self.hours.unsigned_abs() > 13
            || self.minutes.unsigned_abs() > 59
        {
            return Err(EncodeError::InvalidParameter("local zone out of range"));
        }

        if negative {
            w.push('-')?;
        }
        write!(
            w,
            "{:02},{:02}",
            self.hours.unsigned_abs(),
            self.minutes.unsigned_abs()
        )
    }
}

#[cfg(feature = "time")]
mod time_conversions {
    use super::{Date, LocalZone, Utc};

    impl TryFrom<Utc> for time::Time {
        type Error = time::error::ComponentRange;

        fn try_from(utc: Utc) -> Result<Self, Self::Error> {
            let whole = utc.second.trunc();
            let nanos = ((utc.second - whole) * 1e9).round() as u32;
            time::Time::from_hms_nano(utc.hour, utc.minute, whole as u8, nanos.min(999_999_999))
        }
    }

    impl From<time::Time> for Utc {
        fn from(t: time::Time) -> Self {
            Utc::new(
                t.hour(),
                t.minute(),
                f64::from(t.second()) + f64::from(t.nanosecond()) / 1e9,
            )
        }
    }

    impl TryFrom<Date> for time::Date {
        type Error = time::error::ComponentRange;

        fn try_from(date: Date) -> Result<Self, Self::Error> {
            let month = time::Month::try_from(date.month)?;
            time::Date::from_calendar_date(i32::from(date.year), month, date.day)
        }
    }

    impl From<time::Date> for Date {
        fn from(d: time::Date) -> Self {
            Date {
                day: d.day(),
                month: u8::from(d.month()),
                year: d.year().rem_euclid(10_000) as u16,
            }
        }
    }

    impl TryFrom<LocalZone> for time::UtcOffset {
        type Error = time::error::ComponentRange;

        fn try_from(zone: LocalZone) -> Result<Self, Self::Error> {
            time::UtcOffset::from_hms(zone.hours, zone.minutes, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, print::print_to_string};

    #[test]
    fn utc_requires_six_digits() {
        let result: IResult<_, _> = Utc::parse("123519.25,");
        assert_eq!(result, Ok((",", Utc::new(12, 35, 19.25))));

        let result: IResult<_, _> = Utc::parse("000000*");
        assert_eq!(result, Ok(("*", Utc::new(0, 0, 0.0))));

        for input in ["12351,", "1235190,", "12a519,", "123519.,", "243519,", "126019,"] {
            let result: IResult<_, Utc> = Utc::parse(input);
            assert!(
                matches!(result, Err(nom::Err::Error(Error::InvalidField(_)))),
                "{input}"
            );
        }
    }

    #[test]
    fn utc_prints_padded_seconds() {
        assert_eq!(
            print_to_string(&Utc::new(9, 5, 3.5), 3).unwrap().as_str(),
            "090503.5"
        );
        assert_eq!(
            print_to_string(&Utc::new(23, 59, 59.0), 2).unwrap().as_str(),
            "235959"
        );
        assert_eq!(
            print_to_string(&Utc::new(1, 2, 3.0), 0).unwrap().as_str(),
            "010203"
        );
    }

    #[test]
    fn utc_seconds_are_checked_after_rounding() {
        assert!(matches!(
            print_to_string(&Utc::new(12, 0, 60.9996), 3),
            Err(EncodeError::InvalidParameter(_))
        ));

        let printed = print_to_string(&Utc::new(12, 0, 60.9994), 3).unwrap();
        assert_eq!(printed.as_str(), "120060.999");

        let mut field = heapless::String::<16>::new();
        field.push_str(&printed).unwrap();
        field.push('*').unwrap();
        let result: IResult<_, Utc> = Utc::parse(field.as_str());
        let (_, utc) = result.unwrap();
        assert!((utc.second - 60.999).abs() < 1e-9);

        assert_eq!(
            print_to_string(&Utc::new(8, 15, 59.9996), 3).unwrap().as_str(),
            "081560"
        );
    }

    #[test]
    fn utc_wraps_hour_and_minute() {
        assert_eq!(
            print_to_string(&Utc::new(25, 61, 7.0), 3).unwrap().as_str(),
            "010107"
        );
    }

    #[test]
    fn date_maps_two_digit_years() {
        let result: IResult<_, _> = Date::parse("230394,");
        assert_eq!(
            result,
            Ok((
                ",",
                Date {
                    day: 23,
                    month: 3,
                    year: 1994
                }
            ))
        );

        let result: IResult<_, _> = Date::parse("010124*");
        assert_eq!(
            result,
            Ok((
                "*",
                Date {
                    day: 1,
                    month: 1,
                    year: 2024
                }
            ))
        );

        let result: IResult<_, Date> = Date::parse("011324,");
        assert!(result.is_err());
    }

    #[test]
    fn local_zone_carries_sign_on_both_parts() {
        let result: IResult<_, _> = LocalZone::parse("-00,30*");
        assert_eq!(
            result,
            Ok((
                "*",
                LocalZone {
                    hours: 0,
                    minutes: -30
                }
            ))
        );

        let zone = LocalZone::from_minutes(-330).unwrap();
        assert_eq!(zone, LocalZone { hours: -5, minutes: -30 });
        assert_eq!(print_to_string(&zone, 3).unwrap().as_str(), "-05,30");
        assert_eq!(
            print_to_string(&LocalZone { hours: 3, minutes: 0 }, 3)
                .unwrap()
                .as_str(),
            "03,00"
        );

        assert_eq!(LocalZone::from_minutes(i16::MIN), None);
        assert_eq!(LocalZone::from_minutes(-(13 * 60 + 59)).map(|z| z.hours), Some(-13));

        let mixed = LocalZone {
            hours: 2,
            minutes: -15,
        };
        assert!(matches!(
            print_to_string(&mixed, 3),
            Err(EncodeError::InvalidParameter(_))
        ));
    }
}
