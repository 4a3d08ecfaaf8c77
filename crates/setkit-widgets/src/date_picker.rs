//! Date and time picker

use crate::control::Control;
use crate::view::View;
use crate::widget::target_mut;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use setkit_core::setter::Setter;
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePickerMode {
    Time,
    Date,
    #[default]
    DateAndTime,
    CountDownTimer,
    YearAndMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePickerStyle {
    #[default]
    Automatic,
    Wheels,
    Compact,
    Inline,
}

#[derive(Debug, Clone, Setters)]
pub struct DatePicker {
    #[set(parent, ancestors(View))]
    pub control: Control,
    pub date: DateTime<Utc>,
    pub mode: DatePickerMode,
    #[set(strip_option)]
    pub minimum_date: Option<DateTime<Utc>>,
    #[set(strip_option)]
    pub maximum_date: Option<DateTime<Utc>>,
    /// Minute wheel granularity
    pub minute_interval: u32,
    /// Value of a count-down timer picker
    pub count_down_duration: Duration,
    #[set(strip_option)]
    pub time_zone: Option<FixedOffset>,
    /// BCP 47 identifier; `None` uses the current locale
    #[set(into, strip_option)]
    pub locale: Option<String>,
    pub preferred_style: DatePickerStyle,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self {
            control: Control::default(),
            date: Utc::now(),
            mode: DatePickerMode::default(),
            minimum_date: None,
            maximum_date: None,
            minute_interval: 1,
            count_down_duration: Duration::zero(),
            time_zone: None,
            locale: None,
            preferred_style: DatePickerStyle::default(),
        }
    }
}

impl DatePicker {
    /// The date a user would see, pinned into the minimum/maximum range
    pub fn displayed_date(&self) -> DateTime<Utc> {
        let mut date = self.date;
        if let Some(minimum) = self.minimum_date {
            date = date.max(minimum);
        }
        if let Some(maximum) = self.maximum_date {
            date = date.min(maximum);
        }
        date
    }
}

pub trait DatePickerSetterExt: Sized {
    fn date_animated(self, date: DateTime<Utc>, animated: bool) -> Self;
}

impl<'a, B> DatePickerSetterExt for Setter<'a, B>
where
    B: AsMut<DatePicker> + ?Sized,
{
    fn date_animated(mut self, date: DateTime<Utc>, animated: bool) -> Self {
        target_mut::<DatePicker, _>(&mut self).date = date;
        tracing::trace!(target: "setkit::setter", widget = "DatePicker", %date, animated);
        self
    }
}
