use strum_macros::{Display, EnumIter};

/// Direction of the price between the first and last record of a week.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Trend {
    Upward,
    Downward,
    #[strum(serialize = "No significant change")]
    NoSignificantChange,
}
