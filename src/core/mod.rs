pub mod record;
pub mod scale;
pub mod time_of_day;
pub mod time_scale;
pub mod types;
pub mod year_scale;

pub use record::{Record, parse_records_json};
pub use scale::{LinearScale, nice_tick_step, nice_ticks};
pub use time_of_day::TimeOfDay;
pub use time_scale::{FALLBACK_TIME_DOMAIN_SECONDS, TimeOfDayScale};
pub use types::{Padding, PlotArea, Viewport};
pub use year_scale::{FALLBACK_YEAR_DOMAIN, YearScale};
