mod properties;

pub use properties::{Locale, Properties};
