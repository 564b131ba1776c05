mod active_state;
mod circulation_history;
mod form_data;
mod work_order;

pub use active_state::{ActiveState, ProcessMethod};
pub use circulation_history::CirculationHistory;
pub use form_data::FormData;
pub use work_order::WorkOrder;
