mod work_order_dao_facade;

pub use work_order_dao_facade::{WorkOrderDaoFacade, WorkOrderSnapshot};
