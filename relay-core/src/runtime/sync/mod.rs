mod lock;

pub use lock::Lock;
