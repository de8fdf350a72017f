pub mod device;
pub mod reading;
pub mod session;
pub mod session_set;
