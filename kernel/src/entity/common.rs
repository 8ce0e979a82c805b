mod flag;

pub use self::flag::*;
