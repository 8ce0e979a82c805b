pub use self::inmemory::*;

mod inmemory;
