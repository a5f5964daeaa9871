pub mod cow;

pub use cow::{cow, CowReadHandle, CowWriteHandle, Update};
